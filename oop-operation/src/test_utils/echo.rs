//! Echo — returns its arguments as a JSON array.

use crate::behavior::Behavior;
use crate::{OperationError, Value};

/// A behavior that returns the merged argument list as a JSON array.
/// Handy for checking argument order without any bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Echo;

impl Behavior for Echo {
    fn implementation(&self, args: &[Value]) -> Result<Value, OperationError> {
        Ok(Value::Array(args.to_vec()))
    }
}
