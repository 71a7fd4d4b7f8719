//! The Behavior protocol — what an operation does when finally invoked.

use crate::{OperationError, Value};
use std::sync::Arc;

/// The computation behind an [`Operation`](crate::Operation).
///
/// A behavior receives the merged argument list (bound arguments first,
/// then call-time arguments) and returns a single value. It is the only
/// extension point: concrete operations are types implementing this
/// trait.
///
/// Arity is the behavior's own business. A behavior that needs exactly
/// two numbers checks for that and returns
/// [`OperationError::InvalidArgument`] or [`OperationError::Arity`].
pub trait Behavior: Send + Sync {
    /// Human-readable name, used in errors and trace events.
    /// Defaults to the unqualified type name.
    fn name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Run the computation on the merged arguments.
    fn implementation(&self, args: &[Value]) -> Result<Value, OperationError>;
}

fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<B: Behavior + ?Sized> Behavior for Arc<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn implementation(&self, args: &[Value]) -> Result<Value, OperationError> {
        (**self).implementation(args)
    }
}

impl<B: Behavior + ?Sized> Behavior for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn implementation(&self, args: &[Value]) -> Result<Value, OperationError> {
        (**self).implementation(args)
    }
}

/// The abstract base behavior. Every invocation fails with
/// [`OperationError::Unimplemented`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unimplemented;

impl Behavior for Unimplemented {
    fn implementation(&self, _args: &[Value]) -> Result<Value, OperationError> {
        Err(OperationError::unimplemented(self.name()))
    }
}

/// A behavior backed by a closure.
pub struct FnBehavior<F> {
    name: String,
    f: F,
}

impl<F> std::fmt::Debug for FnBehavior<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnBehavior").field("name", &self.name).finish()
    }
}

impl<F> Behavior for FnBehavior<F>
where
    F: Fn(&[Value]) -> Result<Value, OperationError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn implementation(&self, args: &[Value]) -> Result<Value, OperationError> {
        (self.f)(args)
    }
}

/// Create a named behavior from a closure.
///
/// ```
/// use oop_operation::{Behavior, Value, behavior_fn};
///
/// let count = behavior_fn("count", |args: &[Value]| Ok(Value::from(args.len())));
/// assert_eq!(count.name(), "count");
/// assert_eq!(count.implementation(&[Value::Null, Value::Null]).unwrap(), Value::from(2));
/// ```
#[must_use]
pub fn behavior_fn<F>(name: impl Into<String>, f: F) -> FnBehavior<F>
where
    F: Fn(&[Value]) -> Result<Value, OperationError> + Send + Sync,
{
    FnBehavior {
        name: name.into(),
        f,
    }
}
