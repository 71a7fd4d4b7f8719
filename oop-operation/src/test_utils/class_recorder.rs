//! ClassRecorder — observes operations built through class-level entry
//! points.

use crate::behavior::Behavior;
use crate::{OperationError, Value};
use std::cell::{Cell, RefCell};

thread_local! {
    static JOURNAL: RefCell<Vec<Vec<Value>>> = const { RefCell::new(Vec::new()) };
    static INSTANCES: Cell<usize> = const { Cell::new(0) };
}

/// A behavior whose instances all record into one per-thread journal.
///
/// Class-level entry points such as
/// [`OperationClass::as_mapper`](crate::OperationClass::as_mapper) build
/// their own instance from `Default`, so a test has no handle to it.
/// Every `ClassRecorder` writes to the same journal instead, which the
/// test drains with [`ClassRecorder::take_calls`]. Tests run on their own
/// threads, so journals never mix.
#[derive(Debug)]
pub struct ClassRecorder {
    _private: (),
}

impl ClassRecorder {
    /// Drain the journal, oldest invocation first.
    pub fn take_calls() -> Vec<Vec<Value>> {
        JOURNAL.with(|journal| journal.take())
    }

    /// How many instances were built via `Default` on this thread, and
    /// reset the counter.
    pub fn take_instance_count() -> usize {
        INSTANCES.with(|count| count.replace(0))
    }
}

impl Default for ClassRecorder {
    fn default() -> Self {
        INSTANCES.with(|count| count.set(count.get() + 1));
        Self { _private: () }
    }
}

impl Behavior for ClassRecorder {
    fn implementation(&self, args: &[Value]) -> Result<Value, OperationError> {
        JOURNAL.with(|journal| journal.borrow_mut().push(args.to_vec()));
        Ok(Value::Null)
    }
}
