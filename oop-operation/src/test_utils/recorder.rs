//! Recorder — remembers every invocation and returns a canned value.

use crate::behavior::Behavior;
use crate::{OperationError, Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A behavior that records the argument list of every invocation and
/// returns a fixed value (`null` unless set with [`Recorder::returning`]).
///
/// Clones share one log, so a test can keep a clone and hand the other
/// to an operation.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
    returns: Value,
}

impl Recorder {
    /// A recorder returning `null`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder returning `value` from every invocation.
    pub fn returning(value: impl Into<Value>) -> Self {
        Self {
            calls: Arc::default(),
            returns: value.into(),
        }
    }

    fn log(&self) -> MutexGuard<'_, Vec<Vec<Value>>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return a snapshot of every recorded argument list, oldest first.
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.log().clone()
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.log().len()
    }

    /// The most recent argument list, if any.
    pub fn last_call(&self) -> Option<Vec<Value>> {
        self.log().last().cloned()
    }
}

impl Behavior for Recorder {
    fn implementation(&self, args: &[Value]) -> Result<Value, OperationError> {
        self.log().push(args.to_vec());
        Ok(self.returns.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_recording_after_a_panic_while_logging() {
        let recorder = Recorder::returning("ok");
        recorder.implementation(&[json!(1)]).unwrap();

        let shared = recorder.clone();
        let panicked = std::thread::spawn(move || {
            let _guard = shared.calls.lock().unwrap();
            panic!("panicked while holding the log");
        })
        .join();
        assert!(panicked.is_err());
        assert!(recorder.calls.is_poisoned());

        assert_eq!(recorder.implementation(&[json!(2)]).unwrap(), json!("ok"));
        assert_eq!(recorder.call_count(), 2);
        assert_eq!(recorder.calls(), vec![vec![json!(1)], vec![json!(2)]]);
        assert_eq!(recorder.last_call(), Some(vec![json!(2)]));
    }
}
