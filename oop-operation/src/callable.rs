//! The Callable protocol — anything that can be invoked with a variadic
//! argument list.
//!
//! Operations, compositions and plain closures all implement
//! [`Callable`], which is what lets [`Operation::comp`](crate::Operation::comp)
//! accept any of them as its right-hand operand.

use crate::{OperationError, Value};

/// An owned variadic closure, as produced by
/// [`Operation::to_callable`](crate::Operation::to_callable).
pub type OperationFn = Box<dyn Fn(&[Value]) -> Result<Value, OperationError> + Send + Sync>;

/// An owned single-argument closure for `Iterator::map`, as produced by
/// [`Operation::to_mapper`](crate::Operation::to_mapper).
pub type MapperFn = Box<dyn Fn(Value) -> Result<Value, OperationError> + Send + Sync>;

/// A value that can be called with any number of arguments.
///
/// Object-safe: heterogeneous callables are stored as
/// `Arc<dyn Callable>`.
///
/// Any closure `Fn(&[Value]) -> Result<Value, OperationError>` is a
/// `Callable`. Wrap single-argument functions with [`unary`].
pub trait Callable: Send + Sync {
    /// Invoke with the given arguments.
    fn call(&self, args: &[Value]) -> Result<Value, OperationError>;
}

impl<F> Callable for F
where
    F: Fn(&[Value]) -> Result<Value, OperationError> + Send + Sync,
{
    fn call(&self, args: &[Value]) -> Result<Value, OperationError> {
        self(args)
    }
}

/// Adapts an infallible single-argument function into a [`Callable`].
///
/// Calling it with anything other than exactly one argument returns
/// [`OperationError::Arity`].
#[derive(Clone)]
pub struct Unary<F> {
    name: &'static str,
    f: F,
}

impl<F> Unary<F> {
    /// Rename the adaptor; the name shows up in arity errors.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<F> std::fmt::Debug for Unary<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unary").field("name", &self.name).finish()
    }
}

impl<F> Callable for Unary<F>
where
    F: Fn(Value) -> Value + Send + Sync,
{
    fn call(&self, args: &[Value]) -> Result<Value, OperationError> {
        match args {
            [arg] => Ok((self.f)(arg.clone())),
            _ => Err(OperationError::Arity {
                callable: self.name.to_owned(),
                expected: 1,
                got: args.len(),
            }),
        }
    }
}

/// Wrap a plain `Fn(Value) -> Value` so it can be composed with operations.
///
/// ```
/// use oop_operation::{Callable, Value, unary};
///
/// let sqr = unary(|x: Value| Value::from(x.as_i64().unwrap_or(0).pow(2)));
/// assert_eq!(sqr.call(&[Value::from(3)]).unwrap(), Value::from(9));
/// assert!(sqr.call(&[]).is_err());
/// ```
#[must_use]
pub fn unary<F>(f: F) -> Unary<F>
where
    F: Fn(Value) -> Value + Send + Sync,
{
    Unary { name: "unary", f }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn _assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn dyn_callable_is_send_sync() {
        _assert_send_sync::<Arc<dyn Callable>>();
        _assert_send_sync::<Box<dyn Callable>>();
    }

    #[test]
    fn closures_are_callable() {
        let len = |args: &[Value]| -> Result<Value, OperationError> { Ok(Value::from(args.len())) };
        assert_eq!(Callable::call(&len, &[json!(1), json!(2)]).unwrap(), json!(2));

        let erased: Arc<dyn Callable> = Arc::new(len);
        assert_eq!(erased.call(&[]).unwrap(), json!(0));
    }

    #[test]
    fn unary_rejects_other_arities() {
        let id = unary(|x| x).named("identity");
        assert_eq!(id.call(&[json!("v")]).unwrap(), json!("v"));

        match id.call(&[json!(1), json!(2)]) {
            Err(OperationError::Arity {
                callable,
                expected,
                got,
            }) => {
                assert_eq!(callable, "identity");
                assert_eq!(expected, 1);
                assert_eq!(got, 2);
            }
            other => panic!("expected arity error, got {other:?}"),
        }
    }
}
