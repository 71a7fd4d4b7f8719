//! # oop-operation — curryable, composable operations
//!
//! An [`Operation`] is a deferred unit of computation: a shared
//! [`Behavior`] plus an immutable list of arguments bound so far.
//!
//! | Capability | API | What it does |
//! |------------|-----|-------------|
//! | Currying | [`Operation::curry`], [`OperationClass::curry`] | Bind more arguments, get a new operation |
//! | Invocation | [`Operation::call`] | Run the behavior with bound + call-time arguments |
//! | Conversion | [`Operation::to_callable`], [`OperationClass::as_mapper`] | Hand an operation to code expecting a closure |
//! | Composition | [`Operation::comp`], [`Composed::comp`] | `f.comp(g)(x) == f(g(x))` |
//!
//! ## Values
//!
//! Arguments and results are [`serde_json::Value`]s, re-exported as
//! [`Value`]. Behaviors are variadic: they receive the full merged
//! argument slice and decide for themselves what arity they accept.
//!
//! ```
//! use oop_operation::{args, Operation, OperationError, Value};
//!
//! let sum = Operation::from_fn("sum", |args: &[Value]| {
//!     Ok(args.iter().filter_map(Value::as_i64).sum::<i64>().into())
//! });
//!
//! let add_ten = sum.curry(args![4, 6]);
//! assert_eq!(add_ten.call(&args![5])?, Value::from(15));
//! assert_eq!(sum.call(&args![1])?, Value::from(1));
//! # Ok::<(), OperationError>(())
//! ```
//!
//! ## The abstract base
//!
//! [`Operation::new`] builds an operation backed by [`Unimplemented`].
//! Invoking it fails with [`OperationError::Unimplemented`]; concrete
//! behaviors are supplied by implementing [`Behavior`].

#![deny(missing_docs)]

pub mod args;
pub mod behavior;
pub mod callable;
pub mod compose;
pub mod error;
pub mod operation;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use args::Args;
pub use behavior::{Behavior, FnBehavior, Unimplemented, behavior_fn};
pub use callable::{Callable, MapperFn, OperationFn, Unary, unary};
pub use compose::Composed;
pub use error::OperationError;
pub use operation::{Operation, OperationClass};

/// Dynamically typed argument and result value.
pub type Value = serde_json::Value;

#[doc(hidden)]
pub use serde_json as __serde_json;

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// The elements are parsed as one `serde_json::json!` array, so literals,
/// negative numbers, nested arrays, objects and interpolated expressions
/// all work.
///
/// ```
/// use oop_operation::{args, Value};
///
/// let bound = args![1, "a", [true, null], -3];
/// assert_eq!(bound.len(), 4);
/// assert_eq!(bound[1], Value::from("a"));
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:tt)+) => {
        match $crate::__serde_json::json!([$($arg)+]) {
            $crate::Value::Array(values) => values,
            _ => ::std::unreachable!(),
        }
    };
}
