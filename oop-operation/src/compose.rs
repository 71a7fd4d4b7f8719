//! Function composition over callables.

use crate::callable::{Callable, MapperFn, OperationFn};
use crate::{OperationError, Value};
use std::sync::Arc;

/// `outer ∘ inner`: calls `inner` with the call-time arguments, then
/// `outer` with `inner`'s return value as its only argument.
///
/// Chaining is left-associative. `f.comp(g).comp(h)` wraps `f.comp(g)`
/// as the outer callable and `h` as the inner one, so evaluation runs
/// right to left: `f(g(h(x)))`.
///
/// Only the innermost callable sees the original argument list. Every
/// later hop passes exactly one value.
#[derive(Clone)]
pub struct Composed {
    outer: Arc<dyn Callable>,
    inner: Arc<dyn Callable>,
}

impl Composed {
    /// Compose two callables. Neither is modified.
    pub fn new(outer: impl Callable + 'static, inner: impl Callable + 'static) -> Self {
        Self::from_shared(Arc::new(outer), Arc::new(inner))
    }

    /// Compose two already shared callables.
    pub fn from_shared(outer: Arc<dyn Callable>, inner: Arc<dyn Callable>) -> Self {
        Self { outer, inner }
    }

    /// Run the composition. An error from `inner` is returned as is and
    /// `outer` is never called.
    pub fn call(&self, args: &[Value]) -> Result<Value, OperationError> {
        let intermediate = self.inner.call(args)?;
        tracing::trace!(value = %intermediate, "passing inner result to outer callable");
        self.outer.call(std::slice::from_ref(&intermediate))
    }

    /// Compose again, with this composition as the outer callable.
    #[must_use]
    pub fn comp(&self, inner: impl Callable + 'static) -> Composed {
        Composed::new(self.clone(), inner)
    }

    /// Like [`comp`](Self::comp), for a callable held as `Arc<dyn Callable>`.
    #[must_use]
    pub fn comp_shared(&self, inner: Arc<dyn Callable>) -> Composed {
        Composed::from_shared(Arc::new(self.clone()), inner)
    }

    /// An owned closure equivalent to [`call`](Self::call).
    #[must_use]
    pub fn to_callable(&self) -> OperationFn {
        let composed = self.clone();
        Box::new(move |args: &[Value]| composed.call(args))
    }

    /// An owned single-argument closure for `Iterator::map`.
    #[must_use]
    pub fn to_mapper(&self) -> MapperFn {
        let composed = self.clone();
        Box::new(move |arg: Value| composed.call(std::slice::from_ref(&arg)))
    }
}

impl Callable for Composed {
    fn call(&self, args: &[Value]) -> Result<Value, OperationError> {
        Composed::call(self, args)
    }
}

impl std::fmt::Debug for Composed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composed").finish_non_exhaustive()
    }
}
