//! Operations — a behavior plus the arguments bound to it so far.

use crate::behavior::{Behavior, Unimplemented, behavior_fn};
use crate::callable::{Callable, MapperFn, OperationFn};
use crate::compose::Composed;
use crate::{Args, OperationError, Value};
use std::sync::Arc;

/// A deferred, curryable unit of computation.
///
/// An `Operation` owns an immutable [`Args`] list and shares its
/// [`Behavior`] with every operation curried from it. Nothing about an
/// operation changes after construction:
///
/// - [`curry`](Self::curry) returns a new operation with more bound
///   arguments; the receiver keeps its own list.
/// - [`call`](Self::call) runs the behavior with bound arguments followed
///   by call-time arguments and may be repeated any number of times.
///
/// Cloning is cheap: both fields are reference counted.
#[derive(Clone)]
pub struct Operation {
    behavior: Arc<dyn Behavior>,
    bound: Args,
}

impl Operation {
    /// An abstract operation with the given bound arguments.
    ///
    /// Its behavior is [`Unimplemented`], so invoking it fails. Use
    /// [`with_args`](Self::with_args) to supply a real behavior.
    pub fn new(args: impl IntoIterator<Item = Value>) -> Self {
        Self::with_args(Unimplemented, args)
    }

    /// An operation running `behavior` with nothing bound yet.
    pub fn from_behavior(behavior: impl Behavior + 'static) -> Self {
        Self::from_shared(Arc::new(behavior), Args::new())
    }

    /// An operation running `behavior` with `args` already bound.
    pub fn with_args(behavior: impl Behavior + 'static, args: impl IntoIterator<Item = Value>) -> Self {
        Self::from_shared(Arc::new(behavior), args.into_iter().collect())
    }

    /// An operation over an already shared behavior.
    pub fn from_shared(behavior: Arc<dyn Behavior>, bound: Args) -> Self {
        Self { behavior, bound }
    }

    /// An operation backed by a named closure.
    pub fn from_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, OperationError> + Send + Sync + 'static,
    {
        Self::from_behavior(behavior_fn(name, f))
    }

    /// Name of the underlying behavior.
    pub fn name(&self) -> &str {
        self.behavior.name()
    }

    /// The arguments bound so far, in bind order.
    pub fn bound_args(&self) -> &Args {
        &self.bound
    }

    /// The shared behavior.
    pub fn behavior(&self) -> &Arc<dyn Behavior> {
        &self.behavior
    }

    /// Bind more arguments, returning a new operation.
    ///
    /// The new operation's bound list is this operation's list followed
    /// by `more`. `self` is not modified.
    #[must_use]
    pub fn curry(&self, more: impl IntoIterator<Item = Value>) -> Self {
        let bound = self.bound.concat(more);
        tracing::trace!(operation = %self.name(), bound = bound.len(), "curried operation");
        Self {
            behavior: Arc::clone(&self.behavior),
            bound,
        }
    }

    /// Invoke the behavior with the bound arguments followed by `args`.
    pub fn call(&self, args: &[Value]) -> Result<Value, OperationError> {
        tracing::trace!(
            operation = %self.name(),
            bound = self.bound.len(),
            call = args.len(),
            "invoking operation"
        );
        let merged = self.bound.merged(args);
        self.behavior.implementation(&merged).inspect_err(|e| {
            if e.is_unimplemented() {
                tracing::debug!(operation = %self.name(), "invoked operation without behavior");
            }
        })
    }

    /// An owned closure equivalent to [`call`](Self::call) on this
    /// operation, bound arguments included.
    #[must_use]
    pub fn to_callable(&self) -> OperationFn {
        let op = self.clone();
        Box::new(move |args: &[Value]| op.call(args))
    }

    /// An owned single-argument closure for `Iterator::map`. Each element
    /// becomes the sole call-time argument.
    #[must_use]
    pub fn to_mapper(&self) -> MapperFn {
        let op = self.clone();
        Box::new(move |arg: Value| op.call(std::slice::from_ref(&arg)))
    }

    /// Compose with `inner`: the result calls `inner` first and feeds its
    /// return value to this operation, `f.comp(g)(x) == f(g(x))`.
    #[must_use]
    pub fn comp(&self, inner: impl Callable + 'static) -> Composed {
        Composed::new(self.clone(), inner)
    }

    /// Like [`comp`](Self::comp), for a callable held as `Arc<dyn Callable>`.
    #[must_use]
    pub fn comp_shared(&self, inner: Arc<dyn Callable>) -> Composed {
        Composed::from_shared(Arc::new(self.clone()), inner)
    }
}

impl Default for Operation {
    fn default() -> Self {
        Self::new([])
    }
}

impl std::fmt::Debug for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("behavior", &self.name())
            .field("bound_args", &self.bound)
            .finish()
    }
}

impl Callable for Operation {
    fn call(&self, args: &[Value]) -> Result<Value, OperationError> {
        Operation::call(self, args)
    }
}

/// Class-level entry points for behavior types.
///
/// Every `Behavior + Default` type gets these for free. Each one builds a
/// fresh, zero-argument instance from `Default` and then acts on it, so
/// the type itself can stand in wherever an operation or a closure is
/// expected.
///
/// ```
/// use oop_operation::{args, Behavior, OperationClass, OperationError, Value};
///
/// #[derive(Default)]
/// struct Product;
///
/// impl Behavior for Product {
///     fn implementation(&self, args: &[Value]) -> Result<Value, OperationError> {
///         Ok(args.iter().filter_map(Value::as_i64).product::<i64>().into())
///     }
/// }
///
/// let double = Product::curry(args![2]);
/// assert_eq!(double.call(&args![21])?, Value::from(42));
///
/// let doubled: Vec<Value> = args![1, 2, 3]
///     .into_iter()
///     .map(double.to_mapper())
///     .collect::<Result<_, _>>()?;
/// assert_eq!(doubled, args![2, 4, 6]);
///
/// let f = Product::as_callable();
/// assert_eq!(f(&args![2, 3, 7])?, Value::from(42));
/// # Ok::<(), OperationError>(())
/// ```
pub trait OperationClass: Behavior + Default + Sized + 'static {
    /// A new instance with `args` bound.
    fn instance(args: impl IntoIterator<Item = Value>) -> Operation {
        Operation::with_args(Self::default(), args)
    }

    /// Same as `Self::instance([]).curry(args)`.
    fn curry(args: impl IntoIterator<Item = Value>) -> Operation {
        Operation::from_behavior(Self::default()).curry(args)
    }

    /// A variadic closure that builds a fresh instance per invocation and
    /// calls it with the given arguments.
    fn as_callable() -> OperationFn {
        Box::new(|args: &[Value]| Operation::from_behavior(Self::default()).call(args))
    }

    /// A single-argument closure for `Iterator::map`. Each element is
    /// passed to a fresh instance as its sole argument.
    fn as_mapper() -> MapperFn {
        Box::new(|arg: Value| Operation::from_behavior(Self::default()).call(std::slice::from_ref(&arg)))
    }

    /// Compose a fresh instance with `inner`.
    fn comp(inner: impl Callable + 'static) -> Composed {
        Operation::from_behavior(Self::default()).comp(inner)
    }
}

impl<B: Behavior + Default + 'static> OperationClass for B {}
