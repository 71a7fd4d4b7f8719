//! Immutable, shareable argument lists.

use crate::Value;
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// An ordered list of bound arguments.
///
/// `Args` is never mutated after construction. Extending it with
/// [`Args::concat`] allocates a new list, so an operation and every
/// operation curried from it keep independent argument lists while
/// clones of one `Args` share the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<Value>")]
pub struct Args(Arc<[Value]>);

impl Args {
    /// An empty argument list.
    pub fn new() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no arguments are bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The arguments as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Iterate over the arguments in bind order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// A new list holding `self` followed by `more`. `self` is untouched.
    #[must_use]
    pub fn concat(&self, more: impl IntoIterator<Item = Value>) -> Self {
        self.0.iter().cloned().chain(more).collect()
    }

    /// The argument vector handed to a behavior: bound arguments first,
    /// then `call_args` in the order given.
    pub fn merged(&self, call_args: &[Value]) -> Vec<Value> {
        let mut merged = Vec::with_capacity(self.len() + call_args.len());
        merged.extend_from_slice(&self.0);
        merged.extend_from_slice(call_args);
        merged
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Args {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(Arc::from(values))
    }
}

impl From<Args> for Vec<Value> {
    fn from(args: Args) -> Self {
        args.0.to_vec()
    }
}

impl FromIterator<Value> for Args {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn concat_leaves_receiver_untouched() {
        let first = Args::from(vec![json!(1)]);
        let second = first.concat([json!(2)]);

        assert_eq!(first.as_slice(), &[json!(1)]);
        assert_eq!(second.as_slice(), &[json!(1), json!(2)]);
    }

    #[test]
    fn clones_share_storage() {
        let args = Args::from(vec![json!("a")]);
        let copy = args.clone();
        assert!(Arc::ptr_eq(&args.0, &copy.0));
    }

    #[test]
    fn merged_puts_bound_arguments_first() {
        let bound = Args::from(vec![json!(1), json!(2)]);
        assert_eq!(bound.merged(&[json!(3)]), vec![json!(1), json!(2), json!(3)]);
        assert_eq!(Args::new().merged(&[]), Vec::<Value>::new());
    }

    #[test]
    fn iterates_by_reference_in_bind_order() {
        let args = Args::from(vec![json!("a"), json!("b")]);
        let mut seen = Vec::new();
        for value in &args {
            seen.push(value.clone());
        }
        assert_eq!(seen, vec![json!("a"), json!("b")]);
        assert_eq!(args.iter().count(), 2);
    }

    #[test]
    fn serializes_as_plain_array() {
        let args = Args::from(vec![json!(1), json!("x")]);
        let encoded = serde_json::to_value(&args).unwrap();
        assert_eq!(encoded, json!([1, "x"]));

        let decoded: Args = serde_json::from_value(json!([true, null])).unwrap();
        assert_eq!(decoded.as_slice(), &[json!(true), json!(null)]);
    }
}
