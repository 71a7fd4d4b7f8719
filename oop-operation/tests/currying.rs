//! Currying: bound arguments accumulate in order, and every curry is a
//! new, independent operation.

use oop_operation::test_utils::{Echo, Recorder};
use oop_operation::{Operation, OperationClass, Unimplemented, Value, args};

// --- Construction ---

#[test]
fn new_accepts_any_values_without_validation() {
    let op = Operation::new(args![null, 1.5, "x", [1, 2], {"k": "v"}]);
    assert_eq!(op.bound_args().len(), 5);
    assert_eq!(op.name(), "Unimplemented");
}

#[test]
fn empty_construction_binds_nothing() {
    let op = Operation::with_args(Echo, args![]);
    assert!(op.bound_args().is_empty());
    assert_eq!(op.call(&[]).unwrap(), Value::Array(vec![]));
}

// --- Chaining ---

#[test]
fn siblings_curried_from_one_parent_are_independent() {
    let parent = Operation::with_args(Echo, args![0]);
    let left = parent.curry(args!["left"]);
    let right = parent.curry(args!["right"]);

    assert_eq!(left.call(&[]).unwrap(), Value::Array(args![0, "left"]));
    assert_eq!(right.call(&[]).unwrap(), Value::Array(args![0, "right"]));
    assert_eq!(parent.bound_args().as_slice(), args![0].as_slice());
}

#[test]
fn curried_operation_can_be_called_repeatedly() {
    let recorder = Recorder::returning("done");
    let op = Operation::from_behavior(recorder.clone()).curry(args![1]);

    assert_eq!(op.call(&args![2]).unwrap(), Value::from("done"));
    assert_eq!(op.call(&args![3]).unwrap(), Value::from("done"));

    assert_eq!(recorder.calls(), vec![args![1, 2], args![1, 3]]);
    assert_eq!(op.bound_args().as_slice(), args![1].as_slice());
}

// --- Class level ---

#[test]
fn class_level_instance_binds_its_arguments() {
    let op = Echo::instance(args![1, 2]);
    assert_eq!(op.call(&args![3]).unwrap(), Value::Array(args![1, 2, 3]));
}

#[test]
fn abstract_base_curries_at_class_level() {
    let op = Unimplemented::curry(args![1]);
    assert_eq!(op.bound_args().as_slice(), args![1].as_slice());
    assert!(op.call(&[]).unwrap_err().is_unimplemented());
}
