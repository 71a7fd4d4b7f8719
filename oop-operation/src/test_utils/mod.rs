//! Behaviors for testing.
//!
//! Available behind the `test-utils` feature flag. They stand in for the
//! concrete behaviors collaborators would supply, and record what they
//! were called with.

mod class_recorder;
mod echo;
mod recorder;

pub use class_recorder::ClassRecorder;
pub use echo::Echo;
pub use recorder::Recorder;
