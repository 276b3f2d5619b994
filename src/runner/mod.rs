//! Execution engine and its collaborators

mod delay;
mod engine;
mod observer;

pub use delay::pause;
pub use engine::Harness;
pub use observer::{ConsoleObserver, NullObserver, ObservedEvent, RecordingObserver, RunObserver};
