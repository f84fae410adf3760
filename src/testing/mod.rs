pub mod fixtures;
pub mod stubs;

pub use fixtures::inside_outside_script;
pub use stubs::{RecordingHandle, RecordingObserver, ScriptedStream};
