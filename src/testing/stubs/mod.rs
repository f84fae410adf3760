pub mod recording_observer;
pub mod scripted_stream;

pub use recording_observer::{RecordingHandle, RecordingObserver};
pub use scripted_stream::ScriptedStream;
