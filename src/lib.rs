pub mod core;
pub mod evaluation;
pub mod setup;
pub mod streams;
pub mod tasks;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
