//! Initialization logic shared by the workspace binaries: tracing setup and
//! a panic hook that keeps panic output in the log pipeline.
pub mod panic_hook;
pub mod tracing;
