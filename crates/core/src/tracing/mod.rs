//! Shared tracing functionality for Inkwell
//!
//! Configuration types and subscriber initialization for the native binaries
//! and integration tests.

pub mod config;
pub mod init;

pub use config::InstrumentationConfig;
pub use init::init_tracing;
