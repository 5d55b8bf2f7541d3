//! Inkwell daemon: serves the blog pages behind the route guard

pub mod config;
pub mod server;

pub use config::{LoggingConfig, ServerConfig, Settings};
pub use server::{router, run, serve};

/// Result type for daemon operations
pub type Result<T> = std::result::Result<T, DaemonError>;

/// Daemon error types
#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
