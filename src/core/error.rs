//! Errors that stop the server before or while it is serving.

use super::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
