//! Engine error types.
//!
//! The engine has no recovery logic: a contract violation surfaces
//! immediately to the caller, never a partially computed document. Missing
//! optional display fields are not errors; they degrade to placeholders at
//! assembly time.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid invoice record: {0}")]
    InvalidInvoice(anyhow::Error),

    #[error("Invalid line item: {0}")]
    InvalidLineItem(anyhow::Error),

    #[error("Configuration error: {0}")]
    InvalidConfig(anyhow::Error),
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::InvalidConfig(anyhow::Error::new(err))
    }
}
