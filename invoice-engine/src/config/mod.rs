//! Engine configuration.

use config::{Config as Cfg, File};
use serde::Deserialize;

use crate::error::EngineError;

/// Record-charge rows printed per annexure page.
const DEFAULT_ANNEXURE_PAGE_CAPACITY: usize = 25;

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_page_capacity")]
    pub annexure_page_capacity: usize,
}

fn default_page_capacity() -> usize {
    DEFAULT_ANNEXURE_PAGE_CAPACITY
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            annexure_page_capacity: DEFAULT_ANNEXURE_PAGE_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Build a config with an explicit page capacity.
    pub fn new(annexure_page_capacity: usize) -> Result<Self, EngineError> {
        let config = Self {
            annexure_page_capacity,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from `configuration.*` and `APP__`-prefixed environment.
    pub fn load() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let config: EngineConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), EngineError> {
        if self.annexure_page_capacity == 0 {
            return Err(EngineError::InvalidConfig(anyhow::anyhow!(
                "annexure page capacity must be at least 1"
            )));
        }
        Ok(())
    }
}
