//! Runtime configuration for [`ShopSystem`](crate::lifecycle::ShopSystem).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidBufferSize { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Mailbox capacity of each actor.
    pub buffer_size: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl ShopConfig {
    pub const BUFFER_VAR: &'static str = "SHOP_ACTOR_BUFFER";

    /// Defaults, overridden by `SHOP_ACTOR_BUFFER` when it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(Self::BUFFER_VAR) {
            config.buffer_size = value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidBufferSize {
                    var: Self::BUFFER_VAR,
                    value,
                })?;
        }
        Ok(config)
    }
}
