//! Configuration for Rollbook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, RosterError};

/// Main configuration for a Rollbook session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file for the roster, one record per line
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Session Configuration
    // -------------------------------------------------------------------------
    /// Length used by the random read when the prompted length is unparseable
    pub default_read_length: i64,

    /// Print the loaded records once at startup
    pub echo_loaded: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("students.txt"),
            default_read_length: 64,
            echo_loaded: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values no session can work with
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(RosterError::Config("data file path is empty".to_string()));
        }
        if self.default_read_length < 0 {
            return Err(RosterError::Config(format!(
                "default read length must not be negative, got {}",
                self.default_read_length
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the fallback length for random reads
    pub fn default_read_length(mut self, length: i64) -> Self {
        self.config.default_read_length = length;
        self
    }

    /// Toggle printing of the loaded roster at startup
    pub fn echo_loaded(mut self, echo: bool) -> Self {
        self.config.echo_loaded = echo;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
