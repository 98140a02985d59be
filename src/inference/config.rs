//! Configuration for column profiling

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ProfilerError;

/// Default upper bound on distinct values for an enum-eligible column
pub const DEFAULT_MAX_EQUALITY_VALUES: usize = 10;

/// Configuration for column profiling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Maximum number of distinct values a column may have and still be
    /// emitted as an enumerated type
    #[serde(default = "default_max_equality_values")]
    pub max_equality_values: usize,
}

fn default_max_equality_values() -> usize {
    DEFAULT_MAX_EQUALITY_VALUES
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            max_equality_values: DEFAULT_MAX_EQUALITY_VALUES,
        }
    }
}

impl ProfilerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ProfilerConfigBuilder {
        ProfilerConfigBuilder::default()
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load a configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self, ProfilerError> {
        let content = std::fs::read_to_string(path).map_err(|e| ProfilerError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = Self::from_yaml_str(&content).map_err(|e| ProfilerError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::info!(
            path = %path.display(),
            max_equality_values = config.max_equality_values,
            "Loaded profiler configuration"
        );

        Ok(config)
    }

    /// Whether a column with `distinct_count` unique values is enum-eligible
    pub fn is_enum_eligible(&self, distinct_count: usize) -> bool {
        distinct_count <= self.max_equality_values
    }
}

/// Builder for ProfilerConfig
#[derive(Debug, Default)]
pub struct ProfilerConfigBuilder {
    config: ProfilerConfig,
}

impl ProfilerConfigBuilder {
    /// Set the enum eligibility threshold
    pub fn max_equality_values(mut self, max: usize) -> Self {
        self.config.max_equality_values = max;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ProfilerConfig {
        self.config
    }
}
