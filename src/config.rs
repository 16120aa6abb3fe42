//! Configuration loader - YAML render settings + .env paths

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("generation count {requested} exceeds the configured cap of {max}")]
    GenerationCap { requested: u32, max: u32 },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Render settings loaded from fractal.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cap on expansion generations. String growth is exponential, so a
    /// runaway generation count is rejected instead of expanded.
    pub max_generations: u32,
    /// Segments revealed per animation frame
    pub segments_per_frame: usize,
    /// Viewport used to resolve preset start positions
    pub width: f64,
    pub height: f64,
    pub line_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_generations: 20,
            segments_per_frame: 1,
            width: 1200.0,
            height: 800.0,
            line_width: 1.5,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Reject generation counts above the configured cap
    pub fn check_generations(&self, requested: u32) -> Result<(), ConfigError> {
        if requested > self.max_generations {
            return Err(ConfigError::GenerationCap {
                requested,
                max: self.max_generations,
            });
        }
        Ok(())
    }
}

/// Paths loaded from .env / environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub out_dir: String,
    pub log_dir: String,
}

impl Settings {
    /// Load settings from .env, falling back to defaults
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        Settings {
            out_dir: std::env::var("FRACTAL_OUT_DIR").unwrap_or_else(|_| "./out".to_string()),
            log_dir: std::env::var("FRACTAL_LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_generations, 20);
        assert_eq!(config.segments_per_frame, 1);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("max_generations: 8").unwrap();
        assert_eq!(config.max_generations, 8);
        assert_eq!(config.width, 1200.0);
    }

    #[test]
    fn test_generation_cap() {
        let config = Config {
            max_generations: 10,
            ..Config::default()
        };
        assert!(config.check_generations(10).is_ok());
        assert!(matches!(
            config.check_generations(11),
            Err(ConfigError::GenerationCap {
                requested: 11,
                max: 10
            })
        ));
    }
}
