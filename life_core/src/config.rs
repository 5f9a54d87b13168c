//! Configuration for the simulator.
//!
//! Loaded from YAML; every section and field falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::grid::{DEFAULT_COLS, DEFAULT_ROWS};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

/// Grid dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Timing and random soup settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Milliseconds between generations while running
    pub tick_interval_ms: u64,
    /// Chance of a cell starting alive in a random soup (0.0 - 1.0)
    pub random_density: f64,
    /// Fixed seed for random soups; a fresh seed per soup when absent
    pub random_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            random_density: 0.33,
            random_seed: None,
        }
    }
}

impl SimulationConfig {
    pub const MIN_TICK_MS: u64 = 10;
    pub const MAX_TICK_MS: u64 = 10_000;

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// How the grid is painted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Edge of one cell in points
    pub cell_size: f32,
    /// Gap between cells in points
    pub spacing: f32,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
    pub grid_line_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 10.0,
            spacing: 0.5,
            live_color: [0, 0, 0],
            dead_color: [255, 255, 255],
            grid_line_color: [0, 229, 255],
        }
    }
}

impl LifeConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: LifeConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(Error::Config("grid rows and cols must be > 0".to_string()));
        }
        let tick = self.simulation.tick_interval_ms;
        if !(SimulationConfig::MIN_TICK_MS..=SimulationConfig::MAX_TICK_MS).contains(&tick) {
            return Err(Error::Config(format!(
                "tick_interval_ms must be between {} and {}, got {tick}",
                SimulationConfig::MIN_TICK_MS,
                SimulationConfig::MAX_TICK_MS
            )));
        }
        if !(0.0..=1.0).contains(&self.simulation.random_density) {
            return Err(Error::Config("random_density must be within 0.0 - 1.0".to_string()));
        }
        if self.display.cell_size <= 0.0 || self.display.spacing < 0.0 {
            return Err(Error::Config(
                "cell_size must be > 0 and spacing >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.grid.rows, config.grid.cols), (50, 50));
        assert_eq!(config.simulation.tick_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = LifeConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: LifeConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "grid:\n  rows: 20\nsimulation:\n  random_seed: 9\n";
        let config: LifeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.grid.rows, 20);
        assert_eq!(config.grid.cols, 50);
        assert_eq!(config.simulation.tick_interval_ms, 500);
        assert_eq!(config.simulation.random_seed, Some(9));
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = LifeConfig::default();
        config.grid.cols = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = LifeConfig::default();
        config.simulation.tick_interval_ms = 1;
        assert!(config.validate().is_err());

        let mut config = LifeConfig::default();
        config.simulation.random_density = 1.5;
        assert!(config.validate().is_err());

        let mut config = LifeConfig::default();
        config.display.cell_size = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let err = LifeConfig::from_file("definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("life-config-{}.yaml", std::process::id()));
        let mut config = LifeConfig::default();
        config.grid.rows = 12;
        config.save(&path).unwrap();
        let loaded = LifeConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
