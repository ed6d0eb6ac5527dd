use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{LifeError, Result};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fixed pixel size of the drawing surface
#[derive(Debug, Deserialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_surface_width")]
    pub width: u32,
    #[serde(default = "default_surface_height")]
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u32,
    #[serde(default = "default_alive_probability")]
    pub alive_probability: f64,
    /// Fixed seed for randomize; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Slider ranges
#[derive(Debug, Deserialize)]
pub struct ControlsConfig {
    #[serde(default = "default_min_cell_size")]
    pub min_cell_size: u32,
    #[serde(default = "default_max_cell_size")]
    pub max_cell_size: u32,
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u32,
    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u32,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_alive_color")]
    pub alive_color: [u8; 3],
    #[serde(default = "default_dead_color")]
    pub dead_color: [u8; 3],
    #[serde(default = "default_border_color")]
    pub border_color: [u8; 3],
    #[serde(default = "default_background_color")]
    pub background_color: [u8; 3],
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_intent_log: bool,
    #[serde(default = "default_intent_log_path")]
    pub intent_log_path: String,
}

// Default values
fn default_surface_width() -> u32 { 800 }
fn default_surface_height() -> u32 { 600 }
fn default_cell_size() -> u32 { 20 }
fn default_tick_interval_ms() -> u32 { 100 }
fn default_alive_probability() -> f64 { 0.3 }
fn default_min_cell_size() -> u32 { 5 }
fn default_max_cell_size() -> u32 { 50 }
fn default_min_interval_ms() -> u32 { 10 }
fn default_max_interval_ms() -> u32 { 1000 }
fn default_window_title() -> String { "lifegrid - Conway's Game of Life".to_string() }
fn default_alive_color() -> [u8; 3] { [0, 0, 0] }
fn default_dead_color() -> [u8; 3] { [255, 255, 255] }
fn default_border_color() -> [u8; 3] { [200, 200, 200] }
fn default_background_color() -> [u8; 3] { [30, 30, 30] }
fn default_intent_log_path() -> String { "intent_log.json".to_string() }

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            tick_interval_ms: default_tick_interval_ms(),
            alive_probability: default_alive_probability(),
            seed: None,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            min_cell_size: default_min_cell_size(),
            max_cell_size: default_max_cell_size(),
            min_interval_ms: default_min_interval_ms(),
            max_interval_ms: default_max_interval_ms(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            alive_color: default_alive_color(),
            dead_color: default_dead_color(),
            border_color: default_border_color(),
            background_color: default_background_color(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_intent_log: false,
            intent_log_path: default_intent_log_path(),
        }
    }
}

impl Config {
    /// Load configuration from config.toml, or use defaults if it is missing or invalid
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no config file found, using default configuration");
                Config::default()
            }
        }
    }

    /// Parse and validate TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| LifeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        let controls = &self.controls;

        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(LifeError::InvalidConfig("surface size must be positive".to_string()));
        }
        if sim.cell_size == 0 || sim.cell_size > self.surface.width.min(self.surface.height) {
            return Err(LifeError::InvalidConfig(format!(
                "cell size {} does not fit the surface",
                sim.cell_size
            )));
        }
        if sim.tick_interval_ms == 0 {
            return Err(LifeError::InvalidConfig("tick interval must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&sim.alive_probability) {
            return Err(LifeError::InvalidConfig(format!(
                "alive probability {} is outside [0, 1]",
                sim.alive_probability
            )));
        }
        if controls.min_cell_size == 0 || controls.min_cell_size > controls.max_cell_size {
            return Err(LifeError::InvalidConfig("bad cell size slider range".to_string()));
        }
        if controls.min_interval_ms == 0 || controls.min_interval_ms > controls.max_interval_ms {
            return Err(LifeError::InvalidConfig("bad speed slider range".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.surface.width, 800);
        assert_eq!(config.surface.height, 600);
        assert_eq!(config.simulation.cell_size, 20);
        assert_eq!(config.simulation.tick_interval_ms, 100);
        assert_eq!(config.simulation.alive_probability, 0.3);
        assert!(config.simulation.seed.is_none());
        assert!(!config.logging.enable_intent_log);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = Config::parse("[simulation]\ncell_size = 10\nseed = 7\n").unwrap();
        assert_eq!(config.simulation.cell_size, 10);
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.tick_interval_ms, 100);
        assert_eq!(config.controls.max_cell_size, 50);
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        let err = Config::parse("[simulation]\ncell_size = 0\n").unwrap_err();
        assert!(matches!(err, LifeError::InvalidConfig(_)));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = Config::parse("[simulation]\ntick_interval_ms = 0\n").unwrap_err();
        assert!(matches!(err, LifeError::InvalidConfig(_)));
    }

    #[test]
    fn probability_out_of_range_is_rejected() {
        assert!(Config::parse("[simulation]\nalive_probability = 1.5\n").is_err());
    }

    #[test]
    fn malformed_toml_is_invalid_config() {
        assert!(matches!(Config::parse("[surface\nwidth ="), Err(LifeError::InvalidConfig(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_from("definitely/not/here/config.toml");
        assert_eq!(config.simulation.cell_size, 20);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("lifegrid-invalid-{}.toml", std::process::id()));
        fs::write(&path, "[simulation]\ncell_size = 0\ntick_interval_ms = 5\n").unwrap();

        let config = Config::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.simulation.cell_size, 20);
        assert_eq!(config.simulation.tick_interval_ms, 100);
    }

    #[test]
    fn valid_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("lifegrid-valid-{}.toml", std::process::id()));
        fs::write(&path, "[simulation]\ncell_size = 12\n").unwrap();

        let config = Config::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.simulation.cell_size, 12);
        assert_eq!(config.simulation.tick_interval_ms, 100);
    }
}
