//! Swipe-controls configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SwipeError, SwipeResult};
use crate::units::dip_to_pixels;

/// Largest accepted `volume_sensitivity`. Device volume ranges are small.
pub const MAX_VOLUME_SENSITIVITY: u32 = 100;

/// Global swipe-controls configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeControlsConfig {
    /// Swipe distance per control step, in dp.
    pub distances: UnitDistances,

    /// Volume steps applied per volume tick.
    pub volume_sensitivity: u32,

    /// Pixels per dp of the target display.
    pub display_density: f64,

    /// Which channels are wired to a device.
    pub enabled: ChannelToggles,

    /// Whether the lowest brightness value switches the screen to
    /// auto-brightness.
    pub lowest_value_enables_auto_brightness: bool,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// One distance per channel. Used for both dp (configured) and pixel
/// (resolved) values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitDistances {
    pub volume: f64,
    pub brightness: f64,
    pub speed: f64,
    pub seek: f64,
}

/// Per-device enable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelToggles {
    pub volume: bool,
    pub brightness: bool,
    /// Speed and seek share the playback device.
    pub playback: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "swipectl=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for SwipeControlsConfig {
    fn default() -> Self {
        Self {
            distances: UnitDistances::default(),
            volume_sensitivity: 1,
            display_density: 1.0,
            enabled: ChannelToggles::default(),
            lowest_value_enables_auto_brightness: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for UnitDistances {
    fn default() -> Self {
        Self {
            volume: 10.0,
            brightness: 1.0,
            speed: 10.0,
            seek: 10.0,
        }
    }
}

impl Default for ChannelToggles {
    fn default() -> Self {
        Self {
            volume: true,
            brightness: true,
            playback: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl UnitDistances {
    /// `(name, value)` pairs in channel order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("volume", self.volume),
            ("brightness", self.brightness),
            ("speed", self.speed),
            ("seek", self.seek),
        ]
    }
}

impl SwipeControlsConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> SwipeResult<Self> {
        if !path.exists() {
            return Err(SwipeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }

    /// Reject values no dispatcher could be built from.
    pub fn validate(&self) -> SwipeResult<()> {
        for (name, value) in self.distances.entries() {
            if !value.is_finite() || value <= 0.0 {
                return Err(SwipeError::config(format!(
                    "distances.{name} must be finite and > 0, got {value}"
                )));
            }
        }
        if !(1..=MAX_VOLUME_SENSITIVITY).contains(&self.volume_sensitivity) {
            return Err(SwipeError::config(format!(
                "volume_sensitivity must be in 1..={MAX_VOLUME_SENSITIVITY}, got {}",
                self.volume_sensitivity
            )));
        }
        if !self.display_density.is_finite() || self.display_density <= 0.0 {
            return Err(SwipeError::config(format!(
                "display_density must be finite and > 0, got {}",
                self.display_density
            )));
        }
        Ok(())
    }

    /// Unit distances converted from dp to pixels for this display.
    pub fn unit_distances_px(&self) -> UnitDistances {
        let px = |dp| dip_to_pixels(dp, self.display_density);
        UnitDistances {
            volume: px(self.distances.volume),
            brightness: px(self.distances.brightness),
            speed: px(self.distances.speed),
            seek: px(self.distances.seek),
        }
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("swipectl").join("config.json")
}
