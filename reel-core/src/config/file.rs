//! Configuration file loading and saving
//!
//! Loads user configuration from `~/.config/reel/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::RecorderConfig;
use crate::error::{ReelError, Result};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default recording settings
    #[serde(default)]
    pub defaults: DefaultSettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

/// Default recording settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultSettings {
    /// H.264 profile level (currently only "3.1")
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Target framerate
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Bitrate in kbps (0 = auto)
    #[serde(default)]
    pub bitrate: u32,
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory recordings are written to when the CLI is given a bare file
    /// name (None = current directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_profile() -> String {
    "3.1".to_string()
}

fn default_fps() -> u32 {
    60
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            fps: default_fps(),
            bitrate: 0,
        }
    }
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("reel").join("config.toml")
        } else if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("reel")
                .join("config.toml")
        } else {
            PathBuf::from("/etc/reel/config.toml")
        }
    }

    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ReelError::Config(format!("Failed to read config file: {}", e)))?;

        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| ReelError::Config(format!("Failed to parse config file: {}", e)))?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration, logging a warning and returning defaults on error
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ReelError::Config(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ReelError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&path, content)
            .map_err(|e| ReelError::Config(format!("Failed to write config file: {}", e)))?;

        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Turn file settings into a runtime recorder configuration
    pub fn to_recorder_config(&self) -> RecorderConfig {
        RecorderConfig::new()
            .with_profile(&self.defaults.profile)
            .with_fps(self.defaults.fps)
            .with_bitrate(self.defaults.bitrate)
    }
}

/// A commented sample configuration for `reel config init`
pub fn sample_config() -> String {
    r#"# reel configuration
# Location: ~/.config/reel/config.toml

[defaults]
# H.264 profile level constraining the output frame size.
# Currently only "3.1" is supported (1280x720, 720x576, 720x480).
profile = "3.1"

# Target framerate.
fps = 60

# Bitrate in kbps. 0 picks a value from the output resolution.
bitrate = 0

[output]
# Directory recordings land in when reel is given a bare file name.
# directory = "/home/user/Videos"
"#
    .to_string()
}
