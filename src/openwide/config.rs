use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CLINIC_NAME: &str = "OPEN WIDE, BOOK EASY DENTAL CLINIC";
const DEFAULT_TAGLINE: &str = "Booking a dental appointment should be as easy as brushing your teeth.";

/// Presentation settings for the menu, stored in `<config dir>/config.json`.
///
/// Appointments themselves are never configured or persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClinicConfig {
    #[serde(default = "default_clinic_name")]
    pub clinic_name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Print the welcome banner above the menu
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_clinic_name() -> String {
    DEFAULT_CLINIC_NAME.to_string()
}

fn default_tagline() -> String {
    DEFAULT_TAGLINE.to_string()
}

fn default_show_banner() -> bool {
    true
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            clinic_name: default_clinic_name(),
            tagline: default_tagline(),
            show_banner: default_show_banner(),
        }
    }
}

impl ClinicConfig {
    /// Load `config.json` from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load a specific config file, or return defaults if it does not exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Platform config directory, e.g. `~/.config/openwide` on Linux
    pub fn default_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "openwide", "openwide")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
