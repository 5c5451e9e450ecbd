//! Game settings
//!
//! Loaded from a JSON file next to the binary; anything missing or broken
//! falls back to defaults.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_RATE, PANEL_HEIGHT, PANEL_WIDTH, PLAYER_HEIGHT};
use crate::persistence::FileScoreStore;
use crate::sim::SpawnArea;

/// Default settings file name
pub const SETTINGS_FILE: &str = "ufo-dash.json";

/// Smallest panel that still leaves room for the player above the ground
const MIN_PANEL: i32 = 200;

/// Settings load failure (always handled internally)
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read settings: {err}"),
            Self::Parse(err) => write!(f, "invalid settings JSON: {err}"),
            Self::Invalid(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play field width in screen units
    pub panel_width: i32,
    /// Play field height in screen units
    pub panel_height: i32,
    /// Simulation ticks per second
    pub frame_rate: u32,
    /// Directory holding sprite PNGs
    pub asset_dir: PathBuf,
    /// Best score file (defaults to the home directory)
    pub score_file: Option<PathBuf>,
    /// RNG seed (defaults to the system time)
    pub seed: Option<u64>,
    /// How long the headless demo runs before quitting
    pub demo_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,
            frame_rate: FRAME_RATE,
            asset_dir: PathBuf::from("images"),
            score_file: None,
            seed: None,
            demo_seconds: 30,
        }
    }
}

impl Settings {
    /// Height of the ground strip
    pub fn ground_height(&self) -> i32 {
        self.panel_height / 8
    }

    /// Player spawn height (also where it is put back after touching ground)
    pub fn player_start_y(&self) -> i32 {
        self.panel_height / 3
    }

    /// Player's fixed horizontal position
    pub fn player_x(&self) -> i32 {
        self.panel_width / 8
    }

    /// Milliseconds per simulation tick
    pub fn tick_ms(&self) -> u64 {
        1000 / u64::from(self.frame_rate.max(1))
    }

    pub fn spawn_area(&self) -> SpawnArea {
        SpawnArea {
            panel_width: self.panel_width,
            panel_height: self.panel_height,
            ground_height: self.ground_height(),
        }
    }

    /// Best score store for these settings
    pub fn score_store(&self) -> FileScoreStore {
        match &self.score_file {
            Some(path) => FileScoreStore::new(path),
            None => FileScoreStore::in_home_dir(),
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.panel_width < MIN_PANEL || self.panel_height < MIN_PANEL {
            return Err(SettingsError::Invalid("panel smaller than 200x200"));
        }
        if self.player_start_y() + PLAYER_HEIGHT >= self.panel_height - self.ground_height() {
            return Err(SettingsError::Invalid("player starts inside the ground"));
        }
        if self.frame_rate == 0 {
            return Err(SettingsError::Invalid("frame rate must be positive"));
        }
        Ok(())
    }

    /// Strict load: any problem is an error
    pub fn try_load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults with a warning
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("{} ({}), using defaults", err, path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

}
