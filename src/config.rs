//! Game configuration
//!
//! Screen size, behavior flags and run options, loadable from a JSON file.
//! Every field has a default, so a partial file (or none at all) is fine.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_LIVES, DEFAULT_WIDTH};

/// How the fruit's `update` input is chosen each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallMode {
    /// Elapsed tick count as the multiplier (fall accelerates)
    #[default]
    Elapsed,
    /// One tick's worth per update (constant speed)
    PerTick,
}

/// How directional buttons map onto `dx`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Right sets `dx = 1`; the left branch re-checks right and never fires.
    /// `dx` keeps its last value when nothing is pressed.
    #[default]
    Literal,
    /// Right → 1, left → -1, neither → 0
    Directional,
}

/// Where a new round places the fruit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpawnMode {
    /// Always (40, 40), whatever the screen size
    #[default]
    Fixed,
    /// Seeded random column, one radius below the top edge
    Derived,
}

/// Named behavior presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BehaviorPreset {
    #[default]
    Literal,
    #[value(alias = "fixed")]
    Corrected,
}

impl BehaviorPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorPreset::Literal => "Literal",
            BehaviorPreset::Corrected => "Corrected",
        }
    }
}

/// Switches between the game's known quirks and their fixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    pub fall: FallMode,
    /// Apply paddle velocity to its position (only matters with `paddle_in_loop`)
    pub paddle_moves: bool,
    pub input: InputMode,
    pub spawn: SpawnMode,
    /// Update and draw the paddle every frame
    pub paddle_in_loop: bool,
}

impl Behavior {
    /// Keeps every quirk of the shipped game
    pub const fn literal() -> Self {
        Self {
            fall: FallMode::Elapsed,
            paddle_moves: false,
            input: InputMode::Literal,
            spawn: SpawnMode::Fixed,
            paddle_in_loop: false,
        }
    }

    /// Every quirk fixed
    pub const fn corrected() -> Self {
        Self {
            fall: FallMode::PerTick,
            paddle_moves: true,
            input: InputMode::Directional,
            spawn: SpawnMode::Derived,
            paddle_in_loop: true,
        }
    }

    pub fn from_preset(preset: BehaviorPreset) -> Self {
        match preset {
            BehaviorPreset::Literal => Self::literal(),
            BehaviorPreset::Corrected => Self::corrected(),
        }
    }
}

impl Default for Behavior {
    fn default() -> Self {
        Self::literal()
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Surface width (pixels)
    pub width: u32,
    /// Surface height (pixels); also the tick wrap boundary
    pub height: u32,
    /// Stored only; nothing tracks lives
    pub init_lives: u32,
    /// Seed for the derived spawn column
    pub seed: u64,
    pub behavior: Behavior,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            init_lives: DEFAULT_LIVES,
            seed: 0,
            behavior: Behavior::literal(),
        }
    }
}

impl AppConfig {
    pub fn new(width: u32, height: u32, init_lives: u32) -> Self {
        Self {
            width,
            height,
            init_lives,
            ..Self::default()
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Reject sizes the game loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Options for the headless runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Frames to run before stopping (`null` runs until an error)
    pub max_frames: Option<u64>,
    /// Write the last frame here as a PPM image
    pub snapshot: Option<PathBuf>,
    /// Hold the right button on every frame
    pub hold_right: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_frames: Some(u64::from(DEFAULT_HEIGHT) * 2),
            snapshot: None,
            hold_right: false,
        }
    }
}

/// Contents of a config file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub app: AppConfig,
    pub run: RunConfig,
}

impl ConfigFile {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: Self = serde_json::from_str(json)?;
        file.app.validate()?;
        Ok(file)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let file = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(file)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid screen size {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}
