//! Catcher - a tiny fruit catcher arcade loop
//!
//! Core modules:
//! - `sim`: Simulation (game objects, per-frame update and draw)
//! - `engine`: Engine collaborator traits plus a headless software backend
//! - `config`: Screen size, behavior flags and run options
//! - `app`: Binds a `Catcher` to an injected engine

pub mod app;
pub mod config;
pub mod engine;
pub mod sim;

pub use app::App;
pub use config::{AppConfig, Behavior, RunConfig};

/// Game configuration constants
pub mod consts {
    use crate::engine::PaletteIndex;

    /// Default screen dimensions (pixels)
    pub const DEFAULT_WIDTH: u32 = 64;
    pub const DEFAULT_HEIGHT: u32 = 64;
    /// Stored but never consumed; there is no lives tracking
    pub const DEFAULT_LIVES: u32 = 3;

    /// Fruit radius as a fraction of screen height
    pub const FRUIT_SIZE_RATIO: f64 = 0.06;
    /// Fruit fall speed as a fraction of screen height
    pub const FRUIT_SPEED_RATIO: f64 = 0.00095;
    /// Paddle dimensions as fractions of screen width/height
    pub const PADDLE_WIDTH_RATIO: f64 = 0.2;
    pub const PADDLE_HEIGHT_RATIO: f64 = 0.04;
    /// Paddle speed as a fraction of screen width
    pub const PADDLE_SPEED_RATIO: f64 = 0.021;

    /// Multiplicative decay applied to paddle velocity each tick
    pub const PADDLE_DAMPING: f64 = 0.9;

    /// Fixed spawn point used by the literal round reset
    pub const FRUIT_SPAWN: (f64, f64) = (40.0, 40.0);

    pub const BACKGROUND_COLOR: PaletteIndex = PaletteIndex(0);
    pub const FRUIT_COLOR: PaletteIndex = PaletteIndex(8);
    pub const PADDLE_COLOR: PaletteIndex = PaletteIndex(15);
}

/// Scale `value` by `ratio` and round to the nearest pixel, ties to even.
///
/// Ties-to-even keeps sizes identical to the vectorised rounding the game
/// was tuned with (e.g. 2.5 rounds to 2, 3.5 rounds to 4).
#[inline]
pub fn round_px(value: u32, ratio: f64) -> u32 {
    (f64::from(value) * ratio).round_ties_even().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_px_nearest() {
        assert_eq!(round_px(64, 0.06), 4); // 3.84
        assert_eq!(round_px(64, 0.2), 13); // 12.8
        assert_eq!(round_px(64, 0.04), 3); // 2.56
    }

    #[test]
    fn test_round_px_ties_to_even() {
        assert_eq!(round_px(5, 0.5), 2);
        assert_eq!(round_px(7, 0.5), 4);
        assert_eq!(round_px(0, 0.06), 0);
    }
}
