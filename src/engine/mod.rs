//! Engine collaborator
//!
//! The simulation only talks to the outside world through these traits:
//! - `Surface`: palette raster primitives
//! - `Input`: button queries
//! - `Engine`: surface creation and the fixed-rate run loop
//!
//! `HeadlessEngine` is the bundled backend: a software framebuffer driven by
//! scripted input for a bounded number of frames.

pub mod framebuffer;
pub mod headless;
pub mod palette;

pub use framebuffer::Framebuffer;
pub use headless::{HeadlessEngine, InputScript};
pub use palette::{Palette, Rgb};

use glam::DVec2;
use thiserror::Error;

use crate::sim::SimError;

/// Index into the engine's fixed colour table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PaletteIndex(pub u8);

/// Input signals the game can query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyRight,
    KeyLeft,
    GamepadRight,
    GamepadLeft,
}

impl Button {
    pub const ALL: [Button; 4] = [
        Button::KeyRight,
        Button::KeyLeft,
        Button::GamepadRight,
        Button::GamepadLeft,
    ];

    fn slot(self) -> usize {
        match self {
            Button::KeyRight => 0,
            Button::KeyLeft => 1,
            Button::GamepadRight => 2,
            Button::GamepadLeft => 3,
        }
    }
}

/// Render target for one frame
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Fill the whole surface with one colour
    fn clear(&mut self, color: PaletteIndex);
    /// Filled circle centred at `center`
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: PaletteIndex);
    /// Filled axis-aligned rectangle spanning `min..=max`
    fn fill_rect(&mut self, min: DVec2, max: DVec2, color: PaletteIndex);
}

/// Button state for the current tick
pub trait Input {
    fn is_pressed(&self, button: Button) -> bool;
}

/// Set of buttons held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressedButtons {
    held: [bool; 4],
}

impl PressedButtons {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with(mut self, button: Button) -> Self {
        self.press(button);
        self
    }

    pub fn press(&mut self, button: Button) {
        self.held[button.slot()] = true;
    }

    pub fn release(&mut self, button: Button) {
        self.held[button.slot()] = false;
    }
}

impl FromIterator<Button> for PressedButtons {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

impl Input for PressedButtons {
    fn is_pressed(&self, button: Button) -> bool {
        self.held[button.slot()]
    }
}

/// Per-tick callbacks handed to `Engine::run`
pub trait FrameHandler {
    /// Advance simulation state (called first each tick)
    fn update(&mut self, input: &dyn Input) -> Result<(), SimError>;
    /// Render current state (called after `update`)
    fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), SimError>;
}

/// The engine owns the window/surface and the frame loop
pub trait Engine {
    /// Create the render surface; must precede `run`
    fn init_surface(&mut self, width: u32, height: u32) -> Result<(), EngineError>;

    /// Drive `handler` once per tick until the engine stops or a callback fails
    fn run<H: FrameHandler>(&mut self, handler: &mut H) -> Result<(), EngineError>;
}

/// Engine failures (including simulation errors surfacing from callbacks)
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("surface must be initialized before the run loop starts")]
    SurfaceNotInitialized,

    #[error("invalid surface size {width}x{height}")]
    InvalidSurfaceSize { width: u32, height: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sim(#[from] SimError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_buttons() {
        let mut buttons = PressedButtons::none().with(Button::KeyRight);
        assert!(buttons.is_pressed(Button::KeyRight));
        assert!(!buttons.is_pressed(Button::KeyLeft));

        buttons.press(Button::GamepadLeft);
        buttons.release(Button::KeyRight);
        assert!(!buttons.is_pressed(Button::KeyRight));
        assert!(buttons.is_pressed(Button::GamepadLeft));
    }

    #[test]
    fn test_pressed_buttons_from_iter() {
        let buttons: PressedButtons = [Button::KeyLeft, Button::GamepadRight].into_iter().collect();
        let held: Vec<_> = Button::ALL
            .into_iter()
            .filter(|b| buttons.is_pressed(*b))
            .collect();
        assert_eq!(held, vec![Button::KeyLeft, Button::GamepadRight]);
    }
}
