//! Per-frame update and draw
//!
//! One `update` per engine tick, then one `draw`. The tick counter wraps to
//! zero at the screen height, and every wrap starts a new round.

use super::object::{GameObject, SimError};
use super::state::Catcher;
use crate::config::{FallMode, InputMode};
use crate::consts::BACKGROUND_COLOR;
use crate::engine::{Button, FrameHandler, Input, Surface};

/// Directional input sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub right: bool,
    pub left: bool,
}

impl TickInput {
    pub fn sample(input: &dyn Input, mode: InputMode) -> Self {
        let right = input.is_pressed(Button::KeyRight) || input.is_pressed(Button::GamepadRight);
        let left = match mode {
            // Left re-checks the right buttons, so it always equals `right`
            InputMode::Literal => right,
            InputMode::Directional => {
                input.is_pressed(Button::KeyLeft) || input.is_pressed(Button::GamepadLeft)
            }
        };
        Self { right, left }
    }

    /// New `dx` given the previous one
    pub fn steer(self, dx: f64, mode: InputMode) -> f64 {
        if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            match mode {
                InputMode::Literal => dx,
                InputMode::Directional => 0.0,
            }
        }
    }
}

impl FrameHandler for Catcher {
    fn update(&mut self, input: &dyn Input) -> Result<(), SimError> {
        let behavior = self.config.behavior;

        if self.time == 0 {
            self.reset_round();
        }

        self.dx = TickInput::sample(input, behavior.input).steer(self.dx, behavior.input);

        let fall = match behavior.fall {
            FallMode::Elapsed => f64::from(self.time),
            FallMode::PerTick => 1.0,
        };
        self.fruit.update(fall)?;

        if behavior.paddle_in_loop {
            self.paddle.update(self.dx)?;
            if behavior.paddle_moves {
                let half = f64::from(self.paddle.width) / 2.0;
                self.paddle.advance(half, f64::from(self.config.width) - half)?;
            }
        }

        self.time += 1;
        if self.time % self.config.height == 0 {
            self.time = 0;
        }
        log::trace!("tick: time={} dx={} fruit={:?}", self.time, self.dx, self.fruit.position());
        Ok(())
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), SimError> {
        surface.clear(BACKGROUND_COLOR);
        self.fruit.draw(surface)?;
        if self.config.behavior.paddle_in_loop {
            self.paddle.draw(surface)?;
        }
        Ok(())
    }
}
