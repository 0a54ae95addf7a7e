//! Game object lifecycle
//!
//! Every object starts `Uninitialized` and becomes `Ready` on its first
//! `reset`. Drawing or updating before that is an error.

use glam::DVec2;
use thiserror::Error;

use crate::engine::Surface;

/// Simulation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("{object} has to be reset before step, draw or update")]
    NotInitialized { object: &'static str },
}

/// Where an object is, if it has been placed yet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Placement {
    #[default]
    Uninitialized,
    Ready(DVec2),
}

impl Placement {
    pub fn position(self) -> Option<DVec2> {
        match self {
            Placement::Ready(pos) => Some(pos),
            Placement::Uninitialized => None,
        }
    }

    /// Position of a placed object, or `NotInitialized` naming `object`
    pub fn require(self, object: &'static str) -> Result<DVec2, SimError> {
        self.position().ok_or(SimError::NotInitialized { object })
    }
}

/// Lifecycle contract shared by the fruit and the paddle.
///
/// Implementors supply `draw` and `update`; `reset` and `step` are provided.
pub trait GameObject {
    /// Name used in error messages
    const NAME: &'static str;

    fn placement(&self) -> Placement;
    fn placement_mut(&mut self) -> &mut Placement;

    /// Render at the current position
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), SimError>;

    /// Advance one tick; the meaning of `input` is up to the object
    fn update(&mut self, input: f64) -> Result<(), SimError>;

    /// Place the object. Any coordinates are accepted, negative included.
    fn reset(&mut self, x: f64, y: f64) {
        *self.placement_mut() = Placement::Ready(DVec2::new(x, y));
    }

    fn position(&self) -> Option<DVec2> {
        self.placement().position()
    }

    fn x(&self) -> Option<f64> {
        self.position().map(|p| p.x)
    }

    fn y(&self) -> Option<f64> {
        self.position().map(|p| p.y)
    }

    /// Draw, then update with `time`. Returns the object for chaining.
    fn step(&mut self, surface: &mut dyn Surface, time: f64) -> Result<&mut Self, SimError>
    where
        Self: Sized,
    {
        self.placement().require(Self::NAME)?;
        self.draw(surface)?;
        self.update(time)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Framebuffer, PaletteIndex};
    use proptest::prelude::*;

    /// Minimal object: a single pixel moving right by `input`
    #[derive(Default)]
    struct Dot {
        placement: Placement,
        updates: u32,
    }

    impl GameObject for Dot {
        const NAME: &'static str = "dot";

        fn placement(&self) -> Placement {
            self.placement
        }

        fn placement_mut(&mut self) -> &mut Placement {
            &mut self.placement
        }

        fn draw(&self, surface: &mut dyn Surface) -> Result<(), SimError> {
            let pos = self.placement.require(Self::NAME)?;
            surface.fill_rect(pos, pos, PaletteIndex(7));
            Ok(())
        }

        fn update(&mut self, input: f64) -> Result<(), SimError> {
            let pos = self.placement.require(Self::NAME)?;
            self.placement = Placement::Ready(pos + DVec2::new(input, 0.0));
            self.updates += 1;
            Ok(())
        }
    }

    #[test]
    fn test_step_before_reset_fails() {
        let mut dot = Dot::default();
        let mut fb = Framebuffer::new(4, 4).unwrap();
        let err = dot.step(&mut fb, 1.0).err();
        assert_eq!(err, Some(SimError::NotInitialized { object: "dot" }));
        // Nothing was drawn on the failed step
        assert_eq!(fb.count(PaletteIndex(7)), 0);
        assert_eq!(dot.position(), None);
    }

    #[test]
    fn test_step_draws_then_updates() {
        let mut dot = Dot::default();
        let mut fb = Framebuffer::new(4, 4).unwrap();
        dot.reset(1.0, 2.0);
        dot.step(&mut fb, 1.0).unwrap().step(&mut fb, 1.0).unwrap();

        // Drawn at x = 1 and x = 2, moved on to x = 3
        assert_eq!(fb.pixel(1, 2), Some(PaletteIndex(7)));
        assert_eq!(fb.pixel(2, 2), Some(PaletteIndex(7)));
        assert_eq!(fb.pixel(3, 2), Some(PaletteIndex(0)));
        assert_eq!(dot.x(), Some(3.0));
        assert_eq!(dot.updates, 2);
    }

    #[test]
    fn test_reset_is_reentrant() {
        let mut dot = Dot::default();
        dot.reset(1.0, 1.0);
        dot.reset(-5.0, -7.5);
        assert_eq!(dot.placement(), Placement::Ready(DVec2::new(-5.0, -7.5)));
    }

    proptest! {
        #[test]
        fn prop_reset_roundtrips_exactly(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
            let mut dot = Dot::default();
            dot.reset(x, y);
            prop_assert_eq!(dot.x(), Some(x));
            prop_assert_eq!(dot.y(), Some(y));
        }
    }
}
