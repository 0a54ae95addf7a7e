//! The player's paddle

use glam::DVec2;

use super::object::{GameObject, Placement, SimError};
use crate::consts::PADDLE_DAMPING;
use crate::engine::{PaletteIndex, Surface};

/// Input-driven paddle with damped velocity, drawn as a filled rectangle
#[derive(Debug, Clone)]
pub struct Paddle {
    placement: Placement,
    pub width: u32,
    pub height: u32,
    /// Pixels moved per unit of velocity (only used by `advance`)
    pub speed: f64,
    pub color: PaletteIndex,
    velocity: f64,
}

impl Paddle {
    pub fn new(width: u32, height: u32, speed: f64, color: PaletteIndex) -> Self {
        Self {
            placement: Placement::Uninitialized,
            width,
            height,
            speed,
            color,
            velocity: 0.0,
        }
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Move horizontally by `velocity * speed`, keeping the centre within
    /// `min_x..=max_x`.
    pub fn advance(&mut self, min_x: f64, max_x: f64) -> Result<(), SimError> {
        let pos = self.placement.require(Self::NAME)?;
        let x = pos.x + self.velocity * self.speed;
        let x = if min_x <= max_x {
            x.clamp(min_x, max_x)
        } else {
            (min_x + max_x) / 2.0
        };
        self.placement = Placement::Ready(DVec2::new(x, pos.y));
        Ok(())
    }
}

/// Number of input-free updates until `|velocity|` drops below `epsilon`.
///
/// Follows the same multiply-by-damping sequence as `Paddle::update`, so the
/// count is exact. `None` for a non-finite velocity or non-positive epsilon.
pub fn settle_ticks(velocity: f64, epsilon: f64) -> Option<u32> {
    if !velocity.is_finite() || epsilon.is_nan() || epsilon <= 0.0 {
        return None;
    }
    let mut v = velocity.abs();
    let mut ticks = 0;
    while v >= epsilon {
        v *= PADDLE_DAMPING;
        ticks += 1;
    }
    Some(ticks)
}

impl GameObject for Paddle {
    const NAME: &'static str = "paddle";

    fn placement(&self) -> Placement {
        self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), SimError> {
        let pos = self.placement.require(Self::NAME)?;
        let half = DVec2::new(f64::from(self.width), f64::from(self.height)) / 2.0;
        surface.fill_rect(pos - half, pos + half, self.color);
        Ok(())
    }

    /// Accumulate `movement` into velocity, then damp. Position is untouched.
    fn update(&mut self, movement: f64) -> Result<(), SimError> {
        self.placement.require(Self::NAME)?;
        self.velocity += movement;
        self.velocity *= PADDLE_DAMPING;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Framebuffer;
    use proptest::prelude::*;

    const WHITE: PaletteIndex = PaletteIndex(15);

    fn placed() -> Paddle {
        let mut paddle = Paddle::new(13, 3, 1.344, WHITE);
        paddle.reset(32.0, 60.0);
        paddle
    }

    #[test]
    fn test_unreset_paddle_fails_everywhere() {
        let mut paddle = Paddle::new(13, 3, 1.0, WHITE);
        let mut fb = Framebuffer::new(8, 8).unwrap();
        let expected = Err(SimError::NotInitialized { object: "paddle" });
        assert_eq!(paddle.draw(&mut fb), expected);
        assert_eq!(paddle.update(1.0), expected);
        assert_eq!(paddle.advance(0.0, 8.0), expected);
        assert!(paddle.step(&mut fb, 1.0).is_err());
        assert_eq!(paddle.velocity(), 0.0);
    }

    #[test]
    fn test_update_accumulates_then_damps() {
        let mut paddle = placed();
        paddle.update(1.0).unwrap();
        assert_eq!(paddle.velocity(), 0.9);
        paddle.update(1.0).unwrap();
        assert_eq!(paddle.velocity(), (0.9 + 1.0) * 0.9);
        paddle.update(-1.0).unwrap();
        assert_eq!(paddle.velocity(), ((0.9 + 1.0) * 0.9 - 1.0) * 0.9);
    }

    #[test]
    fn test_update_leaves_position() {
        let mut paddle = placed();
        for _ in 0..20 {
            paddle.update(1.0).unwrap();
        }
        assert_eq!(paddle.position(), Some(DVec2::new(32.0, 60.0)));
    }

    #[test]
    fn test_advance_applies_velocity_and_clamps() {
        let mut paddle = placed();
        paddle.update(10.0).unwrap();
        paddle.advance(6.5, 57.5).unwrap();
        assert_eq!(paddle.x(), Some(32.0 + 9.0 * 1.344));

        for _ in 0..10 {
            paddle.update(10.0).unwrap();
            paddle.advance(6.5, 57.5).unwrap();
        }
        assert_eq!(paddle.x(), Some(57.5));
        assert_eq!(paddle.y(), Some(60.0));
    }

    #[test]
    fn test_draw_centered_rect() {
        let mut paddle = Paddle::new(4, 2, 1.0, WHITE);
        let mut fb = Framebuffer::new(10, 10).unwrap();
        paddle.reset(5.0, 5.0);
        paddle.draw(&mut fb).unwrap();
        // Corners (3, 4) and (7, 6), inclusive
        assert_eq!(fb.count(WHITE), 15);
        assert_eq!(fb.pixel(3, 4), Some(WHITE));
        assert_eq!(fb.pixel(7, 6), Some(WHITE));
        assert_eq!(fb.pixel(8, 6), Some(PaletteIndex(0)));
    }

    #[test]
    fn test_settle_ticks_edges() {
        assert_eq!(settle_ticks(0.0, 0.1), Some(0));
        assert_eq!(settle_ticks(1.0, 0.95), Some(1));
        assert_eq!(settle_ticks(-1.0, 0.95), Some(1));
        assert_eq!(settle_ticks(f64::NAN, 0.1), None);
        assert_eq!(settle_ticks(1.0, 0.0), None);
    }

    proptest! {
        #[test]
        fn prop_idle_velocity_decays_below_epsilon(
            kick in -1000.0f64..1000.0,
            epsilon in 1.0e-9f64..1.0,
        ) {
            let mut paddle = placed();
            paddle.update(kick).unwrap();

            let ticks = settle_ticks(paddle.velocity(), epsilon).unwrap();
            for _ in 0..ticks {
                paddle.update(0.0).unwrap();
            }
            prop_assert!(paddle.velocity().abs() < epsilon);

            // Agrees with the closed form |v| * 0.9^n < epsilon
            let start = (kick * PADDLE_DAMPING).abs();
            if start >= epsilon {
                let closed = ((epsilon / start).ln() / PADDLE_DAMPING.ln()).ceil() as i64;
                prop_assert!((i64::from(ticks) - closed).abs() <= 1);
            }
        }

        #[test]
        fn prop_placed_paddle_never_fails(
            x in any::<f64>().prop_filter("finite", |v| v.is_finite()),
            y in any::<f64>().prop_filter("finite", |v| v.is_finite()),
            movement in -1.0f64..1.0,
        ) {
            let mut paddle = Paddle::new(13, 3, 1.344, WHITE);
            let mut fb = Framebuffer::new(64, 64).unwrap();
            paddle.reset(x, y);
            prop_assert_eq!(paddle.position(), Some(DVec2::new(x, y)));

            prop_assert!(paddle.draw(&mut fb).is_ok());
            prop_assert!(paddle.update(movement).is_ok());
            prop_assert!(paddle.step(&mut fb, movement).is_ok());
            // Only `advance` moves the paddle
            prop_assert_eq!(paddle.x(), Some(x));
            prop_assert_eq!(paddle.y(), Some(y));
        }
    }
}
