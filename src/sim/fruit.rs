//! The falling fruit

use glam::DVec2;

use super::object::{GameObject, Placement, SimError};
use crate::engine::{PaletteIndex, Surface};

/// Falls straight down, drawn as a filled circle
#[derive(Debug, Clone)]
pub struct Fruit {
    placement: Placement,
    /// Render radius (pixels)
    pub size: u32,
    /// Vertical distance per unit of `update` input
    pub speed: f64,
    pub color: PaletteIndex,
}

impl Fruit {
    pub fn new(size: u32, speed: f64, color: PaletteIndex) -> Self {
        Self {
            placement: Placement::Uninitialized,
            size,
            speed,
            color,
        }
    }
}

impl GameObject for Fruit {
    const NAME: &'static str = "fruit";

    fn placement(&self) -> Placement {
        self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), SimError> {
        let pos = self.placement.require(Self::NAME)?;
        surface.fill_circle(pos, f64::from(self.size), self.color);
        Ok(())
    }

    /// `y += speed * time`. Unclamped: the fruit keeps falling off-screen.
    fn update(&mut self, time: f64) -> Result<(), SimError> {
        let pos = self.placement.require(Self::NAME)?;
        self.placement = Placement::Ready(DVec2::new(pos.x, pos.y + self.speed * time));
        Ok(())
    }
}
