//! Game state
//!
//! `Catcher` owns the fruit, the paddle and the tick counter. Object sizes
//! and speeds are derived once from the configured screen size.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::fruit::Fruit;
use super::object::GameObject;
use super::paddle::Paddle;
use crate::config::{AppConfig, ConfigError, SpawnMode};
use crate::consts::*;
use crate::round_px;

/// Object sizes and speeds for a given screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectParams {
    pub fruit_size: u32,
    pub fruit_speed: f64,
    pub paddle_width: u32,
    pub paddle_height: u32,
    pub paddle_speed: f64,
}

impl ObjectParams {
    pub fn for_screen(width: u32, height: u32) -> Self {
        Self {
            fruit_size: round_px(height, FRUIT_SIZE_RATIO),
            fruit_speed: FRUIT_SPEED_RATIO * f64::from(height),
            paddle_width: round_px(width, PADDLE_WIDTH_RATIO),
            paddle_height: round_px(height, PADDLE_HEIGHT_RATIO),
            paddle_speed: PADDLE_SPEED_RATIO * f64::from(width),
        }
    }

    /// Unplaced fruit and paddle built from these parameters
    fn objects(&self) -> (Fruit, Paddle) {
        (
            Fruit::new(self.fruit_size, self.fruit_speed, FRUIT_COLOR),
            Paddle::new(self.paddle_width, self.paddle_height, self.paddle_speed, PADDLE_COLOR),
        )
    }
}

/// The whole game: one fruit, one paddle, a wrapping tick counter
#[derive(Debug, Clone)]
pub struct Catcher {
    pub(super) config: AppConfig,
    pub(super) params: ObjectParams,
    pub(super) fruit: Fruit,
    pub(super) paddle: Paddle,
    /// Horizontal input accumulator
    pub(super) dx: f64,
    /// Ticks since the last wrap; 0 triggers a new round
    pub(super) time: u32,
    rng: Pcg32,
}

impl Catcher {
    /// Validate `config`, derive object parameters and build both objects
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let params = ObjectParams::for_screen(config.width, config.height);
        log::debug!("Derived object params for {}x{}: {:?}", config.width, config.height, params);

        let (fruit, paddle) = params.objects();
        Ok(Self {
            rng: Pcg32::seed_from_u64(config.seed),
            fruit,
            paddle,
            config,
            params,
            dx: 0.0,
            time: 0,
        })
    }

    /// Fresh, unplaced objects. The next update starts a new round.
    pub fn init(&mut self) {
        (self.fruit, self.paddle) = self.params.objects();
        self.time = 0;
    }

    /// Place the fruit for a new round (and the paddle, if it is in play)
    pub fn reset_round(&mut self) {
        let (x, y) = match self.config.behavior.spawn {
            SpawnMode::Fixed => FRUIT_SPAWN,
            SpawnMode::Derived => {
                let size = f64::from(self.params.fruit_size);
                let max_x = f64::from(self.config.width) - size;
                let x = if max_x > size {
                    self.rng.random_range(size..=max_x)
                } else {
                    f64::from(self.config.width) / 2.0
                };
                (x, size)
            }
        };
        self.fruit.reset(x, y);

        if self.config.behavior.paddle_in_loop {
            let y = f64::from(self.config.height) - f64::from(self.params.paddle_height);
            self.paddle.reset(f64::from(self.config.width) / 2.0, y);
        }
        log::debug!("New round: fruit at ({:.1}, {:.1})", x, y);
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn params(&self) -> &ObjectParams {
        &self.params
    }

    pub fn fruit(&self) -> &Fruit {
        &self.fruit
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn time(&self) -> u32 {
        self.time
    }
}
