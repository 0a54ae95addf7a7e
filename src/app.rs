//! Engine binding
//!
//! `App` owns an injected engine and the game, and hands the game's
//! per-frame callbacks to the engine's run loop.

use crate::config::{AppConfig, ConfigError};
use crate::engine::{Engine, EngineError};
use crate::sim::Catcher;

pub struct App<E: Engine> {
    engine: E,
    catcher: Catcher,
}

impl<E: Engine> App<E> {
    pub fn new(config: AppConfig, engine: E) -> Result<Self, ConfigError> {
        Ok(Self {
            engine,
            catcher: Catcher::new(config)?,
        })
    }

    /// Create the surface and run the engine loop until it stops.
    ///
    /// Any simulation error ends the loop and is returned as-is.
    pub fn run(&mut self) -> Result<(), EngineError> {
        let config = self.catcher.config();
        let (width, height) = (config.width, config.height);
        log::info!(
            "Catcher starting ({}x{}, lives {}, behavior {:?})",
            width,
            height,
            config.init_lives,
            config.behavior
        );

        self.engine.init_surface(width, height)?;
        self.catcher.init();
        self.engine.run(&mut self.catcher)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn catcher(&self) -> &Catcher {
        &self.catcher
    }
}
