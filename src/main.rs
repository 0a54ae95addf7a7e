//! Catcher entry point
//!
//! Runs the game on the headless engine.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use catcher::config::{Behavior, BehaviorPreset, ConfigFile};
use catcher::engine::{Button, HeadlessEngine, InputScript, PressedButtons};
use catcher::sim::GameObject;
use catcher::App;

#[derive(Parser, Debug)]
#[command(name = "catcher", about = "Runs the fruit catcher game headless")]
struct Args {
    /// JSON config file (defaults apply when omitted)
    config: Option<PathBuf>,

    /// Override the configured behavior flags
    #[arg(long, value_enum, ignore_case = true)]
    preset: Option<BehaviorPreset>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    run(args).inspect_err(|err| log::error!("{:#}", err))
}

fn run(args: Args) -> Result<()> {
    let ConfigFile { mut app, run } = match &args.config {
        Some(path) => ConfigFile::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ConfigFile::default(),
    };
    if let Some(preset) = args.preset {
        log::info!("Behavior preset: {}", preset.as_str());
        app.behavior = Behavior::from_preset(preset);
    }

    let script = if run.hold_right {
        InputScript::hold(PressedButtons::none().with(Button::KeyRight))
    } else {
        InputScript::idle()
    };
    let engine = HeadlessEngine::new(script, run.max_frames);

    let mut game = App::new(app, engine).context("invalid game config")?;
    game.run().context("game loop failed")?;

    let fruit = game.catcher().fruit();
    log::info!(
        "Finished at tick {} with fruit at {:?}",
        game.catcher().time(),
        fruit.position()
    );

    if let Some(surface) = game.engine().surface() {
        log::debug!("Last frame:\n{}", surface.to_ascii());
        if let Some(path) = &run.snapshot {
            surface
                .write_ppm(path, game.engine().palette())
                .with_context(|| format!("failed to write snapshot {}", path.display()))?;
            log::info!("Snapshot written to {}", path.display());
        }
    }

    Ok(())
}
