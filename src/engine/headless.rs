//! Headless engine backend
//!
//! Runs the frame loop against a `Framebuffer` with scripted input. Used by
//! the binary and by tests; there is no window and no real-time pacing.

use super::framebuffer::Framebuffer;
use super::palette::Palette;
use super::{Engine, EngineError, FrameHandler, PressedButtons};

/// Button states fed to the game, one entry per frame.
///
/// Past the end of the script the last entry repeats; an empty script
/// presses nothing.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    frames: Vec<PressedButtons>,
}

impl InputScript {
    pub fn new(frames: Vec<PressedButtons>) -> Self {
        Self { frames }
    }

    /// No buttons, ever
    pub fn idle() -> Self {
        Self::default()
    }

    /// The same buttons held on every frame
    pub fn hold(buttons: PressedButtons) -> Self {
        Self::new(vec![buttons])
    }

    pub fn at(&self, frame: u64) -> PressedButtons {
        let last = match self.frames.len() {
            0 => return PressedButtons::none(),
            n => n - 1,
        };
        let i = usize::try_from(frame).map_or(last, |f| f.min(last));
        self.frames[i]
    }
}

/// Fixed-frame software engine
#[derive(Debug)]
pub struct HeadlessEngine {
    surface: Option<Framebuffer>,
    palette: Palette,
    script: InputScript,
    /// Stop after this many frames (`None` runs until a callback fails)
    max_frames: Option<u64>,
    frame: u64,
}

impl HeadlessEngine {
    pub fn new(script: InputScript, max_frames: Option<u64>) -> Self {
        Self {
            surface: None,
            palette: Palette::default(),
            script,
            max_frames,
            frame: 0,
        }
    }

    /// Current frame contents (after `init_surface`)
    pub fn surface(&self) -> Option<&Framebuffer> {
        self.surface.as_ref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Frames completed so far
    pub fn frames_run(&self) -> u64 {
        self.frame
    }
}

impl Engine for HeadlessEngine {
    fn init_surface(&mut self, width: u32, height: u32) -> Result<(), EngineError> {
        self.surface = Some(Framebuffer::new(width, height)?);
        self.frame = 0;
        log::info!("Headless surface ready ({}x{})", width, height);
        Ok(())
    }

    fn run<H: FrameHandler>(&mut self, handler: &mut H) -> Result<(), EngineError> {
        let surface = self
            .surface
            .as_mut()
            .ok_or(EngineError::SurfaceNotInitialized)?;

        while !self.max_frames.is_some_and(|max| self.frame >= max) {
            let input = self.script.at(self.frame);
            handler.update(&input)?;
            handler.draw(surface)?;
            self.frame += 1;
            log::trace!("frame {} done", self.frame);
        }

        log::info!("Run loop stopped after {} frames", self.frame);
        Ok(())
    }
}
