//! Application state for the terminal driver.
//!
//! DESIGN
//! ======
//! `AppState` pairs the game shell with a raster-backed canvas engine and
//! the scripted pen. Toolbar changes go through the shell, which applies the
//! tool rules, and the resulting settings are pushed to the engine. The
//! shell never sees the canvas and the canvas never sees the round.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use canvas::color::Color;
use canvas::engine::CanvasEngine;
use canvas::input::{PointerEvent, StrokeCommand};
use canvas::raster::Raster;
use canvas::tool::{Tool, ToolSettings};
use game::config::GameConfig;
use game::feed::GuessEntry;
use game::roster::PlayerScore;
use game::round::{RoundId, RoundStatus};
use game::shell::GameShell;
use serde::Serialize;

use crate::cli::Args;
use crate::error::AppError;
use crate::services::autodraw::AutoDraw;

// =============================================================================
// ROUND SUMMARY
// =============================================================================

/// What the driver prints as JSON when a round ends.
#[derive(Debug, Clone, Serialize)]
pub struct RoundSummary {
    pub round: RoundId,
    pub word: &'static str,
    pub status: RoundStatus,
    pub elapsed_secs: u32,
    pub guesses: usize,
    pub strokes: u64,
    pub painted_pixels: usize,
    pub feed: Vec<GuessEntry>,
    /// Session scores, highest first.
    pub scores: Vec<PlayerScore>,
}

// =============================================================================
// APP STATE
// =============================================================================

pub struct AppState {
    pub shell: GameShell,
    pub engine: CanvasEngine<Raster>,
    pen: AutoDraw,
    /// Sealed-stroke count when the current round started.
    strokes_before: u64,
}

impl AppState {
    /// Build the shell and attach a raster sized from `args`.
    ///
    /// # Errors
    ///
    /// Fails if the raster rejects the viewport size or scale.
    pub fn new(args: &Args, config: GameConfig) -> Result<Self, AppError> {
        let viewport = args.viewport();
        let shell = GameShell::new(config);

        let mut engine = CanvasEngine::new();
        engine.attach(Raster::default(), viewport)?;
        engine.set_settings(&shell.settings())?;

        Ok(Self { shell, engine, pen: AutoDraw::new(viewport), strokes_before: 0 })
    }

    /// Clear the canvas and start a new round.
    ///
    /// # Errors
    ///
    /// Propagates raster failures from lifting the pen.
    pub fn start_round(&mut self) -> Result<RoundId, AppError> {
        self.lift_pen()?;
        if let Some(raster) = self.engine.surface.backend_mut() {
            raster.fill(Color::TRANSPARENT);
        }
        self.pen.reset();
        self.strokes_before = self.engine.surface.sealed_strokes();
        Ok(self.shell.start_round())
    }

    /// Move the scripted pen one step while a round is playing.
    ///
    /// # Errors
    ///
    /// Propagates raster failures.
    pub fn step_pen(&mut self) -> Result<Option<StrokeCommand>, AppError> {
        if self.shell.status() != RoundStatus::Playing {
            return Ok(None);
        }
        let event = self.pen.next_event();
        Ok(Some(self.engine.on_pointer(event)?))
    }

    /// End any open stroke.
    ///
    /// # Errors
    ///
    /// Propagates raster failures.
    pub fn lift_pen(&mut self) -> Result<(), AppError> {
        let at = self.pen.last_point();
        self.engine.on_pointer(PointerEvent::leave(at.x, at.y))?;
        Ok(())
    }

    // --- Toolbar ---

    /// # Errors
    ///
    /// Propagates raster failures from reconfiguring the surface.
    pub fn select_tool(&mut self, tool: Tool) -> Result<ToolSettings, AppError> {
        let settings = self.shell.select_tool(tool);
        self.engine.set_settings(&settings)?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Propagates raster failures from reconfiguring the surface.
    pub fn pick_color(&mut self, color: Color) -> Result<ToolSettings, AppError> {
        let settings = self.shell.pick_color(color);
        self.engine.set_settings(&settings)?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Propagates raster failures from reconfiguring the surface.
    pub fn pick_width(&mut self, width: f64) -> Result<ToolSettings, AppError> {
        let settings = self.shell.pick_width(width);
        self.engine.set_settings(&settings)?;
        Ok(settings)
    }

    // --- Queries ---

    #[must_use]
    pub fn raster(&self) -> Option<&Raster> {
        self.engine.surface.backend()
    }

    /// Summary of the current round, if one was started.
    #[must_use]
    pub fn summary(&self) -> Option<RoundSummary> {
        let round = self.shell.round()?;
        Some(RoundSummary {
            round: round.id(),
            word: round.word(),
            status: round.status(),
            elapsed_secs: self.shell.config().round_secs.saturating_sub(round.remaining_secs()),
            guesses: round.guesses_made(),
            strokes: self.engine.surface.sealed_strokes() - self.strokes_before,
            painted_pixels: self.raster().map_or(0, Raster::painted_count),
            feed: self.shell.feed().chronological().cloned().collect(),
            scores: self.shell.roster().ranked(),
        })
    }
}
