//! Renderer-facing projection of the game state.
//!
//! The game itself stores history as typed snapshots; renderers want a
//! flat, serializable model they can diff and draw. [`GameView`] is that
//! model, rebuilt from scratch on every query so it can never drift from
//! the authoritative state.

use crate::game::{Game, GameStatus};
use crate::types::Square;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One row of the rewind list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEntry {
    /// Step index into the recorded history.
    pub step: usize,
    /// Button label, e.g. `Go to move #3: X at (row 1, col 2)`.
    pub label: String,
    /// Whether this step is the one currently displayed.
    pub current: bool,
}

/// Flat render model of a game: the current board, the status line, and
/// the rewind list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Squares of the currently displayed board, row-major.
    pub cells: [Square; 9],
    /// Status at the current step.
    pub status: GameStatus,
    /// The step the board is displaying.
    pub current_step: usize,
    /// One entry per recorded snapshot, in step order.
    pub steps: Vec<StepEntry>,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let steps = game
            .history()
            .snapshots()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| StepEntry {
                step,
                label: snapshot.label(step),
                current: step == game.current_step(),
            })
            .collect();

        Self {
            cells: *game.board().squares(),
            status: game.status(),
            current_step: game.current_step(),
            steps,
        }
    }
}

impl GameView {
    /// Returns the status line for display.
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }

    /// Serializes the view to JSON.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Game {
    /// Builds the render model for the current step.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}
