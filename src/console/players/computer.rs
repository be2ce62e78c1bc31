//! Computer player driven by the move heuristic.

use super::Player;
use crate::console::{Console, GameEvent};
use crate::games::tictactoe::{Board, Coordinates, Marker, plan_move};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Pause before the computer moves, so humans can follow along.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_secs(2);

/// Computer player using the win / block / fallback heuristic.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    marker: Marker,
    opponent: Marker,
    think_delay: Duration,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player that knows its opponent's marker.
    pub fn new(name: impl Into<String>, marker: Marker, opponent: Marker) -> Self {
        let name = name.into();
        info!(computer = %name, %marker, %opponent, "Creating computer player");
        Self {
            name,
            marker,
            opponent,
            think_delay: DEFAULT_THINK_DELAY,
            rng: StdRng::from_entropy(),
        }
    }

    /// Sets the pause taken before each move.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Seeds the random fallback for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The marker this player tries to block.
    pub fn opponent(&self) -> Marker {
        self.opponent
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(computer = %self.name))]
    async fn take_turn(&mut self, board: &mut Board, console: &mut Console) -> Result<Coordinates> {
        console.emit(GameEvent::ComputerThinking {
            name: self.name.clone(),
        });

        if !self.think_delay.is_zero() {
            debug!(delay = ?self.think_delay, "Thinking");
            tokio::time::sleep(self.think_delay).await;
        }

        let snapshot = *board;
        let (coords, tier) = plan_move(&snapshot, self.marker, self.opponent, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No empty cell left for {}", self.name))?;

        board.place(coords, self.marker)?;
        info!(%coords, %tier, "Computer placed marker");
        Ok(coords)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn marker(&self) -> Marker {
        self.marker
    }
}
