//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use super::Console;
use crate::games::tictactoe::{Board, Coordinates, Marker};
use anyhow::Result;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Places this player's marker on `board` and returns where it went.
    ///
    /// On `Ok` exactly one cell has been filled with [`Player::marker`].
    async fn take_turn(&mut self, board: &mut Board, console: &mut Console) -> Result<Coordinates>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the marker this player writes.
    fn marker(&self) -> Marker;
}
