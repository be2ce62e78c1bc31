//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so nothing derived from the
//! cells is ever held across a mutation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_winning_line};
