mod action;
mod board;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use action::{CoordinatesFormatError, Move, PlaceError};
pub use board::{Board, Cells};
pub use strategy::{Tier, plan_move, select_move};
pub use types::{BOARD_SIZE, Coordinates, Marker};
