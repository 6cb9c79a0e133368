//! Error types.
//!
//! - `SetupError`: fatal, only produced while building a session.
//! - `LayoutError`: a terrain cannot be placed on the requested cell.
//! - `MoveError`: an illegal or out-of-turn move. Recoverable; the turn does
//!   not advance and the same role may try again.
//! - `StatusError`: a tile status change that would break the
//!   Normal → Sinking → Sunk lifecycle.

use thiserror::Error;

use super::player::Role;
use crate::board::{Direction, GridCoord, TileIndex};

/// Configuration problems detected while setting up a session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("player count must be between {min} and {max}, got {got}")]
    InvalidPlayerCount { got: usize, min: usize, max: usize },

    #[error("grid size must be at least 1, got {0}")]
    InvalidGridSize(usize),

    #[error("black tile {tile} lies outside a {grid_size}x{grid_size} grid")]
    BlackTileOutOfRange { tile: TileIndex, grid_size: usize },

    #[error("terrain catalog has {available} names but the board has {required} playable tiles")]
    NotEnoughTerrains { required: usize, available: usize },

    #[error("terrain {0:?} appears more than once")]
    DuplicateTerrain(String),

    #[error("role {0} selected more than once")]
    DuplicateRole(Role),

    #[error("turn order is not a permutation of the active roles")]
    TurnOrderMismatch,

    #[error("{roles} roles chosen for a {player_count}-player session")]
    RoleCountMismatch { roles: usize, player_count: usize },

    #[error("turn index {index} is out of range for {len} roles")]
    InvalidTurnIndex { index: usize, len: usize },

    #[error("piece positions do not match the active roles")]
    PositionsMismatch,

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// A terrain could not be placed on a cell.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("cell {coord} lies outside a {grid_size}x{grid_size} grid")]
    OutOfBounds { coord: GridCoord, grid_size: usize },

    #[error("tile {0} is not part of the island")]
    BlackTile(TileIndex),
}

/// Why a move was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("it is {current}'s turn, not {role}'s")]
    NotYourTurn { role: Role, current: Role },

    #[error("{0} is not in play")]
    RoleNotInPlay(Role),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("terrain {0:?} is not on the board")]
    TerrainNotPlaced(String),

    #[error("moving {direction} from {from} leaves the board")]
    OutOfBounds { from: GridCoord, direction: Direction },

    #[error("no terrain at {0}")]
    NoTerrain(GridCoord),

    #[error("tile {0} has sunk")]
    TileSunk(TileIndex),
}

/// A tile status transition that is not allowed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("tile {0} has already sunk")]
    AlreadySunk(TileIndex),

    #[error("tile {current} has already sunk; only one tile may be sunk")]
    SunkSlotOccupied { current: TileIndex },

    #[error("tile {0} is not a playable tile")]
    NotPlayable(TileIndex),
}
