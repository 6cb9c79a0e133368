//! Owned snapshots handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::board::{GridCoord, TileIndex, TileStatus};
use crate::core::{Color, Role, Treasure};

/// One playable tile, for drawing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub tile: TileIndex,
    pub coord: GridCoord,
    /// `None` if no terrain was laid on this cell.
    pub terrain: Option<String>,
    pub status: TileStatus,
    /// Treasure statically paired with the terrain.
    pub treasure: Option<Treasure>,
}

/// Treasure shown on a board corner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerTreasure {
    pub coord: GridCoord,
    pub treasure: Treasure,
    pub color: Color,
}

/// An active role's piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleView {
    pub role: Role,
    pub color: Color,
    pub terrain: String,
    /// `None` while the terrain is not on the board.
    pub coord: Option<GridCoord>,
    /// Position of the role among the active roles; pieces sharing a tile
    /// are drawn side by side in this order.
    pub slot: usize,
    pub is_current: bool,
}

/// Result of a successful move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub role: Role,
    pub from: String,
    pub to: String,
    pub from_coord: GridCoord,
    pub to_coord: GridCoord,
    /// Role whose turn it is after the move.
    pub next_role: Role,
}

/// Handover between two roles at the end of a turn.
///
/// The presentation clears the highlight on `previous` and highlights
/// `current`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnChange {
    pub previous: Role,
    pub current: Role,
}

/// Outcome of setup, for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupSummary {
    pub seed: u64,
    /// Shuffled terrain catalog. This is the layout order for a randomly
    /// laid out board; with explicit placements the board does not follow it.
    pub terrain_order: Vec<String>,
    pub treasures: Vec<Treasure>,
    /// Active roles in selection order, placed on their starting terrain.
    pub roles: Vec<RoleView>,
    pub turn_order: Vec<Role>,
}
