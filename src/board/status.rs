//! Tile status lifecycle: Normal → Sinking → Sunk.
//!
//! Status is keyed by linear tile index and kept apart from geometry. A tile
//! never recovers once Sinking or Sunk. At most one tile is Sunk at a time,
//! and a Sunk tile is never also Sinking.
//!
//! Only Sunk tiles block movement; Sinking tiles can still be entered.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::coords::TileIndex;
use crate::core::error::StatusError;

/// Status of a single tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileStatus {
    #[default]
    Normal,
    Sinking,
    Sunk,
}

impl TileStatus {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileStatus::Normal => "Normal",
            TileStatus::Sinking => "Afundando",
            TileStatus::Sunk => "Afundado",
        }
    }

    /// Check whether a piece may enter a tile with this status.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, TileStatus::Sunk)
    }
}

impl std::fmt::Display for TileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sinking set and sunk slot.
///
/// The sinking set is an `im::OrdSet` so board snapshots clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileStatusTracker {
    sunk: Option<TileIndex>,
    sinking: OrdSet<TileIndex>,
}

impl TileStatusTracker {
    /// All tiles Normal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a tile.
    #[must_use]
    pub fn status_of(&self, tile: TileIndex) -> TileStatus {
        if self.sunk == Some(tile) {
            TileStatus::Sunk
        } else if self.sinking.contains(&tile) {
            TileStatus::Sinking
        } else {
            TileStatus::Normal
        }
    }

    /// False only for the Sunk tile.
    #[must_use]
    pub fn is_tile_passable(&self, tile: TileIndex) -> bool {
        self.status_of(tile).is_passable()
    }

    /// Start a tile sinking.
    ///
    /// Idempotent for a tile that is already Sinking. Fails for the Sunk tile.
    pub fn mark_sinking(&mut self, tile: TileIndex) -> Result<TileStatus, StatusError> {
        if self.sunk == Some(tile) {
            return Err(StatusError::AlreadySunk(tile));
        }
        self.sinking.insert(tile);
        Ok(TileStatus::Sinking)
    }

    /// Sink a tile, from Normal or Sinking.
    ///
    /// Fails if another tile already occupies the sunk slot.
    pub fn mark_sunk(&mut self, tile: TileIndex) -> Result<TileStatus, StatusError> {
        match self.sunk {
            Some(current) if current == tile => return Err(StatusError::AlreadySunk(tile)),
            Some(current) => return Err(StatusError::SunkSlotOccupied { current }),
            None => {}
        }
        self.sinking.remove(&tile);
        self.sunk = Some(tile);
        Ok(TileStatus::Sunk)
    }

    /// The Sunk tile, if any.
    #[must_use]
    pub fn sunk_tile(&self) -> Option<TileIndex> {
        self.sunk
    }

    /// Sinking tiles, ascending.
    pub fn sinking_tiles(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.sinking.iter().copied()
    }
}
