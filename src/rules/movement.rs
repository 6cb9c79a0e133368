//! Single-step move validation.
//!
//! A step from a terrain in a cardinal direction is legal when:
//! 1. the terrain is on the board,
//! 2. the neighboring cell lies on the grid,
//! 3. a terrain occupies that cell (black and empty cells have none),
//! 4. the cell's tile is not Sunk.
//!
//! Sinking tiles can be entered.

use serde::{Deserialize, Serialize};

use crate::board::{Direction, GridCoord, GridTopology, TileIndex, TileStatusTracker};
use crate::core::error::MoveError;

/// A validated step, ready to be committed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    pub from: GridCoord,
    pub to: GridCoord,
    /// Tile index of `to`.
    pub tile: TileIndex,
    /// Terrain on `to`.
    pub terrain: String,
}

/// Read-only view over geometry and status used to check moves.
#[derive(Clone, Copy, Debug)]
pub struct MoveValidator<'a> {
    topology: &'a GridTopology,
    status: &'a TileStatusTracker,
}

impl<'a> MoveValidator<'a> {
    #[must_use]
    pub fn new(topology: &'a GridTopology, status: &'a TileStatusTracker) -> Self {
        Self { topology, status }
    }

    /// Check a step from `terrain` toward `direction`.
    pub fn validate(&self, terrain: &str, direction: Direction) -> Result<MovePlan, MoveError> {
        let from = self
            .topology
            .terrain_grid_coords(terrain)
            .ok_or_else(|| MoveError::TerrainNotPlaced(terrain.to_string()))?;

        let to = from
            .step(direction, self.topology.grid_size())
            .ok_or(MoveError::OutOfBounds { from, direction })?;

        let target = self
            .topology
            .terrain_at(to)
            .ok_or(MoveError::NoTerrain(to))?;

        let tile = self.topology.tile_index(to);
        if !self.status.is_tile_passable(tile) {
            return Err(MoveError::TileSunk(tile));
        }

        Ok(MovePlan {
            from,
            to,
            tile,
            terrain: target.to_string(),
        })
    }

    /// Directions in which a step from `terrain` is legal.
    pub fn legal_directions(&self, terrain: &str) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.validate(terrain, direction).is_ok())
            .collect()
    }
}
