//! Grid topology: which cells exist and which terrain sits on each.
//!
//! The `GridTopology` owns the geometry of the island:
//! - the grid size and the fixed set of black cells
//! - a bidirectional mapping between terrain names and cells
//!
//! It knows nothing about tile status; that lives in
//! [`TileStatusTracker`](super::TileStatusTracker).
//!
//! ## Usage
//!
//! ```
//! use forbidden_island::board::{GridCoord, GridTopology, TileIndex};
//!
//! let mut grid = GridTopology::standard();
//! assert!(grid.is_black(TileIndex(1)));
//! assert_eq!(grid.playable_count(), 24);
//!
//! grid.assign_terrain(GridCoord::new(0, 2), "Heliponto").unwrap();
//! assert_eq!(grid.terrain_grid_coords("Heliponto"), Some(GridCoord::new(0, 2)));
//! assert_eq!(grid.terrain_at(GridCoord::new(0, 2)), Some("Heliponto"));
//! assert_eq!(grid.terrain_grid_coords("Observatório"), None);
//! ```

use std::collections::BTreeSet;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use super::coords::{GridCoord, TileIndex};
use crate::core::config::{DEFAULT_BLACK_TILES, DEFAULT_GRID_SIZE};
use crate::core::error::{LayoutError, SetupError};

/// Geometry of the island and the terrain placed on each cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridTopology {
    grid_size: usize,

    black: BTreeSet<TileIndex>,

    /// terrain name -> cell
    coords_by_terrain: FxHashMap<String, GridCoord>,

    /// cell -> terrain name
    terrain_by_coord: FxHashMap<GridCoord, String>,
}

impl GridTopology {
    /// Create an empty grid. Black tiles outside the grid are ignored.
    #[must_use]
    pub fn new(grid_size: usize, black: impl IntoIterator<Item = TileIndex>) -> Self {
        let total = grid_size * grid_size;
        let black = black
            .into_iter()
            .filter(|tile| (1..=total).contains(&tile.as_usize()))
            .collect();

        Self {
            grid_size,
            black,
            coords_by_terrain: FxHashMap::default(),
            terrain_by_coord: FxHashMap::default(),
        }
    }

    /// The standard 6x6 island with its 12 black cells, no terrain laid yet.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            DEFAULT_GRID_SIZE,
            DEFAULT_BLACK_TILES.into_iter().map(TileIndex),
        )
    }

    /// Side length of the grid.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Linear index of a cell.
    #[must_use]
    pub fn tile_index(&self, coord: GridCoord) -> TileIndex {
        TileIndex::from_coord(coord, self.grid_size)
    }

    /// Cell of a linear index, if it lies on the grid.
    #[must_use]
    pub fn coord_of(&self, tile: TileIndex) -> Option<GridCoord> {
        tile.to_coord(self.grid_size)
    }

    /// Check whether a tile is permanently absent.
    #[must_use]
    pub fn is_black(&self, tile: TileIndex) -> bool {
        self.black.contains(&tile)
    }

    /// The black tiles, ascending.
    pub fn black_tiles(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.black.iter().copied()
    }

    /// Non-black tiles in row-major order.
    pub fn playable_tiles(&self) -> impl Iterator<Item = TileIndex> + '_ {
        let total = self.grid_size * self.grid_size;
        (1..=total)
            .map(|index| TileIndex(index as u16))
            .filter(move |tile| !self.is_black(*tile))
    }

    /// Number of non-black tiles: `grid_size² - |black|`.
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.grid_size * self.grid_size - self.black.len()
    }

    /// Check whether a tile is on the grid and not black.
    #[must_use]
    pub fn is_playable(&self, tile: TileIndex) -> bool {
        self.coord_of(tile).is_some() && !self.is_black(tile)
    }

    /// Place a terrain on a cell.
    ///
    /// A terrain already on the board is moved; a terrain already on the
    /// target cell is removed from the board. Either way each name maps to at
    /// most one cell and each cell to at most one name.
    pub fn assign_terrain(
        &mut self,
        coord: GridCoord,
        name: impl Into<String>,
    ) -> Result<(), LayoutError> {
        if !coord.in_bounds(self.grid_size) {
            return Err(LayoutError::OutOfBounds {
                coord,
                grid_size: self.grid_size,
            });
        }
        let tile = self.tile_index(coord);
        if self.is_black(tile) {
            return Err(LayoutError::BlackTile(tile));
        }

        let name = name.into();
        if let Some(previous_coord) = self.coords_by_terrain.remove(&name) {
            self.terrain_by_coord.remove(&previous_coord);
        }
        if let Some(evicted) = self.terrain_by_coord.insert(coord, name.clone()) {
            self.coords_by_terrain.remove(&evicted);
        }
        self.coords_by_terrain.insert(name, coord);
        Ok(())
    }

    /// Remove a terrain from the board, returning the cell it occupied.
    pub fn remove_terrain(&mut self, name: &str) -> Option<GridCoord> {
        let coord = self.coords_by_terrain.remove(name)?;
        self.terrain_by_coord.remove(&coord);
        Some(coord)
    }

    /// Lay names over the playable cells in row-major order.
    ///
    /// Any previous layout is discarded. Fails if there are fewer names than
    /// playable cells or if a name repeats; surplus names are left off the
    /// board. Returns the number of terrains placed.
    pub fn lay_out<S: AsRef<str>>(&mut self, names: &[S]) -> Result<usize, SetupError> {
        let required = self.playable_count();
        if names.len() < required {
            return Err(SetupError::NotEnoughTerrains {
                required,
                available: names.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for name in names {
            if !seen.insert(name.as_ref()) {
                return Err(SetupError::DuplicateTerrain(name.as_ref().to_string()));
            }
        }

        self.coords_by_terrain.clear();
        self.terrain_by_coord.clear();

        let tiles: Vec<TileIndex> = self.playable_tiles().collect();
        for (tile, name) in tiles.into_iter().zip(names) {
            let coord = self
                .coord_of(tile)
                .ok_or(LayoutError::BlackTile(tile))?;
            self.assign_terrain(coord, name.as_ref())?;
        }

        debug!(
            "laid out {} terrains on a {}x{} grid",
            required, self.grid_size, self.grid_size
        );
        Ok(required)
    }

    /// Cell of a terrain. `None` if the terrain has not been laid out.
    #[must_use]
    pub fn terrain_grid_coords(&self, name: &str) -> Option<GridCoord> {
        self.coords_by_terrain.get(name).copied()
    }

    /// Terrain on a cell, if any.
    #[must_use]
    pub fn terrain_at(&self, coord: GridCoord) -> Option<&str> {
        self.terrain_by_coord.get(&coord).map(String::as_str)
    }

    /// Tile index of a terrain, if laid out.
    #[must_use]
    pub fn terrain_tile(&self, name: &str) -> Option<TileIndex> {
        self.terrain_grid_coords(name)
            .map(|coord| self.tile_index(coord))
    }

    /// Number of terrains currently on the board.
    #[must_use]
    pub fn terrain_count(&self) -> usize {
        self.coords_by_terrain.len()
    }
}
