//! Board configuration.
//!
//! A session is configured by a `BoardConfig`:
//! - grid size and the fixed set of black (absent) cells
//! - the terrain catalog laid over the remaining cells
//! - number of players
//! - an optional seed for reproducible setup
//!
//! The defaults describe the standard 6x6 island with 24 terrains. A front end
//! may also load the configuration from JSON (all fields are optional there).
//!
//! ```
//! use forbidden_island::core::BoardConfig;
//!
//! let config = BoardConfig::new(3).with_seed(42);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.playable_count(), 24);
//!
//! assert!(BoardConfig::new(5).validate().is_err());
//! ```

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::catalog::default_terrain_catalog;
use super::error::SetupError;
use super::player::{MAX_PLAYERS, MIN_PLAYERS};
use crate::board::TileIndex;

/// Side length of the standard island grid.
pub const DEFAULT_GRID_SIZE: usize = 6;

/// Cells of the standard 6x6 grid that are not part of the island.
pub const DEFAULT_BLACK_TILES: [u16; 12] = [1, 2, 5, 6, 7, 12, 25, 30, 31, 32, 35, 36];

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of players (2-4).
    pub player_count: usize,

    /// The grid is `grid_size` x `grid_size` cells.
    pub grid_size: usize,

    /// Permanently absent cells, as 1-based tile indices.
    pub black_tiles: BTreeSet<TileIndex>,

    /// Terrain names to shuffle over the playable cells.
    pub terrain_catalog: Vec<String>,

    /// Seed for the setup shuffles. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            grid_size: DEFAULT_GRID_SIZE,
            black_tiles: DEFAULT_BLACK_TILES.into_iter().map(TileIndex).collect(),
            terrain_catalog: default_terrain_catalog(),
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Standard island for `player_count` players.
    ///
    /// The count is checked by `validate`, not here.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Replace the set of black tiles.
    #[must_use]
    pub fn with_black_tiles(mut self, tiles: impl IntoIterator<Item = u16>) -> Self {
        self.black_tiles = tiles.into_iter().map(TileIndex).collect();
        self
    }

    /// Replace the terrain catalog.
    #[must_use]
    pub fn with_terrain_catalog<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.terrain_catalog = names.into_iter().map(Into::into).collect();
        self
    }

    /// Make setup reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of non-black cells.
    #[must_use]
    pub fn playable_count(&self) -> usize {
        let total = self.grid_size * self.grid_size;
        let black = self
            .black_tiles
            .iter()
            .filter(|tile| (1..=total).contains(&tile.as_usize()))
            .count();
        total - black
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(SetupError::InvalidPlayerCount {
                got: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        self.validate_board()
    }

    /// Check grid, black tiles and catalog; the player count is not examined.
    pub fn validate_board(&self) -> Result<(), SetupError> {
        if self.grid_size == 0 || self.grid_size > usize::from(u8::MAX) {
            return Err(SetupError::InvalidGridSize(self.grid_size));
        }

        let total = self.grid_size * self.grid_size;
        if let Some(&tile) = self
            .black_tiles
            .iter()
            .find(|tile| !(1..=total).contains(&tile.as_usize()))
        {
            return Err(SetupError::BlackTileOutOfRange {
                tile,
                grid_size: self.grid_size,
            });
        }

        let mut seen = FxHashSet::default();
        for name in &self.terrain_catalog {
            if !seen.insert(name.as_str()) {
                return Err(SetupError::DuplicateTerrain(name.clone()));
            }
        }

        Ok(())
    }

    /// Check that the catalog can cover every playable cell.
    pub fn validate_catalog_size(&self) -> Result<(), SetupError> {
        let required = self.playable_count();
        let available = self.terrain_catalog.len();
        if available < required {
            return Err(SetupError::NotEnoughTerrains {
                required,
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();

        assert_eq!(config.grid_size, 6);
        assert_eq!(config.black_tiles.len(), 12);
        assert_eq!(config.terrain_catalog.len(), 24);
        assert_eq!(config.playable_count(), 24);
        assert!(config.validate().is_ok());
        assert!(config.validate_catalog_size().is_ok());
    }

    #[test]
    fn test_player_count_bounds() {
        for count in 2..=4 {
            assert!(BoardConfig::new(count).validate().is_ok());
        }

        assert_eq!(
            BoardConfig::new(5).validate(),
            Err(SetupError::InvalidPlayerCount {
                got: 5,
                min: 2,
                max: 4
            })
        );
        assert!(BoardConfig::new(1).validate().is_err());
        assert!(BoardConfig::new(0).validate().is_err());
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new(2)
            .with_grid_size(3)
            .with_black_tiles([5])
            .with_terrain_catalog(["a", "b", "c", "d", "e", "f", "g", "h"])
            .with_seed(7);

        assert_eq!(config.playable_count(), 8);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
        assert!(config.validate_catalog_size().is_ok());
    }

    #[test]
    fn test_small_catalog_rejected() {
        let config = BoardConfig::new(2).with_terrain_catalog(["only", "two"]);

        assert_eq!(
            config.validate_catalog_size(),
            Err(SetupError::NotEnoughTerrains {
                required: 24,
                available: 2
            })
        );
    }

    #[test]
    fn test_duplicate_terrain_rejected() {
        let config = BoardConfig::new(2).with_terrain_catalog(["a", "b", "a"]);

        assert_eq!(
            config.validate(),
            Err(SetupError::DuplicateTerrain("a".to_string()))
        );
    }

    #[test]
    fn test_black_tile_out_of_range() {
        let config = BoardConfig::new(2).with_black_tiles([0, 3]);
        assert_eq!(
            config.validate(),
            Err(SetupError::BlackTileOutOfRange {
                tile: TileIndex(0),
                grid_size: 6
            })
        );

        let config = BoardConfig::new(2).with_black_tiles([37]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_grid_rejected() {
        let config = BoardConfig::new(2).with_grid_size(0);
        assert_eq!(config.validate(), Err(SetupError::InvalidGridSize(0)));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{ "player_count": 3, "seed": 11 }"#;
        let config: BoardConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.player_count, 3);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.grid_size, 6);
        assert_eq!(config.terrain_catalog.len(), 24);
    }
}
