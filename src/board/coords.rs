//! Grid coordinates, linear tile indices and movement directions.
//!
//! Tiles are identified by a 1-based linear index over the whole grid:
//! `row * grid_size + col + 1`. Row 0 is the northern edge and column 0 the
//! western edge.
//!
//! ```
//! use forbidden_island::board::{Direction, GridCoord, TileIndex};
//!
//! let coord = GridCoord::new(1, 2);
//! assert_eq!(TileIndex::from_coord(coord, 6), TileIndex(9));
//! assert_eq!(coord.step(Direction::North, 6), Some(GridCoord::new(0, 2)));
//! assert_eq!(GridCoord::new(0, 2).step(Direction::North, 6), None);
//! ```

use serde::{Deserialize, Serialize};

/// Cell position on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check that the coordinate lies on a `grid_size` x `grid_size` grid.
    #[must_use]
    pub const fn in_bounds(self, grid_size: usize) -> bool {
        self.row < grid_size && self.col < grid_size
    }

    /// The neighboring cell one step in `direction`.
    ///
    /// Returns `None` when the step would leave the grid. There is no
    /// clamping.
    #[must_use]
    pub fn step(self, direction: Direction, grid_size: usize) -> Option<GridCoord> {
        let (d_row, d_col) = direction.offset();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let next = GridCoord::new(row, col);
        next.in_bounds(grid_size).then_some(next)
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 1-based linear tile index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileIndex(pub u16);

impl TileIndex {
    /// Index of the tile at `coord`.
    #[must_use]
    pub fn from_coord(coord: GridCoord, grid_size: usize) -> Self {
        Self((coord.row * grid_size + coord.col + 1) as u16)
    }

    /// Coordinate of this tile. `None` for index 0 or beyond the grid.
    #[must_use]
    pub fn to_coord(self, grid_size: usize) -> Option<GridCoord> {
        let index = self.as_usize().checked_sub(1)?;
        if grid_size == 0 || index >= grid_size * grid_size {
            return None;
        }
        Some(GridCoord::new(index / grid_size, index % grid_size))
    }

    /// The raw index.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the four cardinal directions. Diagonal moves do not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// `(row, col)` delta of a single step.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The direction pointing back.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a token that is not a cardinal direction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("not a direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl std::str::FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts English and Portuguese names, and the single-letter forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "norte" | "n" | "up" => Ok(Direction::North),
            "south" | "sul" | "s" | "down" => Ok(Direction::South),
            "east" | "leste" | "e" | "right" => Ok(Direction::East),
            "west" | "oeste" | "w" | "o" | "left" => Ok(Direction::West),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
