//! Board geometry and tile status.
//!
//! - `coords`: grid coordinates, 1-based tile indices, directions
//! - `topology`: black cells and the terrain ↔ cell mapping
//! - `status`: Normal / Sinking / Sunk per tile
//!
//! Geometry and status are kept in separate structures, joined only by the
//! move validator in [`crate::rules`].

pub mod coords;
pub mod status;
pub mod topology;

pub use coords::{Direction, GridCoord, ParseDirectionError, TileIndex};
pub use status::{TileStatus, TileStatusTracker};
pub use topology::GridTopology;
