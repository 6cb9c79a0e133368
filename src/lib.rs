//! # forbidden-island
//!
//! Board engine for a cooperative sinking-island exploration game for 2-4
//! players on a square grid.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering, input wiring and dialogs live outside the
//!    crate. The presentation layer talks to [`IslandGame`] and receives owned
//!    views back.
//!
//! 2. **Separate geometry and status**: terrain positions are owned by
//!    [`GridTopology`], tile status by [`TileStatusTracker`]. Only the
//!    [`MoveValidator`] looks at both.
//!
//! 3. **Soft move failures**: an illegal move returns an error value and
//!    changes nothing, so the same role can try again. Only setup errors are
//!    fatal.
//!
//! ## Modules
//!
//! - `core`: catalogs, roles and turn order, configuration, errors, RNG
//! - `board`: coordinates, grid topology, tile status
//! - `setup`: random assignment of terrains, treasures and roles
//! - `rules`: single-step move validation
//! - `game`: the session facade and presentation views
//!
//! ## Example
//!
//! ```
//! use forbidden_island::{BoardConfig, IslandGame};
//!
//! let mut game = IslandGame::new(BoardConfig::new(3).with_seed(42)).unwrap();
//! assert_eq!(game.tiles().len(), 24);
//!
//! let role = game.current_role();
//! match game.handle_input("north") {
//!     Ok(report) => assert_eq!(report.role, role),
//!     Err(_) => assert_eq!(game.current_role(), role),
//! }
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, Color, GameRng, LayoutError, MoveError, PlayerState, Role, RoleAssignment,
    SetupError, StatusError, Treasure,
};

pub use crate::board::{Direction, GridCoord, GridTopology, TileIndex, TileStatus, TileStatusTracker};

pub use crate::rules::{MovePlan, MoveValidator};

pub use crate::game::{
    CornerTreasure, IslandGame, IslandGameBuilder, MoveReport, RoleView, SetupSummary, TileView,
    TurnChange,
};
