//! Core engine types: catalogs, roles, configuration, errors, RNG.
//!
//! These are shared by every other module and hold no board geometry.

pub mod catalog;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use catalog::{default_terrain_catalog, Color, Treasure, TERRAIN_NAMES};
pub use config::{BoardConfig, DEFAULT_BLACK_TILES, DEFAULT_GRID_SIZE};
pub use error::{LayoutError, MoveError, SetupError, StatusError};
pub use player::{
    ParseRoleError, PlayerState, Role, RoleAssignment, RoleList, MAX_PLAYERS, MIN_PLAYERS,
};
pub use rng::GameRng;
