//! Setup-time identity assignment.
//!
//! Shuffles the terrain catalog, the treasures and the roles once per
//! session. Every function takes the random source explicitly and returns a
//! new sequence; no catalog is mutated in place.

pub mod identity;

pub use identity::{assign_roles, assign_terrain_names, assign_treasure_names, assign_treasures};
