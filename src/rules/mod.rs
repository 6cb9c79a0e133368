//! Movement rules.
//!
//! The validator joins the two board structures, geometry and tile status,
//! and decides whether a single step is legal. It never mutates anything;
//! committing a validated move is the job of [`crate::game::IslandGame`].

pub mod movement;

pub use movement::{MovePlan, MoveValidator};
