//! Session facade.
//!
//! `IslandGame` owns every piece of engine state for one session and is the
//! boundary a presentation layer talks to: setup, per-tile queries, direction
//! input and the treasure layout. Views returned from here are owned
//! snapshots; the presentation never holds references into engine state.

pub mod island;
pub mod view;

pub use island::{IslandGame, IslandGameBuilder};
pub use view::{CornerTreasure, MoveReport, RoleView, SetupSummary, TileView, TurnChange};
