//! SeaORM entity models for the league schema.
//!
//! Associations are stored as foreign-key columns on the "many" side only. The
//! one-to-many views (a team's players, a team's matches, a match's player
//! statistics) are queried through the relations declared here.

pub mod prelude;

pub mod match_player;
pub mod matches;
pub mod player;
pub mod team;
pub mod user;
