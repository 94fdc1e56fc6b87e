//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models
//! for use in unit tests of the mapping layer. Unlike factories, fixtures do
//! NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let team = fixture::team::entity();
//! assert_eq!(team.team_name, fixture::team::DEFAULT_TEAM_NAME);
//! ```

pub mod match_player;
pub mod matches;
pub mod player;
pub mod team;

pub use match_player::entity as match_player_entity;
pub use matches::entity as match_entity;
pub use player::entity as player_entity;
pub use team::entity as team_entity;
