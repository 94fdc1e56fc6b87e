//! Wire-level request and response shapes.
//!
//! Request DTOs carry `Option` fields so that a missing field surfaces as a
//! validation message instead of a deserialization failure.

pub mod api;
pub mod auth;
pub mod match_player;
pub mod matches;
pub mod player;
pub mod team;
