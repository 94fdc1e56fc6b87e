//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the foreign keys they need explicitly, and
//! the `helpers` module creates entities together with their dependencies.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let team = factory::team::create_team(&db).await?;
//!     let player = factory::player::create_player(&db, team.id).await?;
//!
//!     // Create with all dependencies
//!     let (host, guest, fixture) = factory::helpers::create_match_with_teams(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let team = factory::team::TeamFactory::new(&db)
//!     .team_name("Aris")
//!     .city_name("Thessaloniki")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod match_player;
pub mod matches;
pub mod player;
pub mod team;
pub mod user;

pub use match_player::create_match_player;
pub use matches::create_match;
pub use player::create_player;
pub use team::create_team;
pub use user::create_user;
