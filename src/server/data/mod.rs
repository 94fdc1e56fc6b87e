//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so that services can run several
//! repository calls inside one `DatabaseTransaction`.

pub mod match_player;
pub mod matches;
pub mod player;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
