//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating
//! entities together with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a host team, a guest team, and a match between them.
///
/// # Returns
/// - `Ok((host, guest, fixture))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_teams(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::team::Model,
        entity::team::Model,
        entity::matches::Model,
    ),
    DbErr,
> {
    let host = crate::factory::team::create_team(db).await?;
    let guest = crate::factory::team::create_team(db).await?;
    let fixture = crate::factory::matches::create_match(db, host.id, guest.id).await?;

    Ok((host, guest, fixture))
}

/// Creates a match with both teams, a player of the host team, and the
/// player's statistics record for that match.
///
/// # Returns
/// - `Ok((fixture, player, record))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_player_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::matches::Model,
        entity::player::Model,
        entity::match_player::Model,
    ),
    DbErr,
> {
    let (host, _guest, fixture) = create_match_with_teams(db).await?;
    let player = crate::factory::player::create_player(db, host.id).await?;
    let record = crate::factory::match_player::create_match_player(db, fixture.id, player.id).await?;

    Ok((fixture, player, record))
}
