//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a lot together with `spot_count` available spot rows.
///
/// # Arguments
/// - `db` - Database connection
/// - `spot_count` - Number of spot rows to create
///
/// # Returns
/// - `Ok((lot, spots))` - The created lot and its spots in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lot_with_spots(
    db: &DatabaseConnection,
    spot_count: i32,
) -> Result<(entity::parking_lot::Model, Vec<entity::parking_spot::Model>), DbErr> {
    let lot = crate::factory::parking_lot::LotFactory::new(db)
        .number_of_spots(spot_count)
        .build()
        .await?;

    let mut spots = Vec::with_capacity(spot_count as usize);
    for _ in 0..spot_count {
        spots.push(crate::factory::parking_spot::create_spot(db, lot.id).await?);
    }

    Ok((lot, spots))
}

/// Creates a user holding an active reservation on a fresh lot with one spot.
///
/// The spot is marked occupied and the reservation left open, mirroring the
/// state right after a successful reserve call.
///
/// # Returns
/// - `Ok((user, lot, spot, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_active_reservation(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::parking_lot::Model,
        entity::parking_spot::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let lot = crate::factory::parking_lot::create_lot(db).await?;
    let spot = crate::factory::parking_spot::create_occupied_spot(db, lot.id).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, user.id, spot.id).await?;

    Ok((user, lot, spot, reservation))
}
