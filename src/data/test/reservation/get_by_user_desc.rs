use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::reservation::ReservationFactory;

/// Tests the per-user reservation listing.
///
/// Expected: only the requested user's reservations, newest first
#[tokio::test]
async fn returns_own_reservations_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    let other = factory::create_user(db).await.map_err(AppError::DbErr)?;
    let lot = factory::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let old = ReservationFactory::new(db, user.id, spot.id)
        .parking_timestamp(Utc::now() - Duration::hours(2))
        .leaving_timestamp(Utc::now() - Duration::hours(1))
        .build()
        .await
        .map_err(AppError::DbErr)?;
    let recent = factory::create_reservation(db, user.id, spot.id)
        .await
        .map_err(AppError::DbErr)?;
    factory::create_reservation(db, other.id, spot.id)
        .await
        .map_err(AppError::DbErr)?;

    let reservations = ReservationRepository::new(db).get_by_user_desc(user.id).await?;

    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].id, recent.id);
    assert_eq!(reservations[1].id, old.id);

    Ok(())
}

/// Tests the listing for a user with no reservations.
///
/// Expected: empty vec
#[tokio::test]
async fn returns_empty_for_user_without_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.map_err(AppError::DbErr)?;

    let reservations = ReservationRepository::new(db).get_by_user_desc(user.id).await?;

    assert!(reservations.is_empty());

    Ok(())
}
