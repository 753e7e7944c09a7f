use super::*;
use chrono::{Duration, Utc};
use test_utils::factory::reservation::ReservationFactory;

/// Tests the booking count used by the daily reminder.
///
/// Expected: reservations before the cutoff are not counted
#[tokio::test]
async fn counts_reservations_at_or_after_cutoff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    let lot = factory::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let cutoff = Utc::now() - Duration::hours(12);

    ReservationFactory::new(db, user.id, spot.id)
        .parking_timestamp(cutoff - Duration::hours(1))
        .leaving_timestamp(cutoff - Duration::minutes(30))
        .build()
        .await
        .map_err(AppError::DbErr)?;
    factory::create_reservation(db, user.id, spot.id)
        .await
        .map_err(AppError::DbErr)?;

    assert_eq!(
        ReservationRepository::new(db)
            .count_for_user_since(user.id, cutoff)
            .await?,
        1
    );

    Ok(())
}

/// Tests that other users' reservations are not counted.
///
/// Expected: zero for the quiet user
#[tokio::test]
async fn ignores_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let quiet_user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    let busy_user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    let lot = factory::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    factory::create_reservation(db, busy_user.id, spot.id)
        .await
        .map_err(AppError::DbErr)?;

    let count = ReservationRepository::new(db)
        .count_for_user_since(quiet_user.id, Utc::now() - Duration::hours(1))
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
