use super::*;

/// Tests finding the reservation currently holding a spot.
///
/// The admin spot detail uses this to show who occupies each spot.
///
/// Expected: the open reservation, not the closed one
#[tokio::test]
async fn finds_open_reservation_for_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    let lot = factory::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    factory::create_closed_reservation(db, user.id, spot.id)
        .await
        .map_err(AppError::DbErr)?;
    let open = factory::create_reservation(db, user.id, spot.id)
        .await
        .map_err(AppError::DbErr)?;

    let found = ReservationRepository::new(db)
        .find_active_for_spot(spot.id)
        .await?
        .expect("open reservation should be found");

    assert_eq!(found.id, open.id);

    Ok(())
}

/// Tests a spot whose reservation history is fully closed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_open_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    let lot = factory::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::create_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    factory::create_closed_reservation(db, user.id, spot.id)
        .await
        .map_err(AppError::DbErr)?;

    let found = ReservationRepository::new(db)
        .find_active_for_spot(spot.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}
