use super::*;

/// Tests that the lowest-ID available spot is claimed.
///
/// Expected: Ok(Some(Spot)) with the first free spot, marked occupied
#[tokio::test]
async fn claims_lowest_available_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;
    factory::parking_spot::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;
    let free_spot = factory::parking_spot::create_spot(db, lot.id).await.map_err(AppError::DbErr)?;
    factory::parking_spot::create_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let claimed = SpotRepository::new(db)
        .claim_first_available(lot.id)
        .await?
        .expect("a spot should be claimed");

    assert_eq!(claimed.id, free_spot.id);
    assert_eq!(claimed.status, SpotStatus::Occupied);

    Ok(())
}

/// Tests claiming from a fully occupied lot.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_lot_is_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;
    factory::parking_spot::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let claimed = SpotRepository::new(db).claim_first_available(lot.id).await?;

    assert!(claimed.is_none());

    Ok(())
}

/// Tests claiming from a lot with no spot rows at all.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;

    let claimed = SpotRepository::new(db).claim_first_available(lot.id).await?;

    assert!(claimed.is_none());

    Ok(())
}
