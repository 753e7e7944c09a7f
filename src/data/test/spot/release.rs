use super::*;

/// Tests releasing an occupied spot.
///
/// Expected: Ok(true) and the spot available again
#[tokio::test]
async fn releases_occupied_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::parking_spot::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let repo = SpotRepository::new(db);

    assert!(repo.release(spot.id).await?);

    let spots = repo.get_by_ids(&[spot.id]).await?;
    assert_eq!(spots[0].status, SpotStatus::Available);

    Ok(())
}

/// Tests releasing a spot that is not occupied.
///
/// Expected: Ok(false), status unchanged
#[tokio::test]
async fn rejects_release_of_available_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::parking_spot::create_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    assert!(!SpotRepository::new(db).release(spot.id).await?);

    Ok(())
}
