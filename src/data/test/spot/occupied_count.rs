use super::*;

/// Tests the occupancy count guarding lot deletion and resize.
///
/// Expected: only occupied spots of the requested lot are counted
#[tokio::test]
async fn counts_only_occupied_spots_of_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;
    factory::parking_spot::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;
    factory::parking_spot::create_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let other_lot = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;
    factory::parking_spot::create_occupied_spot(db, other_lot.id).await.map_err(AppError::DbErr)?;

    assert_eq!(SpotRepository::new(db).occupied_count(lot.id).await?, 1);

    Ok(())
}
