use super::*;

/// Tests the per-lot availability counts behind the lot listing.
///
/// Expected: each lot paired with its count of available spots only
#[tokio::test]
async fn counts_available_spots_per_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot_a = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;
    factory::parking_spot::create_spot(db, lot_a.id).await.map_err(AppError::DbErr)?;
    factory::parking_spot::create_spot(db, lot_a.id).await.map_err(AppError::DbErr)?;
    factory::parking_spot::create_occupied_spot(db, lot_a.id).await.map_err(AppError::DbErr)?;

    let lot_b = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;

    let listing = LotRepository::new(db).get_all_with_availability().await?;

    assert_eq!(listing.len(), 2);

    let entry_a = listing.iter().find(|l| l.lot.id == lot_a.id).unwrap();
    assert_eq!(entry_a.available_spots, 2);

    let entry_b = listing.iter().find(|l| l.lot.id == lot_b.id).unwrap();
    assert_eq!(entry_b.available_spots, 0);

    Ok(())
}
