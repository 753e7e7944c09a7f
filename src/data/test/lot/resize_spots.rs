use super::*;

/// Tests that a resize replaces the entire spot set.
///
/// Expected: old spot IDs gone, `new_count` fresh available spots,
/// `number_of_spots` updated
#[tokio::test]
async fn replaces_spot_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot_repo = LotRepository::new(db);
    let spot_repo = SpotRepository::new(db);

    let lot = lot_repo.create(lot_params("Resizable", 2)).await?;
    let old_ids: Vec<i32> = spot_repo
        .get_by_lot(lot.id)
        .await?
        .iter()
        .map(|s| s.id)
        .collect();

    let resized = lot_repo.resize_spots(lot.id, 4).await?;

    assert_eq!(resized.number_of_spots, 4);

    let new_spots = spot_repo.get_by_lot(lot.id).await?;
    assert_eq!(new_spots.len(), 4);
    assert!(new_spots.iter().all(|s| s.status == SpotStatus::Available));
    assert!(new_spots.iter().all(|s| !old_ids.contains(&s.id)));

    Ok(())
}

/// Tests shrinking a lot to fewer spots.
///
/// Expected: exactly the new, smaller spot count remains
#[tokio::test]
async fn shrinks_spot_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot_repo = LotRepository::new(db);
    let lot = lot_repo.create(lot_params("Shrinking", 5)).await?;

    lot_repo.resize_spots(lot.id, 1).await?;

    let spots = SpotRepository::new(db).get_by_lot(lot.id).await?;
    assert_eq!(spots.len(), 1);

    Ok(())
}
