use super::*;

/// Tests lot deletion with the spot cascade.
///
/// Expected: Ok(true), spot rows gone with the lot
#[tokio::test]
async fn deletes_lot_and_spots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot_repo = LotRepository::new(db);
    let lot = lot_repo.create(lot_params("Doomed", 2)).await?;

    assert!(lot_repo.delete(lot.id).await?);

    assert!(lot_repo.find_by_id(lot.id).await?.is_none());
    assert!(SpotRepository::new(db).get_by_lot(lot.id).await?.is_empty());

    Ok(())
}

/// Tests deleting a missing lot.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!LotRepository::new(db).delete(9999).await?);

    Ok(())
}
