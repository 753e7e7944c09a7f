use super::*;

/// Tests the partial scalar update.
///
/// Expected: provided fields updated, omitted fields untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LotRepository::new(db);
    let lot = repo.create(lot_params("Old Name", 2)).await?;

    let updated = repo
        .update_fields(
            lot.id,
            &UpdateLotParams {
                name: Some("New Name".to_string()),
                price: Some(20.0),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.price, 20.0);
    assert_eq!(updated.number_of_spots, 2);
    assert_eq!(updated.address, lot.address);

    Ok(())
}

/// Tests updating a missing lot.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_lot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LotRepository::new(db)
        .update_fields(9999, &UpdateLotParams::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
