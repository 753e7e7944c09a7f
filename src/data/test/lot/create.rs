use super::*;

/// Tests that lot creation also creates the declared spot rows.
///
/// Expected: Ok(Lot) and exactly `number_of_spots` available spots
#[tokio::test]
async fn creates_lot_with_spot_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = LotRepository::new(db).create(lot_params("Central", 3)).await?;

    assert_eq!(lot.name, "Central");
    assert_eq!(lot.number_of_spots, 3);
    assert!(lot.is_active);

    let spots = SpotRepository::new(db).get_by_lot(lot.id).await?;
    assert_eq!(spots.len(), 3);
    assert!(spots.iter().all(|s| s.status == SpotStatus::Available));

    Ok(())
}
