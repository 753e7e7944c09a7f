use super::*;

/// Tests the atomic claim on an available spot.
///
/// Expected: Ok(true) and the spot flipped to occupied
#[tokio::test]
async fn claims_available_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::parking_spot::create_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let repo = SpotRepository::new(db);

    assert!(repo.try_claim(spot.id).await?);

    let spots = repo.get_by_ids(&[spot.id]).await?;
    assert_eq!(spots[0].status, SpotStatus::Occupied);

    Ok(())
}

/// Tests that a spot can only be claimed once.
///
/// The conditional update matches zero rows on the second attempt, which is
/// the property that makes two concurrent reserves safe.
///
/// Expected: first claim true, second claim false
#[tokio::test]
async fn rejects_claim_on_occupied_spot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lot = factory::parking_lot::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::parking_spot::create_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let repo = SpotRepository::new(db);

    assert!(repo.try_claim(spot.id).await?);
    assert!(!repo.try_claim(spot.id).await?);

    Ok(())
}
