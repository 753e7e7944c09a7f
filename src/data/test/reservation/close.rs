use super::*;

/// Tests closing an active reservation.
///
/// Expected: Ok(true) and the leaving timestamp set
#[tokio::test]
async fn closes_active_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _lot, _spot, reservation) =
        factory::helpers::create_active_reservation(db).await.map_err(AppError::DbErr)?;

    let repo = ReservationRepository::new(db);

    assert!(repo.close(reservation.id).await?);

    let closed = repo
        .find_by_id(reservation.id)
        .await?
        .expect("reservation should exist");
    assert!(closed.leaving_timestamp.is_some());

    Ok(())
}

/// Tests that a reservation can only be closed once.
///
/// The conditional update matches zero rows on the second attempt, which lets
/// the service reject a double release without reading first.
///
/// Expected: first close true, second close false, timestamp unchanged
#[tokio::test]
async fn rejects_second_close() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _lot, _spot, reservation) =
        factory::helpers::create_active_reservation(db).await.map_err(AppError::DbErr)?;

    let repo = ReservationRepository::new(db);

    assert!(repo.close(reservation.id).await?);
    let first_close = repo
        .find_by_id(reservation.id)
        .await?
        .expect("reservation should exist")
        .leaving_timestamp;

    assert!(!repo.close(reservation.id).await?);
    let second_close = repo
        .find_by_id(reservation.id)
        .await?
        .expect("reservation should exist")
        .leaving_timestamp;

    assert_eq!(first_close, second_close);

    Ok(())
}

/// Tests closing a reservation that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ReservationRepository::new(db).close(999).await?);

    Ok(())
}
