use super::*;

/// Tests inserting a reservation against a claimed spot.
///
/// Expected: active reservation with the given cost and a set parking timestamp
#[tokio::test]
async fn creates_active_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    let lot = factory::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let reservation = ReservationRepository::new(db)
        .create(reservation_params(spot.id, user.id, 42.5))
        .await?;

    assert_eq!(reservation.spot_id, Some(spot.id));
    assert_eq!(reservation.user_id, user.id);
    assert_eq!(reservation.parking_cost, 42.5);
    assert!(reservation.is_active());

    Ok(())
}

/// Tests that vehicle number and remarks are stored when provided.
///
/// Expected: both optional fields round-trip through the insert
#[tokio::test]
async fn stores_vehicle_number_and_remarks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    let lot = factory::create_lot(db).await.map_err(AppError::DbErr)?;
    let spot = factory::create_occupied_spot(db, lot.id).await.map_err(AppError::DbErr)?;

    let reservation = ReservationRepository::new(db)
        .create(CreateReservationParams {
            spot_id: spot.id,
            user_id: user.id,
            parking_cost: 10.0,
            vehicle_number: Some("KA-01-1234".to_string()),
            remarks: Some("near entrance".to_string()),
        })
        .await?;

    assert_eq!(reservation.vehicle_number.as_deref(), Some("KA-01-1234"));
    assert_eq!(reservation.remarks.as_deref(), Some("near entrance"));

    Ok(())
}
