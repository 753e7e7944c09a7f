use sea_orm::DatabaseConnection;

use crate::{
    data::{lot::LotRepository, reservation::ReservationRepository, spot::SpotRepository},
    error::{auth::AuthError, AppError},
    model::reservation::{CreateReservationParams, Reservation},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reserves a spot in a lot for the given user.
    ///
    /// Claims the first available spot with an atomic conditional update, so
    /// two concurrent requests can never be granted the same spot; the loser
    /// moves on to the next candidate. The reservation cost is fixed from the
    /// lot's price at claim time.
    ///
    /// # Arguments
    /// - `lot_id` - Lot to reserve in
    /// - `user_id` - Account making the reservation
    /// - `vehicle_number` - Optional vehicle registration
    /// - `remarks` - Optional free-form note
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation, spot already occupied
    /// - `Err(AppError::NotFound)` - No lot with that ID
    /// - `Err(AppError::NoCapacity)` - Every spot in the lot is taken
    pub async fn reserve(
        &self,
        lot_id: i32,
        user_id: i32,
        vehicle_number: Option<String>,
        remarks: Option<String>,
    ) -> Result<Reservation, AppError> {
        let lot = LotRepository::new(self.db)
            .find_by_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let spot_repo = SpotRepository::new(self.db);

        let spot = spot_repo
            .claim_first_available(lot_id)
            .await?
            .ok_or(AppError::NoCapacity)?;

        let created = ReservationRepository::new(self.db)
            .create(CreateReservationParams {
                spot_id: spot.id,
                user_id,
                parking_cost: lot.price,
                vehicle_number,
                remarks,
            })
            .await;

        match created {
            Ok(reservation) => Ok(reservation),
            Err(err) => {
                // The spot was claimed but the reservation insert failed; put
                // the spot back so it is not stranded in occupied status.
                if let Err(release_err) = spot_repo.release(spot.id).await {
                    tracing::error!(
                        "Failed to release spot {} after reservation insert error: {}",
                        spot.id,
                        release_err
                    );
                }
                Err(err)
            }
        }
    }

    /// Releases a reservation owned by the given user.
    ///
    /// Closes the reservation with a conditional update keyed on the leaving
    /// timestamp still being null, so a repeated release affects zero rows and
    /// is rejected without changing any state.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The closed reservation
    /// - `Err(AppError::NotFound)` - No reservation with that ID
    /// - `Err(AuthError::NotResourceOwner)` - Caller does not own it
    /// - `Err(AppError::BadRequest)` - Already released
    pub async fn release(&self, reservation_id: i32, user_id: i32) -> Result<Reservation, AppError> {
        let reservation_repo = ReservationRepository::new(self.db);

        let reservation = reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.user_id != user_id {
            return Err(AuthError::NotResourceOwner(user_id).into());
        }

        if !reservation_repo.close(reservation_id).await? {
            return Err(AppError::BadRequest("Already released".to_string()));
        }

        // Spot may be gone if an admin resized the lot meanwhile.
        if let Some(spot_id) = reservation.spot_id {
            SpotRepository::new(self.db).release(spot_id).await?;
        }

        reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError("Reservation vanished during release".to_string())
            })
    }

    /// Gets the caller's reservation history, newest first.
    pub async fn my_reservations(&self, user_id: i32) -> Result<Vec<Reservation>, AppError> {
        ReservationRepository::new(self.db)
            .get_by_user_desc(user_id)
            .await
    }
}
