use sea_orm::DatabaseConnection;

use crate::{
    data::{lot::LotRepository, reservation::ReservationRepository, spot::SpotRepository},
    error::AppError,
    model::{
        lot::{CreateLotParams, Lot, LotWithAvailability, UpdateLotParams},
        spot::{AdminSpotDto, SpotStatus},
    },
};

pub struct LotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lot and its initial set of available spots.
    ///
    /// # Returns
    /// - `Ok(Lot)` - The created lot
    /// - `Err(AppError::BadRequest)` - Blank name, negative price, or
    ///   non-positive spot count
    pub async fn create(&self, params: CreateLotParams) -> Result<Lot, AppError> {
        if params.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        if params.price < 0.0 {
            return Err(AppError::BadRequest("price is required".to_string()));
        }
        if params.number_of_spots <= 0 {
            return Err(AppError::BadRequest(
                "number_of_spots is required".to_string(),
            ));
        }

        LotRepository::new(self.db).create(params).await
    }

    /// Applies a partial update to a lot.
    ///
    /// Scalar fields update in place. A spot-count change rebuilds the spot
    /// set from scratch and is refused while any spot is occupied, because the
    /// rebuild would destroy the spot rows active reservations point at.
    ///
    /// # Returns
    /// - `Ok(Lot)` - The updated lot
    /// - `Err(AppError::NotFound)` - No lot with that ID
    /// - `Err(AppError::BadRequest)` - Non-positive spot count requested
    /// - `Err(AppError::Conflict)` - Spot-count change while spots are occupied
    pub async fn update(&self, lot_id: i32, params: UpdateLotParams) -> Result<Lot, AppError> {
        let lot_repo = LotRepository::new(self.db);

        let lot = lot_repo
            .find_by_id(lot_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        // Validate the spot-count change before touching the scalar fields,
        // so a refused update persists nothing.
        let resize_to = match params.number_of_spots {
            Some(new_count) if new_count <= 0 => {
                return Err(AppError::BadRequest(
                    "number_of_spots is required".to_string(),
                ));
            }
            Some(new_count) if new_count != lot.number_of_spots => {
                let occupied = SpotRepository::new(self.db).occupied_count(lot_id).await?;
                if occupied > 0 {
                    return Err(AppError::Conflict(
                        "Cannot change spot count while spots are occupied".to_string(),
                    ));
                }
                Some(new_count)
            }
            _ => None,
        };

        let mut updated = lot_repo.update_fields(lot_id, &params).await?;
        if let Some(new_count) = resize_to {
            updated = lot_repo.resize_spots(lot_id, new_count).await?;
        }

        Ok(updated)
    }

    /// Deletes a lot and its spots.
    ///
    /// # Returns
    /// - `Ok(())` - Lot deleted
    /// - `Err(AppError::NotFound)` - No lot with that ID
    /// - `Err(AppError::Conflict)` - A spot in the lot is occupied
    pub async fn delete(&self, lot_id: i32) -> Result<(), AppError> {
        let lot_repo = LotRepository::new(self.db);

        if lot_repo.find_by_id(lot_id).await?.is_none() {
            return Err(AppError::NotFound("Parking lot not found".to_string()));
        }

        let occupied = SpotRepository::new(self.db).occupied_count(lot_id).await?;
        if occupied > 0 {
            return Err(AppError::Conflict(
                "Cannot delete, spots are occupied".to_string(),
            ));
        }

        lot_repo.delete(lot_id).await?;

        Ok(())
    }

    /// Gets all lots with their derived available-spot counts.
    pub async fn list_with_availability(&self) -> Result<Vec<LotWithAvailability>, AppError> {
        LotRepository::new(self.db).get_all_with_availability().await
    }

    /// Gets the admin occupancy view of a lot's spots.
    ///
    /// Occupied spots are annotated with the vehicle and user of the active
    /// reservation holding them.
    ///
    /// # Returns
    /// - `Ok(Vec<AdminSpotDto>)` - Spots in ID order
    /// - `Err(AppError::NotFound)` - No lot with that ID
    pub async fn spots_detail(&self, lot_id: i32) -> Result<Vec<AdminSpotDto>, AppError> {
        if LotRepository::new(self.db)
            .find_by_id(lot_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Parking lot not found".to_string()));
        }

        let spots = SpotRepository::new(self.db).get_by_lot(lot_id).await?;
        let reservation_repo = ReservationRepository::new(self.db);

        let mut result = Vec::with_capacity(spots.len());
        for spot in spots {
            let active = if spot.status == SpotStatus::Occupied {
                reservation_repo.find_active_for_spot(spot.id).await?
            } else {
                None
            };

            result.push(AdminSpotDto {
                id: spot.id,
                lot_id: spot.lot_id,
                status: spot.status.as_str().to_string(),
                is_active: spot.is_active,
                vehicle_number: active.as_ref().and_then(|r| r.vehicle_number.clone()),
                user_id: active.as_ref().map(|r| r.user_id),
            });
        }

        Ok(result)
    }
}
