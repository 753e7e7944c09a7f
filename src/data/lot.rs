//! Parking lot data repository for database operations.
//!
//! Provides the `LotRepository` for lot CRUD plus the spot-set reconciliation
//! that keeps `number_of_spots` in sync with the owned spot rows. Lot creation
//! and resize run in a transaction so a lot is never observable with a partial
//! spot set.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, TransactionTrait,
};

use crate::{
    error::AppError,
    model::{
        lot::{CreateLotParams, Lot, LotWithAvailability, UpdateLotParams},
        spot::SpotStatus,
    },
};

/// Repository providing database operations for lot management.
pub struct LotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lot together with its initial spot rows.
    ///
    /// Inserts the lot and exactly `number_of_spots` spots, all `available`,
    /// in one transaction.
    ///
    /// # Arguments
    /// - `params` - Lot fields including the declared spot count
    ///
    /// # Returns
    /// - `Ok(Lot)` - The created lot
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn create(&self, params: CreateLotParams) -> Result<Lot, AppError> {
        let txn = self.db.begin().await?;

        let lot = entity::parking_lot::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            pin_code: ActiveValue::Set(params.pin_code),
            price: ActiveValue::Set(params.price),
            number_of_spots: ActiveValue::Set(params.number_of_spots),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if params.number_of_spots > 0 {
            let spots = (0..params.number_of_spots).map(|_| entity::parking_spot::ActiveModel {
                lot_id: ActiveValue::Set(lot.id),
                status: ActiveValue::Set(SpotStatus::Available.as_str().to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            });
            entity::prelude::ParkingSpot::insert_many(spots)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(Lot::from_entity(lot))
    }

    /// Applies the scalar fields of a partial update.
    ///
    /// Updates name, address, pin code, and price where provided. Spot-count
    /// changes go through `resize_spots` instead, after the caller has checked
    /// the occupancy constraint.
    ///
    /// # Returns
    /// - `Ok(Lot)` - The updated lot
    /// - `Err(AppError::NotFound)` - No lot with that ID
    pub async fn update_fields(&self, id: i32, params: &UpdateLotParams) -> Result<Lot, AppError> {
        let entity = entity::prelude::ParkingLot::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        let mut active: entity::parking_lot::ActiveModel = entity.into();
        if let Some(name) = &params.name {
            active.name = ActiveValue::Set(name.clone());
        }
        if let Some(address) = &params.address {
            active.address = ActiveValue::Set(Some(address.clone()));
        }
        if let Some(pin_code) = &params.pin_code {
            active.pin_code = ActiveValue::Set(Some(pin_code.clone()));
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }

        let updated = active.update(self.db).await?;

        Ok(Lot::from_entity(updated))
    }

    /// Replaces a lot's spot set with a fresh batch of available spots.
    ///
    /// Deletes every existing spot row and recreates `new_count` available
    /// ones, updating `number_of_spots` to match, all in one transaction. The
    /// caller must have verified that no spot is occupied. Old spot IDs vanish;
    /// closed reservations that referenced them keep a null spot link.
    pub async fn resize_spots(&self, lot_id: i32, new_count: i32) -> Result<Lot, AppError> {
        let txn = self.db.begin().await?;

        let entity = entity::prelude::ParkingLot::find_by_id(lot_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Parking lot not found".to_string()))?;

        entity::prelude::ParkingSpot::delete_many()
            .filter(entity::parking_spot::Column::LotId.eq(lot_id))
            .exec(&txn)
            .await?;

        if new_count > 0 {
            let spots = (0..new_count).map(|_| entity::parking_spot::ActiveModel {
                lot_id: ActiveValue::Set(lot_id),
                status: ActiveValue::Set(SpotStatus::Available.as_str().to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            });
            entity::prelude::ParkingSpot::insert_many(spots)
                .exec(&txn)
                .await?;
        }

        let mut active: entity::parking_lot::ActiveModel = entity.into();
        active.number_of_spots = ActiveValue::Set(new_count);
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        Ok(Lot::from_entity(updated))
    }

    /// Deletes a lot; spot rows go with it via the cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Lot deleted
    /// - `Ok(false)` - No lot with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::ParkingLot::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds a lot by its ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Lot>, AppError> {
        let entity = entity::prelude::ParkingLot::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Lot::from_entity))
    }

    /// Gets all lots.
    pub async fn get_all(&self) -> Result<Vec<Lot>, AppError> {
        let entities = entity::prelude::ParkingLot::find().all(self.db).await?;

        Ok(entities.into_iter().map(Lot::from_entity).collect())
    }

    /// Gets all lots with their derived available-spot counts.
    pub async fn get_all_with_availability(&self) -> Result<Vec<LotWithAvailability>, AppError> {
        let lots = self.get_all().await?;

        let mut result = Vec::with_capacity(lots.len());
        for lot in lots {
            let available_spots = entity::prelude::ParkingSpot::find()
                .filter(entity::parking_spot::Column::LotId.eq(lot.id))
                .filter(entity::parking_spot::Column::Status.eq(SpotStatus::Available.as_str()))
                .count(self.db)
                .await?;

            result.push(LotWithAvailability {
                lot,
                available_spots,
            });
        }

        Ok(result)
    }
}
