//! Reservation data repository for database operations.
//!
//! Provides the `ReservationRepository` for reservation creation, the one-shot
//! close on release, and the listing/aggregation queries used by the API and
//! the background jobs. Reservations are never deleted.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::reservation::{CreateReservationParams, Reservation},
};

/// Repository providing database operations for reservations.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation for a spot the caller has already claimed.
    ///
    /// The parking timestamp is set to now and the leaving timestamp left
    /// null, marking the reservation active. Cost was fixed by the caller from
    /// the lot's current price.
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let entity = entity::reservation::ActiveModel {
            spot_id: ActiveValue::Set(Some(params.spot_id)),
            user_id: ActiveValue::Set(params.user_id),
            parking_timestamp: ActiveValue::Set(Utc::now()),
            leaving_timestamp: ActiveValue::Set(None),
            parking_cost: ActiveValue::Set(params.parking_cost),
            vehicle_number: ActiveValue::Set(params.vehicle_number),
            remarks: ActiveValue::Set(params.remarks),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Finds a reservation by its ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, AppError> {
        let entity = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Closes a reservation by setting its leaving timestamp.
    ///
    /// Conditional update restricted to reservations whose leaving timestamp
    /// is still null, so a second release attempt affects zero rows and can be
    /// rejected by the caller without a prior read.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation closed now
    /// - `Ok(false)` - Reservation was already closed (or does not exist)
    pub async fn close(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Reservation::update_many()
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::LeavingTimestamp.is_null())
            .col_expr(
                entity::reservation::Column::LeavingTimestamp,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gets a user's reservations, newest first.
    pub async fn get_by_user_desc(&self, user_id: i32) -> Result<Vec<Reservation>, AppError> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .order_by_desc(entity::reservation::Column::ParkingTimestamp)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Gets every reservation in the system (admin view).
    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let entities = entity::prelude::Reservation::find().all(self.db).await?;

        Ok(entities
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Counts a user's reservations started at or after the given instant.
    ///
    /// The daily reminder uses this with local midnight to find accounts with
    /// no booking today.
    pub async fn count_for_user_since(
        &self,
        user_id: i32,
        since: DateTime<Utc>,
    ) -> Result<u64, AppError> {
        let count = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .filter(entity::reservation::Column::ParkingTimestamp.gte(since))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Gets a user's reservations started inside `[start, end)`.
    ///
    /// The monthly report uses this with the bounds of the prior month.
    pub async fn get_for_user_between(
        &self,
        user_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Reservation>, AppError> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::UserId.eq(user_id))
            .filter(entity::reservation::Column::ParkingTimestamp.gte(start))
            .filter(entity::reservation::Column::ParkingTimestamp.lt(end))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Reservation::from_entity)
            .collect())
    }

    /// Finds the active (not yet released) reservation holding a spot.
    pub async fn find_active_for_spot(
        &self,
        spot_id: i32,
    ) -> Result<Option<Reservation>, AppError> {
        let entity = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::SpotId.eq(spot_id))
            .filter(entity::reservation::Column::LeavingTimestamp.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }
}
