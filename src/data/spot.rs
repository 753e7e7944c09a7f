//! Parking spot data repository for database operations.
//!
//! Provides the `SpotRepository` with the occupancy queries and the atomic
//! claim/release transitions. Both transitions are conditional updates that
//! check the current status in the WHERE clause, so concurrent callers can
//! never both flip the same spot.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::spot::{Spot, SpotStatus},
};

/// Repository providing database operations for spot occupancy.
pub struct SpotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all spots belonging to a lot, ordered by ID.
    pub async fn get_by_lot(&self, lot_id: i32) -> Result<Vec<Spot>, AppError> {
        let entities = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LotId.eq(lot_id))
            .order_by_asc(entity::parking_spot::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Spot::from_entity).collect()
    }

    /// Gets spots by their IDs.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Spot>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        entities.into_iter().map(Spot::from_entity).collect()
    }

    /// Counts occupied spots in a lot.
    ///
    /// Guards lot deletion and resize, both of which are rejected while this
    /// count is non-zero.
    pub async fn occupied_count(&self, lot_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::ParkingSpot::find()
            .filter(entity::parking_spot::Column::LotId.eq(lot_id))
            .filter(entity::parking_spot::Column::Status.eq(SpotStatus::Occupied.as_str()))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Attempts to atomically claim one spot.
    ///
    /// Issues a conditional update that flips the spot to `occupied` only if
    /// it is currently `available`. Zero rows affected means another caller
    /// claimed it first.
    ///
    /// # Returns
    /// - `Ok(true)` - This caller now owns the spot
    /// - `Ok(false)` - The spot was no longer available
    pub async fn try_claim(&self, spot_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::ParkingSpot::update_many()
            .filter(entity::parking_spot::Column::Id.eq(spot_id))
            .filter(entity::parking_spot::Column::Status.eq(SpotStatus::Available.as_str()))
            .col_expr(
                entity::parking_spot::Column::Status,
                Expr::value(SpotStatus::Occupied.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Claims the first available spot in a lot.
    ///
    /// Picks candidates in ID order (no fairness guarantee beyond what the
    /// store returns) and claims each with `try_claim` until one succeeds.
    /// A lost claim means a concurrent caller took that spot; the next query
    /// sees the remaining candidates, so the loop terminates once the lot is
    /// exhausted.
    ///
    /// # Returns
    /// - `Ok(Some(Spot))` - The claimed spot, already marked occupied
    /// - `Ok(None)` - No available spot remained
    pub async fn claim_first_available(&self, lot_id: i32) -> Result<Option<Spot>, AppError> {
        loop {
            let candidate = entity::prelude::ParkingSpot::find()
                .filter(entity::parking_spot::Column::LotId.eq(lot_id))
                .filter(entity::parking_spot::Column::Status.eq(SpotStatus::Available.as_str()))
                .order_by_asc(entity::parking_spot::Column::Id)
                .one(self.db)
                .await?;

            let Some(candidate) = candidate else {
                return Ok(None);
            };

            if self.try_claim(candidate.id).await? {
                let mut spot = Spot::from_entity(candidate)?;
                spot.status = SpotStatus::Occupied;
                return Ok(Some(spot));
            }
        }
    }

    /// Releases a spot back to `available`.
    ///
    /// Conditional update mirroring `try_claim`; zero rows affected means the
    /// spot was not occupied.
    ///
    /// # Returns
    /// - `Ok(true)` - Spot released
    /// - `Ok(false)` - Spot was not in `occupied` status
    pub async fn release(&self, spot_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::ParkingSpot::update_many()
            .filter(entity::parking_spot::Column::Id.eq(spot_id))
            .filter(entity::parking_spot::Column::Status.eq(SpotStatus::Occupied.as_str()))
            .col_expr(
                entity::parking_spot::Column::Status,
                Expr::value(SpotStatus::Available.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
