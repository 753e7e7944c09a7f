//! Reservation factory for creating test reservation entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::reservation::ReservationFactory;
///
/// let reservation = ReservationFactory::new(&db, user.id, spot.id)
///     .parking_cost(25.0)
///     .vehicle_number("KA-01-1234")
///     .build()
///     .await?;
/// ```
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    spot_id: Option<i32>,
    user_id: i32,
    parking_timestamp: DateTime<Utc>,
    leaving_timestamp: Option<DateTime<Utc>>,
    parking_cost: f64,
    vehicle_number: Option<String>,
    remarks: Option<String>,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with default values.
    ///
    /// Defaults:
    /// - parking_timestamp: now
    /// - leaving_timestamp: none (reservation is active)
    /// - parking_cost: `10.0`
    /// - vehicle_number/remarks: none
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `user_id` - Owning account
    /// - `spot_id` - Spot the reservation holds
    pub fn new(db: &'a DatabaseConnection, user_id: i32, spot_id: i32) -> Self {
        Self {
            db,
            spot_id: Some(spot_id),
            user_id,
            parking_timestamp: Utc::now(),
            leaving_timestamp: None,
            parking_cost: 10.0,
            vehicle_number: None,
            remarks: None,
        }
    }

    pub fn parking_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.parking_timestamp = at;
        self
    }

    /// Sets a leaving timestamp, making the reservation closed.
    pub fn leaving_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.leaving_timestamp = Some(at);
        self
    }

    pub fn parking_cost(mut self, cost: f64) -> Self {
        self.parking_cost = cost;
        self
    }

    pub fn vehicle_number(mut self, vehicle_number: impl Into<String>) -> Self {
        self.vehicle_number = Some(vehicle_number.into());
        self
    }

    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Detaches the reservation from any spot, mirroring the state after a
    /// lot resize removed the spot row.
    pub fn without_spot(mut self) -> Self {
        self.spot_id = None;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            spot_id: ActiveValue::Set(self.spot_id),
            user_id: ActiveValue::Set(self.user_id),
            parking_timestamp: ActiveValue::Set(self.parking_timestamp),
            leaving_timestamp: ActiveValue::Set(self.leaving_timestamp),
            parking_cost: ActiveValue::Set(self.parking_cost),
            vehicle_number: ActiveValue::Set(self.vehicle_number),
            remarks: ActiveValue::Set(self.remarks),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active reservation with default values.
pub async fn create_reservation(
    db: &DatabaseConnection,
    user_id: i32,
    spot_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_id, spot_id).build().await
}

/// Creates a closed reservation, released at the current time.
pub async fn create_closed_reservation(
    db: &DatabaseConnection,
    user_id: i32,
    spot_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, user_id, spot_id)
        .leaving_timestamp(Utc::now())
        .build()
        .await
}
