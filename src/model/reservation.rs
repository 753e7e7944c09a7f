//! Reservation domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one account occupying one spot for an open-ended or closed
/// interval, with the cost fixed at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    /// `None` after the owning spot was removed by a lot resize.
    pub spot_id: Option<i32>,
    pub user_id: i32,
    pub parking_timestamp: DateTime<Utc>,
    /// `None` while the reservation is active.
    pub leaving_timestamp: Option<DateTime<Utc>>,
    pub parking_cost: f64,
    pub vehicle_number: Option<String>,
    pub remarks: Option<String>,
}

impl Reservation {
    /// Converts an entity model to a reservation domain model at the repository boundary.
    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            spot_id: entity.spot_id,
            user_id: entity.user_id,
            parking_timestamp: entity.parking_timestamp,
            leaving_timestamp: entity.leaving_timestamp,
            parking_cost: entity.parking_cost,
            vehicle_number: entity.vehicle_number,
            remarks: entity.remarks,
        }
    }

    pub fn is_active(&self) -> bool {
        self.leaving_timestamp.is_none()
    }

    /// Converts the reservation domain model to a DTO for API responses.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            spot_id: self.spot_id,
            user_id: self.user_id,
            parking_timestamp: self.parking_timestamp,
            leaving_timestamp: self.leaving_timestamp,
            parking_cost: self.parking_cost,
            vehicle_number: self.vehicle_number,
            remarks: self.remarks,
        }
    }
}

/// Parameters for creating a reservation against an already claimed spot.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub spot_id: i32,
    pub user_id: i32,
    pub parking_cost: f64,
    pub vehicle_number: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ReservationDto {
    pub id: i32,
    pub spot_id: Option<i32>,
    pub user_id: i32,
    pub parking_timestamp: DateTime<Utc>,
    pub leaving_timestamp: Option<DateTime<Utc>>,
    pub parking_cost: f64,
    pub vehicle_number: Option<String>,
    pub remarks: Option<String>,
}
