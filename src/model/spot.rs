//! Parking spot domain models.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Spot occupancy status.
///
/// The only legal transitions are `Available → Occupied` on reserve and
/// `Occupied → Available` on release; both are enforced by conditional updates
/// in the spot repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotStatus {
    Available,
    Occupied,
}

impl SpotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpotStatus::Available => "available",
            SpotStatus::Occupied => "occupied",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "available" => Ok(SpotStatus::Available),
            "occupied" => Ok(SpotStatus::Occupied),
            other => Err(AppError::InternalError(format!(
                "Unknown spot status '{}' in database",
                other
            ))),
        }
    }
}

/// One allocatable unit within a lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    pub id: i32,
    pub lot_id: i32,
    pub status: SpotStatus,
    pub is_active: bool,
}

impl Spot {
    /// Converts an entity model to a spot domain model at the repository boundary.
    pub fn from_entity(entity: entity::parking_spot::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            lot_id: entity.lot_id,
            status: SpotStatus::parse(&entity.status)?,
            is_active: entity.is_active,
        })
    }
}

/// Spot as shown in the admin per-lot occupancy view.
///
/// For occupied spots, the vehicle and user of the active reservation are
/// attached so the admin view can show who is parked where.
#[derive(Serialize, Deserialize, Clone)]
pub struct AdminSpotDto {
    pub id: i32,
    pub lot_id: i32,
    pub status: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}
