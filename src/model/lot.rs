//! Parking lot domain models and parameters.

use serde::{Deserialize, Serialize};

/// Parking lot offering a fixed number of spots at a uniform price.
#[derive(Debug, Clone, PartialEq)]
pub struct Lot {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub pin_code: Option<String>,
    pub price: f64,
    pub number_of_spots: i32,
    pub is_active: bool,
}

impl Lot {
    /// Converts an entity model to a lot domain model at the repository boundary.
    pub fn from_entity(entity: entity::parking_lot::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
            pin_code: entity.pin_code,
            price: entity.price,
            number_of_spots: entity.number_of_spots,
            is_active: entity.is_active,
        }
    }

    /// Converts the lot domain model to a DTO for API responses.
    pub fn into_dto(self) -> LotDto {
        LotDto {
            id: self.id,
            name: self.name,
            address: self.address,
            pin_code: self.pin_code,
            price: self.price,
            number_of_spots: self.number_of_spots,
            is_active: self.is_active,
        }
    }
}

/// Lot joined with its derived count of currently available spots.
#[derive(Debug, Clone, PartialEq)]
pub struct LotWithAvailability {
    pub lot: Lot,
    pub available_spots: u64,
}

impl LotWithAvailability {
    pub fn into_dto(self) -> LotAvailabilityDto {
        LotAvailabilityDto {
            id: self.lot.id,
            name: self.lot.name,
            address: self.lot.address,
            pin_code: self.lot.pin_code,
            price: self.lot.price,
            number_of_spots: self.lot.number_of_spots,
            is_active: self.lot.is_active,
            available_spots: self.available_spots,
        }
    }
}

/// Parameters for creating a lot together with its spot rows.
#[derive(Debug, Clone)]
pub struct CreateLotParams {
    pub name: String,
    pub address: Option<String>,
    pub pin_code: Option<String>,
    pub price: f64,
    pub number_of_spots: i32,
}

/// Partial update of a lot. `None` fields are left unchanged.
///
/// A `Some` value for `number_of_spots` triggers a full spot rebuild, which is
/// only permitted while no spot in the lot is occupied.
#[derive(Debug, Clone, Default)]
pub struct UpdateLotParams {
    pub name: Option<String>,
    pub address: Option<String>,
    pub pin_code: Option<String>,
    pub price: Option<f64>,
    pub number_of_spots: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct LotDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub pin_code: Option<String>,
    pub price: f64,
    pub number_of_spots: i32,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct LotAvailabilityDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub pin_code: Option<String>,
    pub price: f64,
    pub number_of_spots: i32,
    pub is_active: bool,
    pub available_spots: u64,
}
