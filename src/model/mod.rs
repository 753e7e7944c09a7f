//! Domain models, operation parameters, and API DTOs.
//!
//! Each module pairs the domain model for one entity with the parameter types
//! used by services and the serializable DTOs returned by controllers. Entity
//! models are converted to domain models at the repository boundary.

pub mod api;
pub mod lot;
pub mod reservation;
pub mod spot;
pub mod user;
