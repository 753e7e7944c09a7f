//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a lot together with its spot rows
//!     let (lot, spots) = factory::helpers::create_lot_with_spots(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .email("alice@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create account entities
//! - `parking_lot` - Create parking lot entities
//! - `parking_spot` - Create parking spot entities
//! - `reservation` - Create reservation entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod parking_lot;
pub mod parking_spot;
pub mod reservation;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use parking_lot::create_lot;
pub use parking_spot::{create_occupied_spot, create_spot};
pub use reservation::{create_closed_reservation, create_reservation};
pub use user::{create_admin, create_user};
