//! Parking spot factory for creating test spot entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test spots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parking_spot::SpotFactory;
///
/// let spot = SpotFactory::new(&db, lot.id)
///     .occupied()
///     .build()
///     .await?;
/// ```
pub struct SpotFactory<'a> {
    db: &'a DatabaseConnection,
    lot_id: i32,
    status: String,
    is_active: bool,
}

impl<'a> SpotFactory<'a> {
    /// Creates a new SpotFactory with default values.
    ///
    /// Defaults:
    /// - status: `"available"`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `lot_id` - Lot the spot belongs to
    pub fn new(db: &'a DatabaseConnection, lot_id: i32) -> Self {
        Self {
            db,
            lot_id,
            status: "available".to_string(),
            is_active: true,
        }
    }

    /// Marks the spot occupied.
    pub fn occupied(mut self) -> Self {
        self.status = "occupied".to_string();
        self
    }

    /// Builds and inserts the spot entity into the database.
    pub async fn build(self) -> Result<entity::parking_spot::Model, DbErr> {
        entity::parking_spot::ActiveModel {
            lot_id: ActiveValue::Set(self.lot_id),
            status: ActiveValue::Set(self.status),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available spot in the given lot.
pub async fn create_spot(
    db: &DatabaseConnection,
    lot_id: i32,
) -> Result<entity::parking_spot::Model, DbErr> {
    SpotFactory::new(db, lot_id).build().await
}

/// Creates an occupied spot in the given lot.
pub async fn create_occupied_spot(
    db: &DatabaseConnection,
    lot_id: i32,
) -> Result<entity::parking_spot::Model, DbErr> {
    SpotFactory::new(db, lot_id).occupied().build().await
}
