//! Parking lot factory for creating test lot entities.
//!
//! Creates lot rows only; spot rows are created separately through the
//! parking spot factory or `helpers::create_lot_with_spots`, so tests control
//! the spot set explicitly.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lots with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parking_lot::LotFactory;
///
/// let lot = LotFactory::new(&db)
///     .name("Central Garage")
///     .price(25.0)
///     .number_of_spots(10)
///     .build()
///     .await?;
/// ```
pub struct LotFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: Option<String>,
    pin_code: Option<String>,
    price: f64,
    number_of_spots: i32,
    is_active: bool,
}

impl<'a> LotFactory<'a> {
    /// Creates a new LotFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Lot {id}"` where id is auto-incremented
    /// - address/pin_code: none
    /// - price: `10.0`
    /// - number_of_spots: `1`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Lot {}", id),
            address: None,
            pin_code: None,
            price: 10.0,
            number_of_spots: 1,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn pin_code(mut self, pin_code: impl Into<String>) -> Self {
        self.pin_code = Some(pin_code.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the declared spot count on the lot row.
    ///
    /// This only sets the column; it does not create spot rows.
    pub fn number_of_spots(mut self, number_of_spots: i32) -> Self {
        self.number_of_spots = number_of_spots;
        self
    }

    /// Builds and inserts the lot entity into the database.
    pub async fn build(self) -> Result<entity::parking_lot::Model, DbErr> {
        entity::parking_lot::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            pin_code: ActiveValue::Set(self.pin_code),
            price: ActiveValue::Set(self.price),
            number_of_spots: ActiveValue::Set(self.number_of_spots),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lot with default values.
///
/// Shorthand for `LotFactory::new(db).build().await`.
pub async fn create_lot(db: &DatabaseConnection) -> Result<entity::parking_lot::Model, DbErr> {
    LotFactory::new(db).build().await
}
