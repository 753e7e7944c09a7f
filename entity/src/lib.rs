pub mod prelude;

pub mod parking_lot;
pub mod parking_spot;
pub mod reservation;
pub mod user;
