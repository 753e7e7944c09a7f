use crate::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::reservation::CreateReservationParams,
};
use test_utils::{builder::TestBuilder, factory};

mod close;
mod count_for_user_since;
mod create;
mod find_active_for_spot;
mod get_by_user_desc;

/// Builds creation params with no vehicle number or remarks.
fn reservation_params(spot_id: i32, user_id: i32, parking_cost: f64) -> CreateReservationParams {
    CreateReservationParams {
        spot_id,
        user_id,
        parking_cost,
        vehicle_number: None,
        remarks: None,
    }
}
