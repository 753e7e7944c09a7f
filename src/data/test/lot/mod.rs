use crate::{
    data::{lot::LotRepository, spot::SpotRepository},
    error::AppError,
    model::lot::{CreateLotParams, UpdateLotParams},
    model::spot::SpotStatus,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all_with_availability;
mod resize_spots;
mod update_fields;

fn lot_params(name: &str, spots: i32) -> CreateLotParams {
    CreateLotParams {
        name: name.to_string(),
        address: None,
        pin_code: None,
        price: 10.0,
        number_of_spots: spots,
    }
}
