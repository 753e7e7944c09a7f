use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    controller::{admin, auth, export, lot, reservation},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/me", get(auth::get_current_user))
        .route("/api/parkinglots", get(lot::list_lots))
        .route("/api/cached/parkinglots", get(lot::list_lots_cached))
        .route("/api/parkinglots/{lot_id}/reserve", post(reservation::reserve))
        .route(
            "/api/reservations/{reservation_id}/release",
            post(reservation::release),
        )
        .route("/api/my/reservations", get(reservation::my_reservations))
        .route("/api/my/export", post(export::trigger_export))
        .route("/api/admin/parkinglots", get(admin::list_lots))
        .route("/api/admin/parkinglots", post(admin::create_lot))
        .route("/api/admin/parkinglots/{lot_id}", put(admin::update_lot))
        .route("/api/admin/parkinglots/{lot_id}", delete(admin::delete_lot))
        .route("/api/admin/parkinglots/{lot_id}/spots", get(admin::lot_spots))
        .route("/api/admin/users", get(admin::list_users))
        .route("/api/admin/reservations", get(admin::list_reservations))
}
