use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{api::MessageDto, reservation::ReservationDto},
    service::reservation::ReservationService,
    state::AppState,
};

#[derive(Deserialize, Default)]
pub struct ReserveDto {
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ReserveResponseDto {
    pub message: String,
    pub reservation_id: i32,
    pub spot_id: Option<i32>,
}

/// POST /api/parkinglots/{lot_id}/reserve
///
/// The request body is optional; vehicle number and remarks default to none.
pub async fn reserve(
    State(state): State<AppState>,
    session: Session,
    Path(lot_id): Path<i32>,
    body: Option<Json<ReserveDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Json(dto) = body.unwrap_or_default();

    let reservation = ReservationService::new(&state.db)
        .reserve(lot_id, user.id, dto.vehicle_number, dto.remarks)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReserveResponseDto {
            message: "Spot reserved".to_string(),
            reservation_id: reservation.id,
            spot_id: reservation.spot_id,
        }),
    ))
}

/// POST /api/reservations/{reservation_id}/release
pub async fn release(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ReservationService::new(&state.db)
        .release(reservation_id, user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Spot released".to_string(),
        }),
    ))
}

/// GET /api/my/reservations
pub async fn my_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations: Vec<ReservationDto> = ReservationService::new(&state.db)
        .my_reservations(user.id)
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(reservations)))
}
