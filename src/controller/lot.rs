use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::lot::LotAvailabilityDto,
    service::lot::LotService,
    state::AppState,
};

/// GET /api/parkinglots
///
/// Live lot listing with per-lot availability counts.
pub async fn list_lots(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lots: Vec<LotAvailabilityDto> = LotService::new(&state.db)
        .list_with_availability()
        .await?
        .into_iter()
        .map(|lot| lot.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(lots)))
}

/// GET /api/cached/parkinglots
///
/// Lot listing without availability, served through the read-through cache.
/// May lag mutations by up to the cache TTL.
pub async fn list_lots_cached(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lots = state.lot_cache.get_or_rebuild(&state.db).await?;

    Ok((StatusCode::OK, Json(lots)))
}
