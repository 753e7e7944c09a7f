use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError,
    jobs::Job,
    middleware::auth::AuthGuard,
    model::api::MessageDto,
    state::AppState,
};

#[derive(Deserialize, Default)]
pub struct ExportDto {
    /// Destination address; defaults to the account email when omitted.
    #[serde(default)]
    pub email: Option<String>,
}

/// POST /api/my/export
///
/// Enqueues the CSV export job and returns immediately; the result arrives by
/// email.
pub async fn trigger_export(
    State(state): State<AppState>,
    session: Session,
    body: Option<Json<ExportDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let Json(dto) = body.unwrap_or_default();
    let email = dto.email.unwrap_or(user.email);

    state.jobs.enqueue(Job::ExportReservations {
        user_id: user.id,
        email,
    })?;

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageDto {
            message: "Your export job has started. You will receive an alert when done."
                .to_string(),
        }),
    ))
}
