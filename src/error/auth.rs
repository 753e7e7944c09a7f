use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID in the session.
    ///
    /// The request reached a protected endpoint without an established session.
    /// Results in a 401 Unauthorized response.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Session references a user that no longer exists.
    ///
    /// The session carries a user ID with no matching database row. Treated the
    /// same as an unauthenticated request.
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),

    /// Login credentials did not match any account.
    ///
    /// Either the email is unknown or the password hash comparison failed. The
    /// response does not distinguish the two cases.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated user lacks the required permission.
    ///
    /// Results in a 403 Forbidden response. The attached message is logged for
    /// diagnostics and never sent to the client.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Authenticated user tried to act on a resource owned by someone else.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} does not own the requested resource")]
    NotResourceOwner(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages. Diagnostic detail stays in the server log; client-facing
/// messages are kept generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing session, dangling session user, bad credentials
/// - 403 Forbidden - Authenticated but lacking the required role
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthenticationRequired | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Admin access required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotResourceOwner(user_id) => {
                tracing::debug!("User {} denied access to another user's resource", user_id);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
