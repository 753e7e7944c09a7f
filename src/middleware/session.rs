//! Type-safe session management wrapper.
//!
//! Wraps the raw tower-sessions `Session` behind a small interface holding the
//! authentication state. Centralizing the session key and value type here
//! prevents typos and keeps session-related logic in one place.

use tower_sessions::Session;

use crate::error::AppError;

/// Session key under which the authenticated user's ID is stored.
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated account ID and the session
/// lifecycle operations around login and logout.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the account ID in the session after successful login.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated account ID, if any.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr)` - Failed to access the session store
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Destroys the session unconditionally.
    ///
    /// Used by logout; removes the server-side record and clears the cookie.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
