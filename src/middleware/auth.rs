use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permissions a protected endpoint can demand beyond a valid session.
pub enum Permission {
    Admin,
}

/// Access-control guard resolving the session to an account and checking
/// required permissions.
///
/// Every protected controller constructs one of these and calls `require`
/// before doing any work. An empty permission slice means any authenticated
/// user passes.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the caller and enforces the given permissions.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated account satisfying every permission
    /// - `Err(AuthError::AuthenticationRequired)` - No session user
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a missing account
    /// - `Err(AuthError::AccessDenied)` - Account lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::AuthenticationRequired.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "Admin permission required for this endpoint".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
