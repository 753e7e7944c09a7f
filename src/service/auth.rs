use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterParams, Role, User},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Rejects blank fields up front, then checks email and username
    /// uniqueness before hashing the password and inserting the row. A
    /// concurrent registration slipping between the check and the insert hits
    /// the unique index, which the repository also reports as Conflict.
    ///
    /// # Arguments
    /// - `params` - Plaintext registration input
    ///
    /// # Returns
    /// - `Ok(User)` - The created account with role `user`
    /// - `Err(AppError::BadRequest)` - A required field was missing or empty
    /// - `Err(AppError::Conflict)` - Email or username already taken
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        if params.username.trim().is_empty()
            || params.email.trim().is_empty()
            || params.password.is_empty()
        {
            return Err(AppError::BadRequest(
                "username, email and password are required".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.email_taken(&params.email).await? {
            return Err(AppError::Conflict("Email already taken".to_string()));
        }
        if user_repo.username_taken(&params.username).await? {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let password_hash = bcrypt::hash(&params.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
                role: Role::User,
            })
            .await
    }

    /// Verifies login credentials.
    ///
    /// # Arguments
    /// - `email` - Account email
    /// - `password` - Plaintext password to verify against the stored hash
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials matched
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong
    ///   password; the two cases are indistinguishable to the caller
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let matches = bcrypt::verify(password, &entity.password_hash)
            .map_err(|e| AppError::InternalError(format!("Failed to verify password: {}", e)))?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        User::from_entity(entity)
    }

    /// Creates an account with an explicit role, hashing the given password.
    ///
    /// Used by the startup admin bootstrap. Does nothing clever about
    /// duplicates; the caller checks whether seeding is needed.
    pub async fn create_with_role(
        &self,
        username: String,
        email: String,
        password: &str,
        role: Role,
    ) -> Result<User, AppError> {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        UserRepository::new(self.db)
            .create(CreateUserParams {
                username,
                email,
                password_hash,
                role,
            })
            .await
    }
}
