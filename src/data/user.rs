//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing account records: creation during
//! registration and admin bootstrap, credential lookup for login, and role-based
//! listings for the admin views and background jobs.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, SqlErr,
};

use crate::{
    error::AppError,
    model::user::{CreateUserParams, Role, User},
};

/// Repository providing database operations for account management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account row.
    ///
    /// Uniqueness of username and email is checked by the caller before
    /// insertion; the unique indexes are the backstop. A registration that
    /// loses the race to a concurrent duplicate hits the index and comes back
    /// as Conflict rather than a raw database error.
    ///
    /// # Arguments
    /// - `params` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - Username or email already taken
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let result = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => User::from_entity(entity),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict(
                    "Username or email already taken".to_string(),
                )),
                _ => Err(err.into()),
            },
        }
    }

    /// Finds an account by its ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds an account by email, returning the raw entity.
    ///
    /// Returns the entity model rather than the domain model because the auth
    /// service needs the stored password hash for credential verification.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity)
    }

    /// Checks whether an email address is already registered.
    pub async fn email_taken(&self, email: &str) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a username is already registered.
    pub async fn username_taken(&self, username: &str) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any admin account exists.
    ///
    /// Used during startup to decide whether the bootstrap admin account needs
    /// to be seeded.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all accounts with the given role, ordered by username.
    ///
    /// The admin user listing shows role `user` accounts only; the background
    /// jobs iterate the same set when sending reminders and reports.
    pub async fn get_all_with_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role.as_str()))
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        entities.into_iter().map(User::from_entity).collect()
    }
}
