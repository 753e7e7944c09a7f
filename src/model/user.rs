//! User domain models and parameters.
//!
//! Provides domain models for application accounts with their role, plus
//! parameter types for registration and account creation. The password hash
//! never leaves the data layer; domain users carry identity and role only.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Account role controlling access to admin endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Database string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Parses the stored role string back into the enum.
    ///
    /// # Returns
    /// - `Ok(Role)` - Recognized role value
    /// - `Err(AppError::InternalError)` - Unknown role string in the database
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(AppError::InternalError(format!(
                "Unknown role '{}' in database",
                other
            ))),
        }
    }
}

/// Account with identity and role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError)` - The stored role string is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: Role::parse(&entity.role)?,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }
}

/// Parameters for creating an account row.
///
/// The password arrives already hashed; hashing happens in the auth service so
/// the repository never sees plaintext credentials.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for user self-registration.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}
