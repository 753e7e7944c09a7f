use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, Role},
};
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod email_taken;
mod find_by_email;
mod get_all_with_role;

fn user_params(username: &str, email: &str, role: Role) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$placeholderhashvalue1234567890".to_string(),
        role,
    }
}
