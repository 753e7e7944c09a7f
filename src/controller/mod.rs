//! HTTP request handlers.
//!
//! Controllers parse and validate request input, enforce authentication via
//! the auth guard, delegate to the service layer, and shape the response DTOs.
//! No business logic lives here.

pub mod admin;
pub mod auth;
pub mod export;
pub mod lot;
pub mod reservation;
