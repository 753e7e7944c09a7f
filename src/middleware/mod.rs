//! Request/response processing and authentication guards.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
