use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
const DEFAULT_SMTP_PORT: u16 = 587;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub cors_origin: String,

    /// Credentials for the bootstrap admin account, created on first startup.
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,

    /// SMTP relay settings. When `smtp_host` is unset, outgoing mail is logged
    /// instead of sent.
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub mail_from: String,

    /// Redis connection string for the lot-listing cache. When unset, an
    /// in-process cache is used instead.
    pub redis_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()))?,
            smtp_host: std::env::var("SMTP_HOST").ok(),
            smtp_port: match std::env::var("SMTP_PORT") {
                Ok(port) => port.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar("SMTP_PORT".to_string(), port.clone())
                })?,
                Err(_) => DEFAULT_SMTP_PORT,
            },
            smtp_username: std::env::var("SMTP_USERNAME").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            mail_from: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| format!("Parkboard <{}>", DEFAULT_ADMIN_EMAIL)),
            redis_url: std::env::var("REDIS_URL").ok(),
        })
    }
}
