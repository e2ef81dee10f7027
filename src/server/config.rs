use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Every minute, on the minute.
const DEFAULT_BOOKING_LIFECYCLE_CRON: &str = "0 * * * * *";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub bind_address: String,
    pub booking_lifecycle_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            booking_lifecycle_cron: std::env::var("BOOKING_LIFECYCLE_CRON")
                .unwrap_or_else(|_| DEFAULT_BOOKING_LIFECYCLE_CRON.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "must not be empty".to_string(),
        }),
        Err(_) => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}
