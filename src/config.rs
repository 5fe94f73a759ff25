use std::env;

use chrono_tz::Tz;

use crate::error::AppError;

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Chicago;

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub log_level: String,
    pub planner: PlannerSettings,
    /// Empty means any origin is mirrored back with credentials allowed.
    pub cors_allowed_origins: Vec<String>,
}

/// Settings handed to the log generator for each request.
#[derive(Debug, Clone, Copy)]
pub struct PlannerSettings {
    pub timezone: Tz,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            http_port: parse_or_default("HTTP_PORT", 8000)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            planner: PlannerSettings {
                timezone: parse_or_default("PLANNER_TIMEZONE", DEFAULT_TIMEZONE)?,
            },
            cors_allowed_origins: parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref()),
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|err| AppError::Internal(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
