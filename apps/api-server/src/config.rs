//! Centralized configuration for api-server.
//!
//! All environment variables are loaded and validated at startup to fail fast
//! on misconfiguration rather than at request time.

use axum::http::HeaderValue;
use std::env;
use std::fmt;

/// Log output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// What a successful `PUT /recipes/:id` sends back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResponse {
    /// 200 with the updated record, same as the shopping list.
    Record,
    /// 204 with no body, for clients written against the older contract.
    Empty,
}

impl UpdateResponse {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("empty") {
            Self::Empty
        } else {
            Self::Record
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error for {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Server configuration loaded from environment variables.
///
/// All fields are validated at construction time.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port (default: 3000)
    pub port: u16,
    /// CORS allow origin
    pub cors_allow_origin: HeaderValue,
    /// Log format
    pub log_format: LogFormat,
    /// Response contract for recipe updates
    pub recipes_put_response: UpdateResponse,
    /// Populate both stores with seed records at startup
    pub seed_data: bool,
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// Fails fast on invalid configuration.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Port
        let port: u16 = match var("PORT") {
            Some(s) => s.trim().parse().map_err(|_| ConfigError {
                field: "PORT",
                message: format!("'{}' is not a valid port", s),
            })?,
            None => 3000,
        };

        // CORS allow origin
        let cors_origin_str = var("CORS_ALLOW_ORIGIN").unwrap_or_else(|| "*".into());
        let cors_allow_origin = if cors_origin_str == "*" {
            HeaderValue::from_static("*")
        } else {
            HeaderValue::from_str(&cors_origin_str).map_err(|e| ConfigError {
                field: "CORS_ALLOW_ORIGIN",
                message: format!("Invalid header value '{}': {}", cors_origin_str, e),
            })?
        };

        // Log format
        let log_format =
            LogFormat::from_str(&var("LOG_FORMAT").unwrap_or_else(|| "pretty".into()));

        // Recipe update contract
        let recipes_put_response = UpdateResponse::from_str(
            &var("RECIPES_PUT_RESPONSE").unwrap_or_else(|| "record".into()),
        );

        // Seed data
        let seed_data = var("SEED_DATA")
            .map(|s| http_common::parse_flag(&s))
            .unwrap_or(true);

        Ok(Self {
            port,
            cors_allow_origin,
            log_format,
            recipes_put_response,
            seed_data,
        })
    }

    /// Log notes about configuration that changes the HTTP contract.
    pub fn warn_if_legacy(&self) {
        if self.recipes_put_response == UpdateResponse::Empty {
            tracing::warn!(
                "RECIPES_PUT_RESPONSE=empty: PUT /recipes/:id answers 204 without a body, \
                 unlike PUT /shopping-list/:id."
            );
        }
        if !self.seed_data {
            tracing::warn!("SEED_DATA disabled: stores start empty.");
        }
    }
}
