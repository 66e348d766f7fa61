//! Environment-driven configuration for the session subsystem

use std::time::Duration;

use thiserror::Error;

use crate::storage::StoreKind;
use crate::token::SessionSecret;

/// Length in bytes of a session ID before encoding.
pub const SESSION_ID_LENGTH: usize = 32;

pub const DEFAULT_SESSION_TTL: &str = "1h";
pub const DEFAULT_STORE_TIMEOUT: &str = "5s";
pub const DEFAULT_STORE_URL: &str = "redis://127.0.0.1:6379";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Settings consumed by the session subsystem.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// `SESSION_STORE_TYPE`
    pub store_kind: StoreKind,
    /// `SESSION_STORE_URL`
    pub store_url: String,
    /// `SESSION_TTL`: inactivity window after which a session expires.
    pub ttl: Duration,
    /// `SESSION_STORE_TIMEOUT`: `None` when set to zero.
    pub store_timeout: Option<Duration>,
    /// `SESSION_SIGNING_KEY`
    pub signing_key: SessionSecret,
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_kind = lookup("SESSION_STORE_TYPE")
            .unwrap_or_else(|| "memory".to_string())
            .parse::<StoreKind>()
            .map_err(|e| ConfigError::Invalid {
                var: "SESSION_STORE_TYPE",
                reason: e.to_string(),
            })?;

        let store_url = lookup("SESSION_STORE_URL").unwrap_or_else(|| DEFAULT_STORE_URL.to_string());

        let ttl_str = lookup("SESSION_TTL").unwrap_or_else(|| DEFAULT_SESSION_TTL.to_string());
        let ttl = parse_duration(&ttl_str).map_err(|reason| ConfigError::Invalid {
            var: "SESSION_TTL",
            reason,
        })?;
        if ttl.is_zero() {
            return Err(ConfigError::Invalid {
                var: "SESSION_TTL",
                reason: "must be greater than zero".to_string(),
            });
        }

        let timeout_str =
            lookup("SESSION_STORE_TIMEOUT").unwrap_or_else(|| DEFAULT_STORE_TIMEOUT.to_string());
        let store_timeout = parse_duration(&timeout_str).map_err(|reason| ConfigError::Invalid {
            var: "SESSION_STORE_TIMEOUT",
            reason,
        })?;
        let store_timeout = (!store_timeout.is_zero()).then_some(store_timeout);

        let signing_key = match lookup("SESSION_SIGNING_KEY") {
            Some(key) if !key.is_empty() => SessionSecret::new(key.into_bytes()),
            _ => return Err(ConfigError::Missing("SESSION_SIGNING_KEY")),
        };

        Ok(Self {
            store_kind,
            store_url,
            ttl,
            store_timeout,
            signing_key,
        })
    }
}

/// Parse a duration such as `1h`, `90s`, `1h30m`, `1.5s` or `250ms`.
///
/// A bare `0` is accepted. Every other component needs a unit.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let s = input.trim();
    if s.is_empty() {
        return Err("empty duration".to_string());
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total_nanos = 0f64;
    let mut rest = s;
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| format!("missing unit in duration {input:?}"))?;
        if num_end == 0 {
            return Err(format!("invalid duration {input:?}"));
        }
        let value: f64 = rest[..num_end]
            .parse()
            .map_err(|_| format!("invalid number in duration {input:?}"))?;
        rest = &rest[num_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let nanos_per_unit = match &rest[..unit_end] {
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            unit => return Err(format!("unknown unit {unit:?} in duration {input:?}")),
        };
        rest = &rest[unit_end..];

        total_nanos += value * nanos_per_unit;
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return Err(format!("duration {input:?} out of range"));
    }
    Ok(Duration::from_nanos(total_nanos.round() as u64))
}
