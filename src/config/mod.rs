use chrono::TimeDelta;
use serde::Deserialize;
use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

const MAX_NIGHTLY_RATE: u64 = 1_000_000;
const MAX_SESSION_SECONDS: u64 = 365 * 24 * 60 * 60;

// Top-level configuration, one section per concern
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub booking: BookingConfig,
    pub chat: ChatConfig,
    pub session: SessionConfig,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Flat per-night price used when a ledger booking is created.
    pub nightly_rate: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    pub reply_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub idle_ttl_seconds: u64,
    pub sweep_interval_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    pub enable_support_chat: bool,
    pub seed_demo_bookings: bool,
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl SessionConfig {
    /// Saturates at `TimeDelta::MAX` for values chrono cannot represent.
    pub fn idle_ttl(&self) -> TimeDelta {
        i64::try_from(self.idle_ttl_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                environment: "development".to_string(),
                rust_log: "hotel_booking_demo=debug,tower_http=debug".to_string(),
            },
            booking: BookingConfig { nightly_rate: 350 },
            chat: ChatConfig { reply_delay_ms: 1000 },
            session: SessionConfig {
                idle_ttl_seconds: 1800,
                sweep_interval_seconds: 300,
            },
            features: FeatureFlags {
                enable_support_chat: true,
                seed_demo_bookings: true,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();
        Ok(Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or(defaults.app.host),
                port: parse_var("PORT", defaults.app.port)?,
                environment: env::var("ENVIRONMENT").unwrap_or(defaults.app.environment),
                rust_log: env::var("RUST_LOG").unwrap_or(defaults.app.rust_log),
            },
            booking: BookingConfig {
                nightly_rate: parse_bounded(
                    "BOOKING_NIGHTLY_RATE",
                    defaults.booking.nightly_rate,
                    1..=MAX_NIGHTLY_RATE,
                )?,
            },
            chat: ChatConfig {
                reply_delay_ms: parse_var("CHAT_REPLY_DELAY_MS", defaults.chat.reply_delay_ms)?,
            },
            session: SessionConfig {
                idle_ttl_seconds: parse_bounded(
                    "SESSION_IDLE_TTL_SECONDS",
                    defaults.session.idle_ttl_seconds,
                    1..=MAX_SESSION_SECONDS,
                )?,
                sweep_interval_seconds: parse_bounded(
                    "SESSION_SWEEP_INTERVAL_SECONDS",
                    defaults.session.sweep_interval_seconds,
                    1..=MAX_SESSION_SECONDS,
                )?,
            },
            features: FeatureFlags {
                enable_support_chat: parse_var(
                    "ENABLE_SUPPORT_CHAT",
                    defaults.features.enable_support_chat,
                )?,
                seed_demo_bookings: parse_var(
                    "SEED_DEMO_BOOKINGS",
                    defaults.features.seed_demo_bookings,
                )?,
            },
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => parse_value(name, &value),
        Err(_) => Ok(default),
    }
}

fn parse_bounded(
    name: &'static str,
    default: u64,
    bounds: RangeInclusive<u64>,
) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(value) => parse_bounded_value(name, &value, bounds),
        Err(_) => Ok(default),
    }
}

fn parse_bounded_value(
    name: &'static str,
    value: &str,
    bounds: RangeInclusive<u64>,
) -> Result<u64, ConfigError> {
    let parsed: u64 = parse_value(name, value)?;
    if bounds.contains(&parsed) {
        Ok(parsed)
    } else {
        Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        })
    }
}

fn parse_value<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}
