// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads Open Food Facts client, bookmark, and logging settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodDraft

//! Environment-based configuration
//!
//! Configuration is environment-only: there is no config file. Every variable
//! is optional and falls back to a default from
//! [`fooddraft_core::constants::defaults`]. A variable that is set but cannot
//! be parsed is a hard error rather than a silent fallback.

use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use fooddraft_core::constants::{defaults, env_config, openfoodfacts};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Open Food Facts client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFoodFactsConfig {
    /// Base URL (default: <https://world.openfoodfacts.org>)
    pub base_url: String,
    /// User-Agent header; Open Food Facts asks clients to identify themselves
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// How long lookups stay cached, in seconds (0 disables caching)
    pub cache_ttl_secs: u64,
    /// Requests allowed per rolling minute
    pub rate_limit_per_minute: u32,
}

impl Default for OpenFoodFactsConfig {
    fn default() -> Self {
        Self {
            base_url: openfoodfacts::DEFAULT_BASE_URL.to_owned(),
            user_agent: default_user_agent(),
            timeout_secs: defaults::TIMEOUT_SECS,
            cache_ttl_secs: defaults::CACHE_TTL_SECS,
            rate_limit_per_minute: defaults::RATE_LIMIT_PER_MINUTE,
        }
    }
}

impl OpenFoodFactsConfig {
    /// Load from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a numeric variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            base_url: env_or(
                env_config::OPENFOODFACTS_BASE_URL,
                openfoodfacts::DEFAULT_BASE_URL.to_owned(),
            )?,
            user_agent: env_or(env_config::OPENFOODFACTS_USER_AGENT, default_user_agent())?,
            timeout_secs: env_or(env_config::OPENFOODFACTS_TIMEOUT_SECS, defaults::TIMEOUT_SECS)?,
            cache_ttl_secs: env_or(
                env_config::OPENFOODFACTS_CACHE_TTL_SECS,
                defaults::CACHE_TTL_SECS,
            )?,
            rate_limit_per_minute: env_or(
                env_config::OPENFOODFACTS_RATE_LIMIT_PER_MINUTE,
                defaults::RATE_LIMIT_PER_MINUTE,
            )?,
        })
    }

    /// Check the values are usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a non-http(s) base URL, a zero timeout, or a zero rate limit
    pub fn validate(&self) -> AppResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            AppError::config_invalid(env_config::OPENFOODFACTS_BASE_URL, e.to_string())
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config_invalid(
                env_config::OPENFOODFACTS_BASE_URL,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_invalid(
                env_config::OPENFOODFACTS_TIMEOUT_SECS,
                "must be greater than zero",
            ));
        }
        if self.rate_limit_per_minute == 0 {
            return Err(AppError::config_invalid(
                env_config::OPENFOODFACTS_RATE_LIMIT_PER_MINUTE,
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Cache TTL
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url_trimmed(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Bookmark store configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookmarkConfig {
    /// Maximum bookmarks kept per user
    pub max_per_user: usize,
}

impl Default for BookmarkConfig {
    fn default() -> Self {
        Self {
            max_per_user: defaults::BOOKMARKS_MAX_PER_USER,
        }
    }
}

impl BookmarkConfig {
    /// Load from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `BOOKMARKS_MAX_PER_USER` is not a number or is zero
    pub fn from_env() -> AppResult<Self> {
        let max_per_user = env_or(
            env_config::BOOKMARKS_MAX_PER_USER,
            defaults::BOOKMARKS_MAX_PER_USER,
        )?;
        if max_per_user == 0 {
            return Err(AppError::config_invalid(
                env_config::BOOKMARKS_MAX_PER_USER,
                "must be greater than zero",
            ));
        }
        Ok(Self { max_per_user })
    }
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct FoodDraftConfig {
    /// Open Food Facts client settings
    pub openfoodfacts: OpenFoodFactsConfig,
    /// Bookmark store settings
    pub bookmarks: BookmarkConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl FoodDraftConfig {
    /// Load and validate configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if any variable is malformed or fails validation
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            openfoodfacts: OpenFoodFactsConfig::from_env()?,
            bookmarks: BookmarkConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };
        config.openfoodfacts.validate()?;
        Ok(config)
    }

    /// Log a one-line summary (no secrets are held, so everything is printable)
    pub fn log_summary(&self) {
        info!(
            openfoodfacts.base_url = %self.openfoodfacts.base_url,
            openfoodfacts.timeout_secs = self.openfoodfacts.timeout_secs,
            openfoodfacts.cache_ttl_secs = self.openfoodfacts.cache_ttl_secs,
            openfoodfacts.rate_limit_per_minute = self.openfoodfacts.rate_limit_per_minute,
            bookmarks.max_per_user = self.bookmarks.max_per_user,
            "Configuration loaded"
        );
    }
}

fn default_user_agent() -> String {
    format!("fooddraft/{}", env!("CARGO_PKG_VERSION"))
}

/// Read `key`, falling back to `default` when unset or blank
fn env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| AppError::config_invalid(key, format!("'{raw}': {e}"))),
        _ => Ok(default),
    }
}
