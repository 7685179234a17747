//! Server configuration from the environment
//!
//! - `EN_SHINDAN_HOST` (default `0.0.0.0`)
//! - `PORT` (default `8080`)
//! - `EN_SHINDAN_UTC_OFFSET_HOURS` (default `9`, Asia/Tokyo): offset of the
//!   reference clock used for the biorhythm "today"

use anyhow::{Context, Result};
use chrono::FixedOffset;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub utc_offset: FixedOffset,
}

impl ServerConfig {
    /// Load from process environment (after `.env` has been applied)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("EN_SHINDAN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let offset_hours = match lookup("EN_SHINDAN_UTC_OFFSET_HOURS") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .with_context(|| format!("Invalid EN_SHINDAN_UTC_OFFSET_HOURS: {:?}", raw))?,
            None => DEFAULT_UTC_OFFSET_HOURS,
        };
        let utc_offset = FixedOffset::east_opt(offset_hours * 3600)
            .with_context(|| format!("UTC offset out of range: {} hours", offset_hours))?;

        Ok(Self {
            host,
            port,
            utc_offset,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
