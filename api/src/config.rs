use std::env;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Port the HTTP server binds to
    pub port: u16,
    /// Page size used when a list request omits `size`
    pub default_page_size: u64,
    /// Largest page size a list request may ask for
    pub max_page_size: u64,
    /// Create the tables on start-up if they are missing
    pub apply_schema: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: parse_var("PORT", 8080)?,
            default_page_size: parse_var("DEFAULT_PAGE_SIZE", 10)?,
            max_page_size: parse_var("MAX_PAGE_SIZE", 100)?,
            apply_schema: parse_var("APPLY_SCHEMA", true)?,
        };

        if config.default_page_size == 0 || config.default_page_size > config.max_page_size {
            anyhow::bail!(
                "DEFAULT_PAGE_SIZE must be between 1 and MAX_PAGE_SIZE ({})",
                config.max_page_size
            );
        }

        Ok(config)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for tests that never touch the environment
    pub fn for_tests() -> Self {
        Self {
            database_url: "postgres://localhost/football_manager_test".to_string(),
            port: 0,
            default_page_size: 10,
            max_page_size: 100,
            apply_schema: false,
        }
    }
}
