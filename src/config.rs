use anyhow::{Context, Result};
use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct TriviaConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: SocketAddr,
}

impl TriviaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // split out so tests can feed variables without touching the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .context("Failed to determine DATABASE_URL from environment variables")?;

        let max_connections = lookup("MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|val| *val > 0)
            .unwrap_or(15);

        let raw_address = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = raw_address.parse::<SocketAddr>().with_context(|| {
            format!("BIND_ADDRESS '{}' is not a valid socket address", raw_address)
        })?;

        Ok(Self {
            database_url,
            max_connections,
            bind_address,
        })
    }
}
