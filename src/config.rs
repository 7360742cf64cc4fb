use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite:data/comic_press.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:7783";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads `DATABASE_URL` and `BIND_ADDR`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let bind = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Self::from_values(database_url, &bind)
    }

    pub fn from_values(database_url: String, bind: &str) -> Result<Self> {
        let bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid BIND_ADDR '{}'", bind))?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
