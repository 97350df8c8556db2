use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::fetcher::SearchLocale;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub serpapi_base_url: String,
    /// Name of the environment variable holding the SerpAPI key.
    /// The key itself is read on every fetch.
    pub api_key_var: String,
    pub timeout: Option<Duration>,
    pub locale: SearchLocale,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        dotenv().ok(); // Load .env file if present

        let bind_addr = get_env_or_default("BIND_ADDR", "0.0.0.0:8080");
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid BIND_ADDR: {bind_addr}"))?;

        let timeout = match env::var("SERPAPI_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(
                secs.parse::<u64>()
                    .with_context(|| format!("invalid SERPAPI_TIMEOUT_SECS: {secs}"))?,
            )),
            Err(_) => None,
        };

        let defaults = SearchLocale::default();
        Ok(Config {
            bind_addr,
            serpapi_base_url: get_env_or_default("SERPAPI_BASE_URL", "https://serpapi.com"),
            api_key_var: get_env_or_default("SERPAPI_KEY_VAR", "api_key"),
            timeout,
            locale: SearchLocale {
                location: get_env_or_default("SEARCH_LOCATION", &defaults.location),
                google_domain: get_env_or_default("SEARCH_GOOGLE_DOMAIN", &defaults.google_domain),
                gl: get_env_or_default("SEARCH_GL", &defaults.gl),
                hl: get_env_or_default("SEARCH_HL", &defaults.hl),
            },
        })
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
