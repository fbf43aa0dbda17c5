//! Process configuration, read once at startup.
//!
//! All environment lookups happen here; the resulting struct is passed by
//! reference to everything that needs store access. There is no hot reload
//! and no ambient lookup after startup.

use anyhow::{bail, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:5174"];

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub store_url: String,
    pub store_api_key: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Reads `PORT` (default 5000), `SUPABASE_URL`, `SUPABASE_ANON_KEY`, and
    /// the optional `TREEM_CORS_ORIGINS` comma list. Fails when either store
    /// credential is absent so the process exits before binding a socket.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let Ok(store_url) = std::env::var("SUPABASE_URL") else {
            bail!("Missing Supabase credentials: SUPABASE_URL is not set");
        };
        let Ok(store_api_key) = std::env::var("SUPABASE_ANON_KEY") else {
            bail!("Missing Supabase credentials: SUPABASE_ANON_KEY is not set");
        };
        if store_url.trim().is_empty() {
            bail!("Missing Supabase credentials: SUPABASE_URL is empty");
        }
        if store_api_key.trim().is_empty() {
            bail!("Missing Supabase credentials: SUPABASE_ANON_KEY is empty");
        }

        let cors_origins = std::env::var("TREEM_CORS_ORIGINS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| {
                DEFAULT_CORS_ORIGINS
                    .iter()
                    .map(|origin| origin.to_string())
                    .collect()
            });

        Ok(Self {
            listen_addr: format!("0.0.0.0:{}", port),
            store_url,
            store_api_key,
            cors_origins,
        })
    }
}
