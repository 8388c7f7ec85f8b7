//! Configuration for the relay server.
//!
//! Intentionally small: defaults work out of the box, each value can be
//! overridden via an environment variable:
//!
//! - `PORT`           (default: "3135")
//! - `BIND_ADDR`      (default: "0.0.0.0")
//! - `ALLOWED_ORIGIN` (default: "https://chess-com.vercel.app")

use std::env;
use std::str::FromStr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// IP address / interface to bind to (e.g. "0.0.0.0" or "127.0.0.1").
    pub bind_addr: String,

    /// TCP port to listen on.
    pub port: u16,

    /// The single cross-origin domain allowed to reach the HTTP layer
    /// and the WebSocket endpoint.
    pub allowed_origin: String,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to the defaults above.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = read_env_or_default("PORT", 3135u16)?;
        let allowed_origin = env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "https://chess-com.vercel.app".to_string());

        Ok(Config {
            bind_addr,
            port,
            allowed_origin,
        })
    }

    /// Convenience: `addr:port` socket string.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn read_env_or_default<T>(key: &str, default: T) -> Result<T, Box<dyn std::error::Error>>
where
    T: FromStr,
    T::Err: std::error::Error + 'static,
{
    match env::var(key) {
        Ok(val) => Ok(val.parse::<T>()?),
        Err(_) => Ok(default),
    }
}
