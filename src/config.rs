use dotenvy::dotenv;
use eyre::Result;
use serde::Deserialize;
use std::{env, net::IpAddr};
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub data_path: Option<String>, // None = bundled sample
}

pub fn load() -> Result<Config> {
    dotenv().ok(); // optional .env

    let cfg = from_lookup(|key| env::var(key).ok());

    info!("Loaded config: {:?}", cfg);

    Ok(cfg)
}

/// Build the config from any key lookup, falling back to defaults on
/// missing or unparseable values.
pub fn from_lookup<F>(lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // API port (default: 8080)
    let port = parse_or(&lookup, "PORT", 8080);

    // Listen address (default: loopback)
    let bind_addr = parse_or(&lookup, "BIND_ADDR", IpAddr::from([127, 0, 0, 1]));

    // Dataset override (default: bundled JSON)
    let data_path = lookup("WALLET_DATA_PATH")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Config {
        bind_addr,
        port,
        data_path,
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = from_lookup(lookup_from(&[]));

        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.bind_addr, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(cfg.data_path, None);
    }

    #[test]
    fn reads_overrides() {
        let cfg = from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("BIND_ADDR", "0.0.0.0"),
            ("WALLET_DATA_PATH", " data/wallets.json "),
        ]));

        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.bind_addr, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(cfg.data_path.as_deref(), Some("data/wallets.json"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("BIND_ADDR", "localhost:80"),
            ("WALLET_DATA_PATH", "   "),
        ]));

        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.bind_addr, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(cfg.data_path, None);
    }
}
