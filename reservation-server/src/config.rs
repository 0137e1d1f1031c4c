//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::allocator::{DEFAULT_MAX_OCCUPANCY_PERCENT, OccupancyPolicy};
use crate::store::DEFAULT_REFERENCE_SEED;

/// Environment variable names read by [`ServerConfig::from_env`].
pub const ENV_BIND_ADDR: &str = "RESERVATION_BIND_ADDR";
pub const ENV_TRAINS_FILE: &str = "RESERVATION_TRAINS_FILE";
pub const ENV_MAX_OCCUPANCY_PERCENT: &str = "RESERVATION_MAX_OCCUPANCY_PERCENT";
pub const ENV_COUNT_INCOMING_PARTY: &str = "RESERVATION_COUNT_INCOMING_PARTY";
pub const ENV_BOOKING_REFERENCE_SEED: &str = "RESERVATION_BOOKING_REFERENCE_SEED";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name}={value:?}: {reason}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
    reason: &'static str,
}

/// Configuration parameters for the reservation server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// JSON file the train store is seeded from.
    pub trains_file: PathBuf,

    /// Occupancy rule applied to trains and coaches.
    pub policy: OccupancyPolicy,

    /// First booking reference handed out (rendered as hex).
    pub reference_seed: u64,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        bind_addr: SocketAddr,
        trains_file: impl Into<PathBuf>,
        policy: OccupancyPolicy,
        reference_seed: u64,
    ) -> Self {
        Self {
            bind_addr,
            trains_file: trains_file.into(),
            policy,
            reference_seed,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError {
                name: ENV_BIND_ADDR,
                value,
                reason: "expected host:port",
            })?;
        }

        if let Some(value) = lookup(ENV_TRAINS_FILE) {
            config.trains_file = PathBuf::from(value);
        }

        if let Some(value) = lookup(ENV_MAX_OCCUPANCY_PERCENT) {
            config.policy.max_occupancy_percent = match value.parse::<u8>() {
                Ok(percent) if percent <= 100 => percent,
                _ => {
                    return Err(ConfigError {
                        name: ENV_MAX_OCCUPANCY_PERCENT,
                        value,
                        reason: "expected a percentage from 0 to 100",
                    });
                }
            };
        }

        if let Some(value) = lookup(ENV_COUNT_INCOMING_PARTY) {
            config.policy.count_incoming_party = match value.as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError {
                        name: ENV_COUNT_INCOMING_PARTY,
                        value,
                        reason: "expected true or false",
                    });
                }
            };
        }

        if let Some(value) = lookup(ENV_BOOKING_REFERENCE_SEED) {
            config.reference_seed = u64::from_str_radix(&value, 16).map_err(|_| ConfigError {
                name: ENV_BOOKING_REFERENCE_SEED,
                value,
                reason: "expected a hexadecimal number",
            })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8081)),
            trains_file: PathBuf::from("data/trains.json"),
            policy: OccupancyPolicy::new(DEFAULT_MAX_OCCUPANCY_PERCENT, false),
            reference_seed: DEFAULT_REFERENCE_SEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8081)));
        assert_eq!(config.trains_file, PathBuf::from("data/trains.json"));
        assert_eq!(config.policy, OccupancyPolicy::default());
        assert_eq!(config.reference_seed, 0x075b_cd15);
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "0.0.0.0:9000"),
            (ENV_TRAINS_FILE, "/srv/trains.json"),
            (ENV_MAX_OCCUPANCY_PERCENT, "80"),
            (ENV_COUNT_INCOMING_PARTY, "true"),
            (ENV_BOOKING_REFERENCE_SEED, "ff"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            ServerConfig::new(
                SocketAddr::from(([0, 0, 0, 0], 9000)),
                "/srv/trains.json",
                OccupancyPolicy::new(80, true),
                255,
            )
        );
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[(ENV_MAX_OCCUPANCY_PERCENT, "120")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid RESERVATION_MAX_OCCUPANCY_PERCENT=\"120\": expected a percentage from 0 to 100"
        );

        assert!(ServerConfig::from_lookup(lookup(&[(ENV_BIND_ADDR, "nowhere")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(ENV_COUNT_INCOMING_PARTY, "maybe")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(ENV_BOOKING_REFERENCE_SEED, "xyz")])).is_err());
    }
}
