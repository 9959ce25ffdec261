use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use crate::error::{config_error, Error};
use crate::estimate::DEFAULT_AVERAGE_SPEED_KMH;
use crate::external::geocoding::Provider;

// Nominatim-format search endpoints, tried in order until one yields a hit.
pub const DEFAULT_PROVIDERS: &str =
    "https://nominatim.openstreetmap.org/search,https://geocode.maps.co/search";

#[derive(Clone, Debug)]
pub struct Config {
    pub geocoder: GeocoderConfig,
    pub debounce: DebounceConfig,
    pub average_speed_kmh: f64,
    pub listen_addr: SocketAddr,
}

#[derive(Clone, Debug)]
pub struct GeocoderConfig {
    pub providers: Vec<Provider>,
    pub timeout_ms: u64,
}

#[derive(Clone, Debug)]
pub struct DebounceConfig {
    pub quiescence_ms: u64,
    pub min_query_len: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let country_codes = match var_or("GEOCODER_COUNTRY_CODES", "in").as_str() {
            "" => None,
            codes => Some(codes.to_string()),
        };

        let providers: Vec<Provider> = var_or("GEOCODER_PROVIDERS", DEFAULT_PROVIDERS)
            .split(',')
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .map(|base| Provider {
                base_url: base.to_string(),
                country_codes: country_codes.clone(),
            })
            .collect();

        if providers.is_empty() {
            return Err(config_error("GEOCODER_PROVIDERS is empty"));
        }

        Ok(Self {
            geocoder: GeocoderConfig {
                providers,
                timeout_ms: parse_var("GEOCODER_TIMEOUT_MS", 5000)?,
            },
            debounce: DebounceConfig {
                quiescence_ms: parse_var("DEBOUNCE_QUIESCENCE_MS", 1000)?,
                min_query_len: parse_var("MIN_QUERY_LEN", 3)?,
            },
            average_speed_kmh: parse_var("AVERAGE_SPEED_KMH", DEFAULT_AVERAGE_SPEED_KMH)?,
            listen_addr: parse_var("LISTEN_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, Error> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| config_error(key)),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(err) => Err(err.into()),
    }
}
