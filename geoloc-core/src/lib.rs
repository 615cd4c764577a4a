//! Core library for the `geoloc` CLI.
//!
//! This crate defines:
//! - Input classification and validation (zip codes, `City, ST` pairs)
//! - Abstraction over geocoding providers, with an OpenWeather implementation
//! - The resolver that turns raw inputs into uniform success / error records
//! - Configuration & credentials handling
//!
//! It is used by `geoloc-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod validate;

pub use config::{Config, ProviderSettings};
pub use error::LookupError;
pub use model::{
    ErrorStatus, LocationError, LocationRecord, LocationResult, LookupKind, ProviderRecord,
};
pub use provider::{GeocodingProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use resolver::LocationResolver;
pub use validate::{
    ParsedCityState, ParsedZip, is_zip_shaped, validate_city_state, validate_zip,
};
