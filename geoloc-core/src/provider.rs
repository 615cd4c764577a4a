use crate::{
    Config,
    error::LookupError,
    model::ProviderRecord,
    provider::openweather::OpenWeatherProvider,
    validate::{ParsedCityState, ParsedZip},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Remote lookups against a geocoding service, scoped to the US.
#[async_trait]
pub trait GeocodingProvider: Send + Sync + Debug {
    /// Resolve a zip code. `LookupError::NotFound` when the service has no match.
    async fn lookup_zip(&self, zip: &ParsedZip) -> Result<ProviderRecord, LookupError>;

    /// Resolve a city/state pair to its best match. `LookupError::NotFound`
    /// when the service returns no results.
    async fn lookup_city_state(
        &self,
        location: &ParsedCityState,
    ) -> Result<ProviderRecord, LookupError>;
}

/// Construct the OpenWeather provider from config plus explicit overrides.
pub fn provider_from_config(
    config: &Config,
    api_key_override: Option<&str>,
    base_url_override: Option<&str>,
) -> anyhow::Result<Box<dyn GeocodingProvider>> {
    let settings = config.provider_settings(api_key_override, base_url_override)?;
    let boxed: Box<dyn GeocodingProvider> = Box::new(OpenWeatherProvider::new(settings)?);
    Ok(boxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg, None, None).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_with_override() {
        let cfg = Config::default();
        let provider = provider_from_config(&cfg, Some("KEY"), None);
        assert!(provider.is_ok());
    }
}
