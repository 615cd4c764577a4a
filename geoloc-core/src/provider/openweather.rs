use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::ProviderSettings,
    error::LookupError,
    model::ProviderRecord,
    validate::{ParsedCityState, ParsedZip},
};

use super::GeocodingProvider;

const COUNTRY_CODE: &str = "US";

/// OpenWeather Geocoding API 1.0 (`/zip` and `/direct`).
#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Raw reply: status plus body, read before any decoding.
struct RawResponse {
    status: StatusCode,
    body: String,
}

impl OpenWeatherProvider {
    pub fn new(settings: ProviderSettings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self { api_key: settings.api_key, base_url: settings.base_url, http })
    }

    async fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<RawResponse, LookupError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(url = %url, ?query, "sending geocoding request");

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(LookupError::http)?;

        let status = res.status();
        let body = res.text().await.map_err(LookupError::http)?;
        debug!(url = %url, status = status.as_u16(), "geocoding response received");

        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl GeocodingProvider for OpenWeatherProvider {
    async fn lookup_zip(&self, zip: &ParsedZip) -> Result<ProviderRecord, LookupError> {
        let zip_query = format!("{zip},{COUNTRY_CODE}");
        let res = self.get("zip", &[("zip", zip_query.as_str())]).await?;

        if res.status == StatusCode::NOT_FOUND {
            return Err(LookupError::not_found(format!("Zip code {zip} not found")));
        }
        ensure_success(&res)?;

        decode(&res.body, "zip lookup")
    }

    async fn lookup_city_state(
        &self,
        location: &ParsedCityState,
    ) -> Result<ProviderRecord, LookupError> {
        let q = format!("{},{},{COUNTRY_CODE}", location.city(), location.state());
        let res = self.get("direct", &[("q", q.as_str()), ("limit", "1")]).await?;
        ensure_success(&res)?;

        let matches: Vec<ProviderRecord> = decode(&res.body, "direct geocoding")?;
        matches.into_iter().next().ok_or_else(|| {
            LookupError::not_found(format!(
                "No results found for {}, {}",
                location.city(),
                location.state()
            ))
        })
    }
}

fn ensure_success(res: &RawResponse) -> Result<(), LookupError> {
    if res.status.is_success() {
        return Ok(());
    }

    Err(LookupError::Status { status: res.status.as_u16(), body: truncate_body(&res.body) })
}

fn decode<T: DeserializeOwned>(body: &str, context: &'static str) -> Result<T, LookupError> {
    serde_json::from_str(body).map_err(|source| LookupError::Decode { context, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_key() {
        let provider = OpenWeatherProvider::new(ProviderSettings {
            api_key: "SECRET-KEY-123".into(),
            base_url: "http://127.0.0.1:1".into(),
            timeout: std::time::Duration::from_secs(1),
        })
        .unwrap();

        let debug = format!("{provider:?}");
        assert!(!debug.contains("SECRET-KEY-123"), "key leaked: {debug}");
        assert!(debug.contains("[redacted]"));
        assert!(debug.contains("http://127.0.0.1:1"));
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("not found"), "not found");
    }

    #[test]
    fn truncate_body_cuts_on_char_boundary() {
        let body = "é".repeat(250);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }

    #[test]
    fn non_success_status_becomes_generic_error() {
        let res = RawResponse {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"cod":401,"message":"Invalid API key"}"#.into(),
        };
        let err = ensure_success(&res).unwrap_err();
        assert!(matches!(err, LookupError::Status { status: 401, .. }));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn decode_reports_context() {
        let err = decode::<ProviderRecord>("<html>", "zip lookup").unwrap_err();
        assert!(matches!(err, LookupError::Decode { context: "zip lookup", .. }));
    }
}
