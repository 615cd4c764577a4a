//! Single and batch resolution of raw location strings into uniform records.

use tracing::{debug, warn};

use crate::{
    error::LookupError,
    model::{LocationError, LocationRecord, LocationResult, LookupKind, ProviderRecord},
    provider::GeocodingProvider,
    validate::{is_zip_shaped, validate_city_state, validate_zip},
};

#[derive(Debug)]
pub struct LocationResolver {
    provider: Box<dyn GeocodingProvider>,
}

impl LocationResolver {
    pub fn new<P: GeocodingProvider + 'static>(provider: P) -> Self {
        Self { provider: Box::new(provider) }
    }

    pub fn from_boxed(provider: Box<dyn GeocodingProvider>) -> Self {
        Self { provider }
    }

    /// Resolve one input. Every failure is folded into a [`LocationError`].
    pub async fn resolve(&self, input: &str) -> LocationRecord {
        let kind = if is_zip_shaped(input) { LookupKind::Zip } else { LookupKind::CityState };
        debug!(input, %kind, "resolving location");

        match self.lookup(kind, input).await {
            Ok(record) => LocationRecord::Success(LocationResult::from_record(input, kind, record)),
            Err(err) => {
                let status = err.status();
                warn!(input, %status, error = %err, "location lookup failed");
                LocationRecord::Failure(LocationError {
                    input: input.to_string(),
                    error: err.to_string(),
                    status,
                })
            }
        }
    }

    /// Resolve each input in order; one record per input, failures included.
    pub async fn resolve_many<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<LocationRecord> {
        let mut records = Vec::with_capacity(inputs.len());
        for input in inputs {
            records.push(self.resolve(input.as_ref()).await);
        }
        records
    }

    async fn lookup(&self, kind: LookupKind, input: &str) -> Result<ProviderRecord, LookupError> {
        match kind {
            LookupKind::Zip => {
                let zip = validate_zip(input)?;
                self.provider.lookup_zip(&zip).await
            }
            LookupKind::CityState => {
                let location = validate_city_state(input)?;
                self.provider.lookup_city_state(&location).await
            }
        }
    }
}
