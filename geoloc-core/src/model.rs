use serde::{Deserialize, Serialize};

/// Which remote lookup strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Zip,
    CityState,
}

impl LookupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Zip => "zip",
            LookupKind::CityState => "city_state",
        }
    }
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure classification of a [`LocationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatus {
    ValidationError,
    Error,
}

impl ErrorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStatus::ValidationError => "validation_error",
            ErrorStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessStatus {
    Success,
}

/// One match as returned by the geocoding service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    pub input: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub kind: LookupKind,
    pub status: SuccessStatus,
}

impl LocationResult {
    pub fn from_record(input: &str, kind: LookupKind, record: ProviderRecord) -> Self {
        // The zip endpoint carries no region name.
        let state = match kind {
            LookupKind::Zip => None,
            LookupKind::CityState => record.state,
        };

        Self {
            input: input.to_string(),
            name: record.name,
            latitude: record.lat,
            longitude: record.lon,
            country: record.country,
            state,
            kind,
            status: SuccessStatus::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationError {
    pub input: String,
    pub error: String,
    pub status: ErrorStatus,
}

/// Outcome of resolving one input: exactly one per input, never a fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationRecord {
    Success(LocationResult),
    Failure(LocationError),
}

impl LocationRecord {
    pub fn input(&self) -> &str {
        match self {
            LocationRecord::Success(r) => &r.input,
            LocationRecord::Failure(e) => &e.input,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LocationRecord::Success(_))
    }

    pub fn as_success(&self) -> Option<&LocationResult> {
        match self {
            LocationRecord::Success(r) => Some(r),
            LocationRecord::Failure(_) => None,
        }
    }

    pub fn as_failure(&self) -> Option<&LocationError> {
        match self {
            LocationRecord::Success(_) => None,
            LocationRecord::Failure(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn madison() -> ProviderRecord {
        ProviderRecord {
            name: "Madison".into(),
            lat: 43.074761,
            lon: -89.3837613,
            country: "US".into(),
            state: Some("Wisconsin".into()),
            zip: None,
        }
    }

    #[test]
    fn success_serializes_to_flat_record() {
        let record = LocationRecord::Success(LocationResult::from_record(
            "Madison, WI",
            LookupKind::CityState,
            madison(),
        ));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "input": "Madison, WI",
                "name": "Madison",
                "latitude": 43.074761,
                "longitude": -89.3837613,
                "country": "US",
                "state": "Wisconsin",
                "type": "city_state",
                "status": "success"
            })
        );
    }

    #[test]
    fn zip_result_has_no_state() {
        let result = LocationResult::from_record("10001", LookupKind::Zip, madison());
        assert_eq!(result.state, None);

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("state").is_none());
        assert_eq!(value["type"], "zip");
    }

    #[test]
    fn failure_serializes_with_error_key() {
        let record = LocationRecord::Failure(LocationError {
            input: "".into(),
            error: "Location cannot be empty".into(),
            status: ErrorStatus::ValidationError,
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["error"], "Location cannot be empty");
        assert_eq!(value["status"], "validation_error");
        assert!(!record.is_success());
        assert!(record.as_success().is_none());
    }

    #[test]
    fn untagged_record_deserializes_either_shape() {
        let ok: LocationRecord = serde_json::from_value(json!({
            "input": "10001",
            "name": "New York",
            "latitude": 40.7484,
            "longitude": -73.9967,
            "country": "US",
            "type": "zip",
            "status": "success"
        }))
        .unwrap();
        assert!(ok.is_success());

        let err: LocationRecord = serde_json::from_value(json!({
            "input": "00000",
            "error": "Zip code 00000 not found",
            "status": "validation_error"
        }))
        .unwrap();
        assert_eq!(err.as_failure().map(|e| e.status), Some(ErrorStatus::ValidationError));
    }

    #[test]
    fn provider_record_ignores_unknown_fields() {
        let record: ProviderRecord = serde_json::from_value(json!({
            "name": "Madison",
            "local_names": {"en": "Madison"},
            "lat": 43.07,
            "lon": -89.38,
            "country": "US",
            "state": "Wisconsin"
        }))
        .unwrap();
        assert_eq!(record.state.as_deref(), Some("Wisconsin"));
        assert_eq!(record.zip, None);
    }
}
