//! Input classification and syntactic validation.
//!
//! Nothing in here performs I/O; failures are returned as
//! [`LookupError::InvalidFormat`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::LookupError;

static ZIP_SHAPED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]{5}\s*$").expect("valid regex"));
static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("valid regex"));
static CITY_INVALID_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s-]").expect("valid regex"));

/// A trimmed, exactly-5-digit US zip code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedZip(String);

impl ParsedZip {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParsedZip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated `City, ST` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCityState {
    city: String,
    state: String,
}

impl ParsedCityState {
    /// City with every character other than ASCII letters, whitespace and `-` removed.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Uppercased 2-character region code.
    pub fn state(&self) -> &str {
        &self.state
    }
}

/// True when the input looks like a zip code, surrounding whitespace allowed.
pub fn is_zip_shaped(input: &str) -> bool {
    ZIP_SHAPED_RE.is_match(input)
}

pub fn validate_zip(input: &str) -> Result<ParsedZip, LookupError> {
    let zip = input.trim();
    if zip.is_empty() {
        return Err(LookupError::invalid_format("Zip code cannot be empty"));
    }
    if !ZIP_RE.is_match(zip) {
        return Err(LookupError::invalid_format(
            "Invalid zip code format. Must be exactly 5 digits",
        ));
    }

    Ok(ParsedZip(zip.to_string()))
}

pub fn validate_city_state(input: &str) -> Result<ParsedCityState, LookupError> {
    if input.trim().is_empty() {
        return Err(LookupError::invalid_format("Location cannot be empty"));
    }

    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [city, state] = parts.as_slice() else {
        return Err(LookupError::invalid_format(
            "Invalid city-state format. Must be 'City, ST'",
        ));
    };

    if city.is_empty() {
        return Err(LookupError::invalid_format("City name cannot be empty"));
    }
    if state.is_empty() {
        return Err(LookupError::invalid_format("State code cannot be empty"));
    }
    if state.chars().count() != 2 {
        return Err(LookupError::invalid_format(
            "State must be a 2-letter code (e.g., NY, CA)",
        ));
    }

    let city = CITY_INVALID_CHARS_RE.replace_all(city, "").into_owned();
    if city.trim().is_empty() {
        return Err(LookupError::invalid_format("City name contains invalid characters"));
    }

    Ok(ParsedCityState { city, state: state.to_uppercase() })
}
