//! Core types for the lookup subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An inbound lookup request: a place category and a free-text location.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    /// Place category, e.g. "restaurant" or "cafe".
    #[serde(rename = "type")]
    pub category: String,
    /// Free-text location name, e.g. "Mumbai".
    pub location: String,
    /// Accepted for wire compatibility but not applied to the result list.
    #[serde(default)]
    pub limit: u8,
}

/// A latitude/longitude pair, produced only from a geocode response that
/// carried both values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One nearby place, reshaped from the provider payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub address: String,
    pub rating: Option<f32>,
    pub user_ratings_total: Option<i64>,
    pub location: Coordinates,
    pub place_id: String,
}

/// The value returned to the caller: the provider's result list, verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceSearchResult {
    pub results: Vec<PlaceRecord>,
    pub status: String,
}

/// Lookup failures. All are terminal for the current request.
#[derive(Debug)]
pub enum LookupError {
    /// A required request field was empty after trimming.
    InvalidInput,
    /// A provider answered with a non-2xx status, preserved for the caller.
    UpstreamStatus(u16),
    /// The geocode call succeeded but yielded no usable coordinates.
    NoCoordinates,
    /// Network failure reaching a provider, or an unparseable payload.
    Transport(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Fields are not valid"),
            Self::UpstreamStatus(code) => {
                write!(f, "Upstream provider returned status {}", code)
            }
            Self::NoCoordinates => {
                write!(f, "Failed to extract lat/lng from geocoding response")
            }
            Self::Transport(msg) => write!(f, "Upstream request failed: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}
