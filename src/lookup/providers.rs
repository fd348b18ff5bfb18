//! Outbound providers: the geocoding endpoint and the nearby-places endpoint.
//!
//! Both stages have the same shape: build a GET query, issue it, check the
//! status, parse the payload. Failures are never retried.

use super::types::{Coordinates, LookupError, PlaceRecord, PlaceSearchResult};
use crate::config::ProviderConfig;
use serde::Deserialize;

/// Region bias sent with every geocode query.
const REGION_BIAS: &str = "in";

/// Nearby-search radius in meters.
const SEARCH_RADIUS_METERS: u32 = 5000;

// ─── Geocode wire payload ───────────────────────────────────────

#[derive(Deserialize, Debug)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeHit>,
    #[serde(default)]
    status: String,
}

#[derive(Deserialize, Debug)]
struct GeocodeHit {
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize, Debug)]
struct RawGeometry {
    location: Option<RawLatLng>,
}

#[derive(Deserialize, Debug)]
struct RawLatLng {
    lat: Option<f64>,
    lng: Option<f64>,
}

impl GeocodeResponse {
    /// Best match is first, by provider convention; later entries are never
    /// consulted. Both coordinates must be present or the resolution fails.
    fn first_coordinates(&self) -> Option<Coordinates> {
        let loc = self
            .results
            .first()?
            .geometry
            .as_ref()?
            .location
            .as_ref()?;
        match (loc.lat, loc.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }
}

/// Resolve a free-text location to coordinates via the geocoding provider.
pub fn resolve_coordinates(
    location: &str,
    providers: &ProviderConfig,
) -> Result<Coordinates, LookupError> {
    let url = format!(
        "{}?address={}&region={}&key={}",
        providers.geocode_url,
        urlencod(location.trim()),
        REGION_BIAS,
        urlencod(&providers.api_key),
    );

    let payload: GeocodeResponse = call_provider(&url)?;
    payload
        .first_coordinates()
        .ok_or(LookupError::NoCoordinates)
}

// ─── Nearby-search wire payload ─────────────────────────────────

#[derive(Deserialize, Debug)]
struct NearbyResponse {
    #[serde(default)]
    results: Vec<NearbyHit>,
    #[serde(default)]
    status: String,
}

#[derive(Deserialize, Debug)]
struct NearbyHit {
    #[serde(default)]
    name: String,
    #[serde(default)]
    vicinity: String,
    rating: Option<f32>,
    user_ratings_total: Option<i64>,
    geometry: Option<RawGeometry>,
    #[serde(default)]
    place_id: String,
}

impl NearbyHit {
    fn into_record(self) -> PlaceRecord {
        let location = self
            .geometry
            .and_then(|g| g.location)
            .map(|l| Coordinates {
                lat: l.lat.unwrap_or_default(),
                lng: l.lng.unwrap_or_default(),
            })
            .unwrap_or_default();

        PlaceRecord {
            name: self.name,
            address: self.vicinity,
            rating: self.rating,
            user_ratings_total: self.user_ratings_total,
            location,
            place_id: self.place_id,
        }
    }
}

/// Query the places provider for points of interest around `coords`,
/// filtered by category. The result list is relayed verbatim: no filtering,
/// no re-ranking, no limit enforcement.
pub fn search_nearby(
    coords: &Coordinates,
    category: &str,
    providers: &ProviderConfig,
) -> Result<PlaceSearchResult, LookupError> {
    let url = format!(
        "{}?location={},{}&radius={}&type={}&key={}",
        providers.places_url,
        coords.lat,
        coords.lng,
        SEARCH_RADIUS_METERS,
        urlencod(category.trim()),
        urlencod(&providers.api_key),
    );

    let payload: NearbyResponse = call_provider(&url)?;
    Ok(PlaceSearchResult {
        results: payload.results.into_iter().map(NearbyHit::into_record).collect(),
        status: payload.status,
    })
}

// ─── Shared call-and-parse step ─────────────────────────────────

fn call_provider<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, LookupError> {
    let response = ureq::get(url)
        .set("Accept", "application/json")
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(code, _) => LookupError::UpstreamStatus(code),
            ureq::Error::Transport(t) => LookupError::Transport(t.to_string()),
        })?;

    response
        .into_json()
        .map_err(|e| LookupError::Transport(e.to_string()))
}

// ─── URL encoding (minimal, no extra dep) ───────────────────────

/// Percent-encode everything but unreserved characters, per UTF-8 byte, so
/// multi-byte input survives the round trip through the provider.
fn urlencod(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
