//! Relay orchestration: validate → geocode → nearby search → done.
//!
//! Strictly linear per request; the nearby search needs the geocode result,
//! so the two outbound calls are never parallelized. The first failure
//! terminates the request.

use super::providers;
use super::types::{LookupError, LookupRequest, PlaceSearchResult};
use crate::config::ProviderConfig;

/// True iff both text fields are non-empty after trimming. Pure; failure
/// shaping is left to the caller.
pub fn validate(req: &LookupRequest) -> bool {
    !req.category.trim().is_empty() && !req.location.trim().is_empty()
}

/// Run the full lookup pipeline for one request.
///
/// `req.limit` is deliberately not applied to the result list; the field is
/// accepted for wire compatibility only.
pub fn lookup_nearby(
    req: &LookupRequest,
    providers: &ProviderConfig,
) -> Result<PlaceSearchResult, LookupError> {
    if !validate(req) {
        return Err(LookupError::InvalidInput);
    }

    let coords = providers::resolve_coordinates(&req.location, providers)?;
    providers::search_nearby(&coords, &req.category, providers)
}
