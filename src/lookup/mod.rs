//! Lookup subsystem for maps_relay.
//!
//! Three stages composed in strict sequence: validate the request, resolve
//! the location text to coordinates, then relay a nearby-places search.

pub mod providers;
pub mod relay;
pub mod types;

pub use relay::{lookup_nearby, validate};
pub use types::{Coordinates, LookupError, LookupRequest, PlaceRecord, PlaceSearchResult};
