//! maps_relay — a thin backend relay between a frontend and the Google Maps
//! Geocoding / Nearby Search APIs.
//!
//! The frontend posts a location name and a place category; the relay
//! resolves the location to coordinates, queries nearby places, and returns
//! the provider's result list. The API key never leaves this process.

pub mod config;
pub mod lookup;
pub mod server;
