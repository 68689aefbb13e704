//! Seams between the pipeline and the external services it calls.
//!
//! The production clients implement these traits directly. Tests substitute
//! in-memory stubs.

use std::fmt::Display;
use std::future::Future;

use roofleads_core::{Coordinate, PlaceRecord};
use roofleads_llm::{ChatClient, LlmError};
use roofleads_maps::{MapsClient, MapsError};

/// Turns a free-text prompt into a plain place name.
pub trait LocationExtractor {
    type Error: Display;

    fn extract(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Resolves a place name to a coordinate. `Ok(None)` means "not found".
pub trait Geocoder {
    type Error: Display;

    fn geocode(
        &self,
        place_name: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, Self::Error>> + Send;
}

/// Lists points of interest around a coordinate, in upstream order.
pub trait PlaceFinder {
    type Error: Display;

    fn find_nearby(
        &self,
        coordinate: Coordinate,
        radius_meters: u32,
    ) -> impl Future<Output = Result<Vec<PlaceRecord>, Self::Error>> + Send;
}

impl LocationExtractor for ChatClient {
    type Error = LlmError;

    fn extract(&self, prompt: &str) -> impl Future<Output = Result<String, LlmError>> + Send {
        self.extract_location(prompt)
    }
}

impl Geocoder for MapsClient {
    type Error = MapsError;

    fn geocode(
        &self,
        place_name: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, MapsError>> + Send {
        MapsClient::geocode(self, place_name)
    }
}

impl PlaceFinder for MapsClient {
    type Error = MapsError;

    fn find_nearby(
        &self,
        coordinate: Coordinate,
        radius_meters: u32,
    ) -> impl Future<Output = Result<Vec<PlaceRecord>, MapsError>> + Send {
        MapsClient::find_nearby(self, coordinate, radius_meters)
    }
}

// One `MapsClient` serves as both geocoder and place finder, so the pipeline
// is usually built from borrows.

impl<T: LocationExtractor + ?Sized> LocationExtractor for &T {
    type Error = T::Error;

    fn extract(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send {
        (**self).extract(prompt)
    }
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    type Error = T::Error;

    fn geocode(
        &self,
        place_name: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, Self::Error>> + Send {
        (**self).geocode(place_name)
    }
}

impl<T: PlaceFinder + ?Sized> PlaceFinder for &T {
    type Error = T::Error;

    fn find_nearby(
        &self,
        coordinate: Coordinate,
        radius_meters: u32,
    ) -> impl Future<Output = Result<Vec<PlaceRecord>, Self::Error>> + Send {
        (**self).find_nearby(coordinate, radius_meters)
    }
}
