//! Controllers - Translate listing events to use case calls

pub mod listing_controller;

pub use listing_controller::{EventResult, ListingController, ListingEvent, ListingKey};
