//! Infrastructure Layer - Composition of the listing session

pub mod composition_root;

pub use composition_root::PaneSession;
