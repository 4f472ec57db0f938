//! Paneview - the listing surface of a tabbed Windows file manager
//!
//! Column drag-reorder, the selection and background context menus, and
//! resolving how activated items open. Everything above `platform` is free
//! of Windows dependencies and runs its tests anywhere.

// Must come first so the log! macro is visible to later modules
#[macro_use]
pub mod log;

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod platform;
pub mod shared;
