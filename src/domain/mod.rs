//! Domain Layer - listing-surface concepts with no platform dependencies
//!
//! - **Entities**: column set, selection, menu model
//! - **Value Objects**: command ids, dispositions, geometry, view and theme modes
//! - **Services**: rules that span entities (file type similarity)

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{ColumnError, DomainError};
