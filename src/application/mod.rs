//! Application Layer - Use Cases and Workflows
//!
//! This layer orchestrates domain entities and defines the listing's
//! workflows. It contains:
//! - **Use Cases**: Single-purpose operations (reorder columns, context menu, paste)
//! - **Ports**: Interfaces for the listing widget, clipboard, shell, menus and host
//! - **Services**: Command routing, menu templates and theme setup
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that the platform layer implements
//! - Contains no framework-specific code

pub mod ports;
pub mod services;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use ports::*;
pub use services::*;
pub use use_cases::*;
