//! Adapters Layer - Translate between the platform and the application
//!
//! Controllers turn decoded window events into listing commands.

pub mod controllers;
