//! Domain Services - stateless rules over entities

pub mod file_type;

pub use file_type::same_file_type;
