//! Inventory service module.
//!
//! Owns the in-memory product collection, enforces id uniqueness, and keeps
//! the collection synchronized with one flat text file (full rewrite after
//! every mutation).

pub mod service;
pub mod store;

pub use service::Inventory;
pub use store::default_data_file;
