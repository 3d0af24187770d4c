//! Products domain module.
//!
//! This crate contains the validated `Product` record and its flat-file line
//! codec, implemented purely as deterministic domain logic (no IO).

pub mod product;

pub use product::{FIELD_SEPARATOR, Product, ProductId};
