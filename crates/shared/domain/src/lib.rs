//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O or heavy logic, just type metadata, lifetimes and bindings.

pub mod binding;
pub mod descriptor;

pub use binding::{Binding, Lifetime};
pub use descriptor::{SEPARATOR, TypeCatalog, TypeDescriptor};
