//! Core domain types for the Geodex country registry.
//!
//! This crate defines the `Country` entity with its embedded `Currency`
//! value, the partial-update patch types used by the API layer, and the
//! boundary validation functions. It carries no I/O: storage backends and
//! the HTTP layer live in their own crates.

pub mod country;
pub mod patch;
pub mod validate;

pub use country::{Country, Currency};
pub use patch::{CountryPatch, CurrencyPatch};
pub use validate::{FieldError, validate_country, validate_patch};
