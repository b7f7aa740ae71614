//! Remote country source for Geodex.
//!
//! This crate owns everything that touches the REST Countries dataset: the
//! leniently-decoded [`RemoteCountry`] record shape, the [`CountrySource`]
//! trait with its `reqwest` implementation, and the pure field mapper that
//! translates a remote record into the local [`geodex_core::Country`] shape.

pub mod client;
pub mod error;
pub mod mapper;
pub mod record;

pub use client::{CountrySource, DEFAULT_ENDPOINT, RestCountriesClient};
pub use error::FetchError;
pub use mapper::map_remote;
pub use record::RemoteCountry;
