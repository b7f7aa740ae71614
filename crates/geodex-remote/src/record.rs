//! Leniently-decoded remote record shapes.
//!
//! The remote dataset is loosely typed: any field may be absent, and a field
//! that is present may not have the expected shape. Every field here decodes
//! through [`lenient`], which turns a type mismatch into `None` instead of
//! failing the whole record. Only an undecodable top-level payload (not a
//! JSON array of objects) is a fetch failure.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Decodes a value as `Some(T)`, mapping absence or a type mismatch
/// to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// One country record as returned by the remote source.
///
/// Currencies are keyed by currency code in a `BTreeMap`, so iteration order
/// is the lexicographic order of the codes. The mapper relies on that for
/// its deterministic "first currency" pick.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteCountry {
    #[serde(default, deserialize_with = "lenient")]
    pub cca3: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<RemoteName>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub demonyms: Option<RemoteDemonyms>,
    #[serde(default, deserialize_with = "lenient")]
    pub population: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub independent: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub flags: Option<RemoteFlags>,
    #[serde(default, deserialize_with = "lenient")]
    pub currencies: Option<BTreeMap<String, RemoteCurrency>>,
}

impl RemoteCountry {
    /// Returns the record's natural identifier, or `None` when the `cca3`
    /// field is absent, non-string, or empty. Records without a valid
    /// identifier are skipped by the reconciler.
    pub fn identifier(&self) -> Option<&str> {
        match self.cca3.as_deref() {
            Some(code) if !code.trim().is_empty() => Some(code),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteName {
    #[serde(default, deserialize_with = "lenient")]
    pub common: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteDemonyms {
    #[serde(default, deserialize_with = "lenient")]
    pub eng: Option<RemoteDemonym>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteDemonym {
    #[serde(default, deserialize_with = "lenient")]
    pub m: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteFlags {
    #[serde(default, deserialize_with = "lenient")]
    pub png: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub svg: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteCurrency {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub symbol: Option<String>,
}
