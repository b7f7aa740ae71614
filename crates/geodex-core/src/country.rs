//! The `Country` entity and its embedded `Currency` value.

use serde::{Deserialize, Serialize};

/// A country record keyed by its natural identifier.
///
/// The `code` is a short stable natural key (a cca3 country code such as
/// `"USA"`), unique across the store and immutable once set. All other
/// attributes are optional except the display name. The JSON representation
/// uses camelCase field names (`subRegion`), matching the public API shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Natural identifier (cca3 code). Unique, immutable.
    pub code: String,
    /// Display name. Required, non-empty.
    pub name: String,
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub demonym: Option<String>,
    /// Non-negative when present.
    pub population: Option<i64>,
    /// Tri-state: `Some(true)`, `Some(false)`, or unknown (`None`).
    pub independent: Option<bool>,
    /// Flag image URL.
    pub flag: Option<String>,
    /// Always present, possibly with both fields unset. Replaced wholesale
    /// when a reconciliation pass updates the record.
    #[serde(default)]
    pub currency: Currency,
}

impl Country {
    /// Creates a country with only the identifier and name set.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            region: None,
            sub_region: None,
            demonym: None,
            population: None,
            independent: None,
            flag: None,
            currency: Currency::default(),
        }
    }
}

/// Embedded currency value. No identity of its own: it is always owned by
/// exactly one `Country`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

impl Currency {
    pub fn new(name: Option<String>, symbol: Option<String>) -> Self {
        Self { name, symbol }
    }
}
