//! Partial-update patch types for the API layer.

use serde::Deserialize;

use crate::country::Country;

/// A partial update to a country.
///
/// Fields that are absent (or `null`) in the request body are left
/// untouched, so a patch cannot clear an already-set attribute. The natural
/// identifier is not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub sub_region: Option<String>,
    #[serde(default)]
    pub demonym: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub independent: Option<bool>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub currency: Option<CurrencyPatch>,
}

/// Per-field patch for the embedded currency value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

impl CountryPatch {
    /// Returns true when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.region.is_none()
            && self.sub_region.is_none()
            && self.demonym.is_none()
            && self.population.is_none()
            && self.independent.is_none()
            && self.flag.is_none()
            && self.currency.is_none()
    }

    /// Applies the set fields onto an existing country.
    pub fn apply(&self, country: &mut Country) {
        if let Some(name) = &self.name {
            country.name = name.clone();
        }
        if let Some(region) = &self.region {
            country.region = Some(region.clone());
        }
        if let Some(sub_region) = &self.sub_region {
            country.sub_region = Some(sub_region.clone());
        }
        if let Some(demonym) = &self.demonym {
            country.demonym = Some(demonym.clone());
        }
        if let Some(population) = self.population {
            country.population = Some(population);
        }
        if let Some(independent) = self.independent {
            country.independent = Some(independent);
        }
        if let Some(flag) = &self.flag {
            country.flag = Some(flag.clone());
        }
        if let Some(currency) = &self.currency {
            if let Some(name) = &currency.name {
                country.currency.name = Some(name.clone());
            }
            if let Some(symbol) = &currency.symbol {
                country.currency.symbol = Some(symbol.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_only_set_fields() {
        let mut country = Country::new("USA", "United States");
        country.region = Some("Americas".into());

        let patch: CountryPatch =
            serde_json::from_str(r#"{"population": 331000000, "region": null}"#).unwrap();
        patch.apply(&mut country);

        assert_eq!(country.population, Some(331_000_000));
        // A null field is treated as absent, not as a clear.
        assert_eq!(country.region.as_deref(), Some("Americas"));
        assert_eq!(country.name, "United States");
    }

    #[test]
    fn patches_currency_per_field() {
        let mut country = Country::new("FRA", "France");
        country.currency.name = Some("Euro".into());
        country.currency.symbol = Some("€".into());

        let patch: CountryPatch =
            serde_json::from_str(r#"{"currency": {"name": "New Euro"}}"#).unwrap();
        patch.apply(&mut country);

        assert_eq!(country.currency.name.as_deref(), Some("New Euro"));
        assert_eq!(country.currency.symbol.as_deref(), Some("€"));
    }

    #[test]
    fn empty_patch_is_detected() {
        let patch: CountryPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: CountryPatch = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert!(!patch.is_empty());
    }

    #[test]
    fn sub_region_uses_camel_case_key() {
        let patch: CountryPatch =
            serde_json::from_str(r#"{"subRegion": "Northern Europe"}"#).unwrap();
        let mut country = Country::new("SWE", "Sweden");
        patch.apply(&mut country);
        assert_eq!(country.sub_region.as_deref(), Some("Northern Europe"));
    }
}
