//! Pure translation from a remote record to the local entity shape.

use geodex_core::{Country, Currency};

use crate::record::RemoteCountry;

/// Fallback display name for records that carry no `name.common`.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Maps one remote record onto a country with the given code.
///
/// Total and deterministic: every optional remote field that is absent or
/// malformed maps to `None`, and a missing common name maps to the literal
/// `"Unknown"`. The flag prefers the PNG URL and falls back to SVG. When a
/// record lists several currencies, the one with the lexicographically
/// smallest currency code wins; the remote dataset defines no order of its
/// own, so the smallest code is our documented tie-break.
pub fn map_remote(code: &str, remote: &RemoteCountry) -> Country {
    let name = remote
        .name
        .as_ref()
        .and_then(|n| n.common.clone())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let demonym = remote
        .demonyms
        .as_ref()
        .and_then(|d| d.eng.as_ref())
        .and_then(|e| e.m.clone());

    let flag = remote
        .flags
        .as_ref()
        .and_then(|f| f.png.clone().or_else(|| f.svg.clone()));

    let currency = remote
        .currencies
        .as_ref()
        .and_then(|map| map.values().next())
        .map(|c| Currency::new(c.name.clone(), c.symbol.clone()))
        .unwrap_or_default();

    Country {
        code: code.to_string(),
        name,
        region: remote.region.clone(),
        sub_region: remote.subregion.clone(),
        demonym,
        population: remote.population,
        independent: remote.independent,
        flag,
        currency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> RemoteCountry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn maps_every_field() {
        let remote = record(
            r#"{
                "cca3": "FRA",
                "name": {"common": "France"},
                "region": "Europe",
                "subregion": "Western Europe",
                "demonyms": {"eng": {"m": "French"}},
                "population": 67391582,
                "independent": true,
                "flags": {"png": "https://flags.example/fr.png", "svg": "https://flags.example/fr.svg"},
                "currencies": {"EUR": {"name": "Euro", "symbol": "€"}}
            }"#,
        );

        let country = map_remote("FRA", &remote);
        assert_eq!(country.code, "FRA");
        assert_eq!(country.name, "France");
        assert_eq!(country.region.as_deref(), Some("Europe"));
        assert_eq!(country.sub_region.as_deref(), Some("Western Europe"));
        assert_eq!(country.demonym.as_deref(), Some("French"));
        assert_eq!(country.population, Some(67_391_582));
        assert_eq!(country.independent, Some(true));
        assert_eq!(country.flag.as_deref(), Some("https://flags.example/fr.png"));
        assert_eq!(country.currency.name.as_deref(), Some("Euro"));
        assert_eq!(country.currency.symbol.as_deref(), Some("€"));
    }

    #[test]
    fn missing_name_defaults_to_unknown() {
        let country = map_remote("XXX", &record("{}"));
        assert_eq!(country.name, UNKNOWN_NAME);
    }

    #[test]
    fn empty_record_maps_to_all_none() {
        let country = map_remote("XXX", &record("{}"));
        assert!(country.region.is_none());
        assert!(country.sub_region.is_none());
        assert!(country.demonym.is_none());
        assert!(country.population.is_none());
        assert!(country.independent.is_none());
        assert!(country.flag.is_none());
        assert_eq!(country.currency, Currency::default());
    }

    #[test]
    fn independent_false_is_preserved_not_dropped() {
        let country = map_remote("XXX", &record(r#"{"independent": false}"#));
        assert_eq!(country.independent, Some(false));
    }

    #[test]
    fn flag_falls_back_to_svg() {
        let country = map_remote(
            "XXX",
            &record(r#"{"flags": {"svg": "https://flags.example/x.svg"}}"#),
        );
        assert_eq!(country.flag.as_deref(), Some("https://flags.example/x.svg"));
    }

    #[test]
    fn no_demonym_fallback_to_other_languages() {
        let country = map_remote(
            "XXX",
            &record(r#"{"demonyms": {"fra": {"m": "Français"}}}"#),
        );
        assert!(country.demonym.is_none());
    }

    #[test]
    fn empty_currencies_map_to_null_currency() {
        let country = map_remote("XXX", &record(r#"{"currencies": {}}"#));
        assert_eq!(country.currency, Currency::default());
    }

    #[test]
    fn first_currency_is_smallest_code() {
        let country = map_remote(
            "XXX",
            &record(
                r#"{"currencies": {
                    "XOF": {"name": "West African CFA franc", "symbol": "Fr"},
                    "EUR": {"name": "Euro", "symbol": "€"}
                }}"#,
            ),
        );
        // EUR sorts before XOF, regardless of the order in the payload.
        assert_eq!(country.currency.name.as_deref(), Some("Euro"));
        assert_eq!(country.currency.symbol.as_deref(), Some("€"));
    }

    #[test]
    fn chosen_currency_tolerates_missing_fields() {
        let country = map_remote("XXX", &record(r#"{"currencies": {"ZZZ": {}}}"#));
        assert_eq!(country.currency, Currency::default());
    }
}
