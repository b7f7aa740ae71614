//! Boundary validation for country data.
//!
//! Validation lives at the API boundary: the reconciler writes mapped remote
//! data without passing through these checks. Each function collects every
//! violation instead of stopping at the first, so a 400 response can report
//! all offending fields at once.

use serde::Serialize;

use crate::country::{Country, Currency};
use crate::patch::CountryPatch;

/// Maximum length of the natural identifier column.
pub const MAX_CODE_LEN: usize = 36;
/// Maximum length of the display name column.
pub const MAX_NAME_LEN: usize = 255;
/// Maximum length of region, sub-region and demonym columns.
pub const MAX_LABEL_LEN: usize = 100;
/// Maximum length of the flag URL column.
pub const MAX_FLAG_LEN: usize = 500;
/// Maximum length of the currency name column.
pub const MAX_CURRENCY_NAME_LEN: usize = 100;
/// Maximum length of the currency symbol column.
pub const MAX_CURRENCY_SYMBOL_LEN: usize = 10;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates a full country, as assembled from a create request.
///
/// Returns every violation found; an empty vector means the country is valid.
pub fn validate_country(country: &Country) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if country.code.trim().is_empty() {
        errors.push(FieldError::new("code", "must not be blank"));
    } else if country.code.len() > MAX_CODE_LEN {
        errors.push(FieldError::new(
            "code",
            format!("must be at most {MAX_CODE_LEN} characters"),
        ));
    }

    check_name(&country.name, &mut errors);
    check_optional_fields(
        country.region.as_deref(),
        country.sub_region.as_deref(),
        country.demonym.as_deref(),
        country.population,
        country.flag.as_deref(),
        &mut errors,
    );
    check_currency(&country.currency, &mut errors);

    errors
}

/// Validates the set fields of a partial update.
pub fn validate_patch(patch: &CountryPatch) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(name) = &patch.name {
        check_name(name, &mut errors);
    }
    check_optional_fields(
        patch.region.as_deref(),
        patch.sub_region.as_deref(),
        patch.demonym.as_deref(),
        patch.population,
        patch.flag.as_deref(),
        &mut errors,
    );
    if let Some(currency) = &patch.currency {
        let currency = Currency::new(currency.name.clone(), currency.symbol.clone());
        check_currency(&currency, &mut errors);
    }

    errors
}

fn check_name(name: &str, errors: &mut Vec<FieldError>) {
    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "must not be blank"));
    } else if name.len() > MAX_NAME_LEN {
        errors.push(FieldError::new(
            "name",
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
}

fn check_optional_fields(
    region: Option<&str>,
    sub_region: Option<&str>,
    demonym: Option<&str>,
    population: Option<i64>,
    flag: Option<&str>,
    errors: &mut Vec<FieldError>,
) {
    check_label("region", region, errors);
    check_label("subRegion", sub_region, errors);
    check_label("demonym", demonym, errors);

    if let Some(population) = population
        && population < 0
    {
        errors.push(FieldError::new("population", "must be zero or positive"));
    }

    if let Some(flag) = flag {
        if flag.len() > MAX_FLAG_LEN {
            errors.push(FieldError::new(
                "flag",
                format!("must be at most {MAX_FLAG_LEN} characters"),
            ));
        } else if url::Url::parse(flag).is_err() {
            errors.push(FieldError::new("flag", "must be a valid URL"));
        }
    }
}

fn check_label(field: &str, value: Option<&str>, errors: &mut Vec<FieldError>) {
    if let Some(value) = value
        && value.len() > MAX_LABEL_LEN
    {
        errors.push(FieldError::new(
            field,
            format!("must be at most {MAX_LABEL_LEN} characters"),
        ));
    }
}

fn check_currency(currency: &Currency, errors: &mut Vec<FieldError>) {
    if let Some(name) = &currency.name
        && name.len() > MAX_CURRENCY_NAME_LEN
    {
        errors.push(FieldError::new(
            "currency.name",
            format!("must be at most {MAX_CURRENCY_NAME_LEN} characters"),
        ));
    }
    if let Some(symbol) = &currency.symbol
        && symbol.len() > MAX_CURRENCY_SYMBOL_LEN
    {
        errors.push(FieldError::new(
            "currency.symbol",
            format!("must be at most {MAX_CURRENCY_SYMBOL_LEN} characters"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_country_passes() {
        let mut country = Country::new("USA", "United States");
        country.population = Some(331_000_000);
        country.flag = Some("https://example.com/us.png".into());
        assert!(validate_country(&country).is_empty());
    }

    #[test]
    fn blank_code_and_name_are_reported_together() {
        let country = Country::new("  ", "");
        let errors = validate_country(&country);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["code", "name"]);
    }

    #[test]
    fn negative_population_is_rejected() {
        let mut country = Country::new("TST", "Test");
        country.population = Some(-1);
        let errors = validate_country(&country);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "population");
    }

    #[test]
    fn flag_must_be_a_url() {
        let mut country = Country::new("TST", "Test");
        country.flag = Some("not a url".into());
        let errors = validate_country(&country);
        assert_eq!(errors[0].field, "flag");
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let mut country = Country::new("X".repeat(37), "Y".repeat(256));
        country.region = Some("R".repeat(101));
        country.currency.symbol = Some("$".repeat(11));
        let errors = validate_country(&country);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["code", "name", "region", "currency.symbol"]);
    }

    #[test]
    fn patch_only_checks_set_fields() {
        let patch = CountryPatch::default();
        assert!(validate_patch(&patch).is_empty());

        let patch = CountryPatch {
            name: Some(String::new()),
            population: Some(-5),
            ..Default::default()
        };
        let fields: Vec<String> = validate_patch(&patch)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["name", "population"]);
    }

    #[test]
    fn tri_state_independent_is_never_validated() {
        // Unknown independence is a legal state, not a missing field.
        let country = Country::new("TST", "Test");
        assert!(validate_country(&country).is_empty());
    }
}
