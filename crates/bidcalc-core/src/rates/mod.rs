pub mod table;

pub use table::{rate_label, RateTable};

use crate::error::BidError;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::path::Path;

/// Load a rate table from a JSON override file.
///
/// The file is a JSON object mapping rate keys to values. Keys not present
/// keep their default value.
pub fn load_rates(path: &Path) -> Result<RateTable, BidError> {
    let content = std::fs::read_to_string(path).map_err(|e| BidError::RatesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_rates(&content, path)
}

/// Parse a rate override file's contents, reporting errors against `source`.
pub fn parse_rates(json: &str, source: &Path) -> Result<RateTable, BidError> {
    let overrides: BTreeMap<String, Decimal> =
        serde_json::from_str(json).map_err(|e| BidError::RatesLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    let mut rates = RateTable::default();
    apply_overrides(&mut rates, overrides)?;
    Ok(rates)
}

/// Parse rate overrides from a JSON string (no file path context).
pub fn parse_rates_str(json: &str) -> Result<RateTable, BidError> {
    let overrides: BTreeMap<String, Decimal> = serde_json::from_str(json)?;
    let mut rates = RateTable::default();
    apply_overrides(&mut rates, overrides)?;
    Ok(rates)
}

/// Apply `(key, value)` overrides on top of an existing table.
///
/// Stops at the first invalid override; earlier overrides stay applied.
pub fn apply_overrides<I, K>(rates: &mut RateTable, overrides: I) -> Result<(), BidError>
where
    I: IntoIterator<Item = (K, Decimal)>,
    K: AsRef<str>,
{
    for (key, value) in overrides {
        let key = key.as_ref();
        rates.set(key, value)?;
        tracing::debug!(rate = key, %value, "rate override applied");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_parse_partial_overrides() {
        let json = r#"{ "hourly_wage": "32.50", "mileage_rate": "0.70" }"#;
        let rates = parse_rates_str(json).unwrap();
        assert_eq!(rates.hourly_wage, dec!(32.50));
        assert_eq!(rates.mileage_rate, dec!(0.70));
        assert_eq!(rates.hoop_cost_each, dec!(2300));
    }

    #[test]
    fn test_parse_integer_values() {
        let rates = parse_rates_str(r#"{ "hoop_cost_each": 2500 }"#).unwrap();
        assert_eq!(rates.hoop_cost_each, dec!(2500));
    }

    #[test]
    fn test_empty_object_is_defaults() {
        assert_eq!(parse_rates_str("{}").unwrap(), RateTable::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let json = r#"{ "gold_leaf_cost": "1" }"#;
        assert!(matches!(
            parse_rates_str(json),
            Err(BidError::UnknownRate(_))
        ));
    }

    #[test]
    fn test_negative_value_rejected() {
        let json = r#"{ "fence_cost_per_foot": "-7" }"#;
        assert!(parse_rates_str(json).is_err());
    }

    #[test]
    fn test_malformed_json_reports_path() {
        let err = parse_rates("{ not json", Path::new("rates.json")).unwrap_err();
        assert!(matches!(err, BidError::RatesLoad { .. }));
        assert!(err.to_string().contains("rates.json"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "lodging_cost_per_day": "300" }}"#).unwrap();
        let rates = load_rates(file.path()).unwrap();
        assert_eq!(rates.lodging_cost_per_day, dec!(300));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_rates(Path::new("/nonexistent/rates.json")).unwrap_err();
        assert!(matches!(err, BidError::RatesLoad { .. }));
    }

    #[test]
    fn test_apply_overrides_in_order() {
        let mut rates = RateTable::default();
        apply_overrides(
            &mut rates,
            vec![("hourly_wage", dec!(31)), ("hourly_wage", dec!(33))],
        )
        .unwrap();
        assert_eq!(rates.hourly_wage, dec!(33));
    }
}
