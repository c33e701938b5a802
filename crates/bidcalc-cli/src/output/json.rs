use bidcalc_core::bid::BidBreakdown;
use bidcalc_core::error::BidError;
use bidcalc_core::rates::RateTable;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Breakdown plus the rates that differ from the defaults, so a saved
/// JSON bid records what it was priced with.
#[derive(Serialize)]
struct BidReport<'a> {
    #[serde(flatten)]
    breakdown: &'a BidBreakdown,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    rate_overrides: BTreeMap<&'static str, Decimal>,
}

pub fn print(breakdown: &BidBreakdown, rates: &RateTable) -> Result<(), BidError> {
    println!("{}", render(breakdown, rates)?);
    Ok(())
}

fn render(breakdown: &BidBreakdown, rates: &RateTable) -> Result<String, BidError> {
    let report = BidReport {
        breakdown,
        rate_overrides: rate_overrides(rates),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn rate_overrides(rates: &RateTable) -> BTreeMap<&'static str, Decimal> {
    let defaults = RateTable::default();
    rates
        .entries()
        .into_iter()
        .filter(|(key, value)| defaults.get(key) != Some(*value))
        .collect()
}
