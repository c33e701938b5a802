use bidcalc_core::error::BidError;
use bidcalc_core::rates::{self, rate_label, RateTable};
use std::path::Path;

use crate::commands::effective_rates;
use crate::RateArgs;

pub fn list(args: &RateArgs, output_format: &str) -> Result<(), BidError> {
    let table = effective_rates(args)?;

    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    let defaults = RateTable::default();
    let entries = table.entries();
    let max_label = entries
        .iter()
        .map(|(key, _)| rate_label(key).len())
        .max()
        .unwrap_or(20);

    println!("Rates:\n");
    for (key, value) in entries {
        let marker = if defaults.get(key) == Some(value) {
            ""
        } else {
            " *"
        };
        println!(
            "  {:<width$}  {:>10}{}  ({})",
            rate_label(key),
            value,
            marker,
            key,
            width = max_label
        );
    }
    println!("\n  * differs from default");

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), BidError> {
    let table = rates::load_rates(file)?;
    let defaults = RateTable::default();

    println!("Rate file '{}' is valid.", file.display());

    let changed: Vec<(&str, rust_decimal::Decimal)> = table
        .entries()
        .into_iter()
        .filter(|(key, value)| defaults.get(key) != Some(*value))
        .collect();

    if changed.is_empty() {
        println!("  No rates differ from the defaults.");
    } else {
        println!("  Overrides:");
        for (key, value) in changed {
            let default = defaults.get(key).unwrap_or_default();
            println!("    {}: {} -> {}", key, default, value);
        }
    }

    Ok(())
}
