pub mod bid;
pub mod jobs;
pub mod rates;

use crate::RateArgs;
use bidcalc_core::error::BidError;
use bidcalc_core::rates::{apply_overrides, load_rates, RateTable};

/// Build the effective rate table: defaults, then the rate file, then
/// `--set` overrides.
pub fn effective_rates(args: &RateArgs) -> Result<RateTable, BidError> {
    let mut table = match &args.file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading rate file");
            load_rates(path)?
        }
        None => RateTable::default(),
    };
    apply_overrides(
        &mut table,
        args.overrides.iter().map(|(k, v)| (k.as_str(), *v)),
    )?;
    Ok(table)
}
