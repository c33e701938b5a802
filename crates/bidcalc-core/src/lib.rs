pub mod bid;
pub mod error;
pub mod model;
pub mod parsing;
pub mod rates;
pub mod request;

use bid::BidBreakdown;
use error::BidError;
use rates::RateTable;
use request::schema::JobRequestDef;

pub use bid::calculate_bid;

/// Main API entry point for hosts that collect loose form input:
/// build a typed request from the definition and price it.
pub fn estimate(def: JobRequestDef, rates: &RateTable) -> Result<BidBreakdown, BidError> {
    let request = request::build_request(def)?;
    calculate_bid(&request, rates)
}
