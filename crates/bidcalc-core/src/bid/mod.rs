pub mod breakdown;
pub mod engine;

pub use breakdown::{round_money, AdditionalCost, BidBreakdown, MaterialLine};
pub use engine::calculate_bid;
