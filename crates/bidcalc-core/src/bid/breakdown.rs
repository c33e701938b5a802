use crate::model::JobKind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One itemized component of the material cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub label: String,
    pub amount: Decimal,
    /// How the amount was derived, e.g. "1000 sq ft / 80 sq ft per bag x 24 per bag".
    pub detail: String,
}

/// A job-specific add-on priced on top of the base material cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalCost {
    pub label: String,
    pub amount: Decimal,
}

/// Full cost and price breakdown for one job.
///
/// Values keep full precision except `profit_margin_pct`, which is
/// rounded to two decimals. Use [`round_money`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidBreakdown {
    pub job_type: JobKind,
    pub material_cost: Decimal,
    /// Lines summing to `material_cost`, in evaluation order.
    pub material_lines: Vec<MaterialLine>,
    pub labor_hours: Decimal,
    pub labor_cost: Decimal,
    /// Add-ons in evaluation order.
    pub additional_costs: Vec<AdditionalCost>,
    pub travel_cost: Decimal,
    pub lodging_cost: Decimal,
    pub total_cost: Decimal,
    pub net_profit: Decimal,
    pub bid_price: Decimal,
    /// Realized margin: net profit as a percentage of the bid price.
    pub profit_margin_pct: Decimal,
}

impl BidBreakdown {
    pub fn total_additional_costs(&self) -> Decimal {
        self.additional_costs.iter().map(|c| c.amount).sum()
    }

    /// Look up an add-on by label.
    pub fn additional_cost(&self, label: &str) -> Option<Decimal> {
        self.additional_costs
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.amount)
    }
}

/// Round to cents, half to even.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp(2)
}
