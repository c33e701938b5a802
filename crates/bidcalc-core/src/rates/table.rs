use crate::error::BidError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Named cost and coverage constants used by the bid calculator.
///
/// Costs are in dollars per unit, coverages in square feet per unit.
/// `workday_hours` is hours per worker per day and `lodging_distance_limit`
/// is the one-way distance in miles beyond which the crew is lodged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateTable {
    pub sports_courts_base_cost_per_sqft: Decimal,
    pub sports_courts_concrete_cost_per_sqft: Decimal,
    pub light_cost_per_pair: Decimal,
    pub hoop_cost_each: Decimal,
    pub fence_cost_per_foot: Decimal,
    pub epoxy_vapor_barrier_cost_per_gal: Decimal,
    pub epoxy_vapor_barrier_coverage: Decimal,
    pub flake_cost_per_box: Decimal,
    pub flake_coverage: Decimal,
    pub kinetic_85_ef_cost_per_10gal: Decimal,
    pub kinetic_85_hs_cost_per_10gal: Decimal,
    pub kinetic_85_coverage: Decimal,
    pub pigment_cost_per_gal: Decimal,
    pub pigment_coverage: Decimal,
    pub quartz_cost_per_bag: Decimal,
    pub quartz_coverage: Decimal,
    pub urethane_cement_cost_per_bag: Decimal,
    pub urethane_cement_coverage: Decimal,
    pub urethane_cement_standalone_cost_per_sqft: Decimal,
    pub grinding_cost_per_machine: Decimal,
    pub grinding_coverage_per_machine: Decimal,
    pub cutting_agent_cost_per_5gal: Decimal,
    pub cutting_agent_coverage: Decimal,
    pub densifier_cost_per_5gal: Decimal,
    pub densifier_coverage: Decimal,
    pub guard_sealer_cost_per_gal: Decimal,
    pub guard_sealer_coverage: Decimal,
    pub hourly_wage: Decimal,
    pub mileage_rate: Decimal,
    pub lodging_cost_per_day: Decimal,
    pub workday_hours: Decimal,
    pub lodging_distance_limit: Decimal,
}

/// Rates used as divisors. These must be strictly positive.
const DIVISOR_KEYS: &[&str] = &[
    "epoxy_vapor_barrier_coverage",
    "flake_coverage",
    "kinetic_85_coverage",
    "pigment_coverage",
    "quartz_coverage",
    "urethane_cement_coverage",
    "grinding_coverage_per_machine",
    "cutting_agent_coverage",
    "densifier_coverage",
    "guard_sealer_coverage",
    "workday_hours",
];

impl Default for RateTable {
    fn default() -> Self {
        Self {
            sports_courts_base_cost_per_sqft: dec!(3.03),
            sports_courts_concrete_cost_per_sqft: dec!(6.25),
            light_cost_per_pair: dec!(3000),
            hoop_cost_each: dec!(2300),
            fence_cost_per_foot: dec!(7),
            epoxy_vapor_barrier_cost_per_gal: dec!(86),
            epoxy_vapor_barrier_coverage: dec!(140),
            flake_cost_per_box: dec!(105),
            flake_coverage: dec!(350),
            kinetic_85_ef_cost_per_10gal: dec!(850),
            kinetic_85_hs_cost_per_10gal: dec!(1000),
            kinetic_85_coverage: dec!(120),
            pigment_cost_per_gal: dec!(38),
            pigment_coverage: dec!(140),
            quartz_cost_per_bag: dec!(24),
            quartz_coverage: dec!(80),
            urethane_cement_cost_per_bag: dec!(45),
            urethane_cement_coverage: dec!(100),
            urethane_cement_standalone_cost_per_sqft: dec!(6.0),
            grinding_cost_per_machine: dec!(1510),
            grinding_coverage_per_machine: dec!(7500),
            cutting_agent_cost_per_5gal: dec!(300),
            cutting_agent_coverage: dec!(500),
            densifier_cost_per_5gal: dec!(100),
            densifier_coverage: dec!(500),
            guard_sealer_cost_per_gal: dec!(600),
            guard_sealer_coverage: dec!(2500),
            hourly_wage: dec!(30),
            mileage_rate: dec!(0.68),
            lodging_cost_per_day: dec!(250),
            workday_hours: dec!(8),
            lodging_distance_limit: dec!(100),
        }
    }
}

impl RateTable {
    /// All rates as `(key, value)` pairs, in editor order.
    pub fn entries(&self) -> Vec<(&'static str, Decimal)> {
        vec![
            ("sports_courts_base_cost_per_sqft", self.sports_courts_base_cost_per_sqft),
            (
                "sports_courts_concrete_cost_per_sqft",
                self.sports_courts_concrete_cost_per_sqft,
            ),
            ("light_cost_per_pair", self.light_cost_per_pair),
            ("hoop_cost_each", self.hoop_cost_each),
            ("fence_cost_per_foot", self.fence_cost_per_foot),
            ("epoxy_vapor_barrier_cost_per_gal", self.epoxy_vapor_barrier_cost_per_gal),
            ("epoxy_vapor_barrier_coverage", self.epoxy_vapor_barrier_coverage),
            ("flake_cost_per_box", self.flake_cost_per_box),
            ("flake_coverage", self.flake_coverage),
            ("kinetic_85_ef_cost_per_10gal", self.kinetic_85_ef_cost_per_10gal),
            ("kinetic_85_hs_cost_per_10gal", self.kinetic_85_hs_cost_per_10gal),
            ("kinetic_85_coverage", self.kinetic_85_coverage),
            ("pigment_cost_per_gal", self.pigment_cost_per_gal),
            ("pigment_coverage", self.pigment_coverage),
            ("quartz_cost_per_bag", self.quartz_cost_per_bag),
            ("quartz_coverage", self.quartz_coverage),
            ("urethane_cement_cost_per_bag", self.urethane_cement_cost_per_bag),
            ("urethane_cement_coverage", self.urethane_cement_coverage),
            (
                "urethane_cement_standalone_cost_per_sqft",
                self.urethane_cement_standalone_cost_per_sqft,
            ),
            ("grinding_cost_per_machine", self.grinding_cost_per_machine),
            ("grinding_coverage_per_machine", self.grinding_coverage_per_machine),
            ("cutting_agent_cost_per_5gal", self.cutting_agent_cost_per_5gal),
            ("cutting_agent_coverage", self.cutting_agent_coverage),
            ("densifier_cost_per_5gal", self.densifier_cost_per_5gal),
            ("densifier_coverage", self.densifier_coverage),
            ("guard_sealer_cost_per_gal", self.guard_sealer_cost_per_gal),
            ("guard_sealer_coverage", self.guard_sealer_coverage),
            ("hourly_wage", self.hourly_wage),
            ("mileage_rate", self.mileage_rate),
            ("lodging_cost_per_day", self.lodging_cost_per_day),
            ("workday_hours", self.workday_hours),
            ("lodging_distance_limit", self.lodging_distance_limit),
        ]
    }

    /// Look up a rate by key.
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Replace a single rate, rejecting unknown keys and out-of-range values.
    pub fn set(&mut self, key: &str, value: Decimal) -> Result<(), BidError> {
        check_rate(key, value)?;
        let slot = self
            .slot_mut(key)
            .ok_or_else(|| BidError::UnknownRate(key.to_string()))?;
        *slot = value;
        Ok(())
    }

    /// Check every rate against its allowed range.
    pub fn validate(&self) -> Result<(), BidError> {
        for (key, value) in self.entries() {
            check_rate(key, value)?;
        }
        Ok(())
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Decimal> {
        let slot = match key {
            "sports_courts_base_cost_per_sqft" => &mut self.sports_courts_base_cost_per_sqft,
            "sports_courts_concrete_cost_per_sqft" => {
                &mut self.sports_courts_concrete_cost_per_sqft
            }
            "light_cost_per_pair" => &mut self.light_cost_per_pair,
            "hoop_cost_each" => &mut self.hoop_cost_each,
            "fence_cost_per_foot" => &mut self.fence_cost_per_foot,
            "epoxy_vapor_barrier_cost_per_gal" => &mut self.epoxy_vapor_barrier_cost_per_gal,
            "epoxy_vapor_barrier_coverage" => &mut self.epoxy_vapor_barrier_coverage,
            "flake_cost_per_box" => &mut self.flake_cost_per_box,
            "flake_coverage" => &mut self.flake_coverage,
            "kinetic_85_ef_cost_per_10gal" => &mut self.kinetic_85_ef_cost_per_10gal,
            "kinetic_85_hs_cost_per_10gal" => &mut self.kinetic_85_hs_cost_per_10gal,
            "kinetic_85_coverage" => &mut self.kinetic_85_coverage,
            "pigment_cost_per_gal" => &mut self.pigment_cost_per_gal,
            "pigment_coverage" => &mut self.pigment_coverage,
            "quartz_cost_per_bag" => &mut self.quartz_cost_per_bag,
            "quartz_coverage" => &mut self.quartz_coverage,
            "urethane_cement_cost_per_bag" => &mut self.urethane_cement_cost_per_bag,
            "urethane_cement_coverage" => &mut self.urethane_cement_coverage,
            "urethane_cement_standalone_cost_per_sqft" => {
                &mut self.urethane_cement_standalone_cost_per_sqft
            }
            "grinding_cost_per_machine" => &mut self.grinding_cost_per_machine,
            "grinding_coverage_per_machine" => &mut self.grinding_coverage_per_machine,
            "cutting_agent_cost_per_5gal" => &mut self.cutting_agent_cost_per_5gal,
            "cutting_agent_coverage" => &mut self.cutting_agent_coverage,
            "densifier_cost_per_5gal" => &mut self.densifier_cost_per_5gal,
            "densifier_coverage" => &mut self.densifier_coverage,
            "guard_sealer_cost_per_gal" => &mut self.guard_sealer_cost_per_gal,
            "guard_sealer_coverage" => &mut self.guard_sealer_coverage,
            "hourly_wage" => &mut self.hourly_wage,
            "mileage_rate" => &mut self.mileage_rate,
            "lodging_cost_per_day" => &mut self.lodging_cost_per_day,
            "workday_hours" => &mut self.workday_hours,
            "lodging_distance_limit" => &mut self.lodging_distance_limit,
            _ => return None,
        };
        Some(slot)
    }
}

fn check_rate(key: &str, value: Decimal) -> Result<(), BidError> {
    if value < Decimal::ZERO {
        return Err(BidError::InvalidRate {
            key: key.to_string(),
            reason: format!("{} is negative", value),
        });
    }
    if value.is_zero() && DIVISOR_KEYS.contains(&key) {
        return Err(BidError::InvalidRate {
            key: key.to_string(),
            reason: "must be greater than zero".into(),
        });
    }
    Ok(())
}

/// Human-readable label for a rate key, e.g. `hourly_wage` -> "Hourly Wage".
pub fn rate_label(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
