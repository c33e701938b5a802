use crate::bid::breakdown::{AdditionalCost, BidBreakdown, MaterialLine};
use crate::error::BidError;
use crate::model::{BaseCoat, EpoxyFlakeSystem, Job, JobRequest, SportsCourtOptions};
use crate::rates::RateTable;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Square feet one worker finishes per hour, by job type.
const OVER_QUARTZ_SQFT_PER_HOUR: Decimal = dec!(15);
const STANDARD_SQFT_PER_HOUR: Decimal = dec!(25);
const SEALING_SQFT_PER_HOUR: Decimal = dec!(375);

/// Lodging days are labor days divided by this again.
const LODGING_DAY_DIVISOR: Decimal = dec!(8);

/// Cost components that depend on the job type.
#[derive(Default)]
struct JobCosts {
    material_lines: Vec<MaterialLine>,
    additional_costs: Vec<AdditionalCost>,
    labor_hours: Decimal,
}

/// Price a job against a rate table.
///
/// Validates the request and the rates first, so margins of 100% or more,
/// negative quantities and zero coverages are reported as errors instead
/// of producing infinite or negative figures. Figures that do not fit in a
/// `Decimal` are reported as `InvalidInput` on the field that drove them.
pub fn calculate_bid(request: &JobRequest, rates: &RateTable) -> Result<BidBreakdown, BidError> {
    request.validate()?;
    rates.validate()?;

    let area = request.square_footage;
    let workers = Decimal::from(request.num_workers);

    let travel_cost = mul(
        "distance",
        mul("distance", request.distance, rates.mileage_rate)?,
        dec!(2),
    )?;
    let lodging_cost = if request.distance > rates.lodging_distance_limit {
        let crew_hours = mul("num_workers", workers, rates.workday_hours)?;
        let lodging_days = div(
            "square_footage",
            div("square_footage", area, crew_hours)?,
            LODGING_DAY_DIVISOR,
        )?;
        mul("square_footage", lodging_days, rates.lodging_cost_per_day)?
    } else {
        Decimal::ZERO
    };

    let costs = match &request.job {
        Job::SportsCourts(options) => sports_courts(area, options, rates)?,
        Job::EpoxyFlake(system) => epoxy_flake(area, workers, *system, rates)?,
        Job::PolishedConcrete => polished_concrete(area, workers, rates)?,
        Job::SealedConcrete => JobCosts {
            labor_hours: labor_hours(area, workers, SEALING_SQFT_PER_HOUR)?,
            ..JobCosts::default()
        },
        Job::UrethaneCement => JobCosts {
            material_lines: vec![MaterialLine {
                label: "Urethane Cement".into(),
                amount: mul(
                    "square_footage",
                    area,
                    rates.urethane_cement_standalone_cost_per_sqft,
                )?,
                detail: format!(
                    "{} sq ft x {} per sq ft",
                    area, rates.urethane_cement_standalone_cost_per_sqft
                ),
            }],
            labor_hours: labor_hours(area, workers, STANDARD_SQFT_PER_HOUR)?,
            ..JobCosts::default()
        },
    };

    let material_cost = sum(costs.material_lines.iter().map(|l| l.amount))?;
    let labor_cost = mul(
        "square_footage",
        mul("square_footage", costs.labor_hours, rates.hourly_wage)?,
        workers,
    )?;
    let total_additional = sum(costs.additional_costs.iter().map(|c| c.amount))?;
    let total_cost = sum([
        material_cost,
        labor_cost,
        total_additional,
        travel_cost,
        lodging_cost,
    ])?;

    let kept_share = Decimal::ONE - request.profit_margin / Decimal::ONE_HUNDRED;
    let bid_price = div("profit_margin", total_cost, kept_share)?;
    let net_profit = bid_price - total_cost;
    // A zero bid only happens when there is nothing to price.
    let profit_margin_pct = if bid_price.is_zero() {
        Decimal::ZERO
    } else {
        (net_profit / bid_price * Decimal::ONE_HUNDRED).round_dp(2)
    };

    tracing::debug!(
        job_type = %request.job.kind(),
        %material_cost,
        %labor_cost,
        %travel_cost,
        %lodging_cost,
        %total_cost,
        %bid_price,
        "bid calculated"
    );

    Ok(BidBreakdown {
        job_type: request.job.kind(),
        material_cost,
        material_lines: costs.material_lines,
        labor_hours: costs.labor_hours,
        labor_cost,
        additional_costs: costs.additional_costs,
        travel_cost,
        lodging_cost,
        total_cost,
        net_profit,
        bid_price,
        profit_margin_pct,
    })
}

fn sports_courts(
    area: Decimal,
    options: &SportsCourtOptions,
    rates: &RateTable,
) -> Result<JobCosts, BidError> {
    let mut additional_costs = Vec::new();

    if options.concrete {
        additional_costs.push(AdditionalCost {
            label: "Concrete".into(),
            amount: mul(
                "square_footage",
                area,
                rates.sports_courts_concrete_cost_per_sqft,
            )?,
        });
    }
    if let Some(courts) = options.lighted_courts {
        additional_costs.push(AdditionalCost {
            label: "Lights".into(),
            amount: mul("num_courts", Decimal::from(courts), rates.light_cost_per_pair)?,
        });
    }
    if let Some(hoops) = options.hoops {
        additional_costs.push(AdditionalCost {
            label: (if hoops == 1 { "Hoop" } else { "Hoops" }).to_string(),
            amount: mul("num_hoops", Decimal::from(hoops), rates.hoop_cost_each)?,
        });
    }
    if let Some(length) = options.fence_length {
        additional_costs.push(AdditionalCost {
            label: "Fence".into(),
            amount: mul("fence_length", length, rates.fence_cost_per_foot)?,
        });
    }

    Ok(JobCosts {
        material_lines: vec![MaterialLine {
            label: "Court Surfacing".into(),
            amount: mul("square_footage", area, rates.sports_courts_base_cost_per_sqft)?,
            detail: format!(
                "{} sq ft x {} per sq ft",
                area, rates.sports_courts_base_cost_per_sqft
            ),
        }],
        additional_costs,
        labor_hours: Decimal::ZERO,
    })
}

fn epoxy_flake(
    area: Decimal,
    workers: Decimal,
    system: EpoxyFlakeSystem,
    rates: &RateTable,
) -> Result<JobCosts, BidError> {
    match system {
        EpoxyFlakeSystem::OverQuartz => Ok(JobCosts {
            material_lines: vec![coverage_line(
                "Quartz",
                area,
                rates.quartz_coverage,
                rates.quartz_cost_per_bag,
                "bag",
            )?],
            labor_hours: labor_hours(area, workers, OVER_QUARTZ_SQFT_PER_HOUR)?,
            ..JobCosts::default()
        }),
        EpoxyFlakeSystem::OverFlake {
            base_coat,
            residential,
        } => {
            let base = match base_coat {
                BaseCoat::UrethaneCement => coverage_line(
                    "Urethane Cement Base Coat",
                    area,
                    rates.urethane_cement_coverage,
                    rates.urethane_cement_cost_per_bag,
                    "bag",
                )?,
                BaseCoat::VaporBarrier => coverage_line(
                    "Vapor Barrier Base Coat",
                    area,
                    rates.epoxy_vapor_barrier_coverage,
                    rates.epoxy_vapor_barrier_cost_per_gal,
                    "gal",
                )?,
            };
            let flake = coverage_line(
                "Flake",
                area,
                rates.flake_coverage,
                rates.flake_cost_per_box,
                "box",
            )?;

            let (topcoat_label, cost_per_10gal) = if residential {
                ("Kinetic 85 EF Topcoat", rates.kinetic_85_ef_cost_per_10gal)
            } else {
                ("Kinetic 85 HS Topcoat", rates.kinetic_85_hs_cost_per_10gal)
            };
            let gallons = div("square_footage", area, rates.kinetic_85_coverage)?;
            let topcoat = MaterialLine {
                label: topcoat_label.into(),
                amount: mul("square_footage", gallons, cost_per_10gal / dec!(10))?,
                detail: format!(
                    "{} sq ft / {} sq ft per gal x {} per 10 gal",
                    area, rates.kinetic_85_coverage, cost_per_10gal
                ),
            };

            Ok(JobCosts {
                material_lines: vec![base, flake, topcoat],
                labor_hours: labor_hours(area, workers, STANDARD_SQFT_PER_HOUR)?,
                ..JobCosts::default()
            })
        }
    }
}

fn polished_concrete(
    area: Decimal,
    workers: Decimal,
    rates: &RateTable,
) -> Result<JobCosts, BidError> {
    Ok(JobCosts {
        material_lines: vec![
            coverage_line(
                "Grinding",
                area,
                rates.grinding_coverage_per_machine,
                rates.grinding_cost_per_machine,
                "machine",
            )?,
            coverage_line(
                "Cutting Agent",
                area,
                rates.cutting_agent_coverage,
                rates.cutting_agent_cost_per_5gal,
                "5 gal",
            )?,
            coverage_line(
                "Densifier",
                area,
                rates.densifier_coverage,
                rates.densifier_cost_per_5gal,
                "5 gal",
            )?,
            coverage_line(
                "Guard Sealer",
                area,
                rates.guard_sealer_coverage,
                rates.guard_sealer_cost_per_gal,
                "gal",
            )?,
        ],
        labor_hours: labor_hours(area, workers, STANDARD_SQFT_PER_HOUR)?,
        ..JobCosts::default()
    })
}

/// `(area / coverage) x price` for a material sold by the unit.
fn coverage_line(
    label: &str,
    area: Decimal,
    coverage: Decimal,
    price: Decimal,
    unit: &str,
) -> Result<MaterialLine, BidError> {
    let units = div("square_footage", area, coverage)?;
    Ok(MaterialLine {
        label: label.to_string(),
        amount: mul("square_footage", units, price)?,
        detail: format!(
            "{} sq ft / {} sq ft per {} x {} per {}",
            area, coverage, unit, price, unit
        ),
    })
}

fn labor_hours(
    area: Decimal,
    workers: Decimal,
    sqft_per_hour: Decimal,
) -> Result<Decimal, BidError> {
    let crew_rate = mul("num_workers", workers, sqft_per_hour)?;
    div("square_footage", area, crew_rate)
}

fn mul(field: &'static str, a: Decimal, b: Decimal) -> Result<Decimal, BidError> {
    a.checked_mul(b).ok_or_else(|| too_large(field))
}

fn div(field: &'static str, a: Decimal, b: Decimal) -> Result<Decimal, BidError> {
    a.checked_div(b).ok_or_else(|| too_large(field))
}

fn sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal, BidError> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| too_large("total_cost"))
}

fn too_large(field: &'static str) -> BidError {
    BidError::InvalidInput {
        field,
        reason: "value too large to price".into(),
    }
}
