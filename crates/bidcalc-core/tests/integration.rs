//! End-to-end tests for request building and bid calculation across all
//! job types, using the default rate table.

use bidcalc_core::bid::round_money;
use bidcalc_core::calculate_bid;
use bidcalc_core::error::BidError;
use bidcalc_core::estimate;
use bidcalc_core::model::{BaseCoat, EpoxyFlakeSystem, Job, JobRequest, SportsCourtOptions};
use bidcalc_core::rates::{parse_rates_str, RateTable};
use bidcalc_core::request::parse_request_str;
use bidcalc_core::request::schema::{JobOptionsDef, JobRequestDef};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn all_jobs() -> Vec<Job> {
    vec![
        Job::SportsCourts(SportsCourtOptions::default()),
        Job::SportsCourts(SportsCourtOptions {
            concrete: true,
            lighted_courts: Some(1),
            hoops: Some(2),
            fence_length: Some(dec!(240)),
        }),
        Job::EpoxyFlake(EpoxyFlakeSystem::OverQuartz),
        Job::EpoxyFlake(EpoxyFlakeSystem::OverFlake {
            base_coat: BaseCoat::VaporBarrier,
            residential: false,
        }),
        Job::EpoxyFlake(EpoxyFlakeSystem::OverFlake {
            base_coat: BaseCoat::UrethaneCement,
            residential: true,
        }),
        Job::PolishedConcrete,
        Job::SealedConcrete,
        Job::UrethaneCement,
    ]
}

fn def(job_type: &str, area: Decimal, options: Option<JobOptionsDef>) -> JobRequestDef {
    JobRequestDef {
        job_type: job_type.into(),
        square_footage: area,
        distance: dec!(0),
        profit_margin: dec!(0),
        num_workers: 1,
        options,
    }
}

// ---------------------------------------------------------------------------
// Aggregation properties
// ---------------------------------------------------------------------------
#[test]
fn total_cost_is_sum_of_components() {
    let rates = RateTable::default();
    for job in all_jobs() {
        for distance in [dec!(0), dec!(100), dec!(180.5)] {
            let req = JobRequest {
                job: job.clone(),
                square_footage: dec!(2750),
                distance,
                profit_margin: dec!(25),
                num_workers: 3,
            };
            let bid = calculate_bid(&req, &rates).unwrap();
            let expected = bid.material_cost
                + bid.labor_cost
                + bid.total_additional_costs()
                + bid.travel_cost
                + bid.lodging_cost;
            assert_eq!(bid.total_cost, expected, "{:?}", job);

            let lines: Decimal = bid.material_lines.iter().map(|l| l.amount).sum();
            assert_eq!(bid.material_cost, lines, "{:?}", job);
        }
    }
}

#[test]
fn bid_price_recovers_total_cost() {
    let rates = RateTable::default();
    for job in all_jobs() {
        for margin in [dec!(0), dec!(12.5), dec!(20), dec!(33.33), dec!(99)] {
            let req = JobRequest {
                job: job.clone(),
                square_footage: dec!(1830),
                distance: dec!(42),
                profit_margin: margin,
                num_workers: 2,
            };
            let bid = calculate_bid(&req, &rates).unwrap();
            let recovered = bid.bid_price * (Decimal::ONE - margin / dec!(100));
            assert!(
                (recovered - bid.total_cost).abs() < dec!(0.000001),
                "{:?} at {}%",
                job,
                margin
            );
            assert_eq!(bid.net_profit, bid.bid_price - bid.total_cost);
            assert!(
                (bid.profit_margin_pct - margin).abs() <= dec!(0.01),
                "{:?}: realized {} vs {}",
                job,
                bid.profit_margin_pct,
                margin
            );
        }
    }
}

#[test]
fn lodging_only_beyond_distance_limit() {
    let rates = RateTable::default();
    for job in all_jobs() {
        let near = JobRequest {
            job: job.clone(),
            square_footage: dec!(900),
            distance: dec!(100),
            profit_margin: dec!(10),
            num_workers: 2,
        };
        let far = JobRequest {
            distance: dec!(100.1),
            ..near.clone()
        };
        assert_eq!(
            calculate_bid(&near, &rates).unwrap().lodging_cost,
            Decimal::ZERO
        );
        assert!(calculate_bid(&far, &rates).unwrap().lodging_cost > Decimal::ZERO);
    }
}

#[test]
fn lodging_limit_follows_rate_table() {
    let rates = parse_rates_str(r#"{ "lodging_distance_limit": "50" }"#).unwrap();
    let req = JobRequest {
        job: Job::SealedConcrete,
        square_footage: dec!(1600),
        distance: dec!(60),
        profit_margin: dec!(0),
        num_workers: 1,
    };
    let bid = calculate_bid(&req, &rates).unwrap();
    // (1600 / 8) / 8 = 25 days
    assert_eq!(bid.lodging_cost, dec!(6250));
}

// ---------------------------------------------------------------------------
// Worked examples through the loose request path
// ---------------------------------------------------------------------------
#[test]
fn urethane_cement_example_from_json() {
    let req = parse_request_str(
        r#"{
            "job_type": "Urethane Cement",
            "square_footage": 1000,
            "distance": 50,
            "profit_margin": 20,
            "num_workers": 2
        }"#,
    )
    .unwrap();
    let bid = calculate_bid(&req, &RateTable::default()).unwrap();
    assert_eq!(bid.total_cost, dec!(7268));
    assert_eq!(round_money(bid.bid_price), dec!(9085.00));
    assert_eq!(round_money(bid.net_profit), dec!(1817.00));
    assert_eq!(bid.profit_margin_pct, dec!(20.00));
}

#[test]
fn sports_courts_hoops_example_via_estimate() {
    let options = JobOptionsDef {
        hoops: Some(true),
        num_hoops: Some(2),
        ..Default::default()
    };
    let bid = estimate(
        def("Sports Courts", dec!(5000), Some(options)),
        &RateTable::default(),
    )
    .unwrap();
    assert_eq!(bid.material_cost, dec!(15150));
    assert_eq!(bid.additional_cost("Hoops"), Some(dec!(4600)));
    assert_eq!(bid.total_cost, dec!(19750));
    assert_eq!(bid.bid_price, dec!(19750));
    assert_eq!(bid.net_profit, Decimal::ZERO);
    assert_eq!(bid.profit_margin_pct, Decimal::ZERO);
}

#[test]
fn sports_courts_empty_options_uses_base_rate() {
    let bid = estimate(
        def("Sports Courts", dec!(1234), Some(JobOptionsDef::default())),
        &RateTable::default(),
    )
    .unwrap();
    assert!(bid.additional_costs.is_empty());
    assert_eq!(bid.material_cost, dec!(1234) * dec!(3.03));
}

#[test]
fn form_style_sports_submission() {
    // The form always submits every sports field, checked or not.
    let options = JobOptionsDef {
        concrete: Some(false),
        lights: Some(true),
        hoops: Some(false),
        fence: Some(false),
        fence_length: Some(dec!(0)),
        num_courts: Some(2),
        ..Default::default()
    };
    let bid = estimate(
        def("Sports Courts", dec!(7200), Some(options)),
        &RateTable::default(),
    )
    .unwrap();
    assert_eq!(bid.additional_costs.len(), 1);
    assert_eq!(bid.additional_cost("Lights"), Some(dec!(6000)));
}

// ---------------------------------------------------------------------------
// Error paths
// ---------------------------------------------------------------------------
#[test]
fn margin_at_or_above_100_is_invalid_input() {
    for margin in [dec!(100), dec!(150)] {
        let mut d = def("Urethane Cement", dec!(1000), None);
        d.profit_margin = margin;
        assert!(matches!(
            estimate(d, &RateTable::default()),
            Err(BidError::InvalidInput {
                field: "profit_margin",
                ..
            })
        ));
    }
}

#[test]
fn negative_inputs_are_invalid() {
    let mut d = def("Sealed Concrete", dec!(-1), None);
    assert!(estimate(d.clone(), &RateTable::default()).is_err());

    d.square_footage = dec!(10);
    d.distance = dec!(-3);
    assert!(estimate(d.clone(), &RateTable::default()).is_err());

    d.distance = dec!(3);
    d.num_workers = 0;
    assert!(matches!(
        estimate(d, &RateTable::default()),
        Err(BidError::InvalidInput {
            field: "num_workers",
            ..
        })
    ));
}

#[test]
fn unknown_job_type_is_rejected() {
    assert!(matches!(
        estimate(def("Roofing", dec!(1000), None), &RateTable::default()),
        Err(BidError::InvalidJobType(_))
    ));
}

#[test]
fn epoxy_without_options_reports_missing_option() {
    let err = estimate(def("Epoxy Flake", dec!(1000), None), &RateTable::default()).unwrap_err();
    assert!(matches!(err, BidError::MissingOption { .. }));
    assert!(err.to_string().contains("over_quartz"));
}

#[test]
fn calculation_does_not_mutate_rates() {
    let rates = RateTable::default();
    let snapshot = rates.clone();
    for job in all_jobs() {
        let req = JobRequest {
            job,
            square_footage: dec!(500),
            distance: dec!(120),
            profit_margin: dec!(30),
            num_workers: 2,
        };
        calculate_bid(&req, &rates).unwrap();
    }
    assert_eq!(rates, snapshot);
}
