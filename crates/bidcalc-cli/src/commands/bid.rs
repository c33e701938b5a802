use bidcalc_core::error::BidError;
use bidcalc_core::model::JobKind;
use bidcalc_core::request::schema::{JobOptionsDef, JobRequestDef};
use bidcalc_core::request::{build_request, load_request};

use crate::commands::effective_rates;
use crate::output;
use crate::BidArgs;

pub fn run(args: &BidArgs) -> Result<(), BidError> {
    let rates = effective_rates(&args.rates)?;

    let request = match &args.input {
        Some(path) => load_request(path)?,
        None => build_request(request_from_flags(args)?)?,
    };

    let breakdown = bidcalc_core::calculate_bid(&request, &rates)?;

    match args.output.as_str() {
        "json" => output::json::print(&breakdown, &rates)?,
        _ => output::table::print(&breakdown, args.verbose),
    }

    Ok(())
}

fn request_from_flags(args: &BidArgs) -> Result<JobRequestDef, BidError> {
    let job_type = args.job_type.as_deref().ok_or(BidError::InvalidInput {
        field: "job_type",
        reason: "--job-type or --input is required".into(),
    })?;
    let square_footage = args.area.ok_or(BidError::InvalidInput {
        field: "square_footage",
        reason: "--area is required".into(),
    })?;
    let kind: JobKind = job_type.parse()?;

    // Flags only land in the options bag when given, so a flag that does
    // not apply to the job type is reported instead of silently dropped.
    let mut options = JobOptionsDef {
        concrete: args.concrete.then_some(true),
        lights: args.lights.then_some(true),
        num_courts: args.num_courts,
        hoops: args.hoops.then_some(true),
        num_hoops: args.num_hoops,
        fence: args.fence.then_some(true),
        fence_length: args.fence_length,
        over_quartz: args.over_quartz.then_some(true),
        use_urethane_cement: args.urethane_cement.then_some(true),
        residential: args.residential.then_some(true),
    };
    if kind == JobKind::EpoxyFlake {
        options.over_quartz = Some(args.over_quartz);
    }

    Ok(JobRequestDef {
        job_type: kind.name().to_string(),
        square_footage,
        distance: args.distance,
        profit_margin: args.margin,
        num_workers: args.workers,
        options: (!options.is_empty()).then_some(options),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Commands};
    use bidcalc_core::model::{BaseCoat, EpoxyFlakeSystem, Job};
    use clap::Parser;

    fn bid_args(argv: &[&str]) -> BidArgs {
        let cli = Cli::try_parse_from(std::iter::once("bidcalc").chain(argv.iter().copied()))
            .unwrap();
        match cli.command {
            Commands::Bid(args) => args,
            _ => panic!("expected the bid subcommand"),
        }
    }

    #[test]
    fn test_epoxy_without_flags_is_flake_system() {
        let args = bid_args(&["bid", "--job-type", "epoxy-flake", "--area", "1000"]);
        let def = request_from_flags(&args).unwrap();
        assert_eq!(def.job_type, "Epoxy Flake");
        assert_eq!(
            def.options.as_ref().and_then(|o| o.over_quartz),
            Some(false)
        );

        let request = build_request(def).unwrap();
        assert_eq!(
            request.job,
            Job::EpoxyFlake(EpoxyFlakeSystem::OverFlake {
                base_coat: BaseCoat::VaporBarrier,
                residential: false,
            })
        );
    }

    #[test]
    fn test_epoxy_flags_carried_through() {
        let args = bid_args(&[
            "bid",
            "-j",
            "Epoxy Flake",
            "-a",
            "800",
            "--urethane-cement",
            "--residential",
        ]);
        let request = build_request(request_from_flags(&args).unwrap()).unwrap();
        assert_eq!(
            request.job,
            Job::EpoxyFlake(EpoxyFlakeSystem::OverFlake {
                base_coat: BaseCoat::UrethaneCement,
                residential: true,
            })
        );
    }

    #[test]
    fn test_flag_for_other_job_type_is_invalid_option() {
        let args = bid_args(&[
            "bid",
            "--job-type",
            "Sealed Concrete",
            "--area",
            "1000",
            "--concrete",
        ]);
        let err = build_request(request_from_flags(&args).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            BidError::InvalidOption {
                option: "concrete",
                ..
            }
        ));
    }

    #[test]
    fn test_quartz_flag_on_sports_courts_is_invalid_option() {
        let args = bid_args(&[
            "bid",
            "--job-type",
            "sports courts",
            "--area",
            "5000",
            "--over-quartz",
        ]);
        let err = build_request(request_from_flags(&args).unwrap()).unwrap_err();
        assert!(matches!(
            err,
            BidError::InvalidOption {
                option: "over_quartz",
                ..
            }
        ));
    }

    #[test]
    fn test_no_flags_means_no_options_bag() {
        let args = bid_args(&["bid", "--job-type", "Polished Concrete", "--area", "7500"]);
        let def = request_from_flags(&args).unwrap();
        assert!(def.options.is_none());
        assert_eq!(def.num_workers, 1);
    }

    #[test]
    fn test_amount_flags_accept_currency_formatting() {
        let args = bid_args(&[
            "bid",
            "--job-type",
            "Urethane Cement",
            "--area",
            "1,000",
            "--margin",
            "20%",
            "--workers",
            "2",
        ]);
        let def = request_from_flags(&args).unwrap();
        assert_eq!(def.square_footage, rust_decimal::Decimal::from(1000));
        assert_eq!(def.profit_margin, rust_decimal::Decimal::from(20));
    }

    #[test]
    fn test_unknown_job_type() {
        let args = bid_args(&["bid", "--job-type", "Roofing", "--area", "10"]);
        assert!(matches!(
            request_from_flags(&args),
            Err(BidError::InvalidJobType(_))
        ));
    }
}
