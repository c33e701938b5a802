pub mod schema;

use crate::error::BidError;
use crate::model::{
    BaseCoat, EpoxyFlakeSystem, Job, JobKind, JobRequest, SportsCourtOptions,
};
use schema::{JobOptionsDef, JobRequestDef};
use std::path::Path;

/// Load a job request definition from a JSON file and build the request.
pub fn load_request(path: &Path) -> Result<JobRequest, BidError> {
    let content = std::fs::read_to_string(path).map_err(|e| BidError::RequestLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let def: JobRequestDef =
        serde_json::from_str(&content).map_err(|e| BidError::RequestLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    build_request(def)
}

/// Parse a job request from a JSON string (no file path context).
pub fn parse_request_str(json: &str) -> Result<JobRequest, BidError> {
    let def: JobRequestDef = serde_json::from_str(json)?;
    build_request(def)
}

/// Resolve the job type, default and check options, then validate the
/// resulting request.
///
/// A request returned from here is always priceable. `calculate_bid`
/// validates again because it also accepts requests built by hand.
pub fn build_request(def: JobRequestDef) -> Result<JobRequest, BidError> {
    let kind: JobKind = def.job_type.parse()?;
    let supplied = def.options.is_some();
    let options = def.options.unwrap_or_default();

    if let Some(foreign) = options
        .present_keys()
        .into_iter()
        .find(|key| !kind.option_keys().contains(key))
    {
        return Err(BidError::InvalidOption {
            job_type: kind.name(),
            option: foreign,
        });
    }

    let job = match kind {
        JobKind::SportsCourts => Job::SportsCourts(sports_court_options(&options)?),
        JobKind::EpoxyFlake => {
            Job::EpoxyFlake(epoxy_flake_system(supplied.then_some(&options))?)
        }
        JobKind::PolishedConcrete => Job::PolishedConcrete,
        JobKind::SealedConcrete => Job::SealedConcrete,
        JobKind::UrethaneCement => Job::UrethaneCement,
    };

    let request = JobRequest {
        job,
        square_footage: def.square_footage,
        distance: def.distance,
        profit_margin: def.profit_margin,
        num_workers: def.num_workers,
    };
    request.validate()?;
    Ok(request)
}

fn sports_court_options(options: &JobOptionsDef) -> Result<SportsCourtOptions, BidError> {
    let missing = |option| BidError::MissingOption {
        job_type: JobKind::SportsCourts.name(),
        option,
    };

    // Counts and lengths sent with their checkbox off are ignored.
    let lighted_courts = if options.lights.unwrap_or(false) {
        Some(options.num_courts.ok_or_else(|| missing("num_courts"))?)
    } else {
        None
    };

    let hoops = options
        .hoops
        .unwrap_or(false)
        .then(|| options.num_hoops.unwrap_or(1));

    let fence_length = if options.fence.unwrap_or(false) {
        Some(options.fence_length.ok_or_else(|| missing("fence_length"))?)
    } else {
        None
    };

    Ok(SportsCourtOptions {
        concrete: options.concrete.unwrap_or(false),
        lighted_courts,
        hoops,
        fence_length,
    })
}

/// Without an options bag the system cannot be chosen. Inside a bag an
/// unset `over_quartz` means the flake system.
fn epoxy_flake_system(options: Option<&JobOptionsDef>) -> Result<EpoxyFlakeSystem, BidError> {
    let options = options.ok_or(BidError::MissingOption {
        job_type: JobKind::EpoxyFlake.name(),
        option: "over_quartz",
    })?;

    if options.over_quartz.unwrap_or(false) {
        return Ok(EpoxyFlakeSystem::OverQuartz);
    }

    let base_coat = if options.use_urethane_cement.unwrap_or(false) {
        BaseCoat::UrethaneCement
    } else {
        BaseCoat::VaporBarrier
    };

    Ok(EpoxyFlakeSystem::OverFlake {
        base_coat,
        residential: options.residential.unwrap_or(false),
    })
}
