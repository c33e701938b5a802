use bidcalc_core::error::BidError;
use bidcalc_core::model::JobKind;

pub fn list() -> Result<(), BidError> {
    println!("Supported job types:\n");
    for kind in JobKind::ALL {
        println!("  {}", kind.name());
        println!("           {}", describe(kind));
        if !kind.option_keys().is_empty() {
            println!("           Options: {}", kind.option_keys().join(", "));
        }
        println!();
    }
    Ok(())
}

fn describe(kind: JobKind) -> &'static str {
    match kind {
        JobKind::SportsCourts => {
            "Court surfacing per sq ft, with optional concrete, lights, hoops and fence"
        }
        JobKind::EpoxyFlake => {
            "Quartz system (15 sq ft/worker-hour) or base coat + flake + topcoat (25 sq ft/worker-hour)"
        }
        JobKind::PolishedConcrete => {
            "Grinding, cutting agent, densifier and guard sealer (25 sq ft/worker-hour)"
        }
        JobKind::SealedConcrete => "Labor only (375 sq ft/worker-hour)",
        JobKind::UrethaneCement => "Urethane cement per sq ft (25 sq ft/worker-hour)",
    }
}
