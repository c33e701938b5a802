use crate::error::BidError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of job types the calculator can price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobKind {
    #[serde(rename = "Sports Courts")]
    SportsCourts,
    #[serde(rename = "Epoxy Flake")]
    EpoxyFlake,
    #[serde(rename = "Polished Concrete")]
    PolishedConcrete,
    #[serde(rename = "Sealed Concrete")]
    SealedConcrete,
    #[serde(rename = "Urethane Cement")]
    UrethaneCement,
}

impl JobKind {
    pub const ALL: [JobKind; 5] = [
        JobKind::SportsCourts,
        JobKind::EpoxyFlake,
        JobKind::PolishedConcrete,
        JobKind::SealedConcrete,
        JobKind::UrethaneCement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            JobKind::SportsCourts => "Sports Courts",
            JobKind::EpoxyFlake => "Epoxy Flake",
            JobKind::PolishedConcrete => "Polished Concrete",
            JobKind::SealedConcrete => "Sealed Concrete",
            JobKind::UrethaneCement => "Urethane Cement",
        }
    }

    /// Option keys this job type reads from a request's options bag.
    pub fn option_keys(&self) -> &'static [&'static str] {
        match self {
            JobKind::SportsCourts => &[
                "concrete",
                "lights",
                "num_courts",
                "hoops",
                "num_hoops",
                "fence",
                "fence_length",
            ],
            JobKind::EpoxyFlake => &["over_quartz", "use_urethane_cement", "residential"],
            JobKind::PolishedConcrete | JobKind::SealedConcrete | JobKind::UrethaneCement => &[],
        }
    }

    /// Match a job type name ignoring case and word separators
    /// ("Epoxy Flake", "epoxy-flake" and "epoxy_flake" are equivalent).
    pub fn from_str_loose(s: &str) -> Option<JobKind> {
        let wanted = squash(s);
        JobKind::ALL
            .into_iter()
            .find(|kind| squash(kind.name()) == wanted)
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for JobKind {
    type Err = BidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobKind::from_str_loose(s).ok_or_else(|| BidError::InvalidJobType(s.trim().to_string()))
    }
}

/// Add-ons for a sports court job. An add-on is selected when its
/// payload is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SportsCourtOptions {
    /// Pour a concrete slab under the whole court area.
    pub concrete: bool,
    /// Number of courts to light, one pair of lights per court.
    pub lighted_courts: Option<u32>,
    /// Number of basketball hoops.
    pub hoops: Option<u32>,
    /// Fence length in feet.
    pub fence_length: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseCoat {
    VaporBarrier,
    UrethaneCement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpoxyFlakeSystem {
    /// Broadcast quartz system.
    OverQuartz,
    /// Base coat, flake broadcast and a Kinetic 85 topcoat. Residential
    /// jobs use the EF topcoat, others the HS topcoat.
    OverFlake { base_coat: BaseCoat, residential: bool },
}

/// A job type together with the options that apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    SportsCourts(SportsCourtOptions),
    EpoxyFlake(EpoxyFlakeSystem),
    PolishedConcrete,
    SealedConcrete,
    UrethaneCement,
}

impl Job {
    pub fn kind(&self) -> JobKind {
        match self {
            Job::SportsCourts(_) => JobKind::SportsCourts,
            Job::EpoxyFlake(_) => JobKind::EpoxyFlake,
            Job::PolishedConcrete => JobKind::PolishedConcrete,
            Job::SealedConcrete => JobKind::SealedConcrete,
            Job::UrethaneCement => JobKind::UrethaneCement,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub job: Job,
    pub square_footage: Decimal,
    /// One-way distance to the job site in miles.
    pub distance: Decimal,
    /// Desired profit as a percentage of the bid price.
    pub profit_margin: Decimal,
    pub num_workers: u32,
}

impl JobRequest {
    /// Reject values the calculator cannot price.
    pub fn validate(&self) -> Result<(), BidError> {
        if self.square_footage < Decimal::ZERO {
            return Err(invalid("square_footage", "must not be negative"));
        }
        if self.distance < Decimal::ZERO {
            return Err(invalid("distance", "must not be negative"));
        }
        if self.profit_margin < Decimal::ZERO {
            return Err(invalid("profit_margin", "must not be negative"));
        }
        if self.profit_margin >= Decimal::ONE_HUNDRED {
            return Err(invalid("profit_margin", "must be less than 100"));
        }
        if self.num_workers == 0 {
            return Err(invalid("num_workers", "at least one worker is required"));
        }
        if let Job::SportsCourts(options) = &self.job {
            if options.fence_length.is_some_and(|len| len < Decimal::ZERO) {
                return Err(invalid("fence_length", "must not be negative"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> BidError {
    BidError::InvalidInput {
        field,
        reason: reason.to_string(),
    }
}
