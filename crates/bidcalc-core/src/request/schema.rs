use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A job request as submitted by a form, file or API caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobRequestDef {
    pub job_type: String,
    pub square_footage: Decimal,
    pub distance: Decimal,
    pub profit_margin: Decimal,
    pub num_workers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<JobOptionsDef>,
}

/// Flat options bag. Which fields apply depends on the job type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobOptionsDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concrete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lights: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_courts: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoops: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_hoops: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fence: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fence_length: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_quartz: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_urethane_cement: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residential: Option<bool>,
}

impl JobOptionsDef {
    pub fn is_empty(&self) -> bool {
        *self == JobOptionsDef::default()
    }

    /// Names of the options that carry a value, in declaration order.
    pub fn present_keys(&self) -> Vec<&'static str> {
        let flags = [
            ("concrete", self.concrete.is_some()),
            ("lights", self.lights.is_some()),
            ("num_courts", self.num_courts.is_some()),
            ("hoops", self.hoops.is_some()),
            ("num_hoops", self.num_hoops.is_some()),
            ("fence", self.fence.is_some()),
            ("fence_length", self.fence_length.is_some()),
            ("over_quartz", self.over_quartz.is_some()),
            ("use_urethane_cement", self.use_urethane_cement.is_some()),
            ("residential", self.residential.is_some()),
        ];
        flags
            .into_iter()
            .filter(|(_, present)| *present)
            .map(|(key, _)| key)
            .collect()
    }
}
