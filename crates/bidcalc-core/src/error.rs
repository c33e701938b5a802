use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BidError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("unknown job type '{0}'. Available: Sports Courts, Epoxy Flake, Polished Concrete, Sealed Concrete, Urethane Cement")]
    InvalidJobType(String),

    #[error("{job_type} requires option '{option}'")]
    MissingOption {
        job_type: &'static str,
        option: &'static str,
    },

    #[error("option '{option}' does not apply to {job_type}")]
    InvalidOption {
        job_type: &'static str,
        option: &'static str,
    },

    #[error("unknown rate '{0}'. Run `bidcalc rates list` to see all rate keys")]
    UnknownRate(String),

    #[error("invalid rate '{key}': {reason}")]
    InvalidRate { key: String, reason: String },

    #[error("failed to load rates from {path}: {reason}")]
    RatesLoad { path: PathBuf, reason: String },

    #[error("failed to load job request from {path}: {reason}")]
    RequestLoad { path: PathBuf, reason: String },

    #[error("failed to parse value: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
