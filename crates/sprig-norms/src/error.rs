use thiserror::Error;

use sprig_core::models::milestone::DevelopmentalDomain;

#[derive(Debug, Error)]
pub enum NormsError {
    #[error("reference table must contain at least one point")]
    EmptyTable,

    #[error("reference table value at age {age_months} is not finite")]
    NonFiniteValue { age_months: f64 },

    #[error("duplicate reference age: {age_months} months")]
    DuplicateAge { age_months: f64 },

    #[error("expected score decreases at age {age_months} months")]
    DecreasingScore { age_months: f64 },

    #[error("expected SD at age {age_months} months must be strictly positive")]
    NonPositiveSd { age_months: f64 },

    #[error("difficulty model has no entry for its default domain {0}")]
    MissingDefaultDomain(DevelopmentalDomain),

    #[error("norms file version {0} is newer than this build supports")]
    UnsupportedVersion(u32),

    #[error("failed to read norms file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse norms file: {0}")]
    Parse(#[from] serde_json::Error),
}
