use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::milestone::DevelopmentalDomain;

/// Outcome of structural validation of a raw observation collection.
///
/// `errors` are hard structural problems (the offending element was not
/// scored); `warnings` are soft issues that scoring can proceed past.
/// `valid` is true exactly when no hard errors were recorded.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub valid_observations: usize,
    /// Distinct domains touched by valid observations, in canonical order.
    pub domains_observed: Vec<DevelopmentalDomain>,
}
