use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The developmental domains a milestone can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DevelopmentalDomain {
    GrossMotor,
    FineMotor,
    Language,
    Social,
    Cognitive,
    Adaptive,
}

impl DevelopmentalDomain {
    /// All domains, in canonical order.
    pub const ALL: [DevelopmentalDomain; 6] = [
        DevelopmentalDomain::GrossMotor,
        DevelopmentalDomain::FineMotor,
        DevelopmentalDomain::Language,
        DevelopmentalDomain::Social,
        DevelopmentalDomain::Cognitive,
        DevelopmentalDomain::Adaptive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DevelopmentalDomain::GrossMotor => "gross_motor",
            DevelopmentalDomain::FineMotor => "fine_motor",
            DevelopmentalDomain::Language => "language",
            DevelopmentalDomain::Social => "social",
            DevelopmentalDomain::Cognitive => "cognitive",
            DevelopmentalDomain::Adaptive => "adaptive",
        }
    }
}

impl fmt::Display for DevelopmentalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DevelopmentalDomain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gross_motor" => Ok(DevelopmentalDomain::GrossMotor),
            "fine_motor" => Ok(DevelopmentalDomain::FineMotor),
            "language" => Ok(DevelopmentalDomain::Language),
            "social" => Ok(DevelopmentalDomain::Social),
            "cognitive" => Ok(DevelopmentalDomain::Cognitive),
            "adaptive" => Ok(DevelopmentalDomain::Adaptive),
            other => Err(CoreError::UnknownDomain(other.to_string())),
        }
    }
}

/// A single developmental milestone from the normative catalog.
/// Immutable reference data — the catalog owns these, assessments refer
/// to them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Milestone {
    pub domain: DevelopmentalDomain,
    pub description: String,
    /// Age at which a typically developing child achieves this milestone.
    pub typical_age_months: f64,
}
