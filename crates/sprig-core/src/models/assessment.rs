use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::observation::Observation;

/// One scoring session for a child: chronological age plus the observations
/// recorded at that age. The unit of input to the score calculator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    /// Chronological age in months; fractional ages are allowed.
    pub age_months: f64,
    pub observations: Vec<Observation>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date_administered: Option<jiff::civil::Date>,
}

impl Assessment {
    pub fn new(age_months: f64, observations: Vec<Observation>) -> Self {
        Self {
            id: Uuid::new_v4(),
            age_months,
            observations,
            date_administered: None,
        }
    }

    pub fn with_date(mut self, date: jiff::civil::Date) -> Self {
        self.date_administered = Some(date);
        self
    }
}
