use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::milestone::Milestone;

/// One achieved/not-achieved determination for a milestone, recorded during
/// an assessment. `achieved: None` means the observer recorded the item but
/// made no determination; the scorer skips such observations and the
/// validator flags them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Observation {
    pub milestone: Milestone,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub achieved: Option<bool>,
}
