//! sprig-core
//!
//! Pure domain types for developmental milestone tracking: milestones,
//! observations, assessments, and the result shapes produced by the scoring
//! engine. No I/O — this is the shared vocabulary of the Sprig system.

pub mod error;
pub mod models;
