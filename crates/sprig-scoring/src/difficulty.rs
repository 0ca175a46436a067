use sprig_core::models::milestone::Milestone;
use sprig_norms::ItemDifficultyModel;

const MIN_DIFFICULTY: f64 = 15.0;
const MAX_DIFFICULTY: f64 = 85.0;

/// Estimate how hard a milestone is to achieve, on the same scale as the
/// developmental score.
///
/// `base(domain) + per_month(domain) * typical_age`, refined by the first
/// lexicon keyword found in the description (case-insensitive substring,
/// scanned in configured order), then clamped to the plausible range.
pub fn estimate_difficulty(milestone: &Milestone, model: &ItemDifficultyModel) -> f64 {
    let params = model.params_for(milestone.domain);
    let mut difficulty = params.base + params.per_month * milestone.typical_age_months;

    let description = milestone.description.to_lowercase();
    if let Some(entry) = params
        .keywords
        .iter()
        .find(|entry| description.contains(&entry.keyword.to_lowercase()))
    {
        difficulty += entry.adjustment;
    }

    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}
