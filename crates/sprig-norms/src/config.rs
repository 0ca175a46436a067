use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use sprig_core::models::milestone::DevelopmentalDomain;

use crate::difficulty::{DomainDifficulty, ItemDifficultyModel};
use crate::error::NormsError;
use crate::reference::{NormPoint, ReferenceTable};

/// Current norms file version. Bump this when adding fields or changing
/// shape.
const CURRENT_VERSION: u32 = 1;

/// On-disk shape of a norms file. Raw and unvalidated — `load_norms` turns
/// it into a [`NormsBundle`] through the checked constructors.
#[derive(Debug, Deserialize)]
struct NormsFile {
    /// Missing or 0 = pre-versioned file.
    #[serde(default)]
    version: u32,
    reference: Vec<NormPoint>,
    #[serde(default)]
    difficulty: Option<DifficultySection>,
}

#[derive(Debug, Deserialize)]
struct DifficultySection {
    default_domain: DevelopmentalDomain,
    domains: HashMap<DevelopmentalDomain, DomainDifficulty>,
}

/// The validated normative configuration a process loads once at startup
/// and passes by reference into the scoring engine.
#[derive(Debug, Clone)]
pub struct NormsBundle {
    pub reference: ReferenceTable,
    pub difficulty: ItemDifficultyModel,
}

impl NormsBundle {
    /// The configuration shipped with Sprig, for callers without a custom
    /// norms file (e.g. per-country norms).
    pub fn bundled() -> Self {
        Self {
            reference: ReferenceTable::bundled().clone(),
            difficulty: ItemDifficultyModel::bundled().clone(),
        }
    }
}

/// Load and validate a norms file. A file without a difficulty section gets
/// the bundled difficulty model.
pub fn load_norms(path: &Path) -> Result<NormsBundle, NormsError> {
    let contents = std::fs::read_to_string(path)?;
    let file: NormsFile = serde_json::from_str(&contents)?;

    if file.version > CURRENT_VERSION {
        return Err(NormsError::UnsupportedVersion(file.version));
    }

    let reference = ReferenceTable::new(file.reference)?;
    let difficulty = match file.difficulty {
        Some(section) => ItemDifficultyModel::new(section.domains, section.default_domain)?,
        None => ItemDifficultyModel::bundled().clone(),
    };

    tracing::info!(
        path = %path.display(),
        points = reference.points().len(),
        "norms loaded"
    );

    Ok(NormsBundle {
        reference,
        difficulty,
    })
}
