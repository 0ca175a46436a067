use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sprig_core::models::milestone::DevelopmentalDomain;

use crate::error::NormsError;

/// A lexicon entry: milestones whose description contains `keyword` get
/// `adjustment` added to their estimated difficulty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAdjustment {
    pub keyword: String,
    pub adjustment: f64,
}

/// Difficulty parameters for one developmental domain. The keyword list is
/// ordered; the estimator scans it top to bottom and the first
/// case-insensitive substring match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainDifficulty {
    pub base: f64,
    pub per_month: f64,
    #[serde(default)]
    pub keywords: Vec<KeywordAdjustment>,
}

/// Per-domain item-difficulty configuration. Immutable after construction;
/// domains without an entry fall back to the default domain's parameters.
#[derive(Debug, Clone)]
pub struct ItemDifficultyModel {
    domains: HashMap<DevelopmentalDomain, DomainDifficulty>,
    default_domain: DevelopmentalDomain,
}

impl ItemDifficultyModel {
    pub fn new(
        domains: HashMap<DevelopmentalDomain, DomainDifficulty>,
        default_domain: DevelopmentalDomain,
    ) -> Result<Self, NormsError> {
        if !domains.contains_key(&default_domain) {
            return Err(NormsError::MissingDefaultDomain(default_domain));
        }
        Ok(Self {
            domains,
            default_domain,
        })
    }

    /// Parameters for a domain, or the default domain's parameters when the
    /// domain has no entry of its own.
    pub fn params_for(&self, domain: DevelopmentalDomain) -> &DomainDifficulty {
        self.domains
            .get(&domain)
            .unwrap_or_else(|| &self.domains[&self.default_domain])
    }

    pub fn default_domain(&self) -> DevelopmentalDomain {
        self.default_domain
    }

    /// The difficulty model shipped with Sprig.
    pub fn bundled() -> &'static ItemDifficultyModel {
        static MODEL: std::sync::LazyLock<ItemDifficultyModel> = std::sync::LazyLock::new(|| {
            fn lexicon(entries: &[(&str, f64)]) -> Vec<KeywordAdjustment> {
                entries
                    .iter()
                    .map(|&(keyword, adjustment)| KeywordAdjustment {
                        keyword: keyword.to_string(),
                        adjustment,
                    })
                    .collect()
            }

            let mut domains = HashMap::new();
            domains.insert(
                DevelopmentalDomain::GrossMotor,
                DomainDifficulty {
                    base: 22.0,
                    per_month: 0.9,
                    keywords: lexicon(&[
                        ("jump", 5.0),
                        ("run", 4.0),
                        ("climb", 3.0),
                        ("walk", 2.0),
                        ("stand", -2.0),
                        ("sit", -4.0),
                        ("roll", -6.0),
                    ]),
                },
            );
            domains.insert(
                DevelopmentalDomain::FineMotor,
                DomainDifficulty {
                    base: 24.0,
                    per_month: 0.85,
                    keywords: lexicon(&[
                        ("draw", 3.0),
                        ("scribble", 1.0),
                        ("stack", 0.0),
                        ("pincer", -2.0),
                        ("grasp", -5.0),
                    ]),
                },
            );
            domains.insert(
                DevelopmentalDomain::Language,
                DomainDifficulty {
                    base: 26.0,
                    per_month: 0.8,
                    keywords: lexicon(&[
                        ("sentence", 4.0),
                        ("question", 3.0),
                        ("word", 1.0),
                        ("point", -2.0),
                        ("babble", -6.0),
                    ]),
                },
            );
            domains.insert(
                DevelopmentalDomain::Social,
                DomainDifficulty {
                    base: 25.0,
                    per_month: 0.75,
                    keywords: lexicon(&[
                        ("pretend", 3.0),
                        ("share", 2.0),
                        ("peek", -3.0),
                        ("smile", -6.0),
                    ]),
                },
            );
            domains.insert(
                DevelopmentalDomain::Cognitive,
                DomainDifficulty {
                    base: 27.0,
                    per_month: 0.8,
                    keywords: lexicon(&[
                        ("count", 4.0),
                        ("sort", 2.0),
                        ("imitate", -1.0),
                        ("explore", -3.0),
                    ]),
                },
            );
            domains.insert(
                DevelopmentalDomain::Adaptive,
                DomainDifficulty {
                    base: 23.0,
                    per_month: 0.85,
                    keywords: lexicon(&[
                        ("toilet", 4.0),
                        ("dress", 3.0),
                        ("spoon", -1.0),
                        ("finger food", -3.0),
                    ]),
                },
            );

            ItemDifficultyModel::new(domains, DevelopmentalDomain::Cognitive)
                .expect("bundled difficulty model is valid")
        });
        &MODEL
    }
}
