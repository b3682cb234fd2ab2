//! Synthesis weights.
//!
//! Two levels: criterion weights inside each system (each table sums to 1)
//! and a per-query pair deciding how much each system counts in the
//! integrated score.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// What the reading is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    #[default]
    General,
    Personality,
    Timing,
    Career,
    Relationship,
    Health,
    Wealth,
}

pub const ALL_QUERY_TYPES: [QueryType; 7] = [
    QueryType::General,
    QueryType::Personality,
    QueryType::Timing,
    QueryType::Career,
    QueryType::Relationship,
    QueryType::Health,
    QueryType::Wealth,
];

impl QueryType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Personality => "personality",
            Self::Timing => "timing",
            Self::Career => "career",
            Self::Relationship => "relationship",
            Self::Health => "health",
            Self::Wealth => "wealth",
        }
    }

    /// Parses a query name, case-insensitively. Anything unrecognised is
    /// read as [`QueryType::General`].
    pub fn from_name(name: &str) -> QueryType {
        let name = name.trim().to_ascii_lowercase();
        ALL_QUERY_TYPES
            .iter()
            .copied()
            .find(|q| q.name() == name)
            .unwrap_or_default()
    }

    /// Eastern/Western weight pair for this query.
    pub const fn weights(self) -> SystemWeights {
        let (eastern, western) = match self {
            Self::General | Self::Career => (0.5, 0.5),
            Self::Personality | Self::Relationship => (0.4, 0.6),
            Self::Timing => (0.7, 0.3),
            Self::Health | Self::Wealth => (0.6, 0.4),
        };
        SystemWeights { eastern, western }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for QueryType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(QueryType::from_name(&name))
    }
}

/// Share of the integrated score given to each system. Sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemWeights {
    pub eastern: f64,
    pub western: f64,
}

// ---------------------------------------------------------------------------
// Criterion weights
// ---------------------------------------------------------------------------

/// A criterion with its weight inside one system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionWeight<C> {
    pub criterion: C,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EasternCriterion {
    ElementBalance,
    Relations,
    TwelveStages,
    DayMaster,
    Daeun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WesternCriterion {
    SunSign,
    MoonSign,
    Ascendant,
    Aspects,
    Elements,
}

pub const EASTERN_WEIGHTS: [CriterionWeight<EasternCriterion>; 5] = [
    CriterionWeight { criterion: EasternCriterion::ElementBalance, weight: 0.25 },
    CriterionWeight { criterion: EasternCriterion::Relations, weight: 0.20 },
    CriterionWeight { criterion: EasternCriterion::TwelveStages, weight: 0.15 },
    CriterionWeight { criterion: EasternCriterion::DayMaster, weight: 0.20 },
    CriterionWeight { criterion: EasternCriterion::Daeun, weight: 0.20 },
];

pub const WESTERN_WEIGHTS: [CriterionWeight<WesternCriterion>; 5] = [
    CriterionWeight { criterion: WesternCriterion::SunSign, weight: 0.20 },
    CriterionWeight { criterion: WesternCriterion::MoonSign, weight: 0.15 },
    CriterionWeight { criterion: WesternCriterion::Ascendant, weight: 0.20 },
    CriterionWeight { criterion: WesternCriterion::Aspects, weight: 0.25 },
    CriterionWeight { criterion: WesternCriterion::Elements, weight: 0.20 },
];

/// `Σ score·weight / Σ weight`; 0 for an empty or zero-weight table.
pub fn weighted_mean<C: Copy>(weights: &[CriterionWeight<C>], score: impl Fn(C) -> f64) -> f64 {
    let total_weight: f64 = weights.iter().map(|w| w.weight).sum();
    if total_weight <= 0.0 {
        return 0.0;
    }
    let total: f64 = weights.iter().map(|w| score(w.criterion) * w.weight).sum();
    total / total_weight
}
