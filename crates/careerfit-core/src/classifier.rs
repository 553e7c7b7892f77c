//! Aptitude classification from knowledge accuracy and trait contributions.
//!
//! The combined percentage weights knowledge 60% and traits 40% when the
//! test has knowledge questions, and falls back to traits alone otherwise.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::{ScoreSheet, TraitScores};

/// Weight of the knowledge score in the combined percentage.
pub const KNOWLEDGE_WEIGHT: f64 = 0.6;
/// Weight of the trait percentage in the combined percentage.
pub const TRAIT_WEIGHT: f64 = 0.4;
/// Lowest combined percentage classified as [`Tier::High`].
pub const HIGH_THRESHOLD: f64 = 70.0;
/// Lowest combined percentage classified as [`Tier::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 50.0;

/// Three-way aptitude classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// Classify a combined percentage. Lower bounds are inclusive.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= HIGH_THRESHOLD {
            Tier::High
        } else if percentage >= MEDIUM_THRESHOLD {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    /// Whether the student is a reasonable fit (medium or high).
    pub fn is_fit(self) -> bool {
        matches!(self, Tier::High | Tier::Medium)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::High => write!(f, "high"),
            Tier::Medium => write!(f, "medium"),
            Tier::Low => write!(f, "low"),
        }
    }
}

/// The classifier's output. Percentages are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Knowledge accuracy in [0, 100], or `None` when the test has no
    /// knowledge questions.
    pub knowledge_score: Option<f64>,
    /// Trait total over the fixed trait maximum, in [0, 100].
    pub trait_percentage: f64,
    /// Weighted combination used for the tier.
    pub percentage: f64,
    pub tier: Tier,
}

/// Trait total as a percentage of the maximum over all known traits.
///
/// Traits the test never touched count as 0, lowering the percentage.
pub fn trait_percentage(traits: &TraitScores) -> f64 {
    f64::from(traits.total()) / f64::from(TraitScores::max_total()) * 100.0
}

/// Combine a score sheet into a percentage and tier.
pub fn classify(sheet: &ScoreSheet) -> Classification {
    let knowledge_score = (sheet.knowledge_total > 0).then(|| {
        f64::from(sheet.knowledge_correct) / f64::from(sheet.knowledge_total) * 100.0
    });
    let trait_percentage = trait_percentage(&sheet.traits);

    let percentage = match knowledge_score {
        Some(knowledge) => knowledge * KNOWLEDGE_WEIGHT + trait_percentage * TRAIT_WEIGHT,
        None => trait_percentage,
    };

    Classification {
        knowledge_score,
        trait_percentage,
        percentage,
        tier: Tier::from_percentage(percentage),
    }
}
