//! Evaluation result types.

use serde::{Deserialize, Serialize};

use crate::classifier::{Classification, Tier};
use crate::scoring::{ScoreSheet, TraitScores};

/// Maximum value of [`EvaluationResult::score`].
pub const MAX_SCORE: u32 = 100;

/// The complete outcome of evaluating one test submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Combined percentage on a 0..=100 scale.
    pub score: f64,
    pub max_score: u32,
    /// Same value as `score`; kept separate for display code.
    pub percentage: f64,
    pub tier: Tier,
    /// Strength labels in fixed trait order.
    pub strengths: Vec<String>,
    /// Weakness labels in fixed trait order.
    pub weaknesses: Vec<String>,
    pub recommendation: String,
    /// Display names of suggested alternative degrees.
    #[serde(default)]
    pub alternative_degrees: Vec<String>,
    /// How the score was reached.
    pub breakdown: ScoreBreakdown,
}

impl EvaluationResult {
    /// Score rounded for display, e.g. "87 / 100".
    pub fn display_score(&self) -> String {
        format!("{:.0} / {}", self.score, self.max_score)
    }
}

/// Intermediate values behind an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub knowledge_correct: u32,
    pub knowledge_total: u32,
    /// `None` when the test has no knowledge questions.
    pub knowledge_score: Option<f64>,
    pub trait_percentage: f64,
    pub traits: TraitScores,
}

impl ScoreBreakdown {
    pub fn new(sheet: &ScoreSheet, classification: &Classification) -> Self {
        Self {
            knowledge_correct: sheet.knowledge_correct,
            knowledge_total: sheet.knowledge_total,
            knowledge_score: classification.knowledge_score,
            trait_percentage: classification.trait_percentage,
            traits: sheet.traits.clone(),
        }
    }
}
