//! Trait scoring for completed aptitude tests.
//!
//! Knowledge questions are tallied for correctness. Preference questions are
//! matched by id against a fixed table and converted into a trait
//! contribution from the ordinal position of the chosen option.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Test, UNANSWERED};

/// Highest contribution a single preference answer can make to a trait.
pub const MAX_CONTRIBUTION: u8 = 2;

/// A named aptitude dimension used for strengths and weaknesses.
///
/// Variant order is the fixed order strengths and weaknesses are listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AptitudeTrait {
    ProblemSolving,
    Mathematical,
    Logical,
    Persistence,
    Teamwork,
    Attention,
}

impl AptitudeTrait {
    /// Every trait, in reporting order.
    pub const ALL: [AptitudeTrait; 6] = [
        AptitudeTrait::ProblemSolving,
        AptitudeTrait::Mathematical,
        AptitudeTrait::Logical,
        AptitudeTrait::Persistence,
        AptitudeTrait::Teamwork,
        AptitudeTrait::Attention,
    ];

    /// Label used when the trait is listed as a strength.
    pub fn strength_label(self) -> &'static str {
        match self {
            AptitudeTrait::ProblemSolving => "Problem-solving approach",
            AptitudeTrait::Mathematical => "Mathematical aptitude",
            AptitudeTrait::Logical => "Logical reasoning",
            AptitudeTrait::Persistence => "Persistence and determination",
            AptitudeTrait::Teamwork => "Teamwork and collaboration",
            AptitudeTrait::Attention => "Attention to detail",
        }
    }

    /// Label used when the trait is listed as a weakness.
    pub fn weakness_label(self) -> &'static str {
        match self {
            AptitudeTrait::Persistence => "Persistence when facing challenges",
            other => other.strength_label(),
        }
    }
}

impl fmt::Display for AptitudeTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AptitudeTrait::ProblemSolving => "problem-solving",
            AptitudeTrait::Mathematical => "mathematical",
            AptitudeTrait::Logical => "logical",
            AptitudeTrait::Persistence => "persistence",
            AptitudeTrait::Teamwork => "teamwork",
            AptitudeTrait::Attention => "attention",
        };
        f.write_str(name)
    }
}

/// Preference questions that measure a trait, keyed by question id.
///
/// Questions missing from this table contribute to no trait.
const TRAIT_QUESTIONS: &[(&str, AptitudeTrait)] = &[
    ("cs4", AptitudeTrait::ProblemSolving),
    ("se4", AptitudeTrait::ProblemSolving),
    ("cs5", AptitudeTrait::Mathematical),
    ("cs8", AptitudeTrait::Logical),
    ("cs9", AptitudeTrait::Persistence),
    ("se3", AptitudeTrait::Teamwork),
    ("se5", AptitudeTrait::Attention),
];

/// Look up the trait a preference question measures.
pub fn trait_for_question(question_id: &str) -> Option<AptitudeTrait> {
    TRAIT_QUESTIONS
        .iter()
        .find(|(id, _)| *id == question_id)
        .map(|(_, t)| *t)
}

/// Contribution of a preference answer: first option 2, second 1, else 0.
pub fn contribution_for(answer: i32) -> u8 {
    match answer {
        0 => MAX_CONTRIBUTION,
        1 => 1,
        _ => 0,
    }
}

/// Per-trait contributions for one evaluation.
///
/// Every trait is present; untouched traits hold 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitScores(BTreeMap<AptitudeTrait, u8>);

impl Default for TraitScores {
    fn default() -> Self {
        Self(AptitudeTrait::ALL.iter().map(|t| (*t, 0)).collect())
    }
}

impl TraitScores {
    pub fn get(&self, aptitude: AptitudeTrait) -> u8 {
        self.0.get(&aptitude).copied().unwrap_or(0)
    }

    /// Overwrite a trait's contribution; the last write for a trait wins.
    pub fn set(&mut self, aptitude: AptitudeTrait, contribution: u8) {
        self.0.insert(aptitude, contribution);
    }

    /// Sum of all contributions.
    pub fn total(&self) -> u32 {
        self.0.values().map(|v| u32::from(*v)).sum()
    }

    /// Highest possible total across the fixed trait set.
    pub fn max_total() -> u32 {
        AptitudeTrait::ALL.len() as u32 * u32::from(MAX_CONTRIBUTION)
    }

    /// Contributions in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (AptitudeTrait, u8)> + '_ {
        AptitudeTrait::ALL.iter().map(move |t| (*t, self.get(*t)))
    }
}

/// Raw tallies from one pass over a test's answers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Knowledge questions seen.
    pub knowledge_total: u32,
    /// Knowledge questions answered with the correct option.
    pub knowledge_correct: u32,
    /// Trait contributions from recognized preference questions.
    pub traits: TraitScores,
}

/// Score a test's answers positionally.
///
/// Answers beyond the end of `answers` are read as [`UNANSWERED`]; surplus
/// answers are ignored. Out-of-range and sentinel answers earn no credit.
pub fn score_answers(test: &Test, answers: &[i32]) -> ScoreSheet {
    let mut sheet = ScoreSheet::default();

    for (index, question) in test.questions.iter().enumerate() {
        let answer = answers.get(index).copied().unwrap_or(UNANSWERED);

        if question.is_knowledge() {
            sheet.knowledge_total += 1;
            if question.is_correct(answer) {
                sheet.knowledge_correct += 1;
            }
        } else if let Some(aptitude) = trait_for_question(&question.id) {
            sheet.traits.set(aptitude, contribution_for(answer));
        }
    }

    sheet
}
