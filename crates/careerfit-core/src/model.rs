//! Core data model types for careerfit.
//!
//! Reference data (backgrounds, degrees, tests, universities) is authored
//! ahead of time and never mutated by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Sentinel stored in an answer vector for a question the student skipped.
pub const UNANSWERED: i32 = -1;

/// Suffix removed from a test's display name to name its subject.
const TEST_NAME_SUFFIX: &str = " Aptitude Test";

/// A prior qualification a student can hold (e.g. "ICS").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationalBackground {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A degree program a student can apply to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    /// Unique identifier (e.g. "bscs").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Educational background ids this degree accepts.
    #[serde(default)]
    pub suitable_for: Vec<String>,
}

impl Degree {
    /// Whether students with the given background may pick this degree.
    pub fn accepts(&self, background_id: &str) -> bool {
        self.suitable_for.iter().any(|b| b == background_id)
    }
}

/// Whether a question is scored for correctness or for a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Has a designated correct option.
    Knowledge,
    /// Has no correct option; measures a trait.
    Preference,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Knowledge => write!(f, "knowledge"),
            QuestionKind::Preference => write!(f, "preference"),
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within its test.
    pub id: String,
    /// The question text shown to the student.
    pub prompt: String,
    /// Option labels, in display order.
    pub options: Vec<String>,
    /// Index of the correct option for knowledge questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<usize>,
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        if self.correct_answer.is_some() {
            QuestionKind::Knowledge
        } else {
            QuestionKind::Preference
        }
    }

    pub fn is_knowledge(&self) -> bool {
        self.kind() == QuestionKind::Knowledge
    }

    /// Whether `answer` selects the correct option.
    ///
    /// Negative sentinels never convert to an index, so they are never correct.
    pub fn is_correct(&self, answer: i32) -> bool {
        match (self.correct_answer, usize::try_from(answer)) {
            (Some(correct), Ok(chosen)) => correct == chosen,
            _ => false,
        }
    }

    /// Check that a correct-option index, when present, names a real option.
    pub fn validate(&self, test_id: &str) -> Result<(), CatalogError> {
        match self.correct_answer {
            Some(index) if index >= self.options.len() => {
                Err(CatalogError::CorrectAnswerOutOfRange {
                    test_id: test_id.to_string(),
                    question_id: self.id.clone(),
                    index,
                    options: self.options.len(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// An aptitude test for one degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    /// Unique identifier (e.g. "cs-aptitude").
    pub id: String,
    /// Display name (e.g. "Computer Science Aptitude Test").
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The degree id this test evaluates.
    pub for_degree: String,
    /// Questions in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Test {
    /// The subject named in recommendations: the display name without a
    /// trailing " Aptitude Test".
    pub fn subject(&self) -> &str {
        self.name
            .strip_suffix(TEST_NAME_SUFFIX)
            .unwrap_or(&self.name)
    }

    pub fn knowledge_question_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_knowledge()).count()
    }

    /// Check the test's structural invariants.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::EmptyTest(self.id.clone()));
        }
        self.questions
            .iter()
            .try_for_each(|q| q.validate(&self.id))
    }
}

/// A university and the programs it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub programs: Vec<Program>,
}

/// A degree program offered by a university.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// The degree id this program grants.
    pub degree_id: String,
    pub program_name: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admission_criteria: Option<String>,
}

/// A program paired with the university offering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramListing {
    pub university: String,
    pub city: String,
    #[serde(flatten)]
    pub program: Program,
}
