//! Error types for evaluation and catalog loading.
//!
//! The engine itself only ever raises [`EvalError::ShapeMismatch`]; every
//! other degenerate input is scored rather than rejected. [`CatalogError`]
//! covers invariants of reference data that the parser refuses to load.

use thiserror::Error;

/// Errors raised by the evaluation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The answer vector does not line up with the test's questions.
    #[error("answer count mismatch for test '{test_id}': expected {expected}, got {actual}")]
    ShapeMismatch {
        test_id: String,
        expected: usize,
        actual: usize,
    },
}

/// Invariant violations in catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A test was defined without any questions.
    #[error("test '{0}' has no questions")]
    EmptyTest(String),

    /// A knowledge question points at an option that does not exist.
    #[error(
        "question '{question_id}' in test '{test_id}': correct answer {index} is out of range ({options} options)"
    )]
    CorrectAnswerOutOfRange {
        test_id: String,
        question_id: String,
        index: usize,
        options: usize,
    },
}

/// Errors raised while walking a student through the profile flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// A degree was chosen before an educational background.
    #[error("choose an educational background before selecting a degree")]
    MissingBackground,

    /// The degree id is not in the catalog.
    #[error("unknown degree: {0}")]
    UnknownDegree(String),

    /// The degree is not offered to students with the chosen background.
    #[error("degree '{degree}' is not suitable for background '{background}'")]
    UnsuitableDegree { degree: String, background: String },
}
