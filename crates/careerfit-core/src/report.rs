//! Test submissions with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Test;
use crate::results::EvaluationResult;

/// A completed test together with its evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Unique submission identifier.
    pub id: Uuid,
    /// Degree the test evaluates.
    pub degree_id: String,
    pub test_id: String,
    /// Answers as submitted, one per question.
    pub answers: Vec<i32>,
    pub result: EvaluationResult,
    /// When the submission was evaluated.
    pub completed_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(test: &Test, answers: Vec<i32>, result: EvaluationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            degree_id: test.for_degree.clone(),
            test_id: test.id.clone(),
            answers,
            result,
            completed_at: Utc::now(),
        }
    }

    /// Save the submission as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("failed to serialize submission")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write submission to {}", path.display()))?;
        Ok(())
    }

    /// Load a submission from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read submission from {}", path.display()))?;
        let submission: Submission =
            serde_json::from_str(&content).context("failed to parse submission JSON")?;
        Ok(submission)
    }

    /// One-line summary, e.g. "cs-aptitude: high (87 / 100)".
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} ({})",
            self.test_id,
            self.result.tier,
            self.result.display_score()
        )
    }
}
