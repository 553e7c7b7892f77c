//! Student profile and the guided profile-building flow.
//!
//! A student picks an educational background, then a degree open to that
//! background, then takes the degree's aptitude test. [`Profile::next_step`]
//! reports where in that sequence the student currently is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::ReferenceCatalog;
use crate::error::ProfileError;
use crate::report::Submission;

/// A student's profile as collected at sign-up and during the flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// City used to look up nearby university programs.
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub educational_background: Option<String>,
    #[serde(default)]
    pub selected_degree: Option<String>,
    /// Most recent test submission, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_submission: Option<Submission>,
}

/// The next thing a student should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowStep {
    ChooseBackground,
    ChooseDegree,
    TakeTest,
    ViewResults,
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowStep::ChooseBackground => write!(f, "choose your educational background"),
            FlowStep::ChooseDegree => write!(f, "select a degree program"),
            FlowStep::TakeTest => write!(f, "take the aptitude test"),
            FlowStep::ViewResults => write!(f, "view your test results"),
        }
    }
}

impl Profile {
    pub fn next_step(&self) -> FlowStep {
        if self.educational_background.is_none() {
            FlowStep::ChooseBackground
        } else if self.selected_degree.is_none() {
            FlowStep::ChooseDegree
        } else if self.latest_submission.is_none() {
            FlowStep::TakeTest
        } else {
            FlowStep::ViewResults
        }
    }

    /// Record a degree choice after checking it suits the chosen background.
    pub fn select_degree(
        &mut self,
        catalog: &ReferenceCatalog,
        degree_id: &str,
    ) -> Result<(), ProfileError> {
        let background = self
            .educational_background
            .as_deref()
            .ok_or(ProfileError::MissingBackground)?;
        let degree = catalog
            .find_degree(degree_id)
            .ok_or_else(|| ProfileError::UnknownDegree(degree_id.to_string()))?;
        if !degree.accepts(background) {
            return Err(ProfileError::UnsuitableDegree {
                degree: degree_id.to_string(),
                background: background.to_string(),
            });
        }
        self.selected_degree = Some(degree.id.clone());
        Ok(())
    }

    /// Store a submission, replacing any earlier one.
    pub fn record_submission(&mut self, submission: Submission) {
        self.latest_submission = Some(submission);
    }
}
