//! Evaluation engine.
//!
//! Runs the scoring pipeline for one submission: trait scoring,
//! classification, narrative, then alternative-degree name resolution
//! against the injected catalog. The engine holds no mutable state and
//! performs no I/O.

use crate::classifier::classify;
use crate::error::EvalError;
use crate::model::Test;
use crate::narrative::build_narrative;
use crate::results::{EvaluationResult, ScoreBreakdown, MAX_SCORE};
use crate::scoring::score_answers;
use crate::traits::Catalog;

/// Configuration for the evaluation engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Reject answer vectors whose length differs from the question count.
    ///
    /// When disabled, missing answers are scored as unanswered and surplus
    /// answers are ignored.
    pub validate_shape: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validate_shape: true,
        }
    }
}

/// The aptitude evaluation engine.
pub struct AptitudeEngine<'a> {
    catalog: &'a dyn Catalog,
    config: EngineConfig,
}

impl<'a> AptitudeEngine<'a> {
    pub fn new(catalog: &'a dyn Catalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Evaluate a completed test.
    pub fn evaluate(&self, answers: &[i32], test: &Test) -> Result<EvaluationResult, EvalError> {
        if self.config.validate_shape && answers.len() != test.questions.len() {
            return Err(EvalError::ShapeMismatch {
                test_id: test.id.clone(),
                expected: test.questions.len(),
                actual: answers.len(),
            });
        }

        let sheet = score_answers(test, answers);
        let classification = classify(&sheet);
        let narrative = build_narrative(&sheet.traits, classification.tier, test);

        tracing::debug!(
            test = %test.id,
            correct = sheet.knowledge_correct,
            knowledge = sheet.knowledge_total,
            traits = sheet.traits.total(),
            percentage = classification.percentage,
            tier = %classification.tier,
            "evaluated aptitude test"
        );

        let alternative_degrees = narrative
            .alternatives
            .iter()
            .map(|id| self.catalog.degree_display_name(id))
            .collect();

        Ok(EvaluationResult {
            score: classification.percentage,
            max_score: MAX_SCORE,
            percentage: classification.percentage,
            tier: classification.tier,
            strengths: narrative.strengths,
            weaknesses: narrative.weaknesses,
            recommendation: narrative.recommendation,
            alternative_degrees,
            breakdown: ScoreBreakdown::new(&sheet, &classification),
        })
    }
}

/// Evaluate with the default configuration.
pub fn evaluate(
    answers: &[i32],
    test: &Test,
    catalog: &dyn Catalog,
) -> Result<EvaluationResult, EvalError> {
    AptitudeEngine::new(catalog, EngineConfig::default()).evaluate(answers, test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceCatalog;
    use crate::classifier::Tier;
    use crate::model::{Question, UNANSWERED};

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::builtin().unwrap()
    }

    fn cs_test(catalog: &ReferenceCatalog) -> Test {
        catalog.find_test("bscs").unwrap().clone()
    }

    #[test]
    fn strong_cs_submission() {
        let catalog = catalog();
        let test = cs_test(&catalog);
        let result = evaluate(&[2, 0, 1, 0, 0, 0, 0, 0, 0, 0], &test, &catalog).unwrap();

        assert_eq!(result.tier, Tier::High);
        assert!((result.percentage - (60.0 + 0.4 * 200.0 / 3.0)).abs() < 1e-9);
        assert_eq!(result.score, result.percentage);
        assert_eq!(result.max_score, 100);
        assert_eq!(
            result.strengths,
            vec![
                "Problem-solving approach",
                "Mathematical aptitude",
                "Logical reasoning",
                "Persistence and determination"
            ]
        );
        assert_eq!(
            result.weaknesses,
            vec!["Teamwork and collaboration", "Attention to detail"]
        );
        assert!(result.alternative_degrees.is_empty());
        assert_eq!(result.breakdown.knowledge_score, Some(100.0));
    }

    #[test]
    fn unanswered_cs_submission() {
        let catalog = catalog();
        let test = cs_test(&catalog);
        let result = evaluate(&[UNANSWERED; 10], &test, &catalog).unwrap();

        assert_eq!(result.tier, Tier::Low);
        assert_eq!(result.percentage, 0.0);
        assert!(result.strengths.is_empty());
        assert_eq!(result.weaknesses.len(), 6);
        assert_eq!(
            result.alternative_degrees,
            vec!["BBA (Bachelor of Business Administration)"]
        );
        assert_eq!(result.breakdown.knowledge_correct, 0);
        assert_eq!(result.breakdown.traits.total(), 0);
    }

    #[test]
    fn medium_submission_resolves_alternative_names() {
        let catalog = catalog();
        let test = cs_test(&catalog);
        // 2/3 knowledge correct, cs4..cs9 second option: 40 + 0.4 * 33.3 = 53.3
        let result = evaluate(&[2, 0, 0, 1, 1, 1, 1, 1, 1, 1], &test, &catalog).unwrap();

        assert_eq!(result.tier, Tier::Medium);
        assert_eq!(
            result.alternative_degrees,
            vec!["BS Information Technology", "BS Software Engineering"]
        );
    }

    #[test]
    fn unknown_alternative_falls_back_to_id() {
        let test = cs_test(&catalog());
        let empty = ReferenceCatalog::default();
        let result = evaluate(&[UNANSWERED; 10], &test, &empty).unwrap();
        assert_eq!(result.alternative_degrees, vec!["bba"]);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let catalog = catalog();
        let test = cs_test(&catalog);
        let err = evaluate(&[2, 0, 1], &test, &catalog).unwrap_err();
        assert_eq!(
            err,
            EvalError::ShapeMismatch {
                test_id: "cs-aptitude".into(),
                expected: 10,
                actual: 3,
            }
        );
    }

    #[test]
    fn lenient_engine_scores_short_vectors() {
        let catalog = catalog();
        let test = cs_test(&catalog);
        let engine = AptitudeEngine::new(
            &catalog,
            EngineConfig {
                validate_shape: false,
            },
        );
        let result = engine.evaluate(&[2, 0, 1], &test).unwrap();
        assert_eq!(result.breakdown.knowledge_correct, 3);
        assert!((result.percentage - 60.0).abs() < 1e-9);
        assert_eq!(result.tier, Tier::Medium);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let catalog = catalog();
        let test = cs_test(&catalog);
        let answers = [2, 1, 1, 0, 2, 3, 1, 1, 0, 2];
        let a = evaluate(&answers, &test, &catalog).unwrap();
        let b = evaluate(&answers, &test, &catalog).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }

    #[test]
    fn preference_only_test_weights_traits_fully() {
        let catalog = catalog();
        let test = Test {
            id: "traits".into(),
            name: "Teamwork Aptitude Test".into(),
            description: String::new(),
            for_degree: "bsse".into(),
            questions: ["se3", "se4", "se5"]
                .iter()
                .map(|id| Question {
                    id: id.to_string(),
                    prompt: String::new(),
                    options: vec!["a".into(), "b".into()],
                    correct_answer: None,
                })
                .collect(),
        };
        let result = evaluate(&[0, 0, 0], &test, &catalog).unwrap();
        assert!((result.percentage - 50.0).abs() < 1e-9);
        assert_eq!(result.tier, Tier::Medium);
        assert_eq!(result.breakdown.knowledge_score, None);
        assert!(result.recommendation.contains("moderate aptitude for Teamwork."));
    }
}
