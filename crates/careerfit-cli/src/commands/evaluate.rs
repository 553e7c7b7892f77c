//! The `careerfit evaluate` command.

use std::path::PathBuf;

use anyhow::Result;

use careerfit_core::engine::{AptitudeEngine, EngineConfig};
use careerfit_core::model::{Test, UNANSWERED};
use careerfit_core::report::Submission;
use careerfit_core::traits::Catalog;
use careerfit_report::{write_html_report, ResultsPage};

use super::{load_catalog, parse_answers, render_submission};
use crate::config::load_config_from;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    degree: String,
    answers_str: String,
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    city: Option<String>,
    format: String,
    output: Option<PathBuf>,
    lenient: bool,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = load_catalog(catalog_path.as_deref().or(config.catalog.as_deref()))?;

    let test = catalog
        .find_test(&degree)
        .ok_or_else(|| anyhow::anyhow!("no aptitude test for degree '{degree}'"))?;

    let answers = parse_answers(&answers_str)?;
    let strict = config.strict_answers && !lenient;
    if strict {
        check_complete(test, &answers)?;
    }

    let engine = AptitudeEngine::new(
        &catalog,
        EngineConfig {
            validate_shape: strict,
        },
    );
    let result = engine.evaluate(&answers, test)?;
    let submission = Submission::new(test, answers, result);

    tracing::info!(
        degree = %degree,
        tier = %submission.result.tier,
        score = submission.result.score,
        "evaluation complete"
    );

    let city = city.or_else(|| config.city().map(str::to_string));
    render_submission(&submission, &catalog, city.as_deref(), &format)?;

    if let Some(output) = output {
        std::fs::create_dir_all(&output)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

        let json_path = output.join(format!("submission-{timestamp}.json"));
        submission.save_json(&json_path)?;
        eprintln!("Submission saved to: {}", json_path.display());

        let degree_name = catalog.degree_display_name(&submission.degree_id);
        let programs = match city.as_deref() {
            Some(city) => catalog.recommended_programs(city, &degree, submission.result.tier),
            None => Vec::new(),
        };
        let html_path = output.join(format!("results-{timestamp}.html"));
        write_html_report(
            &ResultsPage {
                submission: &submission,
                degree_name: &degree_name,
                programs: &programs,
            },
            &html_path,
        )?;
        eprintln!("Results page: {}", html_path.display());
    }

    Ok(())
}

/// Every question answered with one of its own options.
fn check_complete(test: &Test, answers: &[i32]) -> Result<()> {
    if answers.contains(&UNANSWERED) {
        anyhow::bail!("please answer all questions before submitting");
    }
    for (i, (question, &answer)) in test.questions.iter().zip(answers).enumerate() {
        let in_range = usize::try_from(answer).is_ok_and(|a| a < question.options.len());
        if !in_range {
            anyhow::bail!("please choose a valid option for question {}", i + 1);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerfit_core::catalog::ReferenceCatalog;

    #[test]
    fn complete_answers_pass() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let test = catalog.find_test("bscs").unwrap();
        assert!(check_complete(test, &[2, 0, 1, 0, 0, 0, 0, 0, 0, 3]).is_ok());
    }

    #[test]
    fn out_of_range_option_names_question() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let test = catalog.find_test("bscs").unwrap();
        let err = check_complete(test, &[2, 0, 9, 0, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "please choose a valid option for question 3"
        );
    }

    #[test]
    fn unanswered_reported_first() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let test = catalog.find_test("bscs").unwrap();
        let err = check_complete(test, &[9, UNANSWERED]).unwrap_err();
        assert!(err.to_string().contains("answer all questions"));
    }
}
