pub mod degrees;
pub mod evaluate;
pub mod init;
pub mod programs;
pub mod questions;
pub mod show;
pub mod status;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use careerfit_core::catalog::ReferenceCatalog;
use careerfit_core::model::{ProgramListing, UNANSWERED};
use careerfit_core::parser;
use careerfit_core::report::Submission;
use careerfit_core::scoring::MAX_CONTRIBUTION;
use careerfit_core::traits::Catalog;
use careerfit_report::{generate_html, ResultsPage};

/// Load the catalog at `path`, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> Result<ReferenceCatalog> {
    match path {
        Some(p) => parser::load_catalog(p),
        None => ReferenceCatalog::builtin().context("built-in catalog is invalid"),
    }
}

/// Parse a comma-separated answer list.
///
/// `-`, `-1` and blank entries mark a question as unanswered.
pub fn parse_answers(s: &str) -> Result<Vec<i32>> {
    anyhow::ensure!(!s.trim().is_empty(), "no answers given");
    s.split(',')
        .map(|part| {
            let part = part.trim();
            if part.is_empty() || part == "-" {
                return Ok(UNANSWERED);
            }
            let answer = part
                .parse::<i32>()
                .map_err(|_| anyhow::anyhow!("invalid answer: '{part}'"))?;
            anyhow::ensure!(
                answer >= UNANSWERED,
                "invalid answer: '{part}' (use an option index or -1)"
            );
            Ok(answer)
        })
        .collect()
}

/// Print a submission in the requested format.
pub fn render_submission(
    submission: &Submission,
    catalog: &ReferenceCatalog,
    city: Option<&str>,
    format: &str,
) -> Result<()> {
    let degree_name = catalog.degree_display_name(&submission.degree_id);
    let programs = match city {
        Some(city) => {
            catalog.recommended_programs(city, &submission.degree_id, submission.result.tier)
        }
        None => Vec::new(),
    };

    match format {
        "text" => print_text(submission, &degree_name, city, &programs),
        "json" => println!("{}", serde_json::to_string_pretty(submission)?),
        "html" => {
            let page = ResultsPage {
                submission,
                degree_name: &degree_name,
                programs: &programs,
            };
            println!("{}", generate_html(&page));
        }
        other => anyhow::bail!("unknown format: '{other}' (expected text, json or html)"),
    }
    Ok(())
}

fn print_text(
    submission: &Submission,
    degree_name: &str,
    city: Option<&str>,
    programs: &[ProgramListing],
) {
    let result = &submission.result;
    let breakdown = &result.breakdown;

    println!("Aptitude result for {degree_name} ({})", submission.test_id);
    println!("Score: {} ({})", result.display_score(), result.tier);
    if breakdown.knowledge_total > 0 {
        println!(
            "Knowledge: {}/{} correct",
            breakdown.knowledge_correct, breakdown.knowledge_total
        );
    }

    let mut table = Table::new();
    table.set_header(vec!["Trait", "Points", "Assessment"]);
    for (aptitude, points) in breakdown.traits.iter() {
        let assessment = if points > 0 { "strength" } else { "weakness" };
        table.add_row(vec![
            Cell::new(aptitude),
            Cell::new(format!("{points}/{MAX_CONTRIBUTION}")),
            Cell::new(assessment),
        ]);
    }
    println!("{table}");
    println!("Trait score: {:.1}%", breakdown.trait_percentage);

    print_list("Strengths", &result.strengths);
    print_list("Areas for improvement", &result.weaknesses);

    println!("\nRecommendation: {}", result.recommendation);
    print_list("Alternative degrees", &result.alternative_degrees);

    if let Some(city) = city {
        if !programs.is_empty() {
            println!("\nRecommended programs in {city}:");
            println!("{}", programs_table(programs));
        } else if result.tier.is_fit() {
            println!("\nNo {degree_name} programs found in {city}.");
        }
    }
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{title}:");
    for item in items {
        println!("  - {item}");
    }
}

/// Table of university programs.
pub fn programs_table(programs: &[ProgramListing]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["University", "City", "Program", "Duration", "Admission"]);
    for listing in programs {
        table.add_row(vec![
            Cell::new(&listing.university),
            Cell::new(&listing.city),
            Cell::new(&listing.program.program_name),
            Cell::new(&listing.program.duration),
            Cell::new(
                listing
                    .program
                    .admission_criteria
                    .as_deref()
                    .unwrap_or("-"),
            ),
        ]);
    }
    table
}
