//! The `careerfit status` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use careerfit_core::profile::FlowStep;
use careerfit_core::report::Submission;
use careerfit_core::traits::Catalog;

use super::load_catalog;
use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    let mut profile = config.profile.clone();

    // Re-check the configured degree against the background.
    if let Some(degree) = profile.selected_degree.take() {
        if let Err(e) = profile.select_degree(&catalog, &degree) {
            eprintln!("Warning: {e}");
        }
    }

    if let Some(degree) = &profile.selected_degree {
        if let Some(submission) = latest_submission(&config.output_dir, degree)? {
            profile.record_submission(submission);
        }
    }

    let name = if profile.name.is_empty() {
        "(not set)"
    } else {
        profile.name.as_str()
    };
    println!("Student: {name}");
    if !profile.email.is_empty() {
        println!("Email: {}", profile.email);
    }
    println!(
        "Background: {}",
        profile
            .educational_background
            .as_deref()
            .and_then(|id| catalog.find_background(id))
            .map(|b| b.name.as_str())
            .unwrap_or("(not set)")
    );
    println!(
        "Degree: {}",
        profile
            .selected_degree
            .as_deref()
            .map(|id| catalog.degree_display_name(id))
            .unwrap_or_else(|| "(not set)".to_string())
    );
    if let Some(city) = config.city() {
        println!("City: {city}");
    }
    if let Some(submission) = &profile.latest_submission {
        println!("Latest result: {}", submission.summary_line());
    }

    let step = profile.next_step();
    println!("\nNext step: {step}");
    match step {
        FlowStep::ChooseBackground => {
            println!("  Set profile.educational_background in careerfit.toml")
        }
        FlowStep::ChooseDegree => {
            println!("  Run: careerfit degrees --background <id>, then set profile.selected_degree")
        }
        FlowStep::TakeTest => {
            if let Some(degree) = &profile.selected_degree {
                println!("  Run: careerfit questions --degree {degree}");
            }
        }
        FlowStep::ViewResults => {}
    }

    Ok(())
}

/// Most recent saved submission for `degree_id` under `dir`.
fn latest_submission(dir: &Path, degree_id: &str) -> Result<Option<Submission>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut latest: Option<Submission> = None;
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_submission = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("submission-") && n.ends_with(".json"));
        if !is_submission {
            continue;
        }
        match Submission::load_json(&path) {
            Ok(s) if s.degree_id == degree_id => {
                if latest
                    .as_ref()
                    .map_or(true, |l| s.completed_at > l.completed_at)
                {
                    latest = Some(s);
                }
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("skipping {}: {e:#}", path.display()),
        }
    }
    Ok(latest)
}
