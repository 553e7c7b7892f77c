//! The `careerfit show` command.

use std::path::PathBuf;

use anyhow::Result;

use careerfit_core::report::Submission;

use super::{load_catalog, render_submission};
use crate::config::load_config_from;

pub fn execute(
    submission_path: PathBuf,
    catalog_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    city: Option<String>,
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = load_catalog(catalog_path.as_deref().or(config.catalog.as_deref()))?;
    let submission = Submission::load_json(&submission_path)?;

    let city = city.or_else(|| config.city().map(str::to_string));
    render_submission(&submission, &catalog, city.as_deref(), &format)
}
