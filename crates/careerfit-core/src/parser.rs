//! TOML catalog parser.
//!
//! Loads reference catalogs from TOML files and directories, and validates
//! them.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::ReferenceCatalog;
use crate::model::{Degree, EducationalBackground, Program, Question, Test, University};
use crate::scoring::trait_for_question;

/// Intermediate TOML structure for catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    backgrounds: Vec<EducationalBackground>,
    #[serde(default)]
    degrees: Vec<Degree>,
    #[serde(default)]
    tests: Vec<TomlTest>,
    #[serde(default)]
    universities: Vec<University>,
}

#[derive(Debug, Deserialize)]
struct TomlTest {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    for_degree: String,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    #[serde(alias = "question")]
    prompt: String,
    options: Vec<String>,
    #[serde(default)]
    correct_answer: Option<usize>,
}

/// Parse a single TOML file into a catalog.
pub fn parse_catalog(path: &Path) -> Result<ReferenceCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a catalog.
///
/// Empty tests and out-of-range correct answers are errors.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<ReferenceCatalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let tests = parsed
        .tests
        .into_iter()
        .map(|t| {
            let test = Test {
                id: t.id,
                name: t.name,
                description: t.description,
                for_degree: t.for_degree,
                questions: t
                    .questions
                    .into_iter()
                    .map(|q| Question {
                        id: q.id,
                        prompt: q.prompt,
                        options: q.options,
                        correct_answer: q.correct_answer,
                    })
                    .collect(),
            };
            test.validate()
                .with_context(|| format!("invalid test in {}", source_path.display()))?;
            Ok(test)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ReferenceCatalog {
        backgrounds: parsed.backgrounds,
        degrees: parsed.degrees,
        tests,
        universities: parsed.universities,
    })
}

/// Recursively load and merge all `.toml` catalog files in a directory.
///
/// Files are visited in path order so merged catalogs are reproducible.
pub fn load_catalog_directory(dir: &Path) -> Result<ReferenceCatalog> {
    let mut catalog = ReferenceCatalog::default();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            catalog.merge(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(part) => catalog.merge(part),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(catalog)
}

/// Load a catalog from a file or a directory of files.
pub fn load_catalog(path: &Path) -> Result<ReferenceCatalog> {
    if path.is_dir() {
        load_catalog_directory(path)
    } else {
        parse_catalog(path)
    }
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The record the warning is about (e.g. "test:cs-aptitude").
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            message: message.into(),
        }
    }
}

fn duplicate_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    ids.filter(|id| !seen.insert(*id)).collect()
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &ReferenceCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate ids across each record type
    for id in duplicate_ids(catalog.backgrounds.iter().map(|b| b.id.as_str())) {
        warnings.push(ValidationWarning::new(
            format!("background:{id}"),
            format!("duplicate background ID: {id}"),
        ));
    }
    for id in duplicate_ids(catalog.degrees.iter().map(|d| d.id.as_str())) {
        warnings.push(ValidationWarning::new(
            format!("degree:{id}"),
            format!("duplicate degree ID: {id}"),
        ));
    }
    for id in duplicate_ids(catalog.tests.iter().map(|t| t.id.as_str())) {
        warnings.push(ValidationWarning::new(
            format!("test:{id}"),
            format!("duplicate test ID: {id}"),
        ));
    }

    let background_ids: HashSet<&str> = catalog.backgrounds.iter().map(|b| b.id.as_str()).collect();
    let degree_ids: HashSet<&str> = catalog.degrees.iter().map(|d| d.id.as_str()).collect();

    for degree in &catalog.degrees {
        for background in &degree.suitable_for {
            if !background_ids.contains(background.as_str()) {
                warnings.push(ValidationWarning::new(
                    format!("degree:{}", degree.id),
                    format!("suitable_for names unknown background: {background}"),
                ));
            }
        }
    }

    for test in &catalog.tests {
        let subject = format!("test:{}", test.id);

        if !degree_ids.contains(test.for_degree.as_str()) {
            warnings.push(ValidationWarning::new(
                &subject,
                format!("targets unknown degree: {}", test.for_degree),
            ));
        }

        for id in duplicate_ids(test.questions.iter().map(|q| q.id.as_str())) {
            warnings.push(ValidationWarning::new(
                &subject,
                format!("duplicate question ID: {id}"),
            ));
        }

        for question in &test.questions {
            if question.options.len() < 2 {
                warnings.push(ValidationWarning::new(
                    &subject,
                    format!("question {} has fewer than two options", question.id),
                ));
            }
        }

        // Only the last answer for a shared trait is scored
        let mut trait_questions: HashMap<_, Vec<&str>> = HashMap::new();
        for question in test.questions.iter().filter(|q| !q.is_knowledge()) {
            if let Some(aptitude) = trait_for_question(&question.id) {
                trait_questions
                    .entry(aptitude)
                    .or_default()
                    .push(question.id.as_str());
            }
        }
        let mut shared: Vec<_> = trait_questions
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .collect();
        shared.sort_by_key(|(aptitude, _)| *aptitude);
        for (aptitude, ids) in shared {
            warnings.push(ValidationWarning::new(
                &subject,
                format!(
                    "questions {} all measure {aptitude}; only the last answer counts",
                    ids.join(", ")
                ),
            ));
        }
    }

    for university in &catalog.universities {
        for Program { degree_id, .. } in &university.programs {
            if !degree_ids.contains(degree_id.as_str()) {
                warnings.push(ValidationWarning::new(
                    format!("university:{}", university.id),
                    format!("program for unknown degree: {degree_id}"),
                ));
            }
        }
    }

    warnings
}
