//! The `careerfit questions` command.

use std::path::PathBuf;

use anyhow::Result;

use careerfit_core::traits::Catalog;

use super::load_catalog;

pub fn execute(degree: String, catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;
    let test = catalog
        .find_test(&degree)
        .ok_or_else(|| anyhow::anyhow!("no aptitude test for degree '{degree}'"))?;

    println!("{} ({} questions)", test.name, test.questions.len());
    if !test.description.is_empty() {
        println!("{}", test.description);
    }

    for (i, question) in test.questions.iter().enumerate() {
        println!("\n{}. {}", i + 1, question.prompt);
        for (j, option) in question.options.iter().enumerate() {
            println!("   [{j}] {option}");
        }
    }

    println!("\nSubmit with: careerfit evaluate --degree {degree} --answers <a1>,<a2>,...");
    Ok(())
}
