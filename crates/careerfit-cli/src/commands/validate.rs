//! The `careerfit validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = careerfit_core::parser::load_catalog(&catalog_path)?;

    println!(
        "Catalog: {} ({} degrees, {} tests, {} universities)",
        catalog_path.display(),
        catalog.degrees.len(),
        catalog.tests.len(),
        catalog.universities.len()
    );

    let warnings = careerfit_core::parser::validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .subject
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All catalogs valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
