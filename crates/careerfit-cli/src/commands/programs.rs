//! The `careerfit programs` command.

use std::path::PathBuf;

use anyhow::Result;

use careerfit_core::traits::Catalog;

use super::{load_catalog, programs_table};

pub fn execute(degree: String, city: String, catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;
    anyhow::ensure!(
        catalog.find_degree(&degree).is_some(),
        "unknown degree '{degree}'"
    );

    let name = catalog.degree_display_name(&degree);
    let programs = catalog.programs_in_city(&city, &degree);
    if programs.is_empty() {
        println!("No {name} programs found in {city}.");
    } else {
        println!("{name} programs in {city}:");
        println!("{}", programs_table(&programs));
    }

    Ok(())
}
