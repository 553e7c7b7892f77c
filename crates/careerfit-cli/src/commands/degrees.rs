//! The `careerfit degrees` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerfit_core::traits::Catalog;

use super::load_catalog;

pub fn execute(background: Option<String>, catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;

    let degrees = match &background {
        Some(id) => {
            let background = catalog
                .find_background(id)
                .ok_or_else(|| anyhow::anyhow!("unknown educational background '{id}'"))?;
            println!("Degrees open to {} students:", background.name);
            catalog.degrees_for_background(id)
        }
        None => catalog.degrees.iter().collect(),
    };

    if degrees.is_empty() {
        println!("No degrees found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Degree", "Aptitude Test", "Description"]);
    for degree in degrees {
        let test = catalog
            .find_test(&degree.id)
            .map(|t| t.id.as_str())
            .unwrap_or("-");
        table.add_row(vec![
            Cell::new(&degree.id),
            Cell::new(&degree.name),
            Cell::new(test),
            Cell::new(&degree.description),
        ]);
    }
    println!("{table}");

    Ok(())
}
