//! The `careerfit init` command.

use anyhow::Result;

use careerfit_core::catalog::BUILTIN_CATALOG;

pub fn execute() -> Result<()> {
    // Create careerfit.toml
    if std::path::Path::new("careerfit.toml").exists() {
        println!("careerfit.toml already exists, skipping.");
    } else {
        std::fs::write("careerfit.toml", SAMPLE_CONFIG)?;
        println!("Created careerfit.toml");
    }

    // Copy the built-in catalog so it can be edited
    std::fs::create_dir_all("catalog")?;
    let catalog_path = std::path::Path::new("catalog/reference.toml");
    if catalog_path.exists() {
        println!("catalog/reference.toml already exists, skipping.");
    } else {
        std::fs::write(catalog_path, BUILTIN_CATALOG)?;
        println!("Created catalog/reference.toml");
    }

    println!("\nNext steps:");
    println!("  1. Fill in the [profile] section of careerfit.toml");
    println!("  2. Run: careerfit validate --catalog catalog");
    println!("  3. Run: careerfit questions --degree bscs");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# careerfit configuration

# Catalog file or directory. Remove to use the built-in catalog.
catalog = "catalog"

# Where `careerfit evaluate --output` results are looked up by `careerfit status`.
output_dir = "./careerfit-results"

# Refuse submissions with unanswered questions.
strict_answers = true

[profile]
name = ""
email = ""
city = ""
# educational_background = "ics"
# selected_degree = "bscs"
"#;
