//! In-memory reference catalog.
//!
//! Holds the educational backgrounds, degrees, aptitude tests, and
//! universities a deployment ships with, and answers the lookups the
//! profile flow and the engine need.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::classifier::Tier;
use crate::model::{Degree, EducationalBackground, ProgramListing, Test, University};
use crate::parser::parse_catalog_str;
use crate::traits::Catalog;

/// TOML source of [`ReferenceCatalog::builtin`].
pub const BUILTIN_CATALOG: &str = include_str!("../data/reference.toml");

/// Reference data for backgrounds, degrees, tests, and universities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    #[serde(default)]
    pub backgrounds: Vec<EducationalBackground>,
    #[serde(default)]
    pub degrees: Vec<Degree>,
    #[serde(default)]
    pub tests: Vec<Test>,
    #[serde(default)]
    pub universities: Vec<University>,
}

impl ReferenceCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        parse_catalog_str(BUILTIN_CATALOG, Path::new("<builtin>"))
    }

    pub fn find_background(&self, id: &str) -> Option<&EducationalBackground> {
        self.backgrounds.iter().find(|b| b.id == id)
    }

    pub fn find_degree(&self, id: &str) -> Option<&Degree> {
        self.degrees.iter().find(|d| d.id == id)
    }

    pub fn find_test_by_id(&self, id: &str) -> Option<&Test> {
        self.tests.iter().find(|t| t.id == id)
    }

    /// Degrees open to students with the given background, in catalog order.
    pub fn degrees_for_background(&self, background_id: &str) -> Vec<&Degree> {
        self.degrees
            .iter()
            .filter(|d| d.accepts(background_id))
            .collect()
    }

    /// Programs granting `degree_id` at universities in `city`.
    ///
    /// Cities are compared case-insensitively.
    pub fn programs_in_city(&self, city: &str, degree_id: &str) -> Vec<ProgramListing> {
        let city = city.trim().to_lowercase();
        self.universities
            .iter()
            .filter(|u| u.city.to_lowercase() == city)
            .flat_map(|u| {
                u.programs
                    .iter()
                    .filter(|p| p.degree_id == degree_id)
                    .map(|p| ProgramListing {
                        university: u.name.clone(),
                        city: u.city.clone(),
                        program: p.clone(),
                    })
            })
            .collect()
    }

    /// Programs worth showing after a test: only for medium or high tiers.
    pub fn recommended_programs(
        &self,
        city: &str,
        degree_id: &str,
        tier: Tier,
    ) -> Vec<ProgramListing> {
        if !tier.is_fit() {
            return Vec::new();
        }
        self.programs_in_city(city, degree_id)
    }

    /// Append another catalog's records.
    pub fn merge(&mut self, other: ReferenceCatalog) {
        self.backgrounds.extend(other.backgrounds);
        self.degrees.extend(other.degrees);
        self.tests.extend(other.tests);
        self.universities.extend(other.universities);
    }

    pub fn is_empty(&self) -> bool {
        self.backgrounds.is_empty()
            && self.degrees.is_empty()
            && self.tests.is_empty()
            && self.universities.is_empty()
    }
}

impl Catalog for ReferenceCatalog {
    fn find_test(&self, field_id: &str) -> Option<&Test> {
        self.tests.iter().find(|t| t.for_degree == field_id)
    }

    fn find_degree_name(&self, degree_id: &str) -> Option<&str> {
        self.find_degree(degree_id).map(|d| d.name.as_str())
    }
}
