//! Lookup traits for the reference data the engine reads.
//!
//! The engine never reaches for global tables; callers hand it something
//! that implements [`Catalog`], usually a
//! [`ReferenceCatalog`](crate::catalog::ReferenceCatalog).

use crate::model::Test;

/// Read-only access to tests and degree names.
pub trait Catalog: Send + Sync {
    /// Find the aptitude test that evaluates the given degree.
    fn find_test(&self, field_id: &str) -> Option<&Test>;

    /// Resolve a degree id to its display name.
    fn find_degree_name(&self, degree_id: &str) -> Option<&str>;

    /// Resolve a degree id to its display name, falling back to the id.
    fn degree_display_name(&self, degree_id: &str) -> String {
        self.find_degree_name(degree_id)
            .unwrap_or(degree_id)
            .to_string()
    }
}
