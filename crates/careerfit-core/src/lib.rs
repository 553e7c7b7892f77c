//! Aptitude evaluation engine, catalog, and data model for careerfit.
//!
//! This crate defines the reference data model, the catalog lookups the
//! engine depends on, and the scoring pipeline that turns a completed
//! aptitude test into an evaluation with a tier, strengths, weaknesses,
//! and alternative degree suggestions.

pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod model;
pub mod narrative;
pub mod parser;
pub mod profile;
pub mod report;
pub mod results;
pub mod scoring;
pub mod traits;
