//! HTML results pages for careerfit evaluations.

pub mod html;

pub use html::{generate_html, write_html_report, ResultsPage};
