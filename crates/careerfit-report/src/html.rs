//! HTML results page generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::{Context, Result};
use std::path::Path;

use careerfit_core::classifier::Tier;
use careerfit_core::model::ProgramListing;
use careerfit_core::report::Submission;
use careerfit_core::scoring::{TraitScores, MAX_CONTRIBUTION};

/// Everything shown on a results page.
#[derive(Debug, Clone)]
pub struct ResultsPage<'a> {
    pub submission: &'a Submission,
    /// Display name of the evaluated degree.
    pub degree_name: &'a str,
    /// Programs near the student, already filtered by tier.
    pub programs: &'a [ProgramListing],
}

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn tier_class(tier: Tier) -> &'static str {
    match tier {
        Tier::High => "high",
        Tier::Medium => "medium",
        Tier::Low => "low",
    }
}

fn push_list(html: &mut String, title: &str, class: &str, items: &[String], empty: &str) {
    html.push_str(&format!("<div class=\"{class}\">\n<h3>{title}</h3>\n"));
    if items.is_empty() {
        html.push_str(&format!("<p class=\"meta\">{empty}</p>\n"));
    } else {
        html.push_str("<ul>\n");
        for item in items {
            html.push_str(&format!("<li>{}</li>\n", html_escape(item)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</div>\n");
}

/// Generate an HTML results page.
pub fn generate_html(page: &ResultsPage<'_>) -> String {
    let submission = page.submission;
    let result = &submission.result;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>Aptitude results: {}</title>\n",
        html_escape(page.degree_name)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Your Test Results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Aptitude for <strong>{}</strong> | test {} | {}</p>\n",
        html_escape(page.degree_name),
        html_escape(&submission.test_id),
        submission.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Overall aptitude
    let class = tier_class(result.tier);
    html.push_str("<section class=\"overall\">\n");
    html.push_str(&format!(
        "<h2>Overall Aptitude <span class=\"badge {class}\">{}</span></h2>\n",
        capitalize(&result.tier.to_string())
    ));
    html.push_str(&format!(
        "<p>Score <strong>{}</strong></p>\n",
        result.display_score()
    ));
    html.push_str(&format!(
        "<div class=\"bar\"><div class=\"fill {class}\" style=\"width: {:.1}%\"></div></div>\n",
        result.percentage.clamp(0.0, 100.0)
    ));
    html.push_str(&generate_trait_chart(&result.breakdown.traits));
    html.push_str("</section>\n");

    // Strengths and weaknesses
    html.push_str("<section class=\"traits\">\n");
    push_list(
        &mut html,
        "Strengths",
        "strengths",
        &result.strengths,
        "No particular strengths identified.",
    );
    push_list(
        &mut html,
        "Areas for Improvement",
        "weaknesses",
        &result.weaknesses,
        "No significant weaknesses identified.",
    );
    html.push_str("</section>\n");

    // Recommendation
    html.push_str("<section class=\"recommendation\">\n");
    html.push_str("<h2>Recommendation</h2>\n");
    html.push_str(&format!("<p>{}</p>\n", html_escape(&result.recommendation)));
    if !result.alternative_degrees.is_empty() {
        html.push_str("<h3>Alternative Degree Options</h3>\n<ul>\n");
        for degree in &result.alternative_degrees {
            html.push_str(&format!("<li>{}</li>\n", html_escape(degree)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</section>\n");

    // Programs near the student
    if !page.programs.is_empty() {
        html.push_str("<section class=\"programs\">\n");
        html.push_str("<h2>Recommended Programs in Your City</h2>\n");
        html.push_str("<table>\n");
        html.push_str("<thead><tr><th>University</th><th>Program</th><th>Duration</th><th>Admission Criteria</th></tr></thead>\n");
        html.push_str("<tbody>\n");
        for listing in page.programs {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(&listing.university),
                html_escape(&listing.program.program_name),
                html_escape(&listing.program.duration),
                html_escape(listing.program.admission_criteria.as_deref().unwrap_or("-")),
            ));
        }
        html.push_str("</tbody></table>\n");
        html.push_str("</section>\n");
    }

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(submission).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML results page to a file.
pub fn write_html_report(page: &ResultsPage<'_>, path: &Path) -> Result<()> {
    let html = generate_html(page);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn generate_trait_chart(traits: &TraitScores) -> String {
    let bar_height = 24;
    let max_width = 300;
    let padding = 8;
    let label_width = 160;

    let rows: Vec<_> = traits.iter().collect();
    let total_height = rows.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (aptitude, contribution)) in rows.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = usize::from(*contribution) * max_width / usize::from(MAX_CONTRIBUTION);

        let color = match *contribution {
            2 => "#22c55e",
            1 => "#eab308",
            _ => "#ef4444",
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&aptitude.to_string())
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}/{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            contribution,
            MAX_CONTRIBUTION
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --high: #22c55e; --medium: #eab308; --low: #ef4444; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 56rem; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.badge { color: #fff; border-radius: 9999px; padding: 0.2rem 0.9rem; font-size: 1rem; vertical-align: middle; }
.badge.high, .fill.high { background: var(--high); }
.badge.medium, .fill.medium { background: var(--medium); }
.badge.low, .fill.low { background: var(--low); }
.bar { width: 100%; height: 0.6rem; background: var(--border); border-radius: 9999px; }
.fill { height: 100%; border-radius: 9999px; }
.traits { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;
