//! Strengths, weaknesses, recommendation text, and alternative degrees.

use serde::{Deserialize, Serialize};

use crate::classifier::Tier;
use crate::model::Test;
use crate::scoring::{AptitudeTrait, TraitScores};

/// Degree suggested to low-tier students weak in logic or mathematics.
pub const BUSINESS_DEGREE: &str = "bba";
/// Degree suggested to every other low-tier student.
pub const IT_DEGREE: &str = "bsit";

/// Related degrees offered to medium-tier students, keyed by target degree.
const ADJACENT_DEGREES: &[(&str, &[&str])] = &[
    ("bscs", &["bsit", "bsse"]),
    ("bsse", &["bsit", "bscs"]),
];

/// Related degrees for a target degree; empty when none are listed.
pub fn adjacent_degrees(degree_id: &str) -> &'static [&'static str] {
    ADJACENT_DEGREES
        .iter()
        .find(|(id, _)| *id == degree_id)
        .map(|(_, related)| *related)
        .unwrap_or(&[])
}

/// Narrative part of an evaluation. Alternatives are degree ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: String,
    pub alternatives: Vec<String>,
}

/// Split the fixed trait set into strong (contribution >= 1) and weak traits.
pub fn partition_traits(traits: &TraitScores) -> (Vec<AptitudeTrait>, Vec<AptitudeTrait>) {
    let mut strong = Vec::new();
    let mut weak = Vec::new();
    for (aptitude, contribution) in traits.iter() {
        if contribution >= 1 {
            strong.push(aptitude);
        } else {
            weak.push(aptitude);
        }
    }
    (strong, weak)
}

/// Recommendation text for a tier, naming the test's subject.
pub fn recommendation(tier: Tier, subject: &str) -> String {
    match tier {
        Tier::High => format!(
            "Based on your test results, you show a strong aptitude for {subject}. \
             You should consider pursuing this field as it aligns well with your strengths."
        ),
        Tier::Medium => format!(
            "You show moderate aptitude for {subject}. You can succeed in this field \
             with dedicated effort and focus on improving your weaker areas."
        ),
        Tier::Low => format!(
            "Your test results suggest that {subject} may not be the best fit for your \
             natural aptitudes. Consider exploring alternative fields that better match \
             your strengths."
        ),
    }
}

/// Alternative degree ids for a tier.
///
/// High tier gets none, medium tier gets the adjacency table's entries, and
/// low tier gets exactly one: business when logic or mathematics is weak,
/// information technology otherwise.
pub fn alternatives(tier: Tier, degree_id: &str, weaknesses: &[AptitudeTrait]) -> Vec<String> {
    match tier {
        Tier::High => Vec::new(),
        Tier::Medium => adjacent_degrees(degree_id)
            .iter()
            .map(|id| id.to_string())
            .collect(),
        Tier::Low => {
            let weak_in_reasoning = weaknesses
                .iter()
                .any(|t| matches!(t, AptitudeTrait::Logical | AptitudeTrait::Mathematical));
            let pick = if weak_in_reasoning {
                BUSINESS_DEGREE
            } else {
                IT_DEGREE
            };
            vec![pick.to_string()]
        }
    }
}

/// Build the narrative for a classified test.
pub fn build_narrative(traits: &TraitScores, tier: Tier, test: &Test) -> Narrative {
    let (strong, weak) = partition_traits(traits);

    Narrative {
        strengths: strong.iter().map(|t| t.strength_label().to_string()).collect(),
        weaknesses: weak.iter().map(|t| t.weakness_label().to_string()).collect(),
        recommendation: recommendation(tier, test.subject()),
        alternatives: alternatives(tier, &test.for_degree, &weak),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_for(degree: &str) -> Test {
        Test {
            id: format!("{degree}-aptitude"),
            name: "Computer Science Aptitude Test".into(),
            description: String::new(),
            for_degree: degree.into(),
            questions: vec![],
        }
    }

    fn scores(values: &[(AptitudeTrait, u8)]) -> TraitScores {
        let mut s = TraitScores::default();
        for (t, v) in values {
            s.set(*t, *v);
        }
        s
    }

    #[test]
    fn strengths_and_weaknesses_are_exhaustive() {
        let traits = scores(&[
            (AptitudeTrait::ProblemSolving, 2),
            (AptitudeTrait::Logical, 1),
            (AptitudeTrait::Teamwork, 2),
        ]);
        let n = build_narrative(&traits, Tier::High, &test_for("bscs"));
        assert_eq!(
            n.strengths,
            vec![
                "Problem-solving approach",
                "Logical reasoning",
                "Teamwork and collaboration"
            ]
        );
        assert_eq!(
            n.weaknesses,
            vec![
                "Mathematical aptitude",
                "Persistence when facing challenges",
                "Attention to detail"
            ]
        );
        assert_eq!(n.strengths.len() + n.weaknesses.len(), 6);
    }

    #[test]
    fn high_tier_has_no_alternatives() {
        let n = build_narrative(&TraitScores::default(), Tier::High, &test_for("bscs"));
        assert!(n.alternatives.is_empty());
        assert!(n.recommendation.contains("strong aptitude for Computer Science."));
    }

    #[test]
    fn medium_tier_uses_adjacency_table() {
        let traits = TraitScores::default();
        let cs = build_narrative(&traits, Tier::Medium, &test_for("bscs"));
        assert_eq!(cs.alternatives, vec!["bsit", "bsse"]);
        assert!(cs.recommendation.starts_with("You show moderate aptitude for Computer Science."));

        let se = build_narrative(&traits, Tier::Medium, &test_for("bsse"));
        assert_eq!(se.alternatives, vec!["bsit", "bscs"]);

        let mbbs = build_narrative(&traits, Tier::Medium, &test_for("mbbs"));
        assert!(mbbs.alternatives.is_empty());
    }

    #[test]
    fn low_tier_weak_reasoning_suggests_business() {
        let traits = scores(&[(AptitudeTrait::Logical, 2)]);
        let n = build_narrative(&traits, Tier::Low, &test_for("bscs"));
        // Mathematical is still weak.
        assert_eq!(n.alternatives, vec![BUSINESS_DEGREE]);
        assert!(n.recommendation.contains("may not be the best fit"));
    }

    #[test]
    fn low_tier_strong_reasoning_suggests_it() {
        let traits = scores(&[
            (AptitudeTrait::Logical, 1),
            (AptitudeTrait::Mathematical, 2),
        ]);
        let n = build_narrative(&traits, Tier::Low, &test_for("bscs"));
        assert_eq!(n.alternatives, vec![IT_DEGREE]);
    }
}
