//! Keyword signal detectors: urgency, weapons, injuries, witnesses.
//!
//! All matching is case-insensitive substring containment, so "now" also
//! fires inside "know". Each keyword counts at most once.

use std::fmt;

use serde::{Deserialize, Serialize};
use triage_core::{TriageConfig, UrgencyThresholds, WeightedTerm};

/// Urgency tier, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Normal,
    High,
    Critical,
}

impl Urgency {
    /// Tier for a score. Non-decreasing in `score`.
    pub fn from_score(score: u32, thresholds: UrgencyThresholds) -> Self {
        if score >= thresholds.critical {
            Urgency::Critical
        } else if score >= thresholds.high {
            Urgency::High
        } else {
            Urgency::Normal
        }
    }

    pub fn is_elevated(self) -> bool {
        self >= Urgency::High
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Weapon keywords found, in keyword-table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponFinding {
    pub present: bool,
    pub matched_terms: Vec<String>,
}

impl fmt::Display for WeaponFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.present {
            write!(f, "Yes ({})", self.matched_terms.join(", "))
        } else {
            write!(f, "No")
        }
    }
}

/// Keyword tables bound to one config.
#[derive(Debug, Clone)]
pub struct SignalDetector {
    urgency_terms: Vec<WeightedTerm>,
    thresholds: UrgencyThresholds,
    weapon_terms: Vec<String>,
    injury_terms: Vec<String>,
    witness_terms: Vec<String>,
}

impl SignalDetector {
    pub fn new(config: &TriageConfig) -> Self {
        Self {
            urgency_terms: config
                .urgency_terms
                .iter()
                .map(|w| WeightedTerm {
                    term: w.term.to_lowercase(),
                    weight: w.weight,
                })
                .collect(),
            thresholds: config.urgency_thresholds,
            weapon_terms: lowercased(&config.weapon_terms),
            injury_terms: lowercased(&config.injury_terms),
            witness_terms: lowercased(&config.witness_terms),
        }
    }

    /// Sum of weights of the distinct urgency keywords present, saturating
    /// at `u32::MAX`.
    pub fn urgency_score(&self, text: &str) -> u32 {
        let lowered = text.to_lowercase();
        self.urgency_terms
            .iter()
            .filter(|w| lowered.contains(&w.term))
            .fold(0u32, |acc, w| acc.saturating_add(w.weight))
    }

    pub fn urgency(&self, text: &str) -> Urgency {
        Urgency::from_score(self.urgency_score(text), self.thresholds)
    }

    pub fn weapon(&self, text: &str) -> WeaponFinding {
        let matched_terms = matching(&text.to_lowercase(), &self.weapon_terms);
        WeaponFinding {
            present: !matched_terms.is_empty(),
            matched_terms,
        }
    }

    pub fn injury_reported(&self, text: &str) -> bool {
        contains_any(&text.to_lowercase(), &self.injury_terms)
    }

    pub fn witness_present(&self, text: &str) -> bool {
        contains_any(&text.to_lowercase(), &self.witness_terms)
    }
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new(&TriageConfig::default())
    }
}

fn lowercased(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}

fn matching(lowered: &str, terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .filter(|t| lowered.contains(t.as_str()))
        .cloned()
        .collect()
}

fn contains_any(lowered: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| lowered.contains(t.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_weights() {
        let d = SignalDetector::default();
        assert_eq!(d.urgency_score("This is an EMERGENCY"), 3);
        assert_eq!(d.urgency_score("urgent, asap"), 4);
        assert_eq!(d.urgency_score("urgent urgent urgent"), 2);
        assert_eq!(d.urgency_score("quiet evening"), 0);
    }

    #[test]
    fn test_urgency_tiers() {
        let d = SignalDetector::default();
        assert_eq!(d.urgency("Emergency!"), Urgency::Critical);
        assert_eq!(d.urgency("come right now"), Urgency::High);
        assert_eq!(d.urgency("urgent and now"), Urgency::Critical);
        assert_eq!(d.urgency("nothing happening"), Urgency::Normal);
        // substring semantics: "know" contains "now"
        assert_eq!(d.urgency("I know him"), Urgency::High);
    }

    #[test]
    fn test_urgency_monotone_over_subsets() {
        let d = SignalDetector::default();
        let keywords = ["emergency", "immediate", "urgent", "asap", "now"];
        for mask_a in 0u32..32 {
            for mask_b in 0u32..32 {
                if mask_a & mask_b != mask_a {
                    continue;
                }
                let build = |mask: u32| {
                    keywords
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1u32 << *i) != 0)
                        .map(|(_, k)| *k)
                        .collect::<Vec<_>>()
                        .join(" ")
                };
                let (a, b) = (build(mask_a), build(mask_b));
                assert!(d.urgency_score(&b) >= d.urgency_score(&a), "{a:?} vs {b:?}");
                assert!(d.urgency(&b) >= d.urgency(&a));
            }
        }
    }

    #[test]
    fn test_tier_step_function() {
        let t = UrgencyThresholds::default();
        let tiers: Vec<Urgency> = (0..10).map(|s| Urgency::from_score(s, t)).collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(tiers[0], Urgency::Normal);
        assert_eq!(tiers[2], Urgency::High);
        assert_eq!(tiers[3], Urgency::Critical);
    }

    #[test]
    fn test_weapon_case_insensitive_table_order() {
        let d = SignalDetector::default();
        let found = d.weapon("He had a KNIFE and then a Gun");
        assert!(found.present);
        assert_eq!(found.matched_terms, vec!["gun", "knife"]);
        assert_eq!(found.to_string(), "Yes (gun, knife)");

        // "gunfire" also contains "gun"
        let fire = d.weapon("we heard gunfire");
        assert_eq!(fire.matched_terms, vec!["gun", "gunfire"]);

        let none = d.weapon("a quiet street");
        assert!(!none.present);
        assert_eq!(none.to_string(), "No");
    }

    #[test]
    fn test_injury_and_witness() {
        let d = SignalDetector::default();
        assert!(d.injury_reported("she was BLEEDING"));
        assert!(!d.injury_reported("all fine"));
        assert!(d.witness_present("Witnesses saw it"));
        assert!(!d.witness_present("nobody saw"));
    }

    #[test]
    fn test_huge_weights_saturate() {
        let mut config = TriageConfig::default();
        config.urgency_terms = vec![WeightedTerm::new("fire", u32::MAX), WeightedTerm::new("help", 1)];
        config.validate().unwrap();
        let d = SignalDetector::new(&config);
        assert_eq!(d.urgency_score("fire, help!"), u32::MAX);
        assert_eq!(d.urgency("fire, help!"), Urgency::Critical);
    }

    #[test]
    fn test_custom_tables() {
        let mut config = TriageConfig::default();
        config.weapon_terms = vec!["Machete".into()];
        let d = SignalDetector::new(&config);
        assert_eq!(d.weapon("a machete").matched_terms, vec!["machete"]);
        assert!(!d.weapon("a gun").present);
    }
}
