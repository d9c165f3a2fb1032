//! Keyword tables, thresholds and the category set.
//!
//! Everything the detectors and the rule engine treat as tunable lives here
//! so it can be swapped from a JSON file without touching resolver logic.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "TRIAGE_CONFIG";

/// A keyword and the urgency weight it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedTerm {
    pub term: String,
    pub weight: u32,
}

impl WeightedTerm {
    pub fn new(term: &str, weight: u32) -> Self {
        Self {
            term: term.to_string(),
            weight,
        }
    }
}

/// Score cutoffs for the urgency tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyThresholds {
    /// Minimum score for `Critical`.
    pub critical: u32,
    /// Minimum score for `High`.
    pub high: u32,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self { critical: 3, high: 1 }
    }
}

/// One complaint category and the keywords the heuristic classifier counts for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn category(label: &str, keywords: &[&str]) -> CategorySpec {
    CategorySpec {
        label: label.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Top-level triage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Urgency keywords in table order.
    pub urgency_terms: Vec<WeightedTerm>,
    pub urgency_thresholds: UrgencyThresholds,
    pub weapon_terms: Vec<String>,
    pub injury_terms: Vec<String>,
    pub witness_terms: Vec<String>,
    /// Closed category set, in classifier preference order.
    pub categories: Vec<CategorySpec>,
    /// Category that triggers digital evidence preservation.
    pub cyber_category: String,
    /// Region the address parser is configured for.
    pub default_country: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            urgency_terms: vec![
                WeightedTerm::new("emergency", 3),
                WeightedTerm::new("immediate", 2),
                WeightedTerm::new("urgent", 2),
                WeightedTerm::new("asap", 2),
                WeightedTerm::new("now", 1),
            ],
            urgency_thresholds: UrgencyThresholds::default(),
            weapon_terms: terms(&["gun", "knife", "rifle", "pistol", "weapon", "shoot", "gunfire"]),
            injury_terms: terms(&["injured", "hurt", "wounded", "bleeding"]),
            witness_terms: terms(&["witness"]),
            categories: default_categories(),
            cyber_category: "Cybercrime".into(),
            default_country: "US".into(),
        }
    }
}

fn default_categories() -> Vec<CategorySpec> {
    vec![
        category("Robbery", &["robbed", "robbery", "holdup", "mugged", "stole from"]),
        category("Assault", &["assault", "attacked", "punched", "beat up", "hit me"]),
        category("Cybercrime", &["hacked", "phishing", "malware", "ransomware", "account", "password"]),
        category("Domestic Violence", &["husband", "wife", "partner", "boyfriend", "girlfriend", "domestic"]),
        category("Vandalism", &["vandal", "graffiti", "smashed", "spray paint", "damaged"]),
        category("Theft", &["stolen", "theft", "stole", "shoplift", "missing wallet"]),
        category("Kidnapping", &["kidnap", "abducted", "taken away", "ransom"]),
        category("Harassment/Stalking", &["harass", "stalk", "following me", "threatening messages"]),
        category("Drug-Related", &["drug", "cocaine", "heroin", "dealer", "overdose", "meth"]),
        category("Traffic Violation", &["speeding", "ran a red", "hit and run", "drunk driver", "traffic"]),
        category("Murder / Homicide", &["murder", "killed", "homicide", "dead body", "shot dead"]),
        category("Missing Person", &["missing", "disappeared", "hasn't come home", "last seen"]),
        category("Extortion / Blackmail", &["blackmail", "extort", "pay or else"]),
        category("Sexual Offense", &["sexual", "rape", "groped", "indecent"]),
        category("Child Abuse", &["child abuse", "abusing the child", "neglected child"]),
        category("Terrorism / Bomb Threat", &["bomb", "explosive", "terror", "detonate"]),
        category("Financial Fraud / Scam", &["scam", "fraud", "wire transfer", "fake invoice", "credit card"]),
        category("Illegal Possession", &["possession", "unlicensed", "illegal firearm", "contraband"]),
        category("Noise Disturbance", &["noise", "loud music", "party", "shouting"]),
        category("Animal Cruelty", &["animal", "dog", "cat", "cruelty", "abandoned pet"]),
    ]
}

impl TriageConfig {
    /// Load config from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: TriageConfig = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        info!("Loaded triage config from {}", path.display());
        Ok(config)
    }

    /// Load from the file named by `TRIAGE_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(Path::new(path.trim())),
            _ => Ok(Self::default()),
        }
    }

    /// Reject configurations the rule engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::Config("category set is empty".into()));
        }
        if !self.categories.iter().any(|c| c.label == self.cyber_category) {
            return Err(Error::Config(format!(
                "cyber category '{}' is not in the category set",
                self.cyber_category
            )));
        }
        let t = self.urgency_thresholds;
        if t.high == 0 || t.critical < t.high {
            return Err(Error::Config(format!(
                "urgency thresholds must satisfy 0 < high <= critical (high={}, critical={})",
                t.high, t.critical
            )));
        }
        Ok(())
    }

    /// Category labels in preference order.
    pub fn category_labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }
}
