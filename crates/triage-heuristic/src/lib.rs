//! Triage Heuristic: regex and keyword implementations of the collaborator traits.
//!
//! These stand in for the NER model, the regional address parser, the
//! address tagger, the date normalizer and the zero-shot classifier so the
//! pipeline runs without any model loaded. Swap any of them for a real
//! backend through the same trait.

pub mod address;
pub mod classify;
pub mod dates;
pub mod ner;
pub mod patterns;

pub use address::{UsAddressParser, UsAddressTagger};
pub use classify::KeywordClassifier;
pub use dates::StrictDateNormalizer;
pub use ner::RegexEntityTagger;
