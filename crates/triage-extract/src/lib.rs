//! Triage Extract: turns a narrative plus entity spans into an insight bundle.
//!
//! Resolvers and detectors are pure functions over the narrative and the
//! spans already fetched from the entity collaborators. Nothing here loads
//! a model; collaborators arrive as trait objects.

pub mod address;
pub mod bundle;
pub mod location;
pub mod signals;
pub mod span;
pub mod suspect;
pub mod temporal;

pub use address::{
    AddressComponent, AddressParser, AddressTagger, AddressType, ParsedAddress, ParserSpans,
    TaggedAddress, TaggerSpans,
};
pub use bundle::{InsightBundle, InsightExtractor};
pub use location::{AddressStrategy, LocationResolver};
pub use signals::{SignalDetector, Urgency, WeaponFinding};
pub use span::{EntitySourceAdapter, Span, SpanKind, SpanProducer};
pub use suspect::extract_suspect_description;
pub use temporal::{DateNormalizer, TemporalResolver};
