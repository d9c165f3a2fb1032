//! Address collaborators: a regional parser and a component tagger.
//!
//! Both are external to the resolver. Implementations live elsewhere
//! (see `triage-heuristic`); this module only fixes their contracts and
//! how a tagging is turned back into a single address line.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use triage_core::Result;

use crate::span::{Span, SpanKind, SpanProducer};

/// An address found by a regional parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    /// Fully formatted address as the parser renders it.
    pub full_address: String,
    pub country: String,
}

/// Parses complete postal addresses for one country or region.
pub trait AddressParser: Send + Sync {
    fn name(&self) -> &str;

    /// All addresses found in `text`, in narrative order.
    fn parse(&self, text: &str, country: &str) -> Result<Vec<ParsedAddress>>;
}

/// Component labels a tagger may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressComponent {
    AddressNumber,
    StreetNamePreDirectional,
    StreetNamePreType,
    StreetName,
    StreetNamePostType,
    StreetNamePostDirectional,
    OccupancyIdentifier,
    PlaceName,
    StateName,
    ZipCode,
}

/// Components that make up a reassembled street address, in output order.
pub const ASSEMBLY_ORDER: [AddressComponent; 7] = [
    AddressComponent::AddressNumber,
    AddressComponent::StreetNamePreType,
    AddressComponent::StreetName,
    AddressComponent::StreetNamePostType,
    AddressComponent::PlaceName,
    AddressComponent::StateName,
    AddressComponent::ZipCode,
];

/// What the tagger thinks the whole input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    StreetAddress,
    Intersection,
    PoBox,
    Ambiguous,
}

/// Result of tagging a narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedAddress {
    pub address_type: AddressType,
    pub components: Vec<(AddressComponent, String)>,
}

impl TaggedAddress {
    pub fn get(&self, component: AddressComponent) -> Option<&str> {
        self.components
            .iter()
            .find(|(c, _)| *c == component)
            .map(|(_, v)| v.as_str())
    }

    /// Street address line built from the returned components only.
    /// `None` unless the input was tagged as a street address.
    pub fn street_address(&self) -> Option<String> {
        if self.address_type != AddressType::StreetAddress {
            return None;
        }
        let parts: Vec<&str> = ASSEMBLY_ORDER
            .iter()
            .filter_map(|c| self.get(*c))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Labels address components in free text.
///
/// Returns `Error::RepeatedLabel` when the same component is assigned to
/// two non-adjacent stretches of text.
pub trait AddressTagger: Send + Sync {
    fn name(&self) -> &str;

    fn tag(&self, text: &str) -> Result<TaggedAddress>;
}

/// Exposes an [`AddressParser`] as a span producer.
pub struct ParserSpans {
    parser: Arc<dyn AddressParser>,
    country: String,
}

impl ParserSpans {
    pub fn new(parser: Arc<dyn AddressParser>, country: impl Into<String>) -> Self {
        Self {
            parser,
            country: country.into(),
        }
    }
}

impl SpanProducer for ParserSpans {
    fn name(&self) -> &str {
        self.parser.name()
    }

    fn produce(&self, text: &str) -> Result<Vec<Span>> {
        Ok(self
            .parser
            .parse(text, &self.country)?
            .into_iter()
            .map(|a| Span::new(a.full_address, SpanKind::Address))
            .collect())
    }
}

/// Exposes an [`AddressTagger`] as a span producer.
pub struct TaggerSpans {
    tagger: Arc<dyn AddressTagger>,
}

impl TaggerSpans {
    pub fn new(tagger: Arc<dyn AddressTagger>) -> Self {
        Self { tagger }
    }
}

impl SpanProducer for TaggerSpans {
    fn name(&self) -> &str {
        self.tagger.name()
    }

    fn produce(&self, text: &str) -> Result<Vec<Span>> {
        let tagged = self.tagger.tag(text)?;
        Ok(tagged
            .street_address()
            .map(|line| vec![Span::new(line, SpanKind::Address)])
            .unwrap_or_default())
    }
}
