//! Location cascade.
//!
//! Address strategies run in precision order (entity model, formal parser,
//! heuristic tagger) and the first hit wins. Only when all of them miss do
//! generic place entities get a look, then the sentinel.

use std::sync::Arc;

use tracing::debug;
use triage_core::{Error, NOT_FOUND};

use crate::address::{AddressParser, AddressTagger};
use crate::span::{first_of_kind, Span, SpanKind};

/// One way of pulling an address out of a narrative.
pub trait AddressStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn attempt(&self, text: &str, spans: &[Span]) -> Option<String>;
}

/// Stage 1: first ADDRESS span, verbatim.
pub struct EntityAddress;

impl AddressStrategy for EntityAddress {
    fn name(&self) -> &'static str {
        "entity"
    }

    fn attempt(&self, _text: &str, spans: &[Span]) -> Option<String> {
        first_of_kind(spans, SpanKind::Address).map(|s| s.text.clone())
    }
}

/// Stage 2: regional parser, first address's full form.
pub struct ParsedAddressStrategy {
    parser: Arc<dyn AddressParser>,
    country: String,
}

impl ParsedAddressStrategy {
    pub fn new(parser: Arc<dyn AddressParser>, country: impl Into<String>) -> Self {
        Self {
            parser,
            country: country.into(),
        }
    }
}

impl AddressStrategy for ParsedAddressStrategy {
    fn name(&self) -> &'static str {
        "parser"
    }

    fn attempt(&self, text: &str, _spans: &[Span]) -> Option<String> {
        match self.parser.parse(text, &self.country) {
            Ok(found) => found.into_iter().next().map(|a| a.full_address),
            Err(e) => {
                debug!("Address parser {} failed: {}", self.parser.name(), e);
                None
            }
        }
    }
}

/// Stage 3: tagger, reassembled from the components it returned.
pub struct TaggedAddressStrategy {
    tagger: Arc<dyn AddressTagger>,
}

impl TaggedAddressStrategy {
    pub fn new(tagger: Arc<dyn AddressTagger>) -> Self {
        Self { tagger }
    }
}

impl AddressStrategy for TaggedAddressStrategy {
    fn name(&self) -> &'static str {
        "tagger"
    }

    fn attempt(&self, text: &str, _spans: &[Span]) -> Option<String> {
        match self.tagger.tag(text) {
            Ok(tagged) => tagged.street_address(),
            Err(Error::RepeatedLabel(label)) => {
                debug!("Tagger {} saw repeated label {}", self.tagger.name(), label);
                None
            }
            Err(e) => {
                debug!("Tagger {} failed: {}", self.tagger.name(), e);
                None
            }
        }
    }
}

/// Resolves the single best location string for a narrative.
pub struct LocationResolver {
    strategies: Vec<Box<dyn AddressStrategy>>,
}

impl LocationResolver {
    /// Resolver with an explicit strategy list, tried in order.
    pub fn new(strategies: Vec<Box<dyn AddressStrategy>>) -> Self {
        Self { strategies }
    }

    /// Standard cascade: entity spans, then parser, then tagger.
    pub fn standard(
        parser: Arc<dyn AddressParser>,
        tagger: Arc<dyn AddressTagger>,
        country: &str,
    ) -> Self {
        Self::new(vec![
            Box::new(EntityAddress),
            Box::new(ParsedAddressStrategy::new(parser, country)),
            Box::new(TaggedAddressStrategy::new(tagger)),
        ])
    }

    /// Best address if any strategy finds one.
    pub fn best_address(&self, text: &str, spans: &[Span]) -> Option<String> {
        self.strategies.iter().find_map(|strategy| {
            let found = strategy.attempt(text, spans);
            if found.is_some() {
                debug!("Location resolved by {} strategy", strategy.name());
            }
            found
        })
    }

    /// Address, else first place entity, else the sentinel.
    pub fn resolve(&self, text: &str, spans: &[Span]) -> String {
        if let Some(address) = self.best_address(text, spans) {
            return address;
        }
        match first_of_kind(spans, SpanKind::Location) {
            Some(place) => {
                debug!("Location resolved by place entity");
                place.text.clone()
            }
            None => NOT_FOUND.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{AddressComponent, AddressType, ParsedAddress, TaggedAddress};
    use triage_core::Result;

    struct StubParser(Vec<&'static str>);

    impl AddressParser for StubParser {
        fn name(&self) -> &str {
            "stub-parser"
        }
        fn parse(&self, _text: &str, country: &str) -> Result<Vec<ParsedAddress>> {
            Ok(self
                .0
                .iter()
                .map(|a| ParsedAddress {
                    full_address: a.to_string(),
                    country: country.to_string(),
                })
                .collect())
        }
    }

    enum StubTagger {
        Street,
        Repeated,
        Intersection,
    }

    impl AddressTagger for StubTagger {
        fn name(&self) -> &str {
            "stub-tagger"
        }
        fn tag(&self, _text: &str) -> Result<TaggedAddress> {
            match self {
                StubTagger::Street => Ok(TaggedAddress {
                    address_type: AddressType::StreetAddress,
                    components: vec![
                        (AddressComponent::AddressNumber, "42".into()),
                        (AddressComponent::StreetName, "Elm".into()),
                        (AddressComponent::StreetNamePostType, "Ave".into()),
                    ],
                }),
                StubTagger::Intersection => Ok(TaggedAddress {
                    address_type: AddressType::Intersection,
                    components: vec![(AddressComponent::StreetName, "Elm".into())],
                }),
                StubTagger::Repeated => Err(Error::RepeatedLabel("StreetName".into())),
            }
        }
    }

    fn resolver(parser: Vec<&'static str>, tagger: StubTagger) -> LocationResolver {
        LocationResolver::standard(Arc::new(StubParser(parser)), Arc::new(tagger), "US")
    }

    #[test]
    fn test_address_span_beats_everything() {
        let spans = vec![
            Span::new("Central Park", SpanKind::Location),
            Span::new("5 Pine Rd", SpanKind::Address),
        ];
        let r = resolver(vec!["1 Parser Way"], StubTagger::Street);
        assert_eq!(r.resolve("text", &spans), "5 Pine Rd");
    }

    #[test]
    fn test_parser_used_before_tagger() {
        let r = resolver(vec!["1 Parser Way, Austin, TX 78701", "2 Other St"], StubTagger::Street);
        assert_eq!(r.resolve("text", &[]), "1 Parser Way, Austin, TX 78701");
    }

    #[test]
    fn test_tagger_reassembles_components() {
        let r = resolver(vec![], StubTagger::Street);
        assert_eq!(r.resolve("text", &[]), "42 Elm Ave");
    }

    #[test]
    fn test_repeated_label_falls_through_to_place() {
        let spans = vec![Span::new("Springfield", SpanKind::Location)];
        let r = resolver(vec![], StubTagger::Repeated);
        assert_eq!(r.resolve("text", &spans), "Springfield");
    }

    #[test]
    fn test_nothing_found() {
        let spans = vec![Span::new("yesterday", SpanKind::DateTime)];
        let r = resolver(vec![], StubTagger::Intersection);
        assert_eq!(r.resolve("text", &spans), NOT_FOUND);
        assert_eq!(r.best_address("text", &spans), None);
    }

    #[test]
    fn test_custom_strategy_list() {
        let r = LocationResolver::new(vec![]);
        let spans = vec![Span::new("9 Birch Ln", SpanKind::Address)];
        assert_eq!(r.resolve("text", &spans), NOT_FOUND);
    }
}
