//! US address parser and component tagger.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use triage_core::{Error, Result};
use triage_extract::{AddressComponent, AddressParser, AddressTagger, AddressType, ParsedAddress, TaggedAddress};

use crate::patterns::STREET_TYPES;

/// Full postal address: number, street, type, optional unit, city, state, ZIP.
static POSTAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b\d{{1,6}}\s+(?:[NSEW]\.?\s+)?(?:[A-Z][a-z]+\s+){{1,3}}(?:{STREET_TYPES})\b\.?(?:\s+(?:Apt|Suite|Unit|#)\.?\s*\w+)?,?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*,?\s+[A-Z]{{2}}\s+\d{{5}}(?:-\d{{4}})?\b"
    ))
    .unwrap()
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Finds complete US postal addresses.
#[derive(Debug, Clone, Default)]
pub struct UsAddressParser;

impl UsAddressParser {
    pub fn new() -> Self {
        Self
    }
}

impl AddressParser for UsAddressParser {
    fn name(&self) -> &str {
        "us-postal"
    }

    fn parse(&self, text: &str, country: &str) -> Result<Vec<ParsedAddress>> {
        if !country.eq_ignore_ascii_case("US") {
            return Err(Error::collaborator(
                self.name(),
                format!("unsupported country {}", country),
            ));
        }
        Ok(POSTAL_RE
            .find_iter(text)
            .map(|m| ParsedAddress {
                full_address: WHITESPACE_RE.replace_all(m.as_str(), " ").into_owned(),
                country: "US".into(),
            })
            .collect())
    }
}

static STREET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(?P<number>\d{{1,6}})\s+(?:(?P<predir>North|South|East|West|[NSEW])\.?\s+)?(?:(?P<pretype>Route|Highway|Avenue)\s+(?P<pname>\d+|[A-Z][a-z]+)|(?P<name>(?:[A-Z][a-z]+\s+){{0,2}}?[A-Z][a-z]+|\d+(?:st|nd|rd|th))\s+(?P<posttype>{STREET_TYPES})\b\.?)(?:,?\s+(?P<place>[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?))?(?:,?\s+(?P<state>[A-Z]{{2}})\b)?(?:\s+(?P<zip>\d{{5}}))?"
    ))
    .unwrap()
});

const GROUPS: [(&str, AddressComponent); 9] = [
    ("number", AddressComponent::AddressNumber),
    ("predir", AddressComponent::StreetNamePreDirectional),
    ("pretype", AddressComponent::StreetNamePreType),
    ("pname", AddressComponent::StreetName),
    ("name", AddressComponent::StreetName),
    ("posttype", AddressComponent::StreetNamePostType),
    ("place", AddressComponent::PlaceName),
    ("state", AddressComponent::StateName),
    ("zip", AddressComponent::ZipCode),
];

/// Labels street-address components across a whole narrative.
///
/// A candidate needs a street type before or after the name. Two candidates
/// in one narrative is a repeated `AddressNumber`.
#[derive(Debug, Clone, Default)]
pub struct UsAddressTagger;

impl UsAddressTagger {
    pub fn new() -> Self {
        Self
    }

    fn components(cap: &Captures<'_>) -> Vec<(AddressComponent, String)> {
        GROUPS
            .iter()
            .filter_map(|(group, component)| {
                cap.name(group).map(|m| (*component, m.as_str().trim().to_string()))
            })
            .collect()
    }
}

impl AddressTagger for UsAddressTagger {
    fn name(&self) -> &str {
        "us-tagger"
    }

    fn tag(&self, text: &str) -> Result<TaggedAddress> {
        let candidates: Vec<Captures<'_>> = STREET_RE.captures_iter(text).collect();

        match candidates.as_slice() {
            [] => Ok(TaggedAddress {
                address_type: AddressType::Ambiguous,
                components: Vec::new(),
            }),
            [only] => Ok(TaggedAddress {
                address_type: AddressType::StreetAddress,
                components: Self::components(only),
            }),
            _ => Err(Error::RepeatedLabel("AddressNumber".into())),
        }
    }
}
