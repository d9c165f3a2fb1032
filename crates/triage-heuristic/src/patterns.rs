//! Pattern fragments shared by the NER and address heuristics.

/// US street suffixes, long form before abbreviation so alternation prefers it.
pub const STREET_TYPES: &str = "Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|\
Court|Ct|Way|Place|Pl|Terrace|Ter|Highway|Hwy|Parkway|Pkwy|Circle|Cir|Square|Sq";

pub const MONTHS: &str = "January|February|March|April|May|June|July|August|September|\
October|November|December|Jan|Feb|Mar|Apr|Jun|Jul|Aug|Sept|Sep|Oct|Nov|Dec";

pub const WEEKDAYS: &str = "Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday";

/// Weekday abbreviations, longest first.
pub const WEEKDAY_ABBREVS: &str = "Mon|Tues|Tue|Wed|Thurs|Thur|Thu|Fri|Sat|Sun";

/// Capitalized words that start a place phrase but name a time instead.
pub fn is_calendar_word(word: &str) -> bool {
    MONTHS.split('|').chain(WEEKDAYS.split('|')).any(|w| w == word)
}
