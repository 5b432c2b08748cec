//! Modifier classification rules
//!
//! Turns one free-text order modifier into a structured label field. The
//! rules form an ordered table; the first matching rule wins, so the table
//! order IS the tie-break policy. In particular the sweetener vocabulary
//! is checked before the flavour vocabulary: "caramel" is a sweetener,
//! never a flavour, even though both vocabularies contain it.
//!
//! Matching is case-insensitive; output values preserve the original
//! casing (suffix rules capitalize the remaining prefix).

use super::vocab::{FLAVOURS, SWEETENERS, TOPPINGS};

/// Where a classified modifier lands on the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Ice,
    Sweetness,
    Alternative,
    Sweetener,
    Flavour,
    Topping,
}

/// How a rule recognizes a modifier
enum Matcher {
    /// Case-insensitive suffix; the value is the capitalized text before it.
    /// The bare keyword ("ice" for " ice") also matches, with an empty value.
    Suffix(&'static str),
    /// Case-insensitive membership; the value is the modifier verbatim
    OneOf(&'static [&'static str]),
}

struct Rule {
    matcher: Matcher,
    slot: Slot,
}

/// The ordered rule table - evaluated top to bottom, first match wins
const RULES: &[Rule] = &[
    Rule {
        matcher: Matcher::Suffix(" ice"),
        slot: Slot::Ice,
    },
    Rule {
        matcher: Matcher::Suffix(" sweetness"),
        slot: Slot::Sweetness,
    },
    Rule {
        matcher: Matcher::Suffix(" milk"),
        slot: Slot::Alternative,
    },
    Rule {
        matcher: Matcher::OneOf(SWEETENERS),
        slot: Slot::Sweetener,
    },
    Rule {
        matcher: Matcher::OneOf(FLAVOURS),
        slot: Slot::Flavour,
    },
    Rule {
        matcher: Matcher::OneOf(TOPPINGS),
        slot: Slot::Topping,
    },
];

/// Outcome of classifying one modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Matched a rule; the slot and its extracted display value
    Slot(Slot, String),
    /// Matched a suffix rule with nothing before the suffix; consumed silently
    Empty,
    /// No rule matched; the modifier surfaces in the label notes
    Unclassified(String),
}

/// Classify one free-text modifier
pub fn classify(modifier: &str) -> Classified {
    let text = modifier.trim();
    let lower = text.to_lowercase();

    for rule in RULES {
        match rule.matcher {
            Matcher::Suffix(suffix) => {
                if let Some(prefix) = strip_suffix_ci(text, suffix) {
                    let value = capitalize(prefix.trim());
                    return if value.is_empty() {
                        Classified::Empty
                    } else {
                        Classified::Slot(rule.slot, value)
                    };
                }
            }
            Matcher::OneOf(words) => {
                if words.contains(&lower.as_str()) {
                    return Classified::Slot(rule.slot, text.to_string());
                }
            }
        }
    }

    Classified::Unclassified(text.to_string())
}

/// Strip a case-insensitive suffix, returning the original-cased prefix
///
/// The bare keyword (the suffix without its leading space) counts as a
/// match with an empty prefix. Suffixes are ASCII, so the comparison is
/// ASCII-case-insensitive and the split is guarded against landing inside
/// a multi-byte character.
fn strip_suffix_ci<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    if text.eq_ignore_ascii_case(suffix.trim_start()) {
        return Some("");
    }
    if text.len() >= suffix.len() && text.is_char_boundary(text.len() - suffix.len()) {
        let (head, tail) = text.split_at(text.len() - suffix.len());
        if tail.eq_ignore_ascii_case(suffix) {
            return Some(head);
        }
    }
    None
}

/// First character uppercased, the rest lowercased
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
