//! Classification vocabularies and the drink code table
//!
//! The three vocabularies drive modifier classification; the code table
//! abbreviates display strings for the narrow sticker. They are defined
//! independently - nothing validates one against the other, so keep them
//! in sync by hand when the menu changes.

use std::collections::HashMap;

/// Modifiers that name a sweetener type
pub(crate) const SWEETENERS: &[&str] = &["honey", "regular", "brown sugar", "caramel"];

/// Modifiers that name a flavour
pub(crate) const FLAVOURS: &[&str] = &[
    "peach",
    "strawberry",
    "mango",
    "tropical",
    "lemon",
    "lime",
    "chocolate",
    "caramel",
    "vanilla",
    "coffee",
    "matcha",
    "fresh matcha",
];

/// Modifiers that name a topping
pub(crate) const TOPPINGS: &[&str] = &[
    "boba",
    "brownsugar boba",
    "peach popping pearls",
    "mango popping pearls",
    "strawberry popping pearls",
    "coconut jelly",
    "fresh fruit",
    "cream",
    "whipped cream",
];

/// Abbreviation table mapping display strings to short printable codes
///
/// The lookup is a total function: unmapped strings come back verbatim.
#[derive(Debug, Clone)]
pub struct DrinkCodes {
    codes: HashMap<&'static str, &'static str>,
}

impl DrinkCodes {
    /// The production QiCha code table
    pub fn standard() -> Self {
        let codes = HashMap::from([
            // Base drinks
            ("Fruit Tea", "Fruit Tea"),
            ("Milk Tea", "Milk Tea"),
            ("Fruit Milk Tea", "Fruit Milk Tea"),
            ("Matcha Latte", "mat lat"),
            ("Fresh Matcha Latte", "MAT lat"),
            // Favourites
            ("Strawberry Matcha", "Str Mat"),
            ("Brown sugar boba", "BsB"),
            // Flavours
            ("Peach", "Peach"),
            ("Mango", "Mango"),
            ("Strawberry", "Straw"),
            ("Passionfruit", "Pas"),
            ("Tropical", "Trop"),
            ("Lemon", "Lemon"),
            ("Lime", "Lime"),
            // Milk flavours
            ("Chocolate", "Choc"),
            ("Caramel", "Car"),
            // Alternatives
            ("Oat Milk", "Oat"),
            ("Fresh Milk", "Fresh"),
            ("Honey", "Honey"),
            ("Brown Sugar", "Bs"),
            // Add-ins
            ("Brownsugar", "Bs"),
            ("Vanilla", "Van"),
            ("Cream", "Cream"),
            ("Whipped cream", "whip"),
            // Toppings
            ("Boba", "Boba"),
            ("Brown Sugar Boba", "BsB"),
            ("Peach Popping Pearls", "Pch p"),
            ("Mango Popping Pearls", "Mgo p"),
            ("Strawberry Popping Pearls", "Str p"),
            ("Coconut Jelly", "CJ"),
            ("Fresh Fruit", "Ff"),
        ]);
        Self { codes }
    }

    /// Look up the printable code for a display string
    ///
    /// Falls back to the input unchanged when no code is mapped.
    pub fn code<'a>(&'a self, name: &'a str) -> &'a str {
        self.codes.get(name).copied().unwrap_or(name)
    }
}

impl Default for DrinkCodes {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_code() {
        let codes = DrinkCodes::standard();
        assert_eq!(codes.code("Peach Popping Pearls"), "Pch p");
        assert_eq!(codes.code("Matcha Latte"), "mat lat");
    }

    #[test]
    fn test_unmapped_falls_back_to_identity() {
        let codes = DrinkCodes::standard();
        assert_eq!(codes.code("Dragonfruit Slush"), "Dragonfruit Slush");
        assert_eq!(codes.code(""), "");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let codes = DrinkCodes::standard();
        // Table keys are canonical-cased; other casings miss and pass through
        assert_eq!(codes.code("boba"), "boba");
        assert_eq!(codes.code("Boba"), "Boba");
    }
}
