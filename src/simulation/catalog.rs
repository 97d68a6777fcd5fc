//! The menu: which subs exist, what goes in them, sizes and extras
//!
//! Pure data. `Catalog::default()` is the menu the shop ships with; tests and
//! front ends can build their own with the `with_*` builders.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Size ordered when none is given
pub const DEFAULT_SIZE: &str = "REGULAR";

/// Condiments every customer asks for
pub const BASE_EXTRAS: [&str; 7] = [
    "LETTUCE", "ONIONS", "TOMATO", "OIL", "VINEGAR", "OREGANO", "SALT",
];

/// An extra ingredient a customer can request
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraSpec {
    /// Inventory key consumed when the extra goes on the sub
    pub product_number: String,
    /// Chance in [0, 1] that a requested extra is actually added and charged
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    subs: BTreeMap<String, Vec<String>>,
    sizes: BTreeMap<String, Decimal>,
    extras: BTreeMap<String, ExtraSpec>,
    base_extras: Vec<String>,
}

impl Catalog {
    /// An empty menu with the standard base condiments
    pub fn new() -> Self {
        Self {
            subs: BTreeMap::new(),
            sizes: BTreeMap::new(),
            extras: BTreeMap::new(),
            base_extras: BASE_EXTRAS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Add a sub made of the given ingredient product numbers, in order.
    /// A product listed twice is consumed twice.
    pub fn with_sub(mut self, sub_id: &str, ingredients: &[&str]) -> Self {
        self.subs.insert(
            sub_id.to_string(),
            ingredients.iter().map(|i| i.to_string()).collect(),
        );
        self
    }

    pub fn with_size(mut self, name: &str, multiplier: Decimal) -> Self {
        self.sizes.insert(name.to_uppercase(), multiplier);
        self
    }

    pub fn with_extra(mut self, extra_id: &str, product_number: &str, probability: f64) -> Self {
        self.extras.insert(
            extra_id.to_string(),
            ExtraSpec {
                product_number: product_number.to_string(),
                probability: probability.clamp(0.0, 1.0),
            },
        );
        self
    }

    pub fn with_base_extras(mut self, base_extras: &[&str]) -> Self {
        self.base_extras = base_extras.iter().map(|e| e.to_string()).collect();
        self
    }

    /// Pin every extra's inclusion probability, e.g. to 0 to take extras out of play
    pub fn with_all_extra_probabilities(mut self, probability: f64) -> Self {
        for spec in self.extras.values_mut() {
            spec.probability = probability.clamp(0.0, 1.0);
        }
        self
    }

    pub fn recipe(&self, sub_id: &str) -> Option<&[String]> {
        self.subs.get(sub_id).map(Vec::as_slice)
    }

    /// Case-insensitive size lookup
    pub fn size_multiplier(&self, size: &str) -> Option<Decimal> {
        self.sizes.get(&size.to_uppercase()).copied()
    }

    pub fn extra(&self, extra_id: &str) -> Option<&ExtraSpec> {
        self.extras.get(extra_id)
    }

    pub fn sub_ids(&self) -> Vec<&str> {
        self.subs.keys().map(String::as_str).collect()
    }

    pub fn size_names(&self) -> Vec<&str> {
        self.sizes.keys().map(String::as_str).collect()
    }

    pub fn extra_ids(&self) -> Vec<&str> {
        self.extras.keys().map(String::as_str).collect()
    }

    pub fn base_extras(&self) -> &[String] {
        &self.base_extras
    }

    /// Catalog extras outside the base set
    pub fn premium_extras(&self) -> Vec<&str> {
        self.extras
            .keys()
            .filter(|id| !self.base_extras.contains(*id))
            .map(String::as_str)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
            .with_size("MINI", Decimal::new(5, 1))
            .with_size("REGULAR", Decimal::ONE)
            .with_size("GIANT", Decimal::TWO)
            .with_sub("BLT", &["100111", "100109"])
            .with_sub("AMERICAN", &["100102", "100101", "100103"])
            .with_sub("JERSEY_SHORE_FAVORITE", &["100103", "100102", "100106"])
            .with_sub(
                "ORIGINAL_ITALIAN",
                &["100103", "100102", "100116", "100104", "100105", "100106"],
            )
            .with_sub("TURKEY_AND_PROVOLONE", &["100101", "100103"])
            .with_sub("ROAST_BEEF_AND_PROVOLONE", &["100107", "100103"])
            .with_sub("TUNA_FISH", &["100108", "100109"])
            .with_sub("CHICKEN_CLUB", &["100110", "100111", "100103", "100109"])
            .with_extra("LETTUCE", "200201", 0.9)
            .with_extra("ONIONS", "200202", 0.9)
            .with_extra("TOMATO", "200203", 0.9)
            .with_extra("OIL", "200204", 0.9)
            .with_extra("VINEGAR", "200205", 0.9)
            .with_extra("OREGANO", "200206", 0.9)
            .with_extra("SALT", "200207", 0.9)
            .with_extra("JALAPENOS", "200208", 0.4)
            .with_extra("BANANA_PEPPERS", "200209", 0.4)
            .with_extra("PICKLES", "200210", 0.5)
            .with_extra("CHERRY_PEPPER_RELISH", "200211", 0.3)
            .with_extra("EXTRA_CHEESE", "100103", 0.3)
            .with_extra("BACON", "100111", 0.2)
    }
}
