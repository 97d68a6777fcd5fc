//! A single stocked product

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use super::error::ShopError;

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub product_number: String,
    pub name: String,
    /// Price of one vendor unit as bought from the supplier
    pub unit_price: Decimal,
    /// Purchasing denomination, e.g. "4/1 GAL"
    pub vendor_unit: String,
    /// Derived from `unit_price` and `vendor_unit`
    pub price_per_unit: Decimal,
    /// Never negative
    pub stock: Decimal,
}

impl InventoryItem {
    pub fn new(product_number: &str, name: &str, unit_price: Decimal, vendor_unit: &str) -> Self {
        Self {
            product_number: product_number.to_string(),
            name: name.to_string(),
            unit_price,
            vendor_unit: vendor_unit.to_string(),
            price_per_unit: price_per_unit(unit_price, vendor_unit),
            stock: Decimal::ZERO,
        }
    }

    /// Build an item from a textual price such as "$24.99"
    pub fn parse(
        product_number: &str,
        name: &str,
        unit_price: &str,
        vendor_unit: &str,
    ) -> Result<Self, ShopError> {
        let price = parse_price(unit_price)
            .ok_or_else(|| ShopError::CorruptSave(format!("bad price {unit_price:?}")))?;
        Ok(Self::new(product_number, name, price, vendor_unit))
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product Number: {}, {} - ${:.2} per {} (${:.3} per unit, Stock: {:.2} {})",
            self.product_number,
            self.name,
            self.unit_price,
            self.vendor_unit,
            self.price_per_unit,
            self.stock,
            self.vendor_unit
        )
    }
}

/// Parse a price with an optional leading '$'
pub fn parse_price(text: &str) -> Option<Decimal> {
    let cleaned = text.trim().replace('$', "");
    Decimal::from_str(cleaned.trim()).ok()
}

/// Price of one recipe unit.
///
/// "4/1 GAL" means four units of one gallon each, so the price is split over
/// four gallons. Anything that isn't two slash-separated parts with a number
/// in each leaves the vendor price unchanged.
pub fn price_per_unit(unit_price: Decimal, vendor_unit: &str) -> Decimal {
    let parts: Vec<&str> = vendor_unit.split('/').collect();
    if parts.len() != 2 {
        return unit_price;
    }

    let num_units = match Decimal::from_str(parts[0].trim()) {
        Ok(n) => n,
        Err(_) => return unit_price,
    };
    let unit_quantity = match leading_number(parts[1]) {
        Some(q) => q,
        None => return unit_price,
    };

    num_units
        .checked_mul(unit_quantity)
        .and_then(|total| unit_price.checked_div(total))
        .unwrap_or(unit_price)
}

/// First decimal number appearing in the text, e.g. 1.5 from "1.5 LB"
fn leading_number(text: &str) -> Option<Decimal> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];

    let mut end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    // Take a fractional part only when a digit follows the point
    if rest[end..].starts_with('.') {
        let fraction = &rest[end + 1..];
        let digits = fraction
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(fraction.len());
        if digits > 0 {
            end += 1 + digits;
        }
    }

    Decimal::from_str(&rest[..end]).ok()
}
