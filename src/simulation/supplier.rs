//! Supplier price list parsing
//!
//! The list is plain text made of 7-line records:
//!
//! ```text
//! 100109            <- product number (digits only)
//! Mayonnaise        <- name
//! ...
//! ...
//! $24.99            <- price
//! ...
//! 4/1 GAL           <- vendor unit
//! ```
//!
//! Broken records are skipped and parsing carries on.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::Path;

use super::error::ParseSkip;
use super::item::InventoryItem;

const NAME_OFFSET: usize = 1;
const PRICE_OFFSET: usize = 4;
const VENDOR_UNIT_OFFSET: usize = 6;
const RECORD_LINES: usize = 7;

/// Items read from a supplier list plus the records that were dropped
#[derive(Debug, Clone, Default)]
pub struct SupplierList {
    pub items: Vec<InventoryItem>,
    pub skipped: Vec<ParseSkip>,
}

fn is_product_number(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

/// Parse supplier text into inventory items
pub fn parse_supplier_list(data: &str) -> SupplierList {
    let lines: Vec<&str> = data.trim().lines().map(str::trim).collect();
    let mut list = SupplierList::default();

    let mut i = 0;
    while i < lines.len() {
        if !is_product_number(lines[i]) {
            i += 1;
            continue;
        }

        match parse_record(&lines, i) {
            Ok(item) => {
                debug!("Parsed supplier item {} ({})", item.product_number, item.name);
                list.items.push(item);
                i += RECORD_LINES;
            }
            Err(reason) => {
                warn!("Skipping supplier record at line {}: {}", i + 1, reason);
                list.skipped.push(ParseSkip { line: i, reason });
                i += 1;
            }
        }
    }

    list
}

fn parse_record(lines: &[&str], start: usize) -> Result<InventoryItem, String> {
    if start + VENDOR_UNIT_OFFSET >= lines.len() {
        return Err(format!(
            "record truncated: needs {} lines, {} remain",
            RECORD_LINES,
            lines.len() - start
        ));
    }

    let product_number = lines[start];
    let name = lines[start + NAME_OFFSET];
    let price = lines[start + PRICE_OFFSET];
    let vendor_unit = lines[start + VENDOR_UNIT_OFFSET];

    InventoryItem::parse(product_number, name, price, vendor_unit)
        .map_err(|_| format!("unreadable price {price:?} for {product_number}"))
}

/// Read and parse a supplier list file
pub fn load_supplier_file(path: impl AsRef<Path>) -> Result<SupplierList> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read supplier list {}", path.display()))?;
    Ok(parse_supplier_list(&data))
}
