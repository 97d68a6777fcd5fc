//! Saving and restoring a shop as JSON
//!
//! Money and stock are written as decimal strings so a round trip is exact:
//!
//! ```json
//! { "cash": "1000.30",
//!   "inventory": { "100109": { "name": "Mayonnaise", "unit_price": "24.99",
//!                              "vendor_unit": "4/1 GAL", "stock": "8" } } }
//! ```

use log::info;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::error::ShopError;
use super::item::InventoryItem;
use super::shop::Shop;

/// Default save location used by the front end
pub const DEFAULT_SAVE_FILE: &str = "savegame.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub vendor_unit: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub stock: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopSnapshot {
    #[serde(with = "rust_decimal::serde::str")]
    pub cash: Decimal,
    pub inventory: BTreeMap<String, ItemSnapshot>,
}

impl ShopSnapshot {
    pub fn capture(shop: &Shop) -> Self {
        let inventory = shop
            .inventory()
            .iter()
            .map(|(product_number, item)| {
                (
                    product_number.clone(),
                    ItemSnapshot {
                        name: item.name.clone(),
                        unit_price: item.unit_price,
                        vendor_unit: item.vendor_unit.clone(),
                        stock: item.stock,
                    },
                )
            })
            .collect();

        Self {
            cash: shop.cash(),
            inventory,
        }
    }

    /// Rebuild the shop's inventory from scratch. Per-unit prices are derived
    /// again from price and vendor unit rather than trusted from the file.
    pub fn apply(&self, shop: &mut Shop) -> Result<(), ShopError> {
        let mut inventory = BTreeMap::new();
        for (product_number, saved) in &self.inventory {
            if saved.stock < Decimal::ZERO {
                return Err(ShopError::CorruptSave(format!(
                    "negative stock {} for {}",
                    saved.stock, product_number
                )));
            }
            let mut item = InventoryItem::new(
                product_number,
                &saved.name,
                saved.unit_price,
                &saved.vendor_unit,
            );
            item.stock = saved.stock;
            inventory.insert(product_number.clone(), item);
        }

        shop.restore(self.cash, inventory);
        Ok(())
    }
}

impl Shop {
    /// Write the shop's cash and inventory to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ShopError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&ShopSnapshot::capture(self))?;
        std::fs::write(path, json)?;
        info!("Saved shop to {}", path.display());
        Ok(())
    }

    /// Replace cash and inventory with the snapshot at `path`
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), ShopError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ShopError::SaveNotFound(path.display().to_string()));
        }

        let json = std::fs::read_to_string(path)?;
        let snapshot: ShopSnapshot = serde_json::from_str(&json)?;
        snapshot.apply(self)?;
        info!(
            "Loaded shop from {} ({} products, cash ${:.2})",
            path.display(),
            self.inventory().len(),
            self.cash()
        );
        Ok(())
    }
}
