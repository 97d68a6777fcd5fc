//! The shop: inventory, till and the rules for selling subs
//!
//! Cash and stock only move through `buy_stock*` and `sell_sub`. Both either
//! apply completely or leave the shop untouched, with one exception kept on
//! purpose: a sale that runs out of a requested extra fails after the base
//! ingredients were already used up.

use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::str::FromStr;

use super::catalog::Catalog;
use super::error::ShopError;
use super::item::InventoryItem;
use super::random::SimRng;
use super::types::{BreadType, Order, SaleReceipt};

/// Cash in the till when a new shop opens
pub const STARTING_CASH: Decimal = Decimal::ONE_THOUSAND;

/// Sale price is ingredient cost times this
pub const MARKUP: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Upper bound for cleanliness and customer service ratings
pub const RATING_MAX: i32 = 20;

#[derive(Debug, Clone)]
pub struct Shop {
    inventory: BTreeMap<String, InventoryItem>,
    cash: Decimal,
    cleanliness: i32,
    customer_service: i32,
    catalog: Catalog,
    rng: SimRng,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl Shop {
    fn new_internal(catalog: Catalog, rng: SimRng) -> Self {
        Self {
            inventory: BTreeMap::new(),
            cash: STARTING_CASH,
            cleanliness: RATING_MAX,
            customer_service: RATING_MAX,
            catalog,
            rng,
        }
    }

    pub fn new(catalog: Catalog) -> Self {
        Self::new_internal(catalog, SimRng::new())
    }

    /// Create a shop whose extra draws are reproducible
    pub fn new_with_seed(catalog: Catalog, seed: u64) -> Self {
        Self::new_internal(catalog, SimRng::with_seed(seed))
    }

    pub fn cash(&self) -> Decimal {
        self.cash
    }

    pub fn cleanliness(&self) -> i32 {
        self.cleanliness
    }

    pub fn customer_service(&self) -> i32 {
        self.customer_service
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn inventory(&self) -> &BTreeMap<String, InventoryItem> {
        &self.inventory
    }

    pub fn item(&self, product_number: &str) -> Option<&InventoryItem> {
        self.inventory.get(product_number)
    }

    pub fn stock_of(&self, product_number: &str) -> Option<Decimal> {
        self.inventory.get(product_number).map(|item| item.stock)
    }

    /// Register a product the shop can stock
    pub fn add_item(&mut self, item: InventoryItem) {
        self.inventory.insert(item.product_number.clone(), item);
    }

    /// Replace cash and inventory wholesale when restoring a save
    pub(crate) fn restore(&mut self, cash: Decimal, inventory: BTreeMap<String, InventoryItem>) {
        self.cash = cash;
        self.inventory = inventory;
    }

    fn display_name(&self, product_number: &str) -> String {
        self.inventory
            .get(product_number)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| "Unknown Product".to_string())
    }

    /// Buy stock from the supplier, quantity given as text
    pub fn buy_stock(&mut self, product_number: &str, quantity: &str) -> Result<String, ShopError> {
        if !self.inventory.contains_key(product_number) {
            return Err(ShopError::UnknownProduct(product_number.to_string()));
        }

        let amount = Decimal::from_str(quantity.trim())
            .ok()
            .filter(|q| !q.is_sign_negative())
            .ok_or_else(|| ShopError::InvalidQuantity(quantity.to_string()))?;

        self.buy_stock_amount(product_number, amount)
    }

    /// Buy `quantity` vendor units of a product. Nothing changes unless the
    /// till covers the full cost.
    pub fn buy_stock_amount(
        &mut self,
        product_number: &str,
        quantity: Decimal,
    ) -> Result<String, ShopError> {
        if quantity.is_sign_negative() {
            return Err(ShopError::InvalidQuantity(quantity.to_string()));
        }

        let item = self
            .inventory
            .get_mut(product_number)
            .ok_or_else(|| ShopError::UnknownProduct(product_number.to_string()))?;

        let (cost, new_stock) = item
            .unit_price
            .checked_mul(quantity)
            .zip(item.stock.checked_add(quantity))
            .ok_or_else(|| ShopError::InvalidQuantity(quantity.to_string()))?;
        if self.cash < cost {
            return Err(ShopError::InsufficientFunds {
                cost,
                cash: self.cash,
            });
        }

        self.cash -= cost;
        item.stock = new_stock;

        let message = format!(
            "Bought {:.2} {} of {} for ${:.2}",
            quantity, item.vendor_unit, item.name, cost
        );
        info!("{}", message);
        Ok(message)
    }

    /// Buy one vendor unit of the product shown on an inventory line,
    /// e.g. "Product Number: 100109, Mayonnaise - ..."
    pub fn buy_stock_by_text(&mut self, item_text: &str) -> Result<String, ShopError> {
        let product_number = item_text
            .split(',')
            .next()
            .and_then(|head| head.rsplit(':').next())
            .unwrap_or("")
            .trim()
            .to_string();
        self.buy_stock_amount(&product_number, Decimal::ONE)
    }

    /// Sell one sub.
    ///
    /// Every ingredient in the recipe needs `size multiplier` units; all of
    /// them are checked before any stock is touched. Each requested extra
    /// known to the catalog is then added with its configured probability,
    /// using one unit of stock. Unknown extras are ignored.
    pub fn sell_sub(
        &mut self,
        sub_id: &str,
        size: &str,
        bread: BreadType,
        extras: &[String],
    ) -> Result<SaleReceipt, ShopError> {
        let recipe = self
            .catalog
            .recipe(sub_id)
            .ok_or_else(|| ShopError::UnknownProduct(sub_id.to_string()))?;
        let multiplier = self
            .catalog
            .size_multiplier(size)
            .ok_or_else(|| ShopError::UnknownSize(size.to_string()))?;
        let size = size.to_uppercase();

        let purpose = format!("make {} {} {}", size, bread, sub_id);
        let out_of_range = || ShopError::AmountOutOfRange(purpose.clone());

        // Repeated ingredients add up, first appearance keeps the order
        let mut required: Vec<(&str, Decimal)> = Vec::new();
        for ingredient in recipe {
            match required.iter_mut().find(|(pn, _)| *pn == ingredient.as_str()) {
                Some((_, amount)) => {
                    *amount = amount.checked_add(multiplier).ok_or_else(out_of_range)?
                }
                None => required.push((ingredient.as_str(), multiplier)),
            }
        }

        let mut total_price = Decimal::ZERO;
        for (product_number, amount) in &required {
            let item = match self.inventory.get(*product_number) {
                Some(item) if item.stock >= *amount => item,
                _ => {
                    let err = ShopError::InsufficientStock {
                        item: self.display_name(product_number),
                        purpose: purpose.clone(),
                    };
                    debug!("Sale rejected: {}", err);
                    return Err(err);
                }
            };
            total_price = item
                .price_per_unit
                .checked_mul(*amount)
                .and_then(|cost| total_price.checked_add(cost))
                .ok_or_else(out_of_range)?;
        }

        // Extras draw against what the base recipe leaves behind
        let mut taken = required.clone();
        let mut extras_added = Vec::new();
        for extra in extras {
            let Some(spec) = self.catalog.extra(extra) else {
                continue;
            };
            if self.rng.unit() >= spec.probability {
                continue;
            }

            let product_number = spec.product_number.as_str();
            let already_taken = taken
                .iter()
                .find(|(pn, _)| *pn == product_number)
                .map_or(Decimal::ZERO, |(_, amount)| *amount);

            match self.inventory.get(product_number) {
                Some(item) if item.stock - already_taken >= Decimal::ONE => {
                    total_price = total_price
                        .checked_add(item.price_per_unit)
                        .ok_or_else(out_of_range)?;
                    match taken.iter_mut().find(|(pn, _)| *pn == product_number) {
                        Some((_, amount)) => *amount += Decimal::ONE,
                        None => taken.push((product_number, Decimal::ONE)),
                    }
                    extras_added.push(extra.clone());
                }
                other => {
                    let item = other
                        .map(|item| item.name.clone())
                        .unwrap_or_else(|| extra.clone());
                    let err = ShopError::InsufficientStock {
                        item,
                        purpose: format!("add to {} {} {}", size, bread, sub_id),
                    };
                    deduct(&mut self.inventory, &required);
                    warn!("Sale failed after base ingredients were used: {}", err);
                    return Err(err);
                }
            }
        }

        let (revenue, new_cash) = total_price
            .checked_mul(MARKUP)
            .and_then(|revenue| Some((revenue, self.cash.checked_add(revenue)?)))
            .ok_or_else(out_of_range)?;

        deduct(&mut self.inventory, &taken);
        self.cash = new_cash;

        let detail = format!(
            "Sold a {} {} {} with extras for ${:.2}",
            size, bread, sub_id, revenue
        );
        debug!("{}", detail);

        Ok(SaleReceipt {
            sub_id: sub_id.to_string(),
            size,
            bread,
            revenue,
            extras_added,
            detail,
        })
    }

    /// Sell the sub described by a customer order
    pub fn sell_order(&mut self, order: &Order) -> Result<SaleReceipt, ShopError> {
        self.sell_sub(&order.sub_id, &order.size, order.bread, &order.extras)
    }

    /// One display line per item, ordered by product number
    pub fn show_inventory(&self) -> String {
        self.inventory
            .values()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn adjust_cleanliness(&mut self, amount: i32) {
        self.cleanliness = (self.cleanliness + amount).clamp(0, RATING_MAX);
    }

    pub fn adjust_customer_service(&mut self, amount: i32) {
        self.customer_service = (self.customer_service + amount).clamp(0, RATING_MAX);
    }

    pub fn print_summary(&self) {
        println!("=== Shop Summary ===");
        println!("Cash: ${:.2}", self.cash);
        println!(
            "Cleanliness: {}/{}, Customer service: {}/{}",
            self.cleanliness, RATING_MAX, self.customer_service, RATING_MAX
        );
        println!("Products: {}", self.inventory.len());

        let in_stock: Vec<&InventoryItem> = self
            .inventory
            .values()
            .filter(|item| item.stock > Decimal::ZERO)
            .collect();
        if !in_stock.is_empty() {
            println!("--- In Stock ---");
            for item in in_stock {
                println!("  {} {}: {:.2}", item.product_number, item.name, item.stock);
            }
        }
    }
}

/// Take the given amounts out of stock. Callers have already checked that
/// each product holds enough.
fn deduct(inventory: &mut BTreeMap<String, InventoryItem>, amounts: &[(&str, Decimal)]) {
    for (product_number, amount) in amounts {
        if let Some(item) = inventory.get_mut(*product_number) {
            item.stock -= *amount;
        }
    }
}
