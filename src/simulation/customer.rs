//! Customers: what they order and how they judge the visit

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::path::Path;

use super::catalog::Catalog;
use super::random::SimRng;
use super::types::{BreadType, CustomerId, Order, OrderRecord};

/// Baseline happiness of a newly generated customer
pub const MOOD_RANGE: RangeInclusive<i32> = 40..=60;
/// Range for the cleanliness and service preferences
pub const PREFERENCE_RANGE: RangeInclusive<i32> = 0..=20;
/// Minimum review score for a customer to come back
pub const RETURN_THRESHOLD: i32 = 50;
/// Added to the review score when the order was served
pub const SUCCESS_BONUS: i32 = 10;
/// Taken off the review score when the order could not be made
pub const FAILURE_PENALTY: i32 = 20;
/// Review scores are clamped to 0..=this
pub const MAX_REVIEW_SCORE: i32 = 100;
/// Chance that a customer asks for each non-base extra
pub const EXTRA_REQUEST_CHANCE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub mood: i32,
    /// Not used in scoring yet
    pub cleanliness_preference: i32,
    /// Not used in scoring yet
    pub customer_service_preference: i32,
    pub order_history: Vec<OrderRecord>,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: &str,
        mood: i32,
        cleanliness_preference: i32,
        customer_service_preference: i32,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            mood,
            cleanliness_preference,
            customer_service_preference,
            order_history: Vec::new(),
        }
    }

    /// Pick a sub, size, bread and extras at random.
    /// Returns `None` when the menu has no subs or no sizes.
    pub fn generate_order(&self, catalog: &Catalog, rng: &mut SimRng) -> Option<Order> {
        let sub_id = rng.choose(&catalog.sub_ids())?.to_string();
        let size = rng.choose(&catalog.size_names())?.to_string();
        let bread = *rng.choose(&BreadType::ALL)?;
        let extras = self.choose_extras(catalog, rng);

        Some(Order {
            sub_id,
            size,
            bread,
            extras,
        })
    }

    /// Base condiments always, every other catalog extra on a coin flip
    pub fn choose_extras(&self, catalog: &Catalog, rng: &mut SimRng) -> Vec<String> {
        let mut selected = catalog.base_extras().to_vec();
        for extra in catalog.premium_extras() {
            if rng.unit() < EXTRA_REQUEST_CHANCE {
                selected.push(extra.to_string());
            }
        }
        selected
    }

    /// Score a visit from 0 to 100. Pure: the same inputs give the same score.
    pub fn review_experience(
        &self,
        order_successful: bool,
        shop_cleanliness: i32,
        shop_customer_service: i32,
    ) -> i32 {
        let order_effect = if order_successful {
            SUCCESS_BONUS
        } else {
            -FAILURE_PENALTY
        };
        let score = self.mood + order_effect + shop_cleanliness + shop_customer_service;
        score.clamp(0, MAX_REVIEW_SCORE)
    }

    pub fn decide_to_return(&self, review_score: i32) -> bool {
        review_score >= RETURN_THRESHOLD
    }

    pub fn record_order(&mut self, order: Order, successful: bool) {
        self.order_history.push(OrderRecord { order, successful });
    }
}

/// Read the name pool, one name per line. Blank lines are ignored.
pub fn load_customer_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read customer names {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// One customer per distinct name, in shuffled order
pub fn generate_customers(names: &[String], rng: &mut SimRng) -> Vec<Customer> {
    let mut pool = names.to_vec();
    rng.shuffle(&mut pool);

    let mut seen = HashSet::new();
    let mut customers = Vec::new();
    for name in pool {
        if !seen.insert(name.clone()) {
            continue;
        }
        let mood = rng.range_i32(MOOD_RANGE);
        let cleanliness = rng.range_i32(PREFERENCE_RANGE);
        let customer_service = rng.range_i32(PREFERENCE_RANGE);
        customers.push(Customer::new(
            CustomerId(customers.len()),
            &name,
            mood,
            cleanliness,
            customer_service,
        ));
    }
    customers
}
