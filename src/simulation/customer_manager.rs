//! Customer population management for the shop simulation
//!
//! Customers live in an id-indexed population. The active roster and the
//! regulars list only hold ids, so a tick can walk a copy of the roster and
//! drop departing customers once it is done.

use log::{debug, info};
use std::collections::{BTreeMap, HashSet};

use super::customer::Customer;
use super::random::SimRng;
use super::shop::Shop;
use super::types::{CustomerId, Review};

/// What happened during one pass over the active roster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub served: usize,
    pub successful: usize,
    pub departed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerManager {
    population: BTreeMap<CustomerId, Customer>,
    /// Active roster in visiting order
    customers: Vec<CustomerId>,
    /// Every return decision appends here, so a customer can appear many times
    regular_customers: Vec<CustomerId>,
    reviews: Vec<Review>,
    next_id: usize,
    rng: SimRng,
}

impl CustomerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager whose order draws are reproducible
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: SimRng::with_seed(seed),
            ..Self::default()
        }
    }

    /// Add a customer to the end of the active roster. The customer is given
    /// a fresh id if its own is already taken.
    pub fn add_customer(&mut self, mut customer: Customer) -> CustomerId {
        if self.population.contains_key(&customer.id) {
            customer.id = CustomerId(self.next_id);
        }
        let id = customer.id;
        self.next_id = self.next_id.max(id.0 + 1);
        self.population.insert(id, customer);
        self.customers.push(id);
        id
    }

    pub fn add_customers(&mut self, customers: impl IntoIterator<Item = Customer>) {
        for customer in customers {
            self.add_customer(customer);
        }
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.population.get(&id)
    }

    pub fn active_customers(&self) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter_map(|id| self.population.get(id))
            .collect()
    }

    pub fn regular_customers(&self) -> Vec<&Customer> {
        self.regular_customers
            .iter()
            .filter_map(|id| self.population.get(id))
            .collect()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Send every active customer to the counter once.
    ///
    /// Each customer orders, gets served or turned away, and reviews the
    /// visit against the shop's current ratings. Customers who score the
    /// visit high enough are recorded as regulars; the rest leave the roster
    /// after the pass.
    pub fn simulate_customers(&mut self, shop: &mut Shop) -> TickReport {
        let mut report = TickReport::default();
        let mut departed = HashSet::new();

        let roster = self.customers.clone();
        for id in roster {
            let Some(customer) = self.population.get_mut(&id) else {
                continue;
            };
            let Some(order) = customer.generate_order(shop.catalog(), &mut self.rng) else {
                continue;
            };

            let sale = shop.sell_order(&order);
            if let Err(err) = &sale {
                debug!("{} could not be served ({}): {}", customer.name, err.kind(), err);
            }
            let order_successful = sale.is_ok();
            let review_score = customer.review_experience(
                order_successful,
                shop.cleanliness(),
                shop.customer_service(),
            );
            customer.record_order(order, order_successful);

            self.reviews.push(Review {
                customer: customer.name.clone(),
                review_score,
                order_successful,
            });

            report.served += 1;
            if order_successful {
                report.successful += 1;
            }

            if customer.decide_to_return(review_score) {
                self.regular_customers.push(id);
            } else {
                debug!("{} is not coming back (score {})", customer.name, review_score);
                departed.insert(id);
            }
        }

        self.customers.retain(|id| !departed.contains(id));
        report.departed = departed.len();

        info!(
            "Customer tick: served={}, successful={}, departed={}, remaining={}",
            report.served,
            report.successful,
            report.departed,
            self.customers.len()
        );
        report
    }

    /// One line per review, oldest first
    pub fn show_reviews(&self) -> String {
        self.reviews
            .iter()
            .map(|review| review.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn print_summary(&self) {
        println!("=== Customer Summary ===");
        println!("Population: {}", self.population.len());
        println!("Active customers: {}", self.customers.len());
        println!("Regular visits: {}", self.regular_customers.len());
        println!("Reviews: {}", self.reviews.len());
        if !self.reviews.is_empty() {
            let total: i64 = self.reviews.iter().map(|r| r.review_score as i64).sum();
            println!(
                "Average score: {:.1}",
                total as f64 / self.reviews.len() as f64
            );
        }
    }
}
