//! Core types for the shop simulation
//!
//! Plain data shared between the shop, the customers and whatever front end
//! drives them.

use rust_decimal::Decimal;
use std::fmt;

use super::error::ShopError;

/// A unique identifier for a customer within one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub usize);

/// Bread a sub can be made on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreadType {
    White,
    Wheat,
    /// Rosemary parmesan
    Rp,
}

impl BreadType {
    pub const ALL: [BreadType; 3] = [BreadType::White, BreadType::Wheat, BreadType::Rp];

    pub fn as_str(&self) -> &'static str {
        match self {
            BreadType::White => "WHITE",
            BreadType::Wheat => "WHEAT",
            BreadType::Rp => "RP",
        }
    }
}

impl fmt::Display for BreadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order a customer places at the counter
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub sub_id: String,
    pub size: String,
    pub bread: BreadType,
    pub extras: Vec<String>,
}

/// An order together with how it went, kept in the customer's history
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub order: Order,
    pub successful: bool,
}

/// A review left after a visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub customer: String,
    pub review_score: i32,
    pub order_successful: bool,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (Order Successful: {})",
            self.customer, self.review_score, self.order_successful
        )
    }
}

/// Confirmation of a completed sale
#[derive(Debug, Clone, PartialEq)]
pub struct SaleReceipt {
    pub sub_id: String,
    pub size: String,
    pub bread: BreadType,
    /// Amount added to the till (ingredient cost with markup)
    pub revenue: Decimal,
    /// Extras that were actually put on the sub and charged
    pub extras_added: Vec<String>,
    pub detail: String,
}

/// Success flag plus a message for display, derived from a sale attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleOutcome {
    pub success: bool,
    pub detail: String,
}

impl From<&Result<SaleReceipt, ShopError>> for SaleOutcome {
    fn from(result: &Result<SaleReceipt, ShopError>) -> Self {
        match result {
            Ok(receipt) => Self {
                success: true,
                detail: receipt.detail.clone(),
            },
            Err(err) => Self {
                success: false,
                detail: err.to_string(),
            },
        }
    }
}
