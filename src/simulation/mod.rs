//! Standalone shop simulation module
//!
//! This module contains the shop transaction engine and the customer
//! simulation. It has no front end of its own; a UI or the headless binary
//! drives it through `Shop` and `CustomerManager`.

mod business_day;
mod catalog;
mod customer;
mod customer_manager;
mod error;
mod item;
mod random;
mod shop;
mod snapshot;
mod supplier;
mod types;

pub use business_day::{
    begin_day, DayReport, CLOSING_MINUTE, OPENING_MINUTE, POPULARITY_SWING, STARTING_POPULARITY,
};
pub use catalog::{Catalog, ExtraSpec, BASE_EXTRAS, DEFAULT_SIZE};
pub use customer::{
    generate_customers, load_customer_names, Customer, EXTRA_REQUEST_CHANCE, FAILURE_PENALTY,
    MAX_REVIEW_SCORE, MOOD_RANGE, PREFERENCE_RANGE, RETURN_THRESHOLD, SUCCESS_BONUS,
};
pub use customer_manager::{CustomerManager, TickReport};
pub use error::{ParseSkip, ShopError};
pub use item::{parse_price, price_per_unit, InventoryItem};
pub use random::SimRng;
pub use shop::{Shop, MARKUP, RATING_MAX, STARTING_CASH};
pub use snapshot::{ItemSnapshot, ShopSnapshot, DEFAULT_SAVE_FILE};
pub use supplier::{load_supplier_file, parse_supplier_list, SupplierList};
pub use types::{BreadType, CustomerId, Order, OrderRecord, Review, SaleOutcome, SaleReceipt};
