//! Walk-in trading day
//!
//! Runs the counter minute by minute from opening to closing. Each minute a
//! walk-in orders with a chance equal to the current popularity, and
//! popularity drifts a few points either way.

use log::info;
use rust_decimal::Decimal;

use super::catalog::DEFAULT_SIZE;
use super::random::SimRng;
use super::shop::Shop;
use super::types::BreadType;

/// 10:00 AM in minutes after midnight
pub const OPENING_MINUTE: u32 = 10 * 60;
/// 9:00 PM in minutes after midnight
pub const CLOSING_MINUTE: u32 = 21 * 60;
pub const STARTING_POPULARITY: i32 = 50;
/// Largest popularity change per minute
pub const POPULARITY_SWING: i32 = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayReport {
    pub orders_attempted: usize,
    pub orders_sold: usize,
    pub revenue: Decimal,
    pub final_popularity: i32,
}

/// Trade through one day with walk-in orders for a regular sub on white
pub fn begin_day(shop: &mut Shop, rng: &mut SimRng) -> DayReport {
    let sub_ids: Vec<String> = shop
        .catalog()
        .sub_ids()
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut report = DayReport::default();
    let mut popularity = STARTING_POPULARITY;
    let mut minute = OPENING_MINUTE;

    loop {
        minute += 1;
        if minute >= CLOSING_MINUTE {
            break;
        }

        if rng.range_i32(0..=100) < popularity {
            if let Some(sub_id) = rng.choose(&sub_ids) {
                report.orders_attempted += 1;
                if let Ok(receipt) = shop.sell_sub(sub_id, DEFAULT_SIZE, BreadType::White, &[]) {
                    report.orders_sold += 1;
                    report.revenue += receipt.revenue;
                }
            }
        }

        popularity = adjust_popularity(popularity, rng);
    }

    report.final_popularity = popularity;
    info!(
        "Store is closed for the day. Sold {}/{} orders for ${:.2}",
        report.orders_sold, report.orders_attempted, report.revenue
    );
    report
}

fn adjust_popularity(popularity: i32, rng: &mut SimRng) -> i32 {
    (popularity + rng.range_i32(-POPULARITY_SWING..=POPULARITY_SWING)).clamp(0, 100)
}
