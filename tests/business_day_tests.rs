//! Walk-in trading day tests

use rust_decimal::Decimal;
use sub_shop::simulation::{
    begin_day, Catalog, InventoryItem, Shop, SimRng, CLOSING_MINUTE, OPENING_MINUTE,
    STARTING_CASH,
};

fn ham_shop(stock: i64) -> Shop {
    let catalog = Catalog::new()
        .with_size("REGULAR", Decimal::ONE)
        .with_sub("HAM", &["ham"]);
    let mut shop = Shop::new(catalog);
    let mut ham = InventoryItem::new("ham", "Ham", Decimal::ONE, "EA");
    ham.stock = Decimal::from(stock);
    shop.add_item(ham);
    shop
}

#[test]
fn test_day_with_plenty_of_stock_sells_every_order() {
    let mut shop = ham_shop(1000);
    let mut rng = SimRng::with_seed(8);

    let report = begin_day(&mut shop, &mut rng);

    let max_orders = (CLOSING_MINUTE - OPENING_MINUTE) as usize;
    assert!(report.orders_attempted > 0);
    assert!(report.orders_attempted < max_orders);
    assert_eq!(report.orders_sold, report.orders_attempted);
    assert_eq!(shop.cash(), STARTING_CASH + report.revenue);
    assert_eq!(
        shop.stock_of("ham"),
        Some(Decimal::from(1000 - report.orders_sold as i64))
    );
    assert!((0..=100).contains(&report.final_popularity));
}

#[test]
fn test_day_without_stock_sells_nothing() {
    let mut shop = ham_shop(0);
    let mut rng = SimRng::with_seed(8);

    let report = begin_day(&mut shop, &mut rng);

    assert_eq!(report.orders_sold, 0);
    assert_eq!(report.revenue, Decimal::ZERO);
    assert_eq!(shop.cash(), STARTING_CASH);
}

#[test]
fn test_day_runs_out_of_stock() {
    let mut shop = ham_shop(5);
    let mut rng = SimRng::with_seed(13);

    let report = begin_day(&mut shop, &mut rng);

    assert!(report.orders_attempted > 5);
    assert_eq!(report.orders_sold, 5);
    assert_eq!(shop.stock_of("ham"), Some(Decimal::ZERO));
}

#[test]
fn test_seeded_days_match() {
    let first = begin_day(&mut ham_shop(100), &mut SimRng::with_seed(99));
    let second = begin_day(&mut ham_shop(100), &mut SimRng::with_seed(99));
    assert_eq!(first, second);
}
