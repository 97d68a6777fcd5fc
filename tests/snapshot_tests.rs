//! Save and load tests

use rust_decimal::Decimal;
use std::path::PathBuf;
use sub_shop::simulation::{
    BreadType, Catalog, InventoryItem, Shop, ShopError, ShopSnapshot,
};

fn temp_save(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sub_shop_{}_{}.json", name, std::process::id()))
}

fn trading_shop() -> Shop {
    let catalog = Catalog::new()
        .with_size("REGULAR", Decimal::ONE)
        .with_sub("ITALIAN", &["100104", "100103"]);
    let mut shop = Shop::new(catalog);
    shop.add_item(InventoryItem::new("100104", "Salami", Decimal::new(3980, 2), "2/8 LB"));
    shop.add_item(InventoryItem::new("100103", "Provolone Cheese", Decimal::new(4175, 2), "6/5 LB"));
    shop.add_item(InventoryItem::new("200207", "Salt", Decimal::new(945, 2), "12/26 OZ"));
    shop.buy_stock("100104", "3").unwrap();
    shop.buy_stock("100103", "2.5").unwrap();
    shop.sell_sub("ITALIAN", "REGULAR", BreadType::Wheat, &[]).unwrap();
    shop
}

#[test]
fn test_save_then_load_reproduces_shop() {
    let path = temp_save("round_trip");
    let original = trading_shop();
    original.save(&path).expect("save");

    let mut restored = Shop::new(original.catalog().clone());
    restored.load(&path).expect("load");
    std::fs::remove_file(&path).ok();

    assert_eq!(restored.cash(), original.cash());
    assert_eq!(restored.inventory().len(), original.inventory().len());
    for (product_number, item) in original.inventory() {
        let loaded = restored.item(product_number).expect("item restored");
        assert_eq!(loaded.stock, item.stock);
        assert_eq!(loaded.unit_price, item.unit_price);
        assert_eq!(loaded.price_per_unit, item.price_per_unit);
        assert_eq!(loaded.name, item.name);
        assert_eq!(loaded.vendor_unit, item.vendor_unit);
    }
}

#[test]
fn test_saved_values_are_decimal_strings() {
    let path = temp_save("strings");
    let shop = trading_shop();
    shop.save(&path).expect("save");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(json["cash"].is_string());
    let salami = &json["inventory"]["100104"];
    assert_eq!(salami["name"], "Salami");
    assert_eq!(salami["unit_price"], "39.80");
    assert_eq!(salami["vendor_unit"], "2/8 LB");
    assert_eq!(salami["stock"], "2");
    assert!(salami.get("price_per_unit").is_none());
}

#[test]
fn test_load_missing_save() {
    let mut shop = trading_shop();
    let cash = shop.cash();

    let err = shop.load(temp_save("does_not_exist")).unwrap_err();

    assert!(matches!(err, ShopError::SaveNotFound(_)));
    assert_eq!(shop.cash(), cash);
}

#[test]
fn test_load_rebuilds_inventory_from_scratch() {
    let json = r#"{
        "cash": "123.456",
        "inventory": {
            "100109": {"name": "Mayonnaise", "unit_price": "24.99", "vendor_unit": "4/1 GAL", "stock": "7.25"}
        }
    }"#;
    let path = temp_save("from_scratch");
    std::fs::write(&path, json).unwrap();

    let mut shop = trading_shop();
    shop.load(&path).expect("load");
    std::fs::remove_file(&path).ok();

    assert_eq!(shop.cash(), Decimal::new(123456, 3));
    assert_eq!(shop.inventory().len(), 1);
    let mayo = shop.item("100109").unwrap();
    assert_eq!(mayo.stock, Decimal::new(725, 2));
    assert_eq!(mayo.price_per_unit, Decimal::new(62475, 4));
    assert!(shop.item("100104").is_none());
}

#[test]
fn test_load_rejects_negative_stock() {
    let json = r#"{"cash": "10", "inventory": {"1": {"name": "Ham", "unit_price": "1", "vendor_unit": "EA", "stock": "-1"}}}"#;
    let path = temp_save("negative");
    std::fs::write(&path, json).unwrap();

    let mut shop = Shop::default();
    let err = shop.load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, ShopError::CorruptSave(_)));
    assert_eq!(shop.cash(), Decimal::ONE_THOUSAND);
}

#[test]
fn test_load_rejects_malformed_json() {
    let path = temp_save("malformed");
    std::fs::write(&path, "{ not json").unwrap();

    let mut shop = Shop::default();
    let err = shop.load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();

    assert!(matches!(err, ShopError::Json(_)));
}

#[test]
fn test_snapshot_capture_and_apply_in_memory() {
    let shop = trading_shop();
    let snapshot = ShopSnapshot::capture(&shop);

    let mut copy = Shop::default();
    snapshot.apply(&mut copy).expect("apply");

    assert_eq!(ShopSnapshot::capture(&copy), snapshot);
}
