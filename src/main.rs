use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

use sub_shop::simulation::{
    begin_day, generate_customers, load_customer_names, load_supplier_file, Catalog,
    CustomerManager, Shop, ShopError, SimRng, DEFAULT_SAVE_FILE,
};

#[derive(Parser)]
#[command(name = "sub_shop")]
#[command(about = "Headless sub shop simulation")]
struct Cli {
    /// Supplier price list (7-line records)
    #[arg(long, default_value = "data/supplier_list.txt")]
    supplier_file: PathBuf,

    /// Customer name pool, one name per line
    #[arg(long, default_value = "data/customer_names.txt")]
    names_file: PathBuf,

    /// Number of customer ticks to simulate
    #[arg(long, default_value = "5")]
    ticks: u32,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Buy this many vendor units of every product before opening
    #[arg(long)]
    restock: Option<String>,

    /// Save file used by --load and --save
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Restore the shop from the save file before simulating
    #[arg(long)]
    load: bool,

    /// Write the shop to the save file when done
    #[arg(long)]
    save: bool,

    /// Also run a walk-in trading day after the customer ticks
    #[arg(long)]
    business_day: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    run_headless(&cli)
}

/// Run the simulation without any front end
fn run_headless(cli: &Cli) -> Result<()> {
    let catalog = Catalog::default();
    let (mut shop, mut manager, mut rng) = match cli.seed {
        Some(seed) => (
            Shop::new_with_seed(catalog, seed),
            CustomerManager::new_with_seed(seed.wrapping_add(1)),
            SimRng::with_seed(seed.wrapping_add(2)),
        ),
        None => (Shop::new(catalog), CustomerManager::new(), SimRng::new()),
    };

    let supplier = load_supplier_file(&cli.supplier_file)?;
    info!(
        "Loaded {} products ({} records skipped)",
        supplier.items.len(),
        supplier.skipped.len()
    );
    for item in supplier.items {
        shop.add_item(item);
    }

    if cli.load {
        match shop.load(&cli.save_file) {
            Ok(()) => {}
            Err(ShopError::SaveNotFound(path)) => warn!("Save file not found: {}", path),
            Err(err) => return Err(err).context("Failed to load save"),
        }
    }

    if let Some(restock) = &cli.restock {
        let quantity = Decimal::from_str(restock)
            .with_context(|| format!("Invalid restock quantity {restock:?}"))?;
        let product_numbers: Vec<String> = shop.inventory().keys().cloned().collect();
        for product_number in product_numbers {
            if let Err(err) = shop.buy_stock_amount(&product_number, quantity) {
                warn!("Could not restock {}: {}", product_number, err);
            }
        }
    }

    let names = load_customer_names(&cli.names_file)?;
    manager.add_customers(generate_customers(&names, &mut rng));
    info!("Generated {} customers", manager.active_customers().len());

    println!("Running sub shop simulation in headless mode...");
    println!("Ticks: {}", cli.ticks);
    println!();

    for tick in 1..=cli.ticks {
        let report = manager.simulate_customers(&mut shop);
        println!(
            "--- Tick {}: served={}, sold={}, left={}, cash=${:.2} ---",
            tick,
            report.served,
            report.successful,
            report.departed,
            shop.cash()
        );
    }

    if cli.business_day {
        let day = begin_day(&mut shop, &mut rng);
        println!(
            "--- Business day: sold {}/{} for ${:.2}, popularity {} ---",
            day.orders_sold, day.orders_attempted, day.revenue, day.final_popularity
        );
    }

    println!();
    println!("=== Final State ===");
    shop.print_summary();
    manager.print_summary();
    let reviews = manager.show_reviews();
    if !reviews.is_empty() {
        println!("--- Reviews ---");
        println!("{}", reviews);
    }

    if cli.save {
        shop.save(&cli.save_file).context("Failed to save shop")?;
    }

    Ok(())
}
