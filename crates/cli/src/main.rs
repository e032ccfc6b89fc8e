//! Demo driver: walks an inventory through a few adds, removals and a
//! save/load cycle, printing the results.

mod config;

use anyhow::Context;
use serde_json::json;

use stockkeep_inventory::{ActivityLog, Inventory, StockCommand};

use crate::config::DemoConfig;

fn main() -> anyhow::Result<()> {
    stockkeep_observability::init();

    let config = DemoConfig::from_env()?;
    tracing::info!(path = %config.inventory_path.display(), "starting inventory demo");

    let mut inventory = Inventory::with_path(&config.inventory_path);
    let mut activity = ActivityLog::new();

    inventory.add("apple", 10, Some(&mut activity));
    // Negative additions are accepted and decrement without deleting.
    inventory.add("banana", -2, Some(&mut activity));
    // Untyped input with a numeric name and a textual quantity; ignored.
    inventory.execute(&StockCommand::add(json!(123), json!("ten")), Some(&mut activity));
    inventory.remove("apple", 3);
    inventory.remove("orange", 1);

    println!("Apple stock: {}", inventory.quantity("apple"));
    println!("Low items: {:?}", inventory.low_stock(config.low_stock_threshold));

    inventory
        .save()
        .with_context(|| format!("failed to save {}", config.inventory_path.display()))?;
    inventory
        .load()
        .with_context(|| format!("failed to load {}", config.inventory_path.display()))?;

    print!("{}", inventory.report());
    println!("Activity entries: {}", activity.len());

    Ok(())
}
