//! Inventory overview.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::{low_stock, InventoryStats, Product};

use super::StatsArgs;
use crate::context::Context;
use crate::output::stock_badge;

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: InventoryStats,
    low_stock: Vec<&'a Product>,
}

/// Run the stats command.
pub async fn run(args: StatsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products = catalog.list().await?;
    let report = StatsReport {
        stats: InventoryStats::compute(&products, ctx.config.catalog.currency),
        low_stock: low_stock(&products, args.low_stock),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.header("Inventory");
    ctx.output
        .kv("products", &report.stats.unique_products.to_string());
    ctx.output.kv("units", &report.stats.total_units.to_string());
    ctx.output.kv("value", &report.stats.total_value.display());
    ctx.output
        .kv("out of stock", &report.stats.out_of_stock.to_string());

    if !report.low_stock.is_empty() {
        ctx.output
            .header(&format!("Low stock (≤ {})", args.low_stock));
        for p in &report.low_stock {
            ctx.output
                .list_item(&format!("{} ({}) {}", p.name, p.id, stock_badge(p.stock)));
        }
    }

    Ok(())
}
