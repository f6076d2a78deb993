//! One cart session driven by a list of operations.

use anyhow::{bail, Context as _, Result};
use storefront_commerce::cart::{CartNotice, CartStore, CartSummary};
use storefront_commerce::ProductId;
use storefront_observability::NotifyingLogger;

use super::CartArgs;
use crate::context::Context;

/// A single cart operation from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    Add(ProductId),
    Set(ProductId, i64),
    Remove(ProductId),
    Clear,
}

impl CartOp {
    /// Parse `add:<id>`, `set:<id>=<qty>`, `remove:<id>` or `clear`.
    pub fn parse(op: &str) -> Result<Self> {
        let op = op.trim();
        if op.eq_ignore_ascii_case("clear") {
            return Ok(CartOp::Clear);
        }

        let (verb, arg) = op
            .split_once(':')
            .with_context(|| format!("Unknown cart operation '{}'", op))?;
        let arg = arg.trim();
        if arg.is_empty() {
            bail!("Cart operation '{}' needs a product id", op);
        }

        match verb.to_ascii_lowercase().as_str() {
            "add" => Ok(CartOp::Add(ProductId::new(arg))),
            "remove" | "rm" => Ok(CartOp::Remove(ProductId::new(arg))),
            "set" => {
                let (id, qty) = arg
                    .split_once('=')
                    .with_context(|| format!("Expected set:<id>=<qty>, got '{}'", op))?;
                let qty: i64 = qty
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid quantity in '{}'", op))?;
                Ok(CartOp::Set(ProductId::new(id.trim()), qty))
            }
            _ => bail!("Unknown cart operation '{}'", op),
        }
    }
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let ops = args
        .ops
        .iter()
        .map(|op| CartOp::parse(op))
        .collect::<Result<Vec<_>>>()?;

    let catalog = ctx.catalog()?;
    let logger = ctx.session_logger();
    logger.info(&format!("cart session started with {} operation(s)", ops.len()));

    let output = ctx.output.clone();
    let notifier = NotifyingLogger::new(logger.clone())
        .forward_to(move |notice: &CartNotice| output.notice(notice));
    let mut cart = CartStore::new(ctx.config.cart_config()).with_notifier(notifier);

    for op in ops {
        match op {
            CartOp::Add(id) => match catalog.get(&id).await {
                Ok(product) => {
                    cart.add_to_cart(&product);
                }
                Err(e) => ctx.output.warn(&format!("Skipping add:{}: {}", id, e)),
            },
            CartOp::Set(id, qty) => {
                if !cart.update_quantity(&id, qty).is_mutation() {
                    ctx.output.debug(&format!("{} is not in the cart", id));
                }
            }
            CartOp::Remove(id) => {
                if !cart.remove_from_cart(&id).is_mutation() {
                    ctx.output.debug(&format!("{} is not in the cart", id));
                }
            }
            CartOp::Clear => {
                if !cart.clear_cart().is_mutation() {
                    ctx.output.debug("Cart is already empty");
                }
            }
        }
    }

    let summary = cart.summary();
    logger
        .info_builder("cart session finished")
        .field_i64("total_items", summary.total_items)
        .field("total", summary.grand_total.display())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&summary);
    } else {
        print_summary(&summary, ctx);
    }
    Ok(())
}

fn print_summary(summary: &CartSummary, ctx: &Context) {
    if summary.is_empty() {
        ctx.output.header("Your cart is empty");
        ctx.output.info("Browse the catalog with `storefront catalog list` to continue shopping.");
        return;
    }

    ctx.output.header("Shopping Cart");
    let widths = [24, 12, 5, 12];
    ctx.output
        .table_row(&["PRODUCT", "PRICE", "QTY", "SUBTOTAL"], &widths);
    for line in &summary.lines {
        ctx.output.table_row(
            &[
                &line.name,
                &line.unit_price.display(),
                &line.quantity.to_string(),
                &line.subtotal.display(),
            ],
            &widths,
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Subtotal ({} items)", summary.total_items),
        &summary.subtotal.display(),
    );
    let shipping = if summary.has_free_shipping() {
        "Free".to_string()
    } else {
        summary.shipping_total.display()
    };
    ctx.output.kv("Shipping", &shipping);
    ctx.output.kv("Total", &summary.grand_total.display());
}
