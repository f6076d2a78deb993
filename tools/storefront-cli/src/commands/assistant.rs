//! PC builder assistant.

use anyhow::{bail, Context as _, Result};
use dialoguer::Select;
use storefront_commerce::assistant::{recommend, Answers, Budget, UseCase};
use storefront_commerce::search::SpecFilter;
use storefront_commerce::Money;

use super::AssistantArgs;
use crate::context::Context;
use crate::output::stock_badge;

const USE_CASE_LABELS: [&str; 4] = [
    "Gaming",
    "Work / Office",
    "Creative (video, 3D, design)",
    "General use",
];
const BUDGET_LABELS: [&str; 3] = ["Entry", "Mid-range", "High-end"];

/// Run the assistant command.
pub async fn run(args: AssistantArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products = catalog.list().await?;
    let currency = ctx.config.catalog.currency;

    let mut filter = SpecFilter::new();
    if let Some(cpu) = args.cpu {
        filter = filter.cpu(cpu);
    }
    if let Some(ram) = args.ram {
        filter = filter.ram(ram);
    }
    if let Some(generation) = args.generation {
        filter = filter.generation(generation);
    }
    if let Some(brand) = args.brand {
        filter = filter.brand(brand);
    }
    if let Some(max) = args.max_price {
        let max = Money::from_decimal(max, currency)
            .with_context(|| format!("Invalid max price: {}", max))?;
        filter = filter.max_price(max);
    }

    let use_case = match args.use_case {
        Some(s) => s.parse::<UseCase>()?,
        None => ask_use_case(ctx)?,
    };
    let budget = match args.budget {
        Some(s) => s.parse::<Budget>()?,
        None => ask_budget(ctx)?,
    };

    let filtered = filter.apply(&products);
    let candidates: Vec<_> = filtered.into_iter().cloned().collect();
    let recommendation = recommend(&candidates, &Answers { use_case, budget });

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "use_case": use_case,
            "budget": budget,
            "filtered": candidates,
            "recommendation": recommendation,
        }));
        return Ok(());
    }

    if !filter.is_empty() {
        ctx.output.header(&format!("Filtered Products ({})", candidates.len()));
        if candidates.is_empty() {
            ctx.output.info("No products match your filter.");
        }
        for p in &candidates {
            ctx.output.list_item(&format!("{} ({}) {}", p.name, p.id, p.price.display()));
        }
    }

    ctx.output.header("Recommendation");
    match recommendation {
        Some(rec) => {
            ctx.output.kv("product", &format!("{} ({})", rec.product.name, rec.product.id));
            ctx.output.kv("price", &rec.product.price.display());
            ctx.output.kv("stock", &stock_badge(rec.product.stock));
            ctx.output.kv("why", rec.profile.rationale);
            if rec.fallback {
                ctx.output.warn(&format!(
                    "Nothing in {} fits this budget; showing the most affordable option.",
                    rec.profile.category
                ));
            }
            ctx.output.info(&format!(
                "Add it with `storefront cart add:{}`",
                rec.product.id
            ));
        }
        None => ctx.output.warn("No products available for this use case."),
    }

    Ok(())
}

fn ask_use_case(ctx: &Context) -> Result<UseCase> {
    if ctx.output.is_json() {
        bail!("--use-case is required with --json");
    }
    let selection = Select::new()
        .with_prompt("What will you use your PC for?")
        .items(&USE_CASE_LABELS)
        .default(0)
        .interact()?;
    Ok(UseCase::ALL[selection])
}

fn ask_budget(ctx: &Context) -> Result<Budget> {
    if ctx.output.is_json() {
        bail!("--budget is required with --json");
    }
    let selection = Select::new()
        .with_prompt("What is your budget?")
        .items(&BUDGET_LABELS)
        .default(1)
        .interact()?;
    Ok(Budget::ALL[selection])
}
