//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use storefront_commerce::cart::StockPolicy;
use storefront_commerce::Currency;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, StorefrontConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[catalog]");
    ctx.output
        .kv("path", config.catalog.path.as_deref().unwrap_or("(demo catalog)"));
    ctx.output.kv("price_unit", config.catalog.price_unit.as_str());
    ctx.output.kv("currency", config.catalog.currency.code());

    ctx.output.info("[cart]");
    ctx.output.kv("stock_policy", config.cart.stock_policy.as_str());

    ctx.output.info("[log]");
    ctx.output.kv("format", config.log.format.as_str());
    ctx.output.kv("level", &config.log.level.to_string().to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(&ctx.config, |path| ctx.resolve_path(path).exists());

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Errors and warnings for `config`. `exists` reports whether a catalog path exists.
fn check(config: &StorefrontConfig, exists: impl Fn(&str) -> bool) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match config.catalog.path.as_deref() {
        Some(path) if path.trim().is_empty() => {
            errors.push("catalog.path must not be empty".to_string());
        }
        Some(path) if !path.ends_with(".json") => {
            errors.push(format!("catalog.path '{}' must be a .json file", path));
        }
        Some(path) if !exists(path) => {
            warnings.push(format!(
                "catalog.path '{}' does not exist yet; it will be created on the first write",
                path
            ));
        }
        Some(_) => {}
        None => {
            if config.catalog.currency != Currency::USD {
                errors.push(format!(
                    "the demo catalog is priced in USD but catalog.currency is {}",
                    config.catalog.currency
                ));
            }
        }
    }

    if config.cart.stock_policy == StockPolicy::Unchecked {
        warnings.push(
            "cart.stock_policy is 'unchecked'; carts may hold more units than are in stock"
                .to_string(),
        );
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_only_warn() {
        let (errors, warnings) = check(&StorefrontConfig::default(), |_| true);
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_demo_catalog_needs_usd() {
        let mut config = StorefrontConfig::default();
        config.catalog.currency = Currency::EUR;
        config.cart.stock_policy = StockPolicy::CapAtStock;
        let (errors, warnings) = check(&config, |_| true);
        assert_eq!(errors.len(), 1);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_catalog_path_checks() {
        let mut config = StorefrontConfig::default();
        config.cart.stock_policy = StockPolicy::CapAtStock;

        config.catalog.path = Some("products.csv".to_string());
        assert_eq!(check(&config, |_| true).0.len(), 1);

        config.catalog.path = Some("products.json".to_string());
        let (errors, warnings) = check(&config, |_| false);
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }
}
