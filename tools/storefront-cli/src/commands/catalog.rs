//! Catalog browsing and admin commands.

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::Confirm;
use storefront_commerce::catalog::{similar_products, Category, Product, ProductDraft};
use storefront_commerce::search::{ProductQuery, SortOption};
use storefront_commerce::{Currency, Money, ProductId};

use super::{CatalogArgs, CatalogCommand, ProductFields};
use crate::context::Context;
use crate::output::{stock_badge, truncate};

const SIMILAR_LIMIT: usize = 4;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CatalogCommand::List {
            search,
            category,
            sort,
        } => list(search, category, &sort, ctx).await,
        CatalogCommand::Show { id } => show(&id, ctx).await,
        CatalogCommand::Add(fields) => add(fields, ctx).await,
        CatalogCommand::Update { id, fields } => update(&id, fields, ctx).await,
        CatalogCommand::Delete { id, yes } => delete(&id, yes, ctx).await,
    }
}

async fn list(
    search: Option<String>,
    category: Option<String>,
    sort: &str,
    ctx: &Context,
) -> Result<()> {
    let sort = SortOption::from_key(sort).ok_or_else(|| {
        let keys: Vec<&str> = SortOption::ALL.iter().map(|s| s.as_key()).collect();
        anyhow!("Unknown sort '{}'. Expected one of: {}", sort, keys.join(", "))
    })?;

    let mut query = ProductQuery::new().with_sort(sort);
    if let Some(text) = search {
        query = query.with_text(text);
    }
    if let Some(label) = category.filter(|c| !c.eq_ignore_ascii_case("all")) {
        query = query.with_category(Category::from_label(&label));
    }

    let catalog = ctx.catalog()?;
    let products = catalog.search(&query).await?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    if products.is_empty() {
        ctx.output.info("No products match your search.");
        return Ok(());
    }

    let widths = [6, 24, 12, 12, 14];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &widths);
    for p in &products {
        ctx.output.table_row(
            &[
                &truncate(p.id.as_str(), widths[0]),
                &truncate(&p.name, widths[1]),
                p.category.label(),
                &p.price.display(),
                &stock_badge(p.stock),
            ],
            &widths,
        );
    }

    Ok(())
}

async fn show(id: &str, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let products = catalog.list().await?;
    let product = products
        .iter()
        .find(|p| p.id.as_str() == id)
        .ok_or_else(|| anyhow!("Product not found: {}", id))?;
    let similar = similar_products(&products, product, SIMILAR_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "similar": similar,
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("brand", &product.brand);
    ctx.output.kv("category", product.category.label());
    ctx.output.kv("price", &product.price.display());
    ctx.output.kv("stock", &stock_badge(product.stock));
    ctx.output.kv("image", product.main_image());
    if !product.description.is_empty() {
        ctx.output.kv("description", &product.description);
    }

    if !product.specifications.is_empty() {
        ctx.output.header("Specifications");
        for (key, value) in product.specifications.iter() {
            ctx.output.kv(key, value);
        }
    }

    if !similar.is_empty() {
        ctx.output.header("Similar products");
        for p in similar {
            ctx.output
                .list_item(&format!("{} ({}) {}", p.name, p.id, p.price.display()));
        }
    }

    Ok(())
}

async fn add(fields: ProductFields, ctx: &Context) -> Result<()> {
    let currency = ctx.config.catalog.currency;
    let draft = ProductDraft {
        name: required(fields.name, "name")?,
        brand: required(fields.brand, "brand")?,
        category: Category::from_label(&required(fields.category, "category")?),
        price: parse_price(required(fields.price, "price")?, currency)?,
        stock: fields.stock.unwrap_or(0),
        description: required(fields.description, "description")?,
        image: fields.image,
        specifications: parse_specs(&fields.specs)?.into_iter().collect(),
    };

    let catalog = ctx.catalog()?;
    let product = catalog.insert(draft).await?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
    } else {
        ctx.output
            .success(&format!("Added {} ({})", product.name, product.id));
    }
    Ok(())
}

async fn update(id: &str, fields: ProductFields, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let id = ProductId::new(id);
    let existing = catalog.get(&id).await?;
    let draft = merge_fields(&existing, fields, ctx.config.catalog.currency)?;
    let product = catalog.update(&id, draft).await?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
    } else {
        ctx.output.success(&format!("Updated {} ({})", product.name, product.id));
    }
    Ok(())
}

async fn delete(id: &str, yes: bool, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let id = ProductId::new(id);
    let product = catalog.get(&id).await?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} ({})?", product.name, product.id))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Deletion cancelled");
            return Ok(());
        }
    }

    let removed = catalog.delete(&id).await?;
    if ctx.output.is_json() {
        ctx.output.json(&removed);
    } else {
        ctx.output.success(&format!("Deleted {}", removed.name));
    }
    Ok(())
}

/// Overlay the given fields on the edit form of `product`.
fn merge_fields(product: &Product, fields: ProductFields, currency: Currency) -> Result<ProductDraft> {
    let mut draft = ProductDraft::from_product(product);
    if let Some(name) = fields.name {
        draft.name = name;
    }
    if let Some(brand) = fields.brand {
        draft.brand = brand;
    }
    if let Some(category) = fields.category {
        draft.category = Category::from_label(&category);
    }
    if let Some(price) = fields.price {
        draft.price = parse_price(price, currency)?;
    }
    if let Some(stock) = fields.stock {
        draft.stock = stock;
    }
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if fields.image.is_some() {
        draft.image = fields.image;
    }
    for (key, value) in parse_specs(&fields.specs)? {
        draft.specifications.insert(key, value);
    }
    Ok(draft)
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.with_context(|| format!("--{} is required", field))
}

fn parse_price(price: f64, currency: Currency) -> Result<Money> {
    if price < 0.0 {
        bail!("Price must not be negative: {}", price);
    }
    Money::from_decimal(price, currency).with_context(|| format!("Invalid price: {}", price))
}

/// Parse `key=value` pairs. An empty value removes the key on update.
fn parse_specs(specs: &[String]) -> Result<Vec<(String, String)>> {
    specs
        .iter()
        .map(|s| {
            let (key, value) = s
                .split_once('=')
                .with_context(|| format!("Specification must be KEY=VALUE, got '{}'", s))?;
            if key.trim().is_empty() {
                bail!("Specification key is empty in '{}'", s);
            }
            Ok((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::seed::demo_products;
    use storefront_commerce::catalog::specs::RAM;

    #[test]
    fn test_detail_page_shows_four_similar_products() {
        let products: Vec<Product> = (1..=6)
            .map(|i| {
                Product::new(
                    i.to_string(),
                    format!("Desk {}", i),
                    Category::Desktop,
                    Money::new(50000, Currency::USD),
                )
            })
            .collect();
        let similar = similar_products(&products, &products[0], SIMILAR_LIMIT);
        let ids: Vec<&str> = similar.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4", "5"]);
    }

    #[test]
    fn test_parse_specs() {
        let specs = parse_specs(&["RAM = 32GB".to_string(), "gpu=".to_string()]).unwrap();
        assert_eq!(
            specs,
            vec![
                ("RAM".to_string(), "32GB".to_string()),
                ("gpu".to_string(), String::new())
            ]
        );
        assert!(parse_specs(&["nokey".to_string()]).is_err());
        assert!(parse_specs(&["=value".to_string()]).is_err());
    }

    #[test]
    fn test_merge_fields_keeps_unset_values() {
        let product = &demo_products()[0];
        let fields = ProductFields {
            price: Some(1199.99),
            specs: vec!["ram=64GB DDR5".to_string()],
            ..Default::default()
        };
        let draft = merge_fields(product, fields, Currency::USD).unwrap();
        assert_eq!(draft.name, "Gaming Beast Pro");
        assert_eq!(draft.price, Money::new(119999, Currency::USD));
        assert_eq!(draft.specifications.get(RAM), Some("64GB DDR5"));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert!(parse_price(-1.0, Currency::USD).is_err());
        assert_eq!(parse_price(49.99, Currency::USD).unwrap().amount_cents, 4999);
    }
}
