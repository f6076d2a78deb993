//! CLI command implementations.

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod stats;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products.
    List {
        /// Match name, brand or specifications.
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category (e.g. "Gaming", "General Use").
        #[arg(short, long)]
        category: Option<String>,
        /// name-asc, name-desc, price-asc, price-desc or featured.
        #[arg(long, default_value = "name-asc")]
        sort: String,
    },
    /// Show one product with similar products.
    Show {
        /// Product ID.
        id: String,
    },
    /// Add a product.
    Add(ProductFields),
    /// Update a product; omitted fields keep their value.
    Update {
        /// Product ID.
        id: String,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    Delete {
        /// Product ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Editable product fields.
#[derive(Args, Default)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub brand: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Price in major units (e.g. 1299.99).
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub stock: Option<i64>,
    #[arg(long)]
    pub description: Option<String>,
    /// Main image URL.
    #[arg(long)]
    pub image: Option<String>,
    /// Specification as key=value; repeatable.
    #[arg(long = "spec", value_name = "KEY=VALUE")]
    pub specs: Vec<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations applied in order: add:<id>, set:<id>=<qty>, remove:<id>, clear.
    pub ops: Vec<String>,
}

/// Arguments for the assistant command.
#[derive(Args)]
pub struct AssistantArgs {
    /// gaming, work, creative or general.
    #[arg(short, long)]
    pub use_case: Option<String>,

    /// entry, mid or high.
    #[arg(short, long)]
    pub budget: Option<String>,

    /// Filter by CPU substring.
    #[arg(long)]
    pub cpu: Option<String>,

    /// Filter by RAM substring.
    #[arg(long)]
    pub ram: Option<String>,

    /// Filter by CPU generation substring.
    #[arg(long)]
    pub generation: Option<String>,

    /// Filter by brand substring.
    #[arg(long)]
    pub brand: Option<String>,

    /// Maximum price in major units, inclusive.
    #[arg(long)]
    pub max_price: Option<f64>,
}

/// Arguments for the stats command.
#[derive(Args)]
pub struct StatsArgs {
    /// Stock level at or below which a product is listed as low.
    #[arg(long, default_value_t = 5)]
    pub low_stock: i64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Create a storefront.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate configuration.
    Validate,
}
