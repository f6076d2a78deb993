//! Static rule table for the build assistant.

use super::{ram_gb, Budget, UseCase};
use crate::catalog::{Category, Product};
use serde::Serialize;

/// What a good match looks like for one pair of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildProfile {
    pub category: Category,
    /// Inclusive ceiling, in minor units of the catalog currency.
    pub max_price_cents: i64,
    pub min_ram_gb: u32,
    pub rationale: &'static str,
}

impl BuildProfile {
    /// Whether `product` is within budget and has enough RAM.
    pub fn fits(&self, product: &Product) -> bool {
        product.price.amount_cents <= self.max_price_cents
            && ram_gb(product).is_some_and(|gb| gb >= self.min_ram_gb)
    }
}

/// Look up the profile for a pair of answers.
pub fn profile_for(use_case: UseCase, budget: Budget) -> BuildProfile {
    use Budget::*;
    use UseCase::*;

    let (category, max_price_cents, min_ram_gb, rationale) = match (use_case, budget) {
        (Gaming, Entry) => (Category::Gaming, 100_000, 16, "Solid 1080p gaming without overspending."),
        (Gaming, Mid) => (Category::Gaming, 150_000, 32, "High refresh gaming with room for streaming."),
        (Gaming, High) => (Category::Gaming, 250_000, 32, "Top-tier performance for 4K and ultrawide play."),
        (Work, Entry) => (Category::Work, 60_000, 8, "Reliable office work on a tight budget."),
        (Work, Mid) => (Category::Work, 85_000, 16, "Smooth multitasking for everyday business apps."),
        (Work, High) => (Category::Work, 120_000, 16, "Faster processor and larger display for heavy workloads."),
        (Creative, Entry) => (Category::Creative, 120_000, 32, "Enough memory for photo editing and light video."),
        (Creative, Mid) => (Category::Creative, 170_000, 64, "Plenty of RAM for video editing and 3D rendering."),
        (Creative, High) => (Category::Creative, 300_000, 64, "Workstation power for professional production."),
        (General, Entry) => (Category::GeneralUse, 50_000, 8, "Browsing, email and light productivity."),
        (General, Mid) => (Category::GeneralUse, 80_000, 8, "Comfortable everyday use with some headroom."),
        (General, High) => (Category::GeneralUse, 100_000, 16, "A fast all-rounder for the whole household."),
    };

    BuildProfile {
        category,
        max_price_cents,
        min_ram_gb,
        rationale,
    }
}
