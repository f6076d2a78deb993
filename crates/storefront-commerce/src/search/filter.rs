//! Spec filter for the build assistant panel.

use crate::catalog::specs::{CPU, GENERATION, RAM};
use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Optional spec constraints. Text fields are case-insensitive substrings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SpecFilter {
    pub cpu: Option<String>,
    pub ram: Option<String>,
    pub generation: Option<String>,
    pub brand: Option<String>,
    /// Inclusive upper bound on price.
    pub max_price: Option<Money>,
}

impl SpecFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = non_blank(cpu.into());
        self
    }

    pub fn ram(mut self, ram: impl Into<String>) -> Self {
        self.ram = non_blank(ram.into());
        self
    }

    pub fn generation(mut self, generation: impl Into<String>) -> Self {
        self.generation = non_blank(generation.into());
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = non_blank(brand.into());
        self
    }

    pub fn max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.cpu.is_none()
            && self.ram.is_none()
            && self.generation.is_none()
            && self.brand.is_none()
            && self.max_price.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let spec_ok = |needle: &Option<String>, key: &str| match needle {
            Some(needle) => product
                .spec(key)
                .map(|v| contains_ignore_case(v, needle))
                .unwrap_or(false),
            None => true,
        };

        let brand_ok = match &self.brand {
            Some(brand) => contains_ignore_case(&product.brand, brand),
            None => true,
        };

        let price_ok = match &self.max_price {
            Some(max) => {
                product.price.currency == max.currency
                    && product.price.amount_cents <= max.amount_cents
            }
            None => true,
        };

        spec_ok(&self.cpu, CPU)
            && spec_ok(&self.ram, RAM)
            && spec_ok(&self.generation, GENERATION)
            && brand_ok
            && price_ok
    }

    /// Products passing the filter, in input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

fn non_blank(s: String) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::demo_products;
    use crate::money::Currency;

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = SpecFilter::new().cpu("  ");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&demo_products()).len(), 6);
    }

    #[test]
    fn test_spec_substrings() {
        let products = demo_products();
        let ids: Vec<&str> = SpecFilter::new()
            .cpu("i7")
            .ram("16gb")
            .apply(&products)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["6"]);
    }

    #[test]
    fn test_max_price_is_inclusive() {
        let products = demo_products();
        let ids: Vec<&str> = SpecFilter::new()
            .max_price(Money::new(79999, Currency::USD))
            .apply(&products)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_generation_and_brand() {
        let products = demo_products();
        let matched = SpecFilter::new()
            .generation("7th")
            .brand("pitory")
            .apply(&products);
        assert_eq!(matched.len(), 2);
    }
}
