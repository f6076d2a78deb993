//! PC builder assistant.
//!
//! Turns two answers (what the machine is for, how much to spend) into a
//! single product recommendation from the catalog.

mod rules;

pub use rules::{profile_for, BuildProfile};

use crate::catalog::specs::RAM;
use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the shopper will mostly do with the PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseCase {
    Gaming,
    Work,
    Creative,
    General,
}

impl UseCase {
    pub const ALL: [UseCase; 4] = [
        UseCase::Gaming,
        UseCase::Work,
        UseCase::Creative,
        UseCase::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::Gaming => "gaming",
            UseCase::Work => "work",
            UseCase::Creative => "creative",
            UseCase::General => "general",
        }
    }
}

/// Spending bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Budget {
    Entry,
    Mid,
    High,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Entry, Budget::Mid, Budget::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Entry => "entry",
            Budget::Mid => "mid",
            Budget::High => "high",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UseCase::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::Validation(format!("unknown use case: {}", s)))
    }
}

impl FromStr for Budget {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Budget::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::Validation(format!("unknown budget: {}", s)))
    }
}

/// The shopper's answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    pub use_case: UseCase,
    pub budget: Budget,
}

/// A recommended product and the profile it was chosen against.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub product: Product,
    pub profile: BuildProfile,
    /// The product misses the budget or RAM floor; it is the cheapest
    /// product in the category.
    pub fallback: bool,
}

/// Pick a product for `answers`.
///
/// Among products in the profile's category that fit under the price ceiling
/// and meet the RAM floor, the most expensive wins. Without a match the
/// cheapest product of the category is offered instead.
pub fn recommend(products: &[Product], answers: &Answers) -> Option<Recommendation> {
    let profile = profile_for(answers.use_case, answers.budget);
    let in_category = || products.iter().filter(|p| p.category == profile.category);

    let best = in_category()
        .filter(|p| profile.fits(p))
        .max_by_key(|p| p.price.amount_cents);

    let (product, fallback) = match best {
        Some(p) => (p, false),
        None => (in_category().min_by_key(|p| p.price.amount_cents)?, true),
    };

    tracing::debug!(
        use_case = %answers.use_case,
        budget = %answers.budget,
        product_id = %product.id,
        fallback,
        "build recommendation"
    );

    Some(Recommendation {
        product: product.clone(),
        profile,
        fallback,
    })
}

/// RAM in GB from a spec value like `32GB DDR4`.
pub fn ram_gb(product: &Product) -> Option<u32> {
    parse_ram_gb(product.spec(RAM)?)
}

fn parse_ram_gb(value: &str) -> Option<u32> {
    let value = value.trim();
    let digits_end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, rest) = value.split_at(digits_end);
    if !rest.trim_start().to_ascii_lowercase().starts_with("gb") {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::demo_products;
    use crate::catalog::Category;

    fn pick(use_case: UseCase, budget: Budget) -> Option<Recommendation> {
        recommend(&demo_products(), &Answers { use_case, budget })
    }

    #[test]
    fn test_parse_ram() {
        assert_eq!(parse_ram_gb("32GB DDR4"), Some(32));
        assert_eq!(parse_ram_gb(" 8 GB"), Some(8));
        assert_eq!(parse_ram_gb("DDR5 64GB"), None);
        assert_eq!(parse_ram_gb("lots"), None);
    }

    #[test]
    fn test_most_expensive_fit_wins() {
        let rec = pick(UseCase::Gaming, Budget::High).unwrap();
        assert_eq!(rec.product.name, "Gaming Pro Max");
        assert!(!rec.fallback);

        let rec = pick(UseCase::Gaming, Budget::Mid).unwrap();
        assert_eq!(rec.product.name, "Gaming Beast Pro");
    }

    #[test]
    fn test_falls_back_to_cheapest_in_category() {
        let rec = pick(UseCase::Work, Budget::Entry).unwrap();
        assert_eq!(rec.product.name, "Office Elite");
        assert!(rec.fallback);
    }

    #[test]
    fn test_ram_floor() {
        let rec = pick(UseCase::Creative, Budget::Mid).unwrap();
        assert_eq!(rec.product.name, "Creator Station");
        assert!(!rec.fallback);
        assert!(ram_gb(&rec.product).unwrap() >= rec.profile.min_ram_gb);
    }

    #[test]
    fn test_missing_category() {
        let products: Vec<Product> = demo_products()
            .into_iter()
            .filter(|p| p.category != Category::GeneralUse)
            .collect();
        let answers = Answers {
            use_case: UseCase::General,
            budget: Budget::Entry,
        };
        assert!(recommend(&products, &answers).is_none());
    }

    #[test]
    fn test_parse_answers() {
        assert_eq!("Gaming".parse::<UseCase>().unwrap(), UseCase::Gaming);
        assert_eq!(" mid ".parse::<Budget>().unwrap(), Budget::Mid);
        assert!("luxury".parse::<Budget>().is_err());
    }
}
