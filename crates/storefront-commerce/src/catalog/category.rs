//! Storefront product categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// Known categories get their own variant; anything else the backend sends
/// is kept verbatim in [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Desktop,
    Laptop,
    Accessories,
    Printer,
    Networking,
    Gaming,
    Work,
    Creative,
    GeneralUse,
    Other(String),
}

impl Category {
    /// Categories offered by the storefront filter, in display order.
    pub const KNOWN: [Category; 9] = [
        Category::Desktop,
        Category::Laptop,
        Category::Accessories,
        Category::Printer,
        Category::Networking,
        Category::Gaming,
        Category::Work,
        Category::Creative,
        Category::GeneralUse,
    ];

    /// Display label (e.g., "General Use").
    pub fn label(&self) -> &str {
        match self {
            Category::Desktop => "Desktop",
            Category::Laptop => "Laptop",
            Category::Accessories => "Accessories",
            Category::Printer => "Printer",
            Category::Networking => "Networking",
            Category::Gaming => "Gaming",
            Category::Work => "Work",
            Category::Creative => "Creative",
            Category::GeneralUse => "General Use",
            Category::Other(label) => label,
        }
    }

    /// Parse a label, case-insensitively. Unknown labels become `Other`.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        Self::KNOWN
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Category::Other(trimmed.to_string()))
    }

    /// Whether products in this category are complete computers.
    pub fn is_computer(&self) -> bool {
        matches!(
            self,
            Category::Desktop
                | Category::Laptop
                | Category::Gaming
                | Category::Work
                | Category::Creative
                | Category::GeneralUse
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from_label(&s)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from_label(s)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Category::from_label("gaming"), Category::Gaming);
        assert_eq!(Category::from_label(" General Use "), Category::GeneralUse);
    }

    #[test]
    fn test_unknown_label_is_preserved() {
        let cat = Category::from_label("Monitors");
        assert_eq!(cat, Category::Other("Monitors".to_string()));
        assert_eq!(cat.label(), "Monitors");
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Category::GeneralUse).unwrap();
        assert_eq!(json, "\"General Use\"");
        let back: Category = serde_json::from_str("\"Laptop\"").unwrap();
        assert_eq!(back, Category::Laptop);
    }

    #[test]
    fn test_computer_categories() {
        assert!(Category::Gaming.is_computer());
        assert!(!Category::Printer.is_computer());
        assert!(!Category::Other("Cables".into()).is_computer());
    }
}
