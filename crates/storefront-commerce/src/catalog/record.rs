//! Backend row shape and the price-unit contract.
//!
//! The hosted backend stores products as loosely typed rows with a decimal
//! `price`. Whether that number is dollars or cents is a deployment fact, so
//! it is configured once through [`PriceUnit`] and converted here, before any
//! value reaches the cart.

use crate::catalog::{Category, Product, Specifications};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unit of the raw `price` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceUnit {
    /// Whole currency units with decimals (e.g., 1299.99 dollars).
    #[default]
    Major,
    /// Minor units (e.g., 129999 cents).
    Minor,
}

impl PriceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::Major => "major",
            PriceUnit::Minor => "minor",
        }
    }
}

/// A product row as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub detailed_specs: BTreeMap<String, serde_json::Value>,
}

impl ProductRecord {
    /// Convert into a [`Product`], normalizing the price to minor units.
    pub fn into_product(self, unit: PriceUnit, currency: Currency) -> Result<Product, CommerceError> {
        let id = ProductId::new(self.id);
        if id.is_blank() {
            return Err(CommerceError::Validation("product id is empty".to_string()));
        }
        if self.stock_quantity < 0 {
            return Err(CommerceError::Validation(format!(
                "product {} has negative stock {}",
                id, self.stock_quantity
            )));
        }

        let price = normalize_price(self.price, unit, currency)
            .ok_or_else(|| CommerceError::InvalidPrice(format!("{} for product {}", self.price, id)))?;

        let specifications: Specifications = self
            .detailed_specs
            .into_iter()
            .filter_map(|(k, v)| spec_value(v).map(|v| (k, v)))
            .collect();

        Ok(Product {
            id,
            name: self.name,
            brand: self.brand,
            category: Category::from_label(&self.category),
            description: self.description,
            price,
            images: self.image_urls,
            stock: self.stock_quantity,
            specifications,
        })
    }

    /// Build the backend row for a product.
    pub fn from_product(product: &Product, unit: PriceUnit) -> Self {
        let price = match unit {
            PriceUnit::Major => product.price.to_decimal(),
            PriceUnit::Minor => product.price.amount_cents as f64,
        };
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.label().to_string(),
            price,
            description: product.description.clone(),
            stock_quantity: product.stock,
            image_urls: product.images.clone(),
            detailed_specs: product
                .specifications
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                .collect(),
        }
    }
}

fn normalize_price(raw: f64, unit: PriceUnit, currency: Currency) -> Option<Money> {
    if !raw.is_finite() || raw < 0.0 {
        return None;
    }
    match unit {
        PriceUnit::Major => Money::from_decimal(raw, currency),
        PriceUnit::Minor => {
            if raw.fract() != 0.0 || raw > i64::MAX as f64 {
                return None;
            }
            Some(Money::new(raw as i64, currency))
        }
    }
}

fn spec_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(price: f64) -> ProductRecord {
        serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "Gaming Beast Pro",
            "brand": "Pitory",
            "category": "Gaming",
            "price": price,
            "stock_quantity": 15,
            "image_urls": ["https://example.com/a.jpg"],
            "detailed_specs": {
                "cpu": "Intel Core i7-13700K",
                "ram": "32GB DDR4",
                "storage": "1TB NVMe SSD",
                "display": null
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_major_unit_converts_to_cents() {
        let product = record(1299.99).into_product(PriceUnit::Major, Currency::USD).unwrap();
        assert_eq!(product.price, Money::new(129999, Currency::USD));
        assert_eq!(product.category, Category::Gaming);
        assert_eq!(product.spec("cpu"), Some("Intel Core i7-13700K"));
        assert!(product.spec("display").is_none());
    }

    #[test]
    fn test_minor_unit_is_taken_verbatim() {
        let product = record(129999.0).into_product(PriceUnit::Minor, Currency::USD).unwrap();
        assert_eq!(product.price.amount_cents, 129999);
    }

    #[test]
    fn test_minor_unit_rejects_fractional_price() {
        let err = record(1299.99).into_product(PriceUnit::Minor, Currency::USD).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPrice(_)));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = record(-1.0).into_product(PriceUnit::Major, Currency::USD).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidPrice(_)));
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let mut r = record(10.0);
        r.stock_quantity = -1;
        assert!(matches!(
            r.into_product(PriceUnit::Major, Currency::USD),
            Err(CommerceError::Validation(_))
        ));
    }

    #[test]
    fn test_from_product_keeps_unit() {
        let product = record(1299.99).into_product(PriceUnit::Major, Currency::USD).unwrap();
        let back = ProductRecord::from_product(&product, PriceUnit::Minor);
        assert_eq!(back.price, 129999.0);
        assert_eq!(back.detailed_specs.len(), 3);
        let again = back.into_product(PriceUnit::Minor, Currency::USD).unwrap();
        assert_eq!(again, product);
    }
}
