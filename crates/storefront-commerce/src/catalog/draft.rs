//! Admin product form payload.

use crate::catalog::{Category, Product, SpecSchema, Specifications, PLACEHOLDER_IMAGE};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Fields submitted when adding or editing a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub price: Money,
    pub stock: i64,
    pub description: String,
    /// Main image URL. Blank means the placeholder.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub specifications: Specifications,
}

impl ProductDraft {
    /// Check required fields and category specifications.
    pub fn validate(&self) -> Result<(), CommerceError> {
        for (field, value) in [
            ("name", &self.name),
            ("brand", &self.brand),
            ("description", &self.description),
        ] {
            if value.trim().is_empty() {
                return Err(CommerceError::Validation(format!("{} is required", field)));
            }
        }
        if self.price.is_negative() {
            return Err(CommerceError::InvalidPrice(self.price.display()));
        }
        if self.stock < 0 {
            return Err(CommerceError::Validation(format!(
                "stock must not be negative, got {}",
                self.stock
            )));
        }
        SpecSchema::validate(&self.category, &self.specifications)
    }

    /// Validate and build a new product with `id`.
    pub fn into_product(self, id: ProductId) -> Result<Product, CommerceError> {
        self.validate()?;
        let image = self.image_url();
        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            brand: self.brand.trim().to_string(),
            category: self.category,
            description: self.description.trim().to_string(),
            price: self.price,
            images: vec![image],
            stock: self.stock,
            specifications: self.specifications,
        })
    }

    /// Validate and overwrite the editable fields of `product`.
    ///
    /// The id is kept; the main image is replaced and any gallery images
    /// after it are preserved.
    pub fn apply_to(self, product: &mut Product) -> Result<(), CommerceError> {
        self.validate()?;
        let image = self.image_url();
        product.name = self.name.trim().to_string();
        product.brand = self.brand.trim().to_string();
        product.category = self.category;
        product.description = self.description.trim().to_string();
        product.price = self.price;
        product.stock = self.stock;
        product.specifications = self.specifications;
        match product.images.first_mut() {
            Some(main) => *main = image,
            None => product.images.push(image),
        }
        Ok(())
    }

    /// Draft pre-filled from an existing product (the edit form).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category.clone(),
            price: product.price,
            stock: product.stock,
            description: product.description.clone(),
            image: product.images.first().cloned(),
            specifications: product.specifications.clone(),
        }
    }

    fn image_url(&self) -> String {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::specs::{CPU, RAM, STORAGE};
    use crate::money::Currency;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Aether-Wing Mouse".to_string(),
            brand: "Apex".to_string(),
            category: Category::Accessories,
            price: Money::new(4999, Currency::USD),
            stock: 40,
            description: "Lightweight wireless mouse".to_string(),
            image: None,
            specifications: Specifications::new(),
        }
    }

    #[test]
    fn test_into_product_uses_placeholder_image() {
        let product = draft().into_product(ProductId::new("10")).unwrap();
        assert_eq!(product.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(product.id.as_str(), "10");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert_eq!(
            d.validate(),
            Err(CommerceError::Validation("name is required".to_string()))
        );
    }

    #[test]
    fn test_negative_price_and_stock_are_rejected() {
        let mut d = draft();
        d.price = Money::new(-1, Currency::USD);
        assert!(matches!(d.validate(), Err(CommerceError::InvalidPrice(_))));

        let mut d = draft();
        d.stock = -5;
        assert!(matches!(d.validate(), Err(CommerceError::Validation(_))));
    }

    #[test]
    fn test_desktop_requires_specs() {
        let mut d = draft();
        d.category = Category::Desktop;
        assert!(matches!(
            d.validate(),
            Err(CommerceError::MissingSpecification { .. })
        ));

        d.specifications = [(CPU, "Ryzen 9"), (RAM, "64GB DDR5"), (STORAGE, "2TB NVMe SSD")]
            .into_iter()
            .collect();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_apply_to_keeps_id_and_gallery() {
        let mut product = Product::new("7", "Old", Category::Accessories, Money::new(1, Currency::USD))
            .with_image("main.png")
            .with_image("side.png");

        let mut d = draft();
        d.image = Some("new.png".to_string());
        d.apply_to(&mut product).unwrap();

        assert_eq!(product.id.as_str(), "7");
        assert_eq!(product.name, "Aether-Wing Mouse");
        assert_eq!(product.images, vec!["new.png".to_string(), "side.png".to_string()]);
    }
}
