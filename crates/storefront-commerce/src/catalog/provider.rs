//! Catalog provider seam and the in-memory implementation.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::catalog::{Product, ProductDraft};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use crate::search::ProductQuery;

/// Source of truth for product records.
///
/// Implementations may sit in front of a hosted backend; the cart only ever
/// sees the resolved [`Product`] values they return.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch one product.
    async fn get(&self, id: &ProductId) -> Result<Product, CommerceError>;

    /// All products in catalog order.
    async fn list(&self) -> Result<Vec<Product>, CommerceError>;

    /// Create a product from a draft and return it with its new id.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, CommerceError>;

    /// Overwrite an existing product's editable fields.
    async fn update(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, CommerceError>;

    /// Delete a product and return it.
    async fn delete(&self, id: &ProductId) -> Result<Product, CommerceError>;

    /// Products matching `query`, sorted by it.
    async fn search(&self, query: &ProductQuery) -> Result<Vec<Product>, CommerceError> {
        let products = self.list().await?;
        Ok(query.apply(&products).into_iter().cloned().collect())
    }
}

/// Catalog held in memory, in insertion order.
#[derive(Debug)]
pub struct InMemoryCatalog {
    currency: Currency,
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
    /// Create an empty catalog priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            products: RwLock::new(Vec::new()),
        }
    }

    /// Create a catalog from existing products.
    ///
    /// Fails on duplicate ids or products priced in another currency.
    pub fn from_products(products: Vec<Product>, currency: Currency) -> Result<Self, CommerceError> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
            check_currency(currency, product)?;
        }
        Ok(Self {
            currency,
            products: RwLock::new(products),
        })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Snapshot of every product.
    pub fn snapshot(&self) -> Vec<Product> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn check_currency(expected: Currency, product: &Product) -> Result<(), CommerceError> {
    if product.price.currency != expected {
        return Err(CommerceError::CurrencyMismatch {
            expected: expected.code().to_string(),
            got: product.price.currency.code().to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn get(&self, id: &ProductId) -> Result<Product, CommerceError> {
        self.read()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    async fn list(&self) -> Result<Vec<Product>, CommerceError> {
        Ok(self.snapshot())
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, CommerceError> {
        let product = draft.into_product(ProductId::generate())?;
        check_currency(self.currency, &product)?;

        let mut products = self.write();
        if products.iter().any(|p| p.id == product.id) {
            return Err(CommerceError::DuplicateProduct(product.id.to_string()));
        }
        products.push(product.clone());
        tracing::debug!(product_id = %product.id, name = %product.name, "product added");
        Ok(product)
    }

    async fn update(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, CommerceError> {
        let mut products = self.write();
        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;

        let mut updated = product.clone();
        draft.apply_to(&mut updated)?;
        check_currency(self.currency, &updated)?;
        *product = updated.clone();
        tracing::debug!(product_id = %id, "product updated");
        Ok(updated)
    }

    async fn delete(&self, id: &ProductId) -> Result<Product, CommerceError> {
        let mut products = self.write();
        let index = products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        let removed = products.remove(index);
        tracing::debug!(product_id = %id, "product deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed, Category, Specifications};
    use crate::money::Money;
    use crate::search::SortOption;

    fn draft(name: &str, cents: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            brand: "Apex".to_string(),
            category: Category::Accessories,
            price: Money::new(cents, Currency::USD),
            stock: 3,
            description: "An accessory".to_string(),
            image: None,
            specifications: Specifications::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_get_list() {
        let catalog = InMemoryCatalog::new(Currency::USD);
        let created = catalog.insert(draft("Mouse", 2500)).await.unwrap();

        let fetched = catalog.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(catalog.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_other_currency() {
        let catalog = InMemoryCatalog::new(Currency::USD);
        let mut d = draft("Mouse", 2500);
        d.price = Money::new(2500, Currency::EUR);
        assert!(matches!(
            catalog.insert(d).await,
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let catalog = InMemoryCatalog::new(Currency::USD);
        let created = catalog.insert(draft("Mouse", 2500)).await.unwrap();

        let updated = catalog
            .update(&created.id, draft("Mouse Pro", 3500))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(catalog.get(&created.id).await.unwrap().name, "Mouse Pro");
    }

    #[tokio::test]
    async fn test_invalid_update_leaves_product_untouched() {
        let catalog = InMemoryCatalog::new(Currency::USD);
        let created = catalog.insert(draft("Mouse", 2500)).await.unwrap();

        let result = catalog.update(&created.id, draft("", 100)).await;
        assert!(matches!(result, Err(CommerceError::Validation(_))));
        assert_eq!(catalog.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let catalog = InMemoryCatalog::new(Currency::USD);
        let result = catalog.delete(&ProductId::new("missing")).await;
        assert_eq!(result, Err(CommerceError::ProductNotFound("missing".to_string())));
    }

    #[tokio::test]
    async fn test_delete_removes_product() {
        let catalog = InMemoryCatalog::from_products(seed::demo_products(), Currency::USD).unwrap();
        let before = catalog.len();
        let removed = catalog.delete(&ProductId::new("3")).await.unwrap();
        assert_eq!(removed.name, "Creator Station");
        assert_eq!(catalog.len(), before - 1);
        assert!(catalog.get(&ProductId::new("3")).await.is_err());
    }

    #[tokio::test]
    async fn test_search_uses_query() {
        let catalog = InMemoryCatalog::from_products(seed::demo_products(), Currency::USD).unwrap();
        let query = ProductQuery::new()
            .with_category(Category::Gaming)
            .with_sort(SortOption::PriceDesc);
        let names: Vec<String> = catalog
            .search(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Gaming Pro Max", "Gaming Beast Pro"]);
    }

    #[test]
    fn test_from_products_rejects_duplicates() {
        let mut products = seed::demo_products();
        products.push(products[0].clone());
        assert!(matches!(
            InMemoryCatalog::from_products(products, Currency::USD),
            Err(CommerceError::DuplicateProduct(_))
        ));
    }
}
