//! JSON file catalog, a local stand-in for the hosted product backend.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use storefront_commerce::catalog::{
    CatalogProvider, InMemoryCatalog, PriceUnit, Product, ProductDraft, ProductRecord,
};
use storefront_commerce::{CommerceError, Currency, ProductId};

/// Products read from a JSON array of backend records.
///
/// Every successful write rewrites the whole file.
pub struct FileCatalog {
    path: PathBuf,
    unit: PriceUnit,
    inner: InMemoryCatalog,
}

impl FileCatalog {
    /// Open `path`. A missing file is an empty catalog.
    pub fn open(path: &Path, unit: PriceUnit, currency: Currency) -> Result<Self> {
        let products = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
            let records: Vec<ProductRecord> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
            records
                .into_iter()
                .map(|r| {
                    let id = r.id.clone();
                    r.into_product(unit, currency)
                        .with_context(|| format!("Invalid product record '{}'", id))
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            Vec::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            unit,
            inner: InMemoryCatalog::from_products(products, currency)?,
        })
    }

    fn persist(&self) -> Result<(), CommerceError> {
        let records: Vec<ProductRecord> = self
            .inner
            .snapshot()
            .iter()
            .map(|p| ProductRecord::from_product(p, self.unit))
            .collect();
        let content = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.path, content).map_err(|e| {
            CommerceError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), products = records.len(), "catalog saved");
        Ok(())
    }
}

#[async_trait]
impl CatalogProvider for FileCatalog {
    async fn get(&self, id: &ProductId) -> Result<Product, CommerceError> {
        self.inner.get(id).await
    }

    async fn list(&self) -> Result<Vec<Product>, CommerceError> {
        self.inner.list().await
    }

    async fn insert(&self, draft: ProductDraft) -> Result<Product, CommerceError> {
        let product = self.inner.insert(draft).await?;
        self.persist()?;
        Ok(product)
    }

    async fn update(&self, id: &ProductId, draft: ProductDraft) -> Result<Product, CommerceError> {
        let product = self.inner.update(id, draft).await?;
        self.persist()?;
        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<Product, CommerceError> {
        let product = self.inner.delete(id).await?;
        self.persist()?;
        Ok(product)
    }
}
