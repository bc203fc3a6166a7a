use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;

use super::errors::CatalogError;
use super::model::{CatalogProduct, Stock};

/// Service port for the remote product source (`products/{id}`).
#[async_trait]
pub trait ProductCatalogService: Send + Sync {
    async fn get_product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError>;
}

/// Service port for the remote stock source (`stock/{id}`).
#[async_trait]
pub trait StockService: Send + Sync {
    async fn get_stock(&self, id: ProductId) -> Result<Stock, CatalogError>;
}
