use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Stock;
use business::domain::catalog::services::StockService;
use business::domain::shared::value_objects::ProductId;

use crate::client::ApiClient;

#[derive(Deserialize)]
struct StockResponse {
    id: u64,
    amount: i64,
}

pub struct StockHttp {
    client: Arc<ApiClient>,
}

impl StockHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StockService for StockHttp {
    async fn get_stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        let url = self.client.stock_url(id)?;
        let response: StockResponse = self.client.get_json(url).await?;

        Ok(Stock {
            id: ProductId::new(response.id),
            amount: response.amount,
        })
    }
}
