use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::CatalogProduct;
use business::domain::catalog::services::ProductCatalogService;
use business::domain::shared::value_objects::ProductId;

use crate::client::ApiClient;

#[derive(Deserialize)]
struct ProductResponse {
    id: u64,
    title: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    image: String,
}

impl From<ProductResponse> for CatalogProduct {
    fn from(response: ProductResponse) -> Self {
        Self {
            id: ProductId::new(response.id),
            title: response.title,
            price: response.price,
            image: response.image,
        }
    }
}

pub struct ProductCatalogHttp {
    client: Arc<ApiClient>,
}

impl ProductCatalogHttp {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductCatalogService for ProductCatalogHttp {
    async fn get_product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        let url = self.client.product_url(id)?;
        let response: ProductResponse = self.client.get_json(url).await?;

        Ok(response.into())
    }
}
