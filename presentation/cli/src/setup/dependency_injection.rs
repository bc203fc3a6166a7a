use std::sync::Arc;

use anyhow::Context;

use business::application::cart::add_product::AddProductUseCaseImpl;
use business::application::cart::load::LoadCartUseCaseImpl;
use business::application::cart::remove_product::RemoveProductUseCaseImpl;
use business::application::cart::store::{CartStore, CartUseCases};
use business::application::cart::update_product_amount::UpdateProductAmountUseCaseImpl;
use catalog::client::ApiClient;
use catalog::product_catalog::ProductCatalogHttp;
use catalog::stock::StockHttp;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryStorage;
use persistence::storage::FileStorage;

use crate::config::app_config::AppConfig;
use crate::toast::ToastNotifier;

pub struct DependencyContainer {
    pub store: Arc<CartStore>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let notifier = Arc::new(ToastNotifier);

        // Infrastructure adapters
        let storage = FileStorage::open(&config.storage.path).with_context(|| {
            format!(
                "could not open cart storage at {}",
                config.storage.path.display()
            )
        })?;
        let cart_repository = Arc::new(CartRepositoryStorage::new(Arc::new(storage)));

        let api_client = Arc::new(
            ApiClient::new(&config.api.base_url, config.api.timeout)
                .with_context(|| format!("invalid API base URL: {}", config.api.base_url))?,
        );
        let product_catalog = Arc::new(ProductCatalogHttp::new(api_client.clone()));
        let stock = Arc::new(StockHttp::new(api_client));

        // Cart use cases
        let update_product_amount = Arc::new(UpdateProductAmountUseCaseImpl {
            repository: cart_repository.clone(),
            stock,
            logger: logger.clone(),
        });
        let use_cases = CartUseCases {
            load: Arc::new(LoadCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            add_product: Arc::new(AddProductUseCaseImpl {
                repository: cart_repository.clone(),
                catalog: product_catalog,
                update_amount: update_product_amount.clone(),
                logger: logger.clone(),
            }),
            remove_product: Arc::new(RemoveProductUseCaseImpl {
                repository: cart_repository,
                logger: logger.clone(),
            }),
            update_product_amount,
        };

        let store = CartStore::open(use_cases, notifier, logger)
            .await
            .context("could not load the stored cart")?;

        Ok(Self {
            store: Arc::new(store),
        })
    }
}
