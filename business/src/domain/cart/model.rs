use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::CartError;
use crate::domain::catalog::model::CatalogProduct;
use crate::domain::shared::value_objects::ProductId;

/// A cart line item: the catalog record plus the quantity in the cart.
///
/// Serialized flat, so a persisted line item looks like the catalog
/// payload with an extra `amount` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub amount: i64,
}

impl Product {
    /// A freshly added line item always starts at one unit.
    pub fn from_catalog(product: CatalogProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.amount)
    }
}

/// Ordered list of line items, unique by product id.
///
/// Every mutation returns a new `Cart` and leaves `self` untouched, so a
/// snapshot taken before an operation stays valid if the operation fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(items: Vec<Product>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Appends a new line item with `amount = 1`.
    pub fn with_new_product(&self, product: CatalogProduct) -> Result<Self, CartError> {
        if self.find(product.id).is_some() {
            return Err(CartError::ItemAlreadyInCart);
        }

        let mut items = self.items.clone();
        items.push(Product::from_catalog(product));
        Ok(Self { items })
    }

    pub fn without_product(&self, id: ProductId) -> Result<Self, CartError> {
        let items: Vec<Product> = self.items.iter().filter(|p| p.id != id).cloned().collect();

        if items.len() == self.items.len() {
            return Err(CartError::ItemNotInCart);
        }

        Ok(Self { items })
    }

    /// Sets the amount of one line item. Stock and lower-bound checks are
    /// the caller's job; this only enforces that the item exists.
    pub fn with_amount(&self, id: ProductId, amount: i64) -> Result<Self, CartError> {
        if self.find(id).is_none() {
            return Err(CartError::ItemNotInCart);
        }

        let items = self
            .items
            .iter()
            .map(|p| {
                if p.id == id {
                    Product {
                        amount,
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect();

        Ok(Self { items })
    }
}
