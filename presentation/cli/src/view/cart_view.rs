use rust_decimal::Decimal;

use business::application::cart::store::UpdateProductAmount;
use business::domain::cart::model::Cart;
use business::domain::shared::value_objects::ProductId;

use super::format::format_price;

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub id: ProductId,
    pub title: String,
    pub amount: i64,
    pub price_formatted: String,
    pub subtotal: String,
    /// The decrement control is disabled at one unit.
    pub can_decrement: bool,
}

/// Presentation model of the cart page.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub total: String,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        let rows = cart
            .items()
            .iter()
            .map(|product| CartRow {
                id: product.id,
                title: product.title.clone(),
                amount: product.amount,
                price_formatted: format_price(product.price),
                subtotal: format_price(product.subtotal()),
                can_decrement: product.amount > 1,
            })
            .collect();

        // Known discrepancy kept as shipped: the total adds unit prices and
        // ignores quantities, unlike the per-row subtotals.
        let total = cart
            .items()
            .iter()
            .fold(Decimal::ZERO, |sum, product| sum + product.price);

        Self {
            rows,
            total: format_price(total),
        }
    }

    fn row(&self, id: ProductId) -> Option<&CartRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.row(id).is_some()
    }

    /// Request for the "+" control of a row, `None` if the row is not shown.
    pub fn increment(&self, id: ProductId) -> Option<UpdateProductAmount> {
        self.row(id).map(|row| UpdateProductAmount {
            product_id: row.id,
            amount: row.amount + 1,
        })
    }

    /// Request for the "-" control of a row, `None` while it is disabled.
    pub fn decrement(&self, id: ProductId) -> Option<UpdateProductAmount> {
        self.row(id)
            .filter(|row| row.can_decrement)
            .map(|row| UpdateProductAmount {
                product_id: row.id,
                amount: row.amount - 1,
            })
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return format!("Carrinho vazio\n\nTOTAL  {}\n", self.total);
        }

        let mut out = format!(
            "{:>6}  {:<40}  {:>12}  {:>5}  {:>14}\n",
            "ID", "PRODUTO", "PREÇO", "QTD", "SUBTOTAL"
        );
        for row in &self.rows {
            out.push_str(&format!(
                "{:>6}  {:<40}  {:>12}  {:>5}  {:>14}\n",
                row.id.value(),
                truncate(&row.title, 40),
                row.price_formatted,
                row.amount,
                row.subtotal
            ));
        }
        out.push_str(&format!("\nTOTAL  {}\n", self.total));
        out
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
