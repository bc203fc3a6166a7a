use clap::Subcommand;

use business::application::cart::store::{CartStore, UpdateProductAmount};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductId;

use crate::view::cart_view::CartView;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the cart
    Show,
    /// Add one unit of a product (fetched from the catalog)
    Add { product_id: ProductId },
    /// Remove a product from the cart
    Remove { product_id: ProductId },
    /// Raise the amount of a cart item by one
    Increment { product_id: ProductId },
    /// Lower the amount of a cart item by one (not below one)
    Decrement { product_id: ProductId },
    /// Set the amount of a cart item
    Set {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Interactive session that re-renders the cart after every change
    Shell,
}

/// A cart action, from either a subcommand or a shell line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Show,
    Add(ProductId),
    Remove(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Set(ProductId, i64),
}

impl Action {
    /// `None` for `shell`, which is not a single action.
    pub fn from_command(command: &Command) -> Option<Self> {
        match command {
            Command::Show => Some(Action::Show),
            Command::Add { product_id } => Some(Action::Add(*product_id)),
            Command::Remove { product_id } => Some(Action::Remove(*product_id)),
            Command::Increment { product_id } => Some(Action::Increment(*product_id)),
            Command::Decrement { product_id } => Some(Action::Decrement(*product_id)),
            Command::Set { product_id, amount } => Some(Action::Set(*product_id, *amount)),
            Command::Shell => None,
        }
    }

    /// Parses a shell line such as `add 3`, `dec 3` or `set 3 5`.
    pub fn parse_line(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or_else(|| "empty command".to_string())?;
        let mut product_id = || -> Result<ProductId, String> {
            parts
                .next()
                .ok_or_else(|| format!("{} needs a product id", verb))?
                .parse::<ProductId>()
        };

        let action = match verb {
            "show" | "ls" => Action::Show,
            "add" => Action::Add(product_id()?),
            "remove" | "rm" => Action::Remove(product_id()?),
            "increment" | "inc" | "+" => Action::Increment(product_id()?),
            "decrement" | "dec" | "-" => Action::Decrement(product_id()?),
            "set" => {
                let id = product_id()?;
                let amount = parts
                    .next()
                    .ok_or_else(|| "set needs an amount".to_string())?
                    .parse::<i64>()
                    .map_err(|_| "amount must be an integer".to_string())?;
                Action::Set(id, amount)
            }
            other => return Err(format!("unknown command: {}", other)),
        };

        Ok(action)
    }
}

/// Runs one action against the store. `Show` is a no-op here; callers render.
pub async fn execute(store: &CartStore, action: Action) -> Result<(), RepositoryError> {
    match action {
        Action::Show => {}
        Action::Add(id) => store.add_product(id).await?,
        Action::Remove(id) => store.remove_product(id).await?,
        Action::Increment(id) => {
            let update = CartView::from_cart(&store.cart())
                .increment(id)
                .unwrap_or_else(|| not_in_cart(id));
            store.update_product_amount(update).await?
        }
        Action::Decrement(id) => {
            let view = CartView::from_cart(&store.cart());
            match view.decrement(id) {
                Some(update) => store.update_product_amount(update).await?,
                None if view.contains(id) => {
                    tracing::debug!(%id, "decrement disabled at one unit")
                }
                None => store.update_product_amount(not_in_cart(id)).await?,
            }
        }
        Action::Set(id, amount) => {
            store
                .update_product_amount(UpdateProductAmount {
                    product_id: id,
                    amount,
                })
                .await?
        }
    }

    Ok(())
}

/// Request for a row the view does not show; the store rejects it with the
/// usual quantity-change notice.
fn not_in_cart(product_id: ProductId) -> UpdateProductAmount {
    UpdateProductAmount {
        product_id,
        amount: 1,
    }
}
