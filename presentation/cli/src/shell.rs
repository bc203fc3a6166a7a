use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use business::application::cart::store::CartStore;
use business::domain::cart::model::Cart;

use crate::commands::{self, Action};
use crate::view::cart_view::CartView;

const HELP: &str = "comandos: show | add <id> | rm <id> | inc <id> | dec <id> | set <id> <qtd> | help | quit";

/// Interactive cart session. After each command the cart is re-rendered if
/// the store published a change, then the prompt is shown again.
pub async fn run(store: Arc<CartStore>) -> anyhow::Result<()> {
    let mut receiver = store.subscribe();
    print!("{}", CartView::from_cart(&store.cart()).render());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            input => match Action::parse_line(input) {
                Ok(Action::Show) => print!("{}", CartView::from_cart(&store.cart()).render()),
                Ok(action) => {
                    if let Err(error) = commands::execute(&store, action).await {
                        eprintln!("Falha ao salvar o carrinho: {}", error);
                    }
                }
                Err(message) => eprintln!("{}", message),
            },
        }
        if let Some(rendered) = render_if_changed(&mut receiver) {
            print!("{}", rendered);
        }
        prompt();
    }

    Ok(())
}

/// Renders the cart when a mutation was published since the last call.
fn render_if_changed(receiver: &mut watch::Receiver<Cart>) -> Option<String> {
    match receiver.has_changed() {
        Ok(true) => Some(CartView::from_cart(&receiver.borrow_and_update()).render()),
        _ => None,
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_once_per_published_change() {
        let (sender, mut receiver) = watch::channel(Cart::new());

        assert_eq!(render_if_changed(&mut receiver), None);

        sender.send_replace(Cart::new());

        assert_eq!(
            render_if_changed(&mut receiver).as_deref(),
            Some("Carrinho vazio\n\nTOTAL  R$ 0,00\n")
        );
        assert_eq!(render_if_changed(&mut receiver), None);
    }
}
