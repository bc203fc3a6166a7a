use clap::Parser;
use dotenvy::dotenv;

mod commands;
mod config;
mod setup;
mod shell;
mod toast;
mod view;

use commands::{Action, Command};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;
use view::cart_view::CartView;

/// RocketShoes cart
///
/// Wires the cart store to the storefront API and local storage, then runs
/// one cart action or an interactive session.
/// - config/: Environment configuration (API, storage)
/// - setup/: Dependency injection
/// - view/: Cart page rendering
#[derive(Parser)]
#[command(name = "rocketshoes")]
#[command(version, about = "RocketShoes shopping cart")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter, on stderr to keep the cart output clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    tracing::debug!(
        api = %config.api.base_url,
        storage = %config.storage.path.display(),
        "configuration loaded"
    );

    // 4. Wire dependencies and load the stored cart
    let container = DependencyContainer::new(&config).await?;

    // 5. Run
    match Action::from_command(&cli.command) {
        Some(action) => {
            commands::execute(&container.store, action).await?;
            print!("{}", CartView::from_cart(&container.store.cart()).render());
        }
        None => shell::run(container.store).await?,
    }

    Ok(())
}
