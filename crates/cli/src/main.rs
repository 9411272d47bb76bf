//! QKart CLI - drive the storefront client from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! qkart products list
//!
//! # Search it server-side
//! qkart products search "iphone"
//!
//! # Register an account
//! qkart register -u crio-user -p learnbydoing -c learnbydoing
//!
//! # Cart operations (need QKART_USERNAME and QKART_TOKEN in the env)
//! qkart cart show
//! qkart cart add v4sLtEcMpzabRyfx
//! qkart cart set v4sLtEcMpzabRyfx 3
//! qkart cart remove v4sLtEcMpzabRyfx
//! ```
//!
//! Configuration comes from environment variables (see
//! `qkart_storefront::config`); a `.env` file is honored.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use qkart_storefront::api::BackendClient;
use qkart_storefront::config::StorefrontConfig;
use qkart_storefront::error::AppError;

mod commands;

#[derive(Parser)]
#[command(name = "qkart")]
#[command(author, version, about = "QKart storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and search the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Register a new account
    Register {
        /// Username (at least 6 characters)
        #[arg(short, long)]
        username: String,

        /// Password (at least 6 characters)
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(short, long)]
        confirm_password: String,
    },
    /// View and update the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List the full catalog
    List,
    /// Search the catalog server-side
    Search {
        /// Search text (matches names and categories)
        query: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the reconciled cart with line costs
    Show,
    /// Add one unit of a product (card-button semantics)
    Add {
        /// Product ID to add
        product_id: String,
    },
    /// Set a product's quantity (stepper semantics)
    Set {
        /// Product ID to update
        product_id: String,

        /// Desired quantity (0 removes the line)
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID to remove
        product_id: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::debug!("Command failed: {e}");
        tracing::error!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;
    let client = BackendClient::new(&config)?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list(&client).await?,
            ProductsAction::Search { query } => {
                commands::products::search(&client, &query).await?;
            }
        },
        Commands::Register {
            username,
            password,
            confirm_password,
        } => commands::auth::register(&client, username, password, confirm_password).await?,
        Commands::Cart { action } => {
            let session = config.session.clone().ok_or(AppError::NoSession)?;
            match action {
                CartAction::Show => commands::cart::show(&client, &session).await?,
                CartAction::Add { product_id } => {
                    commands::cart::add(&client, &session, product_id.into()).await?;
                }
                CartAction::Set {
                    product_id,
                    quantity,
                } => {
                    commands::cart::set(&client, &session, product_id.into(), quantity).await?;
                }
                CartAction::Remove { product_id } => {
                    commands::cart::set(&client, &session, product_id.into(), 0).await?;
                }
            }
        }
    }
    Ok(())
}
