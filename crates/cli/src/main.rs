//! Vitrine CLI - order browsing from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List last week's orders
//! vitrine orders list --from 2024-03-01 --to 2024-03-07
//!
//! # Filter, page, and aggregate
//! vitrine orders list --from 2024-03-01 --to 2024-03-07 \
//!     --status PAID_WAITING_SHIP --marketplace MERCADOLIVRE \
//!     --page 2 --page-size 50 --sort total --direction desc --stats
//!
//! # Show one order in full
//! vitrine orders show 731002
//! ```
//!
//! # Environment Variables
//!
//! - `ANYMARKET_TOKEN` - API token (required; loaded from `.env` if present)
//! - `ANYMARKET_BASE_URL` - API base URL override (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine back-office CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse marketplace orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List a page of orders for a date window
    List(commands::orders::ListArgs),
    /// Show one order in full
    Show {
        /// Hub order ID
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Orders { action } => match action {
            OrdersAction::List(args) => commands::orders::list(args).await?,
            OrdersAction::Show { id } => commands::orders::show(id).await?,
        },
    }
    Ok(())
}
