//! Riddhi Collection CLI - catalog browsing and a scripted store tour.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally narrowed and sorted
//! riddhi catalog list --category silk --sort price-ascending
//!
//! # Search names and descriptions, printing raw JSON
//! riddhi catalog list --search cotton --json
//!
//! # Show one product in full
//! riddhi catalog show 3
//!
//! # Print the admin dashboard numbers
//! riddhi admin metrics
//!
//! # Print the synthesized order table
//! riddhi admin orders
//!
//! # Walk a full shopper journey through a live session
//! riddhi tour
//! ```
//!
//! # Commands
//!
//! - `catalog list` - List products with filtering and sorting
//! - `catalog show` - Show a single product
//! - `admin metrics` - Dashboard headline numbers
//! - `admin orders` - Synthesized order history
//! - `tour` - Scripted walkthrough of a shopper session

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "riddhi")]
#[command(author, version, about = "Riddhi Collection CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the sample catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect the admin dashboard
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Walk a scripted shopper journey through a live session
    Tour,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally narrowed and sorted
    List {
        /// Category to narrow to (`all`, `bridal`, `silk`, `casual`, `designer`, `festive`)
        #[arg(short, long, default_value = "all")]
        category: String,

        /// Sort order (`featured`, `price-ascending`, `price-descending`, `rating-descending`)
        #[arg(short, long, default_value = "featured")]
        sort: String,

        /// Substring to search names and descriptions for
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show a single product in full
    Show {
        /// Product id
        id: u32,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Dashboard headline numbers
    Metrics {
        /// Print raw JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Synthesized order history
    Orders {
        /// Only the dashboard's recent rows
        #[arg(long)]
        recent: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List {
                category,
                sort,
                search,
                json,
            } => {
                commands::catalog::list(&category, &sort, search.as_deref(), json)?;
            }
            CatalogAction::Show { id } => commands::catalog::show(id)?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Metrics { json } => commands::admin::metrics(json)?,
            AdminAction::Orders { recent } => commands::admin::orders(recent),
        },
        Commands::Tour => commands::tour::run().await?,
    }
    Ok(())
}
