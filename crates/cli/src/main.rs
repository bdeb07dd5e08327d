//! Store Builder CLI - Subdomain checks, product lookups and form validation.
//!
//! # Usage
//!
//! ```bash
//! # Ask the availability service about a subdomain
//! sb-cli check-domain myshop
//!
//! # Fetch a product from the catalog and print it as JSON
//! sb-cli product 6642f1c0a1b2c3d4e5f60718
//!
//! # Run the store form validation without a browser
//! sb-cli validate --name "Corner Shop" --domain cornershop --country Bangladesh \
//!     --category Fashion --currency BDT --email owner@cornershop.com
//! ```
//!
//! Remote endpoints come from the same environment variables as the web
//! server (`DOMAIN_CHECK_BASE_URL`, `DOMAIN_PARENT`, `CATALOG_BASE_URL`, ...).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sb-cli")]
#[command(author, version, about = "Store Builder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a subdomain is still available
    CheckDomain {
        /// Subdomain without the parent domain, e.g. `myshop`
        subdomain: String,
    },
    /// Fetch a product from the catalog
    Product {
        /// Catalog product id
        id: String,
    },
    /// Validate store form values
    Validate(commands::validate::ValidateArgs),
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
        Commands::CheckDomain { subdomain } => commands::domain::check(&subdomain).await?,
        Commands::Product { id } => commands::product::show(&id).await?,
        Commands::Validate(args) => commands::validate::run(&args)?,
    }
    Ok(())
}
