//! Showcase CLI - browse and like products from the terminal.
//!
//! Commands:
//! - `showcase list` - the product list page
//! - `showcase show <id>` - a product's detail page
//! - `showcase like <id>` - like from the detail page
//! - `showcase like-card <id>` - like from a card on the list page
//! - `showcase open <path>` - render whatever page a route path points to

mod commands;
mod config;
mod transport;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use showcase_core::ProductId;
use tracing_subscriber::EnvFilter;

/// Showcase CLI - browse and like products
#[derive(Parser)]
#[command(name = "showcase")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    api: config::ApiConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the product list
    List,

    /// Show one product
    Show { id: ProductId },

    /// Like a product from its detail page
    Like { id: ProductId },

    /// Like a product from its card on the list page
    LikeCard { id: ProductId },

    /// Render the page at a route path such as `/products/3`
    Open { path: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::Context::new(&cli.api)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::List => commands::list(&ctx, &mut out),
        Commands::Show { id } => commands::show(&ctx, id, &mut out),
        Commands::Like { id } => commands::like(&ctx, id, &mut out),
        Commands::LikeCard { id } => commands::like_card(&ctx, id, &mut out),
        Commands::Open { path } => commands::open(&ctx, &path, &mut out),
    }
}
