//! CLI entry point for guidegen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guidegen::{Category, Site};

#[derive(Parser)]
#[command(name = "guidegen")]
#[command(version)]
#[command(about = "Generates the estate planning guide pages from Markdown", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Only generate these categories (learn, states, professionals, tools, wealth)
        #[arg(short, long, value_delimiter = ',')]
        only: Vec<Category>,
    },

    /// Generate, then serve the public folder
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,

        /// Regenerate when content changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Show what would be generated, without writing anything
    List {
        /// Category to list (all enabled categories when omitted)
        category: Option<Category>,
    },

    /// Remove the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "guidegen=debug,info"
    } else {
        "guidegen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate { only } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Generating static files...");

            let summary = site.generate(&only)?;
            println!("{}", summary);
        }

        Commands::Server { port, ip, watch } => {
            let site = Site::new(&base_dir)?;
            let port = port.unwrap_or(site.config.server.port);
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());

            // Generate first
            tracing::info!("Generating static files...");
            let summary = site.generate(&[])?;
            println!("{}", summary);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            guidegen::server::start(&site, &ip, port, watch).await?;
        }

        Commands::List { category } => {
            let site = Site::new(&base_dir)?;
            guidegen::commands::list::run(&site, category)?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("guidegen version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
