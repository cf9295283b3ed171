//! # Article Gallery CLI (`gallery`)
//!
//! Browse the article dataset from the terminal or serve it over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! gallery --config ./config/gallery.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `gallery list` | Print one page of the gallery |
//! | `gallery categories` | List the categories with article counts |
//! | `gallery get <id>` | Print the detail view of one article |
//! | `gallery open <id>` | Print the article's external URL |
//! | `gallery serve` | Start the JSON HTTP server |
//!
//! ## Examples
//!
//! ```bash
//! # First page, best match first
//! gallery list
//!
//! # Second page of one category, oldest first
//! gallery list --category Tech --sort published_date:asc --offset 12
//!
//! # Machine-readable output
//! gallery list --page-size 48 --json
//! ```

use anyhow::Result;
use article_gallery::list::ListRequest;
use article_gallery::{categories, config, get, list, logging, server, Dataset};
use article_gallery_core::{PageSize, SortKey};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Article Gallery CLI.
#[derive(Parser)]
#[command(
    name = "gallery",
    about = "Article Gallery: browse a filterable, sortable, paginated article dataset",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/gallery.toml")]
    config: PathBuf,

    /// Log debug diagnostics (view state transitions) to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the gallery.
    ///
    /// Options are applied as the gallery applies user actions: category
    /// first (which resets the order to best match first), then sort, then
    /// the page window.
    List {
        /// Only show articles of this category (title).
        #[arg(long)]
        category: Option<String>,

        /// Sort key as FIELD:DIRECTION. Fields: title, published_date,
        /// Similarity. Directions: asc, desc.
        #[arg(long, value_parser = parse_sort)]
        sort: Option<SortKey>,

        /// Index of the first article to show.
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Articles per page: 12, 24 or 48. Defaults to `[view].page_size`.
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<PageSize>,

        /// Print the view model as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List categories with their article counts.
    Categories,

    /// Print the detail view of an article.
    Get {
        /// Article id.
        id: String,
    },

    /// Print the external URL an article links to.
    Open {
        /// Article id.
        id: String,
    },

    /// Start the JSON HTTP server on `[server].bind`.
    Serve,
}

fn parse_sort(s: &str) -> Result<SortKey, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

fn parse_page_size(s: &str) -> Result<PageSize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("invalid page size '{}': not a number", s))?;
    PageSize::try_from(n).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let cfg = config::load_config(&cli.config)?;
    let dataset = Dataset::load(&cfg.data.path)?;

    match cli.command {
        Commands::List {
            category,
            sort,
            offset,
            page_size,
            json,
        } => {
            let req = ListRequest {
                category,
                sort,
                offset,
                page_size,
            };
            list::run_list(&cfg, &dataset, &req, json)?;
        }
        Commands::Categories => {
            categories::run_categories(&dataset);
        }
        Commands::Get { id } => {
            get::run_get(&dataset, &id)?;
        }
        Commands::Open { id } => {
            get::run_open(&dataset, &id)?;
        }
        Commands::Serve => {
            server::run_server(&cfg, dataset).await?;
        }
    }

    Ok(())
}
