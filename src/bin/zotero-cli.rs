use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use zotero_workshop::{ClientConfig, FeedDocument, LibraryScope, RequestParams, ZoteroClient};

#[derive(Parser)]
#[command(
    name = "zotero-cli",
    about = "Command-line interface for the Zotero web API",
    long_about = "Browse items, collections and tags of Zotero libraries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Zotero API key
    #[arg(long, env = "ZOTERO_API_KEY", global = true)]
    api_key: Option<String>,

    /// API endpoint
    #[arg(long, env = "ZOTERO_BASE_URL", global = true)]
    base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout: u64,

    /// Skip TLS certificate validation (local development only)
    #[arg(long, global = true)]
    insecure: bool,
}

#[derive(Args)]
struct ScopeArgs {
    /// User library ID
    #[arg(long, conflicts_with = "group", required_unless_present = "group")]
    user: Option<u64>,

    /// Group library ID
    #[arg(long)]
    group: Option<u64>,
}

impl ScopeArgs {
    fn scope(&self) -> Result<LibraryScope> {
        match (self.user, self.group) {
            (Some(id), None) => Ok(LibraryScope::User(id)),
            (None, Some(id)) => Ok(LibraryScope::Group(id)),
            _ => bail!("exactly one of --user or --group is required"),
        }
    }
}

#[derive(Args)]
struct PageArgs {
    /// Only top-level entries
    #[arg(long)]
    top: bool,

    /// Maximum entries per page
    #[arg(short, long)]
    limit: Option<u32>,

    /// Page offset (cursor from a previous page)
    #[arg(short, long)]
    start: Option<String>,
}

impl PageArgs {
    fn params(&self) -> RequestParams {
        let mut params = RequestParams::new();
        if let Some(limit) = self.limit {
            params = params.limit(limit);
        }
        if let Some(start) = &self.start {
            params = params.start(start);
        }
        params
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List items in a library
    Items {
        #[command(flatten)]
        scope: ScopeArgs,
        #[command(flatten)]
        page: PageArgs,
        /// Only items in this collection
        #[arg(long)]
        collection: Option<String>,
        /// Only items with this tag
        #[arg(long, conflicts_with = "collection")]
        tag: Option<String>,
    },
    /// List collections in a library
    Collections {
        #[command(flatten)]
        scope: ScopeArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List tags in a library
    Tags {
        #[command(flatten)]
        scope: ScopeArgs,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List all item types
    ItemTypes,
    /// Print the empty template for an item type
    Template {
        #[arg(long)]
        item_type: String,
    },
    /// Print the download URI of an attachment
    FileUri {
        #[command(flatten)]
        scope: ScopeArgs,
        /// Attachment item key
        #[arg(long)]
        item: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let mut config = ClientConfig::new()
        .with_timeout(Duration::from_secs(cli.timeout))
        .danger_accept_invalid_certs(cli.insecure);
    if let Some(key) = &cli.api_key {
        config = config.with_api_key(key.as_str());
    }
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url.as_str());
    }
    if cli.insecure {
        warn!("TLS certificate validation is disabled");
    }
    let client = ZoteroClient::with_config(config).context("Failed to create Zotero client")?;

    match &cli.command {
        Commands::Items {
            scope,
            page,
            collection,
            tag,
        } => {
            let scope = scope.scope()?;
            let params = page.params();
            let feed = match (collection, tag) {
                (Some(key), _) if page.top => {
                    client.collection_top_items(scope, key, &params).await?
                }
                (Some(key), _) => client.collection_items(scope, key, &params).await?,
                (None, Some(tag)) => match client.tag_items(scope, tag, &params).await? {
                    Some(feed) => feed,
                    None => bail!("tag must not be empty"),
                },
                (None, None) if page.top => client.top_items(scope, &params).await?,
                (None, None) => client.items(scope, &params).await?,
            };
            print_feed(&feed)
        }
        Commands::Collections { scope, page } => {
            let scope = scope.scope()?;
            let params = page.params();
            let feed = if page.top {
                client.top_collections(scope, &params).await?
            } else {
                client.collections(scope, &params).await?
            };
            print_feed(&feed)
        }
        Commands::Tags { scope, page } => {
            let feed = client.tags(scope.scope()?, &page.params()).await?;
            print_feed(&feed)
        }
        Commands::ItemTypes => {
            for item_type in client.item_types().await? {
                println!("{}\t{}", item_type.item_type, item_type.localized);
            }
            Ok(())
        }
        Commands::Template { item_type } => {
            let template = client.item_template(item_type).await?;
            println!("{}", serde_json::to_string_pretty(&template)?);
            Ok(())
        }
        Commands::FileUri { scope, item } => {
            println!(
                "{}",
                client.item_file_uri(scope.scope()?, item, &RequestParams::new())
            );
            Ok(())
        }
    }
}

fn print_feed(feed: &FeedDocument) -> Result<()> {
    if !feed.is_success() {
        bail!(
            "Zotero API returned HTTP {}: {}",
            feed.status().unwrap_or_default(),
            feed.as_xml().trim()
        );
    }

    if let Some(title) = feed.title() {
        info!("{title}");
    }
    for entry in feed.entries() {
        println!(
            "{}\t{}\t{}",
            entry.key.as_deref().unwrap_or("-"),
            entry.item_type.as_deref().unwrap_or("-"),
            entry.title.as_deref().unwrap_or("")
        );
    }

    match feed.total_results() {
        Ok(total) => info!(total, "Total results"),
        Err(e) => warn!("{e}"),
    }
    if let Some(start) = feed.next_page_start() {
        info!(%start, "More results available; pass --start to continue");
    }
    Ok(())
}
