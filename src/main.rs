use anyhow::Context;
use clap::{Parser, Subcommand};
use edusync::utils::{logger, validation::Validate};
use edusync::{DomainKind, FileStore, HttpTransport, SyncManager, TomlConfig};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "edusync")]
#[command(about = "Syncs site content between a local store and a spreadsheet backend")]
struct Cli {
    /// Path of the JSON store holding cached content and sync settings.
    #[arg(long, default_value = "./edusync-store.json")]
    store: String,

    /// Optional TOML config file; applied to the store before running.
    #[arg(long)]
    config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pull fresh content from the configured sheets into the store.
    Sync {
        /// Sync a single domain instead of all six.
        #[arg(long)]
        domain: Option<DomainKind>,
    },
    /// Push cached content for one domain to the script endpoint.
    Push {
        #[arg(long)]
        domain: DomainKind,
    },
    /// Show cached record counts and sync configuration.
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let store = Arc::new(
        FileStore::open(&cli.store)
            .with_context(|| format!("opening store file {}", cli.store))?,
    );

    let mut timeout = Duration::from_secs(edusync::core::transport::DEFAULT_TIMEOUT_SECONDS);
    if let Some(path) = &cli.config {
        let config =
            TomlConfig::from_file(path).with_context(|| format!("loading config {}", path))?;
        config.validate().context("validating config")?;
        timeout = config.request_timeout();
        config
            .apply(&edusync::SyncSettings::new(store.clone()))
            .context("applying config to store")?;
        tracing::debug!("Applied config from {}", path);
    }

    let transport = Arc::new(HttpTransport::new(timeout)?);
    let manager = SyncManager::new(store, transport);

    match cli.command {
        Command::Sync { domain } => {
            let outcomes = match domain {
                Some(kind) => vec![manager.sync_domain(kind).await],
                None => manager.sync_all().await,
            };
            for outcome in &outcomes {
                let source = if outcome.refreshed { "refreshed" } else { "cache" };
                println!(
                    "{:<20} {:>4} record(s)  [{}]",
                    outcome.domain.to_string(),
                    outcome.records,
                    source
                );
            }
            let refreshed = outcomes.iter().filter(|o| o.refreshed).count();
            println!("✅ Sync finished: {}/{} domain(s) refreshed", refreshed, outcomes.len());
        }
        Command::Push { domain } => push(&manager, domain).await?,
        Command::Status => status(&manager),
    }

    Ok(())
}

async fn push(manager: &SyncManager<FileStore>, kind: DomainKind) -> anyhow::Result<()> {
    let ack = match kind {
        DomainKind::Courses => {
            let records = manager.cache().courses();
            println!("Pushing {} course(s)", records.len());
            manager.write_courses(&records).await?
        }
        DomainKind::TeamMembers => {
            let records = manager.cache().team_members();
            println!("Pushing {} team member(s)", records.len());
            manager.write_team_members(&records).await?
        }
        DomainKind::GalleryItems => {
            let records = manager.cache().gallery_items();
            println!("Pushing {} gallery item(s)", records.len());
            manager.write_gallery_items(&records).await?
        }
        DomainKind::HomePageContent => match manager.cache().home_page_content() {
            Some(content) => manager.write_home_page_content(&content).await?,
            None => {
                println!("Nothing cached for homePageContent, skipping push");
                return Ok(());
            }
        },
        DomainKind::FooterContactInfo => match manager.cache().footer_contact_info() {
            Some(info) => manager.write_footer_contact_info(&info).await?,
            None => {
                println!("Nothing cached for footerContactInfo, skipping push");
                return Ok(());
            }
        },
        DomainKind::SocialMediaLinks => match manager.cache().social_links() {
            Some(links) => manager.write_social_links(&links).await?,
            None => {
                println!("Nothing cached for socialMediaLinks, skipping push");
                return Ok(());
            }
        },
    };

    match ack {
        Some(ack) => {
            let message = ack.message.unwrap_or_else(|| "ok".to_string());
            println!("✅ Pushed {}: {}", kind, message);
        }
        None => println!("Endpoint or sheet URL not configured; {} stayed local", kind),
    }
    Ok(())
}

fn status(manager: &SyncManager<FileStore>) {
    let settings = manager.settings();
    println!(
        "Sync enabled: {}   Script endpoint: {}",
        settings.sync_enabled(),
        if settings.script_endpoint().is_some() {
            "configured"
        } else {
            "not configured"
        }
    );
    for kind in DomainKind::ALL {
        let synced = manager
            .cache()
            .last_synced(kind)
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| "never".to_string());
        let sheet = if settings.sheet_url(kind).is_some() {
            "sheet configured"
        } else {
            "no sheet"
        };
        println!(
            "{:<20} {:>4} record(s)  last synced: {:<25}  {}",
            kind.to_string(),
            manager.cache().record_count(kind),
            synced,
            sheet
        );
    }
}
