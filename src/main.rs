//! import-art-exhibitions: binary entrypoint.
//! Lists the Are.na channel, extracts exhibition data with Claude, prints a JSON
//! array on stdout and (with `--publish`) creates Sanity drafts.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use exhibition_importer::cms::{DraftPublisher, SanityClient};
use exhibition_importer::config::{self, app::ENV_SANITY_TOKEN, AppConfig};
use exhibition_importer::extract::{AnthropicProvider, ExhibitionExtractor, HttpPageFetcher};
use exhibition_importer::ingest::providers::ArenaClient;
use exhibition_importer::{pipeline, telemetry, ImportError};

#[derive(Debug, Parser)]
#[command(
    name = "import-art-exhibitions",
    version,
    about = "Import art exhibition data from are.na using Claude AI"
)]
struct Cli {
    /// Limit the number of items to process
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    limit: Option<u32>,

    /// Resolve venues and create draft events in Sanity
    #[arg(long)]
    publish: bool,

    /// Settings file (defaults to $IMPORTER_CONFIG_PATH or config/importer.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_default()?,
    };
    Ok(cfg.with_env_secrets())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = load_config(&cli)?;
    let http = cfg.http.build_client().context("building http client")?;

    // All credential checks happen here, before the first request.
    let arena = ArenaClient::new(&cfg.arena, http.clone())?;
    let llm = AnthropicProvider::new(&cfg.anthropic, http.clone())?;
    let sanity = if cli.publish {
        let client = SanityClient::new(&cfg.sanity, http.clone());
        if !client.can_write() {
            return Err(ImportError::Configuration(format!(
                "{ENV_SANITY_TOKEN} environment variable is not set"
            ))
            .into());
        }
        Some(client)
    } else {
        None
    };

    let channel = cfg.arena.channel.as_str();
    info!("Processing channel: {channel}");
    if let Some(limit) = cli.limit {
        info!("Limit: {limit} items");
    }

    let extractor =
        ExhibitionExtractor::new(Arc::new(HttpPageFetcher::new(http)), Arc::new(llm))
            .with_max_page_chars(cfg.anthropic.max_page_chars);

    let report = pipeline::run_with_default(
        &arena,
        &extractor,
        channel,
        cli.limit,
        cfg.arena.per_page_default,
    )
    .await
    .with_context(|| format!("listing channel {channel}"))?;

    if let Some(sanity) = &sanity {
        let publisher =
            DraftPublisher::new(sanity).with_fallback_venue(cfg.sanity.fallback_venue_id.clone());
        let drafts = pipeline::publish_all(&report.exhibitions, sanity, &publisher)
            .await
            .context("publishing drafts")?;
        info!(created = drafts.len(), "drafts published");
    }

    let out = serde_json::to_string_pretty(&report.exhibitions)?;
    println!("{out}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present; real environment wins.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}
