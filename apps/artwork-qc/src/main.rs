//! artwork-qc binary
//!
//! Reports are written to stdout as JSON; logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use artwork_qc::{
    load_catalog_file, read_json, run_reconcile, run_scan, JsonFileStore, ReviewConfig,
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use field_recon::DocumentFields;
use lexicon_engine::{Domain, LexiconEngine, Market, OverlapPolicy, RuleCatalog};
use shared_types::ReferenceField;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "artwork-qc")]
#[command(version, about = "Quality control for packaging artwork text")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan extracted text for flagged phrases and structural problems
    Scan {
        /// Plain-text file produced by text extraction
        #[arg(long)]
        text: PathBuf,

        /// Product domain filter (e.g. cosmetics, food)
        #[arg(long, value_parser = parse_domain)]
        domain: Option<Domain>,

        /// Market filter (e.g. cn, us, eu)
        #[arg(long, value_parser = parse_market)]
        market: Option<Market>,

        /// Rule catalog JSON file (overrides the built-in catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Collapse overlapping hits, not only hits at the same offset
        #[arg(long)]
        merge_overlaps: bool,
    },

    /// Check documents' extracted fields against the reference specification
    Reconcile {
        /// JSON array of reference fields; omit to reuse the saved session
        #[arg(long)]
        reference: Option<PathBuf>,

        /// One JSON file of extracted fields per document
        #[arg(long, num_args = 1.., required = true)]
        documents: Vec<PathBuf>,

        /// Model id recorded with the session
        #[arg(long)]
        model: Option<String>,
    },

    /// List the rules that apply to a scope
    Rules {
        #[arg(long, value_parser = parse_domain)]
        domain: Option<Domain>,

        #[arg(long, value_parser = parse_market)]
        market: Option<Market>,

        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn parse_domain(s: &str) -> Result<Domain, String> {
    Domain::parse_code(s).ok_or_else(|| format!("unknown domain '{}'", s))
}

fn parse_market(s: &str) -> Result<Market, String> {
    Market::parse_code(s).ok_or_else(|| format!("unknown market '{}'", s))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // stdout carries the JSON report, so logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ReviewConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Scan {
            text,
            domain,
            market,
            catalog,
            merge_overlaps,
        } => {
            config.domain = domain.or(config.domain);
            config.market = market.or(config.market);
            config.catalog_path = catalog.or(config.catalog_path);
            if merge_overlaps {
                config.overlap_policy = OverlapPolicy::MergeOverlapping;
            }

            let content = std::fs::read_to_string(&text)
                .with_context(|| format!("Failed to read {}", text.display()))?;

            let custom;
            let catalog = match &config.catalog_path {
                Some(path) => {
                    custom = load_catalog_file(path)?;
                    &custom
                }
                None => RuleCatalog::builtin(),
            };

            info!(
                domain = ?config.domain,
                market = ?config.market,
                "Scanning {}",
                text.display()
            );
            let report = run_scan(&LexiconEngine::new(catalog), &content, &config, Utc::now());
            print_json(&report)?;
        }

        Command::Reconcile {
            reference,
            documents,
            model,
        } => {
            if let Some(model) = model {
                config.model_id = model;
            }

            let reference: Option<Vec<ReferenceField>> =
                reference.as_deref().map(read_json).transpose()?;
            let documents: Vec<DocumentFields> = documents
                .iter()
                .map(|path| read_json(path))
                .collect::<anyhow::Result<_>>()?;

            let store = JsonFileStore::new(&config.session_path);
            info!(
                documents = documents.len(),
                session = %store.path().display(),
                "Reconciling"
            );
            let report = run_reconcile(&store, reference, &documents, &config, Utc::now())?;
            print_json(&report)?;
        }

        Command::Rules {
            domain,
            market,
            catalog,
        } => {
            let custom;
            let catalog = match catalog.or(config.catalog_path) {
                Some(path) => {
                    custom = load_catalog_file(&path)?;
                    &custom
                }
                None => RuleCatalog::builtin(),
            };

            let rules: Vec<_> = catalog
                .rules_in_scope(domain.or(config.domain), market.or(config.market))
                .map(|(_, rule)| rule)
                .collect();
            print_json(&rules)?;
        }
    }

    Ok(())
}
