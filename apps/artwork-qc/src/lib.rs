//! Packaging artwork QC
//!
//! Thin command-line surface over the two pure pipelines:
//!
//! - `lexicon-engine`: flagged-phrase scan of extracted text
//! - `field-recon`: reference specification vs. per-document extracted fields
//!
//! Text and field extraction happen upstream; this crate only reads their
//! output as plain text and JSON.

pub mod config;
pub mod report;
pub mod session;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use field_recon::DocumentFields;
use lexicon_engine::{LexiconEngine, RuleCatalog};
use shared_types::{sort_findings, FindingSummary, ReferenceField};
use tracing::{info, warn};

pub use config::ReviewConfig;
pub use report::{ReconcileReport, ReportMeta, ScanReport};
pub use session::{JsonFileStore, MemoryStore, ReviewSession, SessionError, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a rule catalog file, logging every rejected rule
pub fn load_catalog_file(path: &Path) -> anyhow::Result<RuleCatalog> {
    let load = RuleCatalog::from_file(path)
        .with_context(|| format!("Failed to load rule catalog: {}", path.display()))?;
    if !load.rejected.is_empty() {
        warn!(
            path = %path.display(),
            rejected = load.rejected.len(),
            "Some rules were rejected and will never match"
        );
    }
    info!(rules = load.catalog.len(), "Loaded rule catalog");
    Ok(load.catalog)
}

/// Scan one text and report lexicon and structural findings
pub fn run_scan(
    engine: &LexiconEngine<'_>,
    text: &str,
    config: &ReviewConfig,
    now: DateTime<Utc>,
) -> ScanReport {
    let mut findings = engine.review_text(text, &config.scan_options());
    sort_findings(&mut findings);

    ScanReport {
        meta: ReportMeta::new(&config.model_id, now),
        summary: FindingSummary::from_findings(&findings),
        findings,
    }
}

/// Reconcile documents against the reference set.
///
/// A supplied reference set replaces the stored session's set and is saved;
/// without one, the stored session's set is used.
pub fn run_reconcile(
    store: &dyn SessionStore,
    reference: Option<Vec<ReferenceField>>,
    documents: &[DocumentFields],
    config: &ReviewConfig,
    now: DateTime<Utc>,
) -> anyhow::Result<ReconcileReport> {
    let session = match reference {
        Some(fields) => {
            let mut session = store
                .load()?
                .unwrap_or_else(|| ReviewSession::new(&config.model_id));
            session.model_id = config.model_id.clone();
            session.replace_reference_fields(fields, now);
            store.save(&session)?;
            session
        }
        None => match store.load()? {
            Some(session) => session,
            None => bail!("No reference fields: pass --reference or save a session first"),
        },
    };

    let results = field_recon::reconcile(&session.reference_fields, documents);

    Ok(ReconcileReport {
        meta: ReportMeta::new(&config.model_id, now),
        report: field_recon::build_report(&results),
    })
}

/// Read a JSON file into any deserializable type
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Malformed JSON in {}", path.display()))
}
