pub mod aggregate;
pub mod classify;
pub mod model;
pub mod reconcile;

pub use aggregate::{build_report, sort_for_review, summarize};
pub use classify::{classify_values, normalize};
pub use model::{
    DocumentFields, DocumentOutcome, MatchStatus, ReconReport, ReconSummary,
    ReconciliationResult, NOT_FOUND,
};
pub use reconcile::{find_candidate, reconcile, reconcile_field};
