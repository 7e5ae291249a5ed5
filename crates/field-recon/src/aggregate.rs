use crate::model::{ReconReport, ReconSummary, ReconciliationResult};

fn review_bucket(result: &ReconciliationResult) -> u8 {
    if result.has_error {
        0
    } else if result.has_warning {
        1
    } else {
        2
    }
}

/// Errors first, then warnings, then everything else. Reference order is
/// kept inside each bucket.
pub fn sort_for_review(results: &[ReconciliationResult]) -> Vec<ReconciliationResult> {
    let mut sorted = results.to_vec();
    // sort_by_key is stable
    sorted.sort_by_key(review_bucket);
    sorted
}

/// Count reference fields by their worst outcome
pub fn summarize(results: &[ReconciliationResult]) -> ReconSummary {
    let mut summary = ReconSummary {
        total_count: results.len(),
        ..Default::default()
    };

    for result in results {
        if result.has_error {
            summary.error_count += 1;
        } else if result.has_warning {
            summary.warning_count += 1;
        } else if result.is_pending() {
            summary.pending_count += 1;
        } else {
            summary.match_count += 1;
        }
    }

    summary.all_pass = summary.error_count == 0 && summary.warning_count == 0;
    summary
}

pub fn build_report(results: &[ReconciliationResult]) -> ReconReport {
    ReconReport {
        summary: summarize(results),
        results: sort_for_review(results),
    }
}
