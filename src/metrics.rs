//! Metrics for intake and triage.
//!
//! These go through the `metrics` facade; nothing is recorded unless the embedding
//! application installs a recorder.

use metrics::{counter, histogram};

use crate::models::{Grievance, Status};

/// Grievances accepted, labelled by priority and department
pub const SUBMISSIONS_TOTAL: &str = "grievance_submissions_total";
/// Submissions blocked by validation
pub const REJECTED_SUBMISSIONS_TOTAL: &str = "grievance_rejected_submissions_total";
/// Status changes, labelled by the new status
pub const STATUS_UPDATES_TOTAL: &str = "grievance_status_updates_total";
/// Admin logins refused
pub const FAILED_LOGINS_TOTAL: &str = "grievance_failed_admin_logins_total";
/// Polarity scores of accepted submissions
pub const SENTIMENT_SCORES: &str = "grievance_sentiment_scores";

/// Record an accepted submission
pub fn record_submission(grievance: &Grievance, polarity: f32) {
    counter!(
        SUBMISSIONS_TOTAL,
        "priority" => grievance.priority.as_str(),
        "department" => grievance.department.clone()
    )
    .increment(1);
    histogram!(SENTIMENT_SCORES).record(f64::from(polarity));
}

/// Record a submission blocked by validation
pub fn record_rejected_submission() {
    counter!(REJECTED_SUBMISSIONS_TOTAL).increment(1);
}

/// Record a status change
pub fn record_status_update(status: Status) {
    counter!(STATUS_UPDATES_TOTAL, "status" => status.as_str()).increment(1);
}

/// Record a refused admin login
pub fn record_failed_login() {
    counter!(FAILED_LOGINS_TOTAL).increment(1);
}
