//! Citizen and admin workflows over a [`GrievanceStore`].
//!
//! Every call reloads the store, and every mutation rewrites it in full. Admin
//! operations are only reachable through an [`AdminConsole`], which is handed out
//! after the password check and only when there is something to show.

use chrono::{Local, NaiveDateTime, Timelike};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::analytics;
use crate::classification::{analyze_sentiment, detect_priority};
use crate::error::{GrievanceError, Result};
use crate::metrics;
use crate::models::{
    CityMarker, DepartmentCount, Grievance, Status, SubmissionForm, Summary, ANONYMOUS,
};
use crate::nlp::PolarityScorer;
use crate::repository::GrievanceStore;
use crate::validation::InputValidator;

/// Grievance intake and triage
pub struct GrievanceService<S: GrievanceStore> {
    store: S,
    scorer: Box<dyn PolarityScorer>,
    admin_password: String,
}

impl<S: GrievanceStore> GrievanceService<S> {
    /// Build a service over `store`, scoring sentiment with `scorer` and guarding the
    /// admin console with `admin_password`
    pub fn new(store: S, scorer: Box<dyn PolarityScorer>, admin_password: impl Into<String>) -> Self {
        Self {
            store,
            scorer,
            admin_password: admin_password.into(),
        }
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Validate, classify and persist a new grievance
    pub fn submit(&self, form: SubmissionForm) -> Result<Grievance> {
        if let Err(e) = Self::validate(&form) {
            metrics::record_rejected_submission();
            warn!(error = %e, "Rejected grievance submission");
            return Err(e);
        }

        let mut records = self.store.load()?;

        let description = form.description.trim().to_string();
        let (sentiment, polarity) = analyze_sentiment(self.scorer.as_ref(), &description);
        let name = form
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(ANONYMOUS)
            .to_string();

        let grievance = Grievance {
            id: fresh_id(&records),
            name,
            city: form.city.trim().to_string(),
            location: form.location,
            category: form.category,
            department: form.category.department().to_string(),
            sentiment,
            priority: detect_priority(&description),
            status: Status::Submitted,
            description,
            created_at: now_to_the_minute(),
        };

        records.push(grievance.clone());
        self.store.save(&records)?;

        metrics::record_submission(&grievance, polarity);
        info!(
            id = %grievance.id,
            priority = %grievance.priority,
            department = %grievance.department,
            sentiment = %grievance.sentiment,
            "Grievance submitted"
        );
        Ok(grievance)
    }

    /// The last `limit` grievances filed under `name`, oldest first
    pub fn recent_for(&self, name: &str, limit: usize) -> Result<Vec<Grievance>> {
        let records = self.store.load()?;
        let mine = analytics::recent_for_name(&records, name.trim(), limit)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        debug!(name, count = mine.len(), "Listed citizen grievances");
        Ok(mine)
    }

    /// Check the admin password and open the dashboard.
    ///
    /// Fails with [`GrievanceError::Unauthorized`] before touching the store, and with
    /// [`GrievanceError::EmptyStore`] when there is nothing to triage.
    pub fn admin(&self, password: &str) -> Result<AdminConsole<'_, S>> {
        // Plain equality against the configured secret: no hashing, no lockout.
        if password.is_empty() || password != self.admin_password {
            metrics::record_failed_login();
            warn!("Admin login refused");
            return Err(GrievanceError::Unauthorized);
        }

        let records = self.store.load()?;
        if records.is_empty() {
            warn!("Admin dashboard opened on an empty store");
            return Err(GrievanceError::EmptyStore);
        }

        Ok(AdminConsole {
            store: &self.store,
            records,
        })
    }

    fn validate(form: &SubmissionForm) -> Result<()> {
        InputValidator::validate_city(&form.city)?;
        InputValidator::validate_description(&form.description)?;
        if let Some(name) = &form.name {
            InputValidator::validate_name(name)?;
        }
        Ok(())
    }
}

/// An authorized view over a non-empty snapshot of the store
pub struct AdminConsole<'a, S: GrievanceStore> {
    store: &'a S,
    records: Vec<Grievance>,
}

impl<S: GrievanceStore> AdminConsole<'_, S> {
    /// All grievances in stored order
    #[must_use]
    pub fn records(&self) -> &[Grievance] {
        &self.records
    }

    /// Ids in stored order, for picking a grievance
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|g| g.id.as_str())
    }

    /// Total, resolved and pending counts
    #[must_use]
    pub fn summary(&self) -> Summary {
        analytics::summarize(&self.records)
    }

    /// One grievance by id
    pub fn find(&self, id: &str) -> Result<&Grievance> {
        InputValidator::validate_grievance_id(id)?;
        self.records
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| GrievanceError::NotFound(id.to_string()))
    }

    /// Set the status of `id` and persist the whole store.
    ///
    /// An unknown id changes nothing and is reported as [`GrievanceError::NotFound`].
    pub fn update_status(&mut self, id: &str, status: Status) -> Result<Grievance> {
        InputValidator::validate_grievance_id(id)?;
        let record = self
            .records
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| GrievanceError::NotFound(id.to_string()))?;

        let previous = record.status;
        record.status = status;
        let updated = record.clone();

        self.store.save(&self.records)?;

        metrics::record_status_update(status);
        info!(id, from = %previous, to = %status, "Grievance status updated");
        Ok(updated)
    }

    /// Bar chart data: grievances per department
    #[must_use]
    pub fn department_counts(&self) -> Vec<DepartmentCount> {
        analytics::department_counts(&self.records)
    }

    /// Map data: one marker per city
    #[must_use]
    pub fn city_markers(&self) -> Vec<CityMarker> {
        analytics::city_markers(&self.records)
    }
}

/// Eight hex digits not already used in `records`
fn fresh_id(records: &[Grievance]) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id = format!("{:08x}", rng.gen::<u32>());
        if !records.iter().any(|g| g.id == id) {
            return id;
        }
    }
}

fn now_to_the_minute() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}
