//! Grievance Redressal - Citizen Complaint Intake and Triage
//!
//! A Rust library for filing citizen grievances and triaging them from an admin
//! dashboard, backed by a single CSV file.
//!
//! # Features
//!
//! - Submission with validation, unique ids and minute-precision timestamps
//! - Keyword priority tiers, lexicon sentiment and fixed department routing
//! - Whole-file CSV store behind a swappable [`GrievanceStore`] trait
//! - Password-gated admin console: summary, detail, status updates
//! - Per-department and per-city aggregations for charts and maps

/// Dashboard aggregations
pub mod analytics;
/// Sentiment, priority and department triage
pub mod classification;
/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// City coordinates for the map
pub mod geo;
/// Logging setup and utilities
pub mod logging;
/// Metrics collection
pub mod metrics;
/// Data models and structures
pub mod models;
/// Text polarity scoring
pub mod nlp;
/// View rendering
pub mod render;
/// Grievance storage
pub mod repository;
/// Citizen and admin workflows
pub mod service;
/// Input validation and sanitization
pub mod validation;

// Re-export key components for easier access
pub use error::{GrievanceError, Result};
pub use models::{Category, Grievance, Location, Priority, Sentiment, Status, SubmissionForm};
pub use nlp::{LexiconScorer, PolarityScorer};
pub use repository::{CsvStore, GrievanceStore, MemoryStore};
pub use service::{AdminConsole, GrievanceService};
