//! PushLog Pattern Engine — deterministic, rule-based bug pattern analysis.
//!
//! Scans PR metadata and commit subjects against keyword/regex pattern
//! definitions, deduplicates matches per pattern, splits patterns into
//! recurring issues and edge cases, and renders a text report plus a
//! structured export.
//!
//! No AI, no DB, no network; pure computation over inputs loaded up front.

pub mod classify;
pub mod compile;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod matcher;
pub mod report;
pub mod scan;
pub mod types;

pub use config::Config;
pub use engine::{Engine, Report};
pub use error::EngineError;
pub use types::{PatternDefinition, PatternStats, PrRecord, ReportExport};
