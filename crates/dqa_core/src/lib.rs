//! # Data Quality Auditor Core
//!
//! Core data structures and types for the Data Quality Auditor.
//!
//! This crate provides the building blocks shared by the parser, the
//! validators and the CLI: the wrapped-value parsers for the source data
//! conventions, the issue registry that aggregates findings, the report
//! renderer, and the audit configuration.
//!
//! ## Key Concepts
//!
//! - **Wrapped values**: identifiers (`{"$oid": ...}`) and dates (`{"$date": ...}`)
//! - **Issue registry**: findings grouped by category, deduplicated by message
//! - **Report**: alphabetical category listing with per-category and grand totals
//!
//! ## Example
//!
//! ```rust
//! use dqa_core::{render_report, Dataset, IssueCategory, IssueRegistry};
//!
//! let mut issues = IssueRegistry::new();
//! issues.log(
//!     IssueCategory::MissingField,
//!     Dataset::Users,
//!     "5ff1e194",
//!     "User is missing the 'active' field.",
//! );
//!
//! let report = render_report(&issues);
//! assert!(report.contains("[+] Issue Type: Missing Field (1 found)"));
//! ```

pub mod coerce;
pub mod config;
pub mod error;
pub mod issue;
pub mod registry;
pub mod report;
pub mod wrapped;

pub use coerce::*;
pub use config::*;
pub use error::*;
pub use issue::*;
pub use registry::*;
pub use report::*;
pub use wrapped::*;
