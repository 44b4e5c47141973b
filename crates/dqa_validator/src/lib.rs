//! # Data Quality Validator
//!
//! Validation engine for the users, brands and receipts datasets. This crate
//! provides the rules applied to each record, including:
//!
//! - Structural checks (decodable JSON object, resolvable `_id`, duplicates)
//! - Field presence and validity checks per dataset
//! - Referential integrity between receipts, users and brands
//! - Logical and financial consistency of dates, item counts and totals
//!
//! ## Example
//!
//! ```rust
//! use dqa_core::{IssueCategory, IssueRegistry};
//! use dqa_validator::{DatasetValidator, UsersValidator};
//!
//! let mut validator = UsersValidator::new();
//! let mut issues = IssueRegistry::new();
//!
//! validator.validate_line(1, "not json", &mut issues);
//!
//! assert_eq!(issues.count(IssueCategory::InvalidJson), 1);
//! ```

mod brands;
mod dataset;
mod engine;
mod receipts;
mod record;
mod reference;
mod source;
mod users;

pub use brands::*;
pub use dataset::*;
pub use engine::*;
pub use receipts::*;
pub use record::*;
pub use reference::*;
pub use source::*;
pub use users::*;
