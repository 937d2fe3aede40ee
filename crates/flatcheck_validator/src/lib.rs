//! # flatcheck validator
//!
//! Validation engine for delimited flat files. This crate checks records
//! against the column rules of a [`Configuration`](flatcheck_core::Configuration):
//!
//! - Field rules (required, lengths, accepted values, patterns, integers, dates)
//! - Cross-field requirements (`requiredIfEmpty`, `requiredIfFilled`)
//! - Record shape (expected field count)
//! - Dataset aggregation with a diagnostic stream
//!
//! ## Example
//!
//! ```rust
//! use flatcheck_core::Configuration;
//! use flatcheck_validator::{DatasetValidator, TracingSink};
//!
//! let configuration = Configuration::from_json(r#"{ "size": 2 }"#).unwrap();
//! let mut validator = DatasetValidator::new();
//!
//! let report = validator
//!     .validate_rows(["test|test2"], &configuration, TracingSink)
//!     .unwrap();
//!
//! if report.passed {
//!     println!("Validation passed!");
//! } else {
//!     println!("{} records failed", report.stats.records_failed);
//! }
//! ```

mod diagnostics;
mod engine;
mod error;
mod record;
mod rules;

pub use diagnostics::*;
pub use engine::*;
pub use error::*;
pub use record::*;
pub use rules::*;
