//! # flatcheck core
//!
//! Core data structures and types for flat-file validation.
//!
//! This crate provides the building blocks shared by the parser, validator
//! and command line crates.
//!
//! ## Key Concepts
//!
//! - **Configuration**: delimiter, expected row size and per-column rules
//! - **Record**: one row split into positional fields
//! - **Dataset**: a lazy sequence of records over a row source
//! - **Violation**: one failed rule, with the field, value and constraint
//!
//! ## Example
//!
//! ```rust
//! use flatcheck_core::{ColumnBuilder, ConfigurationBuilder, Dataset};
//!
//! let configuration = ConfigurationBuilder::new()
//!     .column(ColumnBuilder::new("code").required(true).build())
//!     .column(ColumnBuilder::new("amount").integer(true).build())
//!     .build();
//!
//! let rows = ["ABC|1234", " |5678"];
//! for record in Dataset::new(rows, &configuration) {
//!     assert_eq!(record.len(), record.expected_size());
//! }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod report;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use model::*;
pub use report::*;
