//! Cross-container matching and diff reports for bundlecmp.
//!
//! Pairs renderer records from two independently loaded containers by the
//! name of their owning entity, then renders a field-by-field comparison of
//! a matched pair as line-oriented text.
//!
//! # Key Types
//!
//! - [`match_names`] -- Set of owner names present in both record collections
//! - [`record_by_name`] -- First-occurrence lookup within one collection
//! - [`DiffMode`] -- `Bones` or `MaterialsAndMesh` report shape
//! - [`build_report`] -- The textual diff for one matched pair

pub mod matcher;
pub mod report;

pub use matcher::{match_names, record_by_name};
pub use report::{build_report, DiffMode};
