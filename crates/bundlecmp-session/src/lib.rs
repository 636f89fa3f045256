//! High-level comparison session API for bundlecmp.
//!
//! Provides a unified entry point for applications embedding the engine:
//! load two containers, enumerate the matched owner names, and produce diff
//! reports, without wiring the graph/extract/diff crates together by hand.

pub mod error;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use session::CompareSession;

// Re-export key types
pub use bundlecmp_diff::DiffMode;
pub use bundlecmp_extract::{RendererDetail, RendererRecord};
pub use bundlecmp_graph::Container;
