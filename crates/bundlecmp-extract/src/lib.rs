//! Skinned-renderer extraction for bundlecmp.
//!
//! Scans a container for SkinnedMeshRenderer objects and produces per-
//! renderer views in two stages: a raw [`RendererRecord`] (references as
//! loaded, owner name resolved) and a display-ready [`RendererDetail`]
//! (bone references resolved to names, falling back to the
//! [`UNKNOWN_NAME`] sentinel).
//!
//! # Key Types
//!
//! - [`RendererRecord`] -- Raw per-renderer extraction (references + owner name)
//! - [`RendererDetail`] / [`BoneDetail`] -- Name-resolved, display-ready form
//! - [`extract_renderers`] / [`resolve_detail`] -- The two derivation passes

pub mod detail;
pub mod record;

pub use detail::{resolve_detail, BoneDetail, RendererDetail, UNKNOWN_NAME};
pub use record::{extract_renderers, RendererRecord};
