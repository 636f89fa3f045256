//! Foundation types for bundlecmp.
//!
//! This crate provides the object-reference and graph-node types used
//! throughout the comparison engine. Every other bundlecmp crate depends on
//! `bundlecmp-types`.
//!
//! # Key Types
//!
//! - [`ObjectRef`] — A (path_id, file_id) reference into a container's object
//!   graph, possibly dangling
//! - [`TypeTag`] — The object kinds the engine understands
//! - [`GraphObject`] / [`ObjectData`] — One graph node and its typed field set

pub mod object;
pub mod reference;

pub use object::{GameObjectData, GraphObject, ObjectData, SkinnedRendererData, TypeTag};
pub use reference::ObjectRef;
