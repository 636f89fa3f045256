//! Container object graphs for bundlecmp.
//!
//! A [`Container`] wraps one fully loaded asset archive's flat object list
//! and provides identifier-keyed lookup plus type-filtered enumeration. An
//! [`OwnerIndex`] answers the reverse question: given a component reference,
//! which named entity owns it.
//!
//! # Key Types
//!
//! - [`Container`] -- One archive's object graph, read-only after load
//! - [`OwnerIndex`] -- Precomputed component-to-owner reverse index
//! - [`GraphError`] / [`GraphResult`] -- Load failures (I/O, malformed dump)

pub mod container;
pub mod error;
pub mod load;
pub mod owner;

pub use container::Container;
pub use error::{GraphError, GraphResult};
pub use owner::OwnerIndex;
