//! Reverse owner resolution: which named entity owns a component.
//!
//! The naive strategy scans every GameObject's component list per query.
//! This index precomputes the same answer once per container load, keyed by
//! component `path_id`, inserting in enumeration order so the first-match
//! tie-break is identical to the scan it replaces.

use std::collections::HashMap;

use bundlecmp_types::ObjectRef;
use tracing::debug;

use crate::container::Container;

/// Precomputed component-to-owner reverse index for one container.
///
/// Built once per load and read-only thereafter. Must only be queried
/// against the container it was built from.
pub struct OwnerIndex {
    owner_name: HashMap<i64, String>,
}

impl OwnerIndex {
    /// Build the reverse index over a container's named entities.
    ///
    /// When two entities both claim a component, the first entity in the
    /// container's enumeration order wins.
    pub fn build(container: &Container) -> Self {
        let mut owner_name: HashMap<i64, String> = HashMap::new();
        for obj in container.iter() {
            if let Some(go) = obj.as_game_object() {
                for component in &go.components {
                    owner_name
                        .entry(component.path_id)
                        .or_insert_with(|| go.name.clone());
                }
            }
        }
        debug!(
            container = container.label(),
            components = owner_name.len(),
            "owner index built"
        );
        Self { owner_name }
    }

    /// Resolve the name of the entity owning `component`.
    ///
    /// Returns `None` when the reference does not resolve in the container
    /// at all, or when no entity claims it. Both are normal outcomes in a
    /// partially loaded graph; callers map them to a sentinel, never an
    /// error.
    pub fn resolve_owner(&self, container: &Container, component: ObjectRef) -> Option<&str> {
        // A dangling reference has no owner even if some entity lists it.
        container.lookup(component)?;
        self.owner_name.get(&component.path_id).map(String::as_str)
    }
}

impl std::fmt::Debug for OwnerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnerIndex")
            .field("component_count", &self.owner_name.len())
            .finish()
    }
}
