//! The container: one loaded archive's object graph.
//!
//! Built once from a flat object list and read-only thereafter. Lookup is
//! keyed by `path_id`; a miss is a legitimate outcome (dangling or
//! cross-archive references), never an error.

use std::collections::HashMap;

use bundlecmp_types::{GraphObject, ObjectRef, TypeTag};

/// One fully loaded asset archive's object graph.
///
/// Owns the full object set for its lifetime. Two containers exist
/// concurrently during a comparison session and are never merged; the engine
/// performs no writes after load, so shared read access is safe.
pub struct Container {
    label: String,
    objects: Vec<GraphObject>,
    by_path: HashMap<i64, usize>,
}

impl Container {
    /// Build a container from an object list.
    ///
    /// When two objects claim the same `path_id` the first one in list order
    /// wins the index slot; later duplicates remain enumerable but are
    /// shadowed for lookup.
    pub fn new(label: impl Into<String>, objects: Vec<GraphObject>) -> Self {
        let mut by_path = HashMap::with_capacity(objects.len());
        for (idx, obj) in objects.iter().enumerate() {
            by_path.entry(obj.path_id).or_insert(idx);
        }
        Self {
            label: label.into(),
            objects,
            by_path,
        }
    }

    /// Display label for this container (dump name or file stem).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of objects in the graph.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the graph holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Look up an object by reference.
    ///
    /// Returns `None` if no object carries the reference's `path_id`. The
    /// scope identifier is not consulted: lookup addresses this container
    /// only, and references into other sub-archives simply miss.
    pub fn lookup(&self, reference: ObjectRef) -> Option<&GraphObject> {
        self.by_path
            .get(&reference.path_id)
            .map(|&idx| &self.objects[idx])
    }

    /// All objects in native enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &GraphObject> {
        self.objects.iter()
    }

    /// All objects matching a type tag, in native enumeration order.
    ///
    /// The iterator is lazy and restartable; call it again for a fresh pass.
    pub fn objects_of_type(&self, tag: TypeTag) -> impl Iterator<Item = &GraphObject> {
        self.objects.iter().filter(move |obj| obj.type_tag() == tag)
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("label", &self.label)
            .field("object_count", &self.objects.len())
            .finish()
    }
}
