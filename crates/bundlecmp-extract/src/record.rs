//! Raw renderer extraction: one record per SkinnedMeshRenderer.

use bundlecmp_graph::{Container, OwnerIndex};
use bundlecmp_types::{ObjectRef, TypeTag};
use serde::Serialize;
use tracing::debug;

/// Raw extraction of one skinned-mesh renderer.
///
/// References are carried exactly as loaded; only the owning entity's name
/// is resolved. Immutable; discarded wholesale when its container is
/// replaced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RendererRecord {
    /// Reference to the renderer object itself.
    pub renderer: ObjectRef,
    /// Name of the entity owning this renderer. Never empty: renderers whose
    /// owner cannot be resolved, or resolves to an empty name, are skipped
    /// at extraction.
    pub owner_name: String,
    /// Bone references, in renderer order.
    pub bones: Vec<ObjectRef>,
    /// Root bone reference (possibly null or dangling).
    pub root_bone: ObjectRef,
    /// Material references, in renderer order.
    pub materials: Vec<ObjectRef>,
    /// Mesh reference.
    pub mesh: ObjectRef,
}

/// Extract every skinned-mesh renderer from a container.
///
/// Output order follows the container's native enumeration order. A renderer
/// whose owning entity cannot be resolved is silently excluded: without an
/// owner name it cannot participate in cross-container matching.
pub fn extract_renderers(container: &Container, owners: &OwnerIndex) -> Vec<RendererRecord> {
    let mut records = Vec::new();
    for obj in container.objects_of_type(TypeTag::SkinnedMeshRenderer) {
        let Some(smr) = obj.as_skinned_renderer() else {
            continue;
        };
        // An entity with an empty name cannot participate in name matching;
        // treat it the same as a failed resolution.
        let owner_name = owners
            .resolve_owner(container, obj.self_ref())
            .filter(|name| !name.is_empty());
        let Some(owner_name) = owner_name else {
            debug!(
                container = container.label(),
                renderer = obj.path_id,
                "renderer has no owning entity, skipped"
            );
            continue;
        };
        records.push(RendererRecord {
            renderer: obj.self_ref(),
            owner_name: owner_name.to_string(),
            bones: smr.bones.clone(),
            root_bone: smr.root_bone,
            materials: smr.materials.clone(),
            mesh: smr.mesh,
        });
    }
    debug!(
        container = container.label(),
        records = records.len(),
        "renderer extraction complete"
    );
    records
}
