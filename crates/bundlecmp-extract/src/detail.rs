//! Display-ready resolution of one renderer record.

use bundlecmp_graph::{Container, OwnerIndex};
use bundlecmp_types::ObjectRef;
use serde::Serialize;

use crate::record::RendererRecord;

/// Sentinel name for references whose owner cannot be resolved.
///
/// A partial or incomplete container must never block a comparison, so
/// resolution degrades to this sentinel instead of failing.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One bone, paired with its resolved owner name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoneDetail {
    /// Resolved owner name, or [`UNKNOWN_NAME`].
    pub name: String,
    /// The bone reference as loaded.
    pub reference: ObjectRef,
}

/// Display-ready form of one renderer record.
///
/// Bones and root bone are name-resolved; materials and mesh stay as
/// identifier pairs, since they are not scene entities and carry no owner
/// name in this model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RendererDetail {
    pub renderer: ObjectRef,
    pub owner_name: String,
    /// Resolved root bone name, or [`UNKNOWN_NAME`].
    pub root_bone_name: String,
    /// Resolved bones; index `i` corresponds to the record's `bones[i]`.
    pub bones: Vec<BoneDetail>,
    pub materials: Vec<ObjectRef>,
    pub mesh: ObjectRef,
}

/// Resolve a record into its display-ready detail. Never fails.
pub fn resolve_detail(
    container: &Container,
    owners: &OwnerIndex,
    record: &RendererRecord,
) -> RendererDetail {
    let resolve = |reference: ObjectRef| -> String {
        owners
            .resolve_owner(container, reference)
            .unwrap_or(UNKNOWN_NAME)
            .to_string()
    };

    RendererDetail {
        renderer: record.renderer,
        owner_name: record.owner_name.clone(),
        root_bone_name: resolve(record.root_bone),
        bones: record
            .bones
            .iter()
            .map(|&bone| BoneDetail {
                name: resolve(bone),
                reference: bone,
            })
            .collect(),
        materials: record.materials.clone(),
        mesh: record.mesh,
    }
}
