use std::fmt;

use serde::{Deserialize, Serialize};

use crate::reference::ObjectRef;

/// The object kinds the comparison engine understands.
///
/// Containers may hold arbitrary other kinds; anything the engine does not
/// read field-by-field is carried as [`TypeTag::Unknown`] so it still
/// participates in identifier lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    GameObject,
    Transform,
    SkinnedMeshRenderer,
    Material,
    Mesh,
    Unknown,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::GameObject => "GameObject",
            TypeTag::Transform => "Transform",
            TypeTag::SkinnedMeshRenderer => "SkinnedMeshRenderer",
            TypeTag::Material => "Material",
            TypeTag::Mesh => "Mesh",
            TypeTag::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Field set of a named scene entity.
///
/// A GameObject carries the human-readable name that drives cross-container
/// matching, plus the ordered references to the components it owns. Owner
/// resolution reverse-searches these component lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameObjectData {
    pub name: String,
    #[serde(default)]
    pub components: Vec<ObjectRef>,
}

/// Field set of a skinned-mesh renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkinnedRendererData {
    #[serde(default)]
    pub bones: Vec<ObjectRef>,
    #[serde(default)]
    pub root_bone: ObjectRef,
    #[serde(default)]
    pub materials: Vec<ObjectRef>,
    #[serde(default)]
    pub mesh: ObjectRef,
}

/// The typed payload of one graph node.
///
/// Only GameObjects and SkinnedMeshRenderers are read field-by-field;
/// transforms, materials, and meshes matter only as lookup targets, and any
/// unrecognized kind falls back to [`ObjectData::Unknown`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectData {
    GameObject(GameObjectData),
    SkinnedMeshRenderer(SkinnedRendererData),
    Transform,
    Material,
    Mesh,
    #[serde(other)]
    Unknown,
}

impl ObjectData {
    /// The kind tag for this payload.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            ObjectData::GameObject(_) => TypeTag::GameObject,
            ObjectData::SkinnedMeshRenderer(_) => TypeTag::SkinnedMeshRenderer,
            ObjectData::Transform => TypeTag::Transform,
            ObjectData::Material => TypeTag::Material,
            ObjectData::Mesh => TypeTag::Mesh,
            ObjectData::Unknown => TypeTag::Unknown,
        }
    }
}

/// One node in a container's object graph.
///
/// Owned exclusively by its container; immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphObject {
    pub path_id: i64,
    #[serde(flatten)]
    pub data: ObjectData,
}

impl GraphObject {
    /// The kind tag of this node.
    pub fn type_tag(&self) -> TypeTag {
        self.data.type_tag()
    }

    /// A local reference addressing this node.
    pub fn self_ref(&self) -> ObjectRef {
        ObjectRef::local(self.path_id)
    }

    /// The GameObject field set, if this node is a named entity.
    pub fn as_game_object(&self) -> Option<&GameObjectData> {
        match &self.data {
            ObjectData::GameObject(go) => Some(go),
            _ => None,
        }
    }

    /// The renderer field set, if this node is a skinned-mesh renderer.
    pub fn as_skinned_renderer(&self) -> Option<&SkinnedRendererData> {
        match &self.data {
            ObjectData::SkinnedMeshRenderer(smr) => Some(smr),
            _ => None,
        }
    }

    /// The entity name, if this node carries one.
    pub fn name(&self) -> Option<&str> {
        self.as_game_object().map(|go| go.name.as_str())
    }
}
