//! Loading a container from a graph dump.
//!
//! The binary asset-bundle parser is an external collaborator; what the
//! engine consumes is its output serialized as a JSON graph dump:
//!
//! ```json
//! {
//!   "name": "CAB-c0f842cf440c0c4d1d1fd29ea3e98545",
//!   "objects": [
//!     {"path_id": 1, "type": "GameObject", "name": "Hero",
//!      "components": [{"path_id": 4}]},
//!     {"path_id": 4, "type": "SkinnedMeshRenderer",
//!      "bones": [{"path_id": 2}], "root_bone": {"path_id": 2},
//!      "materials": [{"path_id": 8, "file_id": 1}],
//!      "mesh": {"path_id": 9, "file_id": 1}}
//!   ]
//! }
//! ```
//!
//! A load that fails here is a hard failure; every later resolution miss
//! degrades to sentinels instead.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bundlecmp_types::GraphObject;
use serde::Deserialize;
use tracing::debug;

use crate::container::Container;
use crate::error::GraphResult;

#[derive(Deserialize)]
struct ContainerDump {
    #[serde(default)]
    name: Option<String>,
    objects: Vec<GraphObject>,
}

impl Container {
    /// Load a container from a JSON graph dump on disk.
    ///
    /// The label is the dump's `name` field, falling back to the file stem.
    pub fn from_path(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let fallback = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let file = File::open(path)?;
        let container = Self::from_reader(fallback, BufReader::new(file))?;
        debug!(path = %path.display(), objects = container.len(), "container loaded");
        Ok(container)
    }

    /// Load a container from any reader yielding a JSON graph dump.
    pub fn from_reader(fallback_label: impl Into<String>, reader: impl Read) -> GraphResult<Self> {
        let dump: ContainerDump = serde_json::from_reader(reader)?;
        let label = dump.name.unwrap_or_else(|| fallback_label.into());
        Ok(Container::new(label, dump.objects))
    }

    /// Load a container from an in-memory JSON graph dump.
    pub fn from_json_str(fallback_label: impl Into<String>, json: &str) -> GraphResult<Self> {
        Self::from_reader(fallback_label, json.as_bytes())
    }
}
