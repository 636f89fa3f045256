//! The comparison session: two container slots and their derived views.

use std::collections::BTreeSet;
use std::path::Path;

use bundlecmp_diff::{build_report, match_names, record_by_name, DiffMode};
use bundlecmp_extract::{extract_renderers, resolve_detail, RendererDetail, RendererRecord};
use bundlecmp_graph::{Container, OwnerIndex};
use tracing::info;

use crate::error::{SessionError, SessionResult};

/// One loaded container plus everything derived from it.
///
/// Replaced wholesale on re-load; the container, its owner index, and its
/// records share one generation and are never partially invalidated.
struct LoadedSlot {
    container: Container,
    owners: OwnerIndex,
    records: Vec<RendererRecord>,
}

impl LoadedSlot {
    fn new(container: Container) -> Self {
        let owners = OwnerIndex::build(&container);
        let records = extract_renderers(&container, &owners);
        Self {
            container,
            owners,
            records,
        }
    }

    fn detail(&self, record: &RendererRecord) -> RendererDetail {
        resolve_detail(&self.container, &self.owners, record)
    }
}

/// A comparison session over two independently loaded containers.
///
/// The two slots are independent: they may be re-loaded separately and sit
/// at different generations. All engine state lives here explicitly; the
/// session performs no writes to either container after load.
pub struct CompareSession {
    first: LoadedSlot,
    second: LoadedSlot,
}

impl CompareSession {
    /// Load both containers from JSON graph dumps.
    ///
    /// Either load failing fails the whole session; a comparison requires
    /// two fully loaded containers.
    pub fn load(first: impl AsRef<Path>, second: impl AsRef<Path>) -> SessionResult<Self> {
        let first = Container::from_path(first)?;
        let second = Container::from_path(second)?;
        Ok(Self::from_containers(first, second))
    }

    /// Build a session from two already-loaded containers.
    pub fn from_containers(first: Container, second: Container) -> Self {
        let session = Self {
            first: LoadedSlot::new(first),
            second: LoadedSlot::new(second),
        };
        info!(
            first = session.first.container.label(),
            first_renderers = session.first.records.len(),
            second = session.second.container.label(),
            second_renderers = session.second.records.len(),
            "comparison session ready"
        );
        session
    }

    /// Replace the first container, dropping every view derived from its
    /// previous generation.
    pub fn reload_first(&mut self, path: impl AsRef<Path>) -> SessionResult<()> {
        self.first = LoadedSlot::new(Container::from_path(path)?);
        Ok(())
    }

    /// Replace the second container, dropping every view derived from its
    /// previous generation.
    pub fn reload_second(&mut self, path: impl AsRef<Path>) -> SessionResult<()> {
        self.second = LoadedSlot::new(Container::from_path(path)?);
        Ok(())
    }

    /// Display labels of the two containers, in slot order.
    pub fn labels(&self) -> (&str, &str) {
        (
            self.first.container.label(),
            self.second.container.label(),
        )
    }

    /// Extracted records of the first container.
    pub fn first_records(&self) -> &[RendererRecord] {
        &self.first.records
    }

    /// Extracted records of the second container.
    pub fn second_records(&self) -> &[RendererRecord] {
        &self.second.records
    }

    /// Owner names present in both containers' records.
    ///
    /// Empty when the containers share no names; that is a valid terminal
    /// state, not an error.
    pub fn matched_names(&self) -> BTreeSet<String> {
        match_names(&self.first.records, &self.second.records)
    }

    /// Resolved details for a matched name, in slot order.
    ///
    /// Rejects names outside the match set: a name present in only one
    /// container (or neither) cannot be compared.
    pub fn detail_pair(
        &self,
        name: &str,
    ) -> SessionResult<(RendererDetail, RendererDetail)> {
        let (Some(a), Some(b)) = (
            record_by_name(&self.first.records, name),
            record_by_name(&self.second.records, name),
        ) else {
            return Err(SessionError::NameNotMatched(name.to_string()));
        };
        Ok((self.first.detail(a), self.second.detail(b)))
    }

    /// The diff report for a matched name.
    pub fn report(&self, name: &str, mode: DiffMode) -> SessionResult<String> {
        let (a, b) = self.detail_pair(name)?;
        Ok(build_report(&a, &b, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// "Hero" has bones [2, 3]: 2 owned by "Spine", 3 dangling.
    const DUMP_A: &str = r#"{
        "name": "CAB-a",
        "objects": [
            {"path_id": 1, "type": "GameObject", "name": "Hero",
             "components": [{"path_id": 4}]},
            {"path_id": 5, "type": "GameObject", "name": "Spine",
             "components": [{"path_id": 2}]},
            {"path_id": 2, "type": "Transform"},
            {"path_id": 4, "type": "SkinnedMeshRenderer",
             "bones": [{"path_id": 2}, {"path_id": 3}],
             "root_bone": {"path_id": 2},
             "materials": [{"path_id": 100, "file_id": 1}],
             "mesh": {"path_id": 200, "file_id": 1}}
        ]
    }"#;

    /// "Hero" has bones [12, 13], both resolving ("Spine", "Pelvis").
    const DUMP_B: &str = r#"{
        "name": "CAB-b",
        "objects": [
            {"path_id": 1, "type": "GameObject", "name": "Hero",
             "components": [{"path_id": 7}]},
            {"path_id": 5, "type": "GameObject", "name": "Spine",
             "components": [{"path_id": 12}]},
            {"path_id": 6, "type": "GameObject", "name": "Pelvis",
             "components": [{"path_id": 13}]},
            {"path_id": 12, "type": "Transform"},
            {"path_id": 13, "type": "Transform"},
            {"path_id": 7, "type": "SkinnedMeshRenderer",
             "bones": [{"path_id": 12}, {"path_id": 13}],
             "root_bone": {"path_id": 12},
             "materials": [{"path_id": 300, "file_id": 1}],
             "mesh": {"path_id": 400, "file_id": 1}}
        ]
    }"#;

    fn session() -> CompareSession {
        let a = Container::from_json_str("a", DUMP_A).unwrap();
        let b = Container::from_json_str("b", DUMP_B).unwrap();
        CompareSession::from_containers(a, b)
    }

    #[test]
    fn matches_hero_across_containers() {
        let s = session();
        let names: Vec<_> = s.matched_names().into_iter().collect();
        assert_eq!(names, vec!["Hero"]);
    }

    #[test]
    fn bones_report_pairs_resolved_and_sentinel_names() {
        let s = session();
        let report = s.report("Hero", DiffMode::Bones).unwrap();
        assert_eq!(
            report,
            "Comparing Hero:\n\
             PathID (File 1): 4 vs PathID (File 2): 7\n\
             Root Bone: Spine vs Spine\n\
             Bones:\n\
             \x20 0. Spine (2) vs Spine (12)\n\
             \x20 1. Unknown (3) vs Pelvis (13)\n"
        );
    }

    #[test]
    fn materials_report_pairs_identifier_pairs() {
        let s = session();
        let report = s.report("Hero", DiffMode::MaterialsAndMesh).unwrap();
        assert!(report.contains("  0. 100 (FileID: 1) vs 300 (FileID: 1)\n"));
        assert!(report.contains("Mesh:\n  0. 200 (FileID: 1) vs 400 (FileID: 1)\n"));
    }

    #[test]
    fn one_sided_name_is_rejected() {
        let s = session();
        // "Pelvis" owns a bone in container B but no renderer anywhere.
        let err = s.report("Pelvis", DiffMode::Bones).unwrap_err();
        assert!(matches!(err, SessionError::NameNotMatched(name) if name == "Pelvis"));
    }

    #[test]
    fn disjoint_containers_yield_empty_match_set() {
        let a = Container::from_json_str("a", DUMP_A).unwrap();
        let b = Container::from_json_str(
            "b",
            r#"{"objects": [
                {"path_id": 1, "type": "GameObject", "name": "Stranger",
                 "components": [{"path_id": 2}]},
                {"path_id": 2, "type": "SkinnedMeshRenderer"}
            ]}"#,
        )
        .unwrap();
        let s = CompareSession::from_containers(a, b);
        assert!(s.matched_names().is_empty());
        assert!(s.report("Hero", DiffMode::Bones).is_err());
    }

    #[test]
    fn reload_drops_previous_generation() {
        use std::io::Write;

        let mut s = session();
        assert_eq!(s.matched_names().len(), 1);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"name": "CAB-c", "objects": []}"#).unwrap();
        s.reload_second(file.path()).unwrap();

        assert_eq!(s.labels().1, "CAB-c");
        assert!(s.second_records().is_empty());
        assert!(s.matched_names().is_empty());
    }

    #[test]
    fn slots_are_ordered_first_then_second() {
        let s = session();
        assert_eq!(s.labels(), ("CAB-a", "CAB-b"));
        assert_eq!(s.first_records()[0].renderer.path_id, 4);
        assert_eq!(s.second_records()[0].renderer.path_id, 7);
    }
}
