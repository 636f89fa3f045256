//! Line-oriented diff report for one matched renderer pair.

use bundlecmp_extract::RendererDetail;
use serde::{Deserialize, Serialize};

/// Which fields the report compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffMode {
    /// Root bone plus an indexed line per bone pair.
    Bones,
    /// An indexed line per material pair, then the mesh pair.
    MaterialsAndMesh,
}

/// Render the comparison of a matched pair as display-ready text.
///
/// Output contains no control characters beyond newlines. Indexed sections
/// emit only the overlapping prefix when the two sides' counts differ: with
/// 5 bones against 3, exactly 3 lines appear. Building the same report
/// twice from the same details yields byte-identical text.
pub fn build_report(detail_a: &RendererDetail, detail_b: &RendererDetail, mode: DiffMode) -> String {
    let mut out = String::new();
    out.push_str(&format!("Comparing {}:\n", detail_a.owner_name));
    out.push_str(&format!(
        "PathID (File 1): {} vs PathID (File 2): {}\n",
        detail_a.renderer.path_id, detail_b.renderer.path_id
    ));

    match mode {
        DiffMode::Bones => {
            out.push_str(&format!(
                "Root Bone: {} vs {}\n",
                detail_a.root_bone_name, detail_b.root_bone_name
            ));
            out.push_str("Bones:\n");
            for (idx, (a, b)) in detail_a.bones.iter().zip(&detail_b.bones).enumerate() {
                out.push_str(&format!(
                    "  {}. {} ({}) vs {} ({})\n",
                    idx, a.name, a.reference.path_id, b.name, b.reference.path_id
                ));
            }
        }
        DiffMode::MaterialsAndMesh => {
            out.push_str("Materials:\n");
            for (idx, (a, b)) in detail_a
                .materials
                .iter()
                .zip(&detail_b.materials)
                .enumerate()
            {
                out.push_str(&format!(
                    "  {}. {} (FileID: {}) vs {} (FileID: {})\n",
                    idx, a.path_id, a.file_id, b.path_id, b.file_id
                ));
            }
            out.push_str(&format!(
                "Mesh:\n  0. {} (FileID: {}) vs {} (FileID: {})\n",
                detail_a.mesh.path_id,
                detail_a.mesh.file_id,
                detail_b.mesh.path_id,
                detail_b.mesh.file_id
            ));
        }
    }

    out
}
