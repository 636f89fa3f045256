use std::path::Path;

use anyhow::Context;
use bundlecmp_diff::DiffMode;
use bundlecmp_extract::{extract_renderers, resolve_detail, RendererDetail};
use bundlecmp_graph::{Container, OwnerIndex};
use bundlecmp_session::CompareSession;
use colored::Colorize;
use serde_json::json;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::List(args) => cmd_list(args, &cli.format),
        Command::Show(args) => cmd_show(args, &cli.format),
        Command::Matches(args) => cmd_matches(args, &cli.format),
        Command::Compare(args) => cmd_compare(args, &cli.format),
    }
}

impl ModeArg {
    fn to_diff_mode(&self) -> DiffMode {
        match self {
            ModeArg::Bones => DiffMode::Bones,
            ModeArg::Materials => DiffMode::MaterialsAndMesh,
        }
    }
}

fn load_container(path: &Path) -> anyhow::Result<Container> {
    Container::from_path(path)
        .with_context(|| format!("failed to load container {}", path.display()))
}

fn cmd_list(args: ListArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let container = load_container(&args.dump)?;
    let owners = OwnerIndex::build(&container);
    let records = extract_renderers(&container, &owners);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => {
            println!(
                "{} ({}): {} renderer(s)",
                container.label().bold(),
                truncate_path(&args.dump.display().to_string()),
                records.len()
            );
            for record in &records {
                println!("  {:>8}  {}", record.renderer.path_id, record.owner_name.yellow());
            }
        }
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let container = load_container(&args.dump)?;
    let owners = OwnerIndex::build(&container);
    let records = extract_renderers(&container, &owners);
    let record = bundlecmp_diff::record_by_name(&records, &args.name)
        .with_context(|| format!("no renderer named {:?} in {}", args.name, container.label()))?;
    let detail = resolve_detail(&container, &owners, record);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detail)?),
        OutputFormat::Text => print_detail(&detail),
    }
    Ok(())
}

fn print_detail(detail: &RendererDetail) {
    println!(
        "{} (PathID {})",
        detail.owner_name.yellow().bold(),
        detail.renderer.path_id
    );
    println!("Root Bone: {}", detail.root_bone_name);
    println!("Bones:");
    for (idx, bone) in detail.bones.iter().enumerate() {
        println!("  {}. {} ({})", idx, bone.name, bone.reference.path_id);
    }
    println!("Materials:");
    for (idx, material) in detail.materials.iter().enumerate() {
        println!("  {}. {} (FileID: {})", idx, material.path_id, material.file_id);
    }
    println!("Mesh: {} (FileID: {})", detail.mesh.path_id, detail.mesh.file_id);
}

fn cmd_matches(args: MatchesArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let session = CompareSession::load(&args.first, &args.second)?;
    let names = session.matched_names();

    match format {
        OutputFormat::Json => {
            let (first, second) = session.labels();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "first": first,
                    "second": second,
                    "matched": names,
                }))?
            );
        }
        OutputFormat::Text => {
            let (first, second) = session.labels();
            println!("{} vs {}", first.bold(), second.bold());
            if names.is_empty() {
                println!("No matched renderers.");
            } else {
                println!("{} {} matched renderer(s):", "✓".green(), names.len());
                for name in &names {
                    println!("  {}", name.yellow());
                }
            }
        }
    }
    Ok(())
}

fn cmd_compare(args: CompareArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let session = CompareSession::load(&args.first, &args.second)?;
    let mode = args.mode.to_diff_mode();

    match format {
        OutputFormat::Json => {
            let (first, second) = session.detail_pair(&args.name)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "name": args.name,
                    "mode": mode,
                    "first": first,
                    "second": second,
                }))?
            );
        }
        OutputFormat::Text => {
            print!("{}", session.report(&args.name, mode)?);
        }
    }
    Ok(())
}

/// Shorten a path for display, keeping its tail.
fn truncate_path(path: &str) -> String {
    const MAX_LEN: usize = 40;
    if path.chars().count() > MAX_LEN {
        let tail: String = path
            .chars()
            .skip(path.chars().count() - MAX_LEN)
            .collect();
        format!("...{tail}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_paths_pass_through() {
        assert_eq!(truncate_path("dumps/a.json"), "dumps/a.json");
    }

    #[test]
    fn long_paths_keep_a_40_char_tail() {
        let path = format!("{}/bundle.json", "x".repeat(60));
        let display = truncate_path(&path);
        assert!(display.starts_with("..."));
        assert_eq!(display.chars().count(), 43);
        assert!(display.ends_with("/bundle.json"));
    }
}
