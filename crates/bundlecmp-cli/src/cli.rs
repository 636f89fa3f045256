use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bundlecmp",
    about = "Compare skinned-mesh renderer metadata between asset container dumps",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the skinned-mesh renderers in one container dump
    List(ListArgs),
    /// Show the resolved detail of one renderer in one dump
    Show(ShowArgs),
    /// List owner names present in both dumps
    Matches(MatchesArgs),
    /// Diff a matched renderer between two dumps
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct ListArgs {
    pub dump: PathBuf,
}

#[derive(Args)]
pub struct ShowArgs {
    pub dump: PathBuf,
    /// Owner name of the renderer to show
    pub name: String,
}

#[derive(Args)]
pub struct MatchesArgs {
    pub first: PathBuf,
    pub second: PathBuf,
}

#[derive(Args)]
pub struct CompareArgs {
    pub first: PathBuf,
    pub second: PathBuf,
    /// Owner name of the matched renderer to diff
    pub name: String,
    #[arg(long, default_value = "bones")]
    pub mode: ModeArg,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum ModeArg {
    /// Root bone and per-index bone pairs
    Bones,
    /// Per-index material pairs and the mesh pair
    Materials,
}
