use std::path::PathBuf;

use augora::Gender;

/// Browse French deputies by zone from a local data pack
#[derive(clap::Parser, Debug)]
#[command(name = "augora", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Data pack directory
    #[arg(long, env = "AUGORA_DATA_DIR", default_value = ".", global = true, value_hint = clap::ValueHint::DirPath)]
    pub data: PathBuf,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Show a zone: its sub-zones, neighbours and deputies
    Zone(ZoneArgs),

    /// Group, gender and age statistics of a zone's deputies
    Stats(StatsArgs),

    /// List every zone URL
    Routes,

    /// Write the loaded pack back out, normalized
    Export(ExportArgs),
}

/// Roster filters, all optional; without any every deputy is kept.
#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive search in deputy names
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Keep only these groups (repeatable); "none" selects unaffiliated deputies
    #[arg(long = "only-group", value_name = "CODE")]
    pub only_groups: Vec<String>,

    /// Drop these groups (repeatable)
    #[arg(long = "exclude-group", value_name = "CODE")]
    pub exclude_groups: Vec<String>,

    /// Keep only one gender: H or F
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Youngest age kept
    #[arg(long)]
    pub min_age: Option<u32>,

    /// Oldest age kept
    #[arg(long)]
    pub max_age: Option<u32>,
}

#[derive(clap::Args, Debug)]
pub struct ZoneArgs {
    /// Zone URL path, e.g. "11/75/3" or "971"; mainland France when omitted or unknown
    pub path: Option<String>,

    /// Print the displayed zones as a GeoJSON FeatureCollection
    #[arg(long)]
    pub geojson: bool,

    /// Seed for the deputy list order; a fresh shuffle when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Zone URL path; mainland France when omitted or unknown
    pub path: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: PathBuf,
}
