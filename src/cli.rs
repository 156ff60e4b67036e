use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kinline family birthday timeline.
#[derive(Parser)]
#[command(
    name = "kinline",
    version,
    about = "Lay out a family birthday timeline and find the next birthday"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the positioned timeline document.
    Layout(LayoutArgs),
    /// Print the next-birthday banner.
    Banner(BannerArgs),
    /// Reload the roster periodically and rewrite the document.
    Watch(WatchArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args, Clone)]
pub struct SourceArgs {
    /// Path to TOML configuration file (defaults to ./kinline.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the roster JSON path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the `layout` subcommand.
#[derive(clap::Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Path for the JSON document (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override pixels per year from config.
    #[arg(long)]
    pub scale: Option<f64>,

    /// Override viewport width in pixels from config.
    #[arg(long)]
    pub width: Option<f64>,

    /// Reference date (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `banner` subcommand.
#[derive(clap::Args)]
pub struct BannerArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Reference date (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the `watch` subcommand.
#[derive(clap::Args)]
pub struct WatchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Override the refresh interval in seconds from config.
    #[arg(long)]
    pub interval: Option<u64>,

    /// Stop after this many refresh cycles (runs forever if omitted).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,

    /// Path for the JSON document (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
