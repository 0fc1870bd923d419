use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use path_layout::{LayoutOptions, PathSummary};
use path_schema::{Opening, OpeningStat};
use path_store::{PreferenceStore, TrainingMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod preview;

#[derive(Debug, Parser)]
#[command(name = "openpath")]
#[command(about = "Opening lesson path layout CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lay out the lesson path and write it as JSON.
    Layout {
        catalog: PathBuf,
        #[arg(short, long)]
        stats: Option<PathBuf>,
        /// JSON file with layout geometry overrides.
        #[arg(long)]
        options: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a text rendering of the lesson path.
    Preview {
        catalog: PathBuf,
        #[arg(short, long)]
        stats: Option<PathBuf>,
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Print progress totals for the lesson path.
    Summary {
        catalog: PathBuf,
        #[arg(short, long)]
        stats: Option<PathBuf>,
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Read or change training mode preferences.
    Mode {
        #[command(subcommand)]
        action: ModeCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ModeCommand {
    Get {
        opening: String,
        #[arg(long)]
        prefs: PathBuf,
    },
    Set {
        opening: String,
        mode: TrainingMode,
        #[arg(long)]
        prefs: PathBuf,
    },
    SetDefault {
        mode: TrainingMode,
        #[arg(long)]
        prefs: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Layout {
            catalog,
            stats,
            options,
            output,
        } => {
            let (openings, stats) = load_inputs(&catalog, stats.as_deref())?;
            let options = load_options(options.as_deref())?;
            let nodes = path_layout::build_path_with_options(&openings, &stats, &options)
                .with_context(|| format!("layout failed: {}", catalog.display()))?;

            let json = serde_json::to_string_pretty(&nodes).context("failed to serialize path")?;
            let out_path = output.unwrap_or_else(|| default_output_path(&catalog));
            fs::write(&out_path, json)
                .with_context(|| format!("failed to write: {}", out_path.display()))?;
            info!(nodes = nodes.len(), output = %out_path.display(), "wrote lesson path");
        }
        Command::Preview {
            catalog,
            stats,
            options,
        } => {
            let (openings, stats) = load_inputs(&catalog, stats.as_deref())?;
            let options = load_options(options.as_deref())?;
            let nodes = path_layout::build_path_with_options(&openings, &stats, &options)
                .with_context(|| format!("layout failed: {}", catalog.display()))?;
            print!("{}", preview::render_preview(&nodes, &options));
        }
        Command::Summary {
            catalog,
            stats,
            options,
        } => {
            let (openings, stats) = load_inputs(&catalog, stats.as_deref())?;
            let options = load_options(options.as_deref())?;
            let nodes = path_layout::build_path_with_options(&openings, &stats, &options)
                .with_context(|| format!("layout failed: {}", catalog.display()))?;
            let summary = PathSummary::from_nodes(&nodes);
            println!("lessons={}", summary.lessons);
            println!("completed={}", summary.completed_lessons);
            println!("units={}", summary.units);
            println!("rewards={}/{}", summary.rewards_unlocked, summary.rewards);
            println!("mastery={}/{}", summary.total_mastery, summary.max_mastery);
            println!("progress={:.0}%", summary.progress_ratio() * 100.0);
            println!("current={}", summary.current_lesson.as_deref().unwrap_or("-"));
            println!("next={}", summary.next_lesson.as_deref().unwrap_or("-"));
        }
        Command::Mode { action } => run_mode(action)?,
    }

    Ok(())
}

fn run_mode(action: ModeCommand) -> anyhow::Result<()> {
    match action {
        ModeCommand::Get { opening, prefs } => {
            let prefs = PreferenceStore::new(prefs).load();
            println!("{}", prefs.resolve(&opening));
        }
        ModeCommand::Set {
            opening,
            mode,
            prefs,
        } => {
            let store = PreferenceStore::new(prefs);
            store.update(|p| p.set(opening.clone(), mode))?;
            info!(%opening, %mode, path = %store.path().display(), "training mode saved");
        }
        ModeCommand::SetDefault { mode, prefs } => {
            let store = PreferenceStore::new(prefs);
            store.update(|p| p.default_mode = Some(mode))?;
            info!(%mode, path = %store.path().display(), "default training mode saved");
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,path_cli=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_inputs(catalog: &Path, stats: Option<&Path>) -> anyhow::Result<(Vec<Opening>, Vec<OpeningStat>)> {
    let openings = path_store::load_catalog_from_path(catalog)?;
    let stats = match stats {
        Some(path) => path_store::load_stats_from_path(path)?,
        None => Vec::new(),
    };
    Ok((openings, stats))
}

fn load_options(path: Option<&Path>) -> anyhow::Result<LayoutOptions> {
    match path {
        Some(path) => path_store::load_layout_options_from_path(path),
        None => Ok(LayoutOptions::default()),
    }
}

fn default_output_path(catalog: &Path) -> PathBuf {
    let mut out = catalog.to_path_buf();
    out.set_extension("path.json");
    out
}
