#![forbid(unsafe_code)]
//! Aizine command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use aizine::commands::{
    execute_build, execute_extract, execute_layouts, execute_package, BuildOptions,
    ExtractOptions, LayoutsOptions, PackageOptions,
};
use aizine::Settings;

#[derive(Parser)]
#[command(name = "aizine")]
#[command(about = "Photo-magazine planning - compose plans and layout extraction")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project base directory
    #[arg(long, global = true, default_value = ".")]
    base_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the compose plan for a job
    Build {
        /// Job id under the jobs directory
        #[arg(long)]
        job_id: Option<String>,

        /// Explicit job directory (overrides --job-id)
        #[arg(long)]
        job_path: Option<PathBuf>,

        /// Fixed planner seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Keep interior photos in scan order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,
    },

    /// Extract IDML template archives into layout documents
    Extract {
        /// One archive to extract
        #[arg(long)]
        idml: Option<PathBuf>,

        /// Template key for a single extraction, e.g. "lavstory/vesilnyi"
        #[arg(long)]
        template: Option<String>,

        /// Output path for a single extraction
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Extract every archive under the templates directory
        #[arg(long)]
        all: bool,
    },

    /// Preview layout page selection for a theme and budget
    Layouts {
        /// Theme prefix to match against extracted layout documents
        theme: String,

        /// Target page count
        #[arg(long, default_value_t = 16)]
        pages: usize,

        /// Photo budget
        #[arg(long)]
        photos: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify renderer output and package the deliverable
    Package {
        /// Job id under the jobs directory
        #[arg(long)]
        job_id: Option<String>,

        /// Explicit job directory (overrides --job-id)
        #[arg(long)]
        job_path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load_or_default(&cli.base_dir);

    if let Err(err) = run(cli.command, &settings, cli.verbose) {
        eprintln!("{} {:#}", style("✗").red(), err);
        std::process::exit(1);
    }
}

fn run(command: Commands, settings: &Settings, verbose: bool) -> anyhow::Result<()> {
    match command {
        Commands::Build {
            job_id,
            job_path,
            seed,
            no_shuffle,
        } => execute_build(
            BuildOptions {
                job_id,
                job_path,
                seed,
                no_shuffle,
                print_plan: verbose,
            },
            settings,
        ),

        Commands::Extract {
            idml,
            template,
            out,
            all,
        } => execute_extract(
            ExtractOptions {
                idml,
                template,
                out,
                all,
            },
            settings,
        ),

        Commands::Layouts {
            theme,
            pages,
            photos,
            json,
        } => execute_layouts(
            LayoutsOptions {
                theme,
                pages,
                photos,
                json,
            },
            settings,
        ),

        Commands::Package { job_id, job_path } => {
            execute_package(PackageOptions { job_id, job_path }, settings)
        }
    }
}
