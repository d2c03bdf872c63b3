//! geofoils: writes gmsh mesh descriptions around NACA 4-digit or user supplied airfoils.
//!
//! Set `RUST_LOG` (for example `RUST_LOG=geofoils_rs=debug`) or pass `-v`/`-vv` for more output.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, ValueEnum};
use geofoils_rs::pipeline::{load_profile, Pipeline, Source};
use geofoils_rs::workspace::Workspace;
use geofoils_rs::MeshProfile;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "geofoils")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").args(["naca", "file"])))]
struct Cli {
    /// 4 digits NACA airfoil
    #[arg(short = 'n', long, required_unless_present_any = ["file", "print_config"])]
    naca: Option<String>,

    /// Airfoil coordinate file, two columns in Selig format
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Number of elements on the airfoil
    #[arg(long, default_value_t = 100)]
    points: usize,

    /// Chord length of a generated airfoil
    #[arg(long, default_value_t = 1.0)]
    chord: f64,

    /// GEO file name, defaults to NACA<code> or the input file name
    #[arg(long)]
    name: Option<String>,

    /// Farfield topology of the mesh description
    #[arg(long, value_enum, default_value = "plain")]
    profile: ProfileKind,

    /// JSON file with the mesh profile and its parameters
    #[arg(long, conflicts_with = "profile")]
    config: Option<PathBuf>,

    /// Directory in which the airfoil folders are written
    #[arg(long, default_value = "workspace")]
    workspace: PathBuf,

    /// Print the selected mesh profile as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Print a JSON summary of the run
    #[arg(long)]
    json: bool,

    /// Suppress all non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileKind {
    /// Rectangular farfield with a fixed farfield mesh size
    Plain,
    /// Rectangular farfield sized from a growth ratio
    Growth,
    /// Circular domain with a boundary layer (RANS)
    Viscous,
}

impl ProfileKind {
    fn defaults(self) -> MeshProfile {
        match self {
            ProfileKind::Plain => MeshProfile::plain(),
            ProfileKind::Growth => MeshProfile::growth_ratio(),
            ProfileKind::Viscous => MeshProfile::viscous(),
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "geofoils_rs=info",
            2 => "geofoils_rs=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let profile = match &cli.config {
        Some(path) => load_profile(path)?,
        None => cli.profile.defaults(),
    };

    if cli.print_config {
        println!("{}", profile.to_json()?);
        return Ok(());
    }

    let source = match (&cli.naca, &cli.file) {
        (Some(code), _) => Source::Naca {
            code: code.clone(),
            sample_count: cli.points,
            chord: cli.chord,
        },
        (None, Some(path)) => Source::File(path.clone()),
        (None, None) => anyhow::bail!("You must provide either a NACA code or a file"),
    };

    let pipeline = Pipeline::new(Workspace::new(&cli.workspace), profile);
    let summary = pipeline
        .run(&source, cli.name.as_deref())
        .with_context(|| {
            format!(
                "failed to build the {} mesh description",
                pipeline.profile().name()
            )
        })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if !cli.quiet {
        println!("{}", summary.geo.display());
    }

    Ok(())
}
