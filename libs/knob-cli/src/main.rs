//! knob CLI - writes parametric control knobs as binary STL files
//!
//! Parameters come from an optional JSON file and are overridden by flags.
//! Every value passes through the same range clamping as the browser front
//! end; adjustments are listed after the report.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use knob_mesh::{KnobStyle, NutLocation, NutSize, ShaftMode, ShapeParameters};
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "knob")]
#[command(about = "Parametric rotary knob generator", long_about = None)]
struct Cli {
    /// Log every pipeline stage
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a knob and write it as binary STL
    Generate(GenerateArgs),
    /// List the supported nut sizes and their pocket dimensions
    Nuts,
    /// Print the default parameters as JSON
    Defaults,
}

#[derive(clap::Args, Default)]
struct GenerateArgs {
    /// JSON parameter file (missing fields take their defaults)
    #[arg(short, long)]
    params: Option<PathBuf>,
    /// Output file (default: the suggested file name)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Body diameter in mm
    #[arg(long)]
    diameter: Option<f64>,
    /// Body height in mm
    #[arg(long)]
    height: Option<f64>,
    /// Body profile
    #[arg(long, value_enum)]
    style: Option<StyleArg>,
    /// Lobe count for lobed knobs
    #[arg(long)]
    lobes: Option<u32>,
    /// Knurl ridge count for round knobs (0, 32, 64 or 128)
    #[arg(long)]
    knurl: Option<u32>,
    /// Shaft attachment
    #[arg(long, value_enum)]
    shaft: Option<ShaftArg>,
    /// Nut size for the nut trap (M3, M4, M5, M6, 1/4", M8)
    #[arg(long, value_parser = parse_nut)]
    nut: Option<NutSize>,
    /// Open the nut trap towards the top face
    #[arg(long)]
    nut_top: bool,
    /// Run the bore through the top face
    #[arg(long)]
    through_hole: bool,
    /// Finish the top with a dome
    #[arg(long)]
    dome: bool,
    /// Finger dish depth in mm
    #[arg(long)]
    dish: Option<f64>,
    /// Boss height in mm
    #[arg(long)]
    boss: Option<f64>,
    /// Samples around each ring (32, 64 or 128)
    #[arg(long)]
    resolution: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Round,
    Lobed,
}

impl From<StyleArg> for KnobStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Round => KnobStyle::Round,
            StyleArg::Lobed => KnobStyle::Lobed,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ShaftArg {
    DShaft,
    Round,
    NutTrap,
}

impl From<ShaftArg> for ShaftMode {
    fn from(arg: ShaftArg) -> Self {
        match arg {
            ShaftArg::DShaft => ShaftMode::DShaft,
            ShaftArg::Round => ShaftMode::RoundHole,
            ShaftArg::NutTrap => ShaftMode::NutTrap,
        }
    }
}

fn parse_nut(value: &str) -> Result<NutSize, String> {
    NutSize::ALL
        .into_iter()
        .find(|size| size.label().eq_ignore_ascii_case(value))
        .ok_or_else(|| format!("unknown nut size `{value}`"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => generate(&args)?,
        Commands::Nuts => list_nuts(),
        Commands::Defaults => {
            println!("{}", serde_json::to_string_pretty(&ShapeParameters::default())?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let params = resolve_params(args)?;
    let clamped = params.clamped()?;

    let knob = knob_mesh::generate_knob(&clamped.params)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(knob.suggested_filename()));

    write_stl(&knob, &output)?;

    println!("Wrote {}", output.display());
    println!("  triangles: {}", knob.triangle_count());
    println!("  volume:    {:.2} cm³", knob.volume_cc());
    for adjustment in &clamped.adjustments {
        println!("  adjusted:  {adjustment}");
    }
    Ok(())
}

fn write_stl(knob: &knob_mesh::GeneratedKnob, path: &Path) -> Result<()> {
    let file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    knob.write_stl(BufWriter::new(file))
        .with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), "stl written");
    Ok(())
}

/// Loads the parameter file, if any, and applies the flag overrides.
fn resolve_params(args: &GenerateArgs) -> Result<ShapeParameters> {
    let mut params = match &args.params {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => ShapeParameters::default(),
    };

    if let Some(diameter) = args.diameter {
        params.diameter = diameter;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(style) = args.style {
        params.style = style.into();
    }
    if let Some(lobes) = args.lobes {
        params.lobes = lobes;
    }
    if let Some(knurl) = args.knurl {
        params.knurl_ridges = knurl;
    }
    if let Some(shaft) = args.shaft {
        params.shaft_mode = shaft.into();
        params.shaft_diameter = None;
    }
    if let Some(nut) = args.nut {
        params.nut_size = nut;
    }
    if args.nut_top {
        params.nut_location = NutLocation::Top;
    }
    if args.through_hole {
        params.through_hole = true;
    }
    if args.dome {
        params.dome = true;
    }
    if let Some(depth) = args.dish {
        params.recess_depth = depth;
    }
    if let Some(boss) = args.boss {
        params.boss_height = boss;
    }
    if let Some(segments) = args.resolution {
        params.segments = segments;
    }

    Ok(params)
}

fn list_nuts() {
    print!("{}", nut_table());
}

/// Nut sizes with their pocket and the default bolt clearance bore.
fn nut_table() -> String {
    let mut table = format!(
        "{:<6} {:>8} {:>8} {:>8} {:>8}\n",
        "size", "width", "height", "pocket", "bolt"
    );
    for size in NutSize::ALL {
        let spec = size.spec();
        let bolt = ShapeParameters::default_shaft_diameter(ShaftMode::NutTrap, size);
        table.push_str(&format!(
            "{:<6} {:>8.2} {:>8.2} {:>8.2} {:>8.2}\n",
            size.label(),
            spec.width,
            spec.height,
            spec.pocket_width(),
            bolt
        ));
    }
    table
}
