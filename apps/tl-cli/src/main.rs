use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tl_core::TlError;
use tl_losses::{
    ConfigError, CoreType, InputParameters, LossAnalysis, LossSummary, TraceKind,
    ValidationError, compute, load_json, load_yaml, save_yaml,
};

#[derive(Parser)]
#[command(name = "tl-cli")]
#[command(about = "Transformer loss analyzer - loss curves and efficiency across the load range", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute loss and efficiency curves
    Compute {
        #[command(flatten)]
        input: InputArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the animation frames for a calculation
    Frames {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Write a default parameter file
    Template {
        /// Path of the YAML file to create
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

/// Parameter sources: flags override the file, the file overrides defaults.
#[derive(Args, Debug, Default)]
struct InputArgs {
    /// Parameter file (.yaml, .yml or .json)
    #[arg(short, long)]
    params: Option<PathBuf>,
    /// Primary voltage (V)
    #[arg(long)]
    primary_voltage: Option<f64>,
    /// Secondary voltage (V)
    #[arg(long)]
    secondary_voltage: Option<f64>,
    /// Rated power (kVA)
    #[arg(long)]
    rated_power: Option<f64>,
    /// Frequency (Hz)
    #[arg(long)]
    frequency: Option<f64>,
    /// Winding resistance (ohm)
    #[arg(long)]
    winding_resistance: Option<f64>,
    /// Core type: CRGO, Ferrite, Amorphous, Nanocrystalline
    #[arg(long)]
    core_type: Option<CoreType>,
    /// Core size (cm²)
    #[arg(long)]
    core_size: Option<f64>,
    /// Operating temperature (°C)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_temperature)]
    temperature: Option<f64>,
    /// Load level (%)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    load_level: Option<u8>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Parameter file error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] TlError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compute {
            input,
            format,
            output,
        } => cmd_compute(&input, format, output.as_deref()),
        Commands::Frames { input } => cmd_frames(&input),
        Commands::Template { output } => cmd_template(&output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Validation(err)) => {
            eprintln!("Please enter valid input values.");
            eprintln!("  {}", err);
            ExitCode::FAILURE
        }
        Err(CliError::Config(ConfigError::Validation(err))) => {
            eprintln!("Please enter valid input values.");
            eprintln!("  {}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_temperature(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if InputParameters::TEMPERATURE_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(format!("temperature must be within -50..=200 °C (got {})", value))
    }
}

fn resolve_params(input: &InputArgs) -> CliResult<InputParameters> {
    let mut params = match &input.params {
        Some(path) if path.extension().is_some_and(|ext| ext == "json") => load_json(path)?,
        Some(path) => load_yaml(path)?,
        None => InputParameters::default(),
    };

    if let Some(v) = input.primary_voltage {
        params.primary_voltage = v;
    }
    if let Some(v) = input.secondary_voltage {
        params.secondary_voltage = v;
    }
    if let Some(v) = input.rated_power {
        params.rated_power = v;
    }
    if let Some(v) = input.frequency {
        params.frequency = v;
    }
    if let Some(v) = input.winding_resistance {
        params.winding_resistance = v;
    }
    if let Some(v) = input.core_type {
        params.core_type = v;
    }
    if let Some(v) = input.core_size {
        params.core_size = v;
    }
    if let Some(v) = input.temperature {
        params.temperature = v;
    }
    if let Some(v) = input.load_level {
        params.load_level_percent = v;
    }
    Ok(params)
}

fn cmd_compute(input: &InputArgs, format: Format, output: Option<&Path>) -> CliResult<()> {
    let params = resolve_params(input)?;
    tracing::info!(rated_power = params.rated_power, ?format, "computing loss curves");
    let analysis = compute(&params)?;

    let text = match format {
        Format::Table => render_table(&analysis)?,
        Format::Csv => render_csv(&analysis),
        Format::Json => render_json(&analysis)?,
    };

    if let Some(path) = output {
        std::fs::write(path, text)?;
        println!(
            "✓ Exported {} load points to {}",
            analysis.sweep.len(),
            path.display()
        );
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn cmd_frames(input: &InputArgs) -> CliResult<()> {
    let params = resolve_params(input)?;
    let analysis = compute(&params)?;

    println!("Animation frames: {}", analysis.frame_count());
    for frame in analysis.frames() {
        let last_load = frame.traces[0].x.last().copied().unwrap_or(0.0);
        println!(
            "  #{:<3} samples={:<3} load≤{:.3} kVA",
            frame.index, frame.len, last_load
        );
    }
    Ok(())
}

fn cmd_template(output: &Path) -> CliResult<()> {
    save_yaml(output, &InputParameters::default())?;
    tracing::info!(path = %output.display(), "wrote parameter template");
    println!("✓ Wrote default parameters to {}", output.display());
    Ok(())
}

fn render_table(analysis: &LossAnalysis) -> CliResult<String> {
    let p = &analysis.params;
    let plate = p.nameplate();
    let c = &analysis.curves;
    let mut out = String::new();

    let _ = writeln!(out, "Transformer Losses & Efficiency");
    let _ = writeln!(
        out,
        "  {:.1} V / {:.1} V (ratio {:.3}), {:.1} kVA, {:.1} Hz, {:.3} Ω",
        p.primary_voltage,
        p.secondary_voltage,
        plate.turns_ratio()?,
        p.rated_power,
        p.frequency,
        p.winding_resistance
    );
    let _ = writeln!(
        out,
        "  Core: {} {:.1} cm², {:.1} °C, rated primary current {:.2} A",
        p.core_type,
        p.core_size,
        p.temperature,
        plate.rated_primary_current()?
    );
    let _ = writeln!(out);

    let _ = write!(out, "{:>10}", "Load (kVA)");
    for kind in TraceKind::ALL {
        let _ = write!(out, " {:>16}", kind.name());
    }
    let _ = writeln!(out, " {:>12}", "Total Loss");

    for (i, load) in analysis.sweep.iter().enumerate() {
        let _ = write!(out, "{:>10.3}", load);
        for kind in TraceKind::ALL {
            let _ = write!(out, " {:>16.4}", kind.values(c)[i]);
        }
        let _ = writeln!(out, " {:>12.4}", c.total[i]);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Axis bounds: x ∈ [0, {:.3}], y ∈ [0, {:.3}]",
        analysis.bounds.x_max, analysis.bounds.y_max
    );
    if let Some(summary) = analysis.summary() {
        render_summary(&mut out, &summary, p.load_level_percent);
    }
    Ok(out)
}

fn render_summary(out: &mut String, summary: &LossSummary, load_level: u8) {
    let rows = [
        ("Peak efficiency", &summary.peak_efficiency),
        ("Full load", &summary.full_load),
    ];
    for (label, point) in rows {
        let _ = writeln!(
            out,
            "{:<16} load={:.3} kVA  total loss={:.4}  efficiency={:.3}%",
            format!("{}:", label),
            point.load,
            point.total_loss,
            point.efficiency
        );
    }
    let point = &summary.selected;
    let _ = writeln!(
        out,
        "{:<16} load={:.3} kVA  total loss={:.4}  efficiency={:.3}%",
        format!("At {}% load:", load_level),
        point.load,
        point.total_loss,
        point.efficiency
    );
}

fn render_csv(analysis: &LossAnalysis) -> String {
    let c = &analysis.curves;
    let mut csv = String::from(
        "load_kva,iron_loss,copper_loss,stray_loss,dielectric_loss,total_loss,efficiency_pct\n",
    );
    for (i, load) in analysis.sweep.iter().enumerate() {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{}",
            load, c.iron[i], c.copper[i], c.stray[i], c.dielectric[i], c.total[i], c.efficiency[i]
        );
    }
    csv
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    analysis: &'a LossAnalysis,
    summary: Option<LossSummary>,
}

fn render_json(analysis: &LossAnalysis) -> CliResult<String> {
    let report = JsonReport {
        analysis,
        summary: analysis.summary(),
    };
    let mut text = serde_json::to_string_pretty(&report)?;
    text.push('\n');
    Ok(text)
}
