use ap_aero::{
    pressure_coefficients, split_surfaces, sweep, AeroError, AlphaRange, DragEstimator,
};
use ap_data::{
    find_run, load_chordwise_positions, load_raw_table, load_wake_positions, RawTableLayout,
    TestConditions,
};
use ap_geom::{GeometryModel, REFERENCE_SECTION, REFERENCE_SPLIT_INDEX};
use ap_results::{save_polar, PolarCurves, PolarManifest};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ap-cli")]
#[command(about = "Aeropolar CLI - 2D wind-tunnel pressure reduction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct InputFiles {
    /// Path to the raw pressure-scanner table
    #[arg(long)]
    raw: PathBuf,
    /// Path to the chordwise tap-position file
    #[arg(long)]
    positions: PathBuf,
    /// Path to the wake-rake position file
    #[arg(long)]
    wake_positions: PathBuf,
    /// Path to the test-conditions YAML file
    #[arg(long)]
    conditions: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse every input file and report what was found
    Validate {
        #[command(flatten)]
        inputs: InputFiles,
    },
    /// List the runs in a raw table
    Runs {
        /// Path to the raw pressure-scanner table
        #[arg(long)]
        raw: PathBuf,
    },
    /// Print the surface Cp distribution for one run
    Cp {
        #[command(flatten)]
        inputs: InputFiles,
        /// Run number to reduce
        run_nr: i64,
    },
    /// Run a polar sweep and print or save the result
    Sweep {
        #[command(flatten)]
        inputs: InputFiles,
        /// First angle of attack [deg]
        #[arg(long)]
        alpha_start: f64,
        /// Last angle of attack [deg]
        #[arg(long)]
        alpha_stop: f64,
        /// Angle step [deg]
        #[arg(long, default_value_t = 1.0)]
        alpha_step: f64,
        /// Drag estimator: surface, wake-cpt, or wake-momentum
        #[arg(long, default_value = "surface")]
        drag: String,
        /// Chordwise scale factor applied to the section table
        #[arg(long, default_value_t = 1.6)]
        scale_factor: f64,
        /// Directory to save manifest.json and polar.csv into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Data(#[from] ap_data::DataError),
    #[error(transparent)]
    Geometry(#[from] ap_geom::GeomError),
    #[error(transparent)]
    Aero(#[from] AeroError),
    #[error(transparent)]
    Results(#[from] ap_results::ResultsError),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { inputs } => cmd_validate(&inputs),
        Commands::Runs { raw } => cmd_runs(&raw),
        Commands::Cp { inputs, run_nr } => cmd_cp(&inputs, run_nr),
        Commands::Sweep {
            inputs,
            alpha_start,
            alpha_stop,
            alpha_step,
            drag,
            scale_factor,
            output,
        } => cmd_sweep(
            &inputs,
            AlphaRange {
                start_deg: alpha_start,
                stop_deg: alpha_stop,
                step_deg: alpha_step,
            },
            &drag,
            scale_factor,
            output.as_deref(),
        ),
    }
}

struct LoadedInputs {
    records: Vec<ap_data::RunRecord>,
    chord_positions: Vec<f64>,
    wake_positions: Vec<f64>,
    conditions: TestConditions,
}

fn load_inputs(inputs: &InputFiles) -> CliResult<LoadedInputs> {
    let layout = RawTableLayout::default();
    Ok(LoadedInputs {
        records: load_raw_table(&inputs.raw, &layout)?,
        chord_positions: load_chordwise_positions(&inputs.positions)?,
        wake_positions: load_wake_positions(&inputs.wake_positions)?,
        conditions: TestConditions::load_yaml(&inputs.conditions)?,
    })
}

fn cmd_validate(inputs: &InputFiles) -> CliResult<()> {
    let loaded = load_inputs(inputs)?;
    println!("runs:               {}", loaded.records.len());
    println!("chordwise taps:     {}", loaded.chord_positions.len());
    println!("wake rake probes:   {}", loaded.wake_positions.len());
    println!(
        "conditions:         v_inf = {} m/s, p_inf = {} Pa, chord = {} m",
        loaded.conditions.v_inf_m_s, loaded.conditions.p_inf_pa, loaded.conditions.chord_m
    );
    Ok(())
}

fn cmd_runs(raw: &std::path::Path) -> CliResult<()> {
    let layout = RawTableLayout::default();
    let records = load_raw_table(raw, &layout)?;
    println!("{:>8} {:>10} {:>10}", "run", "alpha[deg]", "rho[kg/m3]");
    for record in &records {
        println!(
            "{:>8} {:>10.3} {:>10.4}",
            record.run_nr, record.alpha_deg, record.rho
        );
    }
    Ok(())
}

fn cmd_cp(inputs: &InputFiles, run_nr: i64) -> CliResult<()> {
    let loaded = load_inputs(inputs)?;
    let record = find_run(&loaded.records, run_nr)?;
    let cp = pressure_coefficients(
        &record.surface_pressures,
        record.reference_pressure,
        record.rho,
        loaded.conditions.v_inf_m_s,
    )?;
    let (upper, lower) = split_surfaces(&cp, &loaded.chord_positions)?;

    println!(
        "run {} (alpha = {:.2} deg): upper surface",
        record.run_nr, record.alpha_deg
    );
    println!("{:>8} {:>10}", "x/c", "Cp");
    for (x, c) in upper.x_over_c.iter().zip(upper.cp.iter()) {
        println!("{:>8.4} {:>10.4}", x, c);
    }
    println!("lower surface");
    println!("{:>8} {:>10}", "x/c", "Cp");
    for (x, c) in lower.x_over_c.iter().zip(lower.cp.iter()) {
        println!("{:>8.4} {:>10.4}", x, c);
    }
    Ok(())
}

fn cmd_sweep(
    inputs: &InputFiles,
    range: AlphaRange,
    drag: &str,
    scale_factor: f64,
    output: Option<&std::path::Path>,
) -> CliResult<()> {
    let loaded = load_inputs(inputs)?;
    let estimator: DragEstimator = drag.parse()?;

    // Built once; the sweep only borrows it
    let model = GeometryModel::build(&REFERENCE_SECTION, REFERENCE_SPLIT_INDEX, scale_factor)?;

    info!(
        start = range.start_deg,
        stop = range.stop_deg,
        step = range.step_deg,
        ?estimator,
        "starting polar sweep"
    );

    let samples = sweep(
        &loaded.records,
        &loaded.chord_positions,
        &loaded.wake_positions,
        &model,
        &loaded.conditions,
        &range,
        estimator,
    )?;

    let curves = PolarCurves::from_samples(&samples);
    info!(samples = curves.len(), "sweep finished");

    match output {
        Some(dir) => {
            let manifest = PolarManifest::new(estimator, range, samples.len());
            save_polar(dir, &manifest, &samples)?;
            println!("saved {} samples to {}", samples.len(), dir.display());
        }
        None => {
            println!(
                "{:>10} {:>10} {:>10} {:>10} {:>10}",
                "alpha[deg]", "cl", "cd", "cm", "xcop[m]"
            );
            for s in &samples {
                println!(
                    "{:>10.3} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
                    s.alpha_deg, s.cl, s.cd, s.cm, s.xcop_m
                );
            }
        }
    }
    Ok(())
}
