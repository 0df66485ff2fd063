//! Command-line driver: compiles one source per core, runs the model checker, and records the
//! run's statistics as a CSV row.

use std::path::{Path, PathBuf};
use std::process::Command;

use clap::Parser;
use corevm::coordinator::Coordinator;
use corevm::loader;
use corevm::simulator::Simulator;
use itertools::Itertools;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "corevm", about = "Explicit-state model checker for the core bytecode")]
struct Cli {
    /// Path to the program source to compile and check, once per core.
    #[arg(short, long)]
    source: PathBuf,

    /// Compiler binary invoked once per core to produce `bin/a.out.<i>`.
    #[arg(short, long)]
    compiler: PathBuf,

    /// Number of cores to run concurrently against each configuration.
    #[arg(short = 'n', long, default_value_t = 1)]
    ncores: usize,

    /// Where to append this run's statistics row.
    #[arg(short, long, default_value = "execstats.csv")]
    outputfile: PathBuf,

    /// Starting configuration, as a hex-literal file (its nibble count sets the declared memory
    /// width). Defaults to an all-zero configuration of `--width` bits.
    #[arg(long)]
    initial: Option<PathBuf>,

    /// Declared bit width of the configuration memory, used only when `--initial` is omitted.
    #[arg(short = 'w', long, default_value_t = 128)]
    width: u32,

    /// Launch a graphical front-end. Not implemented: this build is headless.
    #[arg(short, long)]
    gui: bool,
}

#[derive(serde::Serialize)]
struct StatsRow {
    model_name: String,
    ncores: usize,
    total_exec_cycles: u64,
    known_configurations: usize,
}

fn compile_for_core(compiler: &Path, source: &Path, core_index: usize) -> std::io::Result<PathBuf> {
    let out_path = PathBuf::from(format!("bin/a.out.{core_index}"));
    std::fs::create_dir_all("bin")?;
    let status = Command::new(compiler).arg(source).arg("-o").arg(&out_path).status()?;
    if !status.success() {
        return Err(std::io::Error::other(format!("compiler exited with {status} for core {core_index}")));
    }
    Ok(out_path)
}

fn run(cli: &Cli) -> anyhow::Result<StatsRow> {
    if cli.gui {
        warn!("--gui was requested but this build has no graphical front-end; continuing headless");
    }

    let mut programs = Vec::with_capacity(cli.ncores);
    let mut binary_paths = Vec::with_capacity(cli.ncores);
    for core_index in 0..cli.ncores {
        let out_path = compile_for_core(&cli.compiler, &cli.source, core_index)?;
        programs.push(loader::load_binary(&out_path)?);
        binary_paths.push(out_path.display().to_string());
    }
    info!(binaries = %binary_paths.iter().join(", "), "compiled one binary per core");

    let initial = match &cli.initial {
        Some(path) => loader::load_configuration(path)?,
        None => corevm::memory::Configuration::zeroed(cli.width),
    };

    let simulator = Simulator::new(Coordinator::new(programs));
    let (total_exec_cycles, known) = simulator.launch_checking(initial)?;

    Ok(StatsRow {
        model_name: cli.source.display().to_string(),
        ncores: cli.ncores,
        total_exec_cycles,
        known_configurations: known.len(),
    })
}

fn append_row(path: &Path, row: &StatsRow) -> std::io::Result<()> {
    let write_header = !path.exists();
    let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new().has_headers(write_header).from_writer(file);
    writer.serialize(row)?;
    writer.flush()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(row) => {
            info!(cycles = row.total_exec_cycles, known = row.known_configurations, "checking finished");
            if let Err(e) = append_row(&cli.outputfile, &row) {
                eprintln!("failed to write {}: {e}", cli.outputfile.display());
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("corevm: {e}");
            std::process::exit(1);
        }
    }
}
