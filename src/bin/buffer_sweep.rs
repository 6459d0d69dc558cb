//! Bench harness for the logic buffer model
//!
//! Runs the acceptance checks against a configured device, then sweeps the
//! input from 0 V upward to find the switching voltage.

use clap::Parser;
use logic_buffer::config::ConfigError;
use logic_buffer::{
    run_acceptance_checks, AcceptanceCheck, BufferConfig, BufferError, BufferResult, ConfigLoader,
    SweepConfig, ThresholdDevice, VoltageSweep,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "buffer-sweep", version, about = "Find the switching voltage of a simulated logic buffer")]
struct Args {
    /// Configuration file; replaces the standard search paths
    #[arg(long)]
    config: Option<PathBuf>,

    /// Switching threshold in volts
    #[arg(long)]
    threshold: Option<f64>,

    /// Noise generator seed
    #[arg(long)]
    seed: Option<u64>,

    /// Sweep limit in volts (exclusive); prompted for when omitted
    #[arg(long)]
    max_voltage: Option<f64>,

    /// Standard deviation of input noise during the sweep
    #[arg(long)]
    noise_sigma: Option<f64>,

    /// Print the sweep outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logic_buffer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> BufferResult<()> {
    let config = apply_device_overrides(load_config(&args)?, &args);
    tracing::info!(summary = ?config.summary(), "configuration loaded");

    let mut device = ThresholdDevice::from_config(&config.device);

    for report in run_acceptance_checks(&mut device, &AcceptanceCheck::defaults()) {
        println!("{}", report);
    }

    let max_voltage = match args.max_voltage {
        Some(volts) => volts,
        None => prompt_max_voltage()?,
    };
    let sweep_config = sweep_config_for(&config.sweep, max_voltage, args.noise_sigma)?;

    let outcome = VoltageSweep::new(sweep_config)?.run(&mut device);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match outcome.crossing_v {
            Some(volts) => println!("Threshold Voltage is = {} Volts", volts),
            None => println!("No threshold crossing below {} Volts", max_voltage),
        }
    }

    Ok(())
}

/// Device flags take precedence over configured values
fn apply_device_overrides(mut config: BufferConfig, args: &Args) -> BufferConfig {
    if let Some(threshold) = args.threshold {
        config.device.threshold_v = threshold;
    }
    if let Some(seed) = args.seed {
        config.device.seed = seed;
    }
    config
}

/// The sweep limit always comes from the operator; start and step stay as configured
fn sweep_config_for(
    configured: &SweepConfig,
    max_voltage: f64,
    noise_sigma: Option<f64>,
) -> BufferResult<SweepConfig> {
    Ok(SweepConfig {
        stop_mv: SweepConfig::up_to_volts(max_voltage)?.stop_mv,
        noise_sigma: noise_sigma.unwrap_or(configured.noise_sigma),
        ..configured.clone()
    })
}

fn load_config(args: &Args) -> BufferResult<BufferConfig> {
    let mut loader = match &args.config {
        Some(path) if !path.exists() => {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }
        Some(path) => ConfigLoader::with_paths(vec![path.clone()]),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

fn prompt_max_voltage() -> BufferResult<f64> {
    print!("Enter the Maximum Voltage of the Buffer in Volts: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();

    trimmed
        .parse::<f64>()
        .map_err(|e| BufferError::invalid_input("maximum voltage", trimmed, e.to_string()))
}
