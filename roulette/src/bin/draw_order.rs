//! Draw every number (or the first few) from a pool and print the order.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use roulette::{
    Flow, Frame, Picker, PickerConfig, PickerError, RandomProvider, SeededRandomProvider,
    ThreadRandomProvider, TokioTimeProvider, play,
};

/// Draw numbers 1..=N without replacement, spinning a wheel for each.
#[derive(Parser, Debug)]
#[command(name = "draw-order")]
#[command(about = "Draw numbers without replacement", long_about = None)]
struct Cli {
    /// How many numbers are in the pool.
    capacity: u32,

    /// Seed for a reproducible order.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many draws.
    #[arg(short, long)]
    count: Option<u32>,

    /// Play each spin in real time.
    #[arg(short, long)]
    animate: bool,

    /// Print the final pool snapshot as JSON.
    #[arg(long)]
    json: bool,

    /// Load picker options from a JSON file.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Log verbosely.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.seed {
        Some(seed) => run(&cli, config, SeededRandomProvider::new(seed)),
        None => run(&cli, config, ThreadRandomProvider::new()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<PickerConfig, Box<dyn std::error::Error>> {
    let base = match &cli.config {
        Some(path) => PickerConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None if cli.animate => PickerConfig::default(),
        None => PickerConfig::instant(cli.capacity),
    };
    Ok(base.with_capacity(cli.capacity))
}

fn run<R: RandomProvider>(cli: &Cli, config: PickerConfig, random: R) -> Result<(), PickerError> {
    let mut picker = Picker::new(config, random)?;
    let draws = cli.count.unwrap_or(cli.capacity).min(cli.capacity);

    let runtime = if cli.animate {
        match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => Some(runtime),
            Err(err) => {
                tracing::warn!(%err, "failed to start runtime, skipping animation");
                None
            }
        }
    } else {
        None
    };
    let time = TokioTimeProvider::new();

    for _ in 0..draws {
        let spin = picker.spin()?;

        if let Some(runtime) = &runtime {
            let mut sink = |frame: &Frame| {
                eprint!("\r  spinning... {:>6}", frame.highlighted);
                let _ = std::io::stderr().flush();
                Flow::Continue
            };
            if let Err(err) = runtime.block_on(play(&spin, &time, &mut sink)) {
                tracing::warn!(%err, "playback interrupted");
            }
            eprint!("\r");
        }

        println!("{}: #{}", ordinal(spin.rank), spin.drawn);
    }

    if cli.json {
        let snapshot = picker.pool().snapshot();
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::warn!(%err, "failed to serialize snapshot"),
        }
    }

    Ok(())
}

fn ordinal(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}
