// Evaluates a freshly initialized network on a dataset and prints the
// per-row outputs plus the mean MSE.
//
//   cargo run                      # [2, 3, 1] soft-step network on XOR
//   cargo run -- config.json       # EvalConfig loaded from JSON
//   XORNET_SEED=42 cargo run       # reproducible initialization
//   RUST_LOG=xornet=debug cargo run
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use xornet::activation::tabulate;
use xornet::eval::{self, EvalConfig};
use xornet::Result;

fn load_config() -> Result<EvalConfig> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => EvalConfig::load_json(&path)?,
        None => EvalConfig::xor(),
    };
    if let Ok(seed) = std::env::var("XORNET_SEED") {
        let seed = seed
            .parse::<u64>()
            .map_err(|e| xornet::NetError::Config(format!("XORNET_SEED: {e}")))?;
        config.network.seed = Some(seed);
    }
    Ok(config)
}

fn run() -> Result<()> {
    let config = load_config()?;
    let activation = config.network.activation;

    println!("{activation} over -6..=6:");
    for (x, y) in tabulate(&activation, -6, 6) {
        println!("{x:>3} -> {y:.6}");
    }

    let report = eval::run(&config)?;
    println!("\nnetwork {:?} ({activation}):", config.network.topology);
    for sample in &report.samples {
        println!(
            "Input: {:?} -> Output: {:.4?} (target {:?}, mse {:.6})",
            sample.input, sample.output, sample.target, sample.loss
        );
    }
    println!("mean MSE: {}", report.mean_loss);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("xornet: {e}");
            ExitCode::FAILURE
        }
    }
}
