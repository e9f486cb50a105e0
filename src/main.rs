// XOR training run.
//
// Trains the default 2-2-2-1 network on the XOR table, prints the mean loss
// every `report_every` epochs, prints the final predictions and writes the
// model file. Set SIGMOID_MLP_CONFIG to a JSON `RunConfig` to override the
// defaults and RUST_LOG to change log verbosity.
use std::process::ExitCode;

use sigmoid_mlp::{train_loop, Dataset, Network, RunConfig, WeightInit};
use tracing::error;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "SIGMOID_MLP_CONFIG";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> sigmoid_mlp::Result<()> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => RunConfig::load_json(path)?,
        None => RunConfig::default(),
    };

    let mut init = match config.seed {
        Some(seed) => WeightInit::seeded(seed),
        None => WeightInit::from_entropy(),
    };
    let mut network = Network::new(&config.network, &mut init)?;
    let dataset = Dataset::xor();

    println!("XOR training ({} epochs):", config.train.epochs);
    train_loop(&mut network, &dataset, &config.train);

    println!("\nFinal predictions:");
    for (input, target) in dataset.iter() {
        let prediction = network.forward(input);
        println!("Input: {input:?}, Predicted: {prediction:.6} (target: {target})");
    }

    network.save(&config.model_path)
}
