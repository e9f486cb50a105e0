use std::sync::atomic::Ordering;

use tracing::debug;

use crate::network::Network;
use crate::train::dataset::Dataset;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

/// Trains `network` for up to `config.epochs` epochs and returns the mean
/// loss of the **last completed epoch** (`NaN` if no epoch ran).
///
/// Every `config.report_every` epochs a line `Epoch {n}, mean loss: {loss}`
/// is printed to stdout.
///
/// # Early termination
/// The loop breaks early if:
/// - `config.stop_flag` is set, **or**
/// - an epoch's mean loss drops below `config.target_loss`.
///
/// # Panics
/// Panics if the dataset's input width does not match the network.
pub fn train_loop(network: &mut Network, dataset: &Dataset, config: &TrainConfig) -> f64 {
    assert_eq!(
        dataset.input_size(),
        network.input_size(),
        "dataset input width does not match network input size"
    );

    let mut last_loss = f64::NAN;

    for epoch in 0..config.epochs {
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                debug!(epoch, "stop flag set");
                break;
            }
        }

        let mean_loss = train_epoch(network, dataset);
        last_loss = mean_loss;

        if config.report_every > 0 && epoch % config.report_every == 0 {
            println!("Epoch {epoch}, mean loss: {mean_loss}");
            debug!(epoch, mean_loss, "progress");
        }

        if config.target_loss.is_some_and(|target| mean_loss < target) {
            debug!(epoch, mean_loss, "target loss reached");
            break;
        }
    }

    last_loss
}
