use std::path::{Path, PathBuf};
use std::sync::{Arc, atomic::AtomicBool};

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};
use crate::network::NetworkSpec;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`: full passes over the dataset
/// - `report_every`: print the mean loss every N epochs (epoch 0 included);
///   `0` disables the report
/// - `target_loss`: stop once an epoch's mean loss falls below this
/// - `stop_flag`: optional atomic flag; when set the loop stops before
///   the next epoch
///
/// Only the plain fields are (de)serialized.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub report_every: usize,
    pub target_loss: Option<f64>,
    #[serde(skip)]
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no stop flag and no early stop.
    pub fn new(epochs: usize, report_every: usize) -> Self {
        TrainConfig {
            epochs,
            report_every,
            target_loss: None,
            stop_flag: None,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(100_000_000, 1000)
    }
}

/// Everything the binary needs for one run.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub network: NetworkSpec,
    pub train: TrainConfig,
    /// Weight-init seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub model_path: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            network: NetworkSpec::default(),
            train: TrainConfig::default(),
            seed: None,
            model_path: PathBuf::from("model_xor.txt"),
        }
    }
}

impl RunConfig {
    /// Reads a JSON config; missing fields take their defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<RunConfig> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| NetError::storage(path, e))?;
        let reader = std::io::BufReader::new(file);
        let config: RunConfig =
            serde_json::from_reader(reader).map_err(|e| NetError::Config(e.to_string()))?;
        config.network.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_xor_run() {
        let config = RunConfig::default();
        assert_eq!(config.network, NetworkSpec::new(2, vec![2, 2, 1], 0.1));
        assert_eq!(config.train.epochs, 100_000_000);
        assert_eq!(config.train.report_every, 1000);
        assert_eq!(config.model_path, PathBuf::from("model_xor.txt"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, r#"{"train":{"epochs":500,"target_loss":0.01},"seed":3}"#).unwrap();
        let config = RunConfig::load_json(&path).unwrap();
        assert_eq!(config.train.epochs, 500);
        assert_eq!(config.train.report_every, 1000);
        assert_eq!(config.train.target_loss, Some(0.01));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.network, NetworkSpec::default());
    }

    #[test]
    fn missing_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RunConfig::load_json(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, NetError::StorageUnavailable { .. }));
    }

    #[test]
    fn bad_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(RunConfig::load_json(&path), Err(NetError::Config(_))));
    }
}
