use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};

/// Architecture and learning rate of a network.
///
/// Fields:
/// - `input_size`: length of the external input vector
/// - `layer_sizes`: unit count of each layer, input side first; the last
///   entry is the output layer and must be 1
/// - `learning_rate`: SGD step size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub layer_sizes: Vec<usize>,
    pub learning_rate: f64,
}

impl NetworkSpec {
    pub fn new(input_size: usize, layer_sizes: Vec<usize>, learning_rate: f64) -> NetworkSpec {
        NetworkSpec { input_size, layer_sizes, learning_rate }
    }

    /// Fan-in of each layer, in order.
    pub fn fan_ins(&self) -> Vec<usize> {
        std::iter::once(self.input_size)
            .chain(self.layer_sizes.iter().copied())
            .take(self.layer_sizes.len())
            .collect()
    }

    /// Checks that the spec describes a buildable single-output network.
    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 {
            return Err(NetError::Config("input_size must be at least 1".into()));
        }
        if self.layer_sizes.is_empty() {
            return Err(NetError::Config("at least one layer is required".into()));
        }
        if let Some(i) = self.layer_sizes.iter().position(|&n| n == 0) {
            return Err(NetError::Config(format!("layer {i} has no units")));
        }
        if self.layer_sizes.last() != Some(&1) {
            return Err(NetError::Config("the output layer must have exactly one unit".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::Config(format!(
                "learning_rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| NetError::storage(path, e))?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| NetError::Config(e.to_string()))
    }

    /// Deserializes and validates a spec from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkSpec> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| NetError::storage(path, e))?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec =
            serde_json::from_reader(reader).map_err(|e| NetError::Config(e.to_string()))?;
        spec.validate()?;
        Ok(spec)
    }
}

impl Default for NetworkSpec {
    /// Two inputs, two hidden layers of two units, one output, lr 0.1.
    fn default() -> Self {
        NetworkSpec::new(2, vec![2, 2, 1], 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let spec = NetworkSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.fan_ins(), vec![2, 2, 2]);
    }

    #[test]
    fn fan_ins_chain_through_layers() {
        let spec = NetworkSpec::new(3, vec![5, 4, 1], 0.1);
        assert_eq!(spec.fan_ins(), vec![3, 5, 4]);
    }

    #[test]
    fn rejects_bad_topologies() {
        assert!(NetworkSpec::new(0, vec![2, 1], 0.1).validate().is_err());
        assert!(NetworkSpec::new(2, vec![], 0.1).validate().is_err());
        assert!(NetworkSpec::new(2, vec![2, 0, 1], 0.1).validate().is_err());
        assert!(NetworkSpec::new(2, vec![2, 2], 0.1).validate().is_err());
        assert!(NetworkSpec::new(2, vec![2, 1], 0.0).validate().is_err());
        assert!(NetworkSpec::new(2, vec![2, 1], f64::NAN).validate().is_err());
    }

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        let spec = NetworkSpec::new(2, vec![4, 4, 1], 0.05);
        spec.save_json(&path).unwrap();
        assert_eq!(NetworkSpec::load_json(&path).unwrap(), spec);
    }

    #[test]
    fn load_json_rejects_invalid_spec() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        std::fs::write(&path, r#"{"input_size":2,"layer_sizes":[2,3],"learning_rate":0.1}"#).unwrap();
        assert!(matches!(NetworkSpec::load_json(&path), Err(NetError::Config(_))));
    }
}
