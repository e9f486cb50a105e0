use std::io::Write;
use std::path::Path;

use tracing::{error, info};

use crate::{
    activation::sigmoid_derivative,
    error::{NetError, Result},
    init::WeightInit,
    layers::{Layer, LayerPass},
    loss::MseLoss,
    network::{model_file, spec::NetworkSpec},
    optim::Sgd,
};

/// Feed-forward sigmoid network with a single output unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
    input_size: usize,
    optimizer: Sgd,
}

impl Network {
    /// Builds a network with freshly initialized weights.
    ///
    /// Returns `NetError::Config` if the spec is not a valid single-output
    /// topology.
    pub fn new(spec: &NetworkSpec, init: &mut WeightInit) -> Result<Network> {
        spec.validate()?;
        let layers = spec.layer_sizes.iter()
            .zip(spec.fan_ins())
            .map(|(&size, fan_in)| Layer::new(size, fan_in, init))
            .collect();
        Ok(Network {
            layers,
            input_size: spec.input_size,
            optimizer: Sgd::new(spec.learning_rate),
        })
    }

    /// Assembles a network from prebuilt layers (hand-picked weights in
    /// tests, or layers read from a model file).
    pub fn from_layers(layers: Vec<Layer>, learning_rate: f64) -> Result<Network> {
        let first = layers.first()
            .ok_or_else(|| NetError::Config("at least one layer is required".into()))?;
        let spec = NetworkSpec::new(
            first.fan_in(),
            layers.iter().map(Layer::size).collect(),
            learning_rate,
        );
        spec.validate()?;
        if spec.fan_ins().iter().zip(layers.iter()).any(|(&f, l)| f != l.fan_in()) {
            return Err(NetError::Config("layer fan-ins do not chain".into()));
        }
        Ok(Network { layers, input_size: spec.input_size, optimizer: Sgd::new(learning_rate) })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Architecture of this network, e.g. for saving next to the weights.
    pub fn spec(&self) -> NetworkSpec {
        NetworkSpec::new(
            self.input_size,
            self.layers.iter().map(Layer::size).collect(),
            self.optimizer.learning_rate,
        )
    }

    /// Runs every layer and returns the pass of each one, input side first.
    ///
    /// # Panics
    /// Panics if `inputs.len() != self.input_size()`.
    pub fn forward_passes(&self, inputs: &[f64]) -> Vec<LayerPass> {
        let mut passes: Vec<LayerPass> = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            let pass = match passes.last() {
                Some(prev) => layer.forward(&prev.activations),
                None => layer.forward(inputs),
            };
            passes.push(pass);
        }
        passes
    }

    /// Prediction for `inputs`.
    ///
    /// # Panics
    /// Panics if `inputs.len() != self.input_size()`.
    pub fn forward(&self, inputs: &[f64]) -> f64 {
        let passes = self.forward_passes(inputs);
        passes[passes.len() - 1].activations[0]
    }

    /// One supervised SGD step on a single sample; returns its loss
    /// `0.5 * (prediction - target)²`.
    ///
    /// Walks from the output layer backwards. Each layer is updated first,
    /// then the error signals of the layer below it are resolved against the
    /// freshly updated weights.
    ///
    /// # Panics
    /// Panics if `inputs.len() != self.input_size()`.
    pub fn train_step(&mut self, inputs: &[f64], target: f64) -> f64 {
        let passes = self.forward_passes(inputs);
        let last = self.layers.len() - 1;
        let prediction = passes[last].activations[0];
        let loss = MseLoss::loss(prediction, target);

        let mut deltas = vec![
            MseLoss::derivative(prediction, target) * sigmoid_derivative(passes[last].pre_activations[0]),
        ];

        for i in (0..self.layers.len()).rev() {
            let layer_inputs = if i > 0 { passes[i - 1].activations.as_slice() } else { inputs };
            self.optimizer.step(&mut self.layers[i], layer_inputs, &deltas);

            if i > 0 {
                deltas = self.layers[i - 1].backward(&passes[i - 1], &deltas, &self.layers[i].weight_rows());
            }
        }

        loss
    }

    /// Writes the model file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let result = std::fs::File::create(path)
            .and_then(|file| {
                let mut writer = std::io::BufWriter::new(file);
                model_file::write_layers(&mut writer, &self.layers)?;
                writer.flush()
            })
            .map_err(|e| NetError::storage(path, e));

        match &result {
            Ok(()) => info!(path = %path.display(), "model saved"),
            Err(e) => error!("failed to save model: {e}"),
        }
        result
    }

    /// Replaces every layer with the contents of a model file.
    ///
    /// The whole file is parsed before anything is replaced, so on error the
    /// network keeps its current parameters. The file must describe a
    /// network with this network's input size and layer count; layer widths
    /// are taken from the file.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let result = std::fs::read_to_string(path)
            .map_err(|e| NetError::storage(path, e))
            .and_then(|text| model_file::read_layers(&text, self.input_size, self.layers.len()));

        match result {
            Ok(layers) => {
                self.layers = layers;
                info!(path = %path.display(), "model loaded");
                Ok(())
            }
            Err(e) => {
                error!("failed to load model: {e}");
                Err(e)
            }
        }
    }
}
