use crate::layers::Layer;

/// Plain stochastic gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD update to a layer given its resolved error signals and
    /// the inputs it saw on the forward pass.
    pub fn step(&self, layer: &mut Layer, inputs: &[f64], error_signals: &[f64]) {
        layer.update(inputs, error_signals, self.learning_rate);
    }
}
