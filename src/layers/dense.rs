use crate::{activation::sigmoid_derivative, init::WeightInit, layers::unit::Unit};

/// Values produced by one `Layer::forward` call.
///
/// Returned to the caller instead of being cached inside the layer, so a
/// training step threads its own forward state into `backward`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPass {
    /// z = w·x + b, one per unit.
    pub pre_activations: Vec<f64>,
    /// sigmoid(z), one per unit.
    pub activations: Vec<f64>,
}

/// Fully connected sigmoid layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    units: Vec<Unit>,
}

impl Layer {
    pub fn new(size: usize, input_size: usize, init: &mut WeightInit) -> Layer {
        assert!(size > 0, "a layer needs at least one unit");
        let units = (0..size).map(|_| Unit::new(input_size, init)).collect();
        Layer { units }
    }

    /// Builds a layer from existing units.
    ///
    /// # Panics
    /// Panics if `units` is empty or the units disagree on fan-in.
    pub fn from_units(units: Vec<Unit>) -> Layer {
        assert!(!units.is_empty(), "a layer needs at least one unit");
        let fan_in = units[0].fan_in();
        assert!(
            units.iter().all(|u| u.fan_in() == fan_in),
            "all units in a layer must share the same fan-in"
        );
        Layer { units }
    }

    /// Number of units.
    pub fn size(&self) -> usize {
        self.units.len()
    }

    pub fn fan_in(&self) -> usize {
        self.units[0].fan_in()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// One weight row per unit: `weight_rows()[j][i]` is the weight unit `j`
    /// applies to input `i`.
    pub fn weight_rows(&self) -> Vec<&[f64]> {
        self.units.iter().map(|u| u.weights()).collect()
    }

    /// Evaluates every unit on `inputs`.
    pub fn forward(&self, inputs: &[f64]) -> LayerPass {
        let (activations, pre_activations): (Vec<f64>, Vec<f64>) = self.units.iter()
            .map(|unit| unit.forward(inputs))
            .unzip();
        LayerPass { pre_activations, activations }
    }

    /// Resolves this layer's error signals (∂L/∂z) from the layer after it.
    ///
    /// `next_layer_weights[j][i]` is the weight the next layer's unit `j`
    /// applies to this layer's unit `i`, so the error flows back through the
    /// transpose of the next layer's weight matrix:
    ///
    /// `δ_i = (Σ_j next_error_signals[j] · next_layer_weights[j][i]) · σ'(z_i)`
    ///
    /// # Panics
    /// Panics if `pass` was not produced by this layer, or if the next
    /// layer's shape does not line up with this one.
    pub fn backward<W: AsRef<[f64]>>(
        &self,
        pass: &LayerPass,
        next_error_signals: &[f64],
        next_layer_weights: &[W],
    ) -> Vec<f64> {
        assert_eq!(pass.pre_activations.len(), self.size(), "forward pass does not belong to this layer");
        assert_eq!(
            next_error_signals.len(),
            next_layer_weights.len(),
            "one error signal is needed per next-layer unit"
        );
        for row in next_layer_weights {
            assert_eq!(row.as_ref().len(), self.size(), "next layer fan-in does not match this layer's size");
        }

        pass.pre_activations.iter()
            .enumerate()
            .map(|(i, &z)| {
                let weighted: f64 = next_error_signals.iter().zip(next_layer_weights.iter())
                    .map(|(delta, row)| delta * row.as_ref()[i])
                    .sum();
                weighted * sigmoid_derivative(z)
            })
            .collect()
    }

    /// Applies one update to every unit. `inputs` is the vector this layer
    /// was fed during the forward pass being trained on.
    ///
    /// # Panics
    /// Panics on a length mismatch in `error_signals` or `inputs`.
    pub fn update(&mut self, inputs: &[f64], error_signals: &[f64], learning_rate: f64) {
        assert_eq!(
            error_signals.len(),
            self.size(),
            "error signal count {} does not match layer size {}",
            error_signals.len(),
            self.size()
        );
        for (unit, &delta) in self.units.iter_mut().zip(error_signals.iter()) {
            unit.update_weights(inputs, delta, learning_rate);
        }
    }
}
