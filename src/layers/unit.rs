use crate::activation::sigmoid;
use crate::init::WeightInit;

/// A single sigmoid neuron: one weight per input plus a bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    weights: Vec<f64>,
    bias: f64,
}

impl Unit {
    /// Randomly initialized weights, zero bias.
    pub fn new(fan_in: usize, init: &mut WeightInit) -> Unit {
        Unit {
            weights: init.weights(fan_in),
            bias: 0.0,
        }
    }

    /// Builds a unit from known parameters (model loading, tests).
    ///
    /// # Panics
    /// Panics if `weights` is empty.
    pub fn from_parts(weights: Vec<f64>, bias: f64) -> Unit {
        assert!(!weights.is_empty(), "a unit needs at least one weight");
        Unit { weights, bias }
    }

    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Weighted sum plus bias, before the activation.
    pub fn pre_activation(&self, inputs: &[f64]) -> f64 {
        self.check_len(inputs);
        self.bias
            + inputs.iter().zip(self.weights.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>()
    }

    /// Returns `(activation, pre_activation)` for `inputs`.
    ///
    /// # Panics
    /// Panics if `inputs.len()` differs from the unit's fan-in.
    pub fn forward(&self, inputs: &[f64]) -> (f64, f64) {
        let z = self.pre_activation(inputs);
        (sigmoid(z), z)
    }

    /// Applies one gradient-descent step.
    ///
    /// `error_signal` must already be `∂L/∂z` for this unit; no activation
    /// derivative is applied here.
    ///
    /// # Panics
    /// Panics if `inputs.len()` differs from the unit's fan-in.
    pub fn update_weights(&mut self, inputs: &[f64], error_signal: f64, learning_rate: f64) {
        self.check_len(inputs);
        let step = learning_rate * error_signal;
        for (w, x) in self.weights.iter_mut().zip(inputs.iter()) {
            *w -= step * x;
        }
        self.bias -= step;
    }

    fn check_len(&self, inputs: &[f64]) {
        assert_eq!(
            inputs.len(),
            self.weights.len(),
            "input length {} does not match unit fan-in {}",
            inputs.len(),
            self.weights.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::sigmoid_derivative;

    #[test]
    fn new_unit_has_zero_bias() {
        let unit = Unit::new(3, &mut WeightInit::seeded(3));
        assert_eq!(unit.fan_in(), 3);
        assert_eq!(unit.bias(), 0.0);
    }

    #[test]
    fn forward_computes_weighted_sum() {
        let unit = Unit::from_parts(vec![0.5, -1.0], 0.25);
        let (a, z) = unit.forward(&[2.0, 3.0]);
        assert!((z - (0.25 + 1.0 - 3.0)).abs() < 1e-12);
        assert!((a - sigmoid(z)).abs() < 1e-12);
    }

    #[test]
    fn update_applies_resolved_signal_as_is() {
        let mut unit = Unit::from_parts(vec![1.0, 2.0], 0.5);
        unit.update_weights(&[1.0, -2.0], 0.5, 0.1);
        // step = 0.05
        assert!((unit.weights()[0] - 0.95).abs() < 1e-12);
        assert!((unit.weights()[1] - 2.1).abs() < 1e-12);
        assert!((unit.bias() - 0.45).abs() < 1e-12);
    }

    #[test]
    fn analytic_gradient_matches_finite_difference() {
        let unit = Unit::from_parts(vec![0.3, -0.7, 0.2], 0.1);
        let inputs = [0.9, 0.4, -1.2];
        let target = 1.0;
        let loss = |u: &Unit| {
            let (a, _) = u.forward(&inputs);
            0.5 * (a - target) * (a - target)
        };

        let (a, z) = unit.forward(&inputs);
        let delta = (a - target) * sigmoid_derivative(z);

        let h = 1e-6;
        for i in 0..unit.fan_in() {
            let mut plus = unit.weights().to_vec();
            let mut minus = unit.weights().to_vec();
            plus[i] += h;
            minus[i] -= h;
            let numeric = (loss(&Unit::from_parts(plus, unit.bias()))
                - loss(&Unit::from_parts(minus, unit.bias())))
                / (2.0 * h);
            let analytic = delta * inputs[i];
            assert!((numeric - analytic).abs() < 1e-7, "weight {i}: {numeric} vs {analytic}");
        }

        let numeric_bias = (loss(&Unit::from_parts(unit.weights().to_vec(), unit.bias() + h))
            - loss(&Unit::from_parts(unit.weights().to_vec(), unit.bias() - h)))
            / (2.0 * h);
        assert!((numeric_bias - delta).abs() < 1e-7);

        // A small step along the update direction lowers the loss.
        let mut stepped = unit.clone();
        stepped.update_weights(&inputs, delta, 0.1);
        assert!(loss(&stepped) < loss(&unit));
    }

    #[test]
    #[should_panic(expected = "does not match unit fan-in")]
    fn forward_rejects_short_input() {
        Unit::from_parts(vec![1.0, 1.0], 0.0).forward(&[1.0]);
    }

    #[test]
    #[should_panic(expected = "does not match unit fan-in")]
    fn update_rejects_long_input() {
        Unit::from_parts(vec![1.0], 0.0).update_weights(&[1.0, 2.0], 0.1, 0.1);
    }
}
