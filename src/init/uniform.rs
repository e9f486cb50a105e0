use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of initial weights.
///
/// Each weight of a neuron with fan-in `n` is drawn independently from
/// `U[-sqrt(1/n), +sqrt(1/n)]`, which keeps initial pre-activations near zero
/// and the sigmoid out of saturation. Biases are not drawn here; units start
/// with a zero bias.
#[derive(Debug, Clone)]
pub struct WeightInit {
    rng: StdRng,
}

impl WeightInit {
    /// Seeds from OS entropy. Use for normal training runs.
    pub fn from_entropy() -> WeightInit {
        WeightInit { rng: StdRng::from_entropy() }
    }

    /// Deterministic generator: the same seed yields the same weights.
    pub fn seeded(seed: u64) -> WeightInit {
        WeightInit { rng: StdRng::seed_from_u64(seed) }
    }

    /// Largest magnitude a weight can take for the given fan-in.
    pub fn bound(fan_in: usize) -> f64 {
        (1.0 / fan_in as f64).sqrt()
    }

    /// Draws `fan_in` weights.
    ///
    /// # Panics
    /// Panics if `fan_in == 0`.
    pub fn weights(&mut self, fan_in: usize) -> Vec<f64> {
        assert!(fan_in > 0, "fan-in must be at least 1");
        let bound = WeightInit::bound(fan_in);
        let dist = Uniform::new_inclusive(-bound, bound);
        (0..fan_in).map(|_| dist.sample(&mut self.rng)).collect()
    }
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::from_entropy()
    }
}
