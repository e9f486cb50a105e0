/// Half squared error for a single scalar output.
pub struct MseLoss;

impl MseLoss {
    /// `0.5 * (predicted - expected)²`; the ½ cancels in the derivative.
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        0.5 * (predicted - expected).powi(2)
    }

    /// ∂L/∂predicted = predicted - expected
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        predicted - expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_half_squared_error() {
        assert_eq!(MseLoss::loss(0.75, 0.25), 0.125);
        assert_eq!(MseLoss::loss(0.3, 0.3), 0.0);
    }

    #[test]
    fn derivative_is_signed_error() {
        assert_eq!(MseLoss::derivative(0.75, 0.25), 0.5);
        assert_eq!(MseLoss::derivative(0.25, 0.75), -0.5);
    }
}
