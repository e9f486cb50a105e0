use crate::{loss::MseLoss, network::Network, train::dataset::Dataset};

/// One pass over `dataset` in order, one `train_step` per sample. Returns
/// the mean sample loss.
///
/// # Panics
/// Panics if the dataset's input width does not match the network.
pub fn train_epoch(network: &mut Network, dataset: &Dataset) -> f64 {
    let total_loss: f64 = dataset.iter()
        .map(|(input, target)| network.train_step(input, target))
        .sum();

    total_loss / dataset.len() as f64
}

/// Mean loss over a dataset without updating the network.
pub fn evaluate(network: &Network, dataset: &Dataset) -> f64 {
    let total: f64 = dataset.iter()
        .map(|(input, target)| MseLoss::loss(network.forward(input), target))
        .sum();
    total / dataset.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{init::WeightInit, network::NetworkSpec};

    #[test]
    fn epoch_loss_is_mean_of_step_losses() {
        let spec = NetworkSpec::default();
        let data = Dataset::xor();
        let mut a = Network::new(&spec, &mut WeightInit::seeded(21)).unwrap();
        let mut b = a.clone();

        let mean = train_epoch(&mut a, &data);
        let manual: f64 = data.iter().map(|(x, y)| b.train_step(x, y)).sum::<f64>() / 4.0;

        assert_eq!(mean, manual);
        assert_eq!(a, b);
    }

    #[test]
    fn evaluate_leaves_network_untouched() {
        let net = Network::new(&NetworkSpec::default(), &mut WeightInit::seeded(4)).unwrap();
        let before = net.clone();
        let loss = evaluate(&net, &Dataset::xor());
        assert!(loss > 0.0);
        assert_eq!(net, before);
    }
}
