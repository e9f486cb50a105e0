pub mod activation;
pub mod error;
pub mod init;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative};
pub use error::{NetError, Result};
pub use init::WeightInit;
pub use layers::{Layer, LayerPass, Unit};
pub use loss::MseLoss;
pub use network::{Network, NetworkSpec};
pub use optim::Sgd;
pub use train::{train_loop, Dataset, RunConfig, TrainConfig};
