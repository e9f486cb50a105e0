pub mod dataset;
pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use dataset::Dataset;
pub use loop_fn::train_loop;
pub use train_config::{RunConfig, TrainConfig};
pub use trainer::{evaluate, train_epoch};
