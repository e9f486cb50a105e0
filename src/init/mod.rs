pub mod uniform;

pub use uniform::WeightInit;
