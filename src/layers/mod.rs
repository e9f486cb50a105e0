pub mod dense;
pub mod unit;

pub use dense::{Layer, LayerPass};
pub use unit::Unit;
