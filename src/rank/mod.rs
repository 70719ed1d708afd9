pub mod top_k;

pub use top_k::{top_k, Prediction, DEFAULT_TOP_K};
