pub mod network_classifier;

pub use network_classifier::NetworkClassifier;

pub use crate::error::ClassifierError;
use crate::preprocess::NormalizedTensor;

/// Opaque scoring model: one normalized tensor in, one score per class out.
///
/// Implementations are loaded once and shared read-only across threads.
pub trait Classifier: Send + Sync {
    fn predict(&self, tensor: &NormalizedTensor) -> Result<Vec<f32>, ClassifierError>;

    /// Tensor length the model accepts, when known up front.
    fn input_len(&self) -> Option<usize> {
        None
    }

    /// Number of scores the model emits, when known up front.
    fn output_len(&self) -> Option<usize> {
        None
    }
}

impl<F> Classifier for F
where
    F: Fn(&NormalizedTensor) -> Result<Vec<f32>, ClassifierError> + Send + Sync,
{
    fn predict(&self, tensor: &NormalizedTensor) -> Result<Vec<f32>, ClassifierError> {
        self(tensor)
    }
}
