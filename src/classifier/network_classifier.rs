use crate::classifier::Classifier;
use crate::error::{ClassifierError, StartupError};
use crate::network::{ModelMetadata, Network};
use crate::preprocess::NormalizedTensor;

/// `Classifier` backed by a dense `Network` loaded from JSON.
#[derive(Debug, Clone)]
pub struct NetworkClassifier {
    network: Network,
}

impl NetworkClassifier {
    /// Wraps a network after checking that it has layers and that their
    /// shapes chain together.
    pub fn new(network: Network) -> Result<Self, StartupError> {
        Self::checked(network, "<memory>")
    }

    pub fn load(path: &str) -> Result<Self, StartupError> {
        Self::checked(Network::load_json(path)?, path)
    }

    fn checked(network: Network, origin: &str) -> Result<Self, StartupError> {
        if network.layers.is_empty() {
            return Err(StartupError::EmptyModel);
        }
        if !network.is_well_formed() {
            return Err(StartupError::MalformedModel { path: origin.to_owned() });
        }
        Ok(NetworkClassifier { network })
    }

    pub fn metadata(&self) -> Option<&ModelMetadata> {
        self.network.metadata.as_ref()
    }

    pub fn network(&self) -> &Network {
        &self.network
    }
}

impl Classifier for NetworkClassifier {
    fn predict(&self, tensor: &NormalizedTensor) -> Result<Vec<f32>, ClassifierError> {
        let expected = self.network.input_len().unwrap_or(0);
        if tensor.len() != expected {
            return Err(ClassifierError::new(format!(
                "model expects {} inputs, got a tensor of {}",
                expected,
                tensor.len()
            )));
        }
        let input: Vec<f64> = tensor.as_slice().iter().map(|&v| v as f64).collect();
        let output = self
            .network
            .forward(&input)
            .ok_or_else(|| ClassifierError::new("forward pass failed"))?;
        Ok(output.into_iter().map(|v| v as f32).collect())
    }

    fn input_len(&self) -> Option<usize> {
        self.network.input_len()
    }

    fn output_len(&self) -> Option<usize> {
        self.network.output_len()
    }
}
