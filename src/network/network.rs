use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, layers::dense::Layer};
use crate::error::StartupError;
use crate::network::metadata::ModelMetadata;

/// Feed-forward stack of dense layers; the packaged model format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    pub fn new(layer_specs: Vec<(usize, usize, ActivationFunction)>) -> Network {
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation))
            .collect();
        Network { layers, metadata: None }
    }

    pub fn with_metadata(mut self, metadata: ModelMetadata) -> Network {
        self.metadata = Some(metadata);
        self
    }

    /// Width of the first layer's input, if there is one.
    pub fn input_len(&self) -> Option<usize> {
        self.layers.first().map(Layer::input_size)
    }

    pub fn output_len(&self) -> Option<usize> {
        self.layers.last().map(|l| l.size)
    }

    /// Inference pass. Returns `None` if `input` does not fit the first layer.
    ///
    /// Takes `&self`: nothing is cached between calls, so one loaded network
    /// can serve concurrent callers.
    pub fn forward(&self, input: &[f64]) -> Option<Vec<f64>> {
        let mut layers = self.layers.iter();
        let mut current = layers.next()?.feed_from(input)?;
        for layer in layers {
            current = layer.feed_from(&current)?;
        }
        Some(current)
    }

    /// Checks layer shapes chain together (`input_size` of layer `i+1` equals
    /// `size` of layer `i`).
    pub fn is_well_formed(&self) -> bool {
        self.layers.iter().all(Layer::is_well_formed)
            && self.layers.windows(2).all(|w| w[1].input_size() == w[0].size)
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Network, StartupError> {
        let file = std::fs::File::open(path).map_err(|source| StartupError::Io {
            what: "model file",
            path: path.to_owned(),
            source,
        })?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|source| StartupError::Model { path: path.to_owned(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;
    use crate::network::metadata::InputType;

    fn tiny() -> Network {
        Network {
            layers: vec![
                Layer {
                    size: 2,
                    weights: Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]),
                    biases: Matrix::zeros(1, 2),
                    activator: ActivationFunction::ReLU,
                },
                Layer {
                    size: 2,
                    weights: Matrix::from_data(vec![vec![2.0, 0.0], vec![0.0, 3.0]]),
                    biases: Matrix::from_data(vec![vec![1.0, 1.0]]),
                    activator: ActivationFunction::Identity,
                },
            ],
            metadata: None,
        }
    }

    #[test]
    fn forward_chains_layers() {
        let n = tiny();
        assert!(n.is_well_formed());
        assert_eq!(n.forward(&[1.0, 2.0, 0.0]), Some(vec![3.0, 7.0]));
        assert_eq!(n.forward(&[1.0]), None);
        assert_eq!((n.input_len(), n.output_len()), (Some(3), Some(2)));
    }

    #[test]
    fn empty_network_has_no_output() {
        let n = Network { layers: vec![], metadata: None };
        assert_eq!(n.forward(&[1.0]), None);
        assert_eq!(n.input_len(), None);
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let path = path.to_str().unwrap();

        let n = tiny().with_metadata(ModelMetadata {
            description: Some("toy".into()),
            input_type: Some(InputType::ImageRgb { width: 1, height: 1 }),
        });
        n.save_json(path).unwrap();
        let loaded = Network::load_json(path).unwrap();
        assert_eq!(loaded, n);
        assert_eq!(loaded.metadata.unwrap().image_size(), Some((1, 1)));
    }

    #[test]
    fn ignores_cached_activation_fields() {
        let json = r#"{"layers":[{"size":1,"neurons":{"rows":1,"cols":1,"data":[[0.3]]},
            "weights":{"rows":1,"cols":1,"data":[[2.0]]},
            "biases":{"rows":1,"cols":1,"data":[[0.5]]},"activator":"Identity"}]}"#;
        let n: Network = serde_json::from_str(json).unwrap();
        assert_eq!(n.forward(&[1.0]), Some(vec![2.5]));
        assert!(n.metadata.is_none());
    }

    #[test]
    fn bad_json_is_a_model_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Network::load_json(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, StartupError::Model { .. }));
    }
}
