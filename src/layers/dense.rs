use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Fully connected layer: `a = f(x · W + b)`.
///
/// `weights` is `input_size × size`, `biases` is `1 × size`. Only the fields
/// needed for inference are serialized; extra fields in older model files
/// (cached activations) are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub size: usize,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Layer {
    /// Randomly initialized layer; He init for the ReLU family, Xavier otherwise.
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Layer {
        let weights = if activation.prefers_he_init() {
            Matrix::he(input_size, size)
        } else {
            Matrix::xavier(input_size, size)
        };
        Layer {
            size,
            weights,
            biases: Matrix::zeros(1, size),
            activator: activation,
        }
    }

    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    /// Checks that weights and biases agree with `size`.
    pub fn is_well_formed(&self) -> bool {
        self.weights.is_consistent()
            && self.biases.is_consistent()
            && self.weights.cols == self.size
            && self.biases.rows == 1
            && self.biases.cols == self.size
    }

    /// Forward pass for one input vector. `None` on a length mismatch.
    pub fn feed_from(&self, input: &[f64]) -> Option<Vec<f64>> {
        let mut z = self.weights.left_mul(input)?;
        for (v, b) in z.iter_mut().zip(self.biases.data.first()?.iter()) {
            *v += b;
        }
        self.activator.apply(&mut z);
        Some(z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_layer(activator: ActivationFunction) -> Layer {
        Layer {
            size: 2,
            weights: Matrix::from_data(vec![vec![1.0, -1.0], vec![0.5, 2.0]]),
            biases: Matrix::from_data(vec![vec![0.0, -3.0]]),
            activator,
        }
    }

    #[test]
    fn identity_forward() {
        let out = fixed_layer(ActivationFunction::Identity).feed_from(&[2.0, 4.0]).unwrap();
        assert_eq!(out, vec![4.0, 3.0]);
    }

    #[test]
    fn relu_forward() {
        let out = fixed_layer(ActivationFunction::ReLU).feed_from(&[1.0, 0.0]).unwrap();
        assert_eq!(out, vec![1.0, 0.0]);
    }

    #[test]
    fn wrong_input_len() {
        assert!(fixed_layer(ActivationFunction::Identity).feed_from(&[1.0]).is_none());
    }

    #[test]
    fn new_layer_shapes() {
        let l = Layer::new(4, 9, ActivationFunction::ReLU);
        assert_eq!(l.input_size(), 9);
        assert!(l.is_well_formed());
    }
}
