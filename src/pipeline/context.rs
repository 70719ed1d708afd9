use std::sync::Arc;

use image::DynamicImage;

use crate::classifier::{Classifier, NetworkClassifier};
use crate::config::{AppConfig, PipelineConfig};
use crate::error::{ClassifyError, StartupError};
use crate::labels::LabelVocabulary;
use crate::preprocess::{image_bytes_to_tensor, image_to_tensor, NormalizedTensor};
use crate::rank::{top_k, Prediction};

/// The immutable state a classification needs: input contract, label
/// vocabulary and model. Built once at startup; `classify_*` calls only read
/// it, so an `Arc<ClassificationContext>` can be shared across threads.
pub struct ClassificationContext {
    config: PipelineConfig,
    labels: Arc<LabelVocabulary>,
    classifier: Box<dyn Classifier>,
}

impl ClassificationContext {
    /// Validates the config and, where the classifier reports them, checks its
    /// input and output sizes against the config and the vocabulary.
    pub fn new(
        config: PipelineConfig,
        labels: Arc<LabelVocabulary>,
        classifier: Box<dyn Classifier>,
    ) -> Result<Self, StartupError> {
        config.validate()?;
        if let Some(model) = classifier.input_len() {
            if model != config.tensor_len() {
                return Err(StartupError::InputMismatch { model, pipeline: config.tensor_len() });
            }
        }
        if let Some(model) = classifier.output_len() {
            if model != labels.len() {
                return Err(StartupError::OutputMismatch { model, labels: labels.len() });
            }
        }
        Ok(ClassificationContext { config, labels, classifier })
    }

    /// Loads pipeline config, labels and the JSON network named by `app`.
    ///
    /// If the model declares an image input size and no pipeline file was
    /// given, the declared size replaces the default 224×224.
    pub fn load(app: &AppConfig) -> Result<Self, StartupError> {
        let mut config = app.pipeline()?;
        let labels = Arc::new(LabelVocabulary::load(&app.labels_path)?);
        let classifier = NetworkClassifier::load(&app.model_path)?;

        if app.pipeline_path.is_none() {
            if let Some((width, height)) = classifier.metadata().and_then(|m| m.image_size()) {
                config.width = width;
                config.height = height;
            }
        }

        Self::new(config, labels, Box::new(classifier))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn labels(&self) -> &Arc<LabelVocabulary> {
        &self.labels
    }

    /// Scores an already-normalized tensor and ranks the configured top-K.
    pub fn classify_tensor(&self, tensor: &NormalizedTensor) -> Result<Vec<Prediction>, ClassifyError> {
        let scores = self.classifier.predict(tensor)?;
        top_k(&scores, self.labels.as_slice(), self.config.top_k)
    }

    /// Resize, normalize, predict, rank.
    pub fn classify_image(&self, image: &DynamicImage) -> Result<Vec<Prediction>, ClassifyError> {
        let tensor = image_to_tensor(image, &self.config)?;
        self.classify_tensor(&tensor)
    }

    /// Same as `classify_image`, starting from encoded PNG/JPEG/BMP/GIF bytes.
    pub fn classify_bytes(&self, bytes: &[u8]) -> Result<Vec<Prediction>, ClassifyError> {
        let tensor = image_bytes_to_tensor(bytes, &self.config)?;
        self.classify_tensor(&tensor)
    }
}

impl std::fmt::Debug for ClassificationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationContext")
            .field("config", &self.config)
            .field("labels", &self.labels.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClassifierError, DecodeError};
    use image::{Rgb, RgbImage};

    fn labels(names: &[&str]) -> Arc<LabelVocabulary> {
        Arc::new(names.iter().copied().collect())
    }

    fn config() -> PipelineConfig {
        PipelineConfig { width: 8, height: 8, top_k: 2, ..PipelineConfig::default() }
    }

    /// Scores each class by the mean of one plane, so a red image favours
    /// class 0, green class 1, blue class 2.
    fn plane_means(t: &NormalizedTensor) -> Result<Vec<f32>, ClassifierError> {
        Ok((0..3).map(|c| t.plane(c).iter().sum::<f32>() / t.plane_len() as f32).collect())
    }

    fn solid(rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 12, Rgb(rgb)))
    }

    #[test]
    fn end_to_end_ranks_by_colour() {
        let ctx = ClassificationContext::new(config(), labels(&["red", "green", "blue"]), Box::new(plane_means))
            .unwrap();
        let r = ctx.classify_image(&solid([250, 10, 130])).unwrap();
        let names: Vec<_> = r.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(names, ["red", "blue"]);
    }

    #[test]
    fn classifier_failure_propagates() {
        let failing = |_: &NormalizedTensor| -> Result<Vec<f32>, ClassifierError> {
            Err(ClassifierError::new("no output"))
        };
        let ctx = ClassificationContext::new(config(), labels(&["a"]), Box::new(failing)).unwrap();
        let err = ctx.classify_image(&solid([0, 0, 0])).unwrap_err();
        assert!(matches!(err, ClassifyError::Classifier(_)));
    }

    #[test]
    fn misaligned_scores_are_an_alignment_error() {
        let ctx = ClassificationContext::new(config(), labels(&["a", "b"]), Box::new(plane_means)).unwrap();
        let err = ctx.classify_image(&solid([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ClassifyError::Alignment { scores: 3, labels: 2 }));
    }

    #[test]
    fn undecodable_bytes_are_a_decode_error() {
        let ctx = ClassificationContext::new(config(), labels(&["r", "g", "b"]), Box::new(plane_means)).unwrap();
        let err = ctx.classify_bytes(&[0xff, 0xd8, 0x00]).unwrap_err();
        assert!(matches!(err, ClassifyError::Decode(DecodeError::Image(_))));
    }

    #[test]
    fn invalid_config_fails_at_startup() {
        let bad = PipelineConfig { width: 0, ..config() };
        let err = ClassificationContext::new(bad, labels(&["x"]), Box::new(plane_means)).unwrap_err();
        assert!(matches!(err, StartupError::Config(_)));
    }

    #[test]
    fn repeat_runs_are_identical() {
        let ctx = ClassificationContext::new(config(), labels(&["red", "green", "blue"]), Box::new(plane_means))
            .unwrap();
        let img = solid([90, 91, 92]);
        assert_eq!(ctx.classify_image(&img).unwrap(), ctx.classify_image(&img).unwrap());
    }
}
