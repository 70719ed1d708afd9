use std::sync::Arc;

use ferrite_vision::ClassificationContext;

/// Model, labels and pipeline config, loaded once in `main` and shared
/// read-only with every request thread. No lock: nothing in it mutates.
pub type SharedContext = Arc<ClassificationContext>;
