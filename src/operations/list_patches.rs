use crate::model::Model;
use crate::operations::classify::{ClassifyParams, SurfaceClassifier};

/// Lists the patches the model's geometry would produce, without changing the model.
#[derive(Default)]
pub struct ListPatches {
    params: ClassifyParams,
}

impl ListPatches {
    /// Creates a new `ListPatches` query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the classification parameters.
    #[must_use]
    pub fn with_params(mut self, params: ClassifyParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the patch names in generation order.
    #[must_use]
    pub fn execute(&self, model: &Model) -> Vec<String> {
        SurfaceClassifier::new(model.geometry())
            .with_params(self.params.clone())
            .classify()
            .patch_names()
    }
}
