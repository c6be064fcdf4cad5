use thiserror::Error;

/// Failure kinds raised by the pipeline stages.
///
/// Every fallible stage reports exactly one of these; none of them is
/// retryable, since the whole pipeline is deterministic in its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A column the pipeline cannot run without (class or outcome) was not
    /// found in the input table under any known naming variant.
    #[error("required column '{0}' not found in input table")]
    MissingColumn(&'static str),

    /// A selected feature has zero variance among the retained rows, so it
    /// cannot be standardized.
    #[error("feature '{feature}' has zero variance among retained rows")]
    DegenerateFeature { feature: String },

    /// Fewer usable feature columns were selected than the projection needs.
    #[error("projection requires {required} distinct numeric features, got {available}")]
    InsufficientDimensions { available: usize, required: usize },

    /// Complete-case filtering removed every row, so there is nothing to
    /// standardize or project.
    #[error("no rows remain after complete-case filtering")]
    EmptyInput,

    /// Malformed input or out-of-order usage (transform before fit,
    /// mismatched shapes).
    #[error("{0}")]
    InvalidInput(String),
}
