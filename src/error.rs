use thiserror::Error;

/// Error type for Go/No-Go evaluation.
///
/// Every variant is a deterministic validation failure - nothing here is
/// transient, so the engine never retries. The caller corrects the input
/// and calls again; each evaluation call is independent.
#[derive(Error, Debug, Clone, PartialEq, uniffi::Error)]
#[uniffi(flat_error)]
pub enum EvaluationError {
    /// A sample carries a non-finite measurement. Raised by the normalizer;
    /// no partial evaluation proceeds.
    #[error("invalid sample at index {index}: {message}")]
    InvalidSample { index: usize, message: String },

    /// Per-sample gate result series does not line up with the sample
    /// series - a caller/integration bug, always fatal to the call.
    #[error("mismatched series lengths: {samples} samples vs {results} gate results")]
    MismatchedSeries { samples: usize, results: usize },

    /// Timestamps are not strictly ascending.
    #[error("samples are not in ascending timestamp order at index {index}")]
    NonChronological { index: usize },

    /// Timestamps ascend but their spacing is not uniform.
    #[error(
        "non-uniform sample spacing at index {index}: expected {expected_sec}s, got {actual_sec}s"
    )]
    NonUniformSpacing {
        index: usize,
        expected_sec: i64,
        actual_sec: i64,
    },

    /// A supplied limit is negative. Zero is legal (trivially restrictive).
    #[error("configuration error: {field} must be non-negative, got {value}")]
    NegativeLimit { field: String, value: f64 },
}
