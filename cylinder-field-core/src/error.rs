use thiserror::Error;

/// Failures local to a single regeneration pass.
///
/// Neither variant is recoverable within the pass; the caller is expected
/// to keep the previously generated scene instead of rendering a partial
/// or malformed one.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A user parameter is outside the domain the algorithm is specified for.
    #[error("invalid parameter `{name}` = {value}, expected {expected}")]
    InvalidParameter {
        name: &'static str,
        value: i32,
        expected: &'static str,
    },

    /// The boolean subtraction failed to produce a closed manifold.
    #[error("boundary subtraction produced degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },
}
