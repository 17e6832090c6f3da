//! Error taxonomy of the generation pipeline.
//!
//! Non-convergence of the point sampler is deliberately *not* an error:
//! after its retry budget is exhausted, the last draw is accepted as-is.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// A parameter is outside its documented domain.
  #[error("invalid parameter: {reason}")]
  InvalidParameter { reason: &'static str },
  /// Shape assembly needs at least 3 distinct points.
  #[error("insufficient points: need at least 3 distinct, found {found}")]
  InsufficientPoints { found: usize },
  /// The sampled outline has zero extent along one axis and cannot be
  /// normalized onto the canvas.
  #[error("degenerate shape: zero extent along the {axis} axis")]
  DegenerateShape { axis: char },
}

pub type Result<T> = std::result::Result<T, Error>;
