//! Error type for the pixel-quant engine.

use thiserror::Error;

/// Errors raised by the quantization and mosaic engine.
///
/// Both variants are caller contract violations: the engine never
/// substitutes a default palette, tile or grid size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantError {
    /// Nearest-match lookup, or a palette / tile library, with zero entries.
    #[error("candidate set is empty")]
    EmptyCandidateSet,

    /// A zero grid width, scale factor, tile size, or source image dimension.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_candidate_set_message() {
        assert_eq!(
            QuantError::EmptyCandidateSet.to_string(),
            "candidate set is empty"
        );
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let error = QuantError::InvalidDimensions("cell width is zero".to_string());
        assert_eq!(error.to_string(), "invalid dimensions: cell width is zero");
    }
}
