use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransynError {
    #[error("Invalid model parameter: {0}")]
    InvalidModelParameter(String),

    #[error("Invalid synthesis parameters: {0}")]
    InvalidSynthesisParams(String),

    #[error("Limb darkening set needs 5 coefficients, got {0}")]
    InvalidCoefficientCount(usize),

    #[error("Length mismatch: expected {0} values, found {1}")]
    LengthMismatch(usize, usize),
}
