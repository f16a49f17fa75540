use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeAlgorithmError {
    ZeroMaxIterations,
    InvalidEscapeRadius { radius_squared: f64 },
}

impl fmt::Display for EscapeAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadius { radius_squared } => {
                write!(
                    f,
                    "squared escape radius must be positive and finite: {}",
                    radius_squared
                )
            }
        }
    }
}

impl Error for EscapeAlgorithmError {}
