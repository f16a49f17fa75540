use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RefinementError {
    NotPowerOfTwo { edge: u32 },
}

impl fmt::Display for RefinementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPowerOfTwo { edge } => {
                write!(f, "refinement block edge must be a power of two: {}", edge)
            }
        }
    }
}

impl Error for RefinementError {}

/// Where a render sits on the coarse-to-fine ladder. `Block(edge)` means
/// the next pass paints `edge`-pixel squares; halving from `Block(1)`
/// lands on `Complete`, which is terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RefinementLevel {
    Block(u32),
    Complete,
}

impl RefinementLevel {
    /// The coarsest rung of a ladder that starts at `edge`-pixel blocks.
    /// Only powers of two halve cleanly down to single pixels.
    pub fn starting_at(edge: u32) -> Result<Self, RefinementError> {
        if !edge.is_power_of_two() {
            return Err(RefinementError::NotPowerOfTwo { edge });
        }

        Ok(Self::Block(edge))
    }

    /// The next rung down the ladder. `Complete` absorbs, and a zero
    /// edge steps straight to `Complete`.
    #[must_use]
    pub fn refined(self) -> Self {
        match self {
            Self::Block(edge) if edge <= 1 => Self::Complete,
            Self::Block(edge) => Self::Block(edge / 2),
            Self::Complete => Self::Complete,
        }
    }

    /// Edge of the blocks the next pass paints; `None` for `Complete`
    /// and for a zero edge, which paint nothing.
    #[must_use]
    pub fn block_edge(&self) -> Option<u32> {
        match self {
            Self::Block(0) | Self::Complete => None,
            Self::Block(edge) => Some(*edge),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}
