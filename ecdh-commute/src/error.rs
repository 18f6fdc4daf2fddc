//! Error types.

/// Errors raised while generating scalars, handling points, or running an
/// exchange.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The operating system's secure random source failed.
    #[error("secure random source failed: {0}")]
    RandomSource(#[from] rand_core::Error),

    /// Random scalars are drawn a whole byte at a time, up to
    /// [`MAX_SCALAR_BITS`][crate::random::MAX_SCALAR_BITS].
    #[error("bit length {0} is not a multiple of 8 in the range 0..=4096")]
    InvalidBitLength(usize),

    /// A non-identity point does not satisfy the curve equation.
    #[error("point {point} is not on the curve")]
    PointNotOnCurve {
        /// The offending point, formatted as `(X, Y)`.
        point: String,
    },

    /// A coordinate needs more than 32 bytes.
    #[error("coordinate does not fit in a field element")]
    CoordinateOutOfRange,

    /// A string could not be parsed as `(X, Y)`.
    #[error("malformed point: {0}")]
    ParsePoint(String),

    /// A string could not be parsed as a decimal scalar.
    #[error("malformed scalar: {0}")]
    InvalidScalar(String),
}

/// Result type with the crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
