//! Curve points in affine coordinates.

use crate::{Error, Result};
use core::{fmt, str::FromStr};
use std::io;
use num_bigint::BigUint;
use num_traits::Zero;

/// A point on an elliptic curve in affine coordinates.
///
/// Coordinates are arbitrary-precision non-negative integers. Constructing an
/// [`EcPoint`] performs no validation; use
/// [`CurveArithmetic::is_on_curve`][crate::CurveArithmetic::is_on_curve] to
/// check a point against a curve.
///
/// The group identity (point at infinity) is represented by the sentinel
/// `(0, 0)`, which does not satisfy the equation of any curve with a non-zero
/// `b` coefficient, NIST P-256 included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EcPoint {
    x: BigUint,
    y: BigUint,
}

impl EcPoint {
    /// Create a point from its coordinates.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// The group identity, encoded as `(0, 0)`.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Is this the `(0, 0)` identity sentinel?
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Exact coordinate-wise comparison.
    ///
    /// Equivalent to `a == b`; no normalization is performed.
    pub fn is_equal(a: &EcPoint, b: &EcPoint) -> bool {
        a.x == b.x && a.y == b.y
    }

    /// Write the point as `(X, Y)` followed by a newline.
    pub fn print(&self, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl fmt::Display for EcPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for EcPoint {
    type Err = Error;

    /// Parse the `(X, Y)` form produced by [`Display`][fmt::Display].
    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::ParsePoint(format!("expected `(X, Y)`, got {s:?}")))?;

        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| Error::ParsePoint(format!("missing `,` separator in {s:?}")))?;

        if y.contains(',') {
            return Err(Error::ParsePoint(format!(
                "expected two coordinates in {s:?}"
            )));
        }

        Ok(Self {
            x: parse_decimal(x.trim()).map_err(Error::ParsePoint)?,
            y: parse_decimal(y.trim()).map_err(Error::ParsePoint)?,
        })
    }
}

/// Parse a decimal scalar such as `12345`.
pub fn parse_scalar(s: &str) -> Result<BigUint> {
    parse_decimal(s.trim()).map_err(Error::InvalidScalar)
}

/// Parse a string of ASCII decimal digits.
fn parse_decimal(s: &str) -> core::result::Result<BigUint, String> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("invalid decimal integer {s:?}"));
    }

    BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| format!("invalid decimal integer {s:?}"))
}
