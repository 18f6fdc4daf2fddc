//! Curve arithmetic over [`EcPoint`] values.
//!
//! Group operations are exposed through the [`CurveArithmetic`] trait so the
//! backend performing field and group arithmetic can be swapped without
//! touching the code that composes them. [`NistP256Arithmetic`] delegates to
//! the RustCrypto `p256` crate.

mod nistp256;

pub use self::nistp256::NistP256Arithmetic;

use crate::{CurveParams, EcPoint, Result};
use num_bigint::BigUint;

/// Group operations on the points of a fixed curve.
///
/// All operations are pure functions of their inputs and the curve
/// parameters. Point inputs are validated before any arithmetic is performed:
/// a point which is neither the identity sentinel nor on the curve is rejected
/// with [`Error::PointNotOnCurve`][crate::Error::PointNotOnCurve].
pub trait CurveArithmetic {
    /// Domain parameters of the curve.
    fn params(&self) -> &CurveParams;

    /// The curve's fixed base point `G`.
    fn base_point(&self) -> EcPoint {
        self.params().base_point().clone()
    }

    /// Does `point` satisfy the curve equation with canonical coordinates?
    ///
    /// The identity sentinel `(0, 0)` is not an affine point and therefore
    /// returns `false`.
    fn is_on_curve(&self, point: &EcPoint) -> bool;

    /// Group addition `a + b`.
    ///
    /// Handles `a == b`, `a == -b` (yielding the identity) and identity
    /// operands according to the standard group law.
    fn add(&self, a: &EcPoint, b: &EcPoint) -> Result<EcPoint>;

    /// Point doubling `a + a`.
    fn double(&self, a: &EcPoint) -> Result<EcPoint>;

    /// Scalar multiplication `k·a`.
    ///
    /// `k` is reduced modulo the group order, so `k = 0` and multiples of the
    /// order yield the identity.
    fn scalar_mult(&self, k: &BigUint, a: &EcPoint) -> Result<EcPoint>;
}
