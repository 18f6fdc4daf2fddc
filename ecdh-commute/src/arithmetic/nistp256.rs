//! NIST P-256 arithmetic backed by the `p256` crate.

use super::CurveArithmetic;
use crate::{CurveParams, EcPoint, Error, Result};
use num_bigint::BigUint;
use p256::{
    AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar, U256,
    elliptic_curve::{
        group::Group,
        ops::Reduce,
        sec1::{self, FromEncodedPoint, ToEncodedPoint},
    },
};

/// [`CurveArithmetic`] for NIST P-256.
///
/// Points are converted to `p256::AffinePoint` through their SEC1 uncompressed
/// encoding, which checks the curve equation, and group operations are carried
/// out on `p256::ProjectivePoint` using complete addition formulas.
#[derive(Clone, Copy, Debug)]
pub struct NistP256Arithmetic {
    params: &'static CurveParams,
}

impl NistP256Arithmetic {
    /// Create a new P-256 backend.
    pub fn new() -> Self {
        Self {
            params: CurveParams::nist_p256(),
        }
    }

    /// Decode and validate an [`EcPoint`].
    fn to_affine(&self, point: &EcPoint) -> Result<AffinePoint> {
        if point.is_identity() {
            return Ok(AffinePoint::IDENTITY);
        }

        let x = to_field_bytes(point.x())?;
        let y = to_field_bytes(point.y())?;
        let encoded = EncodedPoint::from_affine_coordinates(&x, &y, false);

        Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded)).ok_or_else(|| {
            Error::PointNotOnCurve {
                point: point.to_string(),
            }
        })
    }

    fn to_projective(&self, point: &EcPoint) -> Result<ProjectivePoint> {
        self.to_affine(point).map(ProjectivePoint::from)
    }

    /// Reduce `k` modulo the group order.
    fn to_scalar(&self, k: &BigUint) -> Result<Scalar> {
        let reduced = k % self.params.order();
        let bytes = to_field_bytes(&reduced)?;
        Ok(<Scalar as Reduce<U256>>::reduce_bytes(&bytes))
    }
}

impl Default for NistP256Arithmetic {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveArithmetic for NistP256Arithmetic {
    fn params(&self) -> &CurveParams {
        self.params
    }

    fn is_on_curve(&self, point: &EcPoint) -> bool {
        !point.is_identity() && self.to_affine(point).is_ok()
    }

    fn add(&self, a: &EcPoint, b: &EcPoint) -> Result<EcPoint> {
        tracing::trace!(%a, %b, "add");
        let sum = self.to_projective(a)? + self.to_projective(b)?;
        Ok(from_projective(&sum))
    }

    fn double(&self, a: &EcPoint) -> Result<EcPoint> {
        tracing::trace!(%a, "double");
        let doubled = Group::double(&self.to_projective(a)?);
        Ok(from_projective(&doubled))
    }

    fn scalar_mult(&self, k: &BigUint, a: &EcPoint) -> Result<EcPoint> {
        tracing::trace!(%a, "scalar_mult");
        let product = self.to_projective(a)? * self.to_scalar(k)?;
        Ok(from_projective(&product))
    }
}

/// Serialize a coordinate as a big-endian, zero-padded field element.
fn to_field_bytes(value: &BigUint) -> Result<FieldBytes> {
    let bytes = value.to_bytes_be();
    let mut out = FieldBytes::default();

    if bytes.len() > out.len() {
        return Err(Error::CoordinateOutOfRange);
    }

    let offset = out.len() - bytes.len();
    out[offset..].copy_from_slice(&bytes);
    Ok(out)
}

fn from_projective(point: &ProjectivePoint) -> EcPoint {
    match point.to_affine().to_encoded_point(false).coordinates() {
        sec1::Coordinates::Uncompressed { x, y } => {
            EcPoint::new(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
        }
        _ => EcPoint::identity(),
    }
}
