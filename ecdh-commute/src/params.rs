//! Elliptic curve domain parameters.

use crate::EcPoint;
use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Domain parameters of a short Weierstrass curve `y² = x³ + ax + b` over the
/// prime field `GF(p)`.
///
/// Parameters are read-only once constructed; the NIST P-256 instance is
/// shared process-wide via [`CurveParams::nist_p256`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveParams {
    name: &'static str,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    n: BigUint,
    generator: EcPoint,
}

static NIST_P256: Lazy<CurveParams> = Lazy::new(|| {
    let p = BigUint::from_bytes_be(&hex!(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
    ));

    // a = -3
    let a = &p - 3u32;

    CurveParams {
        name: "P-256",
        a,
        b: BigUint::from_bytes_be(&hex!(
            "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"
        )),
        n: BigUint::from_bytes_be(&hex!(
            "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"
        )),
        generator: EcPoint::new(
            BigUint::from_bytes_be(&hex!(
                "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
            )),
            BigUint::from_bytes_be(&hex!(
                "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
            )),
        ),
        p,
    }
});

impl CurveParams {
    /// NIST P-256 (a.k.a. secp256r1, prime256v1) as defined in SP 800-186.
    pub fn nist_p256() -> &'static CurveParams {
        &NIST_P256
    }

    /// Curve name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Curve equation coefficient `a`, reduced mod `p`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Curve equation coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order of the group generated by the base point.
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Fixed base point `G`.
    pub fn base_point(&self) -> &EcPoint {
        &self.generator
    }
}
