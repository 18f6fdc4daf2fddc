//! Diffie-Hellman style exchange over a [`CurveArithmetic`] backend.
//!
//! Two parties holding scalars `k` and `d` each publish a multiple of the
//! base point `G` and multiply the other's value by their own scalar. Both
//! arrive at the same point because scalar multiplication commutes:
//!
//! ```text
//! k·(d·G) = d·(k·G)
//! ```

use crate::{CurveArithmetic, EcPoint, Result, random_scalar};
use core::fmt;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use std::io;

/// Intermediate and final points of an exchange.
#[derive(Clone, Debug)]
pub struct Transcript {
    k: BigUint,
    d: BigUint,
    h1: EcPoint,
    h2: EcPoint,
    h3: EcPoint,
    h4: EcPoint,
}

impl Transcript {
    /// First scalar.
    pub fn k(&self) -> &BigUint {
        &self.k
    }

    /// Second scalar.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// `d·G`
    pub fn h1(&self) -> &EcPoint {
        &self.h1
    }

    /// `k·(d·G)`
    pub fn h2(&self) -> &EcPoint {
        &self.h2
    }

    /// `k·G`
    pub fn h3(&self) -> &EcPoint {
        &self.h3
    }

    /// `d·(k·G)`
    pub fn h4(&self) -> &EcPoint {
        &self.h4
    }

    /// Did both multiplication orders produce the same point?
    pub fn is_commutative(&self) -> bool {
        EcPoint::is_equal(&self.h2, &self.h4)
    }

    /// Write the verdict line, preceded by `k·(d·G)` and `d·(k·G)` when
    /// `verbose` is set.
    pub fn write_report(&self, out: &mut impl io::Write, verbose: bool) -> io::Result<()> {
        if verbose {
            self.h2.print(&mut *out)?;
            self.h4.print(&mut *out)?;
        }
        writeln!(out, "{self}")
    }
}

impl fmt::Display for Transcript {
    /// The one-line verdict, e.g. `Are k*(d*G) and d*(k*G) equal? true`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Are k*(d*G) and d*(k*G) equal? {}", self.is_commutative())
    }
}

/// Compute `k·(d·G)` and `d·(k·G)` with the given scalars.
#[tracing::instrument(level = "debug", skip_all, fields(curve = curve.params().name()))]
pub fn run<C: CurveArithmetic>(curve: &C, k: &BigUint, d: &BigUint) -> Result<Transcript> {
    let g = curve.base_point();

    let h1 = curve.scalar_mult(d, &g)?;
    let h2 = curve.scalar_mult(k, &h1)?;
    tracing::debug!(point = %h2, "computed k*(d*G)");

    let h3 = curve.scalar_mult(k, &g)?;
    let h4 = curve.scalar_mult(d, &h3)?;
    tracing::debug!(point = %h4, "computed d*(k*G)");

    Ok(Transcript {
        k: k.clone(),
        d: d.clone(),
        h1,
        h2,
        h3,
        h4,
    })
}

/// Draw `k` then `d` as `bits`-wide random scalars from `rng` and [`run`].
pub fn run_random<C: CurveArithmetic>(
    curve: &C,
    bits: usize,
    rng: &mut impl CryptoRngCore,
) -> Result<Transcript> {
    let k = random_scalar(bits, rng)?;
    let d = random_scalar(bits, rng)?;
    run(curve, &k, &d)
}
