//! Random scalar generation.

use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::One;
use rand_core::{CryptoRngCore, OsRng};

/// Widest scalar [`random_scalar`] will draw.
pub const MAX_SCALAR_BITS: usize = 4096;

/// Draw a uniformly random integer in `[0, 2^bits)` from `rng`.
///
/// `bits / 8` bytes are read from the generator and interpreted as a
/// big-endian unsigned integer, which is then reduced modulo `2^bits`.
///
/// Returns [`Error::InvalidBitLength`] if `bits` is not a multiple of 8 or
/// exceeds [`MAX_SCALAR_BITS`], and [`Error::RandomSource`] if the generator
/// fails.
pub fn random_scalar(bits: usize, rng: &mut impl CryptoRngCore) -> Result<BigUint> {
    if bits % 8 != 0 || bits > MAX_SCALAR_BITS {
        return Err(Error::InvalidBitLength(bits));
    }

    let mut bytes = vec![0u8; bits / 8];
    rng.try_fill_bytes(&mut bytes)?;

    let modulus = BigUint::one() << bits;
    Ok(BigUint::from_bytes_be(&bytes) % modulus)
}

/// [`random_scalar`] using the operating system's secure random source.
pub fn os_random_scalar(bits: usize) -> Result<BigUint> {
    random_scalar(bits, &mut OsRng)
}
