#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Identity element
//!
//! [`EcPoint`] stores affine coordinates only. The point at infinity is
//! encoded as the sentinel `(0, 0)`, which is never a valid P-256 point.
//! Scalar multiplication by zero (or by a multiple of the group order) and
//! the addition of inverse points yield this sentinel, and every operation
//! accepts it as an input.

pub mod arithmetic;
pub mod exchange;
pub mod random;

mod error;
mod params;
mod point;

pub use crate::{
    arithmetic::{CurveArithmetic, NistP256Arithmetic},
    error::{Error, Result},
    exchange::Transcript,
    params::CurveParams,
    point::{EcPoint, parse_scalar},
    random::{os_random_scalar, random_scalar},
};
pub use num_bigint::{self, BigUint};
pub use p256;
