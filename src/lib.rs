//! This crate implements the map-to-curve primitive of RFC 9380 for the
//! BN254 (alt_bn128) curve `E: y^2 = x^3 + 3` over its 254-bit base field.
//!
//! Two independent maps are provided, each taking a field element `u` to an
//! affine point of `E`:
//!
//! * [`svdw_map_to_point`] applies the Shallue-van de Woestijne map,
//!   evaluated directly on `E`.
//! * [`sswu_map_to_point`] applies the simplified SWU map. Because `E` has
//!   curve coefficient `a = 0`, the map is evaluated on an auxiliary curve
//!   `E'` and the result is carried back to `E` through a fixed degree-59
//!   isogeny.
//!
//! Both maps are total over the field, deterministic, allocation-free and
//! built from a fixed sequence of field operations; the only data-dependent
//! steps are constant-time conditional selections.
//!
//! Hashing a message to a field element, cofactor clearing and the
//! `hash_to_curve` / `encode_to_curve` compositions are out of scope;
//! callers supply `u` and consume the resulting point.

#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod util;

mod fp;
mod point;

pub mod map_to_curve;

pub use fp::Fp;
pub use map_to_curve::{
    map_to_curve_sswu, map_to_curve_svdw, sswu_map_to_point, svdw_map_to_point, Error,
};
pub use point::AffinePoint;
