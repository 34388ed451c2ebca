//! Deterministic maps from field elements to points of the BN254 curve,
//! following the map-to-curve constructions of RFC 9380.
//!
//! [`map_to_curve_svdw`] implements the Shallue-van de Woestijne map
//! directly on `E: y^2 = x^3 + 3`. [`map_to_curve_sswu`] implements the
//! simplified SWU map on the auxiliary curve
//! `E': y^2 = x^3 + A' x + B'` and carries the result back to `E`
//! through a fixed degree-59 isogeny.
//!
//! The byte-level entry points [`svdw_map_to_point`] and
//! [`sswu_map_to_point`] take the input as a 256-bit big-endian integer
//! and reject anything not strictly below the field modulus.

use core::fmt;

use crate::fp::Fp;
use crate::point::AffinePoint;

mod iso;
mod sswu;
mod svdw;

pub use iso::{ISO_XDEN, ISO_XNUM, ISO_YDEN, ISO_YNUM};
pub use sswu::{map_to_curve_sswu, SSWU_ELLP_A, SSWU_ELLP_B, SSWU_XI};
pub use svdw::{map_to_curve_svdw, SVDW_C1, SVDW_C2, SVDW_C3, SVDW_C4};

/// The field modulus p in big-endian byte order.
pub const MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58,
    0x5d, 0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16, 0xd8, 0x7c,
    0xfd, 0x47,
];

/// The ways a map-to-point call can fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The caller passed an integer that is not a canonical field
    /// element (not strictly smaller than p). Recoverable by the
    /// caller; carries the rejected encoding.
    InvalidFieldElement([u8; 32]),
    /// An internal invariant that holds unconditionally for canonical
    /// inputs was violated. This indicates a defect or corruption and
    /// is surfaced with the offending intermediate value rather than
    /// silently producing a bogus point.
    MapToPointFailed(Fp),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidFieldElement(bytes) => {
                write!(f, "input is not a canonical field element: 0x")?;
                for b in bytes.iter() {
                    write!(f, "{:02x}", b)?;
                }
                Ok(())
            }
            Error::MapToPointFailed(witness) => {
                write!(f, "map-to-point invariant violated at {:?}", witness)
            }
        }
    }
}

/// Maps a 256-bit big-endian integer to a point of `E` with the
/// Shallue-van de Woestijne map.
///
/// Fails with [`Error::InvalidFieldElement`] if `u` is not strictly
/// smaller than the field modulus.
pub fn svdw_map_to_point(u: &[u8; 32]) -> Result<AffinePoint, Error> {
    let u = Option::<Fp>::from(Fp::from_bytes(u)).ok_or(Error::InvalidFieldElement(*u))?;
    map_to_curve_svdw(&u)
}

/// Maps a 256-bit big-endian integer to a point of `E` with the
/// simplified SWU map composed with the degree-59 isogeny.
///
/// Fails with [`Error::InvalidFieldElement`] if `u` is not strictly
/// smaller than the field modulus.
pub fn sswu_map_to_point(u: &[u8; 32]) -> Result<AffinePoint, Error> {
    let u = Option::<Fp>::from(Fp::from_bytes(u)).ok_or(Error::InvalidFieldElement(*u))?;
    map_to_curve_sswu(&u)
}

#[test]
fn test_rejects_modulus() {
    assert_eq!(
        svdw_map_to_point(&MODULUS),
        Err(Error::InvalidFieldElement(MODULUS))
    );
    assert_eq!(
        sswu_map_to_point(&MODULUS),
        Err(Error::InvalidFieldElement(MODULUS))
    );

    let max = [0xff; 32];
    assert_eq!(
        svdw_map_to_point(&max),
        Err(Error::InvalidFieldElement(max))
    );
    assert_eq!(
        sswu_map_to_point(&max),
        Err(Error::InvalidFieldElement(max))
    );
}

#[test]
fn test_accepts_modulus_minus_one() {
    let mut bytes = MODULUS;
    bytes[31] -= 1;
    assert!(svdw_map_to_point(&bytes).is_ok());
    assert!(sswu_map_to_point(&bytes).is_ok());
}

#[test]
fn test_error_display() {
    use std::string::ToString;

    let err = Error::InvalidFieldElement([0xff; 32]);
    assert!(err.to_string().starts_with("input is not a canonical"));
    let err = Error::MapToPointFailed(Fp::zero());
    assert!(err.to_string().starts_with("map-to-point invariant"));
}
