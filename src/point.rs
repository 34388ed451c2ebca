//! Affine points on the BN254 curve `E: y^2 = x^3 + 3`.

use core::fmt;
use core::ops::Neg;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::fp::Fp;

/// b = 3 of the curve equation.
pub(crate) const B: Fp = Fp::from_raw_unchecked([
    0x7a17caa950ad28d7,
    0x1f6ac17ae15521b9,
    0x334bea4e696bd284,
    0x2a1f6744ce179d8e,
]);

/// A finite affine point on `E`.
///
/// The map-to-curve algorithms are total over the field and never produce
/// the point at infinity, so no infinity flag is carried.
#[derive(Copy, Clone, Eq)]
pub struct AffinePoint {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl PartialEq for AffinePoint {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffinePoint {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl<'a> Neg for &'a AffinePoint {
    type Output = AffinePoint;

    #[inline]
    fn neg(self) -> AffinePoint {
        AffinePoint {
            x: self.x,
            y: -self.y,
        }
    }
}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    #[inline]
    fn neg(self) -> AffinePoint {
        -&self
    }
}

impl AffinePoint {
    /// The x-coordinate.
    #[inline]
    pub fn x(&self) -> Fp {
        self.x
    }

    /// The y-coordinate.
    #[inline]
    pub fn y(&self) -> Fp {
        self.y
    }

    /// Returns whether the point satisfies the curve equation
    /// `y^2 = x^3 + 3`.
    pub fn is_on_curve(&self) -> Choice {
        (self.x.square() * self.x + B).ct_eq(&self.y.square())
    }

    /// Serializes this point as the concatenation of the big-endian
    /// encodings of its coordinates.
    pub fn to_uncompressed(&self) -> [u8; 64] {
        let mut res = [0u8; 64];
        res[0..32].copy_from_slice(&self.x.to_bytes());
        res[32..64].copy_from_slice(&self.y.to_bytes());
        res
    }
}

#[test]
fn test_on_curve() {
    // (1, 2) is the conventional generator of the group.
    let gen = AffinePoint {
        x: Fp::one(),
        y: Fp::from_raw([2, 0, 0, 0]),
    };
    assert!(bool::from(gen.is_on_curve()));
    assert!(bool::from((-gen).is_on_curve()));

    let off = AffinePoint {
        x: Fp::one(),
        y: Fp::one(),
    };
    assert!(!bool::from(off.is_on_curve()));
}

#[test]
fn test_uncompressed() {
    let gen = AffinePoint {
        x: Fp::one(),
        y: Fp::from_raw([2, 0, 0, 0]),
    };
    let bytes = gen.to_uncompressed();
    assert_eq!(bytes[31], 1);
    assert_eq!(bytes[63], 2);
    assert_eq!(bytes[..31], [0u8; 31]);
}

#[test]
fn test_negation() {
    let gen = AffinePoint {
        x: Fp::one(),
        y: Fp::from_raw([2, 0, 0, 0]),
    };
    assert_eq!(-(-gen), gen);
    assert_ne!(-gen, gen);
}
