//! This module provides an implementation of the BN254 base field `GF(p)`
//! where `p = 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47`

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use crypto_bigint::{Encoding, Limb, U256};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::util::{mont_inv_word, mont_mul, mont_pow_vartime, mont_reduce, mont_square};

/// Represents an element of the base field of the BN254 elliptic curve
/// construction.
// The internal representation of this type is four 64-bit unsigned
// integers in little-endian order. `Fp` values are always in
// Montgomery form; i.e., Fp(a) = aR mod p, with R = 2^256.
#[derive(Copy, Clone, Eq)]
#[repr(transparent)]
pub struct Fp(pub(crate) U256);

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp(U256::conditional_select(&a.0, &b.0, choice))
    }
}

/// Constant representing the modulus (p)
pub(crate) const MODULUS: U256 = U256::from_be_hex(
    "30644e72e131a029\
     b85045b68181585d\
     97816a916871ca8d\
     3c208c16d87cfd47",
);

/// INV = -(p^{-1} mod 2^64) mod 2^64
const INV: Limb = mont_inv_word(&MODULUS);

/// R = 2^256 mod p
const R: U256 = U256::from_be_hex(
    "0e0a77c19a07df2f\
     666ea36f7879462c\
     0a78eb28f5c70b3d\
     d35d438dc58f0d9d",
);

/// R2 = 2^(256*2) mod p
const R2: U256 = U256::from_be_hex(
    "06d89f71cab8351f\
     47ab1eff0a417ff6\
     b5e71911d44501fb\
     f32cfc5b538afa89",
);

/// R3 = 2^(256*3) mod p
const R3: U256 = U256::from_be_hex(
    "20fd6e902d592544\
     ef7f0b0c0ada0afb\
     62f210e6a7283db6\
     b1cd6dafda1530df",
);

/// (p + 1) / 4, the square-root exponent for p = 3 (mod 4)
const SQRT_EXP: [u64; 4] = [
    0x4f082305b61f3f52,
    0x65e05aa45a1c72a3,
    0x6e14116da0605617,
    0x0c19139cb84c680a,
];

/// (p - 1) / 2, the Euler-criterion exponent
const LEGENDRE_EXP: [u64; 4] = [
    0x9e10460b6c3e7ea3,
    0xcbc0b548b438e546,
    0xdc2822db40c0ac2e,
    0x183227397098d014,
];

impl<'a> Neg for &'a Fp {
    type Output = Fp;

    #[inline]
    fn neg(self) -> Fp {
        self.neg()
    }
}

impl Neg for Fp {
    type Output = Fp;

    #[inline]
    fn neg(self) -> Fp {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp, Fp);
impl_binops_multiplicative!(Fp, Fp);

impl Fp {
    /// Returns zero, the additive identity.
    #[inline]
    pub const fn zero() -> Fp {
        Fp(U256::ZERO)
    }

    /// Returns one, the multiplicative identity.
    #[inline]
    pub const fn one() -> Fp {
        Fp(R)
    }

    /// Returns whether this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.0.ct_eq(&U256::ZERO)
    }

    /// Attempts to convert a big-endian byte representation of
    /// a field element into an `Fp`, failing if the input is not
    /// canonical (i.e. not smaller than p).
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Fp> {
        let tmp = U256::from_be_bytes(*bytes);

        // Is the value smaller than the modulus?
        let (_, borrow) = tmp.sbb(&MODULUS, Limb::ZERO);
        let is_some = Choice::from((borrow.0 as u8) & 1);

        // Convert to Montgomery form by computing
        // (a.R^0 * R^2) / R = a.R
        let res = Self::from_canonical(tmp);

        CtOption::new(res, is_some)
    }

    /// Converts an element of `Fp` into a byte representation in
    /// big-endian byte order.
    pub fn to_bytes(self) -> [u8; 32] {
        self.to_canonical().to_be_bytes()
    }

    /// Reduces a 512-bit little-endian integer modulo p.
    ///
    /// The wide value `d1 * 2^256 + d0` is folded as
    /// `d0 * R2 + d1 * R3` so that a uniformly random input yields a
    /// (negligibly biased) uniformly random field element.
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Self {
        let d0 = U256::from_le_bytes(bytes[0..32].try_into().unwrap());
        let d1 = U256::from_le_bytes(bytes[32..64].try_into().unwrap());
        let lo = Fp(mont_mul(&d0, &R2, &MODULUS, INV));
        let hi = Fp(mont_mul(&d1, &R3, &MODULUS, INV));
        lo.add(&hi)
    }

    /// Converts from a canonical element represented by a U256.
    #[inline]
    pub(crate) const fn from_canonical(val: U256) -> Self {
        Fp(mont_mul(&val, &R2, &MODULUS, INV))
    }

    /// Turn into canonical form by computing
    /// (a.R) / R = a
    #[inline]
    pub(crate) const fn to_canonical(&self) -> U256 {
        mont_reduce(self.0, U256::ZERO, &MODULUS, INV)
    }

    /// Samples a uniformly random field element.
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Fp::from_bytes_wide(&bytes)
    }

    /// Converts from an integer represented in little endian
    /// into its (congruent) `Fp` representation.
    pub const fn from_raw(val: [u64; 4]) -> Self {
        Fp::from_canonical(uint_from_raw(val))
    }

    /// Constructs an element of `Fp` from its Montgomery-form limbs,
    /// without checking that they are canonical.
    pub const fn from_raw_unchecked(v: [u64; 4]) -> Fp {
        Fp(uint_from_raw(v))
    }

    /// Returns the parity of the canonical representative, the
    /// `sgn0` sign of RFC 9380.
    pub fn sgn0(&self) -> Choice {
        let tmp = self.to_canonical();
        Choice::from((tmp.limbs()[0].0 as u8) & 1)
    }

    /// Although this is labeled "vartime", it is only
    /// variable time with respect to the exponent.
    pub const fn pow_vartime(&self, by: &[u64; 4]) -> Self {
        Fp(mont_pow_vartime(&self.0, by, &R, &MODULUS, INV))
    }

    /// Computes the square root of this element, if it exists.
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        // Since p = 3 (mod 4), exponentiation by (p + 1) / 4 produces
        // a candidate root. This only works for elements that are
        // actually quadratic residues, so the candidate is checked by
        // squaring at the end.
        let sqrt = self.pow_vartime(&SQRT_EXP);

        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Computes the Legendre symbol a^((p - 1) / 2) of this element,
    /// returned as a field element: one for a nonzero quadratic
    /// residue, minus one for a non-residue and zero for zero.
    pub fn legendre(&self) -> Fp {
        self.pow_vartime(&LEGENDRE_EXP)
    }

    /// Computes the multiplicative inverse of this field
    /// element, returning None in the case that this element
    /// is zero.
    ///
    /// The exponentiation by p - 2 runs a fixed 4-bit-window chain.
    pub fn invert(&self) -> CtOption<Self> {
        #[inline(always)]
        fn pow2k(n: &Fp, num_times: usize) -> Fp {
            let mut res = *n;
            for _ in 0..num_times {
                res = res.square();
            }
            res
        }
        // 4-bit window recoding of p - 2; t<k> holds self^k for odd k.
        let t1 = *self;
        let t2 = t1.square();
        let t3 = t1 * t2;
        let t5 = t3 * t2;
        let t7 = t5 * t2;
        let t9 = t7 * t2;
        let t11 = t9 * t2;
        let t13 = t11 * t2;
        let t15 = t13 * t2;
        let mut acc = t3;
        acc = pow2k(&acc, 7);
        acc = acc * t3;
        acc = pow2k(&acc, 3);
        acc = acc * t1;
        acc = pow2k(&acc, 7);
        acc = acc * t9;
        acc = pow2k(&acc, 2);
        acc = acc * t3;
        acc = pow2k(&acc, 5);
        acc = acc * t7;
        acc = pow2k(&acc, 6);
        acc = acc * t11;
        acc = pow2k(&acc, 1);
        acc = acc * t1;
        acc = pow2k(&acc, 8);
        acc = acc * t9;
        acc = pow2k(&acc, 1);
        acc = acc * t1;
        acc = pow2k(&acc, 7);
        acc = acc * t13;
        acc = pow2k(&acc, 10);
        acc = acc * t5;
        acc = pow2k(&acc, 6);
        acc = acc * t13;
        acc = pow2k(&acc, 2);
        acc = acc * t3;
        acc = pow2k(&acc, 7);
        acc = acc * t5;
        acc = pow2k(&acc, 6);
        acc = acc * t1;
        acc = pow2k(&acc, 7);
        acc = acc * t11;
        acc = pow2k(&acc, 5);
        acc = acc * t13;
        acc = pow2k(&acc, 3);
        acc = acc * t5;
        acc = pow2k(&acc, 8);
        acc = acc * t3;
        acc = pow2k(&acc, 9);
        acc = acc * t5;
        acc = pow2k(&acc, 3);
        acc = acc * t3;
        acc = pow2k(&acc, 8);
        acc = acc * t11;
        acc = pow2k(&acc, 4);
        acc = acc * t11;
        acc = pow2k(&acc, 6);
        acc = acc * t11;
        acc = pow2k(&acc, 2);
        acc = acc * t3;
        acc = pow2k(&acc, 10);
        acc = acc * t11;
        acc = pow2k(&acc, 4);
        acc = acc * t5;
        acc = pow2k(&acc, 5);
        acc = acc * t9;
        acc = pow2k(&acc, 7);
        acc = acc * t11;
        acc = pow2k(&acc, 2);
        acc = acc * t1;
        acc = pow2k(&acc, 7);
        acc = acc * t7;
        acc = pow2k(&acc, 6);
        acc = acc * t7;
        acc = pow2k(&acc, 5);
        acc = acc * t5;
        acc = pow2k(&acc, 2);
        acc = acc * t1;
        acc = pow2k(&acc, 7);
        acc = acc * t13;
        acc = pow2k(&acc, 6);
        acc = acc * t15;
        acc = pow2k(&acc, 5);
        acc = acc * t1;
        acc = pow2k(&acc, 6);
        acc = acc * t1;
        acc = pow2k(&acc, 5);
        acc = acc * t3;
        acc = pow2k(&acc, 9);
        acc = acc * t11;
        acc = pow2k(&acc, 5);
        acc = acc * t13;
        acc = pow2k(&acc, 1);
        acc = acc * t1;
        acc = pow2k(&acc, 8);
        acc = acc * t15;
        acc = pow2k(&acc, 4);
        acc = acc * t9;
        acc = pow2k(&acc, 4);
        acc = acc * t15;
        acc = pow2k(&acc, 3);
        acc = acc * t5;
        acc = pow2k(&acc, 2);
        acc = acc * t1;
        acc = pow2k(&acc, 6);
        acc = acc * t5;

        CtOption::new(acc, !self.is_zero())
    }

    #[inline]
    pub(crate) fn invert0(&self) -> Fp {
        self.invert().unwrap_or(Fp::zero())
    }

    /// Adds `rhs` to `self`, returning the result.
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        // Because self + rhs never carries (both are < p < 2^255),
        // this is cheaper than U256::add_mod.
        let (sum, _) = self.0.adc(&rhs.0, Limb::ZERO);
        Fp(crate::util::reduce_once(&sum, &MODULUS))
    }

    /// Doubles this field element.
    #[inline]
    pub const fn double(&self) -> Fp {
        self.add(self)
    }

    /// Negates `self`.
    #[inline]
    pub const fn neg(&self) -> Fp {
        Fp(self.0.neg_mod(&MODULUS))
    }

    /// Subtracts `rhs` from `self`, returning the result.
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        Fp(self.0.sub_mod(&rhs.0, &MODULUS))
    }

    /// Multiplies `rhs` by `self`, returning the result.
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        Fp(mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    /// Squares this element.
    #[inline]
    pub const fn square(&self) -> Self {
        Fp(mont_square(&self.0, &MODULUS, INV))
    }
}

#[inline]
#[cfg(target_pointer_width = "32")]
const fn uint_from_raw(arr: [u64; 4]) -> U256 {
    const MASK: u64 = u32::MAX as u64;
    U256::from_words([
        (arr[0] & MASK) as u32,
        (arr[0] >> 32) as u32,
        (arr[1] & MASK) as u32,
        (arr[1] >> 32) as u32,
        (arr[2] & MASK) as u32,
        (arr[2] >> 32) as u32,
        (arr[3] & MASK) as u32,
        (arr[3] >> 32) as u32,
    ])
}

#[inline]
#[cfg(target_pointer_width = "64")]
const fn uint_from_raw(arr: [u64; 4]) -> U256 {
    U256::from_words(arr)
}

#[cfg(target_pointer_width = "32")]
#[test]
fn test_inv() {
    // Compute -(p^{-1} mod 2^32) mod 2^32 by exponentiating
    // by totient(2**32) - 1

    let mut inv = 1u32;
    for _ in 0..31 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(MODULUS.as_words()[0]);
    }
    inv = inv.wrapping_neg();

    assert_eq!(Limb(inv), INV);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_inv() {
    // Compute -(p^{-1} mod 2^64) mod 2^64 by exponentiating
    // by totient(2**64) - 1

    let mut inv = 1u64;
    for _ in 0..63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(MODULUS.as_words()[0]);
    }
    inv = inv.wrapping_neg();

    assert_eq!(Limb(inv), INV);
}

#[test]
fn test_conditional_selection() {
    let a = Fp::from_raw_unchecked([1, 2, 3, 4]);
    let b = Fp::from_raw_unchecked([5, 6, 7, 8]);

    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(0u8)),
        a
    );
    assert_eq!(
        ConditionallySelectable::conditional_select(&a, &b, Choice::from(1u8)),
        b
    );
}

#[test]
fn test_equality() {
    fn is_equal(a: &Fp, b: &Fp) -> bool {
        let eq = a == b;
        let ct_eq = a.ct_eq(b);

        assert_eq!(eq, bool::from(ct_eq));

        eq
    }

    assert!(is_equal(
        &Fp::from_raw_unchecked([1, 2, 3, 4]),
        &Fp::from_raw_unchecked([1, 2, 3, 4])
    ));

    assert!(!is_equal(
        &Fp::from_raw_unchecked([5, 2, 3, 4]),
        &Fp::from_raw_unchecked([1, 2, 3, 4])
    ));
    assert!(!is_equal(
        &Fp::from_raw_unchecked([1, 5, 3, 4]),
        &Fp::from_raw_unchecked([1, 2, 3, 4])
    ));
    assert!(!is_equal(
        &Fp::from_raw_unchecked([1, 2, 5, 4]),
        &Fp::from_raw_unchecked([1, 2, 3, 4])
    ));
    assert!(!is_equal(
        &Fp::from_raw_unchecked([1, 2, 3, 5]),
        &Fp::from_raw_unchecked([1, 2, 3, 4])
    ));
}

#[cfg(test)]
const TEST_A: Fp = Fp::from_raw_unchecked([
    0x2611_8daa_38d7_06b0,
    0xb493_e062_c9a2_318a,
    0xde65_7fc2_7e01_6d5f,
    0x0db0_1be9_abf2_a69e,
]);

#[cfg(test)]
const TEST_B: Fp = Fp::from_raw_unchecked([
    0xaf24_52a2_2efc_3ffa,
    0x931b_7b22_0782_45ff,
    0x919e_56f1_f491_d56e,
    0x215d_1b3b_0cb5_c0fa,
]);

#[test]
fn test_squaring() {
    let expected = Fp::from_raw_unchecked([
        0x0a23_a9dc_1cc0_9055,
        0x7da8_edf7_f6c8_d623,
        0xdadb_42dc_bea8_d43a,
        0x0a9c_407f_1106_8036,
    ]);

    assert_eq!(TEST_A.square(), expected);
}

#[test]
fn test_multiplication() {
    let expected = Fp::from_raw_unchecked([
        0x5dba_ed9b_0055_1a27,
        0xdcf9_5481_4f4c_bd0b,
        0x7547_b78d_df07_5cc9,
        0x275c_e534_7ff8_19dd,
    ]);

    assert_eq!(TEST_A * TEST_B, expected);
}

#[test]
fn test_addition() {
    let expected = Fp::from_raw_unchecked([
        0xd535_e04c_67d3_46aa,
        0x47af_5b84_d124_7789,
        0x7003_d6b4_7293_42ce,
        0x2f0d_3724_b8a8_6799,
    ]);

    assert_eq!(TEST_A + TEST_B, expected);
}

#[test]
fn test_subtraction() {
    let expected = Fp::from_raw_unchecked([
        0xb30d_c71e_e257_c3fd,
        0xb8f9_cfd2_2a91_b617,
        0x0517_6e87_0af0_f04e,
        0x1cb7_4f21_806e_85ce,
    ]);

    assert_eq!(TEST_A - TEST_B, expected);
}

#[test]
fn test_negation() {
    let expected = Fp::from_raw_unchecked([
        0x160e_fe6c_9fa5_f697,
        0xe2ed_8a2e_9ecf_9903,
        0xd9ea_c5f4_037f_eafd,
        0x22b4_3289_353e_f98a,
    ]);

    assert_eq!(-TEST_A, expected);
    assert_eq!(-Fp::zero(), Fp::zero());
}

#[test]
fn test_debug() {
    assert_eq!(
        format!("{:?}", Fp::one()),
        "0x0000000000000000000000000000000000000000000000000000000000000001"
    );
}

#[test]
fn test_from_bytes() {
    let mut a = TEST_A;

    for _ in 0..100 {
        a = a.square();
        let tmp = a.to_bytes();
        let b = Fp::from_bytes(&tmp).unwrap();

        assert_eq!(a, b);
    }

    // The modulus itself is not canonical.
    assert!(bool::from(
        Fp::from_bytes(&[
            0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81,
            0x58, 0x5d, 0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20, 0x8c, 0x16,
            0xd8, 0x7c, 0xfd, 0x47
        ])
        .is_none()
    ));

    assert!(bool::from(Fp::from_bytes(&[0xff; 32]).is_none()));
}

#[test]
fn test_sqrt() {
    // TEST_A is a quadratic non-residue, so the exponentiation in sqrt
    // lands on the other root of its square.
    assert_eq!(TEST_A.square().sqrt().unwrap(), -TEST_A);
    assert!(bool::from(TEST_A.sqrt().is_none()));
    assert_eq!(Fp::zero().sqrt().unwrap(), Fp::zero());

    let four = Fp::from_raw([4, 0, 0, 0]);
    let two = Fp::from_raw([2, 0, 0, 0]);
    let root = four.sqrt().unwrap();
    assert!(root == two || root == -two);
}

#[test]
fn test_inversion() {
    let expected = Fp::from_raw_unchecked([
        0x51f2_bf07_4293_d5b7,
        0x7129_1e07_140e_a10d,
        0x2a4f_5a67_b994_b8dc,
        0x1c8e_5602_860f_ea63,
    ]);

    assert_eq!(TEST_A.invert().unwrap(), expected);
    assert_eq!(TEST_A.invert().unwrap() * TEST_A, Fp::one());
    assert!(bool::from(Fp::zero().invert().is_none()));
    assert_eq!(Fp::zero().invert0(), Fp::zero());
}

#[test]
fn test_legendre() {
    assert_eq!(Fp::zero().legendre(), Fp::zero());
    assert_eq!(Fp::one().legendre(), Fp::one());
    // 4 = 2^2 is a residue, TEST_A is not.
    assert_eq!(Fp::from_raw([4, 0, 0, 0]).legendre(), Fp::one());
    assert_eq!(TEST_A.legendre(), -Fp::one());
}

#[test]
fn test_sgn0() {
    assert_eq!(bool::from(Fp::zero().sgn0()), false);
    assert_eq!(bool::from(Fp::one().sgn0()), true);
    // p - 1 is even
    assert_eq!(bool::from((-Fp::one()).sgn0()), false);
    assert_eq!(bool::from(Fp::from_raw([2, 0, 0, 0]).sgn0()), false);
}

#[test]
fn test_random_roundtrip() {
    use rand_core::SeedableRng;
    let mut rng = rand_xorshift::XorShiftRng::from_seed([
        0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
        0xe5,
    ]);
    for _ in 0..32 {
        let a = Fp::random(&mut rng);
        assert_eq!(Fp::from_bytes(&a.to_bytes()).unwrap(), a);
        assert_eq!(a.double(), a + a);
    }
}

#[cfg(feature = "zeroize")]
#[test]
fn test_zeroize() {
    use zeroize::Zeroize;

    let mut a = Fp::one();
    a.zeroize();
    assert!(bool::from(a.is_zero()));
}
