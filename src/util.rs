use crypto_bigint::{Limb, UInt, Word};

/// `INV = -(m^{-1} mod 2^W) mod 2^W`, the Montgomery reduction constant
/// for the modulus `m` and word size `W`.
#[inline(always)]
pub const fn mont_inv_word<const LIMBS: usize>(modulus: &UInt<LIMBS>) -> Limb {
    modulus
        .inv_mod2k(Word::BITS as usize)
        .neg_mod(&UInt::ONE.shl_vartime(Word::BITS as usize))
        .limbs()[0]
}

/// Montgomery reduction of the double-width value `hi || lo`, following
/// Algorithm 14.32 in Handbook of Applied Cryptography
/// <http://cacr.uwaterloo.ca/hac/about/chap14.pdf>.
#[inline(always)]
pub const fn mont_reduce<const LIMBS: usize>(
    lo: UInt<LIMBS>,
    hi: UInt<LIMBS>,
    modulus: &UInt<LIMBS>,
    inv: Limb,
) -> UInt<LIMBS> {
    let mod_words = modulus.limbs();
    let hi_words = hi.limbs();
    let mut limbs = lo.into_limbs();

    let mut carry = Limb::ZERO;
    let mut i = 0;
    while i < LIMBS {
        let k = limbs[0].wrapping_mul(inv);

        let (_, c) = limbs[0].mac(k, mod_words[0], Limb::ZERO);
        let mut carry2 = c;

        let mut j = 1;
        while j < LIMBS {
            let (l, c) = limbs[j].mac(k, mod_words[j], carry2);
            limbs[j - 1] = l;
            carry2 = c;
            j += 1;
        }

        let (l, c) = hi_words[i].adc(carry, carry2);
        limbs[j - 1] = l;
        carry = c;

        i += 1;
    }

    // The result may be off by at most one modulus.
    reduce_once(&UInt::new(limbs), modulus)
}

/// Montgomery product of two elements.
#[inline(always)]
pub const fn mont_mul<const LIMBS: usize>(
    lhs: &UInt<LIMBS>,
    rhs: &UInt<LIMBS>,
    modulus: &UInt<LIMBS>,
    inv: Limb,
) -> UInt<LIMBS> {
    let (lo, hi) = lhs.mul_wide(rhs);
    mont_reduce(lo, hi, modulus, inv)
}

/// Double-width squaring, computing the off-diagonal half once and
/// doubling it by a one-bit shift across `hi || lo`.
#[inline(always)]
const fn square_wide<const LIMBS: usize>(uint: &UInt<LIMBS>) -> (UInt<LIMBS>, UInt<LIMBS>) {
    let limbs = uint.limbs();
    let mut lo = [Limb::ZERO; LIMBS];
    let mut hi = [Limb::ZERO; LIMBS];
    let mut i = 0;
    while i < LIMBS - 1 {
        let mut j = i;
        let mut carry = Limb::ZERO;

        while j < LIMBS - 1 {
            let k = i + j;
            if k >= LIMBS {
                let (n, c) = hi[k - LIMBS].mac(limbs[i], limbs[j + 1], carry);
                hi[k - LIMBS] = n;
                carry = c;
            } else {
                let (n, c) = lo[k].mac(limbs[i], limbs[j + 1], carry);
                lo[k] = n;
                carry = c;
            }
            j += 1;
        }

        if i == 0 {
            lo[LIMBS - 1] = carry;
        } else {
            hi[i - 1] = carry;
        }
        i += 1;
    }

    // Shift [hi || lo] left by one bit.
    // (Slightly complicated by Limb not implementing shl.)
    hi[LIMBS - 1] = Limb(hi[LIMBS - 2].0 >> (Limb::BIT_SIZE - 1));
    let mut i = LIMBS - 2;
    while i > 0 {
        hi[i] = Limb((hi[i].0 << 1) | (hi[i - 1].0 >> (Limb::BIT_SIZE - 1)));
        i -= 1;
    }
    hi[0] = Limb((hi[0].0 << 1) | (lo[LIMBS - 1].0 >> (Limb::BIT_SIZE - 1)));
    let mut i = LIMBS - 1;
    while i > 0 {
        lo[i] = Limb((lo[i].0 << 1) | (lo[i - 1].0 >> (Limb::BIT_SIZE - 1)));
        i -= 1;
    }
    lo[0] = Limb(lo[0].0 << 1);

    // Add the diagonal terms.
    let mut i = 0;
    let mut base = Limb::ZERO;
    let mut carry = Limb::ZERO;
    while i < LIMBS {
        let (l1, c) = base.mac(limbs[i], limbs[i], carry);
        let k = i * 2;
        if k >= LIMBS {
            let (l2, c) = hi[k - LIMBS].adc(Limb::ZERO, c);
            hi[k - LIMBS] = l1;
            base = hi[k - LIMBS + 1];
            hi[k - LIMBS + 1] = l2;
            carry = c;
        } else {
            let (l2, c) = lo[k].adc(Limb::ZERO, c);
            lo[k] = l1;
            base = lo[k + 1];
            lo[k + 1] = l2;
            carry = c;
        };
        i += 1;
    }

    (UInt::new(lo), UInt::new(hi))
}

/// Montgomery square of an element.
#[inline(always)]
pub const fn mont_square<const LIMBS: usize>(
    uint: &UInt<LIMBS>,
    modulus: &UInt<LIMBS>,
    inv: Limb,
) -> UInt<LIMBS> {
    let (lo, hi) = square_wide(uint);
    mont_reduce(lo, hi, modulus, inv)
}

/// Left-to-right binary exponentiation ladder. Variable time with respect
/// to the exponent only; every exponent in this crate is a fixed public
/// constant.
pub const fn mont_pow_vartime<const LIMBS: usize, const T: usize>(
    uint: &UInt<LIMBS>,
    by: &[u64; T],
    r: &UInt<LIMBS>,
    modulus: &UInt<LIMBS>,
    inv: Limb,
) -> UInt<LIMBS> {
    let mut res = *r;
    let mut i = T - 1;
    loop {
        let mut j = 63;
        loop {
            res = mont_square(&res, modulus, inv);
            if ((by[i] >> j) & 1) == 1 {
                res = mont_mul(&res, uint, modulus, inv);
            }
            if j == 0 {
                break;
            }
            j -= 1;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }
    res
}

/// Subtracts the modulus if `uint` is no smaller than it, in constant time.
#[inline(always)]
pub const fn reduce_once<const LIMBS: usize>(
    uint: &UInt<LIMBS>,
    modulus: &UInt<LIMBS>,
) -> UInt<LIMBS> {
    let (sub, borrow) = uint.sbb(modulus, Limb::ZERO);
    let mut i = 0;
    let mut res = sub.to_words();
    let prev = uint.as_words();

    while i < LIMBS {
        // If the subtraction underflowed, borrow = 0xfff...fff and the
        // original words are kept; otherwise borrow = 0 and the reduced
        // words are kept.
        res[i] = (prev[i] & borrow.0) | (res[i] & !borrow.0);
        i += 1;
    }

    UInt::from_words(res)
}

macro_rules! impl_add_binop_specify_output {
    ($lhs:ident, $rhs:ident, $output:ident) => {
        impl<'b> Add<&'b $rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn add(self, rhs: &'b $rhs) -> $output {
                &self + rhs
            }
        }

        impl<'a> Add<$rhs> for &'a $lhs {
            type Output = $output;

            #[inline]
            fn add(self, rhs: $rhs) -> $output {
                self + &rhs
            }
        }

        impl Add<$rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn add(self, rhs: $rhs) -> $output {
                &self + &rhs
            }
        }
    };
}

macro_rules! impl_sub_binop_specify_output {
    ($lhs:ident, $rhs:ident, $output:ident) => {
        impl<'b> Sub<&'b $rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn sub(self, rhs: &'b $rhs) -> $output {
                &self - rhs
            }
        }

        impl<'a> Sub<$rhs> for &'a $lhs {
            type Output = $output;

            #[inline]
            fn sub(self, rhs: $rhs) -> $output {
                self - &rhs
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn sub(self, rhs: $rhs) -> $output {
                &self - &rhs
            }
        }
    };
}

macro_rules! impl_binops_additive_specify_output {
    ($lhs:ident, $rhs:ident, $output:ident) => {
        impl_add_binop_specify_output!($lhs, $rhs, $output);
        impl_sub_binop_specify_output!($lhs, $rhs, $output);
    };
}

macro_rules! impl_binops_multiplicative_mixed {
    ($lhs:ident, $rhs:ident, $output:ident) => {
        impl<'b> Mul<&'b $rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn mul(self, rhs: &'b $rhs) -> $output {
                &self * rhs
            }
        }

        impl<'a> Mul<$rhs> for &'a $lhs {
            type Output = $output;

            #[inline]
            fn mul(self, rhs: $rhs) -> $output {
                self * &rhs
            }
        }

        impl Mul<$rhs> for $lhs {
            type Output = $output;

            #[inline]
            fn mul(self, rhs: $rhs) -> $output {
                &self * &rhs
            }
        }
    };
}

macro_rules! impl_binops_additive {
    ($lhs:ident, $rhs:ident) => {
        impl_binops_additive_specify_output!($lhs, $rhs, $lhs);

        impl SubAssign<$rhs> for $lhs {
            #[inline]
            fn sub_assign(&mut self, rhs: $rhs) {
                *self = &*self - &rhs;
            }
        }

        impl AddAssign<$rhs> for $lhs {
            #[inline]
            fn add_assign(&mut self, rhs: $rhs) {
                *self = &*self + &rhs;
            }
        }

        impl<'b> SubAssign<&'b $rhs> for $lhs {
            #[inline]
            fn sub_assign(&mut self, rhs: &'b $rhs) {
                *self = &*self - rhs;
            }
        }

        impl<'b> AddAssign<&'b $rhs> for $lhs {
            #[inline]
            fn add_assign(&mut self, rhs: &'b $rhs) {
                *self = &*self + rhs;
            }
        }
    };
}

macro_rules! impl_binops_multiplicative {
    ($lhs:ident, $rhs:ident) => {
        impl_binops_multiplicative_mixed!($lhs, $rhs, $lhs);

        impl MulAssign<$rhs> for $lhs {
            #[inline]
            fn mul_assign(&mut self, rhs: $rhs) {
                *self = &*self * &rhs;
            }
        }

        impl<'b> MulAssign<&'b $rhs> for $lhs {
            #[inline]
            fn mul_assign(&mut self, rhs: &'b $rhs) {
                *self = &*self * rhs;
            }
        }
    };
}
