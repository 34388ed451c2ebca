//! The Shallue-van de Woestijne map for BN254, specialized to the
//! parameters A = 0, B = 3, Z = 1 (RFC 9380 section 6.6.1).

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use super::Error;
use crate::fp::Fp;
use crate::point::{AffinePoint, B};

/// c1 = g(Z) = Z^3 + 3 = 4
pub const SVDW_C1: Fp = Fp::from_raw_unchecked([
    0x115482203dbf392d,
    0x926242126eaa626a,
    0xe16a48076063c052,
    0x07c5909386eddc93,
]);

/// c2 = -Z / 2
pub const SVDW_C2: Fp = Fp::from_raw_unchecked([
    0xb461a4448976f7d5,
    0xc6843fb439555fa7,
    0x28f0d12384840918,
    0x112ceb58a394e07d,
]);

/// c3 = sqrt(-g(Z) * (3 Z^2 + 4 A)) = sqrt(-12), with sgn0(c3) = 0
pub const SVDW_C3: Fp = Fp::from_raw_unchecked([
    0x7c8487078735ab72,
    0x51da7e0048bfb8d4,
    0x945cfd183cbd7bf4,
    0x0b70b1ec48ae62c6,
]);

/// c4 = -4 g(Z) / (3 Z^2 + 4 A) = -16/3
pub const SVDW_C4: Fp = Fp::from_raw_unchecked([
    0xa79a2bdca0800831,
    0x19fd7617e49815a1,
    0xbb8d0c885550c7b1,
    0x05c4aeb6ec7e0f48,
]);

/// g(x) = x^3 + 3, the right-hand side of the curve equation.
#[inline]
fn g(x: &Fp) -> Fp {
    x.square() * x + B
}

/// The Legendre symbol must come out as 1 or -1 here; g never
/// vanishes on the candidates because the group order is odd.
#[inline]
fn symbol_is_valid(l: &Fp) -> Choice {
    l.ct_eq(&Fp::one()) | l.ct_eq(&-Fp::one())
}

/// Maps a field element to a point of `E` with the Shallue-van de
/// Woestijne map.
///
/// All three candidate abscissas and their Legendre symbols are
/// evaluated unconditionally and the winner is picked by
/// conditional-select, so the sequence of field operations does not
/// depend on `u`.
pub fn map_to_curve_svdw(u: &Fp) -> Result<AffinePoint, Error> {
    let tv1 = u.square() * SVDW_C1;
    let tv2 = Fp::one() + tv1;
    let tv1 = Fp::one() - tv1;
    // tv1 * tv2 = 1 - c1^2 u^4 vanishes only at u = +-1/2; the
    // invert-or-zero there degenerates tv5 to zero and the map lands
    // on x1 = c2, which is a valid abscissa.
    let tv3 = (tv1 * tv2).invert0();
    let tv5 = *u * tv1 * tv3 * SVDW_C3;

    let x1 = SVDW_C2 - tv5;
    let x2 = SVDW_C2 + tv5;
    let tv7 = tv2.square() * tv3;
    let x3 = Fp::one() + SVDW_C4 * tv7.square();

    let gx1 = g(&x1);
    let gx2 = g(&x2);
    let gx3 = g(&x3);

    let l1 = gx1.legendre();
    let l2 = gx2.legendre();
    let l3 = gx3.legendre();

    if !bool::from(symbol_is_valid(&l1)) {
        return Err(Error::MapToPointFailed(gx1));
    }
    if !bool::from(symbol_is_valid(&l2)) {
        return Err(Error::MapToPointFailed(gx2));
    }
    if !bool::from(symbol_is_valid(&l3)) {
        return Err(Error::MapToPointFailed(gx3));
    }

    // Select the first square g(x_i), in the order x1, x2, x3.
    let e1 = l1.ct_eq(&Fp::one());
    let e2 = l2.ct_eq(&Fp::one()) & !e1;

    let mut x = Fp::conditional_select(&x3, &x2, e2);
    x = Fp::conditional_select(&x, &x1, e1);
    let mut gx = Fp::conditional_select(&gx3, &gx2, e2);
    gx = Fp::conditional_select(&gx, &gx1, e1);

    let y = gx.sqrt();
    if bool::from(y.is_none()) {
        return Err(Error::MapToPointFailed(gx));
    }
    let mut y = y.unwrap_or(Fp::zero());

    // Ensure sign of y and sign of u agree.
    y.conditional_negate(y.sgn0() ^ u.sgn0());

    Ok(AffinePoint { x, y })
}

#[test]
fn test_svdw_expected() {
    let u = Fp::from_raw([
        0x6c50_b00f_9b20_1055,
        0x2723_4c83_c966_2673,
        0x3622_733f_c2c3_f59d,
        0x0fb5_65e8_0f60_689b,
    ]);
    let xo = Fp::from_raw([
        0xf5a0_3408_888f_102c,
        0x727b_caef_4008_0926,
        0xbfee_80bf_d3a5_dd05,
        0x22bc_b10d_8205_6d3b,
    ]);
    let yo = Fp::from_raw([
        0x3884_c6f5_fa69_5535,
        0x6916_873c_ea0d_a29d,
        0x1c1e_98db_1a08_8158,
        0x1b29_be32_368e_4bf0,
    ]);

    let p = map_to_curve_svdw(&u).unwrap();
    assert_eq!(p.x(), xo);
    assert_eq!(p.y(), yo);
    assert!(bool::from(p.is_on_curve()));
}

#[test]
fn test_svdw_zero() {
    let p = map_to_curve_svdw(&Fp::zero()).unwrap();
    let xo = Fp::from_raw([
        0x9e10_460b_6c3e_7ea3,
        0xcbc0_b548_b438_e546,
        0xdc28_22db_40c0_ac2e,
        0x1832_2739_7098_d014,
    ]);
    let yo = Fp::from_raw([
        0x520e_a369_34e8_77b4,
        0xb4aa_d542_eacc_b013,
        0xfe2c_d1f0_8c06_5a2a,
        0x0a6e_a289_876b_139c,
    ]);
    assert_eq!(p.x(), xo);
    assert_eq!(p.y(), yo);
    assert!(bool::from(p.is_on_curve()));
    assert!(!bool::from(p.y().sgn0()));
}

#[test]
fn test_svdw_minus_one() {
    // u = p - 1, the largest canonical input; sgn0(u) = 0 since p is odd.
    let u = -Fp::one();
    let p = map_to_curve_svdw(&u).unwrap();
    assert!(bool::from(p.is_on_curve()));
    assert_eq!(bool::from(p.y().sgn0()), bool::from(u.sgn0()));
}

#[test]
fn test_svdw_exceptional() {
    // u = +-1/2 zeroes tv1 * tv2; the map must still land on the curve,
    // degenerating to x = c2.
    let half = Fp::from_raw([2, 0, 0, 0]).invert().unwrap();
    for u in [half, -half] {
        let p = map_to_curve_svdw(&u).unwrap();
        assert_eq!(p.x(), SVDW_C2);
        assert!(bool::from(p.is_on_curve()));
        assert_eq!(bool::from(p.y().sgn0()), bool::from(u.sgn0()));
    }
}

#[test]
fn test_svdw_semirandom() {
    use rand_core::SeedableRng;
    let mut rng = rand_xorshift::XorShiftRng::from_seed([
        0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
        0xe5,
    ]);
    for _ in 0..32 {
        let u = Fp::random(&mut rng);
        let p = map_to_curve_svdw(&u).unwrap();
        assert!(bool::from(p.is_on_curve()));
        assert_eq!(bool::from(p.y().sgn0()), bool::from(u.sgn0()));
        assert_eq!(map_to_curve_svdw(&u).unwrap(), p);
    }
}
