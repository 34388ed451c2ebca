//! The simplified SWU map (RFC 9380 section 6.6.3) for BN254.
//!
//! Since the curve coefficient A of `E` is zero, the map is evaluated on
//! the auxiliary curve `E': y^2 = x^3 + A' x + B'` with Z = -13, and the
//! resulting point is carried to `E` by the degree-59 isogeny in
//! [`super::iso`].

use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

use super::iso::iso_map;
use super::Error;
use crate::fp::Fp;
use crate::point::AffinePoint;

/// A' of the auxiliary curve,
/// 9087994317191712533568698403530528306233527979934880849865820425505218365052.
pub const SSWU_ELLP_A: Fp = Fp::from_raw_unchecked([
    0xefd4afd952ca7b21,
    0xb4c6ce85a3d90713,
    0x84551649ee41c99a,
    0x10b46917737e0d7d,
]);

/// B' of the auxiliary curve,
/// 3059101143800926337153883959975852125336293569895750485959800095292563537400.
pub const SSWU_ELLP_B: Fp = Fp::from_raw_unchecked([
    0x3c0bfb4cf445a239,
    0x9b870f795ed7c2c7,
    0xd182aa14f7b03c72,
    0x2d0013d0c8cc9130,
]);

/// Z = -13, the non-square shifting constant of the map.
pub const SSWU_XI: Fp = Fp::from_raw_unchecked([
    0x34c5c22859b04423,
    0xd5e1b93126ab9811,
    0xada2ca30e7dcd139,
    0x0b0924f6b2602b3e,
]);

/// sqrt(-Z), fixed as the root produced by exponentiation by (p + 1) / 4.
const SQRT_M_XI: Fp = Fp::from_raw_unchecked([
    0xe20d91d54c616de1,
    0xf1c60cfb2cfd0fdc,
    0x51ec842d5a1217af,
    0x1cc36baaaec9192e,
]);

/// (p - 3) / 4, the exponent of the sqrt_ratio candidate computation.
const SQRT_RATIO_EXP: [u64; 4] = [
    0x4f082305b61f3f51,
    0x65e05aa45a1c72a3,
    0x6e14116da0605617,
    0x0c19139cb84c680a,
];

/// Computes (isQR, y) with y^2 * v = u when u/v is square, and
/// y^2 * v = Z u otherwise (RFC 9380 F.2.1.2, specialized to
/// p = 3 mod 4).
fn sqrt_ratio_3mod4(u: &Fp, v: &Fp) -> (Choice, Fp) {
    let tv1 = v.square();
    let tv2 = *u * v;
    let tv1 = tv1 * tv2;
    let y1 = tv1.pow_vartime(&SQRT_RATIO_EXP) * tv2;
    let y2 = y1 * SQRT_M_XI;
    let tv3 = y1.square() * v;
    let is_qr = tv3.ct_eq(u);
    (is_qr, Fp::conditional_select(&y2, &y1, is_qr))
}

/// The straight-line simplified SWU body, producing a point of `E'`
/// whose y-sign agrees with sgn0(u).
fn map_to_curve_simple_swu(u: &Fp) -> Result<(Fp, Fp), Error> {
    let tv1 = SSWU_XI * u.square();
    let tv2 = tv1.square() + tv1;
    let tv3 = SSWU_ELLP_B * (tv2 + Fp::one());
    // tv2 = 0 only for u = 0 and u^2 = -1/Z; fall back to Z there.
    let tv4 = SSWU_ELLP_A * Fp::conditional_select(&(-tv2), &SSWU_XI, tv2.is_zero());

    // g(x1) expressed over the common denominator tv4:
    // tv2 = tv3^3 + A tv3 tv4^2 + B tv4^3, tv6 = tv4^3.
    let tv2 = tv3.square();
    let tv6 = tv4.square();
    let tv5 = SSWU_ELLP_A * tv6;
    let tv2 = (tv2 + tv5) * tv3;
    let tv6 = tv6 * tv4;
    let tv5 = SSWU_ELLP_B * tv6;
    let tv2 = tv2 + tv5;

    let x_num = tv1 * tv3;
    let (is_gx1_square, y1) = sqrt_ratio_3mod4(&tv2, &tv6);
    let y_cand = tv1 * u * y1;

    let x_num = Fp::conditional_select(&x_num, &tv3, is_gx1_square);
    let mut y = Fp::conditional_select(&y_cand, &y1, is_gx1_square);
    // Ensure sign of y and sign of u agree.
    y.conditional_negate(u.sgn0() ^ y.sgn0());

    // tv4 = A' * (-tv2 or Z) is never zero, so this inversion cannot
    // fail; surface the witness rather than divide blind.
    let tv4_inv = tv4.invert();
    if bool::from(tv4_inv.is_none()) {
        return Err(Error::MapToPointFailed(tv4));
    }
    let x = x_num * tv4_inv.unwrap_or(Fp::zero());

    Ok((x, y))
}

/// Maps a field element to a point of `E` with the simplified SWU map
/// composed with the degree-59 isogeny.
pub fn map_to_curve_sswu(u: &Fp) -> Result<AffinePoint, Error> {
    let (x, y) = map_to_curve_simple_swu(u)?;
    iso_map(&x, &y)
}

#[cfg(test)]
fn check_e_prime(x: &Fp, y: &Fp) -> bool {
    // (x, y) is on E': y^2 = x^3 + A' x + B'.
    y.square() == x.square() * x + SSWU_ELLP_A * x + SSWU_ELLP_B
}

#[test]
fn test_simple_swu_expected() {
    let u = Fp::from_raw([
        0x6c50_b00f_9b20_1055,
        0x2723_4c83_c966_2673,
        0x3622_733f_c2c3_f59d,
        0x0fb5_65e8_0f60_689b,
    ]);
    let xo = Fp::from_raw([
        0xf604_db72_f9a1_218c,
        0x4eec_e82e_09dc_38e5,
        0x696e_6599_bd7e_7cb4,
        0x275d_64c9_e74c_59ca,
    ]);
    let yo = Fp::from_raw([
        0xbea2_b455_90b1_d711,
        0x3085_1c1a_674c_f3ce,
        0xda21_3271_244f_fdc5,
        0x2221_0a47_daec_18bc,
    ]);

    let (x, y) = map_to_curve_simple_swu(&u).unwrap();
    assert_eq!(x, xo);
    assert_eq!(y, yo);
    assert!(check_e_prime(&x, &y));
}

#[test]
fn test_simple_swu_zero() {
    // The exceptional case tv2 = 0.
    let (x, y) = map_to_curve_simple_swu(&Fp::zero()).unwrap();
    assert!(check_e_prime(&x, &y));
    assert!(!bool::from(y.sgn0()));
}

#[test]
fn test_sswu_expected() {
    let u = Fp::from_raw([
        0x6c50_b00f_9b20_1055,
        0x2723_4c83_c966_2673,
        0x3622_733f_c2c3_f59d,
        0x0fb5_65e8_0f60_689b,
    ]);
    let xo = Fp::from_raw([
        0x794a_27a9_5237_5e40,
        0x79f0_7860_885e_469e,
        0x8ce7_2fd6_e998_fe56,
        0x106f_1137_c8c6_812e,
    ]);
    let yo = Fp::from_raw([
        0x324d_51ec_2404_e48c,
        0xf89a_b4ca_2a42_8e5f,
        0xaa4f_420a_902f_3e17,
        0x0763_2277_eae4_23d2,
    ]);

    let p = map_to_curve_sswu(&u).unwrap();
    assert_eq!(p.x(), xo);
    assert_eq!(p.y(), yo);
    assert!(bool::from(p.is_on_curve()));
}

#[test]
fn test_osswu_semirandom() {
    use rand_core::SeedableRng;
    let mut rng = rand_xorshift::XorShiftRng::from_seed([
        0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
        0xe5,
    ]);
    for _ in 0..32 {
        let u = Fp::random(&mut rng);
        let (x, y) = map_to_curve_simple_swu(&u).unwrap();
        assert!(check_e_prime(&x, &y));
        // The sign convention is enforced on E', ahead of the isogeny.
        assert_eq!(bool::from(y.sgn0()), bool::from(u.sgn0()));

        let p = iso_map(&x, &y).unwrap();
        assert!(bool::from(p.is_on_curve()));
    }
}
