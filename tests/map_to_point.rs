use bn254_map2curve::map_to_curve::MODULUS;
use bn254_map2curve::{sswu_map_to_point, svdw_map_to_point, Error, Fp};
use rand_core::SeedableRng;
use rand_xorshift::XorShiftRng;

const SEED: [u8; 16] = [
    0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
    0xe5,
];

// u = 7105195380181880595384217009108718366423089053558315283835256316808390512725
const U: [u64; 4] = [
    0x6c50_b00f_9b20_1055,
    0x2723_4c83_c966_2673,
    0x3622_733f_c2c3_f59d,
    0x0fb5_65e8_0f60_689b,
];

#[test]
fn test_svdw_vector() {
    let x = Fp::from_raw([
        0xf5a0_3408_888f_102c,
        0x727b_caef_4008_0926,
        0xbfee_80bf_d3a5_dd05,
        0x22bc_b10d_8205_6d3b,
    ]);
    let y = Fp::from_raw([
        0x3884_c6f5_fa69_5535,
        0x6916_873c_ea0d_a29d,
        0x1c1e_98db_1a08_8158,
        0x1b29_be32_368e_4bf0,
    ]);

    let p = svdw_map_to_point(&Fp::from_raw(U).to_bytes()).unwrap();
    assert_eq!(p.x(), x);
    assert_eq!(p.y(), y);
}

#[test]
fn test_sswu_vector() {
    let x = Fp::from_raw([
        0x794a_27a9_5237_5e40,
        0x79f0_7860_885e_469e,
        0x8ce7_2fd6_e998_fe56,
        0x106f_1137_c8c6_812e,
    ]);
    let y = Fp::from_raw([
        0x324d_51ec_2404_e48c,
        0xf89a_b4ca_2a42_8e5f,
        0xaa4f_420a_902f_3e17,
        0x0763_2277_eae4_23d2,
    ]);

    let p = sswu_map_to_point(&Fp::from_raw(U).to_bytes()).unwrap();
    assert_eq!(p.x(), x);
    assert_eq!(p.y(), y);
}

#[test]
fn test_boundary_inputs() {
    // Zero and p - 1 map fine; p and 2^256 - 1 are rejected.
    let zero = [0u8; 32];
    assert!(bool::from(svdw_map_to_point(&zero).unwrap().is_on_curve()));
    assert!(bool::from(sswu_map_to_point(&zero).unwrap().is_on_curve()));

    let pm1 = (-Fp::one()).to_bytes();
    assert!(bool::from(svdw_map_to_point(&pm1).unwrap().is_on_curve()));
    assert!(bool::from(sswu_map_to_point(&pm1).unwrap().is_on_curve()));

    assert_eq!(
        svdw_map_to_point(&MODULUS),
        Err(Error::InvalidFieldElement(MODULUS))
    );
    assert_eq!(
        sswu_map_to_point(&MODULUS),
        Err(Error::InvalidFieldElement(MODULUS))
    );
    assert_eq!(
        svdw_map_to_point(&[0xff; 32]),
        Err(Error::InvalidFieldElement([0xff; 32]))
    );
    assert_eq!(
        sswu_map_to_point(&[0xff; 32]),
        Err(Error::InvalidFieldElement([0xff; 32]))
    );
}

#[test]
fn test_cross_map_properties() {
    let mut rng = XorShiftRng::from_seed(SEED);
    for _ in 0..64 {
        let u = Fp::random(&mut rng).to_bytes();

        let p1 = svdw_map_to_point(&u).unwrap();
        let p2 = sswu_map_to_point(&u).unwrap();

        // Both maps land on E, but on independent points.
        assert!(bool::from(p1.is_on_curve()));
        assert!(bool::from(p2.is_on_curve()));
        assert_ne!(p1, p2);
    }
}

#[test]
fn test_determinism() {
    let mut rng = XorShiftRng::from_seed(SEED);
    for _ in 0..8 {
        let u = Fp::random(&mut rng).to_bytes();

        let a = svdw_map_to_point(&u).unwrap().to_uncompressed();
        let b = svdw_map_to_point(&u).unwrap().to_uncompressed();
        assert_eq!(a, b);

        let a = sswu_map_to_point(&u).unwrap().to_uncompressed();
        let b = sswu_map_to_point(&u).unwrap().to_uncompressed();
        assert_eq!(a, b);
    }
}
