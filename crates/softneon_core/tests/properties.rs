//! Property tests for the lane operations, checked against scalar references.

use proptest::prelude::*;
use softneon_core::prelude::*;

proptest! {
    #[test]
    fn vabd_is_symmetric(a in any::<[i32; 4]>(), b in any::<[i32; 4]>()) {
        let (a, b) = (Int32x4::new(a), Int32x4::new(b));
        prop_assert_eq!(vabd(&a, &b), vabd(&b, &a));
    }

    #[test]
    fn vabd_matches_wide_difference(a in any::<[i8; 16]>(), b in any::<[i8; 16]>()) {
        let r = vabd(&Int8x16::new(a), &Int8x16::new(b));
        for i in 0..16 {
            let expected = (a[i] as i16 - b[i] as i16).unsigned_abs() as u8;
            prop_assert_eq!(r[i] as u8, expected);
        }
    }

    #[test]
    fn vadd_is_commutative(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
        let (a, b) = (Uint8x16::new(a), Uint8x16::new(b));
        prop_assert_eq!(vadd(&a, &b), vadd(&b, &a));
    }

    #[test]
    fn vadd_f32_matches_scalar(a in any::<[f32; 2]>(), b in any::<[f32; 2]>()) {
        let r = vadd(&Float32x2::new(a), &Float32x2::new(b));
        for i in 0..2 {
            let expected = a[i] + b[i];
            prop_assert!(r[i] == expected || (r[i].is_nan() && expected.is_nan()));
        }
    }

    #[test]
    fn vaddl_never_overflows(a in any::<[u16; 4]>(), b in any::<[u16; 4]>()) {
        let r = vaddl(&Uint16x4::new(a), &Uint16x4::new(b));
        for i in 0..4 {
            prop_assert_eq!(r[i], a[i] as u32 + b[i] as u32);
        }
    }

    #[test]
    fn vaddw_matches_widened_vaddl(a in any::<[i16; 4]>(), b in any::<[i16; 4]>()) {
        let (a, b) = (Int16x4::new(a), Int16x4::new(b));
        let widened = Int32x4::from_fn(|i| a[i] as i32);
        prop_assert_eq!(vaddw(&widened, &b), vaddl(&a, &b));
    }

    #[test]
    fn vaddhn_keeps_low_half_of_sum(a in any::<[u32; 4]>(), b in any::<[u32; 4]>()) {
        let r = vaddhn(&Uint32x4::new(a), &Uint32x4::new(b));
        for i in 0..4 {
            prop_assert_eq!(r[i], a[i].wrapping_add(b[i]) as u16);
        }
    }

    #[test]
    fn vaddv_matches_wrapping_sum(a in any::<[u8; 16]>()) {
        let expected = a.iter().fold(0u8, |acc, &x| acc.wrapping_add(x));
        prop_assert_eq!(vaddv(&Uint8x16::new(a)), expected);
    }

    #[test]
    fn vbsl_matches_bit_formula(m in any::<[u64; 2]>(), a in any::<[u64; 2]>(), b in any::<[u64; 2]>()) {
        let r = vbsl(&Uint64x2::new(m), &Uint64x2::new(a), &Uint64x2::new(b));
        for i in 0..2 {
            prop_assert_eq!(r[i], (m[i] & a[i]) | (!m[i] & b[i]));
        }
    }

    #[test]
    fn vbcax_matches_bit_formula(n in any::<[i16; 8]>(), m in any::<[i16; 8]>(), a in any::<[i16; 8]>()) {
        let r = vbcax(&Int16x8::new(n), &Int16x8::new(m), &Int16x8::new(a));
        for i in 0..8 {
            prop_assert_eq!(r[i], n[i] ^ (m[i] & !a[i]));
        }
    }

    #[test]
    fn comparisons_partition_ordered_lanes(a in any::<[i32; 4]>(), b in any::<[i32; 4]>()) {
        let (a, b) = (Int32x4::new(a), Int32x4::new(b));
        let (lt, eq, gt) = (vclt(&a, &b), vceq(&a, &b), vcgt(&a, &b));
        for i in 0..4 {
            prop_assert_eq!(lt[i] ^ eq[i] ^ gt[i], u32::MAX);
            prop_assert_eq!(vcle(&a, &b)[i], lt[i] | eq[i]);
            prop_assert_eq!(vcge(&a, &b)[i], gt[i] | eq[i]);
        }
    }

    #[test]
    fn vcvt_matches_as_casts(a in any::<[f32; 4]>()) {
        let r = vcvt::<i32, _>(&Float32x4::new(a));
        let u = vcvt::<u32, _>(&Float32x4::new(a));
        for i in 0..4 {
            prop_assert_eq!(r[i], a[i] as i32);
            prop_assert_eq!(u[i], a[i] as u32);
        }
    }

    #[test]
    fn float16_from_f32_matches_half(bits in any::<u32>()) {
        let x = f32::from_bits(bits);
        prop_assume!(!x.is_nan());
        prop_assert_eq!(Float16::from_f32(x).to_bits(), half::f16::from_f32(x).to_bits());
    }

    #[test]
    fn register_bits_are_width_agnostic(bits in any::<u128>()) {
        let v = Uint32x4::from_bits(bits);
        prop_assert_eq!(v.reinterpret::<u8>().to_bits(), bits);
        prop_assert_eq!(v.reinterpret::<f64>().reinterpret::<u32>(), v);
    }
}
