use softneon_core::types::Float16;

#[test]
fn test_from_f32_exact_values() {
    let three = Float16::from_f32(3.0);
    assert_eq!(three.to_f32(), 3.0f32);
    assert_eq!(three.to_bits(), 0x4200);

    assert_eq!(Float16::from_f32(1.0).to_bits(), Float16::ONE.to_bits());
    assert_eq!(Float16::from_f32(-2.0).to_bits(), 0xc000);
    assert_eq!(Float16::from_f32(65504.0).to_bits(), Float16::MAX.to_bits());
    assert_eq!(Float16::from_f32(0.5).to_bits(), 0x3800);
}

#[test]
fn test_bit_fields() {
    let v = Float16::from_f32(-1.5);
    assert!(v.sign());
    assert_eq!(v.exponent(), 15);
    assert_eq!(v.fraction(), 0x200);
    assert_eq!(Float16::from_parts(true, 15, 0x200).to_bits(), v.to_bits());

    let sub = Float16::from_bits(0x0001);
    assert!(!sub.sign());
    assert_eq!(sub.exponent(), 0);
    assert_eq!(sub.fraction(), 1);
}

#[test]
fn test_subnormals() {
    assert_eq!(Float16::from_bits(0x0001).to_f32(), 2f32.powi(-24));
    assert_eq!(Float16::from_bits(0x0200).to_f32(), 2f32.powi(-15));
    assert_eq!(Float16::from_bits(0x03ff).to_f32(), 1023.0 * 2f32.powi(-24));
    assert_eq!(Float16::from_f32(2f32.powi(-24)).to_bits(), 0x0001);
    assert_eq!(Float16::MIN_POSITIVE.to_f32(), 2f32.powi(-14));
}

#[test]
fn test_rounding() {
    // halfway between 1.0 and the next value rounds to even (1.0)
    assert_eq!(Float16::from_f32(1.0 + 2f32.powi(-11)).to_bits(), 0x3c00);
    // halfway above an odd fraction rounds up to even
    assert_eq!(Float16::from_f32(1.0 + 3.0 * 2f32.powi(-11)).to_bits(), 0x3c02);
    // just above halfway rounds up
    assert_eq!(Float16::from_f32(1.0 + 2f32.powi(-11) + 2f32.powi(-20)).to_bits(), 0x3c01);
    // half of the smallest subnormal ties to zero, anything above rounds up
    assert_eq!(Float16::from_f32(2f32.powi(-25)).to_bits(), 0x0000);
    assert_eq!(Float16::from_f32(1.5 * 2f32.powi(-25)).to_bits(), 0x0001);
    // rounding the largest subnormal up carries into the exponent
    assert_eq!(Float16::from_f32(2f32.powi(-14) - 2f32.powi(-26)).to_bits(), 0x0400);
}

#[test]
fn test_overflow_and_specials() {
    assert_eq!(Float16::from_f32(65520.0).to_bits(), Float16::INFINITY.to_bits());
    assert_eq!(Float16::from_f32(1.0e10).to_bits(), Float16::INFINITY.to_bits());
    assert_eq!(Float16::from_f32(-1.0e10).to_bits(), Float16::NEG_INFINITY.to_bits());
    assert_eq!(Float16::from_f32(1.0e-10).to_bits(), Float16::ZERO.to_bits());
    assert_eq!(Float16::from_f32(-0.0).to_bits(), Float16::NEG_ZERO.to_bits());
    assert!(Float16::from_f32(f32::NAN).is_nan());
    assert!(Float16::INFINITY.is_infinite());
    assert!(!Float16::MAX.is_infinite());
    assert_eq!(Float16::INFINITY.to_f32(), f32::INFINITY);
    assert!(Float16::NAN.to_f32().is_nan());
}

#[test]
fn test_equality_follows_f32() {
    let a = Float16::from_f32(3.0);
    let b = Float16::from_f32(3.0);
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);

    // differently encoded zeros are equal
    assert_eq!(Float16::ZERO, Float16::NEG_ZERO);
    assert_ne!(Float16::ZERO.to_bits(), Float16::NEG_ZERO.to_bits());

    // NaN never equals itself
    assert_ne!(Float16::NAN, Float16::NAN);
    assert_ne!(Float16::from_bits(0x7c01), Float16::from_bits(0x7c01));

    assert!(Float16::from_f32(1.0) < Float16::from_f32(2.0));
    assert!(Float16::NAN.partial_cmp(&Float16::ONE).is_none());
}

#[test]
fn test_arithmetic() {
    let a = Float16::from_f32(1.5);
    let b = Float16::from_f32(2.25);
    assert_eq!((a + b).to_f32(), 3.75);
    assert_eq!((a - b).to_f32(), -0.75);
    assert_eq!((-a).to_f32(), -1.5);
    assert_eq!(Float16::from_f32(-7.0).abs().to_f32(), 7.0);
    assert_eq!(Float16::MAX + Float16::MAX, Float16::INFINITY);
}

#[test]
fn test_to_f32_matches_half_for_every_pattern() {
    for bits in 0..=u16::MAX {
        let ours = Float16::from_bits(bits).to_f32();
        let reference = half::f16::from_bits(bits).to_f32();
        if reference.is_nan() {
            assert!(ours.is_nan(), "bits {bits:#06x}");
        } else {
            assert_eq!(ours.to_bits(), reference.to_bits(), "bits {bits:#06x}");
        }
    }
}

#[test]
fn test_from_f32_matches_half() {
    // sweep the full binary16 exponent range with dense fraction patterns
    let mut x = 0x3000_0000u32;
    while x < 0x4800_0000 {
        for v in [f32::from_bits(x), -f32::from_bits(x)] {
            let ours = Float16::from_f32(v);
            let reference = half::f16::from_f32(v);
            assert_eq!(ours.to_bits(), reference.to_bits(), "value {v:e}");
        }
        x += 0x0000_0fff;
    }
}

#[test]
fn test_from_f64_agrees_with_f32_path() {
    // values exactly representable in f32 must round identically either way
    let mut x = 0x3000_0000u32;
    while x < 0x4800_0000 {
        let v = f32::from_bits(x);
        assert_eq!(
            Float16::from_f64(v as f64).to_bits(),
            Float16::from_f32(v).to_bits(),
            "value {v:e}"
        );
        x += 0x0000_1fff;
    }
    assert!(Float16::from_f64(f64::NAN).is_nan());
    assert_eq!(Float16::from_f64(f64::NEG_INFINITY).to_bits(), Float16::NEG_INFINITY.to_bits());
}

#[test]
fn test_from_f64_single_rounding() {
    // 1 + 2^-11 + 2^-40 rounds up directly but ties to even after an f32 step
    let v = 1.0f64 + 2f64.powi(-11) + 2f64.powi(-40);
    assert_eq!(Float16::from_f64(v).to_bits(), 0x3c01);
    assert_eq!(Float16::from_f32(v as f32).to_bits(), 0x3c00);
}
