use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InOut,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_fixed() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-1.0), 0.0);
    assert_eq!(Ease::Linear.apply(2.0), 1.0);
    assert!((Ease::InOut.apply(5.0) - 1.0).abs() < 1e-6);
}

#[test]
fn ease_in_out_is_symmetric_and_monotonic() {
    assert!((Ease::InOut.apply(0.5) - 0.5).abs() < 1e-4);
    let a = Ease::InOut.apply(0.25);
    let b = Ease::InOut.apply(0.75);
    assert!((a + b - 1.0).abs() < 1e-4);
    // slow start
    assert!(a < 0.25);

    let mut prev = 0.0;
    for i in 1..=100 {
        let v = Ease::InOut.apply(f64::from(i) / 100.0);
        assert!(v >= prev - 1e-9);
        prev = v;
    }
}

#[test]
fn default_is_css_ease_in_out() {
    assert_eq!(Ease::default(), Ease::InOut);
    assert_eq!(Ease::default().css_timing_function(), "ease-in-out");
    assert_eq!(Ease::Linear.css_timing_function(), "linear");
}

#[test]
fn serde_uses_variant_names() {
    let json = serde_json::to_string(&Ease::InOutCubic).unwrap();
    assert_eq!(json, "\"InOutCubic\"");
    let back: Ease = serde_json::from_str("\"InOut\"").unwrap();
    assert_eq!(back, Ease::InOut);
}
