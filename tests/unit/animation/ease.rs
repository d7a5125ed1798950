use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutExpo,
    Ease::SPRING_BACK,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in &ALL[..8] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn elastic_overshoots_before_settling() {
    let peak = (1..100)
        .map(|i| Ease::SPRING_BACK.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(Ease::OutExpo.apply(-3.0), 0.0);
    assert_eq!(Ease::OutExpo.apply(7.0), 1.0);
}

#[test]
fn parse_accepts_web_spellings() {
    assert_eq!(Ease::parse("easeOutExpo").unwrap(), Ease::OutExpo);
    assert_eq!(Ease::parse("out-quad").unwrap(), Ease::OutQuad);
    assert_eq!(
        Ease::parse("easeOutElastic(1, .5)").unwrap(),
        Ease::OutElastic {
            amplitude: 1.0,
            period: 0.5
        }
    );
    assert_eq!(Ease::parse("easeOutElastic").unwrap(), Ease::SPRING_BACK);
}

#[test]
fn parse_rejects_unknown_names_and_stray_args() {
    assert!(Ease::parse("").is_err());
    assert!(Ease::parse("bounce").is_err());
    assert!(Ease::parse("linear(2)").is_err());
    assert!(Ease::parse("easeOutElastic(1, .5").is_err());
    assert!(Ease::parse("easeOutElastic(1, 2, 3)").is_err());
}

#[test]
fn serde_tags_are_kebab_case() {
    let s = serde_json::to_string(&Ease::OutExpo).unwrap();
    assert_eq!(s, "\"out-expo\"");
    let back: Ease = serde_json::from_str("\"in-out-cubic\"").unwrap();
    assert_eq!(back, Ease::InOutCubic);
}
