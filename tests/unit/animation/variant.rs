use super::*;

#[test]
fn table_rows_line_up_with_enum_order() {
    for v in AnimationVariant::ALL {
        assert_eq!(v.recipe().variant, v);
    }
}

#[test]
fn fade_up_is_opacity_and_vertical_offset_only() {
    assert_eq!(
        AnimationVariant::FadeUp.tracks(),
        &[
            Track::new(Property::Opacity, 0.0, 1.0),
            Track::new(Property::TranslateY, 40.0, 0.0),
        ]
    );
}

#[test]
fn every_variant_fades_in_and_rests_at_identity() {
    for v in AnimationVariant::ALL {
        let tracks = v.tracks();
        assert_eq!(tracks[0], Track::new(Property::Opacity, 0.0, 1.0), "{v}");
        for t in &tracks[1..] {
            let rest = if t.property == Property::Scale { 1.0 } else { 0.0 };
            assert_eq!(t.to, rest, "{v} {:?}", t.property);
            assert_ne!(t.from, t.to, "{v} {:?}", t.property);
        }
        assert_eq!(v.ease(), Ease::OutExpo);
    }
}

#[test]
fn recipe_spot_checks() {
    use Property::*;
    let pairs = |v: AnimationVariant| -> Vec<(Property, f64, f64)> {
        v.tracks().iter().map(|t| (t.property, t.from, t.to)).collect()
    };
    assert_eq!(pairs(AnimationVariant::FadeDown)[1], (TranslateY, -40.0, 0.0));
    assert_eq!(pairs(AnimationVariant::FadeLeft)[1], (TranslateX, 60.0, 0.0));
    assert_eq!(pairs(AnimationVariant::FadeRight)[1], (TranslateX, -60.0, 0.0));
    assert_eq!(pairs(AnimationVariant::Scale)[1], (Scale, 0.8, 1.0));
    assert_eq!(
        pairs(AnimationVariant::Blur)[1..],
        [(Blur, 10.0, 0.0), (TranslateY, 20.0, 0.0)]
    );
    assert_eq!(
        pairs(AnimationVariant::Rotate)[1..],
        [(RotateX, 15.0, 0.0), (TranslateY, 30.0, 0.0)]
    );
    assert_eq!(pairs(AnimationVariant::StaggerUp)[1], (TranslateY, 50.0, 0.0));
    assert_eq!(pairs(AnimationVariant::StaggerLeft)[1], (TranslateX, 80.0, 0.0));
    assert_eq!(pairs(AnimationVariant::StaggerRight)[1], (TranslateX, -80.0, 0.0));
}

#[test]
fn only_stagger_variants_require_marks() {
    for v in AnimationVariant::ALL {
        let expect = if v.tag().starts_with("stagger-") {
            TargetPolicy::MarkedOnly
        } else {
            TargetPolicy::MarkedOrRoot
        };
        assert_eq!(v.targets(), expect, "{v}");
    }
}

#[test]
fn tags_round_trip_through_from_str() {
    for v in AnimationVariant::ALL {
        assert_eq!(v.tag().parse::<AnimationVariant>().unwrap(), v);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, format!("\"{}\"", v.tag()));
    }
    assert_eq!(
        " Stagger_Left ".parse::<AnimationVariant>().unwrap(),
        AnimationVariant::StaggerLeft
    );
    assert!("wobble".parse::<AnimationVariant>().is_err());
}
