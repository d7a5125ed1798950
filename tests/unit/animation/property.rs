use super::*;

#[test]
fn style_get_set_covers_every_property() {
    let mut s = Style::default();
    for (i, p) in Property::ALL.into_iter().enumerate() {
        s.set(p, i as f64 + 0.5);
    }
    for (i, p) in Property::ALL.into_iter().enumerate() {
        assert_eq!(s.get(p), i as f64 + 0.5);
    }
}

#[test]
fn default_style_is_identity() {
    let s = Style::default();
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.css_transform(), "none");
    assert_eq!(s.css_filter(), "none");
}

#[test]
fn css_transform_lists_active_components_in_order() {
    let s = Style {
        translate_y: 40.0,
        rotate_x: 15.0,
        scale: 0.8,
        blur: 10.0,
        ..Style::default()
    };
    assert_eq!(s.css_transform(), "translateY(40px) scale(0.8) rotateX(15deg)");
    assert_eq!(s.css_filter(), "blur(10px)");
}

#[test]
fn groups_partition_properties() {
    assert_eq!(Property::Opacity.group(), PropertyGroup::Opacity);
    assert_eq!(Property::TranslateZ.group(), PropertyGroup::Position);
    assert_eq!(Property::RotateY.group(), PropertyGroup::Rotation);
    assert_eq!(Property::Blur.group(), PropertyGroup::Filter);
}

#[test]
fn property_parse_accepts_css_names() {
    assert_eq!(Property::parse("translateY").unwrap(), Property::TranslateY);
    assert_eq!(Property::parse("rotate-x").unwrap(), Property::RotateX);
    assert!(Property::parse("skew").is_err());
}

#[test]
fn track_sample_interpolates_linearly_in_eased_space() {
    let t = Track::new(Property::Scale, 0.8, 1.0);
    assert_eq!(t.sample(0.0), 0.8);
    assert!((t.sample(0.5) - 0.9).abs() < 1e-12);
}
