//! Unit tests for option resolution and parsing.

use resizekit::constants::DEFAULT_MARGIN;
use resizekit::{Axis, EdgeRule, EdgeRules, InvertMode, OptionsError, ResizeOptions};

#[test]
fn defaults_mirror_the_library_defaults_table() {
    let options = ResizeOptions::default();

    assert!(!options.enabled);
    assert_eq!(options.edges, None);
    assert_eq!(options.axis, Axis::Xy);
    assert!(!options.square);
    assert!(!options.preserve_aspect_ratio);
    assert_eq!(options.invert, InvertMode::None);
    assert_eq!(options.margin, None);
    assert_eq!(options.max, None);
    assert_eq!(options.max_per_element, 1);
}

#[test]
fn effective_margin_falls_back_to_default() {
    assert_eq!(ResizeOptions::default().effective_margin(), DEFAULT_MARGIN);
    assert_eq!(
        ResizeOptions::new().margin(25.0).unwrap().effective_margin(),
        25.0
    );
}

#[test]
fn margin_rejects_non_finite_and_negative_values() {
    assert!(matches!(
        ResizeOptions::new().margin(f64::NAN),
        Err(OptionsError::InvalidMargin(_))
    ));
    assert!(matches!(
        ResizeOptions::new().margin(-1.0),
        Err(OptionsError::InvalidMargin(_))
    ));
}

#[test]
fn axis_parses_from_config_strings() {
    assert_eq!("x".parse::<Axis>(), Ok(Axis::X));
    assert_eq!("y".parse::<Axis>(), Ok(Axis::Y));
    assert_eq!("xy".parse::<Axis>(), Ok(Axis::Xy));
    assert_eq!(
        "yx".parse::<Axis>(),
        Err(OptionsError::InvalidAxis("yx".to_string()))
    );
}

#[test]
fn invert_parses_from_config_strings() {
    assert_eq!("none".parse::<InvertMode>(), Ok(InvertMode::None));
    assert_eq!("negate".parse::<InvertMode>(), Ok(InvertMode::Negate));
    assert_eq!("reposition".parse::<InvertMode>(), Ok(InvertMode::Reposition));
    assert!(matches!(
        "flip".parse::<InvertMode>(),
        Err(OptionsError::InvalidInvertMode(_))
    ));
}

#[test]
fn options_round_trip_through_serde() {
    let options = ResizeOptions::new()
        .edges(EdgeRules {
            top: EdgeRule::Zone,
            bottom: EdgeRule::Selector(".resize-s".to_string()),
            ..EdgeRules::default()
        })
        .square(true)
        .invert(InvertMode::Reposition);

    let json = serde_json::to_string(&options).unwrap();
    let back: ResizeOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn error_messages_name_the_offending_value() {
    let err = "diagonal".parse::<Axis>().unwrap_err();
    assert!(err.to_string().contains("diagonal"));
}
