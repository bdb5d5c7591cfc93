//! Tests for pattern parameter defaults, extras and validation

#[cfg(test)]
mod tests {
    use gridpaint::io::configuration::{DEFAULT_PATTERN_SCALE, DEFAULT_SEED};
    use gridpaint::pattern::parameters::{ParameterValue, PatternParameters};

    // Defaults come from the configuration constants
    // Verified by defaulting the seed to zero
    #[test]
    fn test_defaults() {
        let parameters = PatternParameters::default();
        assert_eq!(parameters.seed, DEFAULT_SEED);
        assert!((parameters.scale - DEFAULT_PATTERN_SCALE).abs() < f64::EPSILON);
        assert!(parameters.extra.is_empty());
        assert!(parameters.validate().is_ok());
    }

    // Typed extra accessors only match their own variant
    // Verified by converting numbers to text in text()
    #[test]
    fn test_extra_accessors() {
        let parameters = PatternParameters::default()
            .with_extra("axis", "z")
            .with_extra("octaves", 4.0)
            .with_extra("center_on_structure", true);
        assert_eq!(parameters.text("axis"), Some("z"));
        assert_eq!(parameters.number("octaves"), Some(4.0));
        assert!(parameters.flag("center_on_structure"));
        assert!(!parameters.flag("axis"));
        assert_eq!(parameters.number("axis"), None);
        assert_eq!(
            parameters.extra.get("axis"),
            Some(&ParameterValue::Text("z".to_string()))
        );
    }

    // Non-positive or non-finite numbers fail validation
    // Verified by accepting zero scale
    #[test]
    fn test_validation() {
        let base = PatternParameters::default();
        assert!(base.clone().with_scale(0.0, 1.0).validate().is_err());
        assert!(base.clone().with_scale(1.0, -2.0).validate().is_err());
        assert!(base.clone().with_rotation(f64::INFINITY).validate().is_err());
        assert!(base.clone().with_origin([0.0, f64::NAN, 0.0]).validate().is_err());
        let error = base.with_scale(f64::NAN, 1.0).validate();
        assert!(error.is_err_and(|e| e.is_invalid_argument()));
    }

    // Missing fields deserialize to defaults and extras keep their types
    // Verified by removing serde(default) from the struct
    #[test]
    fn test_deserialize_partial() {
        let json = r#"{ "seed": 7, "extra": { "axis": "y", "octaves": 2 } }"#;
        let parameters: PatternParameters =
            serde_json::from_str(json).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(parameters.seed, 7);
        assert_eq!(parameters.text("axis"), Some("y"));
        assert_eq!(parameters.number("octaves"), Some(2.0));
        assert!((parameters.scale - DEFAULT_PATTERN_SCALE).abs() < f64::EPSILON);
    }
}
