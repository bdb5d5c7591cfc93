//! Tests for shared strategy helpers

#[cfg(test)]
mod tests {
    use gridpaint::pattern::parameters::PatternParameters;
    use gridpaint::pattern::strategy::{
        check_inputs, fraction_index, pattern_space, resolve_origin, wrap_index,
    };
    use gridpaint::spatial::block::Block;
    use gridpaint::spatial::structure::{EntityId, Structure};

    // Band numbers wrap around the chosen indices in both directions
    // Verified by using % instead of rem_euclid
    #[test]
    fn test_wrap_index() {
        let indices = [4, 7, 9];
        assert_eq!(wrap_index(&indices, 0), 4);
        assert_eq!(wrap_index(&indices, 4), 7);
        assert_eq!(wrap_index(&indices, -1), 9);
    }

    // Fractions pick a slot and clamp at the ends
    // Verified by removing the clamp to the last slot
    #[test]
    fn test_fraction_index() {
        let indices = [0, 2];
        assert_eq!(fraction_index(&indices, 0.0), 0);
        assert_eq!(fraction_index(&indices, 0.49), 0);
        assert_eq!(fraction_index(&indices, 0.5), 2);
        assert_eq!(fraction_index(&indices, 1.0), 2);
        assert_eq!(fraction_index(&indices, f64::NAN), 0);
    }

    // Empty index lists are rejected
    // Verified by skipping the emptiness check
    #[test]
    fn test_check_inputs() {
        let parameters = PatternParameters::default();
        assert!(check_inputs(&[], &parameters).is_err_and(|e| e.is_invalid_argument()));
        assert!(check_inputs(&[1], &parameters).is_ok());
    }

    // Origin can be anchored at the structure center
    // Verified by ignoring the center_on_structure flag
    #[test]
    fn test_resolve_origin_and_space() {
        let Ok(structure) = Structure::new(
            EntityId(1),
            vec![Block::armor([0, 0, 0]), Block::armor([4, 2, 0])],
        ) else {
            panic!("structure should build");
        };
        let absolute = PatternParameters::default().with_origin([1.0, 0.0, 0.0]);
        assert_eq!(resolve_origin(&structure, &absolute), [1.0, 0.0, 0.0]);

        let centered = absolute.with_extra("center_on_structure", true);
        assert_eq!(resolve_origin(&structure, &centered), [3.0, 1.0, 0.0]);

        let scaled = PatternParameters::default().with_scale(2.0, 1.0);
        let p = pattern_space([4, 2, 0], [0.0; 3], &scaled);
        assert!((p[0] - 2.0).abs() < 1e-12 && (p[1] - 1.0).abs() < 1e-12);
    }
}
