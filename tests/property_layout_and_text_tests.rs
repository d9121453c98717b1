use bargraph_rs::core::{
    BandScale, FixedAdvance, LinearScale, MAX_BAND_WIDTH, ScaleOptions, TextMeasure,
    VALUE_DOMAIN_HEADROOM, capped_bandwidth, wrap_label,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn wrapped_lines_never_reach_the_width_budget(
        words in proptest::collection::vec("[a-z]{1,12}", 0..8),
        max_width in 15.0f64..200.0,
        advance in 3.0f64..9.0,
        max_lines in 1usize..4
    ) {
        let text = words.join(" ");
        let measure = FixedAdvance::new(advance);

        let plan = wrap_label(&text, &measure, max_width, max_lines);

        prop_assert!(plan.lines.len() <= max_lines);
        for line in &plan.lines {
            prop_assert!(
                measure.text_width(&line.text) < max_width,
                "line {:?} measures {} against budget {}",
                line.text,
                measure.text_width(&line.text),
                max_width
            );
            prop_assert!(!line.text.is_empty());
        }
    }

    #[test]
    fn line_indices_are_strictly_increasing(
        words in proptest::collection::vec("[a-z]{1,8}", 1..6),
        max_width in 20.0f64..120.0
    ) {
        let measure = FixedAdvance::new(4.0);
        let plan = wrap_label(&words.join(" "), &measure, max_width, 3);

        for pair in plan.lines.windows(2) {
            prop_assert!(pair[1].line_index > pair[0].line_index);
        }
    }

    #[test]
    fn value_domain_always_covers_the_data(
        values in proptest::collection::vec(0.0f64..1_000_000.0, 1..64)
    ) {
        let scale = LinearScale::from_values(&values, ScaleOptions::default());
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let (start, end) = scale.domain();
        prop_assert_eq!(start, 0.0);
        prop_assert!(end >= max);
        prop_assert!((end - max * VALUE_DOMAIN_HEADROOM).abs() <= f64::EPSILON * end.abs().max(1.0));
    }

    #[test]
    fn band_slots_stay_inside_the_range_and_under_the_cap(
        count in 1usize..50,
        span in 50.0f64..2_000.0
    ) {
        let scale = BandScale::from_size(count, ScaleOptions::default().with_range(0.0, span));

        prop_assert!(capped_bandwidth(&scale) <= MAX_BAND_WIDTH);
        for i in 0..count {
            let position = scale.position(&i.to_string()).expect("slot in domain");
            prop_assert!(position >= -1e-9);
            prop_assert!(position + scale.bandwidth() <= span + 1e-9);
        }
    }

    #[test]
    fn scaled_values_inside_the_domain_stay_inside_the_range(
        values in proptest::collection::vec(0.001f64..1_000.0, 1..32),
        pick in 0.0f64..1.0
    ) {
        let scale = LinearScale::from_values(
            &values,
            ScaleOptions::default().with_range(300.0, 0.0),
        );
        let (_, end) = scale.domain();
        let value = pick * end;

        let px = scale.scaled(value);
        prop_assert!((0.0..=300.0 + 1e-9).contains(&px));
    }
}
