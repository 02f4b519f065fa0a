use proptest::prelude::*;
use stride_core::models::{FeatureVector, Label};
use stride_presenter::views::{self, format_value};

proptest! {
    #[test]
    fn values_have_exactly_the_requested_decimals(value in -1.5f32..=2.0, precision in 0usize..=8) {
        let s = format_value(value, precision);
        let decimals = s.split('.').nth(1).map(str::len).unwrap_or(0);
        prop_assert_eq!(decimals, precision);
    }

    #[test]
    fn text_view_lists_every_feature(values in prop::array::uniform6(-1.5f32..=2.0), label in 0u32..10) {
        let view = views::text::prediction(&FeatureVector::new(values), Label::new(label), 1.0, 4);
        for (i, value) in values.iter().enumerate() {
            let cell = format_value(*value, 4);
            let row = view.lines().nth(2 + i).unwrap_or_default();
            prop_assert!(row.ends_with(&cell), "row {:?} missing {}", row, cell);
        }
    }
}
