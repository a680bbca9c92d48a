use minext_parser::{DatasetFile, format_model_data, parse_model_data};
use proptest::prelude::*;

fn dataset_file() -> impl Strategy<Value = DatasetFile> {
    (1usize..=5).prop_flat_map(|m| {
        (
            1u64..=1_000_000,
            prop::collection::vec(0u64..=u64::MAX / 2, m),
            prop::collection::vec(any::<f64>().prop_filter("finite", |v| v.is_finite()), m),
            prop::collection::vec(-1e6f64..1e6, m),
            prop::collection::vec(prop::collection::vec(0.0f64..1e3, m), m),
            any::<f64>().prop_filter("finite", |v| v.is_finite()),
            any::<u64>(),
        )
            .prop_map(move |(n, p, ext, cei, c, ct, max_m)| DatasetFile {
                n,
                m,
                p,
                ext,
                cei,
                c,
                ct,
                max_m,
            })
    })
}

proptest! {
    #[test]
    fn model_data_reparses_to_identical_values(file in dataset_file()) {
        let text = format_model_data(&file);
        let parsed = parse_model_data(&text).expect("generated model data must parse");
        prop_assert_eq!(parsed, file);
    }
}
