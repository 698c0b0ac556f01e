//! Property tests for the gold path → output path rewrite.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use goldrun::domain::value_objects::OutputMapping;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}")
        .unwrap()
        .prop_filter("plain directory name", |s| {
            s != "gold" && s != "." && s != ".."
        })
}

fn segments(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 0..=max)
}

fn join(parts: &[String]) -> String {
    parts.join("/")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the marker is dropped and the path rooted under the build dir.
    #[test]
    fn property_single_marker_is_removed(
        prefix in segments(3),
        file in segment(),
    ) {
        let mut gold = prefix.clone();
        gold.push("gold".to_string());
        gold.push(file.clone());
        let gold = join(&gold);

        let mut expected = vec!["build".to_string()];
        expected.extend(prefix);
        expected.push(file);

        let output = OutputMapping::default().output_for(Path::new(&gold));
        prop_assert_eq!(output, PathBuf::from(join(&expected)));
    }

    /// PROPERTY: only the first marker occurrence is rewritten.
    #[test]
    fn property_later_markers_are_preserved(
        prefix in segments(2),
        middle in segments(2),
        file in segment(),
    ) {
        let mut gold = vec!["test".to_string()];
        gold.extend(prefix.clone());
        gold.push("gold".to_string());
        gold.extend(middle.clone());
        gold.push("gold".to_string());
        gold.push(file.clone());

        let output = OutputMapping::default().output_for(Path::new(&join(&gold)));

        let mut expected = vec!["build".to_string(), "test".to_string()];
        expected.extend(prefix);
        expected.extend(middle);
        expected.push("gold".to_string());
        expected.push(file);
        prop_assert_eq!(output, PathBuf::from(join(&expected)));
    }

    /// PROPERTY: `gold_for` inverts `output_for` for outputs under the build root.
    #[test]
    fn property_gold_for_round_trips(
        dirs in segments(4),
        file in segment(),
    ) {
        let mapping = OutputMapping::default();
        let mut output = vec!["build".to_string()];
        output.extend(dirs);
        output.push(file);
        let output = PathBuf::from(join(&output));

        let gold = mapping.gold_for(&output).expect("output is under the build root");
        prop_assert_eq!(mapping.output_for(&gold), output);
    }

    /// PROPERTY: the rewrite never panics on arbitrary input.
    #[test]
    fn property_rewrite_never_panics(s in "(?s).{0,128}") {
        let mapping = OutputMapping::default();
        let _ = mapping.output_for(Path::new(&s));
        let _ = mapping.gold_for(Path::new(&s));
    }
}
