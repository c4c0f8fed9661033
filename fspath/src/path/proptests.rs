//! Property-based tests for the component model.

use super::{Components, FsPath};
use crate::sequence::Slice;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 0..8)
}

fn absolute(segments: &[String]) -> FsPath {
    FsPath::from_absolute(&format!("/{}", segments.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Parsing the rendered form reproduces the same sequence
    #[test]
    fn render_parse_round_trip(segments in segments_strategy()) {
        let path = absolute(&segments);
        prop_assert_eq!(Components::parse(path.as_str()), path.components().clone());
        prop_assert_eq!(path.len(), segments.len() + 1);
    }

    // Redundant separators and `.` segments never change the result
    #[test]
    fn noise_is_dropped(segments in segments_strategy()) {
        let noisy = format!("//{}/./", segments.join("//./"));
        prop_assert_eq!(FsPath::from_absolute(&noisy), absolute(&segments));
    }

    // p.prefix_through(i) == p.prefix_through(i - len)
    #[test]
    fn negative_index_equivalence(segments in segments_strategy(), pick in any::<prop::sample::Index>()) {
        let path = absolute(&segments);
        let len = isize::try_from(path.len()).unwrap();
        let i = isize::try_from(pick.index(path.len())).unwrap();
        prop_assert_eq!(path.prefix_through(i).unwrap(), path.prefix_through(i - len).unwrap());
        prop_assert!(path.prefix_through(len).is_err());
        prop_assert!(path.prefix_through(-len - 1).is_err());
    }

    // replace_range(a..b, v) == seq[..a] ++ split(v) ++ seq[b..]
    #[test]
    fn splice_correctness(
        segments in segments_strategy(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
        value in segments_strategy(),
    ) {
        let mut path = absolute(&segments);
        let len = path.len();
        let start = 1 + a.index(len);
        let stop = start.max(b.index(len + 1));

        let mut expected: Vec<String> = segments[..start - 1].to_vec();
        expected.extend(value.iter().cloned());
        expected.extend(segments[stop - 1..].iter().cloned());

        path.replace_range(
            Slice::new(Some(isize::try_from(start).unwrap()), Some(isize::try_from(stop).unwrap())),
            &value.join("/"),
        ).unwrap();
        prop_assert_eq!(path, absolute(&expected));
    }

    // delete_range(a..b) == seq[..a] ++ seq[b..], and the root always survives
    #[test]
    fn deletion_correctness(
        segments in segments_strategy(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let mut path = absolute(&segments);
        let len = path.len();
        let start = a.index(len);
        let stop = b.index(len + 1).max(start);

        let expected: Vec<String> = if start == 0 && stop > 0 {
            Vec::new()
        } else {
            let skip = start.saturating_sub(1)..stop.saturating_sub(1);
            segments
                .iter()
                .enumerate()
                .filter(|(i, _)| !skip.contains(i))
                .map(|(_, s)| s.clone())
                .collect()
        };

        path.delete_range(Slice::new(
            Some(isize::try_from(start).unwrap()),
            Some(isize::try_from(stop).unwrap()),
        ));
        prop_assert!(path.len() >= 1);
        prop_assert_eq!(path, absolute(&expected));
    }

    // Concatenation leaves the original untouched and adds the new segments
    #[test]
    fn concatenation_appends(left in segments_strategy(), right in prop::collection::vec(segment_strategy(), 1..4)) {
        let base = absolute(&left);
        let joined = &base + right.join("/").as_str();
        prop_assert_eq!(joined.len(), base.len() + right.len());
        prop_assert_eq!(base, absolute(&left));
    }
}
