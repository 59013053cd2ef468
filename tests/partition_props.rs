//! Property tests for the block partitioner.
//!
//! Every record a partitioner consumes lands in exactly one place: a
//! yielded block, the top-level output, or the dropped unterminated
//! tail.  Records are stamped with unique values so the properties can
//! check identity, not just counts.

use dxftree::{DxfRecord, RecordBlockIter, RecordPattern};
use proptest::prelude::*;

/// Build a stream of records with unique values; codes are drawn from a
/// small alphabet so start/end rules actually fire.
fn record_stream() -> impl Strategy<Value = Vec<DxfRecord>> {
    prop::collection::vec(0..4i32, 0..40).prop_map(|codes| {
        codes
            .into_iter()
            .enumerate()
            .map(|(i, code)| DxfRecord::new(code, format!("v{}", i)))
            .collect()
    })
}

fn run_partitioner(
    records: Vec<DxfRecord>,
    start: RecordPattern,
    ends: Vec<RecordPattern>,
    include_end: bool,
) -> (Vec<Vec<DxfRecord>>, Vec<DxfRecord>) {
    let mut iter = RecordBlockIter::with_end_rules(records.into_iter(), start, ends, include_end);
    let blocks: Vec<Vec<DxfRecord>> = iter.by_ref().collect();
    (blocks, iter.into_top_level_records())
}

proptest! {
    /// Conservation: the emitted records (blocks plus top-level) are
    /// exactly a prefix of the input, and the dropped remainder is the
    /// unterminated tail, which always begins at a block opener.
    #[test]
    fn conservation(records in record_stream(), include_end: bool) {
        let input = records.clone();
        let (blocks, top_level) = run_partitioner(
            records,
            RecordPattern::any(0),
            vec![RecordPattern::any(1), RecordPattern::any(2)],
            include_end,
        );

        let emitted: usize = blocks.iter().map(Vec::len).sum::<usize>() + top_level.len();
        prop_assert!(emitted <= input.len());

        // Every emitted record is one of the first `emitted` input
        // records, each exactly once.
        let mut seen: Vec<&DxfRecord> = blocks.iter().flatten().chain(top_level.iter()).collect();
        seen.sort_by_key(|rec| rec.value.clone());
        let mut expected: Vec<&DxfRecord> = input[..emitted].iter().collect();
        expected.sort_by_key(|rec| rec.value.clone());
        prop_assert_eq!(seen, expected);

        // The dropped tail starts at a record that opened a block.
        if emitted < input.len() {
            prop_assert_eq!(input[emitted].code, 0);
        }
    }

    /// Every yielded block opens with a start-rule match, and with
    /// `include_end` set it closes with an end-rule match.
    #[test]
    fn block_shape(records in record_stream(), include_end: bool) {
        let start = RecordPattern::any(0);
        let ends = vec![RecordPattern::any(1), RecordPattern::any(2)];
        let (blocks, top_level) = run_partitioner(records, start.clone(), ends.clone(), include_end);

        for block in &blocks {
            prop_assert!(!block.is_empty());
            prop_assert!(start.matches(&block[0]));
            if include_end {
                let last = &block[block.len() - 1];
                prop_assert!(ends.iter().any(|rule| rule.matches(last)));
            }
        }

        // Nothing matching the start rule ever stays top-level.
        for rec in &top_level {
            prop_assert!(!start.matches(rec));
        }
    }

    /// Block output and top-level output each preserve input order.
    #[test]
    fn order_preserved(records in record_stream()) {
        let input = records.clone();
        let (blocks, top_level) = run_partitioner(
            records,
            RecordPattern::any(0),
            vec![RecordPattern::any(1)],
            true,
        );

        let index_of = |rec: &DxfRecord| {
            input
                .iter()
                .position(|candidate| candidate == rec)
                .expect("emitted record not found in input")
        };

        let flat: Vec<usize> = blocks.iter().flatten().map(index_of).collect();
        prop_assert!(flat.windows(2).all(|w| w[0] < w[1]));

        let top: Vec<usize> = top_level.iter().map(index_of).collect();
        prop_assert!(top.windows(2).all(|w| w[0] < w[1]));
    }
}
