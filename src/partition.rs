//! Generic block partitioner.
//!
//! Groups a flat record sequence into blocks delimited by a start
//! [`RecordPattern`] and terminated by the first match against any of a
//! set of end patterns.  Records seen outside any block are collected and
//! can be retrieved once the iterator is exhausted.
//!
//! Every section and table constructor in this crate is a thin layer over
//! this iterator with its own pattern rules.

use crate::record::{DxfRecord, RecordPattern};

/// Iterator yielding blocks of records from a flat record stream.
///
/// A block opens at a record matching the start pattern and closes at the
/// first record matching any end pattern.  When `include_end` is `true`
/// the terminating record is the last element of the yielded block; when
/// `false` it is held back and re-examined on the next pass, where it may
/// open the next block or fall into top-level output.
///
/// A block whose terminator never arrives is dropped: records accumulated
/// when the stream ends appear in neither block output nor top-level
/// output.  Callers that need the trailing block must append a synthetic
/// terminator before partitioning.
pub struct RecordBlockIter<I: Iterator<Item = DxfRecord>> {
    records: I,
    start: RecordPattern,
    end_rules: Vec<RecordPattern>,
    include_end: bool,
    top_level: Vec<DxfRecord>,
    pending: Option<DxfRecord>,
    in_block: bool,
    exhausted: bool,
}

impl<I: Iterator<Item = DxfRecord>> RecordBlockIter<I> {
    /// Partition with a single end pattern.
    pub fn new(records: I, start: RecordPattern, end: RecordPattern, include_end: bool) -> Self {
        Self::with_end_rules(records, start, vec![end], include_end)
    }

    /// Partition with alternative end patterns; the block ends at the
    /// first occurring match against any of them.
    pub fn with_end_rules(
        records: I,
        start: RecordPattern,
        end_rules: Vec<RecordPattern>,
        include_end: bool,
    ) -> Self {
        Self {
            records,
            start,
            end_rules,
            include_end,
            top_level: Vec::new(),
            pending: None,
            in_block: false,
            exhausted: false,
        }
    }

    /// Records that never entered a block, in original order.
    ///
    /// # Panics
    ///
    /// Panics if the iterator has not been driven to exhaustion; calling
    /// this before the stream is drained is a programming error.
    pub fn into_top_level_records(self) -> Vec<DxfRecord> {
        if !self.exhausted {
            panic!("into_top_level_records called before the block iterator was exhausted");
        }
        self.top_level
    }
}

impl<I: Iterator<Item = DxfRecord>> Iterator for RecordBlockIter<I> {
    type Item = Vec<DxfRecord>;

    fn next(&mut self) -> Option<Vec<DxfRecord>> {
        if self.exhausted {
            return None;
        }

        let mut block = Vec::new();
        loop {
            let rec = match self.pending.take().or_else(|| self.records.next()) {
                Some(rec) => rec,
                None => {
                    // Unterminated trailing block is dropped.
                    self.exhausted = true;
                    return None;
                }
            };

            if self.in_block {
                if self.end_rules.iter().any(|rule| rule.matches(&rec)) {
                    self.in_block = false;
                    if self.include_end {
                        block.push(rec);
                    } else {
                        self.pending = Some(rec);
                    }
                    return Some(block);
                }
                block.push(rec);
            } else if self.start.matches(&rec) {
                self.in_block = true;
                block.push(rec);
            } else {
                self.top_level.push(rec);
            }
        }
    }
}
