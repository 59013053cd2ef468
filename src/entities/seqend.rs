//! Vertex sequence terminator

use super::Entity;
use crate::error::Result;
use crate::record::DxfRecord;

/// Terminates a run of VERTEX entities following a POLYLINE.
#[derive(Debug, Clone, PartialEq)]
pub struct SeqEnd {
    records: Vec<DxfRecord>,
}

impl SeqEnd {
    /// Discriminator value of the opener record
    pub const ENTITY_TYPE: &'static str = "SEQEND";

    /// Build a sequence terminator from its record block.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        Ok(SeqEnd {
            records: records[1..].to_vec(),
        })
    }
}

impl Entity for SeqEnd {
    fn entity_type(&self) -> &str {
        SeqEnd::ENTITY_TYPE
    }

    fn layer(&self) -> &str {
        ""
    }

    fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}
