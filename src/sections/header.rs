//! HEADER section
//!
//! Header variables are `(9, $NAME)` records followed by one or more
//! value records.  A single value record is kept as a scalar; a longer
//! tail (point variables and the like) is kept structurally as the raw
//! record list.

use crate::partition::RecordBlockIter;
use crate::record::{DxfRecord, RecordPattern};
use crate::Result;
use indexmap::IndexMap;

/// The value of one header variable
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    /// Single-record value
    Scalar(String),
    /// Multi-record value, preserved record by record
    Records(Vec<DxfRecord>),
}

impl HeaderValue {
    /// The scalar value, if this variable has one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::Scalar(s) => Some(s),
            HeaderValue::Records(_) => None,
        }
    }
}

/// The HEADER section: drawing variables by name.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSection {
    variables: IndexMap<String, HeaderValue>,
    records: Vec<DxfRecord>,
}

impl HeaderSection {
    /// Discriminator value of the name record
    pub const SECTION_TYPE: &'static str = "HEADER";

    /// Build the header section from a validated section record block.
    ///
    /// Each variable spans a `(9, ...)` record up to the next `(9, ...)`
    /// record or the section terminator.  The leading `$` sigil is
    /// stripped from variable names.
    pub fn from_records(records: &[DxfRecord]) -> Result<Self> {
        let mut variables = IndexMap::new();

        let mut blocks = RecordBlockIter::with_end_rules(
            records.to_vec().into_iter(),
            RecordPattern::any(9),
            vec![RecordPattern::any(9), RecordPattern::exact(0, "ENDSEC")],
            false,
        );
        for block in blocks.by_ref() {
            let name = block[0].value.trim_start_matches('$').to_string();
            let value = if block.len() == 2 {
                HeaderValue::Scalar(block[1].value.clone())
            } else {
                HeaderValue::Records(block[1..].to_vec())
            };
            variables.insert(name, value);
        }

        Ok(HeaderSection {
            variables,
            records: blocks.into_top_level_records(),
        })
    }

    /// Look up a variable by name (without the `$` sigil).
    ///
    /// An absent variable yields `None`, not an error.
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.variables.get(name)
    }

    /// Whether a variable is defined
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the section defines no variables
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over `(name, value)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Records that were not part of any variable definition
    pub fn records(&self) -> &[DxfRecord] {
        &self.records
    }
}
