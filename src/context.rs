//! Identity tracking for one export walk.
//!
//! A [`Context`] remembers every sequence and record the exporter has started to
//! render, so that a second visit (through a cycle or through aliasing) can be
//! emitted as a short reference instead of being expanded again.
//!
//! - Sequences get identifiers `0, 1, 2, ...` in the order they are added, and
//!   are matched by storage address: equal-but-distinct sequences never match.
//! - Records are identified by their own process-wide identity token.
//!
//! The context holds a handle to everything it has registered, so no tracked
//! storage can be freed (and its address recycled) while the context lives.
//!
//! ## Examples
//!
//! ```rust
//! use value_exporter::{Context, Identifier, Sequence, Value};
//!
//! let mut context = Context::new();
//! let outer = Value::from(Sequence::new());
//!
//! assert_eq!(context.contains(&outer).unwrap(), None);
//! assert_eq!(context.add(&outer).unwrap(), Identifier::Sequence(0));
//! assert_eq!(context.add(&outer).unwrap(), Identifier::Sequence(0));
//! assert_eq!(context.contains(&outer).unwrap(), Some(Identifier::Sequence(0)));
//! ```

use crate::{Error, Record, Result, Sequence, Value};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// Identifier handed out by a [`Context`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Position of a sequence in visitation order.
    Sequence(usize),
    /// Identity token of a record.
    Record(u64),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Sequence(index) => write!(f, "{}", index),
            Identifier::Record(id) => write!(f, "{}", id),
        }
    }
}

/// Registry of composites already visited during an export.
///
/// Create one per top-level export, or share one across related calls to make
/// them see each other's composites as already rendered.
#[derive(Debug, Default)]
pub struct Context {
    sequences: Vec<Sequence>,
    sequence_index: HashMap<usize, usize>,
    records: IndexMap<u64, Record>,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sequence or record and returns its identifier.
    ///
    /// Adding a value that is already registered returns the existing identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] for any value that is not a sequence or
    /// a record.
    pub fn add(&mut self, value: &Value) -> Result<Identifier> {
        match value {
            Value::Array(seq) => Ok(Identifier::Sequence(self.add_sequence(seq))),
            Value::Object(record) => Ok(Identifier::Record(self.add_record(record))),
            other => Err(Error::unsupported_kind(other.kind_name())),
        }
    }

    /// Looks a sequence or record up without registering it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] for any value that is not a sequence or
    /// a record.
    pub fn contains(&self, value: &Value) -> Result<Option<Identifier>> {
        match value {
            Value::Array(seq) => Ok(self.contains_sequence(seq).map(Identifier::Sequence)),
            Value::Object(record) => Ok(self.contains_record(record).map(Identifier::Record)),
            other => Err(Error::unsupported_kind(other.kind_name())),
        }
    }

    /// Registers a sequence and returns its index.
    ///
    /// Indexes are handed out from `0` in registration order. The context
    /// keeps a handle, so the storage address cannot be reused while it lives.
    pub fn add_sequence(&mut self, seq: &Sequence) -> usize {
        if let Some(index) = self.contains_sequence(seq) {
            return index;
        }

        let index = self.sequences.len();
        self.sequence_index.insert(seq.storage_address(), index);
        self.sequences.push(seq.clone());
        index
    }

    /// Index of a registered sequence, if any.
    #[must_use]
    pub fn contains_sequence(&self, seq: &Sequence) -> Option<usize> {
        self.sequence_index.get(&seq.storage_address()).copied()
    }

    /// Registers a record and returns its id.
    pub fn add_record(&mut self, record: &Record) -> u64 {
        self.records
            .entry(record.id())
            .or_insert_with(|| record.clone());
        record.id()
    }

    /// Id of a registered record, if any.
    #[must_use]
    pub fn contains_record(&self, record: &Record) -> Option<u64> {
        self.records.contains_key(&record.id()).then(|| record.id())
    }

    /// Number of registered composites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len() + self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
