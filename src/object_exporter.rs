//! Pluggable per-type rendering of records.
//!
//! An [`ObjectExporter`] takes over the body of a record's full export: the text
//! it returns is placed between the parentheses of `<Type> Object #<id> (...)`.
//! The exporter still owns identity tracking, so a custom body is only ever
//! produced once per record and later visits render as the short reference.
//!
//! ## Examples
//!
//! ```rust
//! use value_exporter::{Context, Exporter, ObjectExporter, Record, Result};
//!
//! struct MoneyExporter;
//!
//! impl ObjectExporter for MoneyExporter {
//!     fn handles(&self, record: &Record) -> bool {
//!         record.class_name() == "Money"
//!     }
//!
//!     fn export(
//!         &self,
//!         record: &Record,
//!         _exporter: &Exporter,
//!         _context: &mut Context,
//!         _indentation: usize,
//!     ) -> Result<String> {
//!         let cents = record.get("cents").and_then(|v| v.as_i64()).unwrap_or_default();
//!         Ok(format!("{}.{:02} EUR", cents / 100, cents % 100))
//!     }
//! }
//!
//! let price = Record::new("Money").with_field("cents", 1999);
//! let exporter = Exporter::new().with_object_exporter(MoneyExporter);
//!
//! let rendered = exporter.export(&price.clone().into(), 0).unwrap();
//! assert_eq!(rendered, format!("Money Object #{} (19.99 EUR)", price.id()));
//! ```

use crate::{Context, Error, Exporter, Record, Result};

/// Custom renderer for records of particular types.
pub trait ObjectExporter {
    /// Returns `true` if this exporter renders `record`.
    fn handles(&self, record: &Record) -> bool;

    /// Renders the body of `record`.
    ///
    /// `exporter` and `context` allow nested values to be rendered with the
    /// walk's shared identity state, e.g.
    /// `exporter.export_with_context(&value, indentation + 1, context)`.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::ObjectNotSupported`] when asked to render a
    /// record they do not handle.
    fn export(
        &self,
        record: &Record,
        exporter: &Exporter,
        context: &mut Context,
        indentation: usize,
    ) -> Result<String>;
}

/// An ordered list of object exporters; the first one that handles a record wins.
///
/// # Examples
///
/// ```rust
/// use value_exporter::{Context, Error, Exporter, ObjectExporter, ObjectExporterChain, Record};
///
/// let chain = ObjectExporterChain::new(Vec::new());
/// let record = Record::new("Anything");
///
/// assert!(!chain.handles(&record));
/// let err = chain
///     .export(&record, &Exporter::new(), &mut Context::new(), 0)
///     .unwrap_err();
/// assert!(matches!(err, Error::ObjectNotSupported(_)));
/// ```
#[derive(Default)]
pub struct ObjectExporterChain {
    exporters: Vec<Box<dyn ObjectExporter>>,
}

impl ObjectExporterChain {
    pub fn new(exporters: Vec<Box<dyn ObjectExporter>>) -> Self {
        ObjectExporterChain { exporters }
    }

    /// Appends an exporter, consulted after the ones already in the chain.
    #[must_use]
    pub fn with(mut self, exporter: impl ObjectExporter + 'static) -> Self {
        self.exporters.push(Box::new(exporter));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exporters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exporters.is_empty()
    }
}

impl ObjectExporter for ObjectExporterChain {
    fn handles(&self, record: &Record) -> bool {
        self.exporters.iter().any(|exporter| exporter.handles(record))
    }

    fn export(
        &self,
        record: &Record,
        exporter: &Exporter,
        context: &mut Context,
        indentation: usize,
    ) -> Result<String> {
        match self.exporters.iter().find(|candidate| candidate.handles(record)) {
            Some(handler) => handler.export(record, exporter, context, indentation),
            None => {
                tracing::debug!(
                    class = record.class_name(),
                    id = record.id(),
                    chain_len = self.exporters.len(),
                    "no object exporter in chain handles record"
                );
                Err(Error::object_not_supported(&format!(
                    "{} Object #{}",
                    record.class_name(),
                    record.id()
                )))
            }
        }
    }
}
