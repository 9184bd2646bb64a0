//! # value_exporter
//!
//! Human-readable, cycle-safe dumps of dynamic value graphs.
//!
//! ## What does it do?
//!
//! The crate renders a [`Value`] (null, booleans, integers, floats, strings,
//! resources, enum constants, and the two composite kinds, sequences and
//! records) as text meant for diagnostics: test failure messages, debug logs,
//! assertion diffs. Composites are shared handles, so a graph can alias the
//! same sequence twice or point a record back at itself; the exporter detects
//! both and prints a short reference instead of recursing forever.
//!
//! ## Key Features
//!
//! - **Identity aware**: sequences are numbered `Array &0, &1, ...` in visitation
//!   order, records carry their identity `Object #<id>`, repeats render as bare
//!   references
//! - **Exact float output**: shortest round-trip digits, `.0` on integral values,
//!   `NAN` / `INF` / `-INF`
//! - **Safe string output**: line breaks are escaped and kept visible, binary
//!   strings are hex-dumped
//! - **Three renderings**: full multi-line export, one-line shortened export, and a
//!   budgeted one-line recursive export of sequences
//! - **Pluggable**: [`ObjectExporter`] implementations take over the body of
//!   records of chosen types
//! - **Serde bridge**: [`to_value`] and [`to_string`] accept any `Serialize` type
//!
//! ## Quick Start
//!
//! ```rust
//! use value_exporter::{export, Record};
//!
//! let node = Record::new("Node").with_field("name", "root");
//! node.set("parent", node.clone());
//!
//! let rendered = export(&node.clone().into(), 0).unwrap();
//! assert_eq!(
//!     rendered,
//!     format!(
//!         "Node Object #{id} (\n    'name' => 'root',\n    'parent' => Node Object #{id},\n)",
//!         id = node.id()
//!     )
//! );
//! ```
//!
//! ### Shared Sequences
//!
//! ```rust
//! use value_exporter::{export, Sequence, Value};
//!
//! let shared = Sequence::from_values(vec![1]);
//! let outer = Sequence::from_values(vec![Value::from(&shared), Value::from(&shared)]);
//!
//! assert_eq!(
//!     export(&outer.into(), 0).unwrap(),
//!     "Array &0 [\n    0 => Array &1 [\n        0 => 1,\n    ],\n    1 => Array &1,\n]"
//! );
//! ```
//!
//! ### One-line Summaries
//!
//! ```rust
//! use value_exporter::{shortened_export, shortened_recursive_export, value, ExporterOptions};
//!
//! assert_eq!(shortened_export(&value!("line\nbreak"), 40), "'line\\nbreak'");
//!
//! let data = value!([1, [2, 3], "four"]);
//! let seq = data.as_sequence().unwrap();
//! assert_eq!(
//!     shortened_recursive_export(seq, ExporterOptions::default(), None),
//!     "1, [2, 3], 'four'"
//! );
//! ```
//!
//! ### From Rust Types
//!
//! ```rust
//! use serde::Serialize;
//! use value_exporter::to_string;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: f64 }
//!
//! let text = to_string(&Point { x: 1, y: 2.0 }).unwrap();
//! assert!(text.starts_with("Point Object #"));
//! assert!(text.ends_with("(\n    'x' => 1,\n    'y' => 2.0,\n)"));
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`](https://docs.rs/tracing): `trace`
//! events when a composite is printed as a reference, `debug` events when output
//! is truncated or no object exporter handles a record. The crate never installs
//! a subscriber.
//!
//! ## Thread Safety
//!
//! Value graphs are `Rc`-based and stay on the thread that built them. Exporting
//! keeps no global state, so independent graphs can be exported on separate
//! threads concurrently.

pub mod context;
pub mod error;
pub mod exporter;
pub mod macros;
pub mod map;
pub mod object_exporter;
pub mod options;
pub mod ser;
pub mod value;

pub use context::{Context, Identifier};
pub use error::{Error, Result};
pub use exporter::{Exporter, GC_DATA_FIELD, TRACE_FIELD};
pub use map::FieldMap;
pub use object_exporter::{ObjectExporter, ObjectExporterChain};
pub use options::{ExporterOptions, DEFAULT_MAX_LENGTH_FOR_STRINGS};
pub use ser::{to_value, ValueSerializer};
pub use value::{
    Backing, EnumConstant, Key, Record, RecordKind, Resource, ResourceState, Sequence, Value,
};

use serde::Serialize;

/// Exports a value into a multi-line string with default options.
///
/// # Examples
///
/// ```rust
/// use value_exporter::{export, Value};
///
/// assert_eq!(export(&Value::from(1.0), 0).unwrap(), "1.0");
/// assert_eq!(export(&Value::from("it's"), 0).unwrap(), "'it's'");
/// ```
///
/// # Errors
///
/// Never fails without an object exporter; the `Result` mirrors
/// [`Exporter::export`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn export(value: &Value, indentation: usize) -> Result<String> {
    Exporter::new().export(value, indentation)
}

/// Exports a value into a single line, truncating strings to
/// `max_length_for_strings` codepoints.
///
/// # Examples
///
/// ```rust
/// use value_exporter::{shortened_export, Sequence, Value};
///
/// assert_eq!(shortened_export(&Value::from(Sequence::new()), 40), "[]");
/// assert_eq!(shortened_export(&Value::from(vec![Value::Null]), 40), "[...]");
/// ```
#[must_use]
pub fn shortened_export(value: &Value, max_length_for_strings: usize) -> String {
    Exporter::new().shortened_export_with_limit(value, max_length_for_strings)
}

/// Exports a sequence into one line, inlining nested sequences.
///
/// Pass a `context` shared with an enclosing export to have sequences it already
/// holds render as `*RECURSION*`.
///
/// # Examples
///
/// ```rust
/// use value_exporter::{shortened_recursive_export, value, Context, ExporterOptions};
///
/// let data = value!([1, 2, 3, 4, 5]);
/// let seq = data.as_sequence().unwrap();
///
/// let options = ExporterOptions::new().with_shorten_arrays_longer_than(3);
/// assert_eq!(
///     shortened_recursive_export(seq, options, None),
///     "1, 2, 3, 4, ...2 more elements"
/// );
///
/// let mut context = Context::new();
/// context.add_sequence(seq);
/// let outer = value!([]);
/// outer.as_sequence().unwrap().push(seq);
/// assert_eq!(
///     shortened_recursive_export(outer.as_sequence().unwrap(), ExporterOptions::new(), Some(&mut context)),
///     "*RECURSION*"
/// );
/// ```
#[must_use]
pub fn shortened_recursive_export(
    data: &Sequence,
    options: ExporterOptions,
    context: Option<&mut Context>,
) -> String {
    Exporter::with_options(options).shortened_recursive_export(data, context)
}

/// Fields of a value as the exporter sees them, see [`Exporter::to_field_map`].
#[must_use]
pub fn to_field_map(value: &Value) -> FieldMap {
    Exporter::new().to_field_map(value)
}

/// Exports any `T: Serialize` with default options.
///
/// # Examples
///
/// ```rust
/// use value_exporter::to_string;
///
/// assert_eq!(
///     to_string(&vec!["a", "b"]).unwrap(),
///     "Array &0 [\n    0 => 'a',\n    1 => 'b',\n]"
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted, see [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, ExporterOptions::default())
}

/// Exports any `T: Serialize` with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be converted, see [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: ExporterOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Exporter::with_options(options).export(&value, 0)
}
