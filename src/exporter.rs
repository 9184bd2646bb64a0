//! The recursive exporter.
//!
//! [`Exporter`] turns a [`Value`] graph into text. Three renderings are offered:
//!
//! - **Full export** ([`Exporter::export`]): multi-line, four spaces per
//!   indentation level, every sequence numbered `Array &<n>` in visitation order
//!   and every record tagged with its identity `Object #<id>`. A composite seen a
//!   second time (through a cycle or an alias) renders as the bare reference.
//! - **Shortened export** ([`Exporter::shortened_export`]): one line, composites
//!   collapsed to a presence marker, strings truncated to a codepoint budget.
//! - **Shortened recursive export** ([`Exporter::shortened_recursive_export`]):
//!   one line, nested sequences inlined as `[a, b]`, cycles as `*RECURSION*`, and
//!   an optional element budget.
//!
//! ## Output Format
//!
//! ```text
//! Array &0 [
//!     0 => Array &1 [
//!         0 => 1,
//!         1 => 2,
//!     ],
//!     'owner' => User Object #7 (
//!         'name' => 'Alice',
//!         'self' => User Object #7,
//!     ),
//! ]
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use value_exporter::{Exporter, Sequence, Value};
//!
//! let data = Sequence::from_values(vec![Value::from(1), Value::from("two")]);
//! let exporter = Exporter::new();
//!
//! assert_eq!(
//!     exporter.export(&data.clone().into(), 0).unwrap(),
//!     "Array &0 [\n    0 => 1,\n    1 => 'two',\n]"
//! );
//! assert_eq!(exporter.shortened_export(&data.into()), "[...]");
//! ```

use crate::{
    Backing, Context, EnumConstant, ExporterOptions, FieldMap, Key, ObjectExporter, Record,
    RecordKind, Resource, ResourceState, Result, Sequence, Value,
};
use std::borrow::Cow;
use std::fmt::{self, Write};

/// Reserved garbage-collection slot; never part of a record's exported fields.
pub const GC_DATA_FIELD: &str = "\0gcdata";

/// Stack-trace field of throwable records; never exported.
pub const TRACE_FIELD: &str = "trace";

const INDENT: &str = "    ";
const RECURSION_MARKER: &str = "*RECURSION*";
const ELLIPSIS: &str = "...";
const SHORTENED_TAIL_LENGTH: usize = 7;

/// Renders [`Value`]s as human-readable text.
///
/// An `Exporter` is cheap to build and holds no walk state: every call to
/// [`export`](Exporter::export) uses a fresh [`Context`] unless one is supplied
/// through [`export_with_context`](Exporter::export_with_context).
#[derive(Default)]
pub struct Exporter {
    options: ExporterOptions,
    object_exporter: Option<Box<dyn ObjectExporter>>,
}

impl fmt::Debug for Exporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exporter")
            .field("options", &self.options)
            .field("object_exporter", &self.object_exporter.is_some())
            .finish()
    }
}

impl Exporter {
    /// Creates an exporter with default options and no object exporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an exporter with the given options and no object exporter.
    ///
    /// ```rust
    /// use value_exporter::{Exporter, ExporterOptions};
    ///
    /// let exporter = Exporter::with_options(ExporterOptions::new().with_max_length_for_strings(12));
    /// assert_eq!(exporter.options().max_length_for_strings, 12);
    /// ```
    #[must_use]
    pub fn with_options(options: ExporterOptions) -> Self {
        Exporter {
            options,
            object_exporter: None,
        }
    }

    /// Installs a custom renderer for records (a single exporter or an
    /// [`ObjectExporterChain`](crate::ObjectExporterChain)).
    #[must_use]
    pub fn with_object_exporter(mut self, exporter: impl ObjectExporter + 'static) -> Self {
        self.object_exporter = Some(Box::new(exporter));
        self
    }

    /// Returns the options this exporter was built with.
    #[must_use]
    pub fn options(&self) -> &ExporterOptions {
        &self.options
    }

    /// Exports a value into a multi-line string.
    ///
    /// `indentation` is the level of the value's closing line; nested lines are
    /// indented from there.
    ///
    /// # Errors
    ///
    /// Only fails when a configured object exporter rejects a record, see
    /// [`ExporterOptions::default_object_export`].
    pub fn export(&self, value: &Value, indentation: usize) -> Result<String> {
        let mut context = Context::new();
        self.export_with_context(value, indentation, &mut context)
    }

    /// Exports a value, sharing identity state with earlier calls through `context`.
    ///
    /// Composites already registered in `context` render as references.
    ///
    /// # Errors
    ///
    /// Same as [`Exporter::export`].
    pub fn export_with_context(
        &self,
        value: &Value,
        indentation: usize,
        context: &mut Context,
    ) -> Result<String> {
        match value {
            Value::Null => Ok("null".to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(export_float(*f)),
            Value::String(s) => Ok(export_string(s)),
            Value::Bytes(bytes) => Ok(export_bytes(bytes)),
            Value::Resource(resource) => Ok(export_resource(resource)),
            Value::Enum(constant) => Ok(export_enum(constant, true)),
            Value::Array(seq) => self.export_sequence(seq, indentation, context),
            Value::Object(record) => self.export_record(record, indentation, context),
        }
    }

    /// Exports a value into a single line, using the configured string limit.
    pub fn shortened_export(&self, value: &Value) -> String {
        self.shortened_export_with_limit(value, self.options.max_length_for_strings)
    }

    /// Exports a value into a single line.
    ///
    /// Strings lose their line breaks and, when longer than `max_length_for_strings`
    /// codepoints, keep only a head and a 7 codepoint tail around `...`.
    /// Composites only report whether they hold anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_exporter::{Exporter, Record, Value};
    ///
    /// let exporter = Exporter::new();
    /// let long = Value::from("A".repeat(21));
    /// assert_eq!(
    ///     exporter.shortened_export_with_limit(&long, 20),
    ///     format!("'{}...{}'", "A".repeat(9), "A".repeat(6))
    /// );
    /// assert_eq!(
    ///     exporter.shortened_export(&Record::new("Empty").into()),
    ///     "Empty Object ()"
    /// );
    /// ```
    pub fn shortened_export_with_limit(&self, value: &Value, max_length_for_strings: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => export_float(*f),
            Value::String(s) => shorten_string(s, max_length_for_strings),
            Value::Bytes(bytes) => shorten_bytes(bytes, max_length_for_strings),
            Value::Resource(resource) => export_resource(resource),
            Value::Enum(constant) => export_enum(constant, false),
            Value::Array(seq) => {
                if seq.is_empty() {
                    "[]".to_string()
                } else {
                    "[...]".to_string()
                }
            }
            Value::Object(record) => format!(
                "{} Object ({})",
                record.class_name(),
                if has_exported_fields(record) { ELLIPSIS } else { "" }
            ),
        }
    }

    /// Exports a sequence into one line, inlining nested sequences.
    ///
    /// Nested sequences render as `[a, b, c]`; a sequence already present in the
    /// context renders as `*RECURSION*`; everything else uses
    /// [`shortened_export`](Exporter::shortened_export). With a non-zero
    /// [`shorten_arrays_longer_than`](ExporterOptions::shorten_arrays_longer_than)
    /// budget the walk stops once more elements than the budget have been
    /// rendered, and `, ...<n> more elements` reports how far the recursive
    /// element count of `data` exceeds the budget.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_exporter::{Exporter, ExporterOptions, Sequence, Value};
    ///
    /// let inner = Sequence::from_values(vec![1, 2, 3]);
    /// let data = Sequence::from_values(vec![Value::from(inner), Value::from("x")]);
    ///
    /// assert_eq!(
    ///     Exporter::new().shortened_recursive_export(&data, None),
    ///     "[1, 2, 3], 'x'"
    /// );
    /// ```
    pub fn shortened_recursive_export(&self, data: &Sequence, context: Option<&mut Context>) -> String {
        let mut fresh = Context::new();
        let context = context.unwrap_or(&mut fresh);

        let limit = self.options.shorten_arrays_longer_than;
        let total = count_recursive(data);
        let mut counter = 0;
        let mut export = self.shortened_counted_recursive_export(data, context, &mut counter);

        if limit > 0 && total > limit {
            let remaining = total - limit;
            tracing::debug!(total, limit, remaining, "shortened recursive export truncated");
            export.push_str(&format!(", ...{} more elements", remaining));
        }

        export
    }

    /// Fields of a record as the exporter renders them.
    ///
    /// - records: every field except internal ones ([`GC_DATA_FIELD`], and
    ///   [`TRACE_FIELD`] on throwables); object storages add one
    ///   `'Object #<id>' => ['held' => .., 'info' => ..]` entry per attached object
    /// - sequences: their entries
    /// - enum constants: `name`, plus `value` when backed
    /// - `null`: nothing
    /// - any other scalar: itself under key `0`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_exporter::{Exporter, Key, Record, Value};
    ///
    /// let error = Record::throwable("RuntimeError")
    ///     .with_field("message", "boom")
    ///     .with_field("trace", Value::from(vec![Value::from("frame")]));
    ///
    /// let fields = Exporter::new().to_field_map(&error.into());
    /// assert_eq!(fields.len(), 1);
    /// assert!(fields.contains_key(&Key::from("message")));
    ///
    /// let wrapped = Exporter::new().to_field_map(&Value::from(true));
    /// assert_eq!(wrapped.get(&Key::Int(0)), Some(&Value::Bool(true)));
    /// ```
    #[must_use]
    pub fn to_field_map(&self, value: &Value) -> FieldMap {
        match value {
            Value::Object(record) => record_field_map(record),
            Value::Array(seq) => seq.entries(),
            Value::Null => FieldMap::new(),
            Value::Enum(constant) => {
                let mut map = FieldMap::with_capacity(2);
                map.insert("name", Value::from(constant.name()));
                if let Some(backing) = constant.backing() {
                    map.insert("value", Value::from(backing.clone()));
                }
                map
            }
            scalar => {
                let mut map = FieldMap::with_capacity(1);
                map.insert(0, scalar.clone());
                map
            }
        }
    }

    fn export_sequence(
        &self,
        seq: &Sequence,
        indentation: usize,
        context: &mut Context,
    ) -> Result<String> {
        if let Some(index) = context.contains_sequence(seq) {
            tracing::trace!(index, "sequence already exported, emitting reference");
            return Ok(format!("Array &{}", index));
        }

        let index = context.add_sequence(seq);
        let body = self.export_entries(&seq.entries(), indentation, context)?;

        Ok(format!("Array &{} [{}]", index, body))
    }

    fn export_record(
        &self,
        record: &Record,
        indentation: usize,
        context: &mut Context,
    ) -> Result<String> {
        let class = record.class_name();

        if context.contains_record(record).is_some() {
            tracing::trace!(class, id = record.id(), "record already exported, emitting reference");
            return Ok(format!("{} Object #{}", class, record.id()));
        }

        context.add_record(record);

        let body = match &self.object_exporter {
            Some(custom) if custom.handles(record) || !self.options.default_object_export => {
                custom.export(record, self, context, indentation)?
            }
            _ => self.export_entries(&record_field_map(record), indentation, context)?,
        };

        Ok(format!("{} Object #{} ({})", class, record.id(), body))
    }

    /// Entry lines of a composite; empty for a composite without entries.
    fn export_entries(
        &self,
        entries: &FieldMap,
        indentation: usize,
        context: &mut Context,
    ) -> Result<String> {
        if entries.is_empty() {
            return Ok(String::new());
        }

        let whitespace = INDENT.repeat(indentation);
        let mut body = String::with_capacity(entries.len() * 32);
        body.push('\n');

        for (key, value) in entries {
            body.push_str(&whitespace);
            body.push_str(INDENT);
            body.push_str(&export_key(key));
            body.push_str(" => ");
            body.push_str(&self.export_with_context(value, indentation + 1, context)?);
            body.push_str(",\n");
        }

        body.push_str(&whitespace);
        Ok(body)
    }

    fn shortened_counted_recursive_export(
        &self,
        data: &Sequence,
        context: &mut Context,
        counter: &mut usize,
    ) -> String {
        let limit = self.options.shorten_arrays_longer_than;
        context.add_sequence(data);

        let entries = data.entries();
        let mut result = Vec::with_capacity(entries.len());

        for value in entries.values() {
            if limit > 0 && *counter > limit {
                break;
            }

            match value {
                Value::Array(inner) => {
                    if context.contains_sequence(inner).is_some() {
                        result.push(RECURSION_MARKER.to_string());
                    } else {
                        let nested = self.shortened_counted_recursive_export(inner, context, counter);
                        result.push(format!("[{}]", nested));
                    }
                }
                other => result.push(self.shortened_export(other)),
            }

            *counter += 1;
        }

        result.join(", ")
    }
}

fn is_internal_field(kind: RecordKind, key: &Key) -> bool {
    match key {
        Key::Str(name) => {
            name == GC_DATA_FIELD || (kind == RecordKind::Throwable && name == TRACE_FIELD)
        }
        Key::Int(_) => false,
    }
}

fn record_field_map(record: &Record) -> FieldMap {
    let kind = record.kind();
    let mut map: FieldMap = record
        .fields()
        .into_iter()
        .filter(|(key, _)| !is_internal_field(kind, key))
        .collect();

    if kind == RecordKind::ObjectStorage {
        for (held, info) in record.attached() {
            let entry = Sequence::new().with("held", &held).with("info", info);
            map.insert(format!("Object #{}", held.id()), Value::Array(entry));
        }
    }

    map
}

fn has_exported_fields(record: &Record) -> bool {
    let kind = record.kind();
    record.fields().keys().any(|key| !is_internal_field(kind, key))
        || (kind == RecordKind::ObjectStorage && !record.attached().is_empty())
}

/// Recursive element count: every entry counts once, nested sequences also
/// count their own entries. A sequence already on the current path is not
/// descended into again.
fn count_recursive(data: &Sequence) -> usize {
    fn walk(seq: &Sequence, path: &mut Vec<usize>) -> usize {
        path.push(seq.storage_address());

        let mut count = 0;
        for value in seq.entries().values() {
            count += 1;
            if let Value::Array(inner) = value {
                if !path.contains(&inner.storage_address()) {
                    count += walk(inner, path);
                }
            }
        }

        path.pop();
        count
    }

    walk(data, &mut Vec::new())
}

fn export_key(key: &Key) -> String {
    match key {
        Key::Int(i) => i.to_string(),
        Key::Str(s) => export_string(s),
    }
}

fn export_resource(resource: &Resource) -> String {
    match resource.state {
        ResourceState::Closed => "resource (closed)".to_string(),
        ResourceState::Open => format!(
            "resource({}) of type ({})",
            resource.id, resource.type_name
        ),
        ResourceState::Unknown => format!("resource({}) of unknown type", resource.id),
    }
}

fn export_enum(constant: &EnumConstant, with_id: bool) -> String {
    let mut output = format!("{} Enum ", constant.type_name());
    if with_id {
        output.push_str(&format!("#{} ", constant.id()));
    }

    output.push('(');
    output.push_str(constant.name());
    if let Some(backing) = constant.backing() {
        output.push_str(", ");
        match backing {
            Backing::Int(i) => output.push_str(&i.to_string()),
            Backing::String(s) => output.push_str(&export_string(s)),
        }
    }
    output.push(')');
    output
}

/// Shortest round-trip representation, integral values keep a `.0`.
///
/// Switches to `d.dddE+x` notation once the decimal point would sit more than
/// 17 digits right of the first digit, or more than 3 zeros left of it.
pub(crate) fn export_float(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let decimal_point = exponent + 1;

    if !(-3..=17).contains(&decimal_point) {
        let (first, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}{}.{}E{}{}",
            sign,
            first,
            rest,
            exponent_sign,
            exponent.unsigned_abs()
        );
    }

    if decimal_point <= 0 {
        let zeros = "0".repeat(decimal_point.unsigned_abs() as usize);
        format!("{}0.{}{}", sign, zeros, digits)
    } else {
        let point = decimal_point as usize;
        if point >= digits.len() {
            let zeros = "0".repeat(point - digits.len());
            format!("{}{}{}.0", sign, digits, zeros)
        } else {
            let (integral, fractional) = digits.split_at(point);
            format!("{}{}.{}", sign, integral, fractional)
        }
    }
}

#[inline]
fn is_binary_byte(byte: u8) -> bool {
    !matches!(byte, 0x09..=0x0d | 0x1b | 0x20..=0xff)
}

#[derive(Clone, Copy)]
enum Segment<'a> {
    Text(&'a str),
    Break(&'static str),
}

// Replaced one after another, so "\r\n" wins over its parts.
const LINE_BREAKS: [(&str, &str); 4] = [
    ("\r\n", "\\r\\n"),
    ("\n\r", "\\n\\r"),
    ("\r", "\\r"),
    ("\n", "\\n"),
];

fn split_line_breaks(value: &str) -> Vec<Segment<'_>> {
    let mut segments = vec![Segment::Text(value)];

    for (needle, escaped) in LINE_BREAKS {
        segments = segments
            .into_iter()
            .flat_map(|segment| match segment {
                Segment::Text(text) => {
                    let mut parts = text.split(needle);
                    let mut split = Vec::new();
                    if let Some(first) = parts.next() {
                        split.push(Segment::Text(first));
                    }
                    for part in parts {
                        split.push(Segment::Break(escaped));
                        split.push(Segment::Text(part));
                    }
                    split
                }
                line_break => vec![line_break],
            })
            .collect();
    }

    segments
}

/// Single-quoted string with escaped line breaks, or a hex dump for binary data.
pub(crate) fn export_string(value: &str) -> String {
    export_bytes(value.as_bytes())
}

/// Byte strings are classified byte by byte.
///
/// Text that is not valid UTF-8 is rendered one codepoint per byte (Latin-1),
/// so the quoted form keeps the byte count.
pub(crate) fn export_bytes(bytes: &[u8]) -> String {
    if bytes.iter().copied().any(is_binary_byte) {
        let mut output = String::with_capacity(17 + bytes.len() * 2);
        output.push_str("Binary String: 0x");
        for byte in bytes {
            let _ = write!(output, "{:02x}", byte);
        }
        return output;
    }

    let text = match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().copied().map(char::from).collect::<String>()),
    };

    let mut output = String::with_capacity(text.len() + 2);
    output.push('\'');
    for segment in split_line_breaks(&text) {
        match segment {
            Segment::Text(text) => output.push_str(text),
            Segment::Break(escaped) => {
                output.push_str(escaped);
                output.push('\n');
            }
        }
    }
    output.push('\'');
    output
}

fn shorten_string(value: &str, max_length: usize) -> String {
    shorten_bytes(value.as_bytes(), max_length)
}

fn shorten_bytes(bytes: &[u8], max_length: usize) -> String {
    let exported = export_bytes(bytes).replace('\n', "");
    let length = exported.chars().count();

    if length <= max_length {
        return exported;
    }

    let tail_length = SHORTENED_TAIL_LENGTH.min(max_length);
    let head_length = max_length.saturating_sub(ELLIPSIS.len() + SHORTENED_TAIL_LENGTH);

    let head: String = exported.chars().take(head_length).collect();
    let tail: String = exported.chars().skip(length - tail_length).collect();
    format!("{}{}{}", head, ELLIPSIS, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_integral_values_keep_fraction() {
        assert_eq!(export_float(1.0), "1.0");
        assert_eq!(export_float(2.0), "2.0");
        assert_eq!(export_float(0.0), "0.0");
        assert_eq!(export_float(-3.0), "-3.0");
        assert_eq!(export_float(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_float_shortest_round_trip() {
        assert_eq!(export_float(1.2), "1.2");
        assert_eq!(export_float(2.5), "2.5");
        assert_eq!(export_float(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(export_float(1.0 - 2.0 / 3.0), "0.33333333333333337");
        assert_eq!(export_float(0.0001), "0.0001");
        assert_eq!(export_float(-123456.789), "-123456.789");
    }

    #[test]
    fn test_float_exponent_notation() {
        assert_eq!(export_float(5.5e123), "5.5E+123");
        assert_eq!(export_float(5.5e-123), "5.5E-123");
        assert_eq!(export_float(1e17), "1.0E+17");
        assert_eq!(export_float(0.00001), "1.0E-5");
        assert_eq!(export_float(-2.5e-7), "-2.5E-7");
    }

    #[test]
    fn test_float_named_constants() {
        assert_eq!(export_float(f64::NAN), "NAN");
        assert_eq!(export_float(f64::INFINITY), "INF");
        assert_eq!(export_float(f64::NEG_INFINITY), "-INF");
    }

    #[test]
    fn test_binary_detection() {
        assert_eq!(export_string("\u{0}\u{1}"), "Binary String: 0x0001");
        assert_eq!(export_string("\u{0}\t"), "Binary String: 0x0009");
        assert_eq!(
            export_string("\u{e}\u{f}\u{1f}"),
            "Binary String: 0x0e0f1f"
        );
        assert_eq!(export_string("\u{1b}[0m"), "'\u{1b}[0m'");
        assert_eq!(export_string(""), "''");
    }

    #[test]
    fn test_line_breaks_are_escaped_in_order() {
        assert_eq!(export_string("a\r\nb"), "'a\\r\\n\nb'");
        assert_eq!(export_string("a\n\rb"), "'a\\n\\r\nb'");
        assert_eq!(export_string("a\rb\nc"), "'a\\r\nb\\n\nc'");
        // "\r\n" is consumed before "\n\r" gets a chance
        assert_eq!(export_string("\n\r\n"), "'\\n\n\\r\\n\n'");
    }

    #[test]
    fn test_control_whitespace_is_not_binary() {
        let exported = export_string("\t\n\u{b}\u{c}\r");
        assert_eq!(exported, "'\t\\n\n\u{b}\u{c}\\r\n'");
        assert_eq!(exported.chars().count() - 2, 9);
    }

    #[test]
    fn test_raw_bytes() {
        assert_eq!(export_bytes(&[0xff, 0x00]), "Binary String: 0xff00");
        assert_eq!(export_bytes(b"plain"), "'plain'");
        assert_eq!(export_bytes("日本".as_bytes()), "'日本'");
        assert_eq!(export_bytes(&[b'a', 0xe9, b'\n']), "'a\u{e9}\\n\n'");
    }

    #[test]
    fn test_shorten_invalid_utf8_counts_bytes() {
        let bytes = [0xe9_u8; 50];
        let shortened = shorten_bytes(&bytes, 20);
        assert_eq!(
            shortened,
            format!("'{}...{}'", "\u{e9}".repeat(9), "\u{e9}".repeat(6))
        );
    }

    #[test]
    fn test_shorten_string_keeps_head_and_tail() {
        assert_eq!(
            shorten_string(&"A".repeat(38), 40),
            format!("'{}'", "A".repeat(38))
        );
        assert_eq!(
            shorten_string(&"A".repeat(39), 40),
            format!("'{}...{}'", "A".repeat(29), "A".repeat(6))
        );
    }

    #[test]
    fn test_shorten_string_counts_codepoints() {
        assert_eq!(
            shorten_string(&"🧪".repeat(38), 40),
            format!("'{}'", "🧪".repeat(38))
        );
        assert_eq!(
            shorten_string(&"🧪".repeat(39), 40),
            format!("'{}...{}'", "🧪".repeat(29), "🧪".repeat(6))
        );
    }

    #[test]
    fn test_shorten_string_with_tiny_limit() {
        let shortened = shorten_string("abcdefgh", 3);
        assert_eq!(shortened, "...gh'");
        assert!(shortened.chars().count() <= 3 + 3);
    }

    #[test]
    fn test_count_recursive_counts_nested_entries() {
        let inner = Sequence::from_values(vec![1, 2, 3]);
        let outer = Sequence::from_values(vec![Value::from(inner), Value::from(4)]);
        assert_eq!(count_recursive(&outer), 5);
    }

    #[test]
    fn test_count_recursive_stops_at_cycles() {
        let seq = Sequence::from_values(vec![1]);
        seq.push(&seq);
        assert_eq!(count_recursive(&seq), 2);
    }

    #[test]
    fn test_resource_forms() {
        assert_eq!(
            export_resource(&Resource::open(7, "stream")),
            "resource(7) of type (stream)"
        );
        assert_eq!(export_resource(&Resource::closed(7, "stream")), "resource (closed)");
        assert_eq!(export_resource(&Resource::unknown(7)), "resource(7) of unknown type");
    }

    #[test]
    fn test_internal_fields() {
        assert!(is_internal_field(RecordKind::Plain, &Key::from(GC_DATA_FIELD)));
        assert!(!is_internal_field(RecordKind::Plain, &Key::from(TRACE_FIELD)));
        assert!(is_internal_field(RecordKind::Throwable, &Key::from(TRACE_FIELD)));
        assert!(!is_internal_field(RecordKind::Throwable, &Key::Int(0)));
    }
}
