//! Configuration options for the exporter.
//!
//! [`ExporterOptions`] controls the two size knobs of the shortened forms and
//! how the exporter treats records that a custom
//! [`ObjectExporter`](crate::ObjectExporter) declines.
//!
//! ## Examples
//!
//! ```rust
//! use value_exporter::{Exporter, ExporterOptions, Sequence, Value};
//!
//! let options = ExporterOptions::new()
//!     .with_shorten_arrays_longer_than(2)
//!     .with_max_length_for_strings(20);
//!
//! let data = Sequence::from_values(vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)]);
//! let summary = Exporter::with_options(options).shortened_recursive_export(&data, None);
//! assert_eq!(summary, "1, 2, 3, ...2 more elements");
//! ```

/// Default codepoint limit for shortened strings.
pub const DEFAULT_MAX_LENGTH_FOR_STRINGS: usize = 40;

/// Configuration options for [`Exporter`](crate::Exporter).
///
/// # Examples
///
/// ```rust
/// use value_exporter::ExporterOptions;
///
/// let options = ExporterOptions::new();
/// assert_eq!(options.shorten_arrays_longer_than, 0);
/// assert_eq!(options.max_length_for_strings, 40);
/// assert!(options.default_object_export);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExporterOptions {
    /// Element budget of the shortened recursive export; `0` disables truncation.
    pub shorten_arrays_longer_than: usize,
    /// Codepoint limit applied to strings in the shortened forms.
    pub max_length_for_strings: usize,
    /// Fall back to field expansion when the object exporter declines a record.
    pub default_object_export: bool,
}

impl Default for ExporterOptions {
    fn default() -> Self {
        ExporterOptions {
            shorten_arrays_longer_than: 0,
            max_length_for_strings: DEFAULT_MAX_LENGTH_FOR_STRINGS,
            default_object_export: true,
        }
    }
}

impl ExporterOptions {
    /// Creates default options (no truncation, 40 codepoint strings, default fallback).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element budget for [`Exporter::shortened_recursive_export`](crate::Exporter::shortened_recursive_export).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_exporter::ExporterOptions;
    ///
    /// let options = ExporterOptions::new().with_shorten_arrays_longer_than(10);
    /// assert_eq!(options.shorten_arrays_longer_than, 10);
    /// ```
    #[must_use]
    pub fn with_shorten_arrays_longer_than(mut self, limit: usize) -> Self {
        self.shorten_arrays_longer_than = limit;
        self
    }

    /// Sets the codepoint limit for shortened strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_exporter::ExporterOptions;
    ///
    /// let options = ExporterOptions::new().with_max_length_for_strings(20);
    /// assert_eq!(options.max_length_for_strings, 20);
    /// ```
    #[must_use]
    pub fn with_max_length_for_strings(mut self, max_length: usize) -> Self {
        self.max_length_for_strings = max_length;
        self
    }

    /// Controls whether records declined by the object exporter get the default
    /// field expansion (`true`) or are handed to the object exporter anyway,
    /// surfacing its [`Error::ObjectNotSupported`](crate::Error::ObjectNotSupported).
    #[must_use]
    pub fn with_default_object_export(mut self, enabled: bool) -> Self {
        self.default_object_export = enabled;
        self
    }
}
