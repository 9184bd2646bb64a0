//! Dynamic value representation for the exporter.
//!
//! This module provides the [`Value`] enum, the closed set of kinds the exporter
//! knows how to render, together with the two composite handle types that can
//! form graphs:
//!
//! - [`Sequence`]: an ordered, integer- or string-keyed collection (the "array")
//! - [`Record`]: an object-like entity with a type name and named fields
//!
//! Both are shared handles (`Rc<RefCell<..>>`): cloning a handle aliases the same
//! storage, which is how shared substructure and cycles are built. Identity is
//! by storage, never by structure.
//!
//! ## Building Values
//!
//! ```rust
//! use value_exporter::{EnumConstant, Record, Sequence, Value};
//!
//! let tags = Sequence::from_values(vec![Value::from("rust"), Value::from("debug")]);
//!
//! let user = Record::new("User")
//!     .with_field("name", "Alice")
//!     .with_field("tags", tags.clone())
//!     .with_field("role", EnumConstant::backed("Role", "Admin", "admin"));
//!
//! // A record that refers to itself
//! user.set("self", user.clone());
//!
//! assert_eq!(user.field_count(), 4);
//! ```
//!
//! ## Type Checking
//!
//! ```rust
//! use value_exporter::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_int());
//! assert!(!value.is_string());
//! assert_eq!(value.kind_name(), "int");
//! ```

use crate::FieldMap;
use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Hands out process-wide identity tokens. Tokens start at 1 and are never reused.
fn next_object_id() -> u64 {
    NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Identity of an enum case, interned by (type name, case name).
fn enum_case_id(type_name: &str, name: &str) -> u64 {
    static CASES: OnceLock<Mutex<HashMap<(String, String), u64>>> = OnceLock::new();

    let mut cases = CASES
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    *cases
        .entry((type_name.to_string(), name.to_string()))
        .or_insert_with(next_object_id)
}

/// A key of a [`Sequence`] entry or a [`Record`] field.
///
/// Integer and string keys never compare equal: `0` and `"0"` are distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// If the key is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// If the key is a string, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

/// Any value the exporter can render.
///
/// # Examples
///
/// ```rust
/// use value_exporter::{Sequence, Value};
///
/// let null = Value::Null;
/// let number = Value::from(1.5);
/// let list = Value::from(Sequence::new());
///
/// assert!(null.is_null());
/// assert!(number.is_float());
/// assert!(list.is_composite());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// A byte string that need not be valid UTF-8.
    Bytes(Vec<u8>),
    Resource(Resource),
    Array(Sequence),
    Object(Record),
    Enum(EnumConstant),
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a byte string.
    #[inline]
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, Value::Bytes(_))
    }

    /// Returns `true` if the value is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a record.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is an enum constant.
    #[inline]
    #[must_use]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Value::Enum(_))
    }

    /// Returns `true` for the kinds that carry an identity (sequences and records).
    #[inline]
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Short lowercase name of the value's kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Resource(_) => "resource",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Enum(_) => "enum",
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as `f64` for floats and integers.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the raw bytes of a string or byte string.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s.as_bytes()),
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Array(seq) => Some(seq),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_enum(&self) -> Option<&EnumConstant> {
        match self {
            Value::Enum(constant) => Some(constant),
            _ => None,
        }
    }
}

/// Renders the full export with default options.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = crate::Exporter::new()
            .export(self, 0)
            .map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// State of an OS-level handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceState {
    Open,
    Closed,
    /// The handle's state could not be determined.
    Unknown,
}

/// An opaque OS-level handle (file, socket, stream...) with a type tag.
///
/// # Examples
///
/// ```rust
/// use value_exporter::{Resource, ResourceState};
///
/// let stream = Resource::open(5, "stream");
/// assert_eq!(stream.state, ResourceState::Open);
/// assert!(Resource::closed(5, "stream").is_closed());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    pub id: i64,
    pub type_name: String,
    pub state: ResourceState,
}

impl Resource {
    pub fn open(id: i64, type_name: &str) -> Self {
        Resource {
            id,
            type_name: type_name.to_string(),
            state: ResourceState::Open,
        }
    }

    pub fn closed(id: i64, type_name: &str) -> Self {
        Resource {
            id,
            type_name: type_name.to_string(),
            state: ResourceState::Closed,
        }
    }

    pub fn unknown(id: i64) -> Self {
        Resource {
            id,
            type_name: String::new(),
            state: ResourceState::Unknown,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == ResourceState::Closed
    }
}

struct SequenceData {
    entries: FieldMap,
    // `None` once `i64::MAX` has been used as a key.
    next_index: Option<i64>,
}

impl Default for SequenceData {
    fn default() -> Self {
        SequenceData {
            entries: FieldMap::new(),
            next_index: Some(0),
        }
    }
}

impl SequenceData {
    fn bump_next_index(&mut self, key: &crate::Key) {
        if let (Key::Int(i), Some(next)) = (key, self.next_index) {
            if *i >= next {
                self.next_index = i.checked_add(1);
            }
        }
    }
}

/// An ordered, keyed collection with identity.
///
/// `Sequence` is a shared handle: `clone()` returns another handle to the same
/// storage, so the clone and the original are the *same* sequence for the
/// exporter. Build a fresh sequence to get an equal-but-distinct one.
///
/// Handles are strong references. A sequence that holds itself, directly or
/// through other composites, is never freed; [`Sequence::remove`] the entry
/// that closes the cycle once the graph is no longer needed.
///
/// # Examples
///
/// ```rust
/// use value_exporter::{Sequence, Value};
///
/// let list = Sequence::new();
/// list.push(1);
/// list.push("two");
/// list.insert("named", 3);
///
/// assert_eq!(list.len(), 3);
/// assert!(list.ptr_eq(&list.clone()));
/// assert!(!list.ptr_eq(&Sequence::new()));
/// ```
#[derive(Clone, Default)]
pub struct Sequence(Rc<RefCell<SequenceData>>);

impl Sequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence holding `values` under keys `0..n`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let seq = Sequence::new();
        for value in values {
            seq.push(value);
        }
        seq
    }

    /// Creates a sequence from keyed entries, in iteration order.
    pub fn from_map(entries: FieldMap) -> Self {
        let mut data = SequenceData::default();
        for key in entries.keys() {
            data.bump_next_index(key);
        }
        data.entries = entries;
        Sequence(Rc::new(RefCell::new(data)))
    }

    /// Appends a value under the next integer key and returns that key.
    ///
    /// The next key is one more than the largest integer key inserted so far,
    /// or `0` for a sequence that never held an integer key. Once `i64::MAX`
    /// is taken there is no next key: the value is dropped and `None` is
    /// returned, leaving the sequence untouched.
    ///
    /// ```rust
    /// use value_exporter::Sequence;
    ///
    /// let list = Sequence::new();
    /// list.insert(i64::MAX, "last");
    /// assert_eq!(list.push("overflow"), None);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn push(&self, value: impl Into<Value>) -> Option<i64> {
        let mut data = self.0.borrow_mut();
        let index = data.next_index?;
        data.next_index = index.checked_add(1);
        data.entries.insert(index, value.into());
        Some(index)
    }

    /// Inserts a value under `key`, replacing (in place) any previous value.
    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let mut data = self.0.borrow_mut();
        data.bump_next_index(&key);
        data.entries.insert(key, value.into())
    }

    /// Builder form of [`Sequence::insert`].
    #[must_use]
    pub fn with(self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns a clone of the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<Value> {
        self.0.borrow().entries.get(&key.into()).cloned()
    }

    pub fn remove(&self, key: impl Into<Key>) -> Option<Value> {
        self.0.borrow_mut().entries.remove(&key.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().entries.is_empty()
    }

    /// Snapshot of the entries in insertion order.
    ///
    /// Nested composites in the snapshot are handles to the live values.
    #[must_use]
    pub fn entries(&self) -> FieldMap {
        self.0.borrow().entries.clone()
    }

    /// Borrows the live entries without copying.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is currently being mutated.
    pub fn borrow_entries(&self) -> Ref<'_, FieldMap> {
        Ref::map(self.0.borrow(), |data| &data.entries)
    }

    /// Returns `true` if both handles point at the same storage.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared storage, stable for as long as any handle lives.
    #[inline]
    #[must_use]
    pub fn storage_address(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Sequence");
        debug.field("address", &format_args!("{:#x}", self.storage_address()));
        if let Ok(data) = self.0.try_borrow() {
            debug.field("len", &data.entries.len());
        }
        debug.finish()
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Flavour of a [`Record`], deciding how its fields are extracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// An ordinary object.
    Plain,
    /// An error/exception-like object; its `trace` field is never exported.
    Throwable,
    /// An identity-keyed collection of objects, each with attached info.
    ObjectStorage,
}

struct RecordInner {
    id: u64,
    class_name: String,
    kind: RecordKind,
    fields: RefCell<FieldMap>,
    attached: RefCell<Vec<(Record, Value)>>,
}

/// An object-like value with a type name and ordered fields.
///
/// Every record receives a process-wide identity token when it is created; all
/// handles cloned from it share that token, and no other record ever gets it.
///
/// Like [`Sequence`], handles are strong references: a record reachable from its
/// own fields (for example through `set("self", ..)`) leaks unless the field
/// is removed with [`Record::remove`].
///
/// # Examples
///
/// ```rust
/// use value_exporter::Record;
///
/// let point = Record::new("Point").with_field("x", 1).with_field("y", 2);
/// let alias = point.clone();
///
/// assert_eq!(point.id(), alias.id());
/// assert_ne!(point.id(), Record::new("Point").id());
/// assert_eq!(point.class_name(), "Point");
/// ```
#[derive(Clone)]
pub struct Record(Rc<RecordInner>);

impl Record {
    fn with_kind(class_name: &str, kind: RecordKind) -> Self {
        Record(Rc::new(RecordInner {
            id: next_object_id(),
            class_name: class_name.to_string(),
            kind,
            fields: RefCell::new(FieldMap::new()),
            attached: RefCell::new(Vec::new()),
        }))
    }

    /// Creates an empty plain record of the given type.
    pub fn new(class_name: &str) -> Self {
        Self::with_kind(class_name, RecordKind::Plain)
    }

    /// Creates an error/exception-like record.
    pub fn throwable(class_name: &str) -> Self {
        Self::with_kind(class_name, RecordKind::Throwable)
    }

    /// Creates an identity-keyed object collection.
    pub fn object_storage(class_name: &str) -> Self {
        Self::with_kind(class_name, RecordKind::ObjectStorage)
    }

    /// The record's identity token.
    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.0.id
    }

    #[inline]
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.0.class_name
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        self.0.kind
    }

    /// Sets a field, replacing (in place) any previous value.
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.fields.borrow_mut().insert(key, value.into())
    }

    /// Builder form of [`Record::set`].
    #[must_use]
    pub fn with_field(self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<Value> {
        self.0.fields.borrow().get(&key.into()).cloned()
    }

    pub fn remove(&self, key: impl Into<Key>) -> Option<Value> {
        self.0.fields.borrow_mut().remove(&key.into())
    }

    /// Snapshot of every declared field, including internal ones.
    ///
    /// Use [`Exporter::to_field_map`](crate::Exporter::to_field_map) for the
    /// fields as the exporter sees them.
    #[must_use]
    pub fn fields(&self) -> FieldMap {
        self.0.fields.borrow().clone()
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.0.fields.borrow().len()
    }

    /// Attaches `object` with `info` to an object storage.
    ///
    /// Attaching an object that is already present replaces its info.
    pub fn attach(&self, object: &Record, info: impl Into<Value>) {
        let info = info.into();
        let mut attached = self.0.attached.borrow_mut();
        match attached.iter_mut().find(|(held, _)| held.ptr_eq(object)) {
            Some(entry) => entry.1 = info,
            None => attached.push((object.clone(), info)),
        }
    }

    /// Detaches `object`, returning its info if it was attached.
    pub fn detach(&self, object: &Record) -> Option<Value> {
        let mut attached = self.0.attached.borrow_mut();
        let position = attached.iter().position(|(held, _)| held.ptr_eq(object))?;
        Some(attached.remove(position).1)
    }

    /// Snapshot of attached objects and their info, in attach order.
    #[must_use]
    pub fn attached(&self) -> Vec<(Record, Value)> {
        self.0.attached.borrow().clone()
    }

    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Record) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("id", &self.0.id)
            .field("class_name", &self.0.class_name)
            .field("kind", &self.0.kind)
            .finish()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// Scalar carried by a backed enum constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backing {
    Int(i64),
    String(String),
}

impl From<i64> for Backing {
    fn from(value: i64) -> Self {
        Backing::Int(value)
    }
}

impl From<i32> for Backing {
    fn from(value: i32) -> Self {
        Backing::Int(value as i64)
    }
}

impl From<&str> for Backing {
    fn from(value: &str) -> Self {
        Backing::String(value.to_string())
    }
}

impl From<String> for Backing {
    fn from(value: String) -> Self {
        Backing::String(value)
    }
}

impl From<Backing> for Value {
    fn from(value: Backing) -> Self {
        match value {
            Backing::Int(i) => Value::Int(i),
            Backing::String(s) => Value::String(s),
        }
    }
}

/// A named constant of an enumeration type.
///
/// Identity is interned per (type name, constant name): constructing the same
/// case twice yields the same [`id`](EnumConstant::id).
///
/// # Examples
///
/// ```rust
/// use value_exporter::EnumConstant;
///
/// let hearts = EnumConstant::unit("Suit", "Hearts");
/// assert_eq!(hearts.id(), EnumConstant::unit("Suit", "Hearts").id());
///
/// let admin = EnumConstant::backed("Role", "Admin", "admin");
/// assert!(admin.backing().is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EnumConstant {
    id: u64,
    type_name: String,
    name: String,
    backing: Option<Backing>,
}

impl EnumConstant {
    /// Creates a constant without a backing value.
    pub fn unit(type_name: &str, name: &str) -> Self {
        EnumConstant {
            id: enum_case_id(type_name, name),
            type_name: type_name.to_string(),
            name: name.to_string(),
            backing: None,
        }
    }

    /// Creates a constant backed by a string or integer.
    pub fn backed(type_name: &str, name: &str, backing: impl Into<Backing>) -> Self {
        EnumConstant {
            backing: Some(backing.into()),
            ..Self::unit(type_name, name)
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn backing(&self) -> Option<&Backing> {
        self.backing.as_ref()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Int(i) => Value::Int(i),
            Key::Str(s) => Value::String(s),
        }
    }
}

impl From<Resource> for Value {
    fn from(value: Resource) -> Self {
        Value::Resource(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Value::Array(value)
    }
}

impl From<&Sequence> for Value {
    fn from(value: &Sequence) -> Self {
        Value::Array(value.clone())
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Object(value)
    }
}

impl From<&Record> for Value {
    fn from(value: &Record) -> Self {
        Value::Object(value.clone())
    }
}

impl From<EnumConstant> for Value {
    fn from(value: EnumConstant) -> Self {
        Value::Enum(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(Sequence::from_values(value))
    }
}

impl From<FieldMap> for Value {
    fn from(value: FieldMap) -> Self {
        Value::Array(Sequence::from_map(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
