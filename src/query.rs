//! GraphQL document building for the monday.com API
//!
//! Documents are put together with plain string formatting. Nothing here knows
//! the API's schema, so a malformed document is only rejected by the server.
//!
//! Argument values are not escaped. A string containing `"` or other
//! GraphQL-significant characters is emitted as-is, callers passing untrusted
//! text must sanitize it first.

use serde_json::Value;
use std::{fmt, iter::FromIterator};

/// A single argument value.
///
/// `Text` follows a word heuristic rather than the value's type: a value
/// without whitespace is emitted bare (so `private` works as an enum literal)
/// while a value with whitespace is wrapped in double quotes. A one-word value
/// meant as a GraphQL string (a status label such as `Stuck`) must therefore be
/// passed as `Quoted`.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Int(i64),
    /// Unsigned integers keep their full range, so a `u64` id above
    /// `i64::MAX` is emitted as written
    UInt(u64),
    /// `NaN` and the infinities have no GraphQL literal and are emitted as
    /// `null`
    Float(f64),
    Bool(bool),
    Text(String),
    /// Emitted verbatim, never quoted
    Raw(String),
    /// Always emitted as a string literal
    Quoted(String),
    List(Vec<ArgValue>),
    /// Emitted as a string literal holding the encoded JSON, the form the API
    /// expects for `column_values`, `defaults` and similar `JSON` arguments
    Json(Value),
}

impl ArgValue {
    pub fn raw<S: Into<String>>(value: S) -> Self {
        ArgValue::Raw(value.into())
    }

    pub fn quoted<S: Into<String>>(value: S) -> Self {
        ArgValue::Quoted(value.into())
    }

    pub fn json<V: Into<Value>>(value: V) -> Self {
        ArgValue::Json(value.into())
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Int(v) => write!(f, "{}", v),
            ArgValue::UInt(v) => write!(f, "{}", v),
            ArgValue::Float(v) if !v.is_finite() => f.write_str("null"),
            ArgValue::Float(v) => write!(f, "{}", v),
            ArgValue::Bool(v) => write!(f, "{}", v),
            ArgValue::Text(v) => {
                if v.is_empty() || v.chars().any(char::is_whitespace) {
                    write!(f, "\"{}\"", v)
                } else {
                    f.write_str(v)
                }
            }
            ArgValue::Raw(v) => f.write_str(v),
            ArgValue::Quoted(v) => write!(f, "\"{}\"", v),
            ArgValue::List(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            // Value's Display is compact JSON; wrapping it in a Value::String
            // gives back a quoted and escaped literal.
            ArgValue::Json(v) => write!(f, "{}", Value::String(v.to_string())),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for ArgValue {
                fn from(value: $t) -> Self {
                    ArgValue::$variant(value as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64);
impl_from_int!(UInt as u64: u8, u16, u32, u64, usize);

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        ArgValue::Float(f64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Text(value.to_owned())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Text(value)
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        ArgValue::Json(value)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(values: Vec<T>) -> Self {
        ArgValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ArgValue> + Clone> From<&[T]> for ArgValue {
    fn from(values: &[T]) -> Self {
        ArgValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

/// Ordered argument map. Inserting an existing key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args(Vec<(String, ArgValue)>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn arg<K: Into<String>, V: Into<ArgValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<K: Into<String>, V: Into<ArgValue>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<ArgValue> {
        let key = key.into();
        let value = value.into();

        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ArgValue>> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Args::new();
        for (key, value) in iter {
            args.insert(key, value);
        }
        args
    }
}

/// One entry of a selection set
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Field(String),
    Nested(String, Vec<Selection>),
}

impl Selection {
    pub fn field<S: Into<String>>(name: S) -> Self {
        Selection::Field(name.into())
    }

    pub fn nested<S, I>(name: S, children: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator,
        I::Item: Into<Selection>,
    {
        Selection::Nested(name.into(), children.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Selection {
    fn from(name: &str) -> Self {
        Selection::Field(name.to_owned())
    }
}

impl From<String> for Selection {
    fn from(name: String) -> Self {
        Selection::Field(name)
    }
}

/// Turn a list of bare field names into a selection set
pub fn fields<I>(names: I) -> Vec<Selection>
where
    I: IntoIterator,
    I::Item: Into<Selection>,
{
    names.into_iter().map(Into::into).collect()
}

/// Render an argument map as `key: value, key: value`.
///
/// The surrounding parentheses are left to the caller so that an empty map
/// never produces `()`.
pub fn format_args(args: &Args) -> String {
    args.iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a selection set, recursing into nested entries as `name { ... }`.
///
/// A nested entry with no children is emitted as a bare `name`, never as
/// `name {  }`.
pub fn format_select(selection: &[Selection]) -> String {
    selection
        .iter()
        .map(|entry| match entry {
            Selection::Field(name) => name.clone(),
            Selection::Nested(name, children) if children.is_empty() => name.clone(),
            Selection::Nested(name, children) => {
                format!("{} {{ {} }}", name, format_select(children))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `name(args)`, or just `name` when there are no arguments. Also usable as the
/// name of a nested selection that takes arguments.
pub fn field_call(name: &str, args: &Args) -> String {
    if args.is_empty() {
        name.to_owned()
    } else {
        format!("{}({})", name, format_args(args))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Query,
    Mutation,
}

impl Operation {
    pub fn keyword(self) -> &'static str {
        match self {
            Operation::Query => "query",
            Operation::Mutation => "mutation",
        }
    }
}

/// Assemble a full request document:
/// `<operation> { <name>(<args>) { <selection> } }`.
///
/// An absent or empty selection drops the inner block, which is what
/// mutations returning a scalar (e.g. `update_board`) need.
pub fn document(
    operation: Operation,
    name: &str,
    args: &Args,
    selection: Option<&[Selection]>,
) -> String {
    let field = field_call(name, args);

    match selection {
        Some(selection) if !selection.is_empty() => format!(
            "{} {{ {} {{ {} }} }}",
            operation.keyword(),
            field,
            format_select(selection)
        ),
        _ => format!("{} {{ {} }}", operation.keyword(), field),
    }
}

pub fn query(name: &str, args: &Args, selection: &[Selection]) -> String {
    document(Operation::Query, name, args, Some(selection))
}

pub fn mutation(name: &str, args: &Args, selection: Option<&[Selection]>) -> String {
    document(Operation::Mutation, name, args, selection)
}

// Resource methods take an optional selection and fall back to their own
// defaults.
pub(crate) fn select_or(selection: Option<&[Selection]>, default: &[&str]) -> Vec<Selection> {
    match selection {
        Some(selection) => selection.to_vec(),
        None => fields(default.iter().copied()),
    }
}
