//! Runtime values and their coercion contract.
//!
//! Every [`Value`] exposes four coercions, and all four are total: a
//! conversion that cannot be performed sensibly falls back instead of
//! erroring. The one deliberately surprising fallback: text that does not
//! parse as a number coerces to its own character count. Downstream
//! arithmetic and comparisons rely on it, so it is preserved exactly and not
//! extended to anything new.
//!
//! Invariant held by every case: `to_binary() == (to_decimal() != 0.0)`.

use std::rc::Rc;

use crate::registry::{Native, StructureFn};

/// One runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Text(String),
    Number(i64),
    Decimal(f64),
    Binary(bool),
    Void,
    Collection(CollectionValue),
    Packet(Box<PacketValue>),
    Algorithm(Rc<AlgorithmValue>),
    Structure(Rc<StructureValue>),
}

impl Value {
    /// The user-visible type name, as shown by inspection and `info`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "Text",
            Value::Number(_) => "Number",
            Value::Decimal(_) => "Decimal",
            Value::Binary(_) => "Binary",
            Value::Void => "Void",
            Value::Collection(_) => "Collection",
            Value::Packet(_) => "KVPacket",
            Value::Algorithm(_) => "Algorithm",
            Value::Structure(_) => "Structure",
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Value::Text(text) => text.clone(),
            Value::Number(n) => n.to_string(),
            Value::Decimal(d) => format_decimal(*d),
            Value::Binary(true) => "TRUE".to_string(),
            Value::Binary(false) => "FALSE".to_string(),
            Value::Void => String::new(),
            Value::Collection(collection) => collection.to_text(),
            Value::Packet(packet) => packet.value.to_text(),
            Value::Algorithm(alg) => alg.name.clone(),
            Value::Structure(st) => st.name.clone(),
        }
    }

    /// Coerce to an integer. Non-numeric text yields its character count.
    pub fn to_number(&self) -> i64 {
        match self {
            Value::Text(text) => match numeric_text(text) {
                Some(d) => d as i64,
                None => text.chars().count() as i64,
            },
            Value::Number(n) => *n,
            Value::Decimal(d) => *d as i64,
            Value::Binary(b) => i64::from(*b),
            Value::Void => 0,
            Value::Collection(collection) => collection.len() as i64,
            Value::Packet(packet) => packet.value.to_number(),
            Value::Algorithm(_) | Value::Structure(_) => 0,
        }
    }

    /// Coerce to a float. Non-numeric text yields its character count.
    pub fn to_decimal(&self) -> f64 {
        match self {
            Value::Text(text) => {
                numeric_text(text).unwrap_or_else(|| text.chars().count() as f64)
            }
            Value::Number(n) => *n as f64,
            Value::Decimal(d) => *d,
            Value::Binary(b) => f64::from(u8::from(*b)),
            Value::Void => 0.0,
            Value::Collection(collection) => collection.len() as f64,
            Value::Packet(packet) => packet.value.to_decimal(),
            Value::Algorithm(_) | Value::Structure(_) => 0.0,
        }
    }

    /// Coerce to a boolean, always through the decimal coercion.
    pub fn to_binary(&self) -> bool {
        self.to_decimal() != 0.0
    }

    /// The raw payload handed to simple native callables. Kinds without a
    /// primitive shape degrade to their text coercion.
    pub fn to_primitive(&self) -> Primitive {
        match self {
            Value::Text(text) => Primitive::Text(text.clone()),
            Value::Number(n) => Primitive::Number(*n),
            Value::Decimal(d) => Primitive::Decimal(*d),
            Value::Binary(b) => Primitive::Binary(*b),
            Value::Void => Primitive::Void,
            other => Primitive::Text(other.to_text()),
        }
    }

    pub fn from_primitive(primitive: Primitive) -> Value {
        match primitive {
            Primitive::Text(text) => Value::Text(text),
            Primitive::Number(n) => Value::Number(n),
            Primitive::Decimal(d) => Value::Decimal(d),
            Primitive::Binary(b) => Value::Binary(b),
            Primitive::Void => Value::Void,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            (Value::Void, Value::Void) => true,
            (Value::Collection(a), Value::Collection(b)) => a == b,
            (Value::Packet(a), Value::Packet(b)) => a == b,
            (Value::Algorithm(a), Value::Algorithm(b)) => Rc::ptr_eq(a, b),
            (Value::Structure(a), Value::Structure(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// The payload shape simple native callables work with.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Text(String),
    Number(i64),
    Decimal(f64),
    Binary(bool),
    Void,
}

/// An ordered sequence of `(key, item)` pairs plus the separator used when
/// the collection coerces to text.
///
/// Keys are values themselves. Omitted keys get the smallest unused
/// non-negative integer, filling gaps left by explicit numeric keys.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CollectionValue {
    entries: Vec<(Value, Value)>,
    connector: String,
}

impl CollectionValue {
    pub fn new(entries: Vec<(Value, Value)>, connector: impl Into<String>) -> Self {
        CollectionValue {
            entries,
            connector: connector.into(),
        }
    }

    /// Build from positional items, auto-indexing every entry.
    pub fn auto_indexed(items: Vec<Value>) -> Self {
        let mut collection = CollectionValue::default();
        for item in items {
            collection.push_auto(item);
        }
        collection
    }

    /// A collection of a text's characters, indexed by position.
    pub fn from_chars(text: &str) -> Self {
        let entries = text
            .chars()
            .enumerate()
            .map(|(i, ch)| (Value::Number(i as i64), Value::Text(ch.to_string())))
            .collect();
        CollectionValue::new(entries, "")
    }

    /// Append an item under the smallest unused non-negative integer key.
    pub fn push_auto(&mut self, item: Value) {
        let mut index = 0;
        while self
            .entries
            .iter()
            .any(|(key, _)| key_matches(key, &Value::Number(index)))
        {
            index += 1;
        }
        self.entries.push((Value::Number(index), item));
    }

    /// Append an item under an explicit key.
    pub fn push_keyed(&mut self, key: Value, item: Value) {
        self.entries.push((key, item));
    }

    /// First item whose key matches, or `None`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| key_matches(k, key))
            .map(|(_, item)| item)
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn connector(&self) -> &str {
        &self.connector
    }

    pub fn set_connector(&mut self, connector: impl Into<String>) {
        self.connector = connector.into();
    }

    /// The same entries in reverse order, keeping the connector.
    pub fn reversed(&self) -> Self {
        let entries = self.entries.iter().rev().cloned().collect();
        CollectionValue::new(entries, self.connector.clone())
    }

    /// Item texts joined by the connector, skipping empty ones.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|(_, item)| item.to_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(&self.connector)
    }
}

/// Key equality for collection lookup: numeric kinds compare by numeric
/// value across kinds, text compares by content, void matches void.
pub(crate) fn key_matches(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Text(x), Value::Text(y)) => x == y,
        (Value::Void, Value::Void) => true,
        (
            Value::Number(_) | Value::Decimal(_) | Value::Binary(_),
            Value::Number(_) | Value::Decimal(_) | Value::Binary(_),
        ) => a.to_decimal() == b.to_decimal(),
        _ => false,
    }
}

/// One key/value pair, usually an explicit entry for a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct PacketValue {
    pub key: Value,
    pub value: Value,
}

/// A named invocable with eagerly evaluated arguments.
#[derive(Debug)]
pub struct AlgorithmValue {
    pub name: String,
    pub body: AlgorithmBody,
    pub help: String,
    /// Name the forced argument values are bound to (as a collection) for
    /// the duration of a call to a source-bodied algorithm.
    pub args_collection: Option<String>,
}

/// What runs when an algorithm is invoked.
#[derive(Debug)]
pub enum AlgorithmBody {
    /// A built-in callable.
    Native(Native),
    /// User-defined: source text captured at definition time and re-chunked
    /// on every invocation.
    Source(String),
}

/// A named control-flow invocable. Receives raw head tokens and the raw,
/// unevaluated body chunks; decides itself what to evaluate and when.
#[derive(Debug)]
pub struct StructureValue {
    pub name: String,
    pub handler: StructureFn,
    pub help: String,
}

/// Render a float the way the language shows it: integral values keep a
/// trailing `.0`, so a numeric text round-trips through detection.
pub(crate) fn format_decimal(d: f64) -> String {
    if d.is_finite() && d.fract() == 0.0 && d.abs() < 1e16 {
        format!("{d:.1}")
    } else {
        d.to_string()
    }
}

/// Parse text in the numeric shape the language accepts: at most one
/// leading minus, digits, at most one decimal point, comma separators.
pub(crate) fn numeric_text(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ','))
    {
        return None;
    }
    if text.matches('-').count() > 1 {
        return None;
    }
    if text.contains('-') && !text.starts_with('-') {
        return None;
    }
    if text.matches('.').count() > 1 {
        return None;
    }
    text.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests;
