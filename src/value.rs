//! Dynamic input model: the "unknown" side of every check.
//!
//! `Value` mirrors the JavaScript value space the checker classifies. Arrays
//! and objects are shared, mutable handles so that cyclic graphs can be
//! built; they compare and hash by identity. Primitives compare with
//! SameValueZero semantics, which is also what the checker's cache relies on.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use thiserror::Error;

// ————————————————————————————————————————————————————————————————————————————
// SYMBOL & KEY
// ————————————————————————————————————————————————————————————————————————————

/// A unique, optionally described token. Two symbols are equal only if they
/// are the same symbol.
#[derive(Clone)]
pub struct Symbol(Arc<Option<String>>);

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Symbol(Arc::new(Some(description.into())))
    }

    pub fn anonymous() -> Self {
        Symbol(Arc::new(None))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// An own-property key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Key {
    String(String),
    Symbol(Symbol),
}

impl Key {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s.as_str()),
            Key::Symbol(_) => None,
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::String(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::String(value)
    }
}

impl From<Symbol> for Key {
    fn from(value: Symbol) -> Self {
        Key::Symbol(value)
    }
}

/// Same rendering as the primitive printer: strings are JSON-quoted.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::String(s) => f.write_str(&quote_string(s)),
            Key::Symbol(sym) => write!(f, "{sym}"),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Canonical array-index keys ("0", "17", but not "01" or "4294967295").
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

/// Order keys the way `Reflect.ownKeys` does: array indices ascending, then
/// the remaining string keys, then symbols, both in insertion order.
pub(crate) fn own_key_order<'a, I>(keys: I) -> Vec<&'a Key>
where
    I: IntoIterator<Item = &'a Key>,
{
    let mut indices = Vec::new();
    let mut strings = Vec::new();
    let mut symbols = Vec::new();
    for key in keys {
        match key {
            Key::String(s) => match array_index(s) {
                Some(ix) => indices.push((ix, key)),
                None => strings.push(key),
            },
            Key::Symbol(_) => symbols.push(key),
        }
    }
    indices.sort_by_key(|(ix, _)| *ix);
    indices
        .into_iter()
        .map(|(_, key)| key)
        .chain(strings)
        .chain(symbols)
        .collect()
}

// ————————————————————————————————————————————————————————————————————————————
// PRIMITIVE
// ————————————————————————————————————————————————————————————————————————————

/// The values a literal cake can match.
#[derive(Clone, Debug)]
pub enum Primitive {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
}

impl Primitive {
    /// SameValueZero against a candidate value.
    pub fn same_value_zero(&self, value: &Value) -> bool {
        match (self, value) {
            (Primitive::Undefined, Value::Undefined) => true,
            (Primitive::Null, Value::Null) => true,
            (Primitive::Bool(a), Value::Bool(b)) => a == b,
            (Primitive::Number(a), Value::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Primitive::BigInt(a), Value::BigInt(b)) => a == b,
            (Primitive::String(a), Value::String(b)) => a.as_str() == &**b,
            (Primitive::Symbol(a), Value::Symbol(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        self.same_value_zero(&Value::from(other.clone()))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Undefined => f.write_str("undefined"),
            Primitive::Null => f.write_str("null"),
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Number(n) => f.write_str(&format_number(*n)),
            Primitive::BigInt(n) => write!(f, "{n}n"),
            Primitive::String(s) => f.write_str(&quote_string(s)),
            Primitive::Symbol(sym) => write!(f, "{sym}"),
        }
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Bool(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Number(value as f64)
    }
}

impl From<i64> for Primitive {
    fn from(value: i64) -> Self {
        Primitive::Number(value as f64)
    }
}

impl From<u32> for Primitive {
    fn from(value: u32) -> Self {
        Primitive::Number(value as f64)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::String(value)
    }
}

impl From<Symbol> for Primitive {
    fn from(value: Symbol) -> Self {
        Primitive::Symbol(value)
    }
}

/// JavaScript `Number.prototype.toString` for the common cases.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{n:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    format!("{n}")
}

fn quote_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

// ————————————————————————————————————————————————————————————————————————————
// ARRAY & OBJECT HANDLES
// ————————————————————————————————————————————————————————————————————————————

/// Shared, mutable array. Clones alias the same storage.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Value>>>);

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Out-of-range reads yield `undefined`, like an array hole.
    pub fn get(&self, index: usize) -> Value {
        self.0.borrow().get(index).cloned().unwrap_or(Value::Undefined)
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn set(&self, index: usize, value: impl Into<Value>) {
        let mut items = self.0.borrow_mut();
        if items.len() <= index {
            items.resize(index + 1, Value::Undefined);
        }
        items[index] = value.into();
    }

    pub fn items(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const u8 as usize
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Array(Rc::new(RefCell::new(iter.into_iter().map(Into::into).collect())))
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array(len = {})", self.len())
    }
}

/// Shared, mutable object with ordered own properties.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<IndexMap<Key, Value>>>);

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value.into())
    }

    pub fn get(&self, key: &Key) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Own keys, symbols included, in property-enumeration order.
    pub fn own_keys(&self) -> Vec<Key> {
        let props = self.0.borrow();
        own_key_order(props.keys()).into_iter().cloned().collect()
    }

    /// Own entries, symbols included, in property-enumeration order.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        let props = self.0.borrow();
        own_key_order(props.keys())
            .into_iter()
            .map(|k| (k.clone(), props[k].clone()))
            .collect()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const u8 as usize
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let props = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Object(Rc::new(RefCell::new(props)))
    }
}

// Keys only: values may point back at this object.
impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object").field("keys", &self.own_keys()).finish()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// VALUE
// ————————————————————————————————————————————————————————————————————————————

/// An untrusted candidate value.
#[derive(Clone, Debug)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(Rc<str>),
    Symbol(Symbol),
    Array(Array),
    Object(Object),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// The `typeof`-style tag, used in diagnostics and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => OrderedFloat(*n).hash(state),
            Value::BigInt(n) => n.hash(state),
            Value::String(s) => s.hash(state),
            Value::Symbol(sym) => sym.hash(state),
            Value::Array(arr) => arr.addr().hash(state),
            Value::Object(obj) => obj.addr().hash(state),
        }
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        match value {
            Primitive::Undefined => Value::Undefined,
            Primitive::Null => Value::Null,
            Primitive::Bool(b) => Value::Bool(b),
            Primitive::Number(n) => Value::Number(n),
            Primitive::BigInt(n) => Value::BigInt(n),
            Primitive::String(s) => Value::String(s.into()),
            Primitive::Symbol(sym) => Value::Symbol(sym),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value.into())
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s.into()),
            Json::Array(xs) => Value::Array(xs.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (Key::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TYPE PREDICATES
// ————————————————————————————————————————————————————————————————————————————

pub fn is_any(_value: &Value) -> bool {
    true
}

pub fn is_unknown(_value: &Value) -> bool {
    true
}

pub fn is_never(_value: &Value) -> bool {
    false
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// Arrays are objects too.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

pub fn is_primitive(value: &Value) -> bool {
    !is_object(value)
}

pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    a == b
}

/// Unambiguous rendering of a primitive value; `None` for arrays and objects.
pub fn stringify_primitive(value: &Value) -> Option<String> {
    let out = match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::BigInt(n) => format!("{n}n"),
        Value::String(s) => quote_string(s),
        Value::Symbol(sym) => sym.to_string(),
        Value::Array(_) | Value::Object(_) => return None,
    };
    Some(out)
}

// ————————————————————————————————————————————————————————————————————————————
// BACK TO JSON
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToJsonError {
    #[error("value at {path} is undefined")]
    Undefined { path: String },
    #[error("value at {path} is a symbol, which has no JSON representation")]
    Symbol { path: String },
    #[error("value at {path} is not a finite number")]
    NonFinite { path: String },
    #[error("bigint at {path} does not fit in a JSON number")]
    BigInt { path: String },
    #[error("value at {path} contains a circular reference")]
    Circular { path: String },
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = ToJsonError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let mut on_stack = Vec::new();
        to_json(value, "$", &mut on_stack)
    }
}

fn to_json(value: &Value, path: &str, on_stack: &mut Vec<usize>) -> Result<serde_json::Value, ToJsonError> {
    use serde_json::Value as Json;
    let path_owned = || path.to_string();
    match value {
        Value::Undefined => Err(ToJsonError::Undefined { path: path_owned() }),
        Value::Null => Ok(Json::Null),
        Value::Bool(b) => Ok(Json::Bool(*b)),
        // Integral numbers print without a fraction, as JSON.stringify does.
        Value::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
            Ok(Json::from(*n as i64))
        }
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map(Json::Number)
            .ok_or_else(|| ToJsonError::NonFinite { path: path_owned() }),
        Value::BigInt(n) => {
            if let Ok(i) = i64::try_from(*n) {
                Ok(Json::from(i))
            } else if let Ok(u) = u64::try_from(*n) {
                Ok(Json::from(u))
            } else {
                Err(ToJsonError::BigInt { path: path_owned() })
            }
        }
        Value::String(s) => Ok(Json::String(s.to_string())),
        Value::Symbol(_) => Err(ToJsonError::Symbol { path: path_owned() }),
        Value::Array(arr) => {
            if on_stack.contains(&arr.addr()) {
                return Err(ToJsonError::Circular { path: path_owned() });
            }
            on_stack.push(arr.addr());
            let mut out = Vec::with_capacity(arr.len());
            for (i, item) in arr.items().iter().enumerate() {
                let child = format!("{path}[{i}]");
                match item {
                    Value::Undefined => out.push(Json::Null),
                    _ => out.push(to_json(item, &child, on_stack)?),
                }
            }
            on_stack.pop();
            Ok(Json::Array(out))
        }
        Value::Object(obj) => {
            if on_stack.contains(&obj.addr()) {
                return Err(ToJsonError::Circular { path: path_owned() });
            }
            on_stack.push(obj.addr());
            let mut out = serde_json::Map::new();
            for (key, item) in obj.entries() {
                let Key::String(name) = key else { continue };
                if item.is_undefined() {
                    continue;
                }
                let child = format!("{path}.{name}");
                out.insert(name, to_json(&item, &child, on_stack)?);
            }
            on_stack.pop();
            Ok(Json::Object(out))
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn same_value_zero_semantics() {
        assert!(same_value_zero(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
        assert!(same_value_zero(&Value::Number(0.0), &Value::Number(-0.0)));
        assert!(!same_value_zero(&Value::Number(0.0), &Value::Bool(false)));
        assert!(Primitive::Number(f64::NAN).same_value_zero(&Value::Number(f64::NAN)));
        assert!(!Primitive::from("1").same_value_zero(&Value::Number(1.0)));
    }

    #[test]
    fn objects_compare_by_identity() {
        let a = Object::new();
        let b = Object::new();
        assert_eq!(Value::from(a.clone()), Value::from(a.clone()));
        assert_ne!(Value::from(a), Value::from(b));
        let s = Symbol::new("s");
        assert_ne!(s, Symbol::new("s"));
        assert_eq!(s, s.clone());
    }

    #[test]
    fn own_keys_follow_enumeration_order() {
        let sym = Symbol::new("sym");
        let obj = Object::new();
        obj.insert(sym.clone(), true);
        obj.insert("b", 1);
        obj.insert("10", 1);
        obj.insert("a", 1);
        obj.insert("2", 1);
        obj.insert("02", 1);
        let keys = obj.own_keys();
        assert_eq!(
            keys,
            vec![
                Key::from("2"),
                Key::from("10"),
                Key::from("b"),
                Key::from("a"),
                Key::from("02"),
                Key::Symbol(sym),
            ]
        );
    }

    #[test]
    fn primitive_printer() {
        assert_eq!(Primitive::from("a\"b").to_string(), r#""a\"b""#);
        assert_eq!(Primitive::BigInt(5).to_string(), "5n");
        assert_eq!(Primitive::Null.to_string(), "null");
        assert_eq!(Primitive::Symbol(Symbol::new("x")).to_string(), "Symbol(x)");
        assert_eq!(format_number(20.3), "20.3");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(stringify_primitive(&Value::from(Object::new())), None);
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let src = json!({"z": 1, "a": [true, null, "x"], "m": {"k": 2.5}});
        let value = Value::from(&src);
        let back = serde_json::Value::try_from(&value).unwrap();
        assert_eq!(serde_json::to_string(&back).unwrap(), serde_json::to_string(&src).unwrap());
    }

    #[test]
    fn json_conversion_rejects_cycles_and_symbols() {
        let obj = Object::new();
        obj.insert("self", obj.clone());
        let err = serde_json::Value::try_from(&Value::from(obj)).unwrap_err();
        assert_eq!(err, ToJsonError::Circular { path: "$.self".into() });

        let arr: Array = [Value::from(Symbol::new("s"))].into_iter().collect();
        let err = serde_json::Value::try_from(&Value::from(arr)).unwrap_err();
        assert_eq!(err, ToJsonError::Symbol { path: "$[0]".into() });
    }

    #[test]
    fn json_conversion_drops_undefined_properties() {
        let obj: Object = [("a", Value::Undefined), ("b", Value::from(1))].into_iter().collect();
        let arr: Array = [Value::Undefined].into_iter().collect();
        obj.insert("c", arr);
        let back = serde_json::Value::try_from(&Value::from(obj)).unwrap();
        assert_eq!(back, json!({"b": 1, "c": [null]}));
    }
}
