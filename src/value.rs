//! DOM types for parsed JSON documents

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use crate::error::TypeError;

/// The kind of a [`Value`], used for inspection and in [`TypeError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    String,
    Number,
    Object,
    Array,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::String => "string",
            Self::Number => "number",
            Self::Object => "object",
            Self::Array => "array",
            Self::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// A JSON value
///
/// Values are move-only: trees can be large and are never duplicated
/// implicitly. Use [`Value::take`] to move a value out of a place that has to
/// stay usable; the place is left [`Value::Undefined`].
#[derive(Debug, PartialEq, Default)]
pub enum Value {
    /// Not yet assigned; never the result of a successful parse
    #[default]
    Undefined,
    Null,
    String(String),
    Number(f64),
    Object(Object),
    Array(Array),
    Boolean(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::String(_) => ValueKind::String,
            Self::Number(_) => ValueKind::Number,
            Self::Object(_) => ValueKind::Object,
            Self::Array(_) => ValueKind::Array,
            Self::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Moves the value out, leaving `Undefined` in its place
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    fn mismatch(&self, expected: ValueKind) -> TypeError {
        TypeError::new(expected, self.kind())
    }

    /// Returns the string, or a [`TypeError`] if this is not a string
    pub fn string(&self) -> Result<&str, TypeError> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    /// Returns the number, or a [`TypeError`] if this is not a number
    pub fn number(&self) -> Result<f64, TypeError> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(self.mismatch(ValueKind::Number)),
        }
    }

    /// Returns the boolean, or a [`TypeError`] if this is not a boolean
    pub fn boolean(&self) -> Result<bool, TypeError> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(ValueKind::Boolean)),
        }
    }

    /// Returns the object, or a [`TypeError`] if this is not an object
    pub fn object(&self) -> Result<&Object, TypeError> {
        match self {
            Self::Object(o) => Ok(o),
            _ => Err(self.mismatch(ValueKind::Object)),
        }
    }

    /// Returns the array, or a [`TypeError`] if this is not an array
    pub fn array(&self) -> Result<&Array, TypeError> {
        match self {
            Self::Array(a) => Ok(a),
            _ => Err(self.mismatch(ValueKind::Array)),
        }
    }

    pub fn object_mut(&mut self) -> Result<&mut Object, TypeError> {
        match self {
            Self::Object(o) => Ok(o),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    pub fn array_mut(&mut self) -> Result<&mut Array, TypeError> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn into_string(self) -> Result<String, TypeError> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    pub fn into_object(self) -> Result<Object, TypeError> {
        match self {
            Self::Object(o) => Ok(o),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    pub fn into_array(self) -> Result<Array, TypeError> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// Returns the string value if this is a string, None otherwise
    pub fn as_string(&self) -> Option<&str> {
        self.string().ok()
    }

    /// Returns the numeric value if this is a number, None otherwise
    pub fn as_number(&self) -> Option<f64> {
        self.number().ok()
    }

    /// Returns the boolean value if this is a boolean, None otherwise
    pub fn as_boolean(&self) -> Option<bool> {
        self.boolean().ok()
    }

    /// Returns the object if this is an object, None otherwise
    pub fn as_object(&self) -> Option<&Object> {
        self.object().ok()
    }

    /// Returns the array if this is an array, None otherwise
    pub fn as_array(&self) -> Option<&Array> {
        self.array().ok()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(Array(values))
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Object(Object(map))
    }
}

/// A key-ordered object whose keys keep their first inserted value
#[derive(Debug, PartialEq, Default)]
pub struct Object(BTreeMap<String, Value>);

impl Object {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Inserts a key-value pair unless the key is already present
    ///
    /// The first value stored under a key wins. When the key exists the new
    /// value is handed back untouched.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        match self.0.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(value.into());
                None
            }
            Entry::Occupied(_) => Some(value.into()),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> btree_map::Values<'_, String, Value> {
        self.0.values()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Index<&str> for Object {
    type Output = Value;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, key: &str) -> &Self::Output {
        &self.0[key]
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<BTreeMap<String, Value>> for Object {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut object = Self::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

/// An ordered sequence of values
#[derive(Debug, PartialEq, Default)]
pub struct Array(Vec<Value>);

impl Array {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.0.get_mut(index)
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.0.pop()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl Index<usize> for Array {
    type Output = Value;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: f64, name: &str) -> Object {
        let mut obj = Object::new();
        obj.insert("customer_id", id);
        obj.insert("customer_name", name);
        obj
    }

    #[test]
    fn test_value_is_methods() {
        assert!(Value::default().is_undefined());
        assert!(Value::Null.is_null());
        assert!(!Value::Null.is_boolean());
        assert!(Value::Boolean(true).is_boolean());
        assert!(Value::Number(42.0).is_number());
        assert!(Value::from("Bugs Bunny").is_string());
        assert!(Value::Array(Array::new()).is_array());
        assert!(Value::Object(Object::new()).is_object());
    }

    #[test]
    fn test_string_ctor() {
        let v = Value::from("Bugs Bunny");
        assert_eq!(v.string(), Ok("Bugs Bunny"));
        assert_eq!(v.kind(), ValueKind::String);
    }

    #[test]
    fn test_accessor_mismatch_is_type_error() {
        let v = Value::from("10");
        let err = v.number().unwrap_err();
        assert_eq!(err.expected, ValueKind::Number);
        assert_eq!(err.found, ValueKind::String);

        assert!(Value::Null.boolean().is_err());
        assert!(Value::Number(1.0).object().is_err());
        assert!(Value::Boolean(true).array().is_err());
        assert!(Value::Undefined.string().is_err());
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_into_accessors() {
        let v = Value::from(vec![Value::Null, Value::Boolean(false)]);
        let arr = v.into_array().unwrap();
        assert_eq!(arr.len(), 2);

        let err = Value::Null.into_object().unwrap_err();
        assert_eq!(err.found, ValueKind::Null);
    }

    #[test]
    fn test_take_leaves_undefined() {
        let mut o1 = Value::from(customer(1001.0, "Bugs Bunny"));
        let o2 = o1.take();

        assert!(o1.is_undefined());
        assert!(o2.is_object());
        assert_eq!(
            o2.object().unwrap()["customer_name"].string(),
            Ok("Bugs Bunny")
        );
    }

    #[test]
    fn test_nested_object() {
        let mut outer = Object::new();
        outer.insert("customer", customer(1001.0, "Bugs Bunny"));
        let v = Value::from(outer);

        let inner = v.object().unwrap()["customer"].object().unwrap();
        assert!(inner["customer_id"].is_number());
        assert_eq!(inner["customer_name"].string(), Ok("Bugs Bunny"));
    }

    #[test]
    fn test_object_first_insert_wins() {
        let mut obj = Object::new();
        assert_eq!(obj.insert("a", 1), None);
        assert_eq!(obj.insert("a", 2), Some(Value::Number(2.0)));
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["a"], Value::Number(1.0));
    }

    #[test]
    fn test_object_from_iter_first_wins() {
        let obj: Object = vec![
            ("k".to_string(), Value::from(1)),
            ("k".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(obj.get("k"), Some(&Value::Number(1.0)));
    }

    #[test]
    fn test_object_key_order() {
        let mut obj = Object::new();
        obj.insert("zeta", 1);
        obj.insert("alpha", 2);
        obj.insert("mid", 3);

        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_object_remove() {
        let mut obj = customer(1.0, "x");
        assert!(obj.remove("customer_id").is_some());
        assert!(!obj.contains_key("customer_id"));
        assert_eq!(obj.len(), 1);
    }

    #[test]
    fn test_array_of_objects() {
        let mut list = Array::new();
        list.push(customer(1001.0, "Bugs Bunny"));
        list.push(customer(1002.0, "Daffy Duck"));
        let v = Value::from(list);

        let arr = v.array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(
            arr[1].object().unwrap()["customer_name"].string(),
            Ok("Daffy Duck")
        );
    }

    #[test]
    fn test_array_basics() {
        let mut arr = Array::new();
        assert!(arr.is_empty());
        arr.push(Value::Null);
        arr.push(42);
        assert_eq!(arr.get(1), Some(&Value::Number(42.0)));
        assert_eq!(arr.get(2), None);
        assert_eq!(arr.pop(), Some(Value::Number(42.0)));
        assert_eq!(arr.len(), 1);

        let collected: Array = arr.into_iter().collect();
        assert_eq!(collected.len(), 1);
    }
}
