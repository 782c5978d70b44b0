use indexmap::IndexMap;

use crate::cake::{Cake, CheckContext, CheckResult, Dispatch, StringifyContext};
use crate::error::{CakeError, CakeErrorKind};
use crate::options::ExcessProperties;
use crate::tags::{TagLabel, Tagged};
use crate::value::{Array, Key, Object, Value, own_key_order};

/// Matches objects with the declared properties.
///
/// Optional properties may be absent or `undefined`. With
/// `object_excess_properties = Error`, undeclared own properties are errors.
#[derive(Debug, Clone, Default)]
pub struct ObjectCake {
    properties: IndexMap<Key, Tagged<Cake>>,
}

impl ObjectCake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, key: impl Into<Key>, cake: impl Into<Cake>) -> Self {
        self.properties.insert(key.into(), Tagged::Plain(cake.into()));
        self
    }

    pub fn optional(mut self, key: impl Into<Key>, cake: impl Into<Cake>) -> Self {
        self.properties.insert(key.into(), Tagged::Optional(cake.into()));
        self
    }

    pub fn get(&self, key: &Key) -> Option<&Tagged<Cake>> {
        self.properties.get(key)
    }

    /// Declared properties in own-key order.
    pub fn properties(&self) -> impl Iterator<Item = (&Key, &Tagged<Cake>)> {
        own_key_order(self.properties.keys())
            .into_iter()
            .filter_map(|key| self.properties.get_key_value(key))
    }

    fn check_property(&self, view: &ObjectView<'_>, key: &Key, property: &Tagged<Cake>, cx: &mut dyn CheckContext) -> CheckResult {
        let (tag, cake) = property.untag();
        let optional = tag == TagLabel::Optional;
        match view.get(key) {
            Some(value) if optional && value.is_undefined() => Ok(()),
            Some(value) => cx.recurse(cake, &value),
            None if optional => Ok(()),
            None => Err(CakeError::new(CakeErrorKind::RequiredPropertyMissing {
                cake: cake.clone(),
            })),
        }
    }

    fn stringify_key(key: &Key) -> String {
        match key {
            Key::Symbol(sym) => format!("[{sym}]"),
            Key::String(s) if is_identifier(s) => s.clone(),
            Key::String(_) => key.to_string(),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let head = |c: char| c == '_' || c == '$' || c.is_ascii_alphabetic();
    match chars.next() {
        Some(c) if head(c) => chars.all(|c| head(c) || c.is_ascii_digit()),
        _ => false,
    }
}

/// Own-property access over plain objects and arrays alike.
enum ObjectView<'a> {
    Object(&'a Object),
    Array(&'a Array),
}

impl ObjectView<'_> {
    /// Enumerable own properties.
    fn entries(&self) -> Vec<(Key, Value)> {
        match self {
            ObjectView::Object(obj) => obj.entries(),
            ObjectView::Array(arr) => arr
                .items()
                .iter()
                .enumerate()
                .map(|(ix, item)| (Key::from(ix.to_string()), item.clone()))
                .collect(),
        }
    }

    /// `key in value`, then the property's value. Arrays also expose
    /// `length`.
    fn get(&self, key: &Key) -> Option<Value> {
        match self {
            ObjectView::Object(obj) => obj.get(key),
            ObjectView::Array(arr) => match key.as_str()? {
                "length" => Some(Value::Number(arr.len() as f64)),
                s => {
                    let ix = s.parse::<usize>().ok().filter(|ix| ix.to_string() == s)?;
                    (ix < arr.len()).then(|| arr.get(ix))
                }
            },
        }
    }
}

impl Dispatch for ObjectCake {
    fn dispatch_check(&self, this: &Cake, value: &Value, cx: &mut dyn CheckContext) -> CheckResult {
        let view = match value {
            Value::Object(obj) => ObjectView::Object(obj),
            Value::Array(arr) => ObjectView::Array(arr),
            _ => {
                return Err(CakeError::new(CakeErrorKind::NotAnObject {
                    cake: this.clone(),
                    value: value.clone(),
                }));
            }
        };

        let mut errors = IndexMap::new();

        if cx.get_options(this).object_excess_properties == ExcessProperties::Error {
            for (key, property_value) in view.entries() {
                if !self.properties.contains_key(&key) {
                    let error = CakeError::new(CakeErrorKind::ExcessPropertyPresent { value: property_value });
                    errors.insert(key, error);
                }
            }
        }

        for (key, property) in self.properties() {
            if let Err(error) = self.check_property(&view, key, property, cx) {
                errors.insert(key.clone(), error);
            }
        }

        if errors.is_empty() {
            return Ok(());
        }
        let errors = own_key_order(errors.keys())
            .into_iter()
            .filter_map(|key| errors.get_key_value(key))
            .map(|(key, error)| (key.clone(), error.clone()))
            .collect();
        Err(CakeError::new(CakeErrorKind::ObjectProperties {
            cake: this.clone(),
            value: value.clone(),
            errors,
        }))
    }

    fn dispatch_stringify(&self, cx: &mut dyn StringifyContext) -> String {
        let entries: Vec<String> = self
            .properties()
            .map(|(key, property)| {
                let key = Self::stringify_key(key);
                let (tag, cake) = property.untag();
                let field = cx.recurse(cake);
                match tag {
                    TagLabel::Optional => format!("{key}?: ({field}) | undefined"),
                    _ => format!("{key}: {field}"),
                }
            })
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

/// An object cake from `(key, tagged cake)` pairs.
pub fn object<K, I>(properties: I) -> Cake
where
    K: Into<Key>,
    I: IntoIterator<Item = (K, Tagged<Cake>)>,
{
    let properties = properties
        .into_iter()
        .map(|(key, cake)| (key.into(), cake))
        .collect();
    Cake::new(ObjectCake { properties })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Symbol;
    use crate::{bake, boolean, number, optional, string};
    use serde_json::json;

    fn json(v: serde_json::Value) -> Value {
        Value::from(v)
    }

    #[test]
    fn required_and_optional_properties() {
        let person = bake!({ name: string(), age: optional(number()) });
        assert!(person.is(&json(json!({ "name": "Alice" }))));
        assert!(person.is(&json(json!({ "name": "Alice", "age": 3 }))));
        assert!(!person.is(&json(json!({ "name": "Alice", "age": "3" }))));
        assert!(!person.is(&json(json!({ "age": 3 }))));
        assert!(!person.is(&json(json!(["Alice"]))));

        let explicit = Object::new();
        explicit.insert("name", "Alice");
        explicit.insert("age", Value::Undefined);
        assert!(person.is(&Value::from(explicit)));
    }

    #[test]
    fn arrays_are_objects() {
        assert!(bake!({}).is(&json(json!([]))));
        assert!(!bake!({}).is(&json(json!([1]))));
        assert!(bake!({}).is_shape(&json(json!([1]))));
        assert!(bake!({ length: number() }).is_shape(&json(json!([1, 2]))));
        assert!(bake!({ "0": string() }).is_shape(&json(json!(["a"]))));
        assert!(!bake!({}).is(&Value::Null));
    }

    #[test]
    fn excess_properties_listed_before_declared_ones() {
        let cake = bake!({ a: number(), b: number() });
        let error = cake.check(&json(json!({ "z": 1, "b": "x" }))).unwrap_err();
        assert_eq!(
            error.to_string(),
            [
                "Value does not satisfy type '{a: number, b: number}': object properties are invalid.",
                "  Property \"z\": Property is not declared in type and excess properties are not allowed.",
                "  Property \"a\": Required property is missing.",
                "  Property \"b\": Value does not satisfy type 'number': type guard failed.",
            ]
            .join("\n")
        );
    }

    #[test]
    fn property_errors_follow_own_key_order() {
        let cake = bake!({ "0": number(), a: number() });
        let error = cake.check(&json(json!({ "a2": 1, "a": 1 }))).unwrap_err();
        assert_eq!(
            error.to_string(),
            [
                "Value does not satisfy type '{\"0\": number, a: number}': object properties are invalid.",
                "  Property \"0\": Required property is missing.",
                "  Property \"a2\": Property is not declared in type and excess properties are not allowed.",
            ]
            .join("\n")
        );
    }

    #[test]
    fn keys_print_bare_quoted_or_as_symbols() {
        let sym = Symbol::new("sym");
        let iterator = Symbol::new("Symbol.iterator");
        let cake = bake!({
            "with space": number(),
            [sym.clone()]: boolean(),
            [iterator]: string(),
        });
        assert_eq!(
            cake.to_string(),
            "{\"with space\": number, [Symbol(sym)]: boolean, [Symbol(Symbol.iterator)]: string}"
        );

        let value = Object::new();
        value.insert("with space", 1);
        value.insert(sym, true);
        assert!(!cake.is(&Value::from(value)));
    }

    #[test]
    fn properties_follow_own_key_order() {
        let cake = bake!({ b: number(), "1": number(), a: number(), "0": number() });
        assert_eq!(cake.to_string(), "{\"0\": number, \"1\": number, b: number, a: number}");
    }

    #[test]
    fn object_builder_and_function_agree() {
        let built = Cake::from(ObjectCake::new().property("x", number()).optional("y", string()));
        let listed = object([("x", Tagged::Plain(number())), ("y", optional(string()))]);
        assert_eq!(built.to_string(), listed.to_string());
    }
}
