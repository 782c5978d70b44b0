//! Turning shorthand descriptions into cakes.
//!
//! A [`Bakeable`] is a cake, a primitive (which becomes a literal cake) or
//! an object literal of bakeables (which becomes an object cake). The
//! [`bake!`](crate::bake!) macro builds the object case with literal-like
//! syntax.

use crate::cake::{Cake, LiteralCake, ObjectCake};
use crate::tags::Tagged;
use crate::value::{Key, Primitive, Symbol};

#[derive(Debug, Clone)]
pub enum Bakeable {
    Cake(Cake),
    Primitive(Primitive),
    Object(ObjectBakeable),
}

/// An object literal whose property values are bakeables.
#[derive(Debug, Clone, Default)]
pub struct ObjectBakeable {
    properties: Vec<(Key, Tagged<Bakeable>)>,
}

impl ObjectBakeable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property. Wrap the value in [`optional`](crate::optional) to
    /// make it optional. A repeated key replaces the earlier one.
    pub fn property(mut self, key: impl Into<Key>, value: impl IntoProperty) -> Self {
        let key = key.into();
        let value = value.into_property();
        match self.properties.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.properties.push((key, value)),
        }
        self
    }
}

/// Anything usable as a property value in an [`ObjectBakeable`]: a bakeable,
/// or a tagged bakeable.
pub trait IntoProperty {
    fn into_property(self) -> Tagged<Bakeable>;
}

macro_rules! impl_bakeable {
    ($($ty:ty => |$v:ident| $conv:expr),* $(,)?) => {
        $(
            impl From<$ty> for Bakeable {
                fn from($v: $ty) -> Self {
                    $conv
                }
            }
        )*
    };
}

impl_bakeable!(
    Cake => |v| Bakeable::Cake(v),
    &Cake => |v| Bakeable::Cake(v.clone()),
    Primitive => |v| Bakeable::Primitive(v),
    ObjectBakeable => |v| Bakeable::Object(v),
    bool => |v| Bakeable::Primitive(v.into()),
    f64 => |v| Bakeable::Primitive(v.into()),
    i32 => |v| Bakeable::Primitive(v.into()),
    i64 => |v| Bakeable::Primitive(v.into()),
    u32 => |v| Bakeable::Primitive(v.into()),
    &str => |v| Bakeable::Primitive(v.into()),
    String => |v| Bakeable::Primitive(v.into()),
    Symbol => |v| Bakeable::Primitive(v.into()),
);

macro_rules! impl_into_property {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoProperty for $ty {
                fn into_property(self) -> Tagged<Bakeable> {
                    Tagged::Plain(self.into())
                }
            }

            impl IntoProperty for Tagged<$ty> {
                fn into_property(self) -> Tagged<Bakeable> {
                    self.map(Into::into)
                }
            }
        )*
    };
}

impl_into_property!(
    Bakeable,
    Cake,
    &Cake,
    Primitive,
    ObjectBakeable,
    bool,
    f64,
    i32,
    i64,
    u32,
    &str,
    String,
    Symbol,
);

/// Stateless conversion from bakeables to cakes. Every call builds fresh
/// cakes, except that cakes passed in are reused as-is.
#[derive(Debug, Default)]
pub struct Baker;

impl Baker {
    pub fn new() -> Self {
        Baker
    }

    pub fn bake(&self, bakeable: Bakeable) -> Cake {
        match bakeable {
            Bakeable::Cake(cake) => cake,
            Bakeable::Primitive(value) => Cake::new(LiteralCake { value }),
            Bakeable::Object(object) => {
                let cake = object
                    .properties
                    .into_iter()
                    .fold(ObjectCake::new(), |cake, (key, property)| match property {
                        Tagged::Optional(value) => cake.optional(key, self.bake(value)),
                        other => cake.property(key, self.bake(other.into_untagged())),
                    });
                Cake::new(cake)
            }
        }
    }
}

pub fn bake(bakeable: impl Into<Bakeable>) -> Cake {
    Baker::new().bake(bakeable.into())
}

/// Build an [`ObjectBakeable`] from `{ key: value, ... }`.
///
/// Keys may be identifiers, string literals or `[expr]` for computed keys
/// (such as symbols). Values are anything [`IntoProperty`], or a nested
/// `{ ... }` object literal.
#[macro_export]
macro_rules! bakeable {
    ({ $($body:tt)* }) => {
        $crate::__bakeable_properties!($crate::ObjectBakeable::new(); $($body)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bakeable_properties {
    ($acc:expr;) => {
        $acc
    };
    ($acc:expr; $key:tt : { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $crate::__bakeable_properties!(
            $acc.property($crate::__cake_key!($key), $crate::bakeable!({ $($inner)* }));
            $($($rest)*)?
        )
    };
    ($acc:expr; $key:tt : $value:expr $(, $($rest:tt)*)?) => {
        $crate::__bakeable_properties!(
            $acc.property($crate::__cake_key!($key), $value);
            $($($rest)*)?
        )
    };
}

/// Bake an object literal straight into a cake.
///
/// ```
/// use json_cake::{Value, bake, boolean, string};
///
/// let flag = bake!({ name: string(), "is-on": boolean() });
/// assert_eq!(flag.to_string(), r#"{name: string, "is-on": boolean}"#);
/// assert!(flag.is(&Value::from(serde_json::json!({ "name": "x", "is-on": true }))));
/// ```
#[macro_export]
macro_rules! bake {
    ($($body:tt)*) => {
        $crate::bake($crate::bakeable!($($body)*))
    };
}

/// Union of members of different bakeable types.
///
/// ```
/// use json_cake::{Value, string, union};
///
/// let label = union![string(), 0, false];
/// assert!(label.is(&Value::from(false)));
/// assert_eq!(label.to_string(), "(string) | (0) | (false)");
/// ```
#[macro_export]
macro_rules! union {
    ($($member:expr),* $(,)?) => {
        $crate::union([$($crate::Bakeable::from($member)),*])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __cake_key {
    ($key:ident) => {
        stringify!($key)
    };
    ($key:literal) => {
        $key
    };
    ([$key:expr]) => {
        $key
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use crate::{number, optional, string};
    use serde_json::json;

    #[test]
    fn primitives_bake_to_literals() {
        let cake = bake("red");
        assert!(matches!(cake.kind(), crate::CakeKind::Literal(_)));
        assert!(cake.is(&Value::from("red")));
        assert_eq!(bake(Primitive::Undefined).to_string(), "undefined");
    }

    #[test]
    fn cakes_bake_to_themselves() {
        let n = number();
        assert!(bake(&n).ptr_eq(&n));
    }

    #[test]
    fn objects_bake_recursively() {
        let cake = bake!({
            kind: "circle",
            radius: number(),
            center: { x: number(), y: number() },
            label: optional(string()),
        });
        assert_eq!(
            cake.to_string(),
            "{kind: \"circle\", radius: number, center: {x: number, y: number}, label?: (string) | undefined}"
        );
        assert!(cake.is(&Value::from(json!({
            "kind": "circle",
            "radius": 1,
            "center": { "x": 0, "y": 0 },
        }))));
    }

    #[test]
    fn baking_is_not_cached() {
        let shape = bakeable!({ a: 1 });
        assert!(!bake(shape.clone()).ptr_eq(&bake(shape)));
    }

    #[test]
    fn repeated_keys_replace() {
        let cake = bake!({ a: 1, a: optional(2) });
        assert_eq!(cake.to_string(), "{a?: (2) | undefined}");
    }
}
