//! Typed extraction: check a value, then deserialize it into a Rust type.
//!
//! The check runs first, so the deserializer only ever sees values the
//! cake accepted. Deserialization errors carry the JSON path of the
//! offending field.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::cake::Cake;
use crate::error::TypeError;
use crate::value::{ToJsonError, Value};

#[derive(Debug, Error)]
pub enum NarrowError {
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error(transparent)]
    Check(#[from] TypeError),
    #[error(transparent)]
    Json(#[from] ToJsonError),
    #[error("at JSON path {path} → {source}")]
    Deserialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Cake {
    /// Strict check, then deserialize into `T`.
    ///
    /// ```
    /// use json_cake::{Value, bake, number, string};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Person {
    ///     name: String,
    ///     age: f64,
    /// }
    ///
    /// let cake = bake!({ name: string(), age: number() });
    /// let value = Value::from(serde_json::json!({ "name": "Alice", "age": 30 }));
    /// let person: Person = cake.narrow(&value).unwrap();
    /// assert_eq!(person.name, "Alice");
    /// ```
    pub fn narrow<T: DeserializeOwned>(&self, value: &Value) -> Result<T, NarrowError> {
        let value = self.as_(value)?;
        from_value_with_path(&value)
    }

    /// Lenient check, then deserialize into `T`.
    pub fn narrow_shape<T: DeserializeOwned>(&self, value: &Value) -> Result<T, NarrowError> {
        let value = self.as_shape(value)?;
        from_value_with_path(&value)
    }

    /// Parse JSON text, strict check, then deserialize into `T`.
    pub fn narrow_str<T: DeserializeOwned>(&self, src: &str) -> Result<T, NarrowError> {
        let json: serde_json::Value = serde_json::from_str(src).map_err(NarrowError::Parse)?;
        self.narrow(&Value::from(json))
    }
}

fn from_value_with_path<T: DeserializeOwned>(value: &Value) -> Result<T, NarrowError> {
    let json = serde_json::Value::try_from(value)?;
    serde_path_to_error::deserialize::<_, T>(json).map_err(|err| {
        let path = err.path().to_string();
        NarrowError::Deserialize {
            path,
            source: err.into_inner(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{any, array, bake, integer, optional, string};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
        tags: Vec<String>,
        note: Option<String>,
    }

    fn item() -> Cake {
        bake!({ id: integer(), tags: array(string()), note: optional(string()) })
    }

    #[test]
    fn narrow_checks_then_deserializes() -> anyhow::Result<()> {
        let value = Value::from(json!({ "id": 7, "tags": ["a"] }));
        let narrowed: Item = item().narrow(&value)?;
        assert_eq!(
            narrowed,
            Item {
                id: 7,
                tags: vec!["a".to_string()],
                note: None
            }
        );
        Ok(())
    }

    #[test]
    fn check_failures_come_first() {
        let value = Value::from(json!({ "id": 1.5, "tags": [] }));
        let err = item().narrow::<Item>(&value).unwrap_err();
        assert!(matches!(err, NarrowError::Check(_)));
        assert!(err.to_string().contains("Property \"id\": Number is not an integer."));
    }

    #[test]
    fn shape_narrowing_drops_excess_properties() -> anyhow::Result<()> {
        let narrowed: Item = item().narrow_shape(&Value::from(json!({ "id": 1, "tags": [], "extra": 0 })))?;
        assert_eq!(narrowed.id, 1);
        Ok(())
    }

    #[test]
    fn deserialize_errors_carry_a_path() {
        let loose = bake!({ id: any(), tags: any() });
        let err = loose
            .narrow_str::<Item>(r#"{"id": 1, "tags": ["a", 2]}"#)
            .unwrap_err();
        match &err {
            NarrowError::Deserialize { path, .. } => assert_eq!(path, "tags[1]"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(err.to_string().starts_with("at JSON path tags[1] → "));
    }

    #[test]
    fn unrepresentable_values_are_reported() {
        let value = Value::from(json!({ "id": 1, "tags": [] }));
        if let Some(obj) = value.as_object() {
            obj.insert("note", crate::value::Symbol::new("s"));
        }
        let err = bake!({ id: any(), tags: any(), note: any() })
            .narrow::<Item>(&value)
            .unwrap_err();
        assert!(matches!(err, NarrowError::Json(ToJsonError::Symbol { .. })));
        assert!(matches!(
            item().narrow_str::<Item>("{"),
            Err(NarrowError::Parse(_))
        ));
    }
}
