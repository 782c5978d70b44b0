use std::fmt;
use std::sync::Arc;

use crate::cake::{Cake, CheckContext, CheckResult, Dispatch, StringifyContext};
use crate::value::Value;

/// Lazily resolves to another cake, which may not exist yet when this one
/// is built. This is how recursive types are expressed.
#[derive(Clone)]
pub struct ReferenceCake {
    get: Arc<dyn Fn() -> Cake + Send + Sync>,
}

impl ReferenceCake {
    pub fn new(get: impl Fn() -> Cake + Send + Sync + 'static) -> Self {
        ReferenceCake { get: Arc::new(get) }
    }

    /// Resolve the target.
    pub fn target(&self) -> Cake {
        (self.get)()
    }
}

impl fmt::Debug for ReferenceCake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceCake").finish_non_exhaustive()
    }
}

impl Dispatch for ReferenceCake {
    fn dispatch_check(&self, _this: &Cake, value: &Value, cx: &mut dyn CheckContext) -> CheckResult {
        cx.recurse(&self.target(), value)
    }

    fn dispatch_stringify(&self, cx: &mut dyn StringifyContext) -> String {
        format!("reference(() => {})", cx.recurse(&self.target()))
    }
}

/// ```
/// use json_cake::{Cake, Value, array, bake, number, optional, reference, string};
/// use once_cell::sync::Lazy;
///
/// static TREE: Lazy<Cake> = Lazy::new(|| {
///     bake!({ label: string(), children: optional(array(reference(|| TREE.clone()))) })
///         .with_name("Tree")
/// });
///
/// let leaf = serde_json::json!({ "label": "leaf" });
/// let root = serde_json::json!({ "label": "root", "children": [leaf] });
/// assert!(TREE.is(&Value::from(root)));
/// assert_eq!(
///     TREE.without_name().to_string(),
///     "{label: string, children?: ((reference(() => Tree))[]) | undefined}"
/// );
/// ```
pub fn reference(get: impl Fn() -> Cake + Send + Sync + 'static) -> Cake {
    Cake::new(ReferenceCake::new(get))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bake, number, optional, string};
    use once_cell::sync::Lazy;
    use serde_json::json;

    static PERSON: Lazy<Cake> = Lazy::new(|| {
        bake!({ name: string(), friend: optional(reference(|| PERSON.clone())) })
    });

    #[test]
    fn recursive_shapes_check() {
        assert!(PERSON.is(&Value::from(json!({ "name": "a", "friend": { "name": "b" } }))));
        let error = PERSON
            .check(&Value::from(json!({ "name": "a", "friend": { "name": 1 } })))
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            [
                "Value does not satisfy type '{name: string, friend?: (reference(() => [Circular])) | undefined}': object properties are invalid.",
                "  Property \"friend\": Value does not satisfy type '{name: string, friend?: (reference(() => [Circular])) | undefined}': object properties are invalid.",
                "    Property \"name\": Value does not satisfy type 'string': type guard failed.",
            ]
            .join("\n")
        );
    }

    static CIRCULAR: Lazy<Cake> = Lazy::new(|| bake!({ name: optional(reference(|| CIRCULAR.clone())) }));

    #[test]
    fn self_referencing_values_report_a_circular_reference() {
        let obj = crate::value::Object::new();
        obj.insert("name", obj.clone());
        let error = CIRCULAR.check(&Value::from(obj)).unwrap_err();
        let printed = "{name?: (reference(() => [Circular])) | undefined}";
        assert_eq!(
            error.to_string(),
            [
                format!("Value does not satisfy type '{printed}': object properties are invalid."),
                format!("  Property \"name\": Could not determine if value satisfies type '{printed}': value contains a circular reference."),
            ]
            .join("\n")
        );
    }

    #[test]
    fn target_resolves_lazily() {
        let r = ReferenceCake::new(number);
        assert!(r.target().ptr_eq(&number()));
        assert_eq!(reference(number).to_string(), "reference(() => number)");
    }
}
