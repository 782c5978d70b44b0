//! Descriptor handles ("cakes") and the dispatch protocol they implement.
//!
//! A [`Cake`] is an immutable node in a type-description graph. Each variant
//! knows how to check a value against itself and how to print itself; the
//! [`Checker`](crate::Checker) and [`CakeStringifier`](crate::CakeStringifier)
//! only ever talk to variants through [`Dispatch`], handing them a context
//! whose `recurse` routes nested work back through the engine so caching and
//! cycle detection apply uniformly.
//!
//! Handles are cheap to clone and compare by identity: two structurally equal
//! cakes built separately are different cakes.
pub mod literal;
pub mod object;
pub mod reference;
pub mod refinement;
pub mod tuple;
pub mod type_guard;
pub mod union;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::checker::Checker;
use crate::error::{CakeError, TypeError};
use crate::options::{CheckOptions, CheckOptionsOverride};
use crate::refine::Refinement;
use crate::stringifier::CakeStringifier;
use crate::value::Value;

pub use literal::{LiteralCake, literal};
pub use object::{ObjectCake, object};
pub use reference::{ReferenceCake, reference};
pub use refinement::RefinementCake;
pub use tuple::{TupleCake, TupleShapeError, array, tuple};
pub use type_guard::{TypeGuardCake, type_guard};
pub use union::{UnionCake, union};

/// `Ok(())` when the value satisfies the cake.
pub type CheckResult = Result<(), CakeError>;

// ————————————————————————————————————————————————————————————————————————————
// DISPATCH PROTOCOL
// ————————————————————————————————————————————————————————————————————————————

/// What a variant may ask of the engine while checking.
pub trait CheckContext {
    /// Check a nested (cake, value) pair through the engine.
    fn recurse(&mut self, cake: &Cake, value: &Value) -> CheckResult;

    /// Effective options for `cake`: its own overrides, then the ambient ones.
    fn get_options(&self, cake: &Cake) -> CheckOptions;
}

/// What a variant may ask of the engine while printing.
pub trait StringifyContext {
    fn recurse(&mut self, cake: &Cake) -> String;
}

/// The two operations every descriptor variant provides.
///
/// `this` is the handle the variant lives in, so that errors can point back
/// at the descriptor that produced them.
pub trait Dispatch: Send + Sync {
    fn dispatch_check(&self, this: &Cake, value: &Value, cx: &mut dyn CheckContext) -> CheckResult;

    fn dispatch_stringify(&self, cx: &mut dyn StringifyContext) -> String;
}

/// Every descriptor variant. `Custom` is the seam for descriptors defined
/// outside this crate.
#[derive(Clone)]
pub enum CakeKind {
    Literal(LiteralCake),
    TypeGuard(TypeGuardCake),
    Object(ObjectCake),
    Tuple(TupleCake),
    Union(UnionCake),
    Refinement(RefinementCake),
    Reference(ReferenceCake),
    Custom(Arc<dyn Dispatch>),
}

impl CakeKind {
    fn as_dispatch(&self) -> &dyn Dispatch {
        match self {
            CakeKind::Literal(c) => c,
            CakeKind::TypeGuard(c) => c,
            CakeKind::Object(c) => c,
            CakeKind::Tuple(c) => c,
            CakeKind::Union(c) => c,
            CakeKind::Refinement(c) => c,
            CakeKind::Reference(c) => c,
            CakeKind::Custom(c) => c.as_ref(),
        }
    }
}

impl Dispatch for CakeKind {
    fn dispatch_check(&self, this: &Cake, value: &Value, cx: &mut dyn CheckContext) -> CheckResult {
        self.as_dispatch().dispatch_check(this, value, cx)
    }

    fn dispatch_stringify(&self, cx: &mut dyn StringifyContext) -> String {
        self.as_dispatch().dispatch_stringify(cx)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// CAKE HANDLE
// ————————————————————————————————————————————————————————————————————————————

struct CakeNode {
    name: Option<String>,
    options: CheckOptionsOverride,
    kind: CakeKind,
}

/// A runtime description of a value shape.
///
/// ```
/// use json_cake::{Value, bake, number, optional, string};
///
/// let person = bake!({ name: string(), age: optional(number()) });
/// let alice = Value::from(serde_json::json!({ "name": "Alice", "extra": "oops" }));
///
/// assert!(!person.is(&alice));
/// assert!(person.is_shape(&alice));
/// ```
#[derive(Clone)]
pub struct Cake(Arc<CakeNode>);

impl Cake {
    pub fn new(kind: impl Into<CakeKind>) -> Cake {
        Cake(Arc::new(CakeNode {
            name: None,
            options: CheckOptionsOverride::default(),
            kind: kind.into(),
        }))
    }

    /// Wrap a descriptor variant defined outside this crate.
    pub fn custom(dispatch: impl Dispatch + 'static) -> Cake {
        Cake::new(CakeKind::Custom(Arc::new(dispatch)))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn options(&self) -> &CheckOptionsOverride {
        &self.0.options
    }

    pub fn kind(&self) -> &CakeKind {
        &self.0.kind
    }

    pub fn ptr_eq(&self, other: &Cake) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn with_node(&self, name: Option<String>, options: CheckOptionsOverride) -> Cake {
        Cake(Arc::new(CakeNode {
            name,
            options,
            kind: self.0.kind.clone(),
        }))
    }

    /// A sibling cake that prints as `name`. The receiver is unchanged.
    pub fn with_name(&self, name: impl Into<String>) -> Cake {
        self.with_node(Some(name.into()), self.0.options)
    }

    /// A sibling cake that prints structurally.
    pub fn without_name(&self) -> Cake {
        self.with_node(None, self.0.options)
    }

    /// A sibling cake whose options override the ambient ones.
    pub fn with_options(&self, options: impl Into<CheckOptionsOverride>) -> Cake {
        self.with_node(self.0.name.clone(), options.into())
    }

    /// Constrain this cake further. Stacks on any earlier refinement.
    pub fn refined(&self, refinement: Arc<dyn Refinement>) -> Cake {
        Cake::new(RefinementCake::new(self.clone(), refinement))
    }

    /// Like [`Cake::refined`], taking the refinement by value.
    ///
    /// ```
    /// use json_cake::{NumberConstraints, Value, number};
    ///
    /// let percentage = number().satisfying(NumberConstraints::new().min(0.0).max(100.0));
    /// assert!(percentage.is(&Value::from(20.3)));
    /// assert!(!percentage.is(&Value::from(101)));
    /// assert_eq!(percentage.to_string(), "(number).refined(min 0, max 100)");
    /// ```
    pub fn satisfying<R: Refinement + 'static>(&self, refinement: R) -> Cake {
        self.refined(Arc::new(refinement))
    }

    /// Check with strict options (excess object properties are errors).
    pub fn check(&self, value: &Value) -> Result<Value, CakeError> {
        Checker::new(CheckOptions::STRICT).check(self, value)
    }

    /// Check with lenient options (excess object properties are ignored).
    pub fn check_shape(&self, value: &Value) -> Result<Value, CakeError> {
        Checker::new(CheckOptions::LENIENT).check(self, value)
    }

    pub fn is(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }

    pub fn is_shape(&self, value: &Value) -> bool {
        self.check_shape(value).is_ok()
    }

    /// The value itself, or a [`TypeError`] carrying the rendered diagnostic.
    pub fn as_(&self, value: &Value) -> Result<Value, TypeError> {
        self.check(value).or_else(|error| error.throw())
    }

    pub fn as_shape(&self, value: &Value) -> Result<Value, TypeError> {
        self.check_shape(value).or_else(|error| error.throw())
    }
}

impl PartialEq for Cake {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cake {}

impl Hash for Cake {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as usize).hash(state);
    }
}

/// Canonical printing. The format may change between versions.
impl fmt::Display for Cake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CakeStringifier::new().stringify(self))
    }
}

impl fmt::Debug for Cake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cake").field(&self.to_string()).finish()
    }
}

impl From<&Cake> for Cake {
    fn from(value: &Cake) -> Self {
        value.clone()
    }
}

macro_rules! impl_into_cake {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for CakeKind {
                fn from(value: $ty) -> Self {
                    CakeKind::$variant(value)
                }
            }

            impl From<$ty> for Cake {
                fn from(value: $ty) -> Self {
                    Cake::new(value)
                }
            }
        )*
    };
}

impl_into_cake!(
    Literal(LiteralCake),
    TypeGuard(TypeGuardCake),
    Object(ObjectCake),
    Tuple(TupleCake),
    Union(UnionCake),
    Refinement(RefinementCake),
    Reference(ReferenceCake),
);

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CakeErrorKind;
    use crate::options::ExcessProperties;
    use crate::{
        NumberConstraints, bake, boolean, integer, number, optional, string, type_guard,
    };
    use serde_json::json;

    fn person() -> Cake {
        bake!({ name: string() })
    }

    #[test]
    fn as_returns_value_or_type_error() {
        let n = Value::from(3);
        assert_eq!(number().as_(&n).unwrap(), n);
        let err = number().as_(&Value::from("oops")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value does not satisfy type 'number': type guard failed."
        );
    }

    #[test]
    fn strict_and_shape_differ_on_excess_properties() {
        let alice = Value::from(json!({ "name": "Alice", "extra": "oops" }));
        let p = person();
        assert!(!p.is(&alice));
        assert!(p.is_shape(&alice));
        assert_eq!(p.as_shape(&alice).unwrap(), alice);
        assert_eq!(
            p.as_(&alice).unwrap_err().to_string(),
            [
                "Value does not satisfy type '{name: string}': object properties are invalid.",
                "  Property \"extra\": Property is not declared in type and excess properties are not allowed.",
            ]
            .join("\n")
        );
        assert_eq!(
            p.as_shape(&Value::from("oops")).unwrap_err().to_string(),
            "Value does not satisfy type '{name: string}': value is not an object."
        );
    }

    #[test]
    fn check_result_carries_structured_error() {
        let p = person();
        let alice = Value::from(json!({ "name": "Alice", "extra": "oops" }));
        assert_eq!(p.check_shape(&alice), Ok(alice.clone()));
        let error = p.check(&alice).unwrap_err();
        match error.kind() {
            CakeErrorKind::ObjectProperties { cake, errors, .. } => {
                assert_eq!(cake, &p);
                assert_eq!(errors.len(), 1);
                assert!(matches!(
                    errors[&crate::Key::from("extra")].kind(),
                    CakeErrorKind::ExcessPropertyPresent { .. }
                ));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn check_is_idempotent() {
        let p = bake!({ name: string(), age: optional(number()) });
        let v = Value::from(json!({ "name": 1, "age": "x" }));
        assert_eq!(p.check(&v), p.check(&v));
    }

    #[test]
    fn to_string_round_trip() {
        let p = bake!({ name: string(), age: optional(number()) });
        assert_eq!(p.to_string(), "{name: string, age?: (number) | undefined}");
    }

    #[test]
    fn with_name_returns_a_sibling() {
        let cakes = [
            crate::array(bake!({})),
            bake(0),
            number(),
            bake!({}),
            crate::reference(boolean),
            bake(0).satisfying(crate::IntegerRefinement),
            string(),
            string()
                .satisfying(crate::StringConstraints::new())
                .satisfying(crate::StringConstraints::new()),
            crate::tuple(Vec::<Cake>::new()),
            TypeGuardCake::unnamed("is_boolean", crate::value::is_boolean),
            crate::union([0]),
        ];
        for cake in cakes {
            let renamed = cake.with_name("abcd");
            assert_eq!(renamed.name(), Some("abcd"));
            assert_eq!(renamed.to_string(), "abcd");
            assert_ne!(renamed, cake);
            assert_eq!(renamed.without_name().name(), None);
        }
        assert_eq!(number().name(), Some("number"));
        assert_eq!(
            integer().without_name().to_string(),
            "(number).refined(is an integer)"
        );
    }

    #[test]
    fn per_cake_options_override_ambient() {
        let open = person().with_options(CheckOptionsOverride::excess_properties(ExcessProperties::Ignore));
        let closed = person().with_options(CheckOptions::STRICT);
        let alice = Value::from(json!({ "name": "Alice", "extra": 1 }));
        assert!(open.is(&alice));
        assert!(!closed.is_shape(&alice));
    }

    #[test]
    fn shape_checks_reach_nested_objects() {
        let outer = bake!({ inner: { a: string() } });
        let value = Value::from(json!({ "inner": { "a": "x", "b": 1 } }));
        assert!(outer.is_shape(&value));
        assert!(!outer.is(&value));
        assert_eq!(
            outer.as_(&value).unwrap_err().to_string(),
            [
                "Value does not satisfy type '{inner: {a: string}}': object properties are invalid.",
                "  Property \"inner\": Value does not satisfy type '{a: string}': object properties are invalid.",
                "    Property \"b\": Property is not declared in type and excess properties are not allowed.",
            ]
            .join("\n")
        );

        let closed_inner = bake!({ a: string() }).with_options(CheckOptions::STRICT);
        let outer = bake!({ inner: closed_inner });
        assert!(!outer.is_shape(&value));
        assert!(outer.is_shape(&Value::from(json!({ "inner": { "a": "x" }, "extra": 1 }))));
    }

    #[test]
    fn shape_checks_keep_tuple_lengths_strict() {
        let single = crate::tuple([number()]);
        let pair = Value::from(json!([1, 2]));
        assert!(!single.is_shape(&pair));
        assert_eq!(
            single.as_shape(&pair).unwrap_err().to_string(),
            "Value does not satisfy type '[number]': expected 1 element(s) but received 2."
        );
    }

    #[test]
    fn refinements_chain() {
        let c = number()
            .satisfying(NumberConstraints::new().min(0.0).max(100.0))
            .satisfying(NumberConstraints::new().step(5.0));
        for ok in [0, 5, 100] {
            assert!(c.is(&Value::from(ok)), "{ok} should pass");
        }
        assert_eq!(
            c.as_(&Value::from(101)).unwrap_err().to_string(),
            "Number is greater than the maximum of 100."
        );
        assert_eq!(
            c.as_(&Value::from(3)).unwrap_err().to_string(),
            "Number is not a multiple of 5."
        );
        assert_eq!(
            c.to_string(),
            "((number).refined(min 0, max 100)).refined(multiple of 5)"
        );
    }

    struct Even;

    impl Dispatch for Even {
        fn dispatch_check(&self, this: &Cake, value: &Value, cx: &mut dyn CheckContext) -> CheckResult {
            cx.recurse(&number(), value)?;
            match value.as_f64() {
                Some(n) if n % 2.0 == 0.0 => Ok(()),
                _ => Err(CakeError::custom(format!("Value does not satisfy type '{this}'."))),
            }
        }

        fn dispatch_stringify(&self, _cx: &mut dyn StringifyContext) -> String {
            "even".to_string()
        }
    }

    #[test]
    fn custom_variants_go_through_the_engine() {
        let even = Cake::custom(Even);
        assert!(even.is(&Value::from(4)));
        assert_eq!(
            even.as_(&Value::from(3)).unwrap_err().to_string(),
            "Value does not satisfy type 'even'."
        );
        let guard = type_guard("truthy", |v| matches!(v, Value::Bool(true)));
        assert_eq!(bake!({ flag: guard, n: even }).to_string(), "{flag: truthy, n: even}");
    }
}
