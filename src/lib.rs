//! Runtime type descriptions ("cakes") for checking untrusted, JSON-like
//! values, with structured diagnostics and typed extraction.
//!
//! ```
//! use json_cake::{Value, bake, number, optional, string};
//!
//! let person = bake!({ name: string(), age: optional(number()) });
//! let value = Value::from(serde_json::json!({ "name": "Alice", "age": "old" }));
//!
//! let error = person.as_(&value).unwrap_err();
//! assert_eq!(
//!     error.to_string(),
//!     [
//!         "Value does not satisfy type '{name: string, age?: (number) | undefined}': object properties are invalid.",
//!         "  Property \"age\": Value does not satisfy type 'number': type guard failed.",
//!     ]
//!     .join("\n")
//! );
//! ```
pub mod baker;
pub mod builtins;
pub mod cake;
pub mod checker;
pub mod error;
pub mod narrow;
pub mod options;
pub mod refine;
pub mod stringifier;
pub mod tags;
pub mod value;

pub use baker::{Bakeable, Baker, IntoProperty, ObjectBakeable, bake};
pub use builtins::{any, bigint, boolean, integer, never, number, string, symbol, unknown};
pub use cake::{
    Cake, CakeKind, CheckContext, CheckResult, Dispatch, LiteralCake, ObjectCake, ReferenceCake,
    RefinementCake, StringifyContext, TupleCake, TupleShapeError, TypeGuardCake, UnionCake, array,
    literal, object, reference, tuple, type_guard, union,
};
pub use checker::Checker;
pub use error::{CakeError, CakeErrorFormatter, CakeErrorKind, StringTree, TypeError};
pub use narrow::NarrowError;
pub use options::{CheckOptions, CheckOptionsOverride, ExcessProperties};
pub use refine::{
    IntegerRefinement, LengthSpec, NotNanRefinement, NumberConstraints, Refinement,
    StringConstraints,
};
pub use stringifier::CakeStringifier;
pub use tags::{TagLabel, Tagged, optional, rest};
pub use value::{Array, Key, Object, Primitive, Symbol, ToJsonError, Value};
