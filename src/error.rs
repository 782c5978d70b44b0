//! Structured check failures and their rendering.
//!
//! A [`CakeError`] is a tree: composite cakes aggregate the errors of their
//! children. Rendering goes through a [`StringTree`], one line per node with
//! two spaces of indentation per level.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::cake::Cake;
use crate::stringifier::CakeStringifier;
use crate::value::{Key, Primitive, Value, format_number};

// ————————————————————————————————————————————————————————————————————————————
// STRING TREE
// ————————————————————————————————————————————————————————————————————————————

/// A message, optionally with indented child messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringTree {
    Leaf(String),
    Node(String, Vec<StringTree>),
}

impl StringTree {
    /// Prefix the head line only; children are untouched.
    pub fn prepend(self, prefix: &str) -> StringTree {
        match self {
            StringTree::Leaf(line) => StringTree::Leaf(format!("{prefix}{line}")),
            StringTree::Node(line, children) => StringTree::Node(format!("{prefix}{line}"), children),
        }
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        self.flatten(0, &mut lines);
        lines.join("\n")
    }

    fn flatten(&self, indent: usize, lines: &mut Vec<String>) {
        match self {
            StringTree::Leaf(line) => lines.push(format!("{}{line}", "  ".repeat(indent))),
            StringTree::Node(line, children) => {
                lines.push(format!("{}{line}", "  ".repeat(indent)));
                for child in children {
                    child.flatten(indent + 1, lines);
                }
            }
        }
    }
}

impl From<String> for StringTree {
    fn from(value: String) -> Self {
        StringTree::Leaf(value)
    }
}

impl From<&str> for StringTree {
    fn from(value: &str) -> Self {
        StringTree::Leaf(value.to_string())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// CAKE ERROR
// ————————————————————————————————————————————————————————————————————————————

/// Every way a check can fail.
#[derive(Debug, PartialEq)]
pub enum CakeErrorKind {
    TypeGuardFailed { cake: Cake, value: Value },
    LiteralNotEqual { cake: Cake, expected: Primitive, value: Value },
    NotAnObject { cake: Cake, value: Value },
    NotAnArray { cake: Cake, value: Value },
    ExcessPropertyPresent { value: Value },
    RequiredPropertyMissing { cake: Cake },
    ObjectProperties {
        cake: Cake,
        value: Value,
        errors: IndexMap<Key, CakeError>,
    },
    TupleWrongLength {
        cake: Cake,
        value: Value,
        min_length: usize,
        max_length: Option<usize>,
        length: usize,
    },
    TupleElements {
        cake: Cake,
        value: Value,
        /// The cake is a plain array (a lone rest element).
        is_array: bool,
        errors: Vec<(usize, CakeError)>,
    },
    Union {
        cake: Cake,
        value: Value,
        errors: Vec<CakeError>,
    },
    CircularReference { cake: Cake, value: Value },
    IsNaN,
    NumberMin { value: f64, min: f64 },
    NumberMax { value: f64, max: f64 },
    NumberStep { value: f64, step: f64, step_from: f64 },
    NotAnInteger { value: f64 },
    StringLength { value: String, error: CakeError },
    RegexNotMatched { value: String, pattern: String },
    /// A refinement was handed a value outside the type it refines.
    RefinementInput { expected: &'static str, value: Value },
    Custom(String),
}

/// A check failure. Cheap to clone; clones share the same node.
#[derive(Debug, Clone, PartialEq)]
pub struct CakeError(Rc<CakeErrorKind>);

impl CakeError {
    pub fn new(kind: CakeErrorKind) -> Self {
        CakeError(Rc::new(kind))
    }

    /// A leaf error with a caller-supplied message, for custom refinements.
    pub fn custom(message: impl Into<String>) -> Self {
        CakeError::new(CakeErrorKind::Custom(message.into()))
    }

    pub fn kind(&self) -> &CakeErrorKind {
        &self.0
    }

    /// Identity, as opposed to the structural `==`.
    pub fn ptr_eq(&self, other: &CakeError) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn format(&self) -> StringTree {
        CakeErrorFormatter::new().format(self)
    }

    /// Always `Err`: the rendered message as a [`TypeError`].
    pub fn throw<T>(&self) -> Result<T, TypeError> {
        Err(TypeError::new(self.to_string()))
    }

    fn dispatch_format(&self, cx: &mut CakeErrorFormatter) -> StringTree {
        use CakeErrorKind as K;
        match self.kind() {
            K::TypeGuardFailed { cake, .. } => {
                doesnt_satisfy(cx, cake, "type guard failed").into()
            }
            K::LiteralNotEqual { expected, .. } => format!("Value does not equal {expected}.").into(),
            K::NotAnObject { cake, .. } => doesnt_satisfy(cx, cake, "value is not an object").into(),
            K::NotAnArray { cake, .. } => doesnt_satisfy(cx, cake, "value is not an array").into(),
            K::ExcessPropertyPresent { .. } => {
                "Property is not declared in type and excess properties are not allowed.".into()
            }
            K::RequiredPropertyMissing { .. } => "Required property is missing.".into(),
            K::ObjectProperties { cake, errors, .. } => {
                let message = doesnt_satisfy(cx, cake, "object properties are invalid");
                let children = errors
                    .iter()
                    .map(|(key, error)| cx.recurse(error).prepend(&format!("Property {key}: ")))
                    .collect();
                StringTree::Node(message, children)
            }
            K::TupleWrongLength {
                cake,
                min_length,
                max_length,
                length,
                ..
            } => {
                let expected = match max_length {
                    None => format!("at least {min_length}"),
                    Some(max) if max == min_length => format!("{min_length}"),
                    Some(max) => format!("{min_length}-{max}"),
                };
                let reason = format!("expected {expected} element(s) but received {length}");
                doesnt_satisfy(cx, cake, &reason).into()
            }
            K::TupleElements {
                cake,
                is_array,
                errors,
                ..
            } => {
                let description = if *is_array { "array" } else { "tuple" };
                let message = doesnt_satisfy(cx, cake, &format!("{description} elements are invalid"));
                let children = errors
                    .iter()
                    .map(|(index, error)| cx.recurse(error).prepend(&format!("Element {index}: ")))
                    .collect();
                StringTree::Node(message, children)
            }
            K::Union { cake, errors, .. } => {
                let message = doesnt_satisfy(cx, cake, "none of the union member(s) are satisfied");
                let children = errors.iter().map(|error| cx.recurse(error)).collect();
                StringTree::Node(message, children)
            }
            K::CircularReference { cake, .. } => format!(
                "Could not determine if value satisfies type '{}': value contains a circular reference.",
                cx.stringify_cake(cake)
            )
            .into(),
            K::IsNaN => "Value is NaN.".into(),
            K::NumberMin { min, .. } => {
                format!("Number is less than the minimum of {}.", format_number(*min)).into()
            }
            K::NumberMax { max, .. } => {
                format!("Number is greater than the maximum of {}.", format_number(*max)).into()
            }
            K::NumberStep { step, step_from, .. } => {
                let from = if *step_from == 0.0 {
                    String::new()
                } else {
                    format!(" {} plus", format_number(*step_from))
                };
                format!("Number is not{from} a multiple of {}.", format_number(*step)).into()
            }
            K::NotAnInteger { .. } => "Number is not an integer.".into(),
            K::StringLength { error, .. } => cx.recurse(error).prepend("String length is invalid: "),
            K::RegexNotMatched { pattern, .. } => {
                format!("String does not match regex /{pattern}/.").into()
            }
            K::RefinementInput { expected, value } => format!(
                "Value of type {} cannot be refined as a {expected}.",
                value.type_name()
            )
            .into(),
            K::Custom(message) => message.as_str().into(),
        }
    }
}

fn doesnt_satisfy(cx: &mut CakeErrorFormatter, cake: &Cake, reason: &str) -> String {
    format!("Value does not satisfy type '{}': {reason}.", cx.stringify_cake(cake))
}

impl fmt::Display for CakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format().render())
    }
}

impl std::error::Error for CakeError {}

/// Renders an error tree. One cake stringifier is shared across the whole
/// tree, so each cake is printed at most once.
pub struct CakeErrorFormatter {
    cakes: CakeStringifier,
}

impl CakeErrorFormatter {
    pub fn new() -> Self {
        CakeErrorFormatter {
            cakes: CakeStringifier::new(),
        }
    }

    pub fn format(&mut self, error: &CakeError) -> StringTree {
        self.recurse(error)
    }

    fn recurse(&mut self, error: &CakeError) -> StringTree {
        error.dispatch_format(self)
    }

    fn stringify_cake(&mut self, cake: &Cake) -> String {
        self.cakes.stringify(cake)
    }
}

impl Default for CakeErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TYPE ERROR
// ————————————————————————————————————————————————————————————————————————————

/// The failure of an asserting check (`as_`), carrying the rendered message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TypeError {
    message: String,
}

impl TypeError {
    pub fn new(message: impl Into<String>) -> Self {
        TypeError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// ------------------------------- Tests ------------------------------------ //
