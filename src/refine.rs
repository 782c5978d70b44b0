//! Refinements: extra constraints layered on a base cake with
//! [`Cake::refined`](crate::Cake::refined) or
//! [`Cake::satisfying`](crate::Cake::satisfying).
pub mod integer;
pub mod number;
pub mod string;

use std::fmt;

use crate::cake::CheckResult;
use crate::error::{CakeError, CakeErrorKind};
use crate::value::Value;

pub use integer::IntegerRefinement;
pub use number::{NotNanRefinement, NumberConstraints};
pub use string::{LengthSpec, StringConstraints};

/// A predicate with a diagnostic, run after the base cake has accepted the
/// value. `Display` is the description printed inside `.refined(...)`.
pub trait Refinement: fmt::Display + Send + Sync {
    fn dispatch_check(&self, value: &Value) -> CheckResult;

    fn check(&self, value: &Value) -> Result<Value, CakeError> {
        self.dispatch_check(value).map(|()| value.clone())
    }
}

pub(crate) fn expect_number(value: &Value) -> Result<f64, CakeError> {
    value.as_f64().ok_or_else(|| {
        CakeError::new(CakeErrorKind::RefinementInput {
            expected: "number",
            value: value.clone(),
        })
    })
}

pub(crate) fn expect_string(value: &Value) -> Result<&str, CakeError> {
    value.as_str().ok_or_else(|| {
        CakeError::new(CakeErrorKind::RefinementInput {
            expected: "string",
            value: value.clone(),
        })
    })
}
