use std::fmt;
use std::sync::Arc;

use crate::cake::{Cake, CheckContext, CheckResult, Dispatch, StringifyContext};
use crate::error::{CakeError, CakeErrorKind};
use crate::value::Value;

pub type Guard = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Accepts whatever an arbitrary predicate accepts.
#[derive(Clone)]
pub struct TypeGuardCake {
    pub guard_name: String,
    guard: Guard,
}

impl TypeGuardCake {
    pub fn new(guard_name: impl Into<String>, guard: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        TypeGuardCake {
            guard_name: guard_name.into(),
            guard: Arc::new(guard),
        }
    }

    /// A guard cake that prints structurally, as `(type guard NAME)`.
    pub fn unnamed(guard_name: impl Into<String>, guard: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Cake {
        Cake::new(TypeGuardCake::new(guard_name, guard))
    }

    pub fn test(&self, value: &Value) -> bool {
        (self.guard)(value)
    }
}

impl fmt::Debug for TypeGuardCake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeGuardCake")
            .field("guard_name", &self.guard_name)
            .finish_non_exhaustive()
    }
}

impl Dispatch for TypeGuardCake {
    fn dispatch_check(&self, this: &Cake, value: &Value, _cx: &mut dyn CheckContext) -> CheckResult {
        if self.test(value) {
            return Ok(());
        }
        Err(CakeError::new(CakeErrorKind::TypeGuardFailed {
            cake: this.clone(),
            value: value.clone(),
        }))
    }

    fn dispatch_stringify(&self, _cx: &mut dyn StringifyContext) -> String {
        format!("(type guard {})", self.guard_name)
    }
}

/// A guard cake that prints as `name`.
pub fn type_guard(name: &str, guard: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Cake {
    Cake::new(TypeGuardCake::new(name, guard)).with_name(name)
}
