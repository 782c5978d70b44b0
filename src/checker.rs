//! The check engine: memoized, cycle-aware traversal of (cake, value) pairs.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cake::{Cake, CheckContext, CheckResult, Dispatch};
use crate::error::{CakeError, CakeErrorKind};
use crate::options::CheckOptions;
use crate::value::Value;

enum Visit {
    InProgress,
    Done(CheckResult),
}

/// Checks values against cakes under one set of ambient options.
///
/// Every (cake, value) pair is evaluated at most once per checker: repeated
/// visits return the cached result, and a pair reached again while it is
/// still being evaluated yields a circular-reference error. Values compare
/// by identity for arrays and objects and by SameValueZero otherwise.
///
/// A checker may be reused across calls; the cache carries over.
pub struct Checker {
    options: CheckOptions,
    cache: HashMap<Cake, HashMap<Value, Visit>>,
}

impl Checker {
    pub fn new(options: CheckOptions) -> Self {
        Checker {
            options,
            cache: HashMap::new(),
        }
    }

    pub fn options(&self) -> CheckOptions {
        self.options
    }

    /// The value on success, the structured error otherwise.
    pub fn check(&mut self, cake: &Cake, value: &Value) -> Result<Value, CakeError> {
        self.visit(cake, value).map(|()| value.clone())
    }

    fn visit(&mut self, cake: &Cake, value: &Value) -> CheckResult {
        match self.cache.get(cake).and_then(|visits| visits.get(value)) {
            Some(Visit::InProgress) => {
                debug!(cake = %cake, value = value.type_name(), "circular reference while checking");
                return Err(CakeError::new(CakeErrorKind::CircularReference {
                    cake: cake.clone(),
                    value: value.clone(),
                }));
            }
            Some(Visit::Done(result)) => {
                trace!(ok = result.is_ok(), "check cache hit");
                return result.clone();
            }
            None => {}
        }

        trace!(value = value.type_name(), "dispatch check");
        self.record(cake, value, Visit::InProgress);
        let result = cake.kind().dispatch_check(cake, value, self);
        self.record(cake, value, Visit::Done(result.clone()));
        result
    }

    fn record(&mut self, cake: &Cake, value: &Value, visit: Visit) {
        self.cache
            .entry(cake.clone())
            .or_default()
            .insert(value.clone(), visit);
    }
}

impl Default for Checker {
    fn default() -> Self {
        Checker::new(CheckOptions::default())
    }
}

impl CheckContext for Checker {
    fn recurse(&mut self, cake: &Cake, value: &Value) -> CheckResult {
        self.visit(cake, value)
    }

    fn get_options(&self, cake: &Cake) -> CheckOptions {
        self.options.lookup(cake.options())
    }
}

// ------------------------------- Tests ------------------------------------ //
