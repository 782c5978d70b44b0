//! Ready-made cakes for the primitive types.
//!
//! Each is a process-wide singleton, so the same call always returns the
//! same (identical) cake.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::cake::{Cake, type_guard};
use crate::refine::{IntegerRefinement, NotNanRefinement};
use crate::value;

static ANY: Lazy<Cake> = Lazy::new(|| type_guard("any", value::is_any));
static UNKNOWN: Lazy<Cake> = Lazy::new(|| type_guard("unknown", value::is_unknown));
static NEVER: Lazy<Cake> = Lazy::new(|| type_guard("never", value::is_never));
static BOOLEAN: Lazy<Cake> = Lazy::new(|| type_guard("boolean", value::is_boolean));
static BIGINT: Lazy<Cake> = Lazy::new(|| type_guard("bigint", value::is_bigint));
static STRING: Lazy<Cake> = Lazy::new(|| type_guard("string", value::is_string));
static SYMBOL: Lazy<Cake> = Lazy::new(|| type_guard("symbol", value::is_symbol));

static NUMBER: Lazy<Cake> = Lazy::new(|| {
    type_guard("number", value::is_number)
        .refined(Arc::new(NotNanRefinement))
        .with_name("number")
});

static INTEGER: Lazy<Cake> = Lazy::new(|| number().satisfying(IntegerRefinement).with_name("integer"));

/// Accepts everything.
pub fn any() -> Cake {
    ANY.clone()
}

/// Accepts everything.
pub fn unknown() -> Cake {
    UNKNOWN.clone()
}

/// Accepts nothing.
pub fn never() -> Cake {
    NEVER.clone()
}

pub fn boolean() -> Cake {
    BOOLEAN.clone()
}

pub fn bigint() -> Cake {
    BIGINT.clone()
}

/// Numbers other than NaN. Infinities are accepted.
pub fn number() -> Cake {
    NUMBER.clone()
}

pub fn string() -> Cake {
    STRING.clone()
}

pub fn symbol() -> Cake {
    SYMBOL.clone()
}

/// Finite numbers with no fractional part.
pub fn integer() -> Cake {
    INTEGER.clone()
}
