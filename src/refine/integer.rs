use std::fmt;

use crate::cake::CheckResult;
use crate::error::{CakeError, CakeErrorKind};
use crate::refine::{Refinement, expect_number};
use crate::value::Value;

/// Finite numbers with no fractional part.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerRefinement;

impl Refinement for IntegerRefinement {
    fn dispatch_check(&self, value: &Value) -> CheckResult {
        let n = expect_number(value)?;
        if n.is_finite() && n.fract() == 0.0 {
            return Ok(());
        }
        Err(CakeError::new(CakeErrorKind::NotAnInteger { value: n }))
    }
}

impl fmt::Display for IntegerRefinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("is an integer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integer;

    #[test]
    fn integers() {
        assert!(integer().is(&Value::from(-3)));
        assert!(integer().is(&Value::from(-0.0)));
        assert!(!integer().is(&Value::from(0.5)));
        assert!(!integer().is(&Value::from(f64::INFINITY)));
        assert_eq!(
            integer().as_(&Value::from(1.5)).unwrap_err().to_string(),
            "Number is not an integer."
        );
        assert_eq!(
            integer().as_(&Value::from("1")).unwrap_err().to_string(),
            "Value does not satisfy type 'number': type guard failed."
        );
        assert_eq!(integer().to_string(), "integer");
    }
}
