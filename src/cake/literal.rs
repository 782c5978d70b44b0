use crate::cake::{Cake, CheckContext, CheckResult, Dispatch, StringifyContext};
use crate::error::{CakeError, CakeErrorKind};
use crate::value::{Primitive, Value};

/// Matches exactly one primitive, by SameValueZero.
#[derive(Debug, Clone)]
pub struct LiteralCake {
    pub value: Primitive,
}

impl LiteralCake {
    pub fn new(value: impl Into<Primitive>) -> Self {
        LiteralCake {
            value: value.into(),
        }
    }
}

impl Dispatch for LiteralCake {
    fn dispatch_check(&self, this: &Cake, value: &Value, _cx: &mut dyn CheckContext) -> CheckResult {
        if self.value.same_value_zero(value) {
            return Ok(());
        }
        Err(CakeError::new(CakeErrorKind::LiteralNotEqual {
            cake: this.clone(),
            expected: self.value.clone(),
            value: value.clone(),
        }))
    }

    fn dispatch_stringify(&self, _cx: &mut dyn StringifyContext) -> String {
        self.value.to_string()
    }
}

pub fn literal(value: impl Into<Primitive>) -> Cake {
    Cake::new(LiteralCake::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Symbol;

    #[test]
    fn literals_use_same_value_zero() {
        assert!(literal(0).is(&Value::from(-0.0)));
        assert!(literal(f64::NAN).is(&Value::from(f64::NAN)));
        assert!(!literal(0).is(&Value::from("0")));
        assert!(literal(Primitive::Undefined).is(&Value::Undefined));
        assert!(!literal(Primitive::Null).is(&Value::Undefined));

        let sym = Symbol::new("sym");
        assert!(literal(sym.clone()).is(&Value::from(sym)));
        assert!(!literal(Symbol::new("sym")).is(&Value::from(Symbol::new("sym"))));
    }

    #[test]
    fn literals_print_their_value() {
        assert_eq!(literal("abc").to_string(), "\"abc\"");
        assert_eq!(literal(-1.5).to_string(), "-1.5");
        assert_eq!(literal(Primitive::BigInt(7)).to_string(), "7n");
        assert_eq!(literal(Primitive::Null).to_string(), "null");
        assert_eq!(
            literal("red").as_(&Value::from("blue")).unwrap_err().to_string(),
            "Value does not equal \"red\"."
        );
    }
}
