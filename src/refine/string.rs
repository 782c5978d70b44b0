use std::fmt;

use regex::Regex;

use crate::cake::{Cake, CheckResult, literal};
use crate::error::{CakeError, CakeErrorKind};
use crate::refine::{NumberConstraints, Refinement, expect_string};
use crate::value::Value;

/// How a string's length is constrained. Lengths count UTF-16 code units.
#[derive(Debug, Clone)]
pub enum LengthSpec {
    Cake(Cake),
    Constraints(NumberConstraints),
}

impl LengthSpec {
    fn check(&self, length: usize) -> CheckResult {
        let length = Value::Number(length as f64);
        match self {
            LengthSpec::Cake(cake) => cake.check(&length).map(drop),
            LengthSpec::Constraints(constraints) => constraints.dispatch_check(&length),
        }
    }
}

/// An exact length.
impl From<usize> for LengthSpec {
    fn from(value: usize) -> Self {
        LengthSpec::Cake(literal(value as f64))
    }
}

impl From<NumberConstraints> for LengthSpec {
    fn from(value: NumberConstraints) -> Self {
        LengthSpec::Constraints(value)
    }
}

impl From<Cake> for LengthSpec {
    fn from(value: Cake) -> Self {
        LengthSpec::Cake(value)
    }
}

impl fmt::Display for LengthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthSpec::Cake(cake) => write!(f, "{cake}"),
            LengthSpec::Constraints(constraints) => write!(f, "{constraints}"),
        }
    }
}

/// Length and pattern constraints for strings.
#[derive(Debug, Clone, Default)]
pub struct StringConstraints {
    pub length: Option<LengthSpec>,
    pub regex: Option<Regex>,
}

impl StringConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, length: impl Into<LengthSpec>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn regex(mut self, regex: Regex) -> Self {
        self.regex = Some(regex);
        self
    }

    pub fn pattern(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.regex(Regex::new(pattern)?))
    }
}

impl Refinement for StringConstraints {
    fn dispatch_check(&self, value: &Value) -> CheckResult {
        let s = expect_string(value)?;
        if let Some(length) = &self.length {
            if let Err(error) = length.check(s.encode_utf16().count()) {
                return Err(CakeError::new(CakeErrorKind::StringLength {
                    value: s.to_string(),
                    error,
                }));
            }
        }
        if let Some(regex) = self.regex.as_ref().filter(|regex| !regex.is_match(s)) {
            return Err(CakeError::new(CakeErrorKind::RegexNotMatched {
                value: s.to_string(),
                pattern: regex.as_str().to_string(),
            }));
        }
        Ok(())
    }
}

impl fmt::Display for StringConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(length) = &self.length {
            parts.push(format!("length {length}"));
        }
        if let Some(regex) = &self.regex {
            parts.push(format!("regex /{}/", regex.as_str()));
        }
        f.write_str(&parts.join(", "))
    }
}
