use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cake::CheckResult;
use crate::error::{CakeError, CakeErrorKind};
use crate::refine::{Refinement, expect_number};
use crate::value::{Value, format_number};

/// Bounds and divisibility for numbers. All constraints are optional and
/// inclusive; `step_from` defaults to 0.
///
/// The step test is `(n - step_from) % step == 0` in floating point, so
/// fractional steps such as 0.1 can reject values that look like multiples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_from: Option<f64>,
}

impl NumberConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn step_from(mut self, step_from: f64) -> Self {
        self.step_from = Some(step_from);
        self
    }
}

impl Refinement for NumberConstraints {
    fn dispatch_check(&self, value: &Value) -> CheckResult {
        let n = expect_number(value)?;
        if let Some(min) = self.min.filter(|&min| n < min) {
            return Err(CakeError::new(CakeErrorKind::NumberMin { value: n, min }));
        }
        if let Some(max) = self.max.filter(|&max| n > max) {
            return Err(CakeError::new(CakeErrorKind::NumberMax { value: n, max }));
        }
        if let Some(step) = self.step {
            let step_from = self.step_from.unwrap_or(0.0);
            if (n - step_from) % step != 0.0 {
                return Err(CakeError::new(CakeErrorKind::NumberStep {
                    value: n,
                    step,
                    step_from,
                }));
            }
        }
        Ok(())
    }
}

impl fmt::Display for NumberConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(min) = self.min {
            parts.push(format!("min {}", format_number(min)));
        }
        if let Some(max) = self.max {
            parts.push(format!("max {}", format_number(max)));
        }
        if let Some(step) = self.step {
            match self.step_from.filter(|&from| from != 0.0) {
                Some(from) => parts.push(format!(
                    "{} plus a multiple of {}",
                    format_number(from),
                    format_number(step)
                )),
                None => parts.push(format!("multiple of {}", format_number(step))),
            }
        }
        f.write_str(&parts.join(", "))
    }
}

/// Rejects NaN. Part of the built-in `number` cake.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotNanRefinement;

impl Refinement for NotNanRefinement {
    fn dispatch_check(&self, value: &Value) -> CheckResult {
        if expect_number(value)?.is_nan() {
            return Err(CakeError::new(CakeErrorKind::IsNaN));
        }
        Ok(())
    }
}

impl fmt::Display for NotNanRefinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("is not NaN")
    }
}
