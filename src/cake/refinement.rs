use std::fmt;
use std::sync::Arc;

use crate::cake::{Cake, CheckContext, CheckResult, Dispatch, StringifyContext};
use crate::refine::Refinement;
use crate::value::Value;

/// A base cake plus an extra constraint, checked only once the base passes.
#[derive(Clone)]
pub struct RefinementCake {
    pub base: Cake,
    pub refinement: Arc<dyn Refinement>,
}

impl RefinementCake {
    pub fn new(base: Cake, refinement: Arc<dyn Refinement>) -> Self {
        RefinementCake { base, refinement }
    }
}

impl fmt::Debug for RefinementCake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefinementCake")
            .field("base", &self.base)
            .field("refinement", &self.refinement.to_string())
            .finish()
    }
}

impl Dispatch for RefinementCake {
    fn dispatch_check(&self, _this: &Cake, value: &Value, cx: &mut dyn CheckContext) -> CheckResult {
        cx.recurse(&self.base, value)?;
        self.refinement.dispatch_check(value)
    }

    fn dispatch_stringify(&self, cx: &mut dyn StringifyContext) -> String {
        format!("({}).refined({})", cx.recurse(&self.base), self.refinement)
    }
}
