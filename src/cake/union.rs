use crate::baker::{Bakeable, bake};
use crate::cake::{Cake, CheckContext, CheckResult, Dispatch, StringifyContext};
use crate::error::{CakeError, CakeErrorKind};
use crate::value::Value;

/// Matches if any member matches. Members are tried in order and the first
/// success wins.
#[derive(Debug, Clone, Default)]
pub struct UnionCake {
    pub members: Vec<Cake>,
}

impl UnionCake {
    pub fn new(members: Vec<Cake>) -> Self {
        UnionCake { members }
    }
}

impl Dispatch for UnionCake {
    fn dispatch_check(&self, this: &Cake, value: &Value, cx: &mut dyn CheckContext) -> CheckResult {
        let mut errors = Vec::with_capacity(self.members.len());
        for member in &self.members {
            match cx.recurse(member, value) {
                Ok(()) => return Ok(()),
                Err(error) => errors.push(error),
            }
        }
        Err(CakeError::new(CakeErrorKind::Union {
            cake: this.clone(),
            value: value.clone(),
            errors,
        }))
    }

    fn dispatch_stringify(&self, cx: &mut dyn StringifyContext) -> String {
        match self.members.as_slice() {
            [] => "never (empty union)".to_string(),
            [only] => cx.recurse(only),
            members => members
                .iter()
                .map(|member| format!("({})", cx.recurse(member)))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

/// A union of baked members. See also [`union!`](crate::union!) for mixed
/// member types.
pub fn union<I>(members: I) -> Cake
where
    I: IntoIterator,
    I::Item: Into<Bakeable>,
{
    Cake::new(UnionCake::new(members.into_iter().map(bake).collect()))
}
