use thiserror::Error;

use crate::baker::{Bakeable, bake};
use crate::cake::{Cake, CheckContext, CheckResult, Dispatch, StringifyContext};
use crate::error::{CakeError, CakeErrorKind};
use crate::tags::{TagLabel, Tagged};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Cannot create TupleCake with non-empty optionalElements and non-empty endElements, \
     because required elements cannot appear after optional elements in a tuple type."
)]
pub struct TupleShapeError;

/// Matches arrays element by element: `[...start, ...optional?, ...rest[], ...end]`.
///
/// Optional and end elements cannot both be present.
#[derive(Debug, Clone, Default)]
pub struct TupleCake {
    start: Vec<Cake>,
    optional: Vec<Cake>,
    rest: Option<Cake>,
    end: Vec<Cake>,
}

impl TupleCake {
    pub fn new(
        start: Vec<Cake>,
        optional: Vec<Cake>,
        rest: Option<Cake>,
        end: Vec<Cake>,
    ) -> Result<Self, TupleShapeError> {
        if !optional.is_empty() && !end.is_empty() {
            return Err(TupleShapeError);
        }
        Ok(TupleCake {
            start,
            optional,
            rest,
            end,
        })
    }

    pub fn start_elements(&self) -> &[Cake] {
        &self.start
    }

    pub fn optional_elements(&self) -> &[Cake] {
        &self.optional
    }

    pub fn rest_element(&self) -> Option<&Cake> {
        self.rest.as_ref()
    }

    pub fn end_elements(&self) -> &[Cake] {
        &self.end
    }

    /// A single rest element and nothing else.
    pub fn is_array(&self) -> bool {
        self.start.is_empty() && self.optional.is_empty() && self.end.is_empty() && self.rest.is_some()
    }

    pub fn min_length(&self) -> usize {
        self.start.len() + self.end.len()
    }

    /// `None` when a rest element makes the tuple unbounded.
    pub fn max_length(&self) -> Option<usize> {
        match self.rest {
            Some(_) => None,
            None => Some(self.start.len() + self.optional.len() + self.end.len()),
        }
    }

    /// The declared element list, with labels and one entry for the rest
    /// element if present.
    pub fn elements(&self) -> Vec<Tagged<Cake>> {
        let mut out: Vec<Tagged<Cake>> = self.start.iter().cloned().map(Tagged::Plain).collect();
        out.extend(self.optional.iter().cloned().map(Tagged::Optional));
        out.extend(self.rest.iter().cloned().map(Tagged::Rest));
        out.extend(self.end.iter().cloned().map(Tagged::Plain));
        out
    }

    /// The element cake for each position of an array of `length`, or
    /// `None` if no array of that length can match.
    pub fn elements_for_length(&self, length: usize) -> Option<Vec<Tagged<Cake>>> {
        if length < self.min_length() || self.max_length().is_some_and(|max| length > max) {
            return None;
        }
        let optional_count = self.optional.len().min(length - self.start.len());
        let rest_count = length - (self.start.len() + optional_count + self.end.len());

        let mut out = Vec::with_capacity(length);
        out.extend(self.start.iter().cloned().map(Tagged::Plain));
        out.extend(self.optional[..optional_count].iter().cloned().map(Tagged::Optional));
        if let Some(rest) = &self.rest {
            out.extend(std::iter::repeat_n(Tagged::Rest(rest.clone()), rest_count));
        }
        out.extend(self.end.iter().cloned().map(Tagged::Plain));
        Some(out)
    }
}

impl Dispatch for TupleCake {
    fn dispatch_check(&self, this: &Cake, value: &Value, cx: &mut dyn CheckContext) -> CheckResult {
        let Value::Array(array) = value else {
            return Err(CakeError::new(CakeErrorKind::NotAnArray {
                cake: this.clone(),
                value: value.clone(),
            }));
        };

        let length = array.len();
        let Some(elements) = self.elements_for_length(length) else {
            return Err(CakeError::new(CakeErrorKind::TupleWrongLength {
                cake: this.clone(),
                value: value.clone(),
                min_length: self.min_length(),
                max_length: self.max_length(),
                length,
            }));
        };

        let mut errors = Vec::new();
        for (index, element) in elements.iter().enumerate() {
            let (tag, cake) = element.untag();
            let item = array.get(index);
            if tag == TagLabel::Optional && item.is_undefined() {
                continue;
            }
            if let Err(error) = cx.recurse(cake, &item) {
                errors.push((index, error));
            }
        }

        if errors.is_empty() {
            return Ok(());
        }
        Err(CakeError::new(CakeErrorKind::TupleElements {
            cake: this.clone(),
            value: value.clone(),
            is_array: self.is_array(),
            errors,
        }))
    }

    fn dispatch_stringify(&self, cx: &mut dyn StringifyContext) -> String {
        if self.start.is_empty() && self.optional.is_empty() && self.end.is_empty() {
            return match &self.rest {
                None => "[]".to_string(),
                Some(rest) => format!("({})[]", cx.recurse(rest)),
            };
        }

        let mut parts = Vec::new();
        for element in &self.start {
            parts.push(cx.recurse(element));
        }
        for element in &self.optional {
            parts.push(format!("(({}) | undefined)?", cx.recurse(element)));
        }
        if let Some(rest) = &self.rest {
            parts.push(format!("...({})[]", cx.recurse(rest)));
        }
        for element in &self.end {
            parts.push(cx.recurse(element));
        }
        format!("[{}]", parts.join(", "))
    }
}

/// A fixed-length tuple.
pub fn tuple<I>(elements: I) -> Cake
where
    I: IntoIterator,
    I::Item: Into<Bakeable>,
{
    Cake::new(TupleCake {
        start: elements.into_iter().map(bake).collect(),
        ..TupleCake::default()
    })
}

/// An array whose elements all satisfy `element`.
pub fn array(element: impl Into<Bakeable>) -> Cake {
    Cake::new(TupleCake {
        rest: Some(bake(element)),
        ..TupleCake::default()
    })
}
