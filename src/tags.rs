//! Discriminator labels for object properties and tuple elements.
//!
//! A tag never changes how the wrapped cake checks a value; the composite
//! that owns it decides what the label means (an optional property may be
//! absent, a rest element repeats).

/// The label carried by a [`Tagged`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagLabel {
    Plain,
    Optional,
    Rest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Tagged<T> {
    Plain(T),
    Optional(T),
    Rest(T),
}

impl<T> Tagged<T> {
    pub fn tag(&self) -> TagLabel {
        match self {
            Tagged::Plain(_) => TagLabel::Plain,
            Tagged::Optional(_) => TagLabel::Optional,
            Tagged::Rest(_) => TagLabel::Rest,
        }
    }

    pub fn untag(&self) -> (TagLabel, &T) {
        (self.tag(), self.untagged())
    }

    pub fn untagged(&self) -> &T {
        match self {
            Tagged::Plain(x) | Tagged::Optional(x) | Tagged::Rest(x) => x,
        }
    }

    pub fn into_untagged(self) -> T {
        match self {
            Tagged::Plain(x) | Tagged::Optional(x) | Tagged::Rest(x) => x,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Tagged::Optional(_))
    }

    /// Keep the label, transform the payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tagged<U> {
        match self {
            Tagged::Plain(x) => Tagged::Plain(f(x)),
            Tagged::Optional(x) => Tagged::Optional(f(x)),
            Tagged::Rest(x) => Tagged::Rest(f(x)),
        }
    }
}

/// Mark an object property (or a tuple element) as optional.
///
/// ```
/// use json_cake::{bake, number, optional, string};
///
/// let person = bake!({ name: string(), age: optional(number()) });
/// assert_eq!(person.to_string(), "{name: string, age?: (number) | undefined}");
/// ```
pub fn optional<T>(value: T) -> Tagged<T> {
    Tagged::Optional(value)
}

/// Mark a tuple element as a repeated rest element.
pub fn rest<T>(value: T) -> Tagged<T> {
    Tagged::Rest(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untag_returns_label_and_payload() {
        assert_eq!(optional(3).untag(), (TagLabel::Optional, &3));
        assert_eq!(rest("x").untag(), (TagLabel::Rest, &"x"));
        assert_eq!(Tagged::Plain(1).map(|x| x + 1), Tagged::Plain(2));
        assert!(optional(()).is_optional());
        assert!(!rest(()).is_optional());
    }
}
