use crate::example::check_attribute_name;
use crate::{Example, LearnError, Token};
use std::fmt;

/// Whether a literal asks for its attribute to equal, or to differ
/// from, its value.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Polarity {
    Equal,
    NotEqual,
}

impl Polarity {
    /// The polarity of a literal built to agree with an example
    /// labeled `goal`: bare for positive examples, negated for
    /// negative ones.
    #[must_use]
    pub fn for_label(goal: bool) -> Self {
        if goal {
            Polarity::Equal
        } else {
            Polarity::NotEqual
        }
    }
}

/// A `Literal` is an `(attribute, value, polarity)` constraint on
/// examples.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Literal<V> {
    attribute: String,
    value: V,
    polarity: Polarity,
}

impl<V: Token> Literal<V> {
    /// # Errors
    ///
    /// Returns `Err` when `attribute` is a reserved name.
    pub fn new(attribute: &str, value: V, polarity: Polarity) -> Result<Self, LearnError> {
        check_attribute_name(attribute)?;
        Ok(Self::trusted(attribute.into(), value, polarity))
    }

    /// `attribute` must equal `value`.
    ///
    /// # Errors
    ///
    /// Returns `Err` when `attribute` is a reserved name.
    pub fn equal(attribute: &str, value: V) -> Result<Self, LearnError> {
        Self::new(attribute, value, Polarity::Equal)
    }

    /// `attribute` must differ from `value`.
    ///
    /// # Errors
    ///
    /// Returns `Err` when `attribute` is a reserved name.
    pub fn not_equal(attribute: &str, value: V) -> Result<Self, LearnError> {
        Self::new(attribute, value, Polarity::NotEqual)
    }

    /// Skips the reserved name check: `attribute` comes from an
    /// `Example`, which already rejected reserved names.
    pub(crate) fn trusted(attribute: String, value: V, polarity: Polarity) -> Self {
        Self {
            attribute,
            value,
            polarity,
        }
    }

    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[must_use]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Returns whether `example` satisfies this literal.
    ///
    /// # Errors
    ///
    /// Returns `Err` when `example` lacks the literal's attribute.
    pub fn holds(&self, example: &Example<V>) -> Result<bool, LearnError> {
        let actual = example.value(&self.attribute)?;
        Ok(match self.polarity {
            Polarity::Equal => *actual == self.value,
            Polarity::NotEqual => *actual != self.value,
        })
    }
}

impl<V: fmt::Display> fmt::Display for Literal<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.polarity {
            Polarity::Equal => "=",
            Polarity::NotEqual => "≠",
        };

        write!(f, "{} {} {}", self.attribute, op, self.value)
    }
}

#[test]
fn test_holds() {
    let example = Example::new(vec![("A", "a1")], true).expect("ok");

    assert!(Literal::equal("A", "a1").expect("ok").holds(&example).expect("ok"));
    assert!(!Literal::equal("A", "a2").expect("ok").holds(&example).expect("ok"));
    assert!(!Literal::not_equal("A", "a1")
        .expect("ok")
        .holds(&example)
        .expect("ok"));
    assert!(Literal::not_equal("A", "a2")
        .expect("ok")
        .holds(&example)
        .expect("ok"));

    assert!(Literal::equal("B", "b1").expect("ok").holds(&example).is_err());
}

#[test]
fn test_reserved() {
    assert!(Literal::equal("GOAL", true).is_err());
    assert!(Literal::not_equal("|", 1).is_err());
}

#[test]
fn test_display() {
    assert_eq!(Literal::equal("A", "a1").expect("ok").to_string(), "A = a1");
    assert_eq!(
        Literal::not_equal("B", "b2").expect("ok").to_string(),
        "B ≠ b2"
    );
}
