//! Hypotheses are chains of conjunctions: each level is a set of
//! literals (at most one per attribute) that must all hold, and may
//! be followed by an alternative hypothesis, consulted only when the
//! conjunction fails.  The chain thus reads as
//! $$c_0 \vee (c_1 \vee (c_2 \vee ...))$$.
//!
//! Hypotheses are values: every refinement builds a fresh, fully
//! owned copy, so sibling candidates in the search never share
//! state.
mod encoding;
mod literal;

pub use literal::Literal;
pub use literal::Polarity;

use crate::{LearnError, Token};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved key for the alternative branch in the mapping encoding.
pub const ALTERNATIVE_KEY: &str = "|";

/// Prefix that negates a token in the mapping encoding.
pub const NEGATION_MARKER: char = '!';

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Hypothesis<V> {
    /// Keyed on each literal's attribute.
    conjunction: BTreeMap<String, Literal<V>>,
    alternative: Option<Box<Hypothesis<V>>>,
}

impl<V: Token> Hypothesis<V> {
    /// Returns the empty conjunction, which accepts every example.
    #[must_use]
    pub fn new() -> Self {
        Self {
            conjunction: BTreeMap::new(),
            alternative: None,
        }
    }

    /// Returns the conjunction of `literals`, without alternative.
    ///
    /// # Errors
    ///
    /// Returns `Err` when two literals test the same attribute.
    pub fn from_literals<I: IntoIterator<Item = Literal<V>>>(
        literals: I,
    ) -> Result<Self, LearnError> {
        let mut ret = Self::new();
        for literal in literals {
            if ret.constrains(literal.attribute()) {
                return Err(LearnError::DuplicateAttribute {
                    attribute: literal.attribute().into(),
                });
            }

            ret.conjunction.insert(literal.attribute().into(), literal);
        }

        Ok(ret)
    }

    /// Like `from_literals`, for literals known to test distinct
    /// attributes.
    pub(crate) fn from_distinct_literals<I: IntoIterator<Item = Literal<V>>>(literals: I) -> Self {
        Self {
            conjunction: literals
                .into_iter()
                .map(|literal| (literal.attribute().to_owned(), literal))
                .collect(),
            alternative: None,
        }
    }

    /// Consumes `self` and returns it with `alternative` as its
    /// alternative branch, replacing any previous one.
    #[must_use]
    pub fn or(mut self, alternative: Hypothesis<V>) -> Self {
        self.alternative = Some(Box::new(alternative));
        self
    }

    /// Iterates over the literals of the top-level conjunction, in
    /// attribute order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal<V>> + '_ {
        self.conjunction.values()
    }

    #[must_use]
    pub fn literal(&self, attribute: &str) -> Option<&Literal<V>> {
        self.conjunction.get(attribute)
    }

    /// Returns true iff the top-level conjunction tests `attribute`.
    #[must_use]
    pub fn constrains(&self, attribute: &str) -> bool {
        self.conjunction.contains_key(attribute)
    }

    /// Number of literals in the top-level conjunction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conjunction.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conjunction.is_empty()
    }

    #[must_use]
    pub fn alternative(&self) -> Option<&Hypothesis<V>> {
        self.alternative.as_deref()
    }

    /// Number of alternative branches chained after this conjunction.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(next) = current.alternative() {
            depth += 1;
            current = next;
        }

        depth
    }

    /// Returns a copy of `self` whose top-level conjunction also
    /// contains `literal` (replacing any literal on the same
    /// attribute).
    #[must_use]
    pub fn with_literal(&self, literal: Literal<V>) -> Self {
        let mut ret = self.clone();
        ret.conjunction.insert(literal.attribute().into(), literal);
        ret
    }

    /// Returns a copy of `self` without the top-level literals on
    /// `attributes`.
    #[must_use]
    pub fn without_literals<'a, I: IntoIterator<Item = &'a str>>(&self, attributes: I) -> Self {
        let mut ret = self.clone();
        for attribute in attributes {
            ret.conjunction.remove(attribute);
        }

        ret
    }

    /// Returns a copy of `self` with `alternative` as its alternative
    /// branch; the conjunction is unchanged.
    #[must_use]
    pub fn with_alternative(&self, alternative: Hypothesis<V>) -> Self {
        Self {
            conjunction: self.conjunction.clone(),
            alternative: Some(Box::new(alternative)),
        }
    }

    /// Returns a copy of the top-level conjunction alone.
    #[must_use]
    pub fn without_alternative(&self) -> Self {
        Self {
            conjunction: self.conjunction.clone(),
            alternative: None,
        }
    }
}

impl<V: Token> Default for Hypothesis<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Display> fmt::Display for Hypothesis<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conjunction.is_empty() {
            write!(f, "⊤")?;
        }

        for (index, literal) in self.conjunction.values().enumerate() {
            if index > 0 {
                write!(f, " ∧ ")?;
            }

            write!(f, "{}", literal)?;
        }

        if let Some(alternative) = &self.alternative {
            write!(f, " ∨ ({})", alternative)?;
        }

        Ok(())
    }
}

#[cfg(test)]
fn lit(attribute: &str, value: &'static str) -> Literal<&'static str> {
    Literal::equal(attribute, value).expect("ok")
}

#[test]
fn test_duplicate_attribute() {
    let err = Hypothesis::from_literals(vec![lit("A", "a1"), lit("A", "a2")]);
    assert_eq!(
        err,
        Err(LearnError::DuplicateAttribute {
            attribute: "A".into()
        })
    );
}

#[test]
fn test_copies_are_independent() {
    let base = Hypothesis::from_literals(vec![lit("A", "a1")])
        .expect("ok")
        .or(Hypothesis::from_literals(vec![lit("B", "b1")]).expect("ok"));
    let snapshot = base.clone();

    let wider = base.with_literal(lit("C", "c1"));
    let narrower = base.without_literals(vec!["A"]);
    let rerouted = base.with_alternative(Hypothesis::new());
    let alone = base.without_alternative();

    assert_eq!(base, snapshot);
    assert_eq!(wider.len(), 2);
    assert_eq!(wider.alternative(), base.alternative());
    assert!(narrower.is_empty());
    assert_eq!(narrower.depth(), 1);
    assert_eq!(rerouted.literal("A"), base.literal("A"));
    assert_eq!(rerouted.alternative(), Some(&Hypothesis::new()));
    assert_eq!(alone.depth(), 0);
}

#[test]
fn test_depth() {
    let h: Hypothesis<&str> = Hypothesis::new();
    assert_eq!(h.depth(), 0);

    let h = h.clone().or(h.clone().or(h));
    assert_eq!(h.depth(), 2);
}

#[test]
fn test_display() {
    let h = Hypothesis::from_literals(vec![
        lit("A", "a1"),
        Literal::not_equal("B", "b2").expect("ok"),
    ])
    .expect("ok")
    .or(Hypothesis::new());

    assert_eq!(h.to_string(), "A = a1 ∧ B ≠ b2 ∨ (⊤)");
}
