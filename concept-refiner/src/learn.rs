//! The search driver threads one running hypothesis through the
//! example stream, and backtracks over refinement choices.
//!
//! Examples are consumed in order.  When an example agrees with the
//! running hypothesis, we simply move on; otherwise, we ask the
//! matching refinement operator (`specialize` for false positives,
//! `generalize` for false negatives) for candidates that fit every
//! example seen so far, and recursively try to learn the rest of the
//! stream from each candidate in turn.  The first success wins; when
//! all candidates fail, so does the current choice point, and the
//! caller moves on to its next sibling.
//!
//! The examples seen so far are always a prefix of the input, so the
//! search only tracks positions, and recursion depth is bounded by
//! the number of refinements along the current path.
use crate::evaluate::{classify, Verdict};
use crate::refine::{generalize, specialize};
use crate::{Example, Exploration, Hypothesis, LearnError, Shuffled, Token};
use tracing::{debug, trace};

/// The result of a search that ran to completion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome<V> {
    /// A hypothesis consistent with every example.
    Learned(Hypothesis<V>),
    /// Every refinement path ran into an example it could not fit.
    Exhausted,
}

impl<V> Outcome<V> {
    #[must_use]
    pub fn is_learned(&self) -> bool {
        matches!(self, Outcome::Learned(_))
    }

    #[must_use]
    pub fn hypothesis(&self) -> Option<&Hypothesis<V>> {
        match self {
            Outcome::Learned(hypothesis) => Some(hypothesis),
            Outcome::Exhausted => None,
        }
    }

    #[must_use]
    pub fn into_hypothesis(self) -> Option<Hypothesis<V>> {
        match self {
            Outcome::Learned(hypothesis) => Some(hypothesis),
            Outcome::Exhausted => None,
        }
    }
}

/// Counters for the last search a `Learner` ran.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Examples classified against a running hypothesis, counting
    /// re-classifications after backtracking.
    pub examples_checked: usize,
    /// Mismatches that called a refinement operator.
    pub refinements: usize,
    /// Candidate hypotheses the search descended into.
    pub candidates_tried: usize,
    /// Choice points abandoned after all their candidates failed.
    pub backtracks: usize,
}

/// A `Learner` owns the `Exploration` strategy that orders sibling
/// candidates, and reports statistics about its last search.
#[derive(Clone, Debug)]
pub struct Learner<E> {
    exploration: E,
    stats: SearchStats,
}

impl<E: Exploration> Learner<E> {
    #[must_use]
    pub fn new(exploration: E) -> Self {
        Self {
            exploration,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches for a refinement of `initial` consistent with all of
    /// `examples`.  An empty stream returns `initial` unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the search meets malformed input (e.g., an
    /// example missing an attribute that a hypothesis tests).  The
    /// search stops at the first such error.
    pub fn learn<V: Token>(
        &mut self,
        examples: &[Example<V>],
        initial: Hypothesis<V>,
    ) -> Result<Outcome<V>, LearnError> {
        self.stats = SearchStats::default();

        let outcome = self.search(examples, 0, initial)?;
        debug!(
            learned = outcome.is_learned(),
            examples = examples.len(),
            stats = ?self.stats,
            "search complete"
        );
        Ok(outcome)
    }

    /// Learns `examples[start..]` from `hypothesis`, which must be
    /// consistent with `examples[..start]`.
    fn search<V: Token>(
        &mut self,
        examples: &[Example<V>],
        start: usize,
        hypothesis: Hypothesis<V>,
    ) -> Result<Outcome<V>, LearnError> {
        for position in start..examples.len() {
            let example = &examples[position];
            let seen = &examples[..=position];
            self.stats.examples_checked += 1;

            let verdict = classify(example, &hypothesis)?;
            let candidates = match verdict {
                Verdict::Consistent => continue,
                Verdict::FalsePositive => specialize(seen, &hypothesis, &mut self.exploration)?,
                Verdict::FalseNegative => generalize(seen, &hypothesis, &mut self.exploration)?,
            };

            self.stats.refinements += 1;
            debug!(
                position,
                ?verdict,
                candidates = candidates.len(),
                depth = hypothesis.depth(),
                "refining hypothesis"
            );

            for candidate in candidates {
                self.stats.candidates_tried += 1;
                trace!(position, ?candidate, "trying candidate");

                if let Outcome::Learned(found) = self.search(examples, position + 1, candidate)? {
                    return Ok(Outcome::Learned(found));
                }
            }

            self.stats.backtracks += 1;
            debug!(position, "candidates exhausted, backtracking");
            return Ok(Outcome::Exhausted);
        }

        Ok(Outcome::Learned(hypothesis))
    }
}

/// Learns `examples` from `initial`, trying candidates in a freshly
/// randomized order.
///
/// # Errors
///
/// Returns `Err` on malformed input; see `Learner::learn`.
pub fn learn<V: Token>(
    examples: &[Example<V>],
    initial: Hypothesis<V>,
) -> Result<Outcome<V>, LearnError> {
    Learner::new(Shuffled::from_entropy()).learn(examples, initial)
}

#[cfg(test)]
fn example(a: &'static str, b: &'static str, goal: bool) -> Example<&'static str> {
    Example::new(vec![("A", a), ("B", b)], goal).expect("ok")
}

#[test]
fn test_empty_stream() {
    use crate::{InOrder, Literal};

    let initial =
        Hypothesis::from_literals(vec![Literal::equal("A", "a1").expect("ok")]).expect("ok");
    let mut learner = Learner::new(InOrder);

    assert_eq!(
        learner.learn::<&str>(&[], initial.clone()),
        Ok(Outcome::Learned(initial))
    );
    assert_eq!(learner.stats(), SearchStats::default());
}

#[test]
fn test_specialize_once() {
    use crate::{all_consistent, InOrder, Literal};

    let examples = vec![
        example("a1", "b1", true),
        example("a1", "b2", true),
        example("a2", "b1", false),
    ];
    let mut learner = Learner::new(InOrder);

    let outcome = learner.learn(&examples, Hypothesis::new()).expect("ok");
    let learned = outcome.hypothesis().expect("learned");
    assert_eq!(
        learned,
        &Hypothesis::from_literals(vec![Literal::equal("A", "a1").expect("ok")]).expect("ok")
    );
    assert_eq!(all_consistent(&examples, learned), Ok(true));

    assert_eq!(
        learner.stats(),
        SearchStats {
            examples_checked: 3,
            refinements: 1,
            candidates_tried: 1,
            backtracks: 0,
        }
    );
}

#[test]
fn test_contradiction_exhausts() {
    use crate::InOrder;

    let examples = vec![example("a1", "b1", true), example("a1", "b1", false)];
    let mut learner = Learner::new(InOrder);

    assert_eq!(
        learner.learn(&examples, Hypothesis::new()),
        Ok(Outcome::Exhausted)
    );
    assert_eq!(learner.stats().backtracks, 1);
}

#[test]
fn test_disjunction() {
    use crate::{InOrder, Literal};

    // `A = a1` fits the first two examples, and the last positive
    // example gets its own disjunct.
    let examples = vec![
        example("a1", "b1", true),
        example("a2", "b2", false),
        example("a2", "b1", true),
    ];
    let mut learner = Learner::new(InOrder);

    let learned = learner
        .learn(&examples, Hypothesis::new())
        .expect("ok")
        .into_hypothesis()
        .expect("learned");
    let conjunction = |attribute: &str, value| {
        Hypothesis::from_literals(vec![Literal::equal(attribute, value).expect("ok")]).expect("ok")
    };
    assert_eq!(learned, conjunction("A", "a1").or(conjunction("B", "b1")));
}

#[test]
fn test_backtrack() {
    use crate::{all_consistent, Literal};

    /// Tries candidates last to first.
    struct Reversed;

    impl Exploration for Reversed {
        fn arrange<T>(&mut self, candidates: &mut [T]) {
            candidates.reverse();
        }
    }

    // The second example leaves `A = a1` and `A ≠ a2`; reversed, the
    // latter comes first, and no literal on `B` saves it from the
    // last example.
    let examples = vec![
        example("a1", "b1", true),
        example("a2", "b1", false),
        example("a3", "b1", false),
    ];
    let mut learner = Learner::new(Reversed);

    let learned = learner
        .learn(&examples, Hypothesis::new())
        .expect("ok")
        .into_hypothesis()
        .expect("learned");
    assert_eq!(
        learned,
        Hypothesis::from_literals(vec![Literal::equal("A", "a1").expect("ok")]).expect("ok")
    );
    assert_eq!(all_consistent(&examples, &learned), Ok(true));
    assert_eq!(
        learner.stats(),
        SearchStats {
            examples_checked: 4,
            refinements: 2,
            candidates_tried: 2,
            backtracks: 1,
        }
    );
}

#[test]
fn test_failure_propagates() {
    use crate::InOrder;

    // The last example contradicts the second one: each refinement of
    // the second example fails, and then so does the whole search.
    let examples = vec![
        example("a1", "b1", true),
        example("a2", "b1", false),
        example("a2", "b1", true),
    ];
    let mut learner = Learner::new(InOrder);

    assert_eq!(
        learner.learn(&examples, Hypothesis::new()),
        Ok(Outcome::Exhausted)
    );
    assert_eq!(
        learner.stats(),
        SearchStats {
            examples_checked: 4,
            refinements: 3,
            candidates_tried: 2,
            backtracks: 3,
        }
    );
}

#[test]
fn test_malformed_input() {
    use crate::{InOrder, Literal};

    let examples = vec![Example::new(vec![("B", "b1")], true).expect("ok")];
    let initial =
        Hypothesis::from_literals(vec![Literal::equal("A", "a1").expect("ok")]).expect("ok");

    assert_eq!(
        Learner::new(InOrder).learn(&examples, initial),
        Err(LearnError::MissingAttribute {
            attribute: "A".into()
        })
    );
}

#[test]
fn test_shuffled_learn() {
    let examples = vec![
        example("a1", "b1", true),
        example("a2", "b2", false),
        example("a2", "b1", true),
        example("a1", "b2", true),
    ];

    let outcome = learn(&examples, Hypothesis::new()).expect("ok");
    let learned = outcome.hypothesis().expect("learned");
    assert_eq!(crate::all_consistent(&examples, learned), Ok(true));
}
