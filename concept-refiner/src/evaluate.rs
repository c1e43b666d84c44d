//! Evaluation decides what a hypothesis predicts for one example.
use crate::{Example, Hypothesis, LearnError, Token};

/// How a hypothesis' prediction compares with an example's label.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Verdict {
    Consistent,
    /// Predicted true for a negative example.
    FalsePositive,
    /// Predicted false for a positive example.
    FalseNegative,
}

/// Returns the label `hypothesis` predicts for `example`.
///
/// Each level of the hypothesis is a conjunction: when all its
/// literals hold, the prediction is true, regardless of what follows.
/// Otherwise, the alternative (if any) decides; a failed conjunction
/// without alternative predicts false.  Literals are checked in
/// attribute order, and a level stops at its first failing literal.
///
/// # Errors
///
/// Returns `Err` when a literal that we must check tests an attribute
/// missing from `example`.
pub fn evaluate<V: Token>(
    example: &Example<V>,
    hypothesis: &Hypothesis<V>,
) -> Result<bool, LearnError> {
    let mut current = hypothesis;

    loop {
        if conjunction_holds(example, current)? {
            return Ok(true);
        }

        match current.alternative() {
            Some(alternative) => current = alternative,
            None => return Ok(false),
        }
    }
}

fn conjunction_holds<V: Token>(
    example: &Example<V>,
    hypothesis: &Hypothesis<V>,
) -> Result<bool, LearnError> {
    for literal in hypothesis.literals() {
        if !literal.holds(example)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Compares the prediction of `hypothesis` with the label of
/// `example`.
///
/// # Errors
///
/// Propagates `evaluate` errors.
pub fn classify<V: Token>(
    example: &Example<V>,
    hypothesis: &Hypothesis<V>,
) -> Result<Verdict, LearnError> {
    Ok(match (evaluate(example, hypothesis)?, example.goal()) {
        (true, false) => Verdict::FalsePositive,
        (false, true) => Verdict::FalseNegative,
        _ => Verdict::Consistent,
    })
}

/// # Errors
///
/// Propagates `evaluate` errors.
pub fn is_consistent<V: Token>(
    example: &Example<V>,
    hypothesis: &Hypothesis<V>,
) -> Result<bool, LearnError> {
    Ok(classify(example, hypothesis)? == Verdict::Consistent)
}

/// # Errors
///
/// Propagates `evaluate` errors.
pub fn false_positive<V: Token>(
    example: &Example<V>,
    hypothesis: &Hypothesis<V>,
) -> Result<bool, LearnError> {
    Ok(classify(example, hypothesis)? == Verdict::FalsePositive)
}

/// # Errors
///
/// Propagates `evaluate` errors.
pub fn false_negative<V: Token>(
    example: &Example<V>,
    hypothesis: &Hypothesis<V>,
) -> Result<bool, LearnError> {
    Ok(classify(example, hypothesis)? == Verdict::FalseNegative)
}

#[cfg(test)]
fn example(a: &'static str, b: &'static str, goal: bool) -> Example<&'static str> {
    Example::new(vec![("A", a), ("B", b)], goal).expect("ok")
}

#[cfg(test)]
fn conjunction(literals: Vec<crate::Literal<&'static str>>) -> Hypothesis<&'static str> {
    Hypothesis::from_literals(literals).expect("ok")
}

#[test]
fn test_empty_accepts_everything() {
    let h = Hypothesis::new();

    assert_eq!(evaluate(&example("a1", "b1", true), &h), Ok(true));
    assert_eq!(evaluate(&example("a2", "b2", false), &h), Ok(true));
}

#[test]
fn test_conjunction() {
    use crate::Literal;

    let h = conjunction(vec![
        Literal::equal("A", "a1").expect("ok"),
        Literal::not_equal("B", "b2").expect("ok"),
    ]);

    assert_eq!(evaluate(&example("a1", "b1", true), &h), Ok(true));
    assert_eq!(evaluate(&example("a1", "b2", true), &h), Ok(false));
    assert_eq!(evaluate(&example("a2", "b1", true), &h), Ok(false));
}

#[test]
fn test_alternative_only_on_failure() {
    use crate::Literal;

    // A = a1 ∨ (B = b1)
    let h = conjunction(vec![Literal::equal("A", "a1").expect("ok")])
        .or(conjunction(vec![Literal::equal("B", "b1").expect("ok")]));

    assert_eq!(evaluate(&example("a1", "b2", true), &h), Ok(true));
    assert_eq!(evaluate(&example("a2", "b1", true), &h), Ok(true));
    assert_eq!(evaluate(&example("a2", "b2", true), &h), Ok(false));

    // A = a1 ∨ (A = a2 ∨ (B = b2))
    let h = conjunction(vec![Literal::equal("A", "a1").expect("ok")]).or(conjunction(vec![
        Literal::equal("A", "a2").expect("ok"),
    ])
    .or(conjunction(vec![Literal::equal("B", "b2").expect("ok")])));

    assert_eq!(evaluate(&example("a2", "b1", true), &h), Ok(true));
    assert_eq!(evaluate(&example("a3", "b2", true), &h), Ok(true));
    assert_eq!(evaluate(&example("a3", "b1", true), &h), Ok(false));
}

#[test]
fn test_missing_attribute() {
    use crate::Literal;

    let h = conjunction(vec![Literal::equal("C", "c1").expect("ok")]);
    assert_eq!(
        evaluate(&example("a1", "b1", true), &h),
        Err(LearnError::MissingAttribute {
            attribute: "C".into()
        })
    );
}

#[test]
fn test_classify() {
    use crate::Literal;

    let h = conjunction(vec![Literal::equal("A", "a1").expect("ok")]);

    assert_eq!(classify(&example("a1", "b1", true), &h), Ok(Verdict::Consistent));
    assert_eq!(classify(&example("a2", "b1", false), &h), Ok(Verdict::Consistent));
    assert_eq!(
        classify(&example("a1", "b1", false), &h),
        Ok(Verdict::FalsePositive)
    );
    assert_eq!(
        classify(&example("a2", "b1", true), &h),
        Ok(Verdict::FalseNegative)
    );

    assert_eq!(false_positive(&example("a1", "b1", false), &h), Ok(true));
    assert_eq!(false_negative(&example("a1", "b1", false), &h), Ok(false));
    assert_eq!(is_consistent(&example("a1", "b1", true), &h), Ok(true));
}

#[test]
fn test_pure() {
    use crate::Literal;

    let e = example("a2", "b1", true);
    let h = conjunction(vec![Literal::equal("A", "a1").expect("ok")])
        .or(conjunction(vec![Literal::equal("B", "b1").expect("ok")]));
    let (e_snapshot, h_snapshot) = (e.clone(), h.clone());

    assert_eq!(evaluate(&e, &h), evaluate(&e, &h));
    assert_eq!(e, e_snapshot);
    assert_eq!(h, h_snapshot);
}
