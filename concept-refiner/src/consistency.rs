//! Consistency checks lift `evaluate` to sequences of examples; the
//! refinement operators use them to filter their candidates.
use crate::evaluate::is_consistent;
use crate::{Example, Hypothesis, LearnError, Token};

/// Returns true iff `hypothesis` predicts the label of every example.
///
/// # Errors
///
/// Propagates `evaluate` errors.
pub fn all_consistent<V: Token>(
    examples: &[Example<V>],
    hypothesis: &Hypothesis<V>,
) -> Result<bool, LearnError> {
    for example in examples {
        if !is_consistent(example, hypothesis)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Returns true iff `hypothesis` rejects every negative example;
/// positive examples are not checked at all.
///
/// # Errors
///
/// Propagates `evaluate` errors.
pub fn negatives_consistent<V: Token>(
    examples: &[Example<V>],
    hypothesis: &Hypothesis<V>,
) -> Result<bool, LearnError> {
    for example in examples.iter().filter(|example| !example.goal()) {
        if !is_consistent(example, hypothesis)? {
            return Ok(false);
        }
    }

    Ok(true)
}

#[test]
fn test_consistency() {
    use crate::Literal;

    let examples = vec![
        Example::new(vec![("A", "a1")], true).expect("ok"),
        Example::new(vec![("A", "a2")], false).expect("ok"),
        Example::new(vec![("A", "a3")], true).expect("ok"),
    ];

    let not_a2 = Hypothesis::from_literals(vec![Literal::not_equal("A", "a2").expect("ok")])
        .expect("ok");
    assert_eq!(all_consistent(&examples, &not_a2), Ok(true));
    assert_eq!(negatives_consistent(&examples, &not_a2), Ok(true));

    // Rejects the negative, but also the last positive.
    let a1 = Hypothesis::from_literals(vec![Literal::equal("A", "a1").expect("ok")]).expect("ok");
    assert_eq!(all_consistent(&examples, &a1), Ok(false));
    assert_eq!(negatives_consistent(&examples, &a1), Ok(true));

    let everything = Hypothesis::new();
    assert_eq!(all_consistent(&examples, &everything), Ok(false));
    assert_eq!(negatives_consistent(&examples, &everything), Ok(false));

    assert_eq!(all_consistent(&[], &everything), Ok(true));
}

#[test]
fn test_positives_skipped() {
    use crate::Literal;

    // The positive example lacks `B`, but is never evaluated.
    let examples = vec![
        Example::new(vec![("A", "a1")], true).expect("ok"),
        Example::new(vec![("A", "a1"), ("B", "b1")], false).expect("ok"),
    ];

    let h = Hypothesis::from_literals(vec![Literal::equal("B", "b2").expect("ok")]).expect("ok");
    assert_eq!(negatives_consistent(&examples, &h), Ok(true));
    assert!(all_consistent(&examples, &h).is_err());
}
