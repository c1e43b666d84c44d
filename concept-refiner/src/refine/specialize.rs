use crate::consistency::all_consistent;
use crate::{Example, Exploration, Hypothesis, LearnError, Literal, Polarity, Token};
use tracing::trace;

/// Returns hypotheses narrower than `hypothesis`, to fix a false
/// positive on the last example in `seen`.
///
/// Candidates add one literal to the top-level conjunction, on an
/// attribute it does not yet test, with the value some seen example
/// has for that attribute (negated if that example is negative), or
/// replace the alternative branch with one of its own
/// specializations.  Every candidate is consistent with all of
/// `seen`; `exploration` decides their order.
///
/// # Errors
///
/// Returns `Err` when a consistency check hits a missing attribute.
pub fn specialize<V: Token, E: Exploration>(
    seen: &[Example<V>],
    hypothesis: &Hypothesis<V>,
    exploration: &mut E,
) -> Result<Vec<Hypothesis<V>>, LearnError> {
    let mut candidates = Vec::new();

    for example in seen {
        let polarity = Polarity::for_label(example.goal());

        for (attribute, value) in example.attributes() {
            if hypothesis.constrains(attribute) {
                continue;
            }

            let literal = Literal::trusted(attribute.clone(), value.clone(), polarity);
            let candidate = hypothesis.with_literal(literal);
            if !candidates.contains(&candidate) && all_consistent(seen, &candidate)? {
                candidates.push(candidate);
            }
        }
    }

    if let Some(alternative) = hypothesis.alternative() {
        for narrower in specialize(seen, alternative, exploration)? {
            // The conjunction above may itself accept a negative
            // example, so check the whole candidate again.
            let candidate = hypothesis.with_alternative(narrower);
            if !candidates.contains(&candidate) && all_consistent(seen, &candidate)? {
                candidates.push(candidate);
            }
        }
    }

    trace!(count = candidates.len(), "specializations");
    exploration.arrange(&mut candidates);
    Ok(candidates)
}

#[cfg(test)]
fn example(a: &'static str, b: &'static str, goal: bool) -> Example<&'static str> {
    Example::new(vec![("A", a), ("B", b)], goal).expect("ok")
}

#[test]
fn test_add_literal() {
    use crate::InOrder;

    let seen = vec![
        example("a1", "b1", true),
        example("a1", "b2", true),
        example("a2", "b1", false),
    ];
    let h = Hypothesis::new();

    let candidates = specialize(&seen, &h, &mut InOrder).expect("ok");
    assert_eq!(
        candidates,
        vec![
            Hypothesis::from_literals(vec![Literal::equal("A", "a1").expect("ok")]).expect("ok"),
            Hypothesis::from_literals(vec![Literal::not_equal("A", "a2").expect("ok")])
                .expect("ok"),
        ]
    );

    for candidate in &candidates {
        assert_eq!(all_consistent(&seen, candidate), Ok(true));
    }

    assert_eq!(h, Hypothesis::new());
}

#[test]
fn test_skips_tested_attributes() {
    use crate::InOrder;

    // `A` is already tested, and nothing on `B` separates the
    // examples.
    let seen = vec![example("a1", "b1", true), example("a1", "b1", false)];
    let h = Hypothesis::from_literals(vec![Literal::equal("A", "a1").expect("ok")]).expect("ok");

    assert_eq!(specialize(&seen, &h, &mut InOrder), Ok(vec![]));
}

#[test]
fn test_specialize_alternative() {
    use crate::InOrder;

    let seen = vec![
        example("a1", "b1", true),
        example("a2", "b2", true),
        example("a3", "b2", false),
    ];
    // A = a1 ∨ (⊤): the alternative accepts the negative example, and
    // must be narrowed.
    let h = Hypothesis::from_literals(vec![Literal::equal("A", "a1").expect("ok")])
        .expect("ok")
        .or(Hypothesis::new());
    let snapshot = h.clone();

    let candidates = specialize(&seen, &h, &mut InOrder).expect("ok");
    assert_eq!(
        candidates,
        vec![h.with_alternative(
            Hypothesis::from_literals(vec![Literal::not_equal("A", "a3").expect("ok")])
                .expect("ok")
        )]
    );
    assert_eq!(h, snapshot);
}

#[test]
fn test_conjunction_still_accepts_negative() {
    use crate::InOrder;

    // The negative example is accepted by `A = a1` itself: narrowing
    // the alternative cannot fix that.
    let seen = vec![example("a1", "b1", true), example("a1", "b2", false)];
    let h = Hypothesis::from_literals(vec![Literal::equal("A", "a1").expect("ok")])
        .expect("ok")
        .or(Hypothesis::new());

    assert_eq!(specialize(&seen, &h, &mut InOrder), Ok(vec![]));
}
