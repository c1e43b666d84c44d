use crate::consistency::{all_consistent, negatives_consistent};
use crate::{Example, Exploration, Hypothesis, LearnError, Literal, Polarity, Token};
use subsets::powerset;
use tracing::trace;

/// The parts of a hypothesis' top level that generalization may
/// delete.
#[derive(Clone, Copy, Debug)]
enum Part<'a> {
    Literal(&'a str),
    Alternative,
}

fn delete_parts<V: Token>(hypothesis: &Hypothesis<V>, parts: &[Part<'_>]) -> Hypothesis<V> {
    let attributes = parts.iter().filter_map(|part| match part {
        Part::Literal(attribute) => Some(*attribute),
        Part::Alternative => None,
    });
    let ret = hypothesis.without_literals(attributes);

    if parts.iter().any(|part| matches!(part, Part::Alternative)) {
        ret.without_alternative()
    } else {
        ret
    }
}

/// Returns hypotheses broader than `hypothesis`, to fix a false
/// negative on the last example in `seen`.
///
/// Candidates come from two sources:
///
/// 1. deleting any subset of the top-level literals, possibly along
///    with the alternative branch; these candidates are consistent
///    with all of `seen`.
/// 2. when there is no alternative, seeding one with `add_or`;
///    otherwise, replacing the alternative with one of its own
///    generalizations.  These candidates reject every negative
///    example in `seen`.
///
/// `exploration` decides the order of the combined list.
///
/// # Errors
///
/// Returns `Err` when a consistency check hits a missing attribute.
pub fn generalize<V: Token, E: Exploration>(
    seen: &[Example<V>],
    hypothesis: &Hypothesis<V>,
    exploration: &mut E,
) -> Result<Vec<Hypothesis<V>>, LearnError> {
    let mut candidates = Vec::new();

    let parts: Vec<Part<'_>> = hypothesis
        .literals()
        .map(|literal| Part::Literal(literal.attribute()))
        .chain(hypothesis.alternative().map(|_| Part::Alternative))
        .collect();

    for deletions in powerset(parts) {
        let candidate = delete_parts(hypothesis, &deletions);
        if !candidates.contains(&candidate) && all_consistent(seen, &candidate)? {
            candidates.push(candidate);
        }
    }

    match hypothesis.alternative() {
        None => {
            for candidate in add_or(seen, hypothesis)? {
                if !candidates.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }
        Some(alternative) => {
            for broader in generalize(seen, alternative, exploration)? {
                let candidate = hypothesis.with_alternative(broader);
                if !candidates.contains(&candidate) && negatives_consistent(seen, &candidate)? {
                    candidates.push(candidate);
                }
            }
        }
    }

    trace!(count = candidates.len(), "generalizations");
    exploration.arrange(&mut candidates);
    Ok(candidates)
}

/// Returns copies of `hypothesis` with a new alternative branch that
/// accepts the last example in `seen`.
///
/// Each branch is a conjunction of a subset of that example's
/// attribute values (bare for a positive example, negated for a
/// negative one).  Candidates must reject every negative example in
/// `seen`; during the search, `hypothesis` already does, so this is a
/// check on the new branch.
/// Any existing alternative is replaced, so `generalize` only calls
/// this on hypotheses without one.  Candidates come in subset order,
/// smallest first.
///
/// # Errors
///
/// Returns `Err` when a consistency check hits a missing attribute.
pub fn add_or<V: Token>(
    seen: &[Example<V>],
    hypothesis: &Hypothesis<V>,
) -> Result<Vec<Hypothesis<V>>, LearnError> {
    let trigger = match seen.last() {
        Some(example) => example,
        None => return Ok(Vec::new()),
    };

    let polarity = Polarity::for_label(trigger.goal());
    let literals: Vec<Literal<V>> = trigger
        .attributes()
        .iter()
        .map(|(attribute, value)| Literal::trusted(attribute.clone(), value.clone(), polarity))
        .collect();

    let mut candidates = Vec::new();
    for subset in powerset(literals) {
        let candidate = hypothesis.with_alternative(Hypothesis::from_distinct_literals(subset));
        if negatives_consistent(seen, &candidate)? {
            candidates.push(candidate);
        }
    }

    Ok(candidates)
}

#[cfg(test)]
fn example(a: &'static str, b: &'static str, goal: bool) -> Example<&'static str> {
    Example::new(vec![("A", a), ("B", b)], goal).expect("ok")
}

#[cfg(test)]
fn conjunction(literals: &[(&str, &'static str)]) -> Hypothesis<&'static str> {
    Hypothesis::from_literals(
        literals
            .iter()
            .map(|(attribute, value)| Literal::equal(attribute, *value).expect("ok")),
    )
    .expect("ok")
}

#[test]
fn test_delete_and_add_or() {
    use crate::InOrder;

    let seen = vec![
        example("a1", "b1", true),
        example("a2", "b1", false),
        example("a1", "b2", true),
    ];
    let h = conjunction(&[("A", "a1"), ("B", "b1")]);
    let snapshot = h.clone();

    let candidates = generalize(&seen, &h, &mut InOrder).expect("ok");
    assert_eq!(
        candidates,
        vec![
            conjunction(&[("A", "a1")]),
            h.with_alternative(conjunction(&[("A", "a1")])),
            h.with_alternative(conjunction(&[("B", "b2")])),
            h.with_alternative(conjunction(&[("A", "a1"), ("B", "b2")])),
        ]
    );

    assert_eq!(all_consistent(&seen, &candidates[0]), Ok(true));
    for candidate in &candidates {
        assert_eq!(negatives_consistent(&seen, candidate), Ok(true));
        assert_eq!(crate::evaluate(&seen[2], candidate), Ok(true));
    }

    assert_eq!(h, snapshot);
}

#[test]
fn test_generalize_alternative() {
    use crate::InOrder;

    let seen = vec![
        example("a1", "b1", true),
        example("a2", "b2", false),
        example("a3", "b3", true),
    ];
    // A = a1 ∨ (B = b1): no deletion helps, so the alternative grows
    // its own alternative.
    let inner = conjunction(&[("B", "b1")]);
    let h = conjunction(&[("A", "a1")]).or(inner.clone());

    let candidates = generalize(&seen, &h, &mut InOrder).expect("ok");
    assert_eq!(
        candidates,
        vec![
            h.with_alternative(inner.with_alternative(conjunction(&[("A", "a3")]))),
            h.with_alternative(inner.with_alternative(conjunction(&[("B", "b3")]))),
            h.with_alternative(
                inner.with_alternative(conjunction(&[("A", "a3"), ("B", "b3")]))
            ),
        ]
    );

    for candidate in &candidates {
        assert_eq!(candidate.depth(), 2);
        assert_eq!(all_consistent(&seen, candidate), Ok(true));
    }
}

#[test]
fn test_delete_alternative() {
    use crate::InOrder;

    // Dropping `A` is enough; dropping the alternative along with it
    // leaves the empty conjunction, which also fits.
    let seen = vec![example("a1", "b1", true), example("a2", "b2", true)];
    let h = conjunction(&[("A", "a1")]).or(conjunction(&[("B", "b3")]));

    let candidates = generalize(&seen, &h, &mut InOrder).expect("ok");
    assert!(candidates.contains(&Hypothesis::new()));
    assert!(candidates.iter().all(|candidate| candidate != &h));
}

#[test]
fn test_add_or_negative_trigger() {
    // A negative trigger seeds negated literals.
    let seen = vec![example("a1", "b1", false)];
    let h = conjunction(&[("A", "a2")]);

    let candidates = add_or(&seen, &h).expect("ok");
    let negated = |attribute: &str, value| Literal::not_equal(attribute, value).expect("ok");
    assert_eq!(
        candidates,
        vec![
            h.with_alternative(Hypothesis::from_literals(vec![negated("A", "a1")]).expect("ok")),
            h.with_alternative(Hypothesis::from_literals(vec![negated("B", "b1")]).expect("ok")),
            h.with_alternative(
                Hypothesis::from_literals(vec![negated("A", "a1"), negated("B", "b1")])
                    .expect("ok")
            ),
        ]
    );
}

#[test]
fn test_add_or_nothing_seen() {
    let h: Hypothesis<&str> = Hypothesis::new();
    assert_eq!(add_or(&[], &h), Ok(vec![]));
}
