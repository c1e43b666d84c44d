//! Property tests: learned hypotheses fit every example, refinement
//! candidates pass their consistency checks, and nothing mutates its
//! inputs.

use concept_refiner::{
    add_or, all_consistent, evaluate, generalize, negatives_consistent, specialize, Example,
    Hypothesis, InOrder, Learner, Literal, Outcome, Polarity, Shuffled,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_value() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("v1"), Just("v2")]
}

/// An example with a value for each of `A`, `B` and `C`.
fn arb_example() -> impl Strategy<Value = Example<&'static str>> {
    (arb_value(), arb_value(), arb_value(), any::<bool>()).prop_map(|(a, b, c, goal)| {
        Example::new(vec![("A", a), ("B", b), ("C", c)], goal).expect("valid attribute names")
    })
}

fn arb_examples(min: usize, max: usize) -> impl Strategy<Value = Vec<Example<&'static str>>> {
    prop::collection::vec(arb_example(), min..max)
}

fn arb_literal(attribute: &'static str) -> impl Strategy<Value = Option<Literal<&'static str>>> {
    prop::option::of((arb_value(), any::<bool>())).prop_map(move |literal| {
        literal.map(|(value, negated)| {
            let polarity = if negated {
                Polarity::NotEqual
            } else {
                Polarity::Equal
            };
            Literal::new(attribute, value, polarity).expect("valid attribute name")
        })
    })
}

/// A conjunction of at most one literal per attribute.
fn arb_conjunction() -> impl Strategy<Value = Hypothesis<&'static str>> {
    (arb_literal("A"), arb_literal("B"), arb_literal("C")).prop_map(|(a, b, c)| {
        Hypothesis::from_literals(a.into_iter().chain(b).chain(c)).expect("distinct attributes")
    })
}

/// A conjunction, possibly followed by up to `depth` alternatives.
fn arb_hypothesis(depth: usize) -> BoxedStrategy<Hypothesis<&'static str>> {
    if depth == 0 {
        return arb_conjunction().boxed();
    }

    (arb_conjunction(), prop::option::of(arb_hypothesis(depth - 1)))
        .prop_map(|(conjunction, alternative)| match alternative {
            Some(alternative) => conjunction.or(alternative),
            None => conjunction,
        })
        .boxed()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn learned_hypotheses_fit_every_example(
        examples in arb_examples(0, 5),
        initial in arb_hypothesis(1),
        seed in any::<u64>(),
    ) {
        let mut learner = Learner::new(Shuffled::seeded(seed));
        let outcome = learner.learn(&examples, initial).expect("well-formed input");

        if let Some(learned) = outcome.hypothesis() {
            prop_assert_eq!(all_consistent(&examples, learned), Ok(true));
        }
    }

    #[test]
    fn empty_stream_keeps_initial(initial in arb_hypothesis(2), seed in any::<u64>()) {
        let mut learner = Learner::new(Shuffled::seeded(seed));
        prop_assert_eq!(
            learner.learn(&[], initial.clone()),
            Ok(Outcome::Learned(initial))
        );
    }

    #[test]
    fn contradictions_exhaust(
        prefix in arb_examples(0, 3),
        duplicated in arb_example(),
        initial in arb_hypothesis(1),
    ) {
        // Same attributes, opposite labels: nothing separates them.
        let flipped = Example::new(
            duplicated.attributes().iter().map(|(name, value)| (name.clone(), *value)),
            !duplicated.goal(),
        )
        .expect("valid attribute names");

        let mut examples = prefix;
        examples.push(duplicated);
        examples.push(flipped);

        let mut learner = Learner::new(InOrder);
        prop_assert_eq!(learner.learn(&examples, initial), Ok(Outcome::Exhausted));
    }

    #[test]
    fn specializations_fit_all_seen(seen in arb_examples(1, 6), h in arb_hypothesis(2)) {
        let snapshot = h.clone();
        let candidates = specialize(&seen, &h, &mut InOrder).expect("well-formed input");

        for candidate in &candidates {
            prop_assert_eq!(all_consistent(&seen, candidate), Ok(true));
        }

        prop_assert_eq!(h, snapshot);
    }

    #[test]
    fn generalizations_reject_negatives(seen in arb_examples(1, 6), h in arb_hypothesis(2)) {
        let snapshot = h.clone();
        let candidates = generalize(&seen, &h, &mut InOrder).expect("well-formed input");
        let trigger = seen.last().expect("non-empty");

        for candidate in &candidates {
            prop_assert_eq!(negatives_consistent(&seen, candidate), Ok(true));
            if trigger.goal() {
                prop_assert_eq!(evaluate(trigger, candidate), Ok(true));
            }
        }

        prop_assert_eq!(h, snapshot);
    }

    #[test]
    fn add_or_seeds_one_disjunct(seen in arb_examples(1, 6), h in arb_conjunction()) {
        for candidate in add_or(&seen, &h).expect("well-formed input") {
            prop_assert_eq!(candidate.depth(), 1);
            prop_assert_eq!(negatives_consistent(&seen, &candidate), Ok(true));
            prop_assert_eq!(candidate.without_alternative(), h.clone());
            prop_assert_eq!(
                negatives_consistent(&seen, candidate.alternative().expect("seeded")),
                Ok(true)
            );
        }
    }

    #[test]
    fn shuffling_permutes_candidates(
        seen in arb_examples(1, 6),
        h in arb_hypothesis(1),
        seed in any::<u64>(),
    ) {
        let mut in_order = specialize(&seen, &h, &mut InOrder).expect("well-formed input");
        let mut shuffled =
            specialize(&seen, &h, &mut Shuffled::seeded(seed)).expect("well-formed input");

        // Hypotheses are not ordered; compare their renderings.
        let render = |candidates: &mut Vec<Hypothesis<&str>>| {
            let mut rendered: Vec<String> = candidates.drain(..).map(|c| c.to_string()).collect();
            rendered.sort();
            rendered
        };
        prop_assert_eq!(render(&mut in_order), render(&mut shuffled));
    }
}
