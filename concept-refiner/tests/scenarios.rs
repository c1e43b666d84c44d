//! End-to-end scenarios, with examples and hypotheses written in the
//! JSON mapping encoding.

use concept_refiner::{
    all_consistent, evaluate, learn, specialize, Example, ExplorationMode, Hypothesis, InOrder,
    LearnError, Learner, LearnerConfig, Outcome,
};
use serde_json::json;

fn examples(value: serde_json::Value) -> Vec<Example<String>> {
    serde_json::from_value(value).expect("valid examples")
}

fn hypothesis(value: serde_json::Value) -> Hypothesis<String> {
    serde_json::from_value(value).expect("valid hypothesis")
}

#[test]
fn test_two_attributes() {
    let examples = examples(json!([
        {"A": "a1", "B": "b1", "GOAL": true},
        {"A": "a1", "B": "b2", "GOAL": true},
        {"A": "a2", "B": "b1", "GOAL": false},
    ]));
    let initial = hypothesis(json!({}));

    // The first two examples fit the empty conjunction.
    assert_eq!(evaluate(&examples[0], &initial), Ok(true));
    assert_eq!(evaluate(&examples[1], &initial), Ok(true));
    assert_eq!(evaluate(&examples[2], &initial), Ok(true));

    let candidates = specialize(&examples, &initial, &mut InOrder).expect("ok");
    assert!(candidates.contains(&hypothesis(json!({"A": "!a2"}))));
    assert!(candidates.contains(&hypothesis(json!({"A": "a1"}))));

    for _ in 0..16 {
        let learned = learn(&examples, initial.clone())
            .expect("ok")
            .into_hypothesis()
            .expect("learned");
        assert_eq!(all_consistent(&examples, &learned), Ok(true));
        assert_eq!(learned.depth(), 0);
        assert!(learned.literal("A").is_some());
    }
}

#[test]
fn test_unsatisfiable() {
    let examples = examples(json!([
        {"A": "a1", "B": "b1", "GOAL": true},
        {"A": "a1", "B": "b1", "GOAL": false},
    ]));

    for initial in vec![
        json!({}),
        json!({"A": "a1"}),
        json!({"A": "!a1", "|": {"B": "b2"}}),
    ] {
        assert_eq!(
            learn(&examples, hypothesis(initial)),
            Ok(Outcome::Exhausted)
        );
    }
}

#[test]
fn test_restaurant_like_stream() {
    // A concept that needs a disjunction: wait if the place is full
    // and the wait is short, or if it is raining.
    let examples = examples(json!([
        {"patrons": "full", "wait": "short", "raining": "no", "GOAL": true},
        {"patrons": "full", "wait": "long", "raining": "no", "GOAL": false},
        {"patrons": "some", "wait": "long", "raining": "yes", "GOAL": true},
        {"patrons": "none", "wait": "short", "raining": "no", "GOAL": false},
        {"patrons": "full", "wait": "long", "raining": "yes", "GOAL": true},
        {"patrons": "some", "wait": "short", "raining": "no", "GOAL": false},
    ]));

    let mut learner = LearnerConfig {
        exploration: ExplorationMode::Shuffled,
        seed: Some(2024),
    }
    .build();

    let learned = learner
        .learn(&examples, Hypothesis::new())
        .expect("ok")
        .into_hypothesis()
        .expect("learned");
    assert_eq!(all_consistent(&examples, &learned), Ok(true));
    assert!(learner.stats().refinements >= 1);
}

#[test]
fn test_missing_attribute_is_not_exhaustion() {
    let examples = examples(json!([
        {"A": "a1", "GOAL": true},
        {"B": "b1", "GOAL": false},
    ]));

    let err = Learner::new(InOrder).learn(&examples, hypothesis(json!({"B": "!b1"})));
    assert_eq!(
        err,
        Err(LearnError::MissingAttribute {
            attribute: "B".into()
        })
    );
}

#[test]
fn test_hypothesis_encoding() {
    let encoded = json!({"A": "a1", "B": "!b2", "|": {"C": "c1", "|": {}}});
    let decoded = hypothesis(encoded.clone());

    assert_eq!(decoded.to_string(), "A = a1 ∧ B ≠ b2 ∨ (C = c1 ∨ (⊤))");
    assert_eq!(decoded.depth(), 2);
    assert_eq!(serde_json::to_value(&decoded).expect("ok"), encoded);
}

#[test]
fn test_malformed_hypotheses() {
    for bad in vec![
        json!({"GOAL": "yes"}),
        json!({"A": "!"}),
        json!({"|": "a1"}),
        json!({"A": {"B": "b1"}}),
        json!({"A": 1}),
        json!(["A"]),
    ] {
        assert!(
            serde_json::from_value::<Hypothesis<String>>(bad.clone()).is_err(),
            "{} should be rejected",
            bad
        );
    }
}

#[test]
fn test_example_encoding() {
    let example: Example<String> =
        serde_json::from_value(json!({"A": "a1", "GOAL": false})).expect("ok");
    assert!(!example.goal());
    assert_eq!(example.get("A").map(String::as_str), Some("a1"));
    assert_eq!(
        serde_json::to_value(&example).expect("ok"),
        json!({"A": "a1", "GOAL": false})
    );

    // `GOAL` is required, and `|` cannot name an attribute.
    assert!(serde_json::from_value::<Example<String>>(json!({"A": "a1"})).is_err());
    assert!(
        serde_json::from_value::<Example<String>>(json!({"|": "a1", "GOAL": true})).is_err()
    );
}

#[test]
fn test_config_encoding() {
    let config: LearnerConfig =
        serde_json::from_value(json!({"exploration": "in_order"})).expect("ok");
    assert_eq!(
        config,
        LearnerConfig {
            exploration: ExplorationMode::InOrder,
            seed: None,
        }
    );

    let config: LearnerConfig = serde_json::from_value(json!({})).expect("ok");
    assert_eq!(config, LearnerConfig::default());

    assert!(serde_json::from_value::<LearnerConfig>(json!({"budget": 3})).is_err());
}
