//! `LearnerConfig` selects how a `Learner` orders sibling candidates.
//! It deserializes from any serde format, with every field optional:
//!
//! ```json
//! { "exploration": "shuffled", "seed": 7 }
//! ```
use crate::exploration::Strategy;
use crate::{InOrder, Learner, Shuffled};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationMode {
    /// Uniformly random order at every choice point.
    Shuffled,
    /// Generation order; fully deterministic.
    InOrder,
}

impl Default for ExplorationMode {
    fn default() -> Self {
        ExplorationMode::Shuffled
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LearnerConfig {
    pub exploration: ExplorationMode,
    /// Seeds the shuffle for reproducible searches; entropy when
    /// absent.  Ignored in `InOrder` mode.
    pub seed: Option<u64>,
}

impl LearnerConfig {
    #[must_use]
    pub fn build(&self) -> Learner<Strategy> {
        let strategy = match (self.exploration, self.seed) {
            (ExplorationMode::InOrder, _) => Strategy::InOrder(InOrder),
            (ExplorationMode::Shuffled, Some(seed)) => Strategy::Shuffled(Shuffled::seeded(seed)),
            (ExplorationMode::Shuffled, None) => Strategy::Shuffled(Shuffled::from_entropy()),
        };

        Learner::new(strategy)
    }
}

#[test]
fn test_default() {
    let config = LearnerConfig::default();

    assert_eq!(config.exploration, ExplorationMode::Shuffled);
    assert_eq!(config.seed, None);
}

#[test]
fn test_seeded_reproducible() {
    use crate::{Example, Hypothesis};

    let examples: Vec<Example<&str>> = vec![
        Example::new(vec![("A", "a1"), ("B", "b1")], true).expect("ok"),
        Example::new(vec![("A", "a2"), ("B", "b1")], false).expect("ok"),
        Example::new(vec![("A", "a2"), ("B", "b2")], true).expect("ok"),
        Example::new(vec![("A", "a3"), ("B", "b2")], false).expect("ok"),
    ];
    let config = LearnerConfig {
        exploration: ExplorationMode::Shuffled,
        seed: Some(11),
    };

    let first = config.build().learn(&examples, Hypothesis::new());
    let second = config.build().learn(&examples, Hypothesis::new());
    assert_eq!(first, second);
    assert!(first.expect("ok").is_learned());
}
