//! The search tries sibling candidates in the order chosen by an
//! `Exploration` strategy.  Shuffling diversifies which consistent
//! hypothesis is found first; it never affects whether one is found,
//! since every candidate at a choice point is eventually tried.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub trait Exploration {
    /// Reorders `candidates` in place; the search tries them front to
    /// back.
    fn arrange<T>(&mut self, candidates: &mut [T]);
}

impl<E: Exploration> Exploration for &mut E {
    fn arrange<T>(&mut self, candidates: &mut [T]) {
        (**self).arrange(candidates);
    }
}

/// Keeps candidates in generation order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InOrder;

impl Exploration for InOrder {
    fn arrange<T>(&mut self, _candidates: &mut [T]) {}
}

/// Shuffles candidates uniformly with `rng`.
#[derive(Clone, Debug)]
pub struct Shuffled<R> {
    rng: R,
}

impl<R: Rng> Shuffled<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Shuffled<StdRng> {
    /// Reproducible shuffling: the same seed yields the same search.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Exploration for Shuffled<R> {
    fn arrange<T>(&mut self, candidates: &mut [T]) {
        candidates.shuffle(&mut self.rng);
    }
}

/// The exploration strategies `LearnerConfig` can select.
#[derive(Clone, Debug)]
pub enum Strategy {
    InOrder(InOrder),
    Shuffled(Shuffled<StdRng>),
}

impl Exploration for Strategy {
    fn arrange<T>(&mut self, candidates: &mut [T]) {
        match self {
            Strategy::InOrder(inner) => inner.arrange(candidates),
            Strategy::Shuffled(inner) => inner.arrange(candidates),
        }
    }
}

#[test]
fn test_in_order() {
    let mut items = vec![3, 1, 2];
    InOrder.arrange(&mut items);
    assert_eq!(items, [3, 1, 2]);
}

#[test]
fn test_seeded_reproducible() {
    let mut first: Vec<u32> = (0..32).collect();
    let mut second = first.clone();

    Shuffled::seeded(42).arrange(&mut first);
    Shuffled::seeded(42).arrange(&mut second);
    assert_eq!(first, second);

    // Shuffling permutes, never drops or duplicates.
    first.sort_unstable();
    assert_eq!(first, (0..32).collect::<Vec<_>>());
}

#[test]
fn test_by_reference() {
    fn arrange_twice<E: Exploration>(mut exploration: E, items: &mut [u8]) {
        exploration.arrange(items);
        exploration.arrange(items);
    }

    let mut strategy = Strategy::InOrder(InOrder);
    let mut items = [1, 2, 3];
    arrange_twice(&mut strategy, &mut items);
    assert_eq!(items, [1, 2, 3]);
}
