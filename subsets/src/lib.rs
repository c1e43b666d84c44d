//! Exhaustive enumeration of every subset of a small, finite
//! collection.
//!
//! Subsets come out in a fixed order: the empty subset first, then
//! all singletons, then all pairs, and so on up to the full
//! collection.  Within one size, subsets follow the lexicographic
//! order of the positions of their members in the input, the same
//! order in which one would write combinations down by hand.  Callers
//! that want another order (e.g., shuffled) must rearrange the
//! result themselves: a deterministic enumeration is much easier to
//! test against.
//!
//! The number of subsets doubles with each item, so this is only
//! meant for the handful of keys of a single rule or record.
use std::convert::TryFrom;

/// Returns all subsets of `items`, from the empty subset up to the
/// full collection.
///
/// Items are never deduplicated: passing the same value twice yields
/// subsets that mention it twice.
#[must_use]
pub fn powerset<T, I>(items: I) -> Vec<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    Subsets::new(items).collect()
}

/// A `Subsets` iterator lazily walks the powerset of the items it was
/// constructed with.
#[derive(Clone, Debug)]
pub struct Subsets<T> {
    items: Vec<T>,
    // Positions (in `items`) of the members of the next subset to
    // yield, in strictly increasing order.
    indices: Vec<usize>,
    exhausted: bool,
    // `None` when the count does not fit in a usize.
    remaining: Option<usize>,
}

impl<T: Clone> Subsets<T> {
    #[must_use]
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let remaining = u32::try_from(items.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n));

        Self {
            items,
            indices: Vec::new(),
            exhausted: false,
            remaining,
        }
    }

    /// Moves `indices` to the next combination of the same size, or
    /// to the first combination of the next size once the current
    /// size is done.
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();

        let mut pos = k;
        while pos > 0 {
            pos -= 1;
            // Position `pos` may hold at most `n - k + pos`, leaving
            // room for the indices to its right.
            if self.indices[pos] < n - k + pos {
                self.indices[pos] += 1;
                for next in pos + 1..k {
                    self.indices[next] = self.indices[next - 1] + 1;
                }

                return;
            }
        }

        if k == n {
            self.exhausted = true;
        } else {
            self.indices = (0..=k).collect();
        }
    }
}

impl<T: Clone> Iterator for Subsets<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.exhausted {
            return None;
        }

        let subset = self
            .indices
            .iter()
            .map(|&index| self.items[index].clone())
            .collect();

        self.advance();
        self.remaining = self.remaining.map(|count| count - 1);
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(count) => (count, Some(count)),
            None => (usize::MAX, None),
        }
    }
}

#[test]
fn test_empty() {
    // The empty collection still has one subset: itself.
    let subsets = powerset(Vec::<u8>::new());
    assert_eq!(subsets, vec![Vec::<u8>::new()]);
}

#[test]
fn test_order() {
    let subsets = powerset(vec!["a", "b", "c"]);

    assert_eq!(
        subsets,
        vec![
            vec![],
            vec!["a"],
            vec!["b"],
            vec!["c"],
            vec!["a", "b"],
            vec!["a", "c"],
            vec!["b", "c"],
            vec!["a", "b", "c"],
        ]
    );
}

#[test]
fn test_count() {
    for n in 0..10u32 {
        let subsets = powerset(0..n);
        assert_eq!(subsets.len(), 1 << n);

        // Every subset is distinct.
        let unique: std::collections::BTreeSet<_> = subsets.into_iter().collect();
        assert_eq!(unique.len(), 1 << n);
    }
}

#[test]
fn test_size_hint() {
    let mut subsets = Subsets::new(vec![1, 2, 3]);
    assert_eq!(subsets.size_hint(), (8, Some(8)));

    subsets.next();
    subsets.next();
    assert_eq!(subsets.size_hint(), (6, Some(6)));

    assert_eq!(subsets.by_ref().count(), 6);
    assert_eq!(subsets.size_hint(), (0, Some(0)));
    assert_eq!(subsets.next(), None);
}

#[test]
fn test_duplicates_kept() {
    // Not a set: both copies of `x` are enumerated independently.
    let subsets = powerset(vec!["x", "x"]);
    assert_eq!(subsets, vec![vec![], vec!["x"], vec!["x"], vec!["x", "x"]]);
}
