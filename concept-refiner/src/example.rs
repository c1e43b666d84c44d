//! Examples are labeled records: a value for each attribute, and the
//! true classification under the reserved `GOAL` key.
use crate::hypothesis::ALTERNATIVE_KEY;
use crate::LearnError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt::Debug;
use std::hash::Hash;

/// Reserved key for the label of an example.  It never names an
/// attribute, in examples or in hypotheses.
pub const GOAL_KEY: &str = "GOAL";

/// A `Token` is an opaque attribute value; we only ever compare
/// tokens for equality (ordering and hashing make them easy to
/// store).
pub trait Token
where
    Self: Clone + Debug + Eq + Hash + Ord,
{
}

impl<T> Token for T where T: Clone + Debug + Eq + Hash + Ord {}

/// Returns `Err` if `name` is one of the reserved keys.
pub(crate) fn check_attribute_name(name: &str) -> Result<(), LearnError> {
    if name == GOAL_KEY || name == ALTERNATIVE_KEY {
        return Err(LearnError::ReservedAttribute { name: name.into() });
    }

    Ok(())
}

/// An `Example` maps attribute names to values, and carries its
/// label.  Examples are immutable once built.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExample<V>", into = "RawExample<V>")]
#[serde(bound(
    serialize = "V: Clone + Serialize",
    deserialize = "V: Token + Deserialize<'de>"
))]
pub struct Example<V> {
    attributes: BTreeMap<String, V>,
    goal: bool,
}

impl<V: Token> Example<V> {
    /// Builds an example labeled `goal` from `(attribute, value)`
    /// pairs.  Later pairs override earlier ones with the same name.
    ///
    /// # Errors
    ///
    /// Returns `Err` when an attribute is named `GOAL` or `|`.
    pub fn new<I, K>(attributes: I, goal: bool) -> Result<Self, LearnError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (name, value) in attributes {
            let name = name.into();
            check_attribute_name(&name)?;
            map.insert(name, value);
        }

        Ok(Self {
            attributes: map,
            goal,
        })
    }

    /// The true classification of this example.
    #[must_use]
    pub fn goal(&self) -> bool {
        self.goal
    }

    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, V> {
        &self.attributes
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&V> {
        self.attributes.get(attribute)
    }

    /// Returns the value of `attribute`.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the example has no such attribute.
    pub fn value(&self, attribute: &str) -> Result<&V, LearnError> {
        self.get(attribute)
            .ok_or_else(|| LearnError::MissingAttribute {
                attribute: attribute.into(),
            })
    }
}

/// The mapping encoding: attributes and `GOAL` share one flat
/// object, e.g., `{"A": "a1", "GOAL": true}`.
#[derive(Serialize, Deserialize)]
struct RawExample<V> {
    #[serde(rename = "GOAL")]
    goal: bool,
    #[serde(flatten)]
    attributes: BTreeMap<String, V>,
}

impl<V: Token> TryFrom<RawExample<V>> for Example<V> {
    type Error = LearnError;

    fn try_from(raw: RawExample<V>) -> Result<Self, LearnError> {
        Self::new(raw.attributes, raw.goal)
    }
}

impl<V> From<Example<V>> for RawExample<V> {
    fn from(example: Example<V>) -> Self {
        Self {
            goal: example.goal,
            attributes: example.attributes,
        }
    }
}

#[test]
fn test_accessors() {
    let example = Example::new(vec![("A", "a1"), ("B", "b2")], true).expect("ok");

    assert!(example.goal());
    assert_eq!(example.get("A"), Some(&"a1"));
    assert_eq!(example.get("C"), None);
    assert_eq!(example.value("B"), Ok(&"b2"));
    assert_eq!(
        example.value("C"),
        Err(LearnError::MissingAttribute {
            attribute: "C".into()
        })
    );
}

#[test]
fn test_reserved_names() {
    assert_eq!(
        Example::new(vec![("GOAL", "x")], false),
        Err(LearnError::ReservedAttribute {
            name: "GOAL".into()
        })
    );
    assert_eq!(
        Example::new(vec![("|", "x")], false),
        Err(LearnError::ReservedAttribute { name: "|".into() })
    );
}
