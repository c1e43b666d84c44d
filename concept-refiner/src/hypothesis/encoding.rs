//! String-valued hypotheses round-trip through the flat mapping
//! encoding, e.g., `{"A": "a1", "B": "!b2", "|": {"C": "c1"}}`: bare
//! tokens are `Equal` literals, tokens prefixed with `!` are
//! `NotEqual` literals, and the `|` key holds the alternative.
use super::{Hypothesis, Literal, Polarity, ALTERNATIVE_KEY, NEGATION_MARKER};
use crate::LearnError;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Token(String),
    Nested(BTreeMap<String, RawEntry>),
}

fn encode_token(literal: &Literal<String>) -> String {
    match literal.polarity() {
        Polarity::Equal => literal.value().clone(),
        Polarity::NotEqual => format!("{}{}", NEGATION_MARKER, literal.value()),
    }
}

fn decode_literal(attribute: &str, token: String) -> Result<Literal<String>, LearnError> {
    match token.strip_prefix(NEGATION_MARKER) {
        Some("") => Err(LearnError::EmptyToken {
            attribute: attribute.into(),
        }),
        Some(rest) => Literal::not_equal(attribute, rest.to_owned()),
        None => Literal::equal(attribute, token),
    }
}

fn decode_hypothesis(raw: BTreeMap<String, RawEntry>) -> Result<Hypothesis<String>, LearnError> {
    let mut literals = Vec::with_capacity(raw.len());
    let mut alternative = None;

    for (key, entry) in raw {
        match (key == ALTERNATIVE_KEY, entry) {
            (true, RawEntry::Nested(nested)) => alternative = Some(decode_hypothesis(nested)?),
            (true, RawEntry::Token(_)) => {
                return Err(LearnError::MalformedEncoding(
                    "`|` must map to a nested hypothesis".into(),
                ))
            }
            (false, RawEntry::Token(token)) => literals.push(decode_literal(&key, token)?),
            (false, RawEntry::Nested(_)) => {
                return Err(LearnError::MalformedEncoding(format!(
                    "attribute `{}` must map to a token",
                    key
                )))
            }
        }
    }

    // Map keys are unique, so `from_literals` cannot see duplicates.
    let conjunction = Hypothesis::from_literals(literals)?;
    Ok(match alternative {
        Some(alternative) => conjunction.or(alternative),
        None => conjunction,
    })
}

impl Serialize for Hypothesis<String> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.len() + usize::from(self.alternative.is_some());
        let mut map = serializer.serialize_map(Some(entries))?;

        for literal in self.literals() {
            map.serialize_entry(literal.attribute(), &encode_token(literal))?;
        }

        if let Some(alternative) = self.alternative() {
            map.serialize_entry(ALTERNATIVE_KEY, alternative)?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for Hypothesis<String> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, RawEntry>::deserialize(deserializer)?;
        decode_hypothesis(raw).map_err(D::Error::custom)
    }
}

#[test]
fn test_decode_literal() {
    assert_eq!(
        decode_literal("A", "a1".into()),
        Literal::equal("A", "a1".to_owned())
    );
    assert_eq!(
        decode_literal("A", "!a1".into()),
        Literal::not_equal("A", "a1".to_owned())
    );
    // Only the first marker is stripped.
    assert_eq!(
        decode_literal("A", "!!a1".into()),
        Literal::not_equal("A", "!a1".to_owned())
    );
    assert_eq!(
        decode_literal("A", "!".into()),
        Err(LearnError::EmptyToken {
            attribute: "A".into()
        })
    );
    assert!(decode_literal("GOAL", "x".into()).is_err());
}

#[test]
fn test_decode_nested() {
    let mut inner = BTreeMap::new();
    inner.insert("B".to_owned(), RawEntry::Token("!b1".into()));
    let mut outer = BTreeMap::new();
    outer.insert("A".to_owned(), RawEntry::Token("a1".into()));
    outer.insert("|".to_owned(), RawEntry::Nested(inner));

    let h = decode_hypothesis(outer).expect("ok");
    assert_eq!(h.to_string(), "A = a1 ∨ (B ≠ b1)");
    assert_eq!(
        h.alternative().and_then(|alt| alt.literal("B")),
        Some(&Literal::not_equal("B", "b1".to_owned()).expect("ok"))
    );
}

#[test]
fn test_decode_misplaced() {
    let mut bad_alternative = BTreeMap::new();
    bad_alternative.insert("|".to_owned(), RawEntry::Token("a1".into()));
    assert!(matches!(
        decode_hypothesis(bad_alternative),
        Err(LearnError::MalformedEncoding(_))
    ));

    let mut bad_attribute = BTreeMap::new();
    bad_attribute.insert("A".to_owned(), RawEntry::Nested(BTreeMap::new()));
    assert!(matches!(
        decode_hypothesis(bad_attribute),
        Err(LearnError::MalformedEncoding(_))
    ));
}
