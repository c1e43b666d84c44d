//! Errors report malformed input.  Running out of candidate
//! hypotheses is not an error: see `Outcome::Exhausted`.
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LearnError {
    /// The hypothesis tests an attribute that the example lacks.
    #[error("attribute `{attribute}` is tested by the hypothesis but missing from the example")]
    MissingAttribute { attribute: String },

    /// `GOAL` and `|` may not name attributes.
    #[error("`{name}` is reserved and cannot name an attribute")]
    ReservedAttribute { name: String },

    /// The same attribute appears twice in one conjunction.
    #[error("attribute `{attribute}` appears more than once in a conjunction")]
    DuplicateAttribute { attribute: String },

    /// A negated literal must still carry a value after the `!`.
    #[error("negated literal for `{attribute}` has no value")]
    EmptyToken { attribute: String },

    /// The mapping encoding of a hypothesis has the wrong shape.
    #[error("malformed hypothesis encoding: {0}")]
    MalformedEncoding(String),
}

#[test]
fn test_messages() {
    let err = LearnError::MissingAttribute {
        attribute: "colour".into(),
    };
    assert_eq!(
        err.to_string(),
        "attribute `colour` is tested by the hypothesis but missing from the example"
    );

    let err = LearnError::ReservedAttribute { name: "|".into() };
    assert_eq!(err.to_string(), "`|` is reserved and cannot name an attribute");
}
