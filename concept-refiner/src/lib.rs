//! Incremental concept learning by current-best-hypothesis search.
//!
//! A `Hypothesis` is a boolean classification rule over attribute
//! values: a conjunction of (possibly negated) equality literals,
//! optionally followed by an alternative hypothesis that decides
//! whenever the conjunction fails.  Given a stream of labeled
//! `Example`s, a `Learner` threads one running hypothesis through the
//! stream, and refines it whenever an example contradicts it:
//! false positives are fixed by specialization (adding literals),
//! false negatives by generalization (dropping literals, or adding an
//! alternative branch).
//!
//! Each refinement step may offer several candidates; the learner
//! tries them depth-first, in the order chosen by its `Exploration`
//! strategy, and backtracks when a candidate cannot be extended to
//! the remaining examples.  The search ends with either a hypothesis
//! consistent with every example (`Outcome::Learned`), or
//! `Outcome::Exhausted` when every choice point ran out of
//! candidates.
//!
//! Malformed input (e.g., an example that lacks an attribute the
//! hypothesis tests) is never confused with exhaustion: it aborts the
//! search with a `LearnError`.
mod config;
mod consistency;
mod error;
mod evaluate;
mod example;
mod exploration;
mod hypothesis;
mod learn;
mod refine;

pub use config::ExplorationMode;
pub use config::LearnerConfig;
pub use consistency::all_consistent;
pub use consistency::negatives_consistent;
pub use error::LearnError;
pub use evaluate::classify;
pub use evaluate::evaluate;
pub use evaluate::false_negative;
pub use evaluate::false_positive;
pub use evaluate::is_consistent;
pub use evaluate::Verdict;
pub use example::Example;
pub use example::Token;
pub use example::GOAL_KEY;
pub use exploration::Exploration;
pub use exploration::InOrder;
pub use exploration::Shuffled;
pub use exploration::Strategy;
pub use hypothesis::Hypothesis;
pub use hypothesis::Literal;
pub use hypothesis::Polarity;
pub use hypothesis::ALTERNATIVE_KEY;
pub use hypothesis::NEGATION_MARKER;
pub use learn::learn;
pub use learn::Learner;
pub use learn::Outcome;
pub use learn::SearchStats;
pub use refine::add_or;
pub use refine::generalize;
pub use refine::specialize;
