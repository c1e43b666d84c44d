//! Refinement operators map a hypothesis that contradicts the latest
//! example to candidate replacements.  Every operator only returns
//! candidates that already pass the relevant consistency check
//! against all the examples seen so far (the latest included), and
//! each candidate is a fresh copy: the input hypothesis is never
//! modified.  Different examples often suggest the same refinement;
//! each distinct candidate is returned once.
//!
//! Operators recurse into the alternative branch, so that a nested
//! disjunct may be refined without touching the conjunctions above
//! it.
mod generalize;
mod specialize;

pub use generalize::add_or;
pub use generalize::generalize;
pub use specialize::specialize;

