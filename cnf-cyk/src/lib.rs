//! The CYK algorithm for grammars in Chomsky normal form.
//!
//! Parsing fills a chart with every derivation of every substring of the input.
//! Derivations of the whole input are then extracted as trees, lazily and one
//! at a time.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

mod chart;
mod intern;
mod recognizer;
mod tree;

use std::hash::Hash;

use cnf_grammar::RuleSet;

pub use crate::chart::{Chart, Derivations, Trees};
pub use crate::recognizer::Recognizer;
pub use crate::tree::DerivationTree;

/// Returns every derivation of `input` from `start`.
///
/// Every rule body in `rules` must have one or two symbols. The result is empty iff
/// `input` is not in the language of `start`.
pub fn recognize<S>(rules: &RuleSet<S>, input: &[S], start: &S) -> Derivations<S>
where
    S: Ord + Hash + Clone,
{
    Recognizer::new(rules).parse(input).derivations(start)
}
