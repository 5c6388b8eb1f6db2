//! Rewrites an arbitrary context-free grammar into Chomsky normal form.
//!
//! The rewrite is a fixed pipeline of seven stages. Each stage reads one rule set
//! and builds a new one:
//!
//! 1. [`rename`] tags every symbol as original.
//! 2. [`introduce_start`] adds a unique start symbol.
//! 3. [`enforce_terminal_bodies`] moves terminals behind their own rules.
//! 4. [`binarize`] splits bodies longer than two symbols.
//! 5. [`eliminate_nullable`] removes empty bodies.
//! 6. [`eliminate_unit`] removes bodies that consist of a single nonterminal.
//! 7. [`prettify`] renders tagged symbols for display.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

mod binarize;
mod check;
mod nullable;
mod prettify;
mod rename;
mod start;
mod term;
mod unit;

use log::debug;

use cnf_grammar::RuleSet;
use cnf_symbol::{Name, Pretty, Symbol};

pub use crate::binarize::binarize;
pub use crate::check::{check_cnf, CnfViolation};
pub use crate::nullable::{drop_or_keep, eliminate_nullable, nullable_symbols};
pub use crate::prettify::prettify;
pub use crate::rename::rename;
pub use crate::start::introduce_start;
pub use crate::term::enforce_terminal_bodies;
pub use crate::unit::eliminate_unit;

/// Rewrites `rules` into Chomsky normal form. The language derived from `start` is
/// preserved, except for the empty string.
///
/// The result derives that language from [`start_symbol`]. Names of `rules` must pass
/// [`RuleSet::check_names`]; a name rendering like a synthetic symbol would be merged
/// with it.
pub fn normalize(rules: &RuleSet<Name>, start: &str) -> RuleSet<Pretty> {
    let renamed = rename(rules);
    log_stage("rename", &renamed);
    let started = introduce_start(&renamed, start);
    log_stage("start", &started);
    let term = enforce_terminal_bodies(&started);
    log_stage("term", &term);
    let bin = binarize(&term);
    log_stage("bin", &bin);
    let del = eliminate_nullable(&bin);
    log_stage("del", &del);
    let unit = eliminate_unit(&del);
    log_stage("unit", &unit);
    debug_assert!(check_cnf(&unit).is_ok(), "not in Chomsky normal form");
    prettify(&unit)
}

/// Returns the rendered start symbol of every normalized grammar.
pub fn start_symbol() -> Pretty {
    Symbol::Start.to_pretty()
}

/// Allows normalization to be called as a method.
pub trait CnfNormalizeExt {
    /// Rewrites the grammar into Chomsky normal form.
    ///
    /// See [`normalize`].
    fn to_cnf(&self, start: &str) -> RuleSet<Pretty>;
}

impl CnfNormalizeExt for RuleSet<Name> {
    fn to_cnf(&self, start: &str) -> RuleSet<Pretty> {
        normalize(self, start)
    }
}

fn log_stage(stage: &str, rules: &RuleSet<Symbol>) {
    debug!(
        "{}: {} rules for {} symbols",
        stage,
        rules.num_rules(),
        rules.len()
    );
}
