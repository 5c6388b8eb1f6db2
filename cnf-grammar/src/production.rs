//! Construction of rule sets from decoded production records.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

use log::debug;

use crate::rule_set::RuleSet;
use cnf_symbol::{Name, Pretty};

/// A production record as decoded from a stored grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Production<S = Name> {
    /// The left side. Must hold exactly one symbol.
    pub left: Vec<S>,
    /// The right side, or `None` for the empty sequence.
    pub right: Option<Vec<S>>,
}

impl<S> Production<S> {
    /// Creates a production with a right side.
    pub fn new(left: Vec<S>, right: Vec<S>) -> Self {
        Production {
            left,
            right: Some(right),
        }
    }

    /// Creates a production of the empty sequence.
    pub fn epsilon(left: Vec<S>) -> Self {
        Production { left, right: None }
    }
}

/// Represents an error in the rules handed to the grammar model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// A production's left side is not exactly one symbol.
    MalformedProduction {
        /// Position of the production in its sequence. Zero-indexed.
        index: usize,
        /// Number of symbols found on the left side.
        left_len: usize,
    },
    /// A name renders the same as a symbol introduced by normalization.
    ReservedName {
        /// The offending name.
        name: Name,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::MalformedProduction { index, left_len } => write!(
                f,
                "malformed production #{}: left side must be exactly one symbol, found {}",
                index, left_len
            ),
            GrammarError::ReservedName { name } => write!(
                f,
                "reserved name `{}`: it renders like a symbol introduced by normalization",
                name
            ),
        }
    }
}

impl Error for GrammarError {}

/// Builds a rule set from production records.
///
/// Duplicate right sides collapse. An absent right side contributes the empty
/// sequence.
pub fn parse_productions<S, I>(body: I) -> Result<RuleSet<S>, GrammarError>
where
    S: Ord + Clone,
    I: IntoIterator<Item = Production<S>>,
{
    let mut rules = RuleSet::new();
    let mut count = 0;
    for (index, production) in body.into_iter().enumerate() {
        let Production { left, right } = production;
        let lhs = match <[S; 1]>::try_from(left) {
            Ok([lhs]) => lhs,
            Err(left) => {
                return Err(GrammarError::MalformedProduction {
                    index,
                    left_len: left.len(),
                })
            }
        };
        rules.add_rule(lhs, right.unwrap_or_default());
        count += 1;
    }
    debug!(
        "parsed {} productions into {} rules for {} symbols",
        count,
        rules.num_rules(),
        rules.len()
    );
    Ok(rules)
}

impl<S> RuleSet<S>
where
    S: Ord + Clone,
{
    /// Builds a rule set from production records.
    ///
    /// See [`parse_productions`].
    pub fn from_productions<I>(body: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = Production<S>>,
    {
        parse_productions(body)
    }
}

impl RuleSet<Name> {
    /// Checks that no name renders like a symbol introduced by normalization.
    ///
    /// Reserved are [`Pretty::START`] and [`Pretty::TERMINAL_PREFIX`] followed by
    /// the name of a terminal. Normalizing a grammar with such a name would merge
    /// two distinct symbols.
    pub fn check_names(&self) -> Result<(), GrammarError> {
        let terminals: BTreeSet<&str> = self.terminals().into_iter().map(|t| &t[..]).collect();
        let is_reserved = |name: &Name| {
            &name[..] == Pretty::START
                || name
                    .strip_prefix(Pretty::TERMINAL_PREFIX)
                    .map_or(false, |rest| terminals.contains(rest))
        };
        match self
            .lhs_symbols()
            .chain(self.body_symbols())
            .find(|name| is_reserved(name))
        {
            Some(name) => Err(GrammarError::ReservedName { name: name.clone() }),
            None => Ok(()),
        }
    }
}
