use std::error::Error;
use std::fmt;

use cnf_grammar::RuleSet;

/// A rule that breaks Chomsky normal form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CnfViolation<S> {
    /// `A -> ε`.
    EmptyBody {
        /// The rule's left-hand side.
        lhs: S,
    },
    /// `A -> B` where `B` is a left-hand side.
    UnitBody {
        /// The rule's left-hand side.
        lhs: S,
        /// The nonterminal on the right-hand side.
        rhs: S,
    },
    /// `A -> B c` where `c` is not a left-hand side.
    TerminalInPair {
        /// The rule's left-hand side.
        lhs: S,
        /// The terminal.
        terminal: S,
    },
    /// A body of more than two symbols.
    LongBody {
        /// The rule's left-hand side.
        lhs: S,
        /// The number of symbols on the right-hand side.
        len: usize,
    },
}

impl<S: fmt::Display> fmt::Display for CnfViolation<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CnfViolation::EmptyBody { lhs } => write!(f, "empty body for {}", lhs),
            CnfViolation::UnitBody { lhs, rhs } => write!(f, "unit body {} -> {}", lhs, rhs),
            CnfViolation::TerminalInPair { lhs, terminal } => {
                write!(f, "terminal {} paired in a body of {}", terminal, lhs)
            }
            CnfViolation::LongBody { lhs, len } => {
                write!(f, "body of {} symbols for {}", len, lhs)
            }
        }
    }
}

impl<S: fmt::Debug + fmt::Display> Error for CnfViolation<S> {}

/// Checks that every body is either a single terminal or a pair of nonterminals.
pub fn check_cnf<S>(rules: &RuleSet<S>) -> Result<(), CnfViolation<S>>
where
    S: Ord + Clone,
{
    for rule in rules.rules() {
        let lhs = rule.lhs.clone();
        match rule.rhs {
            [] => return Err(CnfViolation::EmptyBody { lhs }),
            [sym] if rules.contains_lhs(sym) => {
                return Err(CnfViolation::UnitBody {
                    lhs,
                    rhs: sym.clone(),
                })
            }
            [_] => {}
            [left, right] => {
                if let Some(terminal) = [left, right]
                    .into_iter()
                    .find(|sym| !rules.contains_lhs(sym))
                {
                    return Err(CnfViolation::TerminalInPair {
                        lhs,
                        terminal: terminal.clone(),
                    });
                }
            }
            rhs => return Err(CnfViolation::LongBody { lhs, len: rhs.len() }),
        }
    }
    Ok(())
}
