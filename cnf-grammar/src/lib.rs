//! Rule sets of context-free grammars. A rule set maps each left-hand side to the set
//! of its right-hand sides, so neither left-hand sides nor alternatives repeat.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod production;
pub mod rule_builder;
pub mod rule_ref;
pub mod rule_set;

pub use crate::production::{parse_productions, GrammarError, Production};
pub use crate::rule_builder::RuleBuilder;
pub use crate::rule_ref::RuleRef;
pub use crate::rule_set::{Rhs, RuleSet};
pub use cnf_symbol::{Name, Pretty, Symbol};
