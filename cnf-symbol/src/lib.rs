//! Symbols of a grammar that is being rewritten into Chomsky normal form.
//!
//! Every rewrite stage introduces symbols of its own. Tagging them apart from the
//! symbols of the source grammar guarantees that a synthetic symbol never collides
//! with an original one, nor with the synthetic symbols of another stage.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod intern;
mod pretty;
mod symbol;

use std::rc::Rc;

pub use self::intern::NameInterner;
pub use self::pretty::Pretty;
pub use self::symbol::Symbol;

/// The identity of a symbol in the source grammar.
pub type Name = Rc<str>;
