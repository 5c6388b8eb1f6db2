//! Allows us to load context-free grammars from text written the way JFLAP's
//! grammar editor shows them.
//!
//! ```text
//! # balanced strings
//! S -> aSb | ε
//! A -> <expr> + a |
//! ```
//!
//! Every character other than whitespace is one symbol, and `<name>` is one
//! multi-character symbol. An empty alternative, `ε` or `λ` stands for the empty
//! body. Lines starting with `#` are comments.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod reader;

use std::fmt;

use cnf_grammar::{GrammarError, Name, RuleSet};

use crate::reader::Reader;

/// Represents an error when loading a grammar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoadError {
    /// Human-readable reason for the error.
    pub reason: String,
    /// Line where the error happened.
    ///
    /// One-indexed.
    pub line: u32,
    /// Column where the error happened.
    ///
    /// One-indexed.
    pub col: u32,
}

impl LoadError {
    pub(crate) fn new(reason: impl Into<String>, line: u32, col: u32) -> Self {
        LoadError {
            reason: reason.into(),
            line,
            col,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Parse error at line {} column {}: reason: {}",
            self.line, self.col, self.reason
        )
    }
}

impl std::error::Error for LoadError {}

/// Loading of rule sets from text.
pub trait RuleSetLoadExt: Sized {
    /// Loads a grammar. Equal names share one allocation.
    ///
    /// Names that would render like a symbol introduced by normalization, such as
    /// `<start>`, are rejected.
    fn load(text: &str) -> Result<Self, LoadError>;
}

impl RuleSetLoadExt for RuleSet<Name> {
    fn load(text: &str) -> Result<Self, LoadError> {
        let mut reader = Reader::new();
        let located = reader.productions(text)?;
        let positions: Vec<(u32, u32)> = located.iter().map(|p| (p.line, p.col)).collect();
        let locate = |error: GrammarError| {
            let (line, col) = match &error {
                GrammarError::MalformedProduction { index, .. } => positions[*index],
                GrammarError::ReservedName { name } => reader.position(name).unwrap_or((1, 1)),
            };
            LoadError::new(error.to_string(), line, col)
        };
        let rules = RuleSet::from_productions(located.into_iter().map(|p| p.production))
            .map_err(&locate)?;
        rules.check_names().map_err(locate)?;
        Ok(rules)
    }
}

/// Splits an input string into symbols, the same way grammar bodies are split.
pub fn read_symbols(text: &str) -> Result<Vec<Name>, LoadError> {
    Reader::new().symbols(text, 1, 1)
}
