//! References to single rules of a rule set.

use std::fmt;

/// References a rule's components.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RuleRef<'a, S> {
    /// Left-hand side.
    pub lhs: &'a S,
    /// Right-hand side.
    pub rhs: &'a [S],
}

impl<'a, S> Clone for RuleRef<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S> Copy for RuleRef<'a, S> {}

impl<'a, S> RuleRef<'a, S> {
    /// Checks whether the right-hand side is empty.
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Copies the rule out of the rule set.
    pub fn to_owned(&self) -> (S, Vec<S>)
    where
        S: Clone,
    {
        (self.lhs.clone(), self.rhs.to_vec())
    }
}

impl<'a, S: fmt::Display> fmt::Display for RuleRef<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        if self.rhs.is_empty() {
            return f.write_str(" ε");
        }
        for sym in self.rhs {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}
