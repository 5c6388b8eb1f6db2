//! Grammar rules can be built with the builder pattern.

use crate::rule_set::RuleSet;

/// The rule builder.
pub struct RuleBuilder<'a, S> {
    lhs: Option<S>,
    rules: &'a mut RuleSet<S>,
}

impl<'a, S> RuleBuilder<'a, S>
where
    S: Ord + Clone,
{
    /// Creates a rule builder.
    pub fn new(rules: &'a mut RuleSet<S>) -> Self {
        RuleBuilder { lhs: None, rules }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: impl Into<S>) -> Self {
        let lhs = lhs.into();
        self.rules.declare(lhs.clone());
        self.lhs = Some(lhs);
        self
    }

    /// Adds a rule alternative to the grammar.
    ///
    /// # Panics
    ///
    /// Panics when called before [`fn rule`](Self::rule).
    pub fn rhs<I>(self, syms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        let lhs = self.lhs.clone().expect("rhs() called before rule()");
        self.rules.add_rule(lhs, syms.into_iter().map(Into::into));
        self
    }

    /// Adds the empty alternative.
    pub fn epsilon(self) -> Self {
        self.rhs(std::iter::empty::<S>())
    }
}
