use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use log::{debug, trace};

use cnf_grammar::RuleSet;

use crate::chart::{Chart, Span};
use crate::intern::SymbolInterner;

/// A grammar prepared for parsing. Rules are partitioned into unit rules
/// `A -> a`, looked up by terminal, and binary rules `A -> B C`.
#[derive(Clone, Debug)]
pub struct Recognizer<S> {
    symbols: Rc<SymbolInterner<S>>,
    unit_rules: HashMap<S, Vec<usize>>,
    binary_rules: Vec<BinaryRule>,
}

#[derive(Clone, Copy, Debug)]
struct BinaryRule {
    lhs: usize,
    left: usize,
    right: usize,
}

impl<S> Recognizer<S>
where
    S: Ord + Hash + Clone,
{
    /// Partitions the rules of a grammar in Chomsky normal form.
    ///
    /// Rules with empty bodies or bodies longer than two symbols are ignored.
    pub fn new(rules: &RuleSet<S>) -> Self {
        let mut symbols = SymbolInterner::new();
        let mut unit_rules: HashMap<S, Vec<usize>> = HashMap::new();
        let mut binary_rules = vec![];
        for rule in rules.rules() {
            let lhs = symbols.intern(rule.lhs);
            match rule.rhs {
                [terminal] => unit_rules.entry(terminal.clone()).or_default().push(lhs),
                [left, right] => binary_rules.push(BinaryRule {
                    lhs,
                    left: symbols.intern(left),
                    right: symbols.intern(right),
                }),
                rhs => trace!("ignoring a body of {} symbols", rhs.len()),
            }
        }
        debug!(
            "{} unit rules, {} binary rules over {} symbols",
            unit_rules.values().map(Vec::len).sum::<usize>(),
            binary_rules.len(),
            symbols.len()
        );
        Recognizer {
            symbols: Rc::new(symbols),
            unit_rules,
            binary_rules,
        }
    }

    /// Fills a chart with all derivations of every substring of `input`.
    pub fn parse(&self, input: &[S]) -> Chart<S> {
        let n = input.len();
        let mut chart = Chart::new(self.symbols.clone(), input.to_vec());
        for (position, terminal) in input.iter().enumerate() {
            if let Some(lhs_ids) = self.unit_rules.get(terminal) {
                for &lhs in lhs_ids {
                    chart.push_leaf(lhs, position);
                }
            }
        }
        for len in 2..=n {
            for start in 0..=n - len {
                let span = Span { start, len };
                let mut fresh = vec![];
                for split in 1..len {
                    let (left_span, right_span) = span.split(split);
                    for rule in &self.binary_rules {
                        if !chart.is_occupied(left_span, rule.left)
                            || !chart.is_occupied(right_span, rule.right)
                        {
                            continue;
                        }
                        // Every pairing is a distinct derivation.
                        for &left in chart.cell(left_span, rule.left) {
                            for &right in chart.cell(right_span, rule.right) {
                                fresh.push((rule.lhs, left, right));
                            }
                        }
                    }
                }
                if !fresh.is_empty() {
                    trace!("{} derivations for span {:?}", fresh.len(), span);
                }
                for (lhs, left, right) in fresh {
                    chart.push_binary(span, lhs, left, right);
                }
            }
        }
        debug!(
            "chart for input of length {} has {} nodes",
            n,
            chart.num_nodes()
        );
        chart
    }
}
