#![allow(dead_code)]

use std::collections::BTreeSet;

use cnf::{Name, Pretty, RuleSet, RuleSetLoadExt};

pub fn grammar(text: &str) -> RuleSet<Name> {
    match RuleSet::load(text) {
        Ok(rules) => rules,
        Err(error) => panic!("{}", error),
    }
}

pub fn symbols(text: &str) -> Vec<Name> {
    text.chars().map(|ch| Name::from(ch.to_string())).collect()
}

pub fn pretty_rules(text: &str) -> RuleSet<Pretty> {
    grammar(text).map_symbols(|name| Pretty::Text(name.clone()))
}

pub fn assert_eq_rules<S>(left: &RuleSet<S>, right: &RuleSet<S>)
where
    S: Ord + Clone + std::fmt::Display,
{
    if left != right {
        eprintln!("Left:\n{}", left);
        eprintln!("Right:\n{}", right);
        panic!("Rules expected to be equal");
    }
}

/// Decides membership by computing, for every symbol and every substring, whether the
/// symbol derives it, until nothing changes.
pub fn brute_force_member(rules: &RuleSet<Name>, start: &str, input: &[Name]) -> bool {
    let n = input.len();
    let mut derives: BTreeSet<(Name, usize, usize)> = BTreeSet::new();
    loop {
        let mut changed = false;
        for rule in rules.rules() {
            for i in 0..=n {
                for j in i..=n {
                    let key = (rule.lhs.clone(), i, j);
                    if !derives.contains(&key)
                        && sequence_derives(rules, &derives, rule.rhs, input, i, j)
                    {
                        derives.insert(key);
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }
    derives.contains(&(Name::from(start), 0, n))
}

fn sequence_derives(
    rules: &RuleSet<Name>,
    derives: &BTreeSet<(Name, usize, usize)>,
    rhs: &[Name],
    input: &[Name],
    i: usize,
    j: usize,
) -> bool {
    match rhs.split_first() {
        None => i == j,
        Some((first, rest)) => (i..=j).any(|k| {
            let first_derives = if rules.contains_lhs(first) {
                derives.contains(&(first.clone(), i, k))
            } else {
                k == i + 1 && input[i] == *first
            };
            first_derives && sequence_derives(rules, derives, rest, input, k, j)
        }),
    }
}

/// Counts the derivations of `input` from `sym`. The grammar must have no empty
/// bodies and no unit rules.
pub fn count_derivations(rules: &RuleSet<Name>, sym: &Name, input: &[Name]) -> usize {
    match rules.rhs_of(sym) {
        Some(bodies) => bodies
            .iter()
            .map(|rhs| count_sequence(rules, rhs, input))
            .sum(),
        None => usize::from(input.len() == 1 && input[0] == *sym),
    }
}

fn count_sequence(rules: &RuleSet<Name>, rhs: &[Name], input: &[Name]) -> usize {
    match rhs.split_first() {
        None => usize::from(input.is_empty()),
        Some((first, rest)) => (1..=input.len().saturating_sub(rest.len()))
            .map(|k| {
                count_derivations(rules, first, &input[..k])
                    * count_sequence(rules, rest, &input[k..])
            })
            .sum(),
    }
}
