mod support;

use cnf::{
    parse, read_symbols, start_symbol, CnfNormalizeExt, DerivationTree, Pretty, RuleSet,
    RuleSetLoadExt,
};
use support::*;
use test_case::test_case;

#[test_case("aabb", 1)]
#[test_case("ab", 1)]
#[test_case("aab", 0)]
#[test_case("ba", 0)]
#[test_case("abab", 0)]
fn test_balanced(input: &str, expected: usize) {
    let rules = grammar("S -> aSb | ε");
    assert_eq!(parse(&rules, "S", &symbols(input)).len(), expected);
}

#[test_case("aab", true)]
#[test_case("abb", true)]
#[test_case("ab", true)]
#[test_case("aaabbb", true)]
#[test_case("ba", false)]
#[test_case("a", false)]
#[test_case("aba", false)]
fn test_a_plus_b_plus(input: &str, accepted: bool) {
    let rules = grammar("S -> AB\nA -> a | aA\nB -> b | bB");
    assert_eq!(parse(&rules, "S", &symbols(input)).len() > 0, accepted);
}

#[test]
fn test_ambiguity() {
    let rules = grammar("S -> SS | a");
    let trees: Vec<_> = parse(&rules, "S", &symbols("aaa")).collect();
    assert_eq!(trees.len(), 2);
    assert_ne!(trees[0], trees[1]);
    for tree in &trees {
        assert_eq!(tree.symbol(), &start_symbol());
        assert_eq!(tree.leaves().len(), 3);
    }
}

#[test]
fn test_nullable_tail() {
    let rules = grammar("S -> aA\nA -> ε");
    let trees: Vec<_> = parse(&rules, "S", &symbols("a")).collect();
    assert_eq!(
        trees,
        vec![DerivationTree::Leaf {
            symbol: start_symbol(),
            terminal: Pretty::text("a"),
        }]
    );
}

#[test]
fn test_unknown_start_recognizes_nothing() {
    let rules = grammar("S -> a");
    assert_eq!(parse(&rules, "X", &symbols("a")).len(), 0);
    assert!(!rules.to_cnf("X").contains_lhs(&start_symbol()));
}

#[test]
fn test_empty_input_is_rejected() {
    let rules = grammar("S -> aS | ε");
    assert_eq!(parse(&rules, "S", &[]).len(), 0);
    assert_eq!(parse(&rules, "S", &symbols("aa")).len(), 1);
}

#[test]
fn test_unseen_terminal_is_rejected() {
    let rules = grammar("S -> aS | a");
    assert_eq!(parse(&rules, "S", &symbols("ab")).len(), 0);
}

#[test]
fn test_multi_character_symbols() {
    let rules = grammar("<expr> -> <expr> + <num> | <num>\n<num> -> 1 | 2");
    let input = read_symbols("1 + 2 + 1").unwrap();
    assert_eq!(parse(&rules, "expr", &input).len(), 1);
}

#[test]
fn test_formatted_tree() {
    let rules = grammar("S -> aSb | ε");
    let tree = parse(&rules, "S", &symbols("aabb")).next().unwrap();
    let expected = "\
(start, (Ta, (a,)),
        ((S, Tb), (S, (Ta, (a,)),
                      ((S, Tb), (b,))),
                  (Tb, (b,))))";
    assert_eq!(tree.format(), expected);
}

#[test]
fn test_normalized_grammar() {
    let rules = grammar("S -> aSb | ε");
    let cnf = rules.to_cnf("S");
    let s_tb = Pretty::Tuple(vec![Pretty::text("S"), Pretty::text("Tb")].into());
    let mut expected: RuleSet<Pretty> = RuleSet::new();
    expected
        .rule("start")
        .rhs([Pretty::text("Ta"), s_tb.clone()])
        .rule("S")
        .rhs([Pretty::text("Ta"), s_tb.clone()])
        .rule(s_tb)
        .rhs(["S", "Tb"])
        .rhs(["b"])
        .rule("Ta")
        .rhs(["a"])
        .rule("Tb")
        .rhs(["b"]);
    assert_eq_rules(&cnf, &expected);
}

#[test]
fn test_names_rendering_like_synthetic_symbols_are_rejected() {
    for text in ["S -> a\n<start> -> b", "S -> <Ta> a\n<Ta> -> b"] {
        let error = RuleSet::<cnf::Name>::load(text).unwrap_err();
        assert!(error.reason.starts_with("reserved name"), "{}", error);
    }
}
