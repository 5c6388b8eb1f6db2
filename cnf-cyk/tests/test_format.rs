use cnf_cyk::{recognize, DerivationTree};
use cnf_grammar::RuleSet;
use cnf_symbol::Pretty;

fn p(text: &str) -> Pretty {
    Pretty::text(text)
}

fn leaf(symbol: &str, terminal: &str) -> DerivationTree<Pretty> {
    DerivationTree::Leaf {
        symbol: p(symbol),
        terminal: p(terminal),
    }
}

fn binary(
    symbol: Pretty,
    left: DerivationTree<Pretty>,
    right: DerivationTree<Pretty>,
) -> DerivationTree<Pretty> {
    DerivationTree::Binary {
        symbol,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[test]
fn test_format_leaf() {
    assert_eq!(leaf("A", "a").format(), "(A, (a,))");
}

#[test]
fn test_format_binary() {
    let tree = binary(p("S"), leaf("A", "a"), leaf("B", "b"));
    assert_eq!(tree.format(), "(S, (A, (a,)),\n    (B, (b,)))");
    assert_eq!(tree.to_string(), tree.format());
}

#[test]
fn test_format_tuple_symbol() {
    let s_tb = Pretty::Tuple(vec![p("S"), p("Tb")].into());
    let tree = binary(s_tb, leaf("Ta", "a"), leaf("Tb", "b"));
    assert_eq!(
        tree.format(),
        "((S, Tb), (Ta, (a,)),\n          (Tb, (b,)))"
    );
}

#[test]
fn test_format_nested() {
    let right_nested = binary(
        p("S"),
        leaf("S", "a"),
        binary(p("S"), leaf("S", "a"), leaf("S", "a")),
    );
    let left_nested = binary(
        p("S"),
        binary(p("S"), leaf("S", "a"), leaf("S", "a")),
        leaf("S", "a"),
    );
    assert_eq!(
        right_nested.format(),
        "(S, (S, (a,)),\n    (S, (S, (a,)),\n        (S, (a,))))"
    );
    assert_eq!(
        left_nested.format(),
        "(S, (S, (a,)),\n        (S, (a,))),\n    (S, (a,)))"
    );

    let mut rules: RuleSet<Pretty> = RuleSet::new();
    rules.rule("S").rhs(["S", "S"]).rhs(["a"]);
    let mut parsed: Vec<_> = recognize(&rules, &Pretty::chars("aaa"), &p("S")).collect();
    parsed.sort();
    let mut expected = vec![right_nested, left_nested];
    expected.sort();
    assert_eq!(parsed, expected);
}
