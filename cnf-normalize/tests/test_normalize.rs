use cnf_grammar::{Name, RuleSet};
use cnf_normalize::{check_cnf, normalize, start_symbol, CnfNormalizeExt};
use cnf_symbol::Pretty;
use test_case::test_case;

/// Loads a grammar written as `S -> aSb | ` with one character per symbol.
fn grammar(text: &str) -> RuleSet<Name> {
    let mut rules = RuleSet::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let (lhs, alternatives) = line.split_once("->").unwrap();
        let lhs: Name = lhs.trim().into();
        for alternative in alternatives.split('|') {
            let rhs = alternative
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| Name::from(ch.to_string()));
            rules.add_rule(lhs.clone(), rhs);
        }
    }
    rules
}

fn p(text: &str) -> Pretty {
    Pretty::text(text)
}

#[test]
fn test_normalize_balanced() {
    let cnf = normalize(&grammar("S -> aSb |"), "S");

    let s_tb = Pretty::Tuple(vec![p("S"), p("Tb")].into());
    let mut expected: RuleSet<Pretty> = RuleSet::new();
    expected
        .rule("start")
        .rhs([p("Ta"), s_tb.clone()])
        .rule("S")
        .rhs([p("Ta"), s_tb.clone()])
        .rule(s_tb)
        .rhs(["S", "Tb"])
        .rhs(["b"])
        .rule("Ta")
        .rhs(["a"])
        .rule("Tb")
        .rhs(["b"]);
    assert_eq!(cnf, expected);
}

#[test]
fn test_normalize_nullable_suffix() {
    let cnf = grammar("S -> aA\nA ->").to_cnf("S");

    assert!(cnf.contains_rule(&start_symbol(), &[p("a")]));
    assert!(!cnf.contains_lhs(&p("A")));
    assert_eq!(check_cnf(&cnf), Ok(()));
}

#[test]
fn test_normalize_unknown_start() {
    let cnf = normalize(&grammar("A -> a"), "S");

    assert!(!cnf.contains_lhs(&start_symbol()));
    assert!(!cnf.contains_lhs(&p("S")));
    assert!(cnf.contains_rule(&p("A"), &[p("a")]));
}

#[test]
fn test_normalize_only_empty_string() {
    let cnf = normalize(&grammar("S ->"), "S");

    assert!(cnf.is_empty());
}

#[test]
fn test_start_on_right_hand_side() {
    let cnf = normalize(&grammar("S -> SS | a"), "S");

    assert!(cnf.contains_rule(&start_symbol(), &[p("S"), p("S")]));
    assert!(cnf.contains_rule(&start_symbol(), &[p("a")]));
    assert!(cnf.contains_rule(&p("S"), &[p("S"), p("S")]));
}

#[test_case("S -> aSb |" ; "balanced")]
#[test_case("S -> AB\nA -> a | aA\nB -> b | bB" ; "concatenation")]
#[test_case("S -> SS | a" ; "ambiguous")]
#[test_case("S -> aA\nA ->" ; "nullable suffix")]
#[test_case("S -> ABC | a\nA -> B |\nB -> C | b\nC -> A | c" ; "unit cycle")]
#[test_case("S -> abcdefg | S#S" ; "long body")]
#[test_case("S -> A\nA -> B\nB -> S | x" ; "unit chain")]
#[test_case("E -> E+T | T\nT -> T*F | F\nF -> (E) | a" ; "arithmetic")]
#[test_case("S -> AAAA\nA -> a |" ; "nullable long body")]
fn test_cnf_shape(text: &str) {
    let cnf = normalize(&grammar(text), text.get(..1).unwrap_or("S"));

    assert_eq!(check_cnf(&cnf), Ok(()));
    assert!(cnf.rules().all(|rule| !rule.is_epsilon()));
}

#[test]
fn test_normalize_is_deterministic() {
    let rules = grammar("E -> E+T | T\nT -> T*F | F\nF -> (E) | a");

    assert_eq!(normalize(&rules, "E"), normalize(&rules, "E"));
    assert_eq!(
        normalize(&rules, "E").to_string(),
        normalize(&rules, "E").to_string()
    );
}
