//! Unit tests for FIRST and FOLLOW set computation

use lr_frontend::first_follow::*;
use lr_frontend::grammar::{Grammar, Production};
use lr_frontend::symbol::Symbol;

const S: Symbol = Symbol::Nonterminal("S");
const A: Symbol = Symbol::Nonterminal("A");
const B: Symbol = Symbol::Nonterminal("B");
const T: Symbol = Symbol::Nonterminal("T");
const LIT_A: Symbol = Symbol::Terminal("a");
const LIT_B: Symbol = Symbol::Terminal("b");
const PLUS: Symbol = Symbol::Terminal("+");
const ID: Symbol = Symbol::Terminal("i");

/// S → A B ; A → a | ε ; B → b
fn nullable_grammar() -> Grammar {
    Grammar::new(
        S,
        vec![
            Production::new(S, vec![A, B]),
            Production::new(A, vec![LIT_A]),
            Production::new(A, vec![Symbol::Epsilon]),
            Production::new(B, vec![LIT_B]),
        ],
    )
}

/// S → S + T | T ; T → i
fn left_recursive_grammar() -> Grammar {
    Grammar::new(
        S,
        vec![
            Production::new(S, vec![S, PLUS, T]),
            Production::new(S, vec![T]),
            Production::new(T, vec![ID]),
        ],
    )
}

#[test]
fn test_first_of_terminal() {
    let grammar = nullable_grammar();
    let first_sets = compute_first_sets(&grammar);

    let first_a = first_sets.get(&LIT_A).unwrap();
    assert_eq!(first_a.len(), 1);
    assert!(first_a.contains(&LIT_A));
}

#[test]
fn test_first_with_epsilon() {
    let grammar = nullable_grammar();
    let first_sets = compute_first_sets(&grammar);

    let first_a = first_sets.get(&A).unwrap();
    assert!(first_a.contains(&LIT_A));
    assert!(first_a.contains(&Symbol::Epsilon));
}

#[test]
fn test_first_skips_nullable_prefix() {
    let grammar = nullable_grammar();
    let first_sets = compute_first_sets(&grammar);

    // A is nullable, so FIRST(S) sees through it to FIRST(B).
    let first_s = first_sets.get(&S).unwrap();
    assert!(first_s.contains(&LIT_A));
    assert!(first_s.contains(&LIT_B));
    assert!(!first_s.contains(&Symbol::Epsilon));
}

#[test]
fn test_first_terminates_on_left_recursion() {
    let grammar = left_recursive_grammar();
    let first_sets = compute_first_sets(&grammar);

    let first_s = first_sets.get(&S).unwrap();
    assert_eq!(first_s.len(), 1);
    assert!(first_s.contains(&ID));
}

#[test]
fn test_first_of_empty_string_is_epsilon() {
    let grammar = nullable_grammar();
    let first_sets = compute_first_sets(&grammar);

    let first = first_of_string(&first_sets, &[]);
    assert_eq!(first.len(), 1);
    assert!(first.contains(&Symbol::Epsilon));
}

#[test]
fn test_first_of_string_with_lookahead_suffix() {
    let grammar = nullable_grammar();
    let first_sets = compute_first_sets(&grammar);

    // The closure rule concatenates β with the lookahead: for a nullable β
    // the lookahead must show through.
    let first = first_of_string(&first_sets, &[A, Symbol::EndMarker]);
    assert!(first.contains(&LIT_A));
    assert!(first.contains(&Symbol::EndMarker));
    assert!(!first.contains(&Symbol::Epsilon));
}

#[test]
fn test_follow_of_start_contains_end_marker() {
    let grammar = nullable_grammar();
    let first_sets = compute_first_sets(&grammar);
    let follow_sets = compute_follow_sets(&grammar, &first_sets);

    assert!(follow_sets.get(&S).unwrap().contains(&Symbol::EndMarker));
}

#[test]
fn test_follow_propagation() {
    let grammar = nullable_grammar();
    let first_sets = compute_first_sets(&grammar);
    let follow_sets = compute_follow_sets(&grammar, &first_sets);

    // FOLLOW(A) comes from FIRST(B); FOLLOW(B) from FOLLOW(S).
    assert!(follow_sets.get(&A).unwrap().contains(&LIT_B));
    assert!(follow_sets.get(&B).unwrap().contains(&Symbol::EndMarker));
}

#[test]
fn test_follow_on_left_recursive_grammar() {
    let grammar = left_recursive_grammar();
    let first_sets = compute_first_sets(&grammar);
    let follow_sets = compute_follow_sets(&grammar, &first_sets);

    let follow_s = follow_sets.get(&S).unwrap();
    assert!(follow_s.contains(&PLUS));
    assert!(follow_s.contains(&Symbol::EndMarker));

    let follow_t = follow_sets.get(&T).unwrap();
    assert!(follow_t.contains(&PLUS));
    assert!(follow_t.contains(&Symbol::EndMarker));
}
