//! End-to-end tests for the regex compiler and NFA simulation

use lr_frontend::error::CompileError;
use lr_frontend::regex::{compile, RegexCompiler};

#[test]
fn test_single_letter() {
    let mut machine = compile("a").unwrap();
    assert!(machine.matches("a"));
    assert!(!machine.matches(""));
    assert!(!machine.matches("aa"));
    assert!(!machine.matches("b"));
}

#[test]
fn test_star() {
    let mut machine = compile("a*").unwrap();
    assert!(machine.matches(""));
    assert!(machine.matches("a"));
    assert!(machine.matches("aaaa"));
    assert!(!machine.matches("ab"));
}

#[test]
fn test_alternation_under_star() {
    let mut machine = compile("(a|b)*c").unwrap();
    assert!(machine.matches("c"));
    assert!(machine.matches("ac"));
    assert!(machine.matches("bbac"));
    assert!(!machine.matches("ab"));
    assert!(!machine.matches(""));
}

#[test]
fn test_escapes_and_nesting() {
    let mut machine = compile(r"ab\**c*d(e|f)ka*z").unwrap();
    assert!(machine.matches("ab***cccdekz"));
    assert!(machine.matches("abdekz"));
    assert!(machine.matches("abcdfkaaz"));
    assert!(!machine.matches("abdegz"));
}

#[test]
fn test_escaped_metacharacters_are_literal() {
    let mut machine = compile(r"\(a\)").unwrap();
    assert!(machine.matches("(a)"));
    assert!(!machine.matches("a"));

    let mut machine = compile(r"\|").unwrap();
    assert!(machine.matches("|"));

    let mut machine = compile(r"\$").unwrap();
    assert!(machine.matches("$"));
}

#[test]
fn test_invalid_escape() {
    assert!(matches!(compile(r"a\nb"), Err(CompileError::Escape('n'))));
    assert!(matches!(compile("a\\"), Err(CompileError::Escape('\\'))));
}

#[test]
fn test_malformed_patterns_are_parse_errors() {
    for pattern in ["", "*a", "a|", "|a", "(a", "a)", "()"] {
        assert!(
            matches!(compile(pattern), Err(CompileError::Parse { .. })),
            "pattern {:?} should fail to parse",
            pattern
        );
    }
}

#[test]
fn test_letters_are_exact() {
    let mut machine = compile("a").unwrap();
    assert!(!machine.matches("A"));

    let mut machine = compile("é").unwrap();
    assert!(machine.matches("é"));
    assert!(!machine.matches("e"));
}

#[test]
fn test_machine_is_reusable() {
    let mut machine = compile("(a|b)*").unwrap();
    assert!(machine.matches("abba"));
    assert!(!machine.matches("abca"));
    assert!(machine.matches(""));
    assert!(machine.matches("bbbb"));
}

#[test]
fn test_cloned_machines_step_independently() {
    let machine = compile("ab").unwrap();
    let mut stepped = machine.clone();
    stepped.step('a');
    assert_ne!(stepped.current(), machine.current());

    let mut other = machine.clone();
    assert!(other.matches("ab"));
}

#[test]
fn test_bfs_renaming_is_a_bijection() {
    let machine = compile("(a|b)*c").unwrap();
    let graph = machine.graph();

    let mut names: Vec<u32> = graph.states().iter().map(|&s| graph.name_of(s)).collect();
    names.sort_unstable();
    let expected: Vec<u32> = (1..=names.len() as u32).collect();
    assert_eq!(names, expected);
    assert_eq!(graph.name_of(graph.start()), 1);
}

#[test]
fn test_compiler_is_reusable_across_patterns() {
    let compiler = RegexCompiler::new().unwrap();
    let mut first = compiler.compile("a*b").unwrap();
    let mut second = compiler.compile("(if)|(else)").unwrap();

    assert!(first.matches("aaab"));
    assert!(!first.matches("b a"));
    assert!(second.matches("if"));
    assert!(second.matches("else"));
    assert!(!second.matches("ifelse"));
}
