//! Regex compiler: lexes a pattern, parses it with a generated LR(1) table,
//! and assembles a Thompson NFA through the reduction actions.
//!
//! The grammar (augmented production 0 added by [`Grammar::new`]):
//!
//! ```text
//! 0: start' → S
//! 1: S → S | D
//! 2: S → S D
//! 3: S → D
//! 4: D → K *
//! 5: D → K
//! 6: K → ( S )
//! 7: K → a
//! ```
//!
//! where `a` is any atomic letter produced by the lexer.

use crate::error::{CompileError, Result};
use crate::grammar::{Grammar, Production};
use crate::graph::{Graph, Machine};
use crate::lr1::{Lr1Parser, SemanticAction, Token};
use crate::symbol::Symbol;
use crate::thompson::{alternate, basis, concat, star};

const S: Symbol = Symbol::Nonterminal("S");
const D: Symbol = Symbol::Nonterminal("D");
const K: Symbol = Symbol::Nonterminal("K");
const LPAREN: Symbol = Symbol::Terminal("(");
const RPAREN: Symbol = Symbol::Terminal(")");
const PIPE: Symbol = Symbol::Terminal("|");
const STAR: Symbol = Symbol::Terminal("*");
const LETTER: Symbol = Symbol::Terminal("a");

/// A value on the LR driver's stack: the letter of a shifted token, or a
/// graph assembled by a reduction.
#[derive(Debug)]
pub enum Value {
    Letter(char),
    Graph(Graph),
}

impl Value {
    fn into_graph(self) -> Graph {
        match self {
            Value::Graph(graph) => graph,
            Value::Letter(_) => unreachable!("nonterminal slot always holds a graph"),
        }
    }

    fn into_letter(self) -> char {
        match self {
            Value::Letter(letter) => letter,
            Value::Graph(_) => unreachable!("letter slot always holds a letter"),
        }
    }
}

fn regex_grammar() -> Grammar {
    Grammar::new(
        S,
        vec![
            Production::new(S, vec![S, PIPE, D]),
            Production::new(S, vec![S, D]),
            Production::new(S, vec![D]),
            Production::new(D, vec![K, STAR]),
            Production::new(D, vec![K]),
            Production::new(K, vec![LPAREN, S, RPAREN]),
            Production::new(K, vec![LETTER]),
        ],
    )
}

/// The attribution table, indexed like the productions.
///
/// Each action pops one slot per body symbol; slots for pure syntactic
/// tokens are dropped unread.
fn regex_actions() -> Vec<SemanticAction<Value>> {
    vec![
        // start' → S (acceptance pops the result directly)
        |mut v| v.pop().unwrap(),
        // S → S | D
        |mut v| {
            let later = v.pop().unwrap().into_graph();
            v.pop();
            let former = v.pop().unwrap().into_graph();
            Value::Graph(alternate(former, later))
        },
        // S → S D
        |mut v| {
            let later = v.pop().unwrap().into_graph();
            let former = v.pop().unwrap().into_graph();
            Value::Graph(concat(former, later))
        },
        // S → D
        |mut v| v.pop().unwrap(),
        // D → K *
        |mut v| {
            v.pop();
            Value::Graph(star(v.pop().unwrap().into_graph()))
        },
        // D → K
        |mut v| v.pop().unwrap(),
        // K → ( S )
        |mut v| {
            v.pop();
            v.pop().unwrap()
        },
        // K → a
        |mut v| Value::Graph(basis(v.pop().unwrap().into_letter())),
    ]
}

/// Lexes a pattern into parser tokens.
///
/// `\` escapes one of `( ) | * $`, turning it into an ordinary letter; any
/// other escape fails. Unescaped metacharacters become their own terminal
/// types, and everything else is a letter.
fn lex(pattern: &str) -> Result<Vec<Token<Value>>> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();

    while let Some(letter) = chars.next() {
        let token = match letter {
            '\\' => match chars.next() {
                Some(escaped @ ('(' | ')' | '|' | '*' | '$')) => {
                    Token::new(LETTER, Value::Letter(escaped))
                }
                Some(other) => return Err(CompileError::Escape(other)),
                None => return Err(CompileError::Escape('\\')),
            },
            '(' => Token::new(LPAREN, Value::Letter('(')),
            ')' => Token::new(RPAREN, Value::Letter(')')),
            '|' => Token::new(PIPE, Value::Letter('|')),
            '*' => Token::new(STAR, Value::Letter('*')),
            other => Token::new(LETTER, Value::Letter(other)),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

/// A reusable regex compiler.
///
/// The LR(1) table for the regex grammar is generated once in [`new`] and
/// drives every subsequent [`compile`] call.
///
/// [`new`]: RegexCompiler::new
/// [`compile`]: RegexCompiler::compile
pub struct RegexCompiler {
    parser: Lr1Parser<Value>,
}

impl RegexCompiler {
    /// Generates the parsing table for the regex grammar.
    pub fn new() -> Result<Self> {
        let parser = Lr1Parser::build(regex_grammar(), regex_actions())?;
        Ok(Self { parser })
    }

    /// Compiles a pattern into an NFA machine with BFS-renumbered states.
    pub fn compile(&self, pattern: &str) -> Result<Machine> {
        let value = self.parser.parse(lex(pattern)?)?;
        let mut graph = value.into_graph();
        graph.rename_by_bfs();
        Ok(Machine::new(graph))
    }
}

/// Compiles a pattern with a freshly generated table.
///
/// Prefer [`RegexCompiler`] when compiling many patterns.
pub fn compile(pattern: &str) -> Result<Machine> {
    RegexCompiler::new()?.compile(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_escapes() {
        assert!(lex(r"\*").is_ok());
        assert!(lex(r"\$").is_ok());
        assert!(matches!(lex(r"\n"), Err(CompileError::Escape('n'))));
        assert!(matches!(lex("\\"), Err(CompileError::Escape('\\'))));
    }

    #[test]
    fn test_lexer_terminal_types() {
        let tokens = lex(r"a(b|c)*").unwrap();
        let terminals: Vec<Symbol> = tokens.iter().map(|t| t.terminal).collect();
        assert_eq!(
            terminals,
            vec![LETTER, LPAREN, LETTER, PIPE, LETTER, RPAREN, STAR]
        );
    }

    #[test]
    fn test_grammar_is_conflict_free() {
        assert!(RegexCompiler::new().is_ok());
    }
}
