//! The toy statement language: an if/else grammar instantiated on the same
//! LR(1) generator as the regex compiler, in recognizer mode.

use crate::error::Result;
use crate::grammar::{Grammar, Production};
use crate::lr1::Lr1Parser;
use crate::symbol::Symbol;
use crate::tokenizer::Tokenizer;

const START: Symbol = Symbol::Nonterminal("start");
const STMT: Symbol = Symbol::Nonterminal("stmt");

/// Grammar of the toy language:
///
/// ```text
/// start → stmt
/// stmt  → if ( C ) S1 else S2
/// ```
pub fn stmt_grammar() -> Grammar {
    Grammar::new(
        START,
        vec![
            Production::new(START, vec![STMT]),
            Production::new(
                STMT,
                vec![
                    Symbol::Terminal("if"),
                    Symbol::Terminal("("),
                    Symbol::Terminal("C"),
                    Symbol::Terminal(")"),
                    Symbol::Terminal("S1"),
                    Symbol::Terminal("else"),
                    Symbol::Terminal("S2"),
                ],
            ),
        ],
    )
}

/// Builds a recognizer for the toy language.
pub fn stmt_parser() -> Result<Lr1Parser<()>> {
    Lr1Parser::recognizer(stmt_grammar())
}

/// Tokenizes and recognizes one source line.
pub fn parse_stmt(source: &str) -> Result<()> {
    let mut tokenizer = Tokenizer::new()?;
    let tokens = tokenizer.tokenize(source)?;
    stmt_parser()?.recognize(tokens)
}
