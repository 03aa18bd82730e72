//! Tokenizer for the toy statement language.
//!
//! The classifiers are themselves compiled regex machines, which makes this
//! module the first consumer of the regex compiler: spaces and delimiters
//! split the stream, and each word is classified by matching it against the
//! keyword and node machines.

use crate::error::{CompileError, Result};
use crate::graph::Machine;
use crate::lr1::Token;
use crate::regex::RegexCompiler;
use crate::symbol::Symbol;

/// The terminal vocabulary of the toy language.
const VOCABULARY: &[&str] = &["if", "else", "(", ")", "C", "S1", "S2"];

/// Splits source text into classified tokens.
pub struct Tokenizer {
    space: Machine,
    delimiter: Machine,
    keyword: Machine,
    node: Machine,
}

impl Tokenizer {
    /// Compiles the classifier machines.
    pub fn new() -> Result<Self> {
        let compiler = RegexCompiler::new()?;
        Ok(Self {
            space: compiler.compile(" ")?,
            delimiter: compiler.compile(r"\(|\)")?,
            keyword: compiler.compile("(if)|(else)")?,
            node: compiler.compile("(S1)|(S2)|C")?,
        })
    }

    /// Tokenizes one source line.
    ///
    /// Spaces end the current word; delimiters end it and are tokens of
    /// their own.
    pub fn tokenize(&mut self, source: &str) -> Result<Vec<Token<()>>> {
        let mut tokens = Vec::new();
        let mut word = String::new();

        for letter in source.chars() {
            let single = letter.to_string();
            if self.space.matches(&single) {
                if !word.is_empty() {
                    tokens.push(self.classify(&word)?);
                    word.clear();
                }
            } else if self.delimiter.matches(&single) {
                if !word.is_empty() {
                    tokens.push(self.classify(&word)?);
                    word.clear();
                }
                tokens.push(self.classify(&single)?);
            } else {
                word.push(letter);
            }
        }
        if !word.is_empty() {
            tokens.push(self.classify(&word)?);
        }

        Ok(tokens)
    }

    fn classify(&mut self, word: &str) -> Result<Token<()>> {
        let recognized = self.delimiter.matches(word)
            || self.keyword.matches(word)
            || self.node.matches(word);

        if recognized {
            if let Some(name) = VOCABULARY.iter().copied().find(|&n| n == word) {
                return Ok(Token::new(Symbol::Terminal(name), ()));
            }
        }
        Err(CompileError::UnexpectedSymbol(word.to_string()))
    }
}
