//! Grammar representation for the LR(1) parser generator.
//!
//! A grammar is an ordered list of productions over named symbols. The
//! constructor augments the grammar with a fresh start production so that
//! the generator always works on `start' → S`.

use crate::symbol::Symbol;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// The augmented start symbol added by [`Grammar::new`].
pub const AUGMENTED_START: Symbol = Symbol::Nonterminal("start'");

/// A production rule in a context-free grammar.
///
/// Represents a rule of the form: head → body
/// where head is a single nonterminal and body is a sequence of symbols.
/// An empty body is written as the single symbol [`Symbol::Epsilon`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    /// Left-hand side (always a nonterminal)
    pub head: Symbol,
    /// Right-hand side (sequence of symbols)
    pub body: Vec<Symbol>,
}

impl Production {
    /// Creates a new production.
    pub fn new(head: Symbol, body: Vec<Symbol>) -> Self {
        Self { head, body }
    }

    /// Checks whether the body is the ε sentinel.
    pub fn is_epsilon(&self) -> bool {
        self.body.as_slice() == [Symbol::Epsilon]
    }

    /// Returns the body symbols, hiding the ε sentinel.
    ///
    /// Dot positions, pop counts, and closure all operate on this view, so
    /// an ε production behaves as a zero-length body everywhere.
    pub fn symbols(&self) -> &[Symbol] {
        if self.is_epsilon() {
            &[]
        } else {
            &self.body
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} →", self.head)?;
        for sym in &self.body {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

/// A context-free grammar with an augmented start production.
///
/// Production 0 is always `start' → S` where `S` is the declared start
/// symbol; user productions follow in declaration order, so production
/// indices are stable and usable as semantic-action indices.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// All productions; index 0 is the augmented start production.
    productions: Vec<Production>,
    /// All nonterminal symbols, including the augmented start.
    nonterminals: BTreeSet<Symbol>,
    /// All terminal symbols (excluding ε and $).
    terminals: BTreeSet<Symbol>,
    /// The declared start symbol.
    start_symbol: Symbol,
    /// Map from nonterminals to the indices of their productions.
    production_map: HashMap<Symbol, Vec<usize>>,
}

impl Grammar {
    /// Builds a grammar from a start symbol and its productions.
    ///
    /// The augmented production `start' → start` is prepended as
    /// production 0.
    pub fn new(start: Symbol, productions: Vec<Production>) -> Self {
        let mut all = Vec::with_capacity(productions.len() + 1);
        all.push(Production::new(AUGMENTED_START, vec![start]));
        all.extend(productions);

        // Nonterminals are the heads plus any nonterminal in a body;
        // terminals are the remaining body symbols (ε and $ excluded by
        // their variants).
        let mut nonterminals: BTreeSet<Symbol> = all.iter().map(|p| p.head).collect();
        let mut terminals = BTreeSet::new();
        for prod in &all {
            for sym in prod.symbols() {
                if sym.is_nonterminal() {
                    nonterminals.insert(*sym);
                } else if sym.is_terminal() {
                    terminals.insert(*sym);
                }
            }
        }

        let mut production_map: HashMap<Symbol, Vec<usize>> = HashMap::new();
        for (num, prod) in all.iter().enumerate() {
            production_map.entry(prod.head).or_default().push(num);
        }

        Self {
            productions: all,
            nonterminals,
            terminals,
            start_symbol: start,
            production_map,
        }
    }

    /// Returns the production with the given index.
    pub fn production(&self, num: usize) -> &Production {
        &self.productions[num]
    }

    /// Returns all productions, augmented start first.
    pub fn all_productions(&self) -> &[Production] {
        &self.productions
    }

    /// Returns the indices of all productions for a given nonterminal.
    pub fn productions_of(&self, nt: Symbol) -> &[usize] {
        self.production_map
            .get(&nt)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Returns all nonterminals in the grammar.
    pub fn nonterminals(&self) -> &BTreeSet<Symbol> {
        &self.nonterminals
    }

    /// Returns all terminals in the grammar.
    pub fn terminals(&self) -> &BTreeSet<Symbol> {
        &self.terminals
    }

    /// Iterates over the combined symbol alphabet, terminals first.
    ///
    /// The order is total, so the canonical collection gets the same state
    /// labels on every run.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terminals
            .iter()
            .chain(self.nonterminals.iter())
            .copied()
    }

    /// Returns the declared (non-augmented) start symbol.
    pub fn start_symbol(&self) -> Symbol {
        self.start_symbol
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (num, prod) in self.productions.iter().enumerate() {
            writeln!(f, "{}: {}", num, prod)?;
        }
        Ok(())
    }
}
