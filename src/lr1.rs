//! Canonical LR(1) parser generator and shift/reduce driver.
//!
//! The generator builds the canonical collection of LR(1) item sets for a
//! grammar, emits an ACTION/GOTO table, and drives it with a stack machine.
//! Reductions invoke a per-production semantic action over a value stack,
//! which is how the regex front-end assembles NFA graphs during parsing.

use crate::error::{CompileError, Result};
use crate::first_follow::{compute_first_sets, first_of_string, FirstSets};
use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// An LR(1) item: a production with a dot position and one lookahead.
///
/// Items reference their production by index, so equality and hashing are
/// over the (production, dot, lookahead) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Item {
    production: usize,
    dot: usize,
    lookahead: Symbol,
}

impl Item {
    fn new(production: usize, dot: usize, lookahead: Symbol) -> Self {
        Self {
            production,
            dot,
            lookahead,
        }
    }

    /// Returns the symbol after the dot, if any.
    fn symbol_after_dot(&self, grammar: &Grammar) -> Option<Symbol> {
        grammar
            .production(self.production)
            .symbols()
            .get(self.dot)
            .copied()
    }

    /// Checks if the dot is at the end (reduce item).
    fn is_complete(&self, grammar: &Grammar) -> bool {
        self.dot >= grammar.production(self.production).symbols().len()
    }
}

/// A state in the LR(1) automaton (set of items).
type ItemSet = HashSet<Item>;

/// A parser action in the ACTION/GOTO table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Consume the token and push the target state.
    Shift(usize),
    /// Contract the stack by the given production.
    Reduce(usize),
    /// Push the target state after a reduction (nonterminal columns).
    Goto(usize),
    /// The input is a sentence of the grammar.
    Accept,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift(k) => write!(f, "shift {}", k),
            Action::Reduce(p) => write!(f, "reduce {}", p),
            Action::Goto(k) => write!(f, "goto {}", k),
            Action::Accept => write!(f, "accept"),
        }
    }
}

/// A token fed to the LR driver: a terminal type plus a semantic value.
#[derive(Debug, Clone)]
pub struct Token<V> {
    pub terminal: Symbol,
    pub value: V,
}

impl<V> Token<V> {
    pub fn new(terminal: Symbol, value: V) -> Self {
        Self { terminal, value }
    }
}

/// A semantic action for one production.
///
/// Receives the value-stack slots popped for the production body, in body
/// order, and returns the value for the head. Pure syntactic slots are
/// present in the argument vector and may simply be dropped.
pub type SemanticAction<V> = fn(Vec<V>) -> V;

/// A canonical LR(1) parser for a grammar, with semantic actions.
///
/// Building the parser runs the whole generator: FIRST sets, the canonical
/// collection, and table emission. The table is immutable afterwards, and
/// `parse` borrows the parser shared, so one parser can serve any number of
/// token streams.
#[derive(Debug)]
pub struct Lr1Parser<V> {
    grammar: Grammar,
    /// ACTION/GOTO table: (state, symbol) → action; empty cells are errors.
    table: HashMap<(usize, Symbol), Action>,
    state_count: usize,
    /// Semantic actions, indexed like the productions.
    actions: Vec<SemanticAction<V>>,
}

impl<V> Lr1Parser<V> {
    /// Builds the parser for a grammar.
    ///
    /// `actions` must have one entry per production, augmented start
    /// included (index 0 is only a placeholder; acceptance pops the final
    /// value directly).
    pub fn build(grammar: Grammar, actions: Vec<SemanticAction<V>>) -> Result<Self> {
        assert_eq!(
            actions.len(),
            grammar.all_productions().len(),
            "one semantic action per production"
        );

        let first_sets = compute_first_sets(&grammar);
        let (states, transitions) = Self::build_collection(&grammar, &first_sets);
        let table = Self::build_table(&grammar, &states, &transitions)?;

        Ok(Self {
            grammar,
            table,
            state_count: states.len(),
            actions,
        })
    }

    /// Computes the closure of a seed item set.
    ///
    /// For each item [A → α•Bβ, a] and production B → γ, adds [B → •γ, b]
    /// for every terminal b in FIRST(βa). The suffix and the lookahead are
    /// concatenated into one sequence before FIRST, which is what makes the
    /// propagation correct when β is nullable.
    fn closure(grammar: &Grammar, first_sets: &FirstSets, seed: ItemSet) -> ItemSet {
        let mut items = ItemSet::new();
        let mut pending: VecDeque<Item> = VecDeque::new();

        for item in seed {
            items.insert(item);
            pending.push_back(item);
        }

        while let Some(item) = pending.pop_front() {
            let Some(symbol) = item.symbol_after_dot(grammar) else {
                continue;
            };
            if !symbol.is_nonterminal() {
                continue;
            }

            let body = grammar.production(item.production).symbols();
            let mut suffix: Vec<Symbol> = body[item.dot + 1..].to_vec();
            suffix.push(item.lookahead);
            let lookaheads = first_of_string(first_sets, &suffix);

            for &production in grammar.productions_of(symbol) {
                for &lookahead in &lookaheads {
                    if lookahead.is_epsilon() {
                        continue;
                    }
                    let new_item = Item::new(production, 0, lookahead);
                    if items.insert(new_item) {
                        pending.push_back(new_item);
                    }
                }
            }
        }

        items
    }

    /// Computes GOTO(I, X): the closure of all dot-advanced successors on X.
    fn goto_set(
        grammar: &Grammar,
        first_sets: &FirstSets,
        items: &ItemSet,
        symbol: Symbol,
    ) -> ItemSet {
        let mut moved = ItemSet::new();

        for item in items {
            if item.symbol_after_dot(grammar) == Some(symbol) {
                moved.insert(Item::new(item.production, item.dot + 1, item.lookahead));
            }
        }

        if moved.is_empty() {
            return moved;
        }
        Self::closure(grammar, first_sets, moved)
    }

    /// Builds the canonical collection of LR(1) item sets.
    ///
    /// Returns the labeled states and, per state, the GOTO map over the
    /// symbol alphabet. Lookup is by item-set value equality through
    /// `position`, whose `Option` result keeps "absent" distinct from
    /// "present at label 0", so back-edges into the initial state are
    /// recorded like any other transition.
    fn build_collection(
        grammar: &Grammar,
        first_sets: &FirstSets,
    ) -> (Vec<ItemSet>, Vec<HashMap<Symbol, usize>>) {
        let start_item = Item::new(0, 0, Symbol::EndMarker);
        let initial = Self::closure(grammar, first_sets, HashSet::from([start_item]));

        let mut states = vec![initial];
        let mut transitions: Vec<HashMap<Symbol, usize>> = vec![HashMap::new()];
        let mut worklist: VecDeque<usize> = VecDeque::new();
        worklist.push_back(0);

        while let Some(state_id) = worklist.pop_front() {
            let state = states[state_id].clone();

            for symbol in grammar.symbols() {
                let next = Self::goto_set(grammar, first_sets, &state, symbol);
                if next.is_empty() {
                    continue;
                }

                let target = match states.iter().position(|s| *s == next) {
                    Some(existing) => existing,
                    None => {
                        let new_id = states.len();
                        states.push(next);
                        transitions.push(HashMap::new());
                        worklist.push_back(new_id);
                        new_id
                    }
                };
                transitions[state_id].insert(symbol, target);
            }
        }

        (states, transitions)
    }

    /// Emits the ACTION/GOTO table from the collection.
    fn build_table(
        grammar: &Grammar,
        states: &[ItemSet],
        transitions: &[HashMap<Symbol, usize>],
    ) -> Result<HashMap<(usize, Symbol), Action>> {
        let mut table = HashMap::new();

        for (state_id, state) in states.iter().enumerate() {
            for (&symbol, &target) in &transitions[state_id] {
                let action = if symbol.is_nonterminal() {
                    Action::Goto(target)
                } else {
                    Action::Shift(target)
                };
                Self::set_cell(&mut table, state_id, symbol, action)?;
            }

            for item in state {
                if !item.is_complete(grammar) {
                    continue;
                }
                if item.production == 0 {
                    // [start' → S •, $]
                    Self::set_cell(&mut table, state_id, Symbol::EndMarker, Action::Accept)?;
                } else {
                    Self::set_cell(
                        &mut table,
                        state_id,
                        item.lookahead,
                        Action::Reduce(item.production),
                    )?;
                }
            }
        }

        Ok(table)
    }

    /// Writes one table cell, failing on a conflicting assignment.
    fn set_cell(
        table: &mut HashMap<(usize, Symbol), Action>,
        state: usize,
        symbol: Symbol,
        action: Action,
    ) -> Result<()> {
        match table.get(&(state, symbol)) {
            Some(existing) if *existing != action => Err(CompileError::Conflict {
                state,
                symbol: symbol.to_string(),
                existing: existing.to_string(),
                proposed: action.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                table.insert((state, symbol), action);
                Ok(())
            }
        }
    }

    /// Returns the table cell for a state and symbol, if any.
    pub fn action(&self, state: usize, symbol: Symbol) -> Option<Action> {
        self.table.get(&(state, symbol)).copied()
    }

    /// Number of states in the canonical collection.
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Returns the grammar the parser was built from.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Parses a token stream, returning the final semantic value.
    ///
    /// A synthetic `$` token is injected after the stream is exhausted. The
    /// value of every shifted token is pushed on the value stack; each
    /// reduction pops one slot per body symbol and pushes the action's
    /// result, so acceptance leaves exactly the start symbol's value on top.
    pub fn parse<I>(&self, tokens: I) -> Result<V>
    where
        I: IntoIterator<Item = Token<V>>,
    {
        let mut states: Vec<usize> = vec![0];
        let mut values: Vec<V> = Vec::new();

        for token in tokens {
            self.advance(&mut states, &mut values, token.terminal, Some(token.value))?;
        }

        if self.advance(&mut states, &mut values, Symbol::EndMarker, None)? {
            if let Some(result) = values.pop() {
                return Ok(result);
            }
        }
        Err(CompileError::Parse {
            token: Symbol::EndMarker.to_string(),
            state: *states.last().unwrap(),
        })
    }

    /// Runs the driver for one incoming terminal.
    ///
    /// Loops over reductions without consuming the terminal, then either
    /// shifts it (returning `false`) or accepts (returning `true`).
    fn advance(
        &self,
        states: &mut Vec<usize>,
        values: &mut Vec<V>,
        terminal: Symbol,
        mut value: Option<V>,
    ) -> Result<bool> {
        loop {
            let state = *states.last().unwrap();

            match self.table.get(&(state, terminal)) {
                Some(Action::Shift(next)) => {
                    states.push(*next);
                    if let Some(v) = value.take() {
                        values.push(v);
                    }
                    return Ok(false);
                }
                Some(Action::Accept) => return Ok(true),
                Some(Action::Reduce(number)) => {
                    let number = *number;
                    let production = self.grammar.production(number);
                    let arity = production.symbols().len();

                    states.truncate(states.len() - arity);
                    let exposed = *states.last().unwrap();

                    match self.table.get(&(exposed, production.head)) {
                        Some(Action::Goto(next)) => states.push(*next),
                        _ => {
                            return Err(CompileError::Parse {
                                token: terminal.to_string(),
                                state: exposed,
                            });
                        }
                    }

                    let args = values.split_off(values.len() - arity);
                    values.push((self.actions[number])(args));
                    // reduce does not consume the terminal; go again
                }
                Some(Action::Goto(_)) | None => {
                    return Err(CompileError::Parse {
                        token: terminal.to_string(),
                        state,
                    });
                }
            }
        }
    }
}

fn discard(_: Vec<()>) {}

impl Lr1Parser<()> {
    /// Builds a pure recognizer: every semantic action returns unit.
    pub fn recognizer(grammar: Grammar) -> Result<Self> {
        let count = grammar.all_productions().len();
        Self::build(grammar, vec![discard as SemanticAction<()>; count])
    }

    /// Recognizes a token stream without producing a value.
    pub fn recognize<I>(&self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = Token<()>>,
    {
        self.parse(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Production;

    const S: Symbol = Symbol::Nonterminal("S");
    const A: Symbol = Symbol::Terminal("a");
    const B: Symbol = Symbol::Terminal("b");

    fn token(t: Symbol) -> Token<()> {
        Token::new(t, ())
    }

    // S → S a | b : left recursion with a back-edge-heavy collection.
    fn left_recursive() -> Grammar {
        Grammar::new(
            S,
            vec![
                Production::new(S, vec![S, A]),
                Production::new(S, vec![B]),
            ],
        )
    }

    #[test]
    fn test_left_recursive_grammar_builds() {
        let parser = Lr1Parser::recognizer(left_recursive()).unwrap();
        assert!(parser.state_count() > 0);
    }

    #[test]
    fn test_left_recursive_parse() {
        let parser = Lr1Parser::recognizer(left_recursive()).unwrap();
        assert!(parser.recognize(vec![token(B)]).is_ok());
        assert!(parser.recognize(vec![token(B), token(A), token(A)]).is_ok());
        assert!(parser.recognize(vec![token(A)]).is_err());
        assert!(parser.recognize(vec![]).is_err());
    }

    #[test]
    fn test_goto_targets_are_labeled() {
        let parser = Lr1Parser::recognizer(left_recursive()).unwrap();
        let count = parser.state_count();
        for state in 0..count {
            for symbol in [S, A, B, Symbol::EndMarker] {
                match parser.action(state, symbol) {
                    Some(Action::Shift(k)) | Some(Action::Goto(k)) => assert!(k < count),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_ambiguous_grammar_conflicts() {
        // S → S S | a is ambiguous: shift/reduce on 'a'.
        let grammar = Grammar::new(
            S,
            vec![
                Production::new(S, vec![S, S]),
                Production::new(S, vec![A]),
            ],
        );
        let result = Lr1Parser::recognizer(grammar);
        assert!(matches!(result, Err(CompileError::Conflict { .. })));
    }

    #[test]
    fn test_semantic_values_flow() {
        // S → S a | b counts its tokens.
        let grammar = left_recursive();
        let actions: Vec<SemanticAction<usize>> = vec![
            |mut v| v.pop().unwrap(),
            |v| v.into_iter().sum::<usize>(),
            |v| v.into_iter().sum::<usize>(),
        ];
        let parser = Lr1Parser::build(grammar, actions).unwrap();
        let tokens = vec![
            Token::new(B, 1),
            Token::new(A, 1),
            Token::new(A, 1),
        ];
        assert_eq!(parser.parse(tokens).unwrap(), 3);
    }
}
