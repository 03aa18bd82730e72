//! FIRST and FOLLOW sets.
//!
//! The LR(1) closure needs FIRST over arbitrary sentential fragments
//! (a production suffix with a lookahead appended), so FIRST is computed
//! for whole symbols up front and [`first_of_string`] handles fragments.
//! Both computations settle iteratively, so left-recursive and mutually
//! recursive grammars terminate.

use crate::grammar::Grammar;
use crate::symbol::Symbol;
use std::collections::{HashMap, HashSet, VecDeque};

/// Type alias for FIRST sets mapping.
pub type FirstSets = HashMap<Symbol, HashSet<Symbol>>;

/// Type alias for FOLLOW sets mapping.
pub type FollowSets = HashMap<Symbol, HashSet<Symbol>>;

/// Computes FIRST for every symbol of the grammar.
///
/// Nonterminals start empty and are re-examined through a dirty queue: when
/// FIRST(X) grows, every head whose body mentions X goes back on the queue.
/// Recursion in the grammar therefore shows up as requeueing, never as a
/// recursive call.
pub fn compute_first_sets(grammar: &Grammar) -> FirstSets {
    let mut first_sets: FirstSets = HashMap::new();

    first_sets.insert(Symbol::Epsilon, HashSet::from([Symbol::Epsilon]));
    first_sets.insert(Symbol::EndMarker, HashSet::from([Symbol::EndMarker]));
    for terminal in grammar.terminals() {
        first_sets.insert(*terminal, HashSet::from([*terminal]));
    }
    for nonterminal in grammar.nonterminals() {
        first_sets.entry(*nonterminal).or_default();
    }

    // Heads to revisit when a nonterminal's FIRST grows. Terminal FIRSTs
    // are fixed, so only nonterminal mentions matter.
    let mut dependents: HashMap<Symbol, Vec<Symbol>> = HashMap::new();
    for production in grammar.all_productions() {
        for symbol in production.symbols() {
            if symbol.is_nonterminal() {
                dependents.entry(*symbol).or_default().push(production.head);
            }
        }
    }

    let mut dirty: VecDeque<Symbol> = grammar.nonterminals().iter().copied().collect();
    while let Some(head) = dirty.pop_front() {
        let mut grew = false;
        for &num in grammar.productions_of(head) {
            let derived = first_of_string(&first_sets, grammar.production(num).symbols());
            let set = first_sets.get_mut(&head).unwrap();
            for symbol in derived {
                grew |= set.insert(symbol);
            }
        }
        if grew {
            for &dep in dependents.get(&head).into_iter().flatten() {
                if !dirty.contains(&dep) {
                    dirty.push_back(dep);
                }
            }
        }
    }

    first_sets
}

/// FIRST of a sentential fragment.
///
/// Walks the fragment until the first non-nullable symbol and returns what
/// has been collected at that point; reaching the end means the whole
/// fragment is nullable, which adds ε. The empty fragment is {ε}.
pub fn first_of_string(first_sets: &FirstSets, symbols: &[Symbol]) -> HashSet<Symbol> {
    let mut result = HashSet::new();

    for symbol in symbols {
        let Some(first_sym) = first_sets.get(symbol) else {
            return result;
        };
        result.extend(first_sym.iter().copied().filter(|s| !s.is_epsilon()));
        if !first_sym.contains(&Symbol::Epsilon) {
            return result;
        }
    }

    result.insert(Symbol::Epsilon);
    result
}

/// Computes FOLLOW for every nonterminal.
///
/// One pass over the productions gathers the direct contributions (FIRST of
/// the tail behind each nonterminal occurrence) and records an inclusion
/// edge FOLLOW(head) ⊆ FOLLOW(B) wherever the tail can vanish. The
/// inclusions are then propagated until no set grows.
pub fn compute_follow_sets(grammar: &Grammar, first_sets: &FirstSets) -> FollowSets {
    let mut follow_sets: FollowSets = HashMap::new();
    for nonterminal in grammar.nonterminals() {
        follow_sets.insert(*nonterminal, HashSet::new());
    }
    follow_sets
        .get_mut(&grammar.start_symbol())
        .unwrap()
        .insert(Symbol::EndMarker);

    let mut inclusions: Vec<(Symbol, Symbol)> = Vec::new();
    for production in grammar.all_productions() {
        let body = production.symbols();
        for (num, symbol) in body.iter().enumerate() {
            if !symbol.is_nonterminal() {
                continue;
            }
            // first_of_string yields {ε} for an empty tail, so a trailing
            // occurrence and a nullable tail are the same case here.
            let tail = first_of_string(first_sets, &body[num + 1..]);
            let follow = follow_sets.get_mut(symbol).unwrap();
            follow.extend(tail.iter().copied().filter(|s| !s.is_epsilon()));
            if tail.contains(&Symbol::Epsilon) && production.head != *symbol {
                inclusions.push((production.head, *symbol));
            }
        }
    }

    loop {
        let mut grew = false;
        for &(source, target) in &inclusions {
            let from: Vec<Symbol> = follow_sets[&source].iter().copied().collect();
            let into = follow_sets.get_mut(&target).unwrap();
            for symbol in from {
                grew |= into.insert(symbol);
            }
        }
        if !grew {
            break;
        }
    }

    follow_sets
}
