//! Thompson construction rules for NFA graphs.
//!
//! Each constructor is a constant-size induction step: it takes its operand
//! graphs by value (consuming them, since concatenation rewires edges in
//! place) and returns a fresh graph with designated start and accept states.

use crate::graph::{Graph, Label, Path};

/// The atomic machine for a single input letter:
///
/// ```text
///      start           a
///   ────────> ○ ───────────────> ◎
/// ```
pub fn basis(letter: char) -> Graph {
    let mut graph = Graph::empty();
    let init = graph.new_state();
    let finish = graph.new_state();
    graph.paths.push(Path {
        begin: init,
        end: finish,
        label: Label::Letter(letter),
    });
    graph.start = init;
    graph.accept = finish;
    graph
}

/// The union machine: new start and accept states, ε-edges fanning out to
/// both operands and back in from their accepts.
///
/// ```text
///               ε  ┌───────────┐  ε
///              ┌──> ○  former ○ ─────┐
///      start   │   └───────────┘     │
///   ─────────> ○   ┌───────────┐     ├───> ◎
///              │   ┊   later   ┊     │
///              └──> ○         ○ ─────┘
///               ε  └───────────┘  ε
/// ```
pub fn alternate(former: Graph, later: Graph) -> Graph {
    let mut graph = former;
    let former_start = graph.start();
    let former_accept = graph.accept();
    let (later_start, later_accept) = graph.absorb(later);

    let init = graph.new_state();
    let finish = graph.new_state();
    for (begin, end) in [
        (init, former_start),
        (init, later_start),
        (former_accept, finish),
        (later_accept, finish),
    ] {
        graph.paths.push(Path {
            begin,
            end,
            label: Label::Epsilon,
        });
    }

    graph.start = init;
    graph.accept = finish;
    graph
}

/// The sequence machine: the later graph's start collapses onto the former
/// graph's accept. No new states are allocated.
pub fn concat(former: Graph, later: Graph) -> Graph {
    let mut graph = former;
    let (later_start, later_accept) = graph.absorb(later);

    let joint = graph.accept();
    graph.rewire(later_start, joint);
    graph.accept = later_accept;
    graph
}

/// The repetition machine: zero or more runs of the operand.
///
/// ```text
///                       ε
///                  ┌─────────┐
///                  ▼         │
///    start      ε ┌───────────┐  ε
///  ──────> ○ ────> ○  inner  ○ ──────> ◎
///          │      └───────────┘        ▲
///          │              ε            │
///          └───────────────────────────┘
/// ```
pub fn star(inner: Graph) -> Graph {
    let mut graph = inner;
    let inner_start = graph.start();
    let inner_accept = graph.accept();

    let init = graph.new_state();
    let finish = graph.new_state();
    for (begin, end) in [
        (init, inner_start),
        (init, finish),
        (inner_accept, finish),
        (inner_accept, inner_start),
    ] {
        graph.paths.push(Path {
            begin,
            end,
            label: Label::Epsilon,
        });
    }

    graph.start = init;
    graph.accept = finish;
    graph
}
