//! Graphviz emission for NFA graphs.
//!
//! Produces a `digraph` description: an invisible arrow into the start
//! state, circles for states, a double circle for the accept state, and one
//! labeled edge per path. Rendering a live machine additionally colors the
//! current frontier red.

use crate::graph::{Graph, Machine, StateId};
use std::collections::HashSet;
use std::fmt::Write;

/// Renders a graph as a Graphviz digraph.
pub fn graph_dot(graph: &Graph) -> String {
    render(graph, &HashSet::new())
}

/// Renders a machine's graph, highlighting the current frontier.
pub fn machine_dot(machine: &Machine) -> String {
    render(machine.graph(), machine.current())
}

fn render(graph: &Graph, highlight: &HashSet<StateId>) -> String {
    let mut out = String::new();

    out.push_str("digraph state_machine {\n");
    out.push_str("node [shape=\"circle\"];\n");
    out.push_str("rankdir=LR;\n");
    out.push_str("StartArrow [style = invis];\n");

    for state in graph.states() {
        let shape = if state == graph.accept() {
            "shape = \"doublecircle\""
        } else {
            "shape = \"circle\""
        };
        if highlight.contains(&state) {
            let _ = writeln!(out, "{} [{}; color=red];", node(graph, state), shape);
        } else if state == graph.accept() {
            let _ = writeln!(out, "{} [{}];", node(graph, state), shape);
        } else {
            let _ = writeln!(out, "{};", node(graph, state));
        }
    }

    let _ = writeln!(
        out,
        "StartArrow -> {} [label=\"start\"];",
        node(graph, graph.start())
    );
    for path in graph.paths() {
        let _ = writeln!(
            out,
            "{} -> {} [label=\"{}\"];",
            node(graph, path.begin),
            node(graph, path.end),
            path.label
        );
    }

    out.push_str("}\n");
    out
}

/// Node identifier: the BFS display name once assigned.
fn node(graph: &Graph, state: StateId) -> u32 {
    graph.name_of(state)
}
