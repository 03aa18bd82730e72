//! Regex compiler demo binary.
//!
//! Reads a pattern and candidate strings from stdin and answers yes/no per
//! string; `--dot` prints the compiled NFA as a Graphviz digraph.

use std::process;

fn main() {
    if let Err(e) = lr_frontend::cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
