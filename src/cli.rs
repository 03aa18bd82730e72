//! CLI for the regex compiler.
//!
//! The first input line is a regex pattern; each following line is matched
//! against it (`yes`/`no`) until an empty line or EOF. With `--dot` the
//! compiled machine is printed as a Graphviz digraph instead.

use crate::dot::machine_dot;
use crate::error::Result;
use crate::regex;
use std::env;
use std::io::{self, BufRead};

/// Main CLI runner.
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let pattern = match lines.next() {
        Some(line) => line?,
        None => return Ok(()),
    };

    let mut machine = regex::compile(&pattern)?;

    if env::args().nth(1).as_deref() == Some("--dot") {
        print!("{}", machine_dot(&machine));
        return Ok(());
    }

    while let Some(Ok(line)) = lines.next() {
        if line.is_empty() {
            break;
        }
        println!("{}", if machine.matches(&line) { "yes" } else { "no" });
    }

    Ok(())
}
