//! # GASM
//!
//! Console and script runner for the GASM drawing language.
//!

mod term;

fn main() {
    term::main();
}
