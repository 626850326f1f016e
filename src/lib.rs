//! # GASM
//!
//! Graphics ASM: a tiny assembly-flavoured language for drawing lines and
//! shapes, with registers, variables, comparisons and functions.
//!
//! Begin by opening a terminal and running the executable. You get a
//! console where each line you enter is executed right away.
//! ```text
//! GASM console ready.
//! > movp 10 10
//! > line -10 -10
//! ```
//!
//! Give it a file to run a whole program instead, and `--svg` to keep
//! the picture it draws.
//!
//! The engine itself is a library. Hand it source text, a [`mach::Sink`]
//! for messages and a [`mach::Surface`] to draw on:
//! ```
//! use gasm::mach::{Canvas, Engine, Register, Transcript};
//!
//! let transcript = Transcript::new();
//! let mut engine = Engine::new("call sqrt 16\n", transcript.clone(), Canvas::new(640.0, 480.0));
//! engine.run().unwrap();
//! assert_eq!(engine.register(Register::Ret), 4.0);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
