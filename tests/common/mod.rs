#![allow(dead_code)]
use gasm::mach::{Canvas, Engine, Level, Transcript};

pub struct Session {
    pub engine: Engine,
    pub transcript: Transcript,
    pub canvas: Canvas,
}

pub fn session() -> Session {
    let transcript = Transcript::new();
    let canvas = Canvas::new(640.0, 480.0);
    let engine = Engine::new("", transcript.clone(), canvas.clone()).seed(7);
    Session {
        engine,
        transcript,
        canvas,
    }
}

/// Runs `source` to EOF and returns everything printed at `Log` or above.
pub fn exec(s: &mut Session, source: &str) -> String {
    s.transcript.clear();
    s.engine.reset(source);
    s.engine.run().unwrap();
    s.transcript.text(Level::Log)
}

pub fn run(source: &str) -> (Session, String) {
    let mut s = session();
    let out = exec(&mut s, source);
    (s, out)
}
