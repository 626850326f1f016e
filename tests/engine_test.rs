mod common;
use common::*;
use gasm::error;
use gasm::lang::{Error, Instruction, Lexer};
use gasm::mach::{Color, Engine, Event, Level, Register, Surface, Transcript};

#[test]
fn test_unknown_operation_is_reported() {
    let mut s = session();
    s.engine.reset("jump 1\n");
    assert_eq!(s.engine.step().unwrap(), Event::Error);
    let shown: Vec<(Level, String)> = s
        .transcript
        .lines()
        .into_iter()
        .filter(|(level, _)| *level > Level::Debug)
        .collect();
    assert_eq!(
        shown,
        vec![(Level::Warn, "Invalid Instruction \"jump\"".to_string())]
    );
}

#[test]
fn test_wrong_argument_count_is_reported() {
    let mut s = session();
    s.engine.reset("add 1\n");
    assert_eq!(s.engine.step().unwrap(), Event::Error);
    assert_eq!(
        s.transcript.text(Level::Warn),
        "Invalid number of arguments (1) passed to 'add'.\n"
    );
    assert_eq!(s.engine.register(Register::Add), 0.0);
}

#[test]
fn test_operation_names_ignore_case() {
    let (s, _) = run("ADD 1 2\nMul 3 4\n");
    assert_eq!(s.engine.register(Register::Add), 3.0);
    assert_eq!(s.engine.register(Register::Mul), 12.0);
}

#[test]
fn test_eof_repeats() {
    let mut s = session();
    s.engine.reset("add 1 2\n");
    assert!(matches!(s.engine.step().unwrap(), Event::Executed(_)));
    for _ in 0..3 {
        assert_eq!(s.engine.step().unwrap(), Event::Eof);
    }
}

#[test]
fn test_run_counts_failed_instructions() {
    let mut s = session();
    s.engine.reset("add 1 2\nnope\nadd 1\n\n; comment\nsub 5 1");
    assert_eq!(s.engine.run().unwrap(), 4);
    assert_eq!(s.engine.register(Register::Sub), 4.0);
}

#[test]
fn test_failure_does_not_stop_the_run() {
    let (s, out) = run("del $.missing\nprint after\n");
    assert_eq!(out, "Variable \"$.missing\" not found\nafter \n");
    assert!(s
        .transcript
        .lines()
        .contains(&(Level::Debug, "Assertion failed in 'del': Variable \"$.missing\" not found".to_string())));
}

#[test]
fn test_given_instruction_leaves_lexer_alone() {
    let mut s = session();
    s.engine.reset("add 1 1\n");
    let given = Lexer::new("mul 2 5").next().unwrap();
    assert_eq!(
        s.engine.interpret_next(Some(&given)).unwrap(),
        Event::Executed(given.clone())
    );
    assert_eq!(s.engine.register(Register::Mul), 10.0);
    assert_eq!(
        s.engine.step().unwrap(),
        Event::Executed(Instruction::new("add", vec!["1".to_string(), "1".to_string()]))
    );
}

#[test]
fn test_reset_keeps_state() {
    let mut s = session();
    exec(&mut s, "set $.x 3\nfunc f\nret 9\nfunc end\n");
    let out = exec(&mut s, "call f\nprint $.x $ret\n");
    assert_eq!(out, "3 9 \n");
}

#[test]
fn test_update_size() {
    let mut s = session();
    assert_eq!(s.engine.register(Register::W), 640.0);
    s.canvas.resize(100.0, 50.0);
    assert_eq!(s.engine.register(Register::W), 640.0);
    s.engine.update_size();
    assert_eq!(s.engine.register(Register::W), 100.0);
    assert_eq!(s.engine.register(Register::H), 50.0);
}

#[test]
fn test_constant_registers() {
    let s = session();
    assert_eq!(s.engine.register(Register::Pi), std::f64::consts::PI);
    assert_eq!(
        s.engine.register(Register::Deg2Rad),
        std::f64::consts::PI / 180.0
    );
    assert_eq!(s.engine.var("$.var"), Some(0.0));
}

#[test]
fn test_operations_snapshot() {
    let s = session();
    let ops = s.engine.operations();
    for op in &["add", "adds", "cmp", "ce", "sle", "set", "func", "rgba", "dmp"] {
        assert!(ops.contains(&op.to_string()), "missing {}", op);
    }
    let mut sorted = ops.clone();
    sorted.sort();
    assert_eq!(ops, sorted);
}

struct BrokenSurface;

impl Surface for BrokenSurface {
    fn begin_path(&mut self) -> Result<(), Error> {
        Ok(())
    }
    fn close_path(&mut self) -> Result<(), Error> {
        Ok(())
    }
    fn stroke(&mut self) -> Result<(), Error> {
        Err(error!(InternalError; "BAD SURFACE"))
    }
    fn fill(&mut self) -> Result<(), Error> {
        Ok(())
    }
    fn set_line_width(&mut self, _width: f64) -> Result<(), Error> {
        Ok(())
    }
    fn set_stroke_style(&mut self, _color: &Color) -> Result<(), Error> {
        Ok(())
    }
    fn set_fill_style(&mut self, _color: &Color) -> Result<(), Error> {
        Ok(())
    }
    fn move_to(&mut self, _x: f64, _y: f64) -> Result<(), Error> {
        Ok(())
    }
    fn line_to(&mut self, _x: f64, _y: f64) -> Result<(), Error> {
        Ok(())
    }
    fn width(&self) -> f64 {
        10.0
    }
    fn height(&self) -> f64 {
        10.0
    }
}

#[test]
fn test_surface_failure_is_fatal() {
    let transcript = Transcript::new();
    let mut engine = Engine::new("movp 1 1\nstrk\nadd 1 1\n", transcript.clone(), BrokenSurface);
    assert!(matches!(engine.step().unwrap(), Event::Executed(_)));
    let error = engine.step().unwrap_err();
    assert_eq!(error.to_string(), "INTERNAL ERROR; BAD SURFACE");
    assert_eq!(transcript.text(Level::Log), "");
}

#[test]
fn test_fatal_error_inside_function_ends_run() {
    let transcript = Transcript::new();
    let mut engine = Engine::new(
        "func f\nstrk\nret 1\nfunc end\ncall f\nadd 1 1\n",
        transcript,
        BrokenSurface,
    );
    assert!(engine.run().is_err());
    assert_eq!(engine.register(Register::Ret), 0.0);
    assert_eq!(engine.register(Register::Add), 0.0);
}
