mod common;
use common::*;
use gasm::mach::{CmpFlags, Register};

fn cmp_bits(source: &str) -> u8 {
    let (s, _) = run(source);
    s.engine.registers().cmp().bits()
}

#[test]
fn test_cmp_flags() {
    assert_eq!(cmp_bits("cmp 3 5"), 0b0101);
    assert_eq!(cmp_bits("cmp 5 3"), 0b0110);
    assert_eq!(cmp_bits("cmp 4 4"), 0b1000);
    assert_eq!(cmp_bits("cmp $w 640"), 0b1000);
}

#[test]
fn test_cmp_with_non_numbers_never_fails() {
    let (s, out) = run("cmp abc 1\n");
    assert_eq!(out, "");
    assert_eq!(s.engine.registers().cmp(), CmpFlags::NOT_EQUAL);
    assert_eq!(cmp_bits("cmp $.nope $.nope"), 0b0100);
}

#[test]
fn test_dump_shows_cmp_in_binary() {
    let (_, out) = run("cmp 1 2\ndump\n");
    assert!(out.contains("[$cmp]:\t0101\n"));
}

#[test]
fn test_conditional_call() {
    let (_, out) = run(
        "func f\nret 1\nfunc end\ncmp 1 2\ncg f\nprint $ret\ncl f\nprint $ret\n",
    );
    assert_eq!(out, "0 \n1 \n");
}

#[test]
fn test_conditional_set() {
    let (s, _) = run("cmp 2 2\nse $.a 1\nsne $.b 1\nsge $.c 1\nsl $.d 1\n");
    assert_eq!(s.engine.var("$.a"), Some(1.0));
    assert_eq!(s.engine.var("$.b"), None);
    assert_eq!(s.engine.var("$.c"), Some(1.0));
    assert_eq!(s.engine.var("$.d"), None);
}

#[test]
fn test_conditional_set_argument_count() {
    let (s, out) = run("cmp 1 1\nse $.a\n");
    assert_eq!(out, "Invalid number of arguments (1) passed to 'se'.\n");
    assert!(!s.engine.have_var("$.a"));
}

#[test]
fn test_arithmetic_registers() {
    let (s, _) = run("add 40 2\nsub 1 3\nmul $w 2\ndiv 1 4\nmod 7 3\npow 2 8\n");
    assert_eq!(s.engine.register(Register::Add), 42.0);
    assert_eq!(s.engine.register(Register::Sub), -2.0);
    assert_eq!(s.engine.register(Register::Mul), 1280.0);
    assert_eq!(s.engine.register(Register::Div), 0.25);
    assert_eq!(s.engine.register(Register::Mod), 1.0);
    assert_eq!(s.engine.register(Register::Pow), 256.0);
}

#[test]
fn test_division_by_zero() {
    let (s, out) = run("div 1 0\nprint $div\n");
    assert_eq!(s.engine.register(Register::Div), std::f64::INFINITY);
    assert_eq!(out, "Infinity \n");
}

#[test]
fn test_bitwise() {
    let (s, _) = run("and 6 3\nor 4 1\nxor 5 1\n");
    assert_eq!(s.engine.register(Register::And), 2.0);
    assert_eq!(s.engine.register(Register::Or), 5.0);
    assert_eq!(s.engine.register(Register::Xor), 4.0);
}

#[test]
fn test_self_operation() {
    let (s, _) = run("set $.x 10\nadds $.x 5\nadd $.x 1\nmuls $.x 2\n");
    assert_eq!(s.engine.var("$.x"), Some(30.0));
    assert_eq!(s.engine.register(Register::Add), 16.0);
}

#[test]
fn test_self_operation_needs_variable() {
    let (s, out) = run("adds $w 1\nsubs $.nope 1\n");
    assert_eq!(
        out,
        "The \"adds\" operation must have a variable as its first argument\n\
         The \"subs\" operation must have a variable as its first argument\n"
    );
    assert_eq!(s.engine.register(Register::W), 640.0);
}

#[test]
fn test_operand_must_be_numeric() {
    let (s, out) = run("add x 1\n");
    assert_eq!(out, "Numeric value expected\n");
    assert_eq!(s.engine.register(Register::Add), 0.0);
}
