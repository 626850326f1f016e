use super::consumer::{Arity, Consumer};
use super::function::{Body, Function};
use super::register::Register;
use super::var::{is_var_name, NAMESPACE, SIGIL};
use super::{num, Engine, Event, Level};
use crate::lang::{Fault, Instruction};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Fault>;

pub const CALL_ARITY: Arity = Arity::Verifier(at_least_one);
pub const SET_ARITY: Arity = Arity::Exactly(2);

/// Defined functions may nest this deep before a call is refused.
pub const MAX_CALL_DEPTH: usize = 256;

fn at_least_one(argc: usize) -> bool {
    argc >= 1
}

fn any(_argc: usize) -> bool {
    true
}

pub fn register(table: &mut HashMap<String, Consumer>) {
    table.insert("set".to_string(), Consumer::new(SET_ARITY, set));
    table.insert("del".to_string(), Consumer::new(Arity::Exactly(1), del));
    table.insert("print".to_string(), Consumer::new(Arity::Verifier(any), print));
    table.insert("func".to_string(), Consumer::new(Arity::Verifier(at_least_one), func));
    table.insert("call".to_string(), Consumer::new(CALL_ARITY, call));
    table.insert("ret".to_string(), Consumer::new(Arity::Exactly(1), ret));
    table.insert("dump".to_string(), Consumer::new(Arity::Exactly(0), dump));
    table.insert("dmp".to_string(), Consumer::new(Arity::Exactly(0), dump));
}

pub fn set(argv: &[String], engine: &mut Engine) -> Result<()> {
    let name = &argv[0];
    engine.assert(
        name.starts_with(SIGIL),
        &format!("Variable's name must start with '{}'", SIGIL),
    )?;
    engine.assert(
        is_var_name(name),
        "Variable's name must contain at least one namespace",
    )?;
    let value = engine.to_number(
        &argv[1],
        Some("The value of a variable must be a number"),
        Engine::ANY,
        Level::Error,
    )?;
    if let Err(error) = engine.vars.store(name, value) {
        return Err(engine.fail(error.text(), Level::Error));
    }
    Ok(())
}

fn del(argv: &[String], engine: &mut Engine) -> Result<()> {
    let name = &argv[0];
    let exists = engine.have_var(name);
    engine.assert(exists, &format!("Variable \"{}\" not found", name))?;
    engine.vars.remove(name);
    Ok(())
}

/// Shows numbers as numbers and anything else as written.
fn print(argv: &[String], engine: &mut Engine) -> Result<()> {
    let mut line = String::new();
    for arg in argv {
        let n = engine.try_number(arg);
        if n.is_nan() {
            line.push_str(arg);
        } else {
            line.push_str(&num::format(n));
        }
        line.push(' ');
    }
    engine.print(Level::Log, line);
    Ok(())
}

fn is_arg_name(s: &str) -> bool {
    is_var_name(s) || (num::parse(s).is_nan() && !s.starts_with(SIGIL) && !s.starts_with(NAMESPACE))
}

/// Records lines straight from the lexer until `func end` or EOF.
fn func(argv: &[String], engine: &mut Engine) -> Result<()> {
    let name = &argv[0];
    engine.assert(
        !name.eq_ignore_ascii_case("end"),
        "\"end\" is reserved and cannot name a function",
    )?;
    let mut arg_names = vec![];
    for arg_name in &argv[1..] {
        engine.assert(
            is_arg_name(arg_name),
            &format!(
                "Expected an identifier as argument name, but got \"{}\"",
                arg_name
            ),
        )?;
        arg_names.push(arg_name.clone());
    }
    let mut body = vec![];
    loop {
        let instruction = engine.lexer.next_instruction();
        if instruction.is_eof() {
            break;
        }
        if instruction.is("func") {
            let end = instruction
                .params()
                .first()
                .map_or(false, |p| p.eq_ignore_ascii_case("end"));
            engine.assert(end, "Nested functions not supported")?;
            break;
        }
        body.push(instruction);
    }
    engine.define(Function::defined(name, arg_names, body));
    Ok(())
}

pub fn call(argv: &[String], engine: &mut Engine) -> Result<()> {
    let name = &argv[0];
    let function = match engine.function(name) {
        Some(function) => function.clone(),
        None => return Err(engine.fail(&format!("Function {} not found", name), Level::Error)),
    };
    let argc = argv.len() - 1;
    engine.assert(
        function.arity().contains(&argc),
        &format!(
            "Mismatched argument count ({}) for function {}",
            argc,
            function.name()
        ),
    )?;
    let mut args = Vec::with_capacity(argc);
    for token in &argv[1..] {
        args.push(engine.number(token)?);
    }
    match function.body() {
        Body::Native(native) => {
            let value = native(engine, &args);
            engine.registers.set(Register::Ret, value);
            Ok(())
        }
        Body::Defined(body) => run_body(engine, function.name(), body),
    }
}

/// Failing body instructions are reported and skipped; a fatal error ends
/// the call.
fn run_body(engine: &mut Engine, name: &str, body: &[Instruction]) -> Result<()> {
    let depth = engine.depth;
    engine.assert(
        depth < MAX_CALL_DEPTH,
        &format!("Call stack overflow in function {}", name),
    )?;
    engine.depth += 1;
    let mut result = Ok(());
    for instruction in body {
        match engine.interpret_next(Some(instruction)) {
            Ok(Event::Eof) | Ok(Event::Executed(_)) | Ok(Event::Error) => {}
            Err(error) => {
                result = Err(Fault::Fatal(error));
                break;
            }
        }
        if instruction.is("ret") {
            break;
        }
    }
    engine.depth = depth;
    result
}

fn ret(argv: &[String], engine: &mut Engine) -> Result<()> {
    let value = engine.number(&argv[0])?;
    engine.registers.set(Register::Ret, value);
    Ok(())
}

fn dump(_argv: &[String], engine: &mut Engine) -> Result<()> {
    let lines: Vec<String> = engine
        .registers
        .iter()
        .map(|(register, value)| match register {
            Register::Cmp => format!("[{}]:\t{}", register, engine.registers.cmp()),
            _ => format!("[{}]:\t{}", register, num::format(value)),
        })
        .collect();
    for line in lines {
        engine.print(Level::Log, line);
    }
    engine.print(Level::Log, " ");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_names() {
        assert!(is_arg_name("x"));
        assert!(is_arg_name("$.a"));
        assert!(!is_arg_name("$w"));
        assert!(!is_arg_name(".a"));
        assert!(!is_arg_name("12"));
    }
}
