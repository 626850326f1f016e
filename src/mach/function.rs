use super::{num, Engine, Level};
use crate::lang::Instruction;
use std::ops::RangeInclusive;
use std::rc::Rc;

/// A built-in computed directly by the host. The arguments are already
/// coerced to numbers; the return value lands in `$ret`.
pub type Native = fn(&mut Engine, &[f64]) -> f64;

#[derive(Clone)]
pub enum Body {
    Native(Native),
    Defined(Rc<[Instruction]>),
}

/// ## Function table entry
///
/// Built-ins and user definitions share one namespace. Declared argument
/// names are recorded but only `arity` is checked at call time.

#[derive(Clone)]
pub struct Function {
    name: String,
    arity: RangeInclusive<usize>,
    arg_names: Vec<String>,
    body: Body,
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.body {
            Body::Native(_) => "native".to_string(),
            Body::Defined(body) => format!("{} instructions", body.len()),
        };
        write!(
            f,
            "Function {{ {}({}) {:?} {} }}",
            self.name,
            self.arg_names.join(", "),
            self.arity,
            kind
        )
    }
}

impl Function {
    pub fn native(
        name: &str,
        arity: RangeInclusive<usize>,
        arg_names: &[&str],
        native: Native,
    ) -> Function {
        Function {
            name: name.to_string(),
            arity,
            arg_names: arg_names.iter().map(|s| s.to_string()).collect(),
            body: Body::Native(native),
        }
    }

    /// User functions always take exactly zero arguments.
    pub fn defined(name: &str, arg_names: Vec<String>, body: Vec<Instruction>) -> Function {
        Function {
            name: name.to_string(),
            arity: 0..=0,
            arg_names,
            body: Body::Defined(body.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> &RangeInclusive<usize> {
        &self.arity
    }

    pub fn arg_names(&self) -> &[String] {
        &self.arg_names
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn is_native(&self) -> bool {
        matches!(self.body, Body::Native(_))
    }

    pub fn builtins() -> Vec<Function> {
        let any = 0..=usize::max_value();
        vec![
            Function::native(".func", any.clone(), &[], Function::dot_func),
            Function::native("nprint", any, &["..."], Function::nprint),
            Function::native("log", 1..=1, &["n"], |_, args| args[0].log10()),
            Function::native("sin", 1..=1, &["x"], |_, args| args[0].sin()),
            Function::native("cos", 1..=1, &["x"], |_, args| args[0].cos()),
            Function::native("tan", 1..=1, &["x"], |_, args| args[0].tan()),
            Function::native("rand", 0..=0, &[], |engine, _| engine.random()),
            Function::native("sqrt", 1..=1, &["n"], |_, args| args[0].sqrt()),
        ]
    }

    fn dot_func(engine: &mut Engine, args: &[f64]) -> f64 {
        engine.print(
            Level::Info,
            format!(".func is called with {} arguments!", args.len()),
        );
        0.0
    }

    fn nprint(engine: &mut Engine, args: &[f64]) -> f64 {
        let line: String = args.iter().map(|n| format!("{} ", num::format(*n))).collect();
        engine.print(Level::Log, line);
        args.len() as f64
    }
}
