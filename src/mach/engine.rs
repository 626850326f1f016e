use super::consumer::{Consumer, Handler};
use super::register::{Register, Registers};
use super::var::{Var, SIGIL};
use super::{draw, num, operation, statement};
use super::{Function, Level, Message, Sink, Surface};
use crate::error;
use crate::lang::{Error, Fault, Instruction, Lexer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// What one call to `Engine::interpret_next` did.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The source is exhausted. Asking again gives `Eof` again.
    Eof,
    Executed(Instruction),
    /// The instruction failed and was reported to the sink. Running the
    /// next one is fine.
    Error,
}

/// ## The GASM interpreter
///
/// Holds the registers, variables, function table and operation table, and
/// pulls instructions from its lexer one at a time.

pub struct Engine {
    pub(crate) lexer: Lexer,
    pub(crate) registers: Registers,
    pub(crate) vars: Var,
    pub(crate) surface: Box<dyn Surface>,
    pub(crate) depth: usize,
    functions: HashMap<String, Function>,
    consumers: HashMap<String, Consumer>,
    sink: Box<dyn Sink>,
    rng: StdRng,
}

impl Engine {
    pub const ANY: RangeInclusive<f64> = std::f64::NEG_INFINITY..=std::f64::INFINITY;

    pub fn new<S, K, U>(source: S, sink: K, surface: U) -> Engine
    where
        S: AsRef<str>,
        K: Sink + 'static,
        U: Surface + 'static,
    {
        let mut consumers = HashMap::new();
        statement::register(&mut consumers);
        operation::register(&mut consumers);
        draw::register(&mut consumers);
        let functions = Function::builtins()
            .into_iter()
            .map(|f| (f.name().to_string(), f))
            .collect();
        Engine {
            lexer: Lexer::new(source),
            registers: Registers::new(surface.width(), surface.height()),
            vars: Var::new(),
            surface: Box::new(surface),
            depth: 0,
            functions,
            consumers,
            sink: Box::new(sink),
            rng: StdRng::from_entropy(),
        }
    }

    /// Makes `rand` reproducible.
    pub fn seed(mut self, seed: u64) -> Engine {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Points the engine at new source text. Registers, variables and
    /// functions are kept.
    pub fn reset<S: AsRef<str>>(&mut self, source: S) {
        let source = source.as_ref();
        self.print(
            Level::Debug,
            format!("Lexer reset with {} characters of source", source.chars().count()),
        );
        self.lexer.reset(source);
    }

    /// Re-reads the surface extents into `$w` and `$h`.
    pub fn update_size(&mut self) {
        let (width, height) = (self.surface.width(), self.surface.height());
        self.registers.set(Register::W, width);
        self.registers.set(Register::H, height);
    }

    /// Executes `given`, or the next instruction from the lexer when there
    /// is none. Only fatal errors come back as `Err`.
    pub fn interpret_next(&mut self, given: Option<&Instruction>) -> Result<Event, Error> {
        let instruction = match given {
            Some(instruction) => instruction.clone(),
            None => self.lexer.next_instruction(),
        };
        if instruction.is_eof() {
            return Ok(Event::Eof);
        }
        if self.dispatch(&instruction)? {
            Ok(Event::Executed(instruction))
        } else {
            Ok(Event::Error)
        }
    }

    pub fn step(&mut self) -> Result<Event, Error> {
        self.interpret_next(None)
    }

    /// Runs until EOF and returns how many instructions were processed,
    /// failed ones included.
    pub fn run(&mut self) -> Result<usize, Error> {
        let mut count = 0;
        while self.step()? != Event::Eof {
            count += 1;
        }
        Ok(count)
    }

    fn dispatch(&mut self, instruction: &Instruction) -> Result<bool, Error> {
        let operation = instruction.operation();
        let consumer = match self.consumers.get(&operation.to_lowercase()) {
            Some(consumer) => *consumer,
            None => {
                let error = error!(UnknownOperation; format!("Invalid Instruction \"{}\"", operation));
                self.print(Level::Warn, error.text());
                return Ok(false);
            }
        };
        let argv = instruction.params();
        if !consumer.arity.allows(argv.len()) {
            let error = error!(ArgumentCount; format!(
                "Invalid number of arguments ({}) passed to '{}'.",
                argv.len(),
                operation
            ));
            self.print(Level::Warn, error.text());
            return Ok(false);
        }
        match self.execute(consumer.handler, argv) {
            Ok(()) => Ok(true),
            Err(Fault::Assertion(error)) => {
                self.print(
                    Level::Debug,
                    format!("Assertion failed in '{}': {}", operation, error.text()),
                );
                Ok(false)
            }
            Err(Fault::Fatal(error)) => Err(error),
        }
    }

    fn execute(&mut self, handler: Handler, argv: &[String]) -> Result<(), Fault> {
        match handler {
            Handler::Statement(consume) => consume(argv, self),
            Handler::Operator(op) => operation::operator(op, argv, self),
            Handler::SelfOperator(op) => operation::self_operator(op, argv, self),
            Handler::CondCall(cond) => operation::cond_call(cond, argv, self),
            Handler::CondSet(cond) => operation::cond_set(cond, argv, self),
        }
    }

    pub fn print<S: Into<String>>(&mut self, level: Level, content: S) {
        self.sink.print(Message::new(level, content));
    }

    /// Reports `message` and builds the failure that aborts the current
    /// instruction.
    pub fn fail(&mut self, message: &str, level: Level) -> Fault {
        self.print(level, message);
        Fault::Assertion(error!(AssertionFailed; message))
    }

    pub fn assert(&mut self, condition: bool, message: &str) -> Result<(), Fault> {
        self.assert_at(condition, message, Level::Error)
    }

    pub fn assert_at(&mut self, condition: bool, message: &str, level: Level) -> Result<(), Fault> {
        if condition {
            Ok(())
        } else {
            Err(self.fail(message, level))
        }
    }

    /// Coerces a token to a number inside `range`, failing the instruction
    /// when it will not go.
    pub fn to_number(
        &mut self,
        token: &str,
        message: Option<&str>,
        range: RangeInclusive<f64>,
        level: Level,
    ) -> Result<f64, Fault> {
        let n = self.resolve(token, &range);
        if !n.is_nan() {
            return Ok(n);
        }
        if self.resolve(token, &Engine::ANY).is_nan() {
            let message = message.unwrap_or("Numeric value expected");
            Err(self.fail(message, level))
        } else {
            let message = match message {
                Some(message) => message.to_string(),
                None => format!(
                    "Numeric value within {} to {} expected",
                    num::format(*range.start()),
                    num::format(*range.end())
                ),
            };
            Err(self.fail(&message, Level::Error))
        }
    }

    pub fn number(&mut self, token: &str) -> Result<f64, Fault> {
        self.to_number(token, None, Engine::ANY, Level::Error)
    }

    /// Same lookup as `number` but gives NaN instead of failing.
    pub fn try_number(&self, token: &str) -> f64 {
        self.resolve(token, &Engine::ANY)
    }

    fn resolve(&self, token: &str, range: &RangeInclusive<f64>) -> f64 {
        let valid = |n: f64| !n.is_nan() && range.contains(&n);
        let n = num::parse(token);
        if valid(n) {
            return n;
        }
        if token.starts_with(SIGIL) {
            let found = match Register::from_name(token) {
                Some(register) => Some(self.registers.get(register)),
                None => self.vars.fetch(token),
            };
            if let Some(n) = found {
                if valid(n) {
                    return n;
                }
            }
        }
        std::f64::NAN
    }

    /// Negative values, and tokens written with a leading `-`, count back
    /// from the right or bottom edge.
    pub fn coordinate(&mut self, x_token: &str, y_token: &str) -> Result<(f64, f64), Fault> {
        let mut x = self.number(x_token)?;
        let mut y = self.number(y_token)?;
        if x < 0.0 || x_token.starts_with('-') {
            x += self.registers.get(Register::W);
        }
        if y < 0.0 || y_token.starts_with('-') {
            y += self.registers.get(Register::H);
        }
        Ok((x, y))
    }

    pub fn have_var(&self, name: &str) -> bool {
        self.vars.contains(name)
    }

    pub fn var(&self, name: &str) -> Option<f64> {
        self.vars.fetch(name)
    }

    pub fn register(&self, register: Register) -> f64 {
        self.registers.get(register)
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Adds or replaces a function by name.
    pub fn define(&mut self, function: Function) {
        self.functions.insert(function.name().to_string(), function);
    }

    /// Sorted snapshot of every operation name the engine understands.
    pub fn operations(&self) -> Vec<String> {
        let mut names: Vec<String> = self.consumers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn random(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
