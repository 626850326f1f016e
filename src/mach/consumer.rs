use super::operation::{Cond, Operator};
use super::Engine;
use crate::lang::Fault;

/// Executes one operation given its parameters.
pub type Consume = fn(&[String], &mut Engine) -> Result<(), Fault>;

/// How many parameters an operation accepts.
#[derive(Clone, Copy)]
pub enum Arity {
    Exactly(usize),
    Verifier(fn(usize) -> bool),
}

impl Arity {
    pub fn allows(self, argc: usize) -> bool {
        match self {
            Arity::Exactly(n) => n == argc,
            Arity::Verifier(verify) => verify(argc),
        }
    }
}

#[derive(Clone, Copy)]
pub enum Handler {
    Statement(Consume),
    Operator(Operator),
    SelfOperator(Operator),
    CondCall(Cond),
    CondSet(Cond),
}

/// ## Operation table entry

#[derive(Clone, Copy)]
pub struct Consumer {
    pub arity: Arity,
    pub handler: Handler,
}

impl Consumer {
    pub fn new(arity: Arity, consume: Consume) -> Consumer {
        Consumer {
            arity,
            handler: Handler::Statement(consume),
        }
    }
}
