use super::consumer::{Arity, Consumer, Handler};
use super::num::to_int32;
use super::register::{CmpFlags, Register};
use super::{statement, Engine};
use crate::lang::Fault;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Fault>;

/// ## Binary operators
///
/// `add 1 2` stores into `$add`; `adds $.x 2` rewrites `$.x` in place.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    And,
    Or,
    Xor,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::Pow,
        Operator::And,
        Operator::Or,
        Operator::Xor,
    ];

    pub fn name(self) -> &'static str {
        use Operator::*;
        match self {
            Add => "add",
            Sub => "sub",
            Mul => "mul",
            Div => "div",
            Mod => "mod",
            Pow => "pow",
            And => "and",
            Or => "or",
            Xor => "xor",
        }
    }

    pub fn self_name(self) -> String {
        format!("{}s", self.name())
    }

    pub fn register(self) -> Register {
        use Operator::*;
        match self {
            Add => Register::Add,
            Sub => Register::Sub,
            Mul => Register::Mul,
            Div => Register::Div,
            Mod => Register::Mod,
            Pow => Register::Pow,
            And => Register::And,
            Or => Register::Or,
            Xor => Register::Xor,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        use Operator::*;
        match self {
            Add => lhs + rhs,
            Sub => lhs - rhs,
            Mul => lhs * rhs,
            Div => lhs / rhs,
            Mod => lhs % rhs,
            Pow => lhs.powf(rhs),
            And => (to_int32(lhs) & to_int32(rhs)) as f64,
            Or => (to_int32(lhs) | to_int32(rhs)) as f64,
            Xor => (to_int32(lhs) ^ to_int32(rhs)) as f64,
        }
    }
}

/// ## Conditions tested against `$cmp`

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cond {
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Lesser,
    LesserEqual,
}

impl Cond {
    pub const ALL: [Cond; 6] = [
        Cond::Equal,
        Cond::NotEqual,
        Cond::Greater,
        Cond::GreaterEqual,
        Cond::Lesser,
        Cond::LesserEqual,
    ];

    pub fn suffix(self) -> &'static str {
        use Cond::*;
        match self {
            Equal => "e",
            NotEqual => "ne",
            Greater => "g",
            GreaterEqual => "ge",
            Lesser => "l",
            LesserEqual => "le",
        }
    }

    pub fn mask(self) -> CmpFlags {
        use Cond::*;
        match self {
            Equal => CmpFlags::EQUAL,
            NotEqual => CmpFlags::NOT_EQUAL,
            Greater => CmpFlags::GREATER,
            GreaterEqual => CmpFlags::GREATER_EQUAL,
            Lesser => CmpFlags::LESSER,
            LesserEqual => CmpFlags::LESSER_EQUAL,
        }
    }

    pub fn holds(self, flags: CmpFlags) -> bool {
        flags.intersects(self.mask())
    }
}

pub fn register(table: &mut HashMap<String, Consumer>) {
    for &op in Operator::ALL.iter() {
        table.insert(
            op.name().to_string(),
            Consumer {
                arity: Arity::Exactly(2),
                handler: Handler::Operator(op),
            },
        );
        table.insert(
            op.self_name(),
            Consumer {
                arity: Arity::Exactly(2),
                handler: Handler::SelfOperator(op),
            },
        );
    }
    for &cond in Cond::ALL.iter() {
        table.insert(
            format!("c{}", cond.suffix()),
            Consumer {
                arity: statement::CALL_ARITY,
                handler: Handler::CondCall(cond),
            },
        );
        table.insert(
            format!("s{}", cond.suffix()),
            Consumer {
                arity: statement::SET_ARITY,
                handler: Handler::CondSet(cond),
            },
        );
    }
    table.insert("cmp".to_string(), Consumer::new(Arity::Exactly(2), cmp));
}

pub fn operator(op: Operator, argv: &[String], engine: &mut Engine) -> Result<()> {
    let lhs = engine.number(&argv[0])?;
    let rhs = engine.number(&argv[1])?;
    engine.registers.set(op.register(), op.apply(lhs, rhs));
    Ok(())
}

/// The current value is taken as stored, NaN included.
pub fn self_operator(op: Operator, argv: &[String], engine: &mut Engine) -> Result<()> {
    let var_name = &argv[0];
    let exists = engine.have_var(var_name);
    engine.assert(
        exists,
        &format!(
            "The \"{}\" operation must have a variable as its first argument",
            op.self_name()
        ),
    )?;
    let current = engine.vars.fetch(var_name).unwrap_or(std::f64::NAN);
    let rhs = engine.number(&argv[1])?;
    engine.vars.store(var_name, op.apply(current, rhs))?;
    Ok(())
}

/// Operands that do not resolve compare as NaN rather than failing.
fn cmp(argv: &[String], engine: &mut Engine) -> Result<()> {
    let lhs = engine.try_number(&argv[0]);
    let rhs = engine.try_number(&argv[1]);
    engine.registers.set_cmp(CmpFlags::compare(lhs, rhs));
    Ok(())
}

pub fn cond_call(cond: Cond, argv: &[String], engine: &mut Engine) -> Result<()> {
    if cond.holds(engine.registers.cmp()) {
        statement::call(argv, engine)?;
    }
    Ok(())
}

pub fn cond_set(cond: Cond, argv: &[String], engine: &mut Engine) -> Result<()> {
    if cond.holds(engine.registers.cmp()) {
        statement::set(argv, engine)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(10.0, 5.0), 15.0);
        assert_eq!(Operator::Mod.apply(-7.0, 3.0), -1.0);
        assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
        assert_eq!(Operator::And.apply(6.7, 3.0), 2.0);
        assert_eq!(Operator::Or.apply(4.0, 1.0), 5.0);
        assert_eq!(Operator::Xor.apply(-1.0, 1.0), -2.0);
        assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_cond_masks() {
        let lesser = CmpFlags::compare(1.0, 2.0);
        assert!(Cond::Lesser.holds(lesser));
        assert!(Cond::LesserEqual.holds(lesser));
        assert!(Cond::NotEqual.holds(lesser));
        assert!(!Cond::GreaterEqual.holds(lesser));
        assert!(!Cond::Equal.holds(lesser));
    }
}
