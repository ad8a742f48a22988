use super::Val;
use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Numeric equality absorbs round-off from chained f64 arithmetic; all
/// other comparisons are exact.
pub const EPSILON: f64 = 1e-10;

pub struct Operation {}

impl Operation {
    pub fn binary(lhs: Val, op: Operator, rhs: Val) -> Result<Val> {
        use Val::*;
        if let (Text(l), Text(r)) = (&lhs, &rhs) {
            return match op {
                Operator::Plus => Ok(Text(format!("{}{}", l, r))),
                Operator::Equal => Ok(Operation::boolean(l == r)),
                Operator::NotEqual => Ok(Operation::boolean(l != r)),
                _ => Err(error!(TypeError; "INVALID STRING OPERATION")),
            };
        }
        let l = lhs.as_number()?;
        let r = rhs.as_number()?;
        match op {
            Operator::Plus => Ok(Number(l + r)),
            Operator::Minus => Ok(Number(l - r)),
            Operator::Multiply => Ok(Number(l * r)),
            Operator::Divide => {
                if r == 0.0 {
                    Err(error!(RangeError; "DIVISION BY ZERO"))
                } else {
                    Ok(Number(l / r))
                }
            }
            Operator::Modulus => {
                if r == 0.0 {
                    Err(error!(RangeError; "DIVISION BY ZERO IN MOD"))
                } else {
                    Ok(Number(l % r))
                }
            }
            Operator::Caret => {
                if l == 0.0 && r < 0.0 {
                    Err(error!(RangeError; "ZERO TO NEGATIVE POWER"))
                } else {
                    Ok(Number(l.powf(r)))
                }
            }
            Operator::Equal => Ok(Operation::boolean((l - r).abs() < EPSILON)),
            Operator::NotEqual => Ok(Operation::boolean((l - r).abs() >= EPSILON)),
            Operator::Less => Ok(Operation::boolean(l < r)),
            Operator::LessEqual => Ok(Operation::boolean(l <= r)),
            Operator::Greater => Ok(Operation::boolean(l > r)),
            Operator::GreaterEqual => Ok(Operation::boolean(l >= r)),
            Operator::And => Ok(Operation::boolean(l != 0.0 && r != 0.0)),
            Operator::Or => Ok(Operation::boolean(l != 0.0 || r != 0.0)),
            Operator::Not => Err(error!(SyntaxError; "NOT IS UNARY")),
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        match val {
            Val::Number(n) => Ok(Val::Number(-n)),
            Val::Text(_) => Err(error!(TypeError; "UNARY MINUS NEEDS A NUMBER")),
        }
    }

    pub fn identity(val: Val) -> Result<Val> {
        match val {
            Val::Number(_) => Ok(val),
            Val::Text(_) => Err(error!(TypeError; "UNARY PLUS NEEDS A NUMBER")),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        match val {
            Val::Number(n) => Ok(Operation::boolean(n == 0.0)),
            Val::Text(_) => Err(error!(TypeError; "NOT NEEDS A NUMBER")),
        }
    }

    fn boolean(b: bool) -> Val {
        Val::Number(if b { 1.0 } else { 0.0 })
    }
}
