use super::function::Builtin;
use super::operation::Operation;
use super::{Val, Var};
use crate::error;
use crate::lang::{Error, Function, Operator, Token};
use rand::rngs::StdRng;

type Result<T> = std::result::Result<T, Error>;

/// ## Expression evaluator
///
/// Recurses over inclusive `[start, end]` index ranges of a flat token
/// slice; no tree is ever built. Reads variables, writes nothing.
pub struct Evaluator<'a> {
    vars: &'a Var,
    rng: &'a mut StdRng,
}

impl<'a> Evaluator<'a> {
    pub fn new(vars: &'a Var, rng: &'a mut StdRng) -> Evaluator<'a> {
        Evaluator { vars, rng }
    }

    pub fn evaluate(&mut self, tokens: &[Token], start: usize, end: usize) -> Result<Val> {
        if start > end || end >= tokens.len() {
            return Err(error!(SyntaxError; "EXPECTED EXPRESSION"));
        }
        if start == end {
            return self.single(&tokens[start]);
        }
        if let Token::Function(func) = tokens[start] {
            // A call counts only when its parentheses span the whole
            // range; `SIN(1)+2` falls through to the operator split.
            if tokens.get(start + 1) == Some(&Token::LParen) {
                if let Some(rparen) = matching_paren(tokens, start + 1, end) {
                    if rparen == end {
                        return self.call(func, tokens, start + 2, rparen);
                    }
                }
            }
        }
        if let Token::Operator(op) = tokens[start] {
            match op {
                Operator::Not => return Operation::not(self.evaluate(tokens, start + 1, end)?),
                Operator::Minus => {
                    return Operation::negate(self.evaluate(tokens, start + 1, end)?)
                }
                Operator::Plus => {
                    return Operation::identity(self.evaluate(tokens, start + 1, end)?)
                }
                _ => {}
            }
        }
        if tokens[start] == Token::LParen {
            if let Some(rparen) = matching_paren(tokens, start, end) {
                if rparen == end {
                    return self.evaluate(tokens, start + 1, end - 1);
                }
            }
        }
        if let Some(op_pos) = split_point(tokens, start, end) {
            let op = match tokens[op_pos] {
                Token::Operator(op) => op,
                _ => return Err(error!(SyntaxError)),
            };
            let lhs = self.evaluate(tokens, start, op_pos - 1)?;
            let rhs = self.evaluate(tokens, op_pos + 1, end)?;
            return Operation::binary(lhs, op, rhs);
        }
        Err(error!(SyntaxError; "INVALID EXPRESSION"))
    }

    fn single(&mut self, token: &Token) -> Result<Val> {
        match token {
            Token::Number(n) => Ok(Val::Number(*n)),
            Token::String(s) => Ok(Val::Text(s.clone())),
            Token::Variable(name) => self.vars.fetch(name),
            // RND is the only function callable without parentheses.
            Token::Function(Function::Rnd) => Builtin::call(Function::Rnd, vec![], self.rng),
            Token::Function(_) => Err(error!(SyntaxError; "FUNCTION NEEDS PARENTHESES")),
            Token::Error(s) => Err(error!(LexError; s)),
            _ => Err(error!(SyntaxError; "INVALID EXPRESSION TOKEN")),
        }
    }

    /// `interior` is the argument list between the parentheses,
    /// `[start, rparen)`. Arguments are split on top-level commas and
    /// evaluated left to right; the first failure propagates.
    fn call(&mut self, func: Function, tokens: &[Token], start: usize, rparen: usize) -> Result<Val> {
        let mut args: Vec<Val> = vec![];
        let mut arg_start = start;
        let mut depth = 0;
        for i in start..rparen {
            match tokens[i] {
                Token::LParen => depth += 1,
                Token::RParen => depth -= 1,
                Token::Comma if depth == 0 => {
                    args.push(self.evaluate(tokens, arg_start, i - 1)?);
                    arg_start = i + 1;
                }
                _ => {}
            }
        }
        // A trailing empty argument is tolerated, as in `ABS(1,)`.
        if arg_start < rparen {
            args.push(self.evaluate(tokens, arg_start, rparen - 1)?);
        }
        Builtin::call(func, args, self.rng)
    }
}

/// Index of the `)` matching the `(` at `lparen`, within `[lparen, end]`.
fn matching_paren(tokens: &[Token], lparen: usize, end: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, token) in tokens.iter().enumerate().take(end + 1).skip(lparen) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// The split point is the rightmost lowest-precedence binary operator at
/// paren depth zero, which yields left-associative grouping.
fn split_point(tokens: &[Token], start: usize, end: usize) -> Option<usize> {
    let mut depth = 0;
    let mut lowest = usize::max_value();
    let mut op_pos = None;
    for i in start..=end {
        match &tokens[i] {
            Token::LParen => depth += 1,
            Token::RParen => depth -= 1,
            Token::Operator(op) if depth == 0 => {
                let precedence = op.precedence();
                if precedence <= lowest {
                    lowest = precedence;
                    op_pos = Some(i);
                }
            }
            _ => {}
        }
    }
    op_pos
}
