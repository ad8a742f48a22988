use super::runtime::Console;
use super::{Evaluator, Program, Stack, Val, Var};
use crate::error;
use crate::lang::{Error, Keyword, Operator, Token};
use rand::rngs::StdRng;

type Result<T> = std::result::Result<T, Error>;

/// What the run loop does after a statement: fall through to the next
/// line, jump to a line index, or halt the program.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Flow {
    Next,
    Jump(usize),
    Halt,
}

/// An active FOR loop. Limit and step are fixed at entry and never
/// re-evaluated; `resume` is the index of the line after the FOR.
#[derive(Debug, Clone)]
pub struct ForFrame {
    pub variable: String,
    pub limit: f64,
    pub step: f64,
    pub resume: usize,
}

/// A pending subroutine return: the index of the line after the GOSUB.
#[derive(Debug, Clone, Copy)]
pub struct GosubFrame {
    pub resume: usize,
}

/// ## Statement executor
///
/// Borrows the interpreter state for the duration of one statement and
/// dispatches on the statement's leading token.
pub struct Executor<'a> {
    pub program: &'a Program,
    pub vars: &'a mut Var,
    pub for_stack: &'a mut Stack<ForFrame>,
    pub gosub_stack: &'a mut Stack<GosubFrame>,
    pub rng: &'a mut StdRng,
    pub console: &'a mut dyn Console,
    /// Index of the line being executed; `resume` fields derive from it.
    pub pc: usize,
}

impl<'a> Executor<'a> {
    pub fn statement(&mut self, tokens: &[Token], start: usize) -> Result<Flow> {
        let token = match tokens.get(start) {
            None => return Ok(Flow::Next),
            Some(token) => token,
        };
        match token {
            Token::Keyword(Keyword::Print) => self.print(tokens, start + 1),
            Token::Keyword(Keyword::Let) => self.assign(tokens, start + 1),
            Token::Variable(_) => self.assign(tokens, start),
            Token::Keyword(Keyword::Input) => self.input(tokens, start + 1),
            Token::Keyword(Keyword::If) => self.branch(tokens, start + 1),
            Token::Keyword(Keyword::For) => self.for_loop(tokens, start + 1),
            Token::Keyword(Keyword::Next) => self.next_loop(),
            Token::Keyword(Keyword::Goto) => Ok(Flow::Jump(self.line_target(tokens, start + 1)?)),
            Token::Keyword(Keyword::Gosub) => self.gosub(tokens, start + 1),
            Token::Keyword(Keyword::Return) => {
                Ok(Flow::Jump(self.gosub_stack.pop()?.resume))
            }
            Token::Keyword(Keyword::End) | Token::Keyword(Keyword::Stop) => Ok(Flow::Halt),
            Token::Keyword(Keyword::Rem) => Ok(Flow::Next),
            Token::Keyword(Keyword::Then)
            | Token::Keyword(Keyword::To)
            | Token::Keyword(Keyword::Step) => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
            Token::Keyword(_) => Err(error!(Unsupported; "STATEMENT NOT IMPLEMENTED")),
            Token::Error(s) => Err(error!(LexError; s)),
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn evaluator(&mut self) -> Evaluator<'_> {
        Evaluator::new(self.vars, self.rng)
    }

    /// PRINT splits its tail at top-level `,` and `;`. A comma emits a
    /// tab after the value, a semicolon nothing; the statement always
    /// ends with one newline.
    fn print(&mut self, tokens: &[Token], start: usize) -> Result<Flow> {
        let mut out = String::new();
        let mut i = start;
        while i < tokens.len() {
            let mut depth = 0;
            let mut seg_end = i;
            while seg_end < tokens.len() {
                match tokens[seg_end] {
                    Token::LParen => depth += 1,
                    Token::RParen => depth -= 1,
                    Token::Comma | Token::Semicolon if depth == 0 => break,
                    _ => {}
                }
                seg_end += 1;
            }
            if seg_end > i {
                let val = self.evaluator().evaluate(tokens, i, seg_end - 1)?;
                out.push_str(&val.to_string());
            }
            match tokens.get(seg_end) {
                Some(Token::Comma) => out.push('\t'),
                Some(Token::Semicolon) => {}
                _ => break,
            }
            i = seg_end + 1;
        }
        out.push('\n');
        self.console.print(&out);
        Ok(Flow::Next)
    }

    /// LET, explicit or implicit: a Variable token, `=`, then the
    /// right-hand expression over the rest of the statement.
    fn assign(&mut self, tokens: &[Token], start: usize) -> Result<Flow> {
        let name = match tokens.get(start) {
            Some(Token::Variable(name)) => name.clone(),
            _ => return Err(error!(SyntaxError; "EXPECTED A VARIABLE")),
        };
        if tokens.get(start + 1) != Some(&Token::Operator(Operator::Equal)) {
            return Err(error!(SyntaxError; "EXPECTED = IN ASSIGNMENT"));
        }
        let value = self
            .evaluator()
            .evaluate(tokens, start + 2, tokens.len() - 1)?;
        self.vars.store(&name, value)?;
        Ok(Flow::Next)
    }

    /// INPUT [prompt-string [;]] variable. A reply that parses fully as
    /// a number binds a Number, anything else binds the raw Text.
    /// End of input leaves the variable unbound.
    fn input(&mut self, tokens: &[Token], start: usize) -> Result<Flow> {
        let mut var_start = start;
        if let Some(Token::String(prompt)) = tokens.get(start) {
            self.console.print(prompt);
            var_start += 1;
            if tokens.get(var_start) == Some(&Token::Semicolon) {
                var_start += 1;
            }
        }
        let name = match tokens.get(var_start) {
            Some(Token::Variable(name)) => name.clone(),
            _ => return Err(error!(SyntaxError; "INPUT NEEDS A VARIABLE")),
        };
        let reply = match self.console.input("? ") {
            Some(reply) => reply,
            None => return Ok(Flow::Next),
        };
        let parsed = reply.trim().parse::<f64>();
        let value = match parsed {
            Ok(n) => Val::Number(n),
            Err(_) => Val::Text(reply),
        };
        self.vars.store(&name, value)?;
        Ok(Flow::Next)
    }

    /// IF condition THEN statement, where a bare line number after THEN
    /// is a GOTO. Truth is numeric and nonzero. No ELSE.
    fn branch(&mut self, tokens: &[Token], start: usize) -> Result<Flow> {
        let then_pos = tokens[start..]
            .iter()
            .position(|t| *t == Token::Keyword(Keyword::Then))
            .map(|i| i + start)
            .ok_or_else(|| error!(SyntaxError; "IF WITHOUT THEN"))?;
        let condition = self.evaluator().evaluate(tokens, start, then_pos - 1)?;
        let is_true = match condition {
            Val::Number(n) => n != 0.0,
            Val::Text(_) => false,
        };
        if !is_true || then_pos + 1 >= tokens.len() {
            return Ok(Flow::Next);
        }
        if let Token::Number(_) = tokens[then_pos + 1] {
            return Ok(Flow::Jump(self.line_target(tokens, then_pos + 1)?));
        }
        self.statement(tokens, then_pos + 1)
    }

    /// FOR var = start TO limit [STEP step]. The variable is bound to
    /// the start value and a frame is pushed; NEXT does the rest.
    fn for_loop(&mut self, tokens: &[Token], start: usize) -> Result<Flow> {
        let name = match tokens.get(start) {
            Some(Token::Variable(name)) => name.clone(),
            _ => return Err(error!(SyntaxError; "EXPECTED A LOOP VARIABLE")),
        };
        if tokens.get(start + 1) != Some(&Token::Operator(Operator::Equal)) {
            return Err(error!(SyntaxError; "EXPECTED = IN FOR"));
        }
        let to_pos = tokens[start..]
            .iter()
            .position(|t| *t == Token::Keyword(Keyword::To))
            .map(|i| i + start)
            .ok_or_else(|| error!(SyntaxError; "FOR WITHOUT TO"))?;
        let step_pos = tokens[to_pos..]
            .iter()
            .position(|t| *t == Token::Keyword(Keyword::Step))
            .map(|i| i + to_pos);
        let last = tokens.len() - 1;
        let from = self
            .evaluator()
            .evaluate(tokens, start + 2, to_pos - 1)?
            .as_number()
            .map_err(|e| e.message("FOR NEEDS A NUMERIC START"))?;
        let limit_end = match step_pos {
            Some(p) => p - 1,
            None => last,
        };
        let limit = self
            .evaluator()
            .evaluate(tokens, to_pos + 1, limit_end)?
            .as_number()
            .map_err(|e| e.message("FOR NEEDS A NUMERIC LIMIT"))?;
        let step = match step_pos {
            Some(p) => self
                .evaluator()
                .evaluate(tokens, p + 1, last)?
                .as_number()
                .map_err(|e| e.message("FOR NEEDS A NUMERIC STEP"))?,
            None => 1.0,
        };
        self.vars.store(&name, Val::Number(from))?;
        self.for_stack.push(ForFrame {
            variable: name,
            limit,
            step,
            resume: self.pc + 1,
        })?;
        Ok(Flow::Next)
    }

    /// NEXT increments the top frame's variable by its step and loops
    /// back while the limit allows; otherwise the frame is popped.
    fn next_loop(&mut self) -> Result<Flow> {
        let frame = self.for_stack.last()?.clone();
        let value = self
            .vars
            .fetch(&frame.variable)?
            .as_number()
            .map_err(|e| e.message("LOOP VARIABLE IS NOT NUMERIC"))?
            + frame.step;
        self.vars.store(&frame.variable, Val::Number(value))?;
        let continues = if frame.step > 0.0 {
            value <= frame.limit
        } else {
            value >= frame.limit
        };
        if continues {
            Ok(Flow::Jump(frame.resume))
        } else {
            self.for_stack.pop()?;
            Ok(Flow::Next)
        }
    }

    fn gosub(&mut self, tokens: &[Token], start: usize) -> Result<Flow> {
        self.gosub_stack.push(GosubFrame {
            resume: self.pc + 1,
        })?;
        Ok(Flow::Jump(self.line_target(tokens, start)?))
    }

    /// Resolves a literal line-number token to a line index.
    fn line_target(&self, tokens: &[Token], at: usize) -> Result<usize> {
        let number = match tokens.get(at) {
            Some(Token::Number(n)) => *n,
            _ => return Err(error!(SyntaxError; "EXPECTED A LINE NUMBER")),
        };
        if number < 0.0 || number > f64::from(u16::max_value()) {
            return Err(error!(NameError; "UNDEFINED LINE"));
        }
        self.program.find(number as u16)
    }
}
