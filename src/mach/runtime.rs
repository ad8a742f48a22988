use super::execute::{Executor, Flow, ForFrame, GosubFrame};
use super::{Program, Stack, Val, Var, MAX_STACK_DEPTH};
use crate::error;
use crate::lang::{Error, Line, Token};
use rand::rngs::StdRng;
use rand::SeedableRng;

type Result<T> = std::result::Result<T, Error>;

/// The external I/O collaborator for PRINT and INPUT. `input` returning
/// `None` means the input source is exhausted.
pub trait Console {
    fn print(&mut self, text: &str);
    fn input(&mut self, prompt: &str) -> Option<String>;
}

/// ## Interpreter state
///
/// One `Runtime` owns the whole interpreter: line table, variable
/// memory, both control stacks and the RNG. Strictly single-threaded;
/// the statement being executed is the only mutator.
pub struct Runtime {
    program: Program,
    vars: Var,
    for_stack: Stack<ForFrame>,
    gosub_stack: Stack<GosubFrame>,
    rng: StdRng,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime {
            program: Program::new(),
            vars: Var::new(),
            for_stack: Stack::new(MAX_STACK_DEPTH, "TOO MANY NESTED FOR", "NEXT WITHOUT FOR"),
            gosub_stack: Stack::new(
                MAX_STACK_DEPTH,
                "TOO MANY NESTED GOSUB",
                "RETURN WITHOUT GOSUB",
            ),
            rng: StdRng::from_entropy(),
        }
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Fresh state: empty program, empty variables, empty stacks.
    pub fn reset(&mut self) {
        self.program.clear();
        self.vars.clear();
        self.for_stack.clear();
        self.gosub_stack.clear();
    }

    /// Tokenizes and stores one numbered line, replacing any previous
    /// line with the same number. The table stays sorted by number.
    pub fn load_line(&mut self, number: u16, text: &str) -> Result<()> {
        self.program.store(Line::new(number, text))
    }

    /// Entering a bare line number deletes that line.
    pub fn remove_line(&mut self, number: u16) {
        self.program.remove(number);
    }

    pub fn clear_program(&mut self) {
        self.program.clear();
    }

    pub fn program_len(&self) -> usize {
        self.program.len()
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.program.lines()
    }

    /// Read-only snapshot of variable memory, sorted by name.
    pub fn variables(&self) -> Vec<(String, Val)> {
        self.vars.snapshot()
    }

    /// Runs the stored program from the first line to a terminal state.
    /// The first error aborts the run and carries its line number.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        self.for_stack.clear();
        self.gosub_stack.clear();
        let mut pc = 0;
        while pc < self.program.len() {
            let line = match self.program.get(pc) {
                Some(line) => line,
                None => break,
            };
            let number = line.number();
            let flow = Executor {
                program: &self.program,
                vars: &mut self.vars,
                for_stack: &mut self.for_stack,
                gosub_stack: &mut self.gosub_stack,
                rng: &mut self.rng,
                console,
                pc,
            }
            .statement(line.tokens(), 0)
            .map_err(|e| e.in_line_number(Some(number)))?;
            match flow {
                Flow::Next => pc += 1,
                Flow::Jump(index) => pc = index,
                Flow::Halt => break,
            }
        }
        Ok(())
    }

    /// Runs one statement outside the line table (direct mode). A jump
    /// makes no sense without a current line and is rejected.
    pub fn execute_immediate(&mut self, tokens: &[Token], console: &mut dyn Console) -> Result<()> {
        let flow = Executor {
            program: &self.program,
            vars: &mut self.vars,
            for_stack: &mut self.for_stack,
            gosub_stack: &mut self.gosub_stack,
            rng: &mut self.rng,
            console,
            pc: 0,
        }
        .statement(tokens, 0)?;
        match flow {
            Flow::Jump(_) => Err(error!(SyntaxError; "ILLEGAL DIRECT")),
            _ => Ok(()),
        }
    }
}
