/*!
## Machine Module

Runtime for BASIC: values, variable memory, the program line table, the
expression evaluator and the statement executor.

*/

mod eval;
mod execute;
mod function;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use eval::Evaluator;
pub use execute::Executor;
pub use execute::Flow;
pub use program::Program;
pub use runtime::Console;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;

/// Depth limit shared by the FOR and GOSUB stacks.
pub const MAX_STACK_DEPTH: usize = 100;

#[cfg(test)]
mod tests;
