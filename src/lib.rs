//! # MINIBASIC
//!
//! A minimal line-numbered BASIC interpreter.
//!
//! Run the executable with no arguments for an interactive session:
//! ```text
//! MINIBASIC
//! READY.
//! ```
//! or pass a filename to run a stored program:
//! ```text
//! minibasic hello.bas
//! ```
//!
//! The [`lang`] module turns source text into tokens; the [`mach`]
//! module evaluates and executes them.

pub mod lang;
pub mod mach;
