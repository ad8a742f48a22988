/*!
# Language Module

Lexical analysis of BASIC program lines: tokens, the tokenizer, and the
error type shared by the whole crate.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::parse_leading_number;
pub use lex::tokenize;
pub use line::Line;
pub use token::Function;
pub use token::Keyword;
pub use token::Operator;
pub use token::Token;

/// A leading line number, absent for immediate-mode statements.
pub type LineNumber = Option<u16>;

/// Longest accepted source line.
pub const MAX_LINE_LEN: usize = 512;

/// Most tokens emitted for one line.
pub const MAX_LINE_TOKENS: usize = 1000;

#[cfg(test)]
mod tests;
