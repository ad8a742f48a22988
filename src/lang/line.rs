use super::token::Token;
use super::tokenize;

/// One stored program line. Immutable once stored; re-entering the same
/// number replaces the whole line.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: u16,
    text: String,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(number: u16, text: &str) -> Line {
        Line {
            number,
            text: text.to_string(),
            tokens: tokenize(text),
        }
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.text.trim())
    }
}
