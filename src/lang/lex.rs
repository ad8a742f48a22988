use super::token::*;
use super::{LineNumber, MAX_LINE_LEN, MAX_LINE_TOKENS};

/// Splits an optional leading line number off `s` and tokenizes the rest.
/// A line with no leading digits gets `None` and is an immediate-mode
/// statement for the caller to run, not store.
pub fn lex(s: &str) -> (LineNumber, Vec<Token>) {
    let t = s.trim_start();
    let digits = t.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        if let Ok(number) = t[..digits].parse::<u16>() {
            return (Some(number), tokenize(&t[digits..]));
        }
        // Numeric overflow: lex as a statement so the error is visible.
    }
    (None, tokenize(t))
}

/// Tokenizes one line of source text. Total and terminating for any finite
/// input; unknown characters are skipped, never errors.
pub fn tokenize(s: &str) -> Vec<Token> {
    if s.len() > MAX_LINE_LEN {
        return vec![Token::Error(format!("LINE EXCEEDS {} CHARACTERS", MAX_LINE_LEN))];
    }
    Lexer {
        chars: s.chars().peekable(),
    }
    .take(MAX_LINE_TOKENS)
    .collect()
}

/// Leading numeric prefix of `s` as in C `atof`: `"1.2.3"` is 1.2 and
/// unparsable input is 0. Shared by the number scanner and `VAL`.
pub fn parse_leading_number(s: &str) -> f64 {
    let s = s.trim_start();
    let mut value = 0.0;
    for end in s
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain(std::iter::once(s.len()))
    {
        if let Ok(v) = s[..end].parse::<f64>() {
            value = v;
        }
    }
    value
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '$' || c == '_'
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pk = *self.chars.peek()?;
            if pk.is_whitespace() {
                self.chars.next();
                continue;
            }
            if pk.is_ascii_digit() || pk == '.' {
                match self.number() {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }
            if pk == '"' {
                return Some(self.string());
            }
            if pk == '<' || pk == '>' {
                return Some(self.comparison());
            }
            if let Some(token) = Self::single_char(pk) {
                self.chars.next();
                return Some(token);
            }
            if pk.is_ascii_alphabetic() {
                match self.alphabetic() {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }
            // Anything else is skipped, not emitted.
            self.chars.next();
        }
    }
}

impl<'a> Lexer<'a> {
    /// Maximal run of digits and dots. A lone dot is not a number and is
    /// dropped like any other unknown character.
    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        if let Some('.') = self.chars.peek() {
            self.chars.next();
            match self.chars.peek() {
                Some(c) if c.is_ascii_digit() => s.push('.'),
                _ => return None,
            }
        }
        while let Some(&c) = self.chars.peek() {
            if c.is_ascii_digit() || c == '.' {
                s.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        Some(Token::Number(parse_leading_number(&s)))
    }

    /// An unterminated string becomes an `Error` token whose text is the
    /// diagnostic the executor will report.
    fn string(&mut self) -> Token {
        let mut s = String::new();
        self.chars.next();
        loop {
            match self.chars.next() {
                None => return Token::Error(format!("UNTERMINATED STRING: {}", s)),
                Some('"') => return Token::String(s),
                Some('\\') => match self.chars.next() {
                    None => {
                        s.push('\\');
                        return Token::Error(format!("UNTERMINATED STRING: {}", s));
                    }
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some('r') => s.push('\r'),
                    Some('\\') => s.push('\\'),
                    Some('"') => s.push('"'),
                    Some('\'') => s.push('\''),
                    Some(other) => {
                        s.push('\\');
                        s.push(other);
                    }
                },
                Some(c) => s.push(c),
            }
        }
    }

    /// `<` and `>` may pair with a following `=` or `>`; two-character
    /// operators match before single ones.
    fn comparison(&mut self) -> Token {
        let first = self.chars.next().unwrap_or('<');
        let op = match (first, self.chars.peek()) {
            ('<', Some('=')) => {
                self.chars.next();
                Operator::LessEqual
            }
            ('<', Some('>')) => {
                self.chars.next();
                Operator::NotEqual
            }
            ('>', Some('=')) => {
                self.chars.next();
                Operator::GreaterEqual
            }
            ('<', _) => Operator::Less,
            _ => Operator::Greater,
        };
        Token::Operator(op)
    }

    fn single_char(c: char) -> Option<Token> {
        match c {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            ',' => Some(Token::Comma),
            ':' => Some(Token::Colon),
            ';' => Some(Token::Semicolon),
            _ => Operator::from_symbol(&c.to_string()).map(Token::Operator),
        }
    }

    /// Letter-initial run resolved keyword first, then word operator, then
    /// function, else variable. Runs of 32 or more characters are silently
    /// dropped.
    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(&c) = self.chars.peek() {
            if is_ident_char(c) {
                s.push(c.to_ascii_uppercase());
                self.chars.next();
            } else {
                break;
            }
        }
        if s.len() >= 32 {
            return None;
        }
        if let Some(word) = Keyword::from_str(&s) {
            return Some(Token::Keyword(word));
        }
        if let Some(op) = Operator::from_word(&s) {
            return Some(Token::Operator(op));
        }
        if let Some(func) = Function::from_str(&s) {
            return Some(Token::Function(func));
        }
        Some(Token::Variable(s))
    }
}
