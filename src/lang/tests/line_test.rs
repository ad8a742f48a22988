use crate::lang::{Keyword, Line, Token};

#[test]
fn test_line_holds_number_text_tokens() {
    let line = Line::new(10, " PRINT 1");
    assert_eq!(line.number(), 10);
    assert_eq!(line.tokens()[0], Token::Keyword(Keyword::Print));
    assert_eq!(line.to_string(), "10 PRINT 1");
}
