/// One classified token of a source line. Delimiters get their own
/// variants; everything the scanner cannot finish becomes `Error` so the
/// fault surfaces when the token is reached, not while lexing.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Number(f64),
    String(String),
    Variable(String),
    Keyword(Keyword),
    Operator(Operator),
    Function(Function),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    Error(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(n) => write!(f, "{}", crate::mach::Val::Number(*n)),
            String(s) => write!(f, "\"{}\"", s),
            Variable(s) => write!(f, "{}", s),
            Keyword(w) => write!(f, "{}", w),
            Operator(op) => write!(f, "{}", op),
            Function(func) => write!(f, "{}", func),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
            Error(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword {
    Clear,
    Data,
    Def,
    Dim,
    Else,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    List,
    New,
    Next,
    On,
    Print,
    Read,
    Rem,
    Restore,
    Return,
    Run,
    Step,
    Stop,
    Then,
    To,
}

impl Keyword {
    pub fn from_str(s: &str) -> Option<Keyword> {
        use Keyword::*;
        match s.to_ascii_uppercase().as_str() {
            "CLEAR" => Some(Clear),
            "DATA" => Some(Data),
            "DEF" => Some(Def),
            "DIM" => Some(Dim),
            "ELSE" => Some(Else),
            "END" => Some(End),
            "FOR" => Some(For),
            "GOSUB" => Some(Gosub),
            "GOTO" => Some(Goto),
            "IF" => Some(If),
            "INPUT" => Some(Input),
            "LET" => Some(Let),
            "LIST" => Some(List),
            "NEW" => Some(New),
            "NEXT" => Some(Next),
            "ON" => Some(On),
            "PRINT" => Some(Print),
            "READ" => Some(Read),
            "REM" => Some(Rem),
            "RESTORE" => Some(Restore),
            "RETURN" => Some(Return),
            "RUN" => Some(Run),
            "STEP" => Some(Step),
            "STOP" => Some(Stop),
            "THEN" => Some(Then),
            "TO" => Some(To),
            _ => None,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Keyword::*;
        match self {
            Clear => write!(f, "CLEAR"),
            Data => write!(f, "DATA"),
            Def => write!(f, "DEF"),
            Dim => write!(f, "DIM"),
            Else => write!(f, "ELSE"),
            End => write!(f, "END"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            New => write!(f, "NEW"),
            Next => write!(f, "NEXT"),
            On => write!(f, "ON"),
            Print => write!(f, "PRINT"),
            Read => write!(f, "READ"),
            Rem => write!(f, "REM"),
            Restore => write!(f, "RESTORE"),
            Return => write!(f, "RETURN"),
            Run => write!(f, "RUN"),
            Step => write!(f, "STEP"),
            Stop => write!(f, "STOP"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Caret,
    Modulus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
    Not,
}

impl Operator {
    pub fn from_symbol(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "+" => Some(Plus),
            "-" => Some(Minus),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "^" => Some(Caret),
            "=" => Some(Equal),
            "<>" => Some(NotEqual),
            "<" => Some(Less),
            "<=" => Some(LessEqual),
            ">" => Some(Greater),
            ">=" => Some(GreaterEqual),
            _ => None,
        }
    }

    /// The word operators resolved from identifier runs.
    pub fn from_word(s: &str) -> Option<Operator> {
        use Operator::*;
        match s.to_ascii_uppercase().as_str() {
            "MOD" => Some(Modulus),
            "AND" => Some(And),
            "OR" => Some(Or),
            "NOT" => Some(Not),
            _ => None,
        }
    }

    /// Binary precedence, low to high. NOT is unary only; it keeps a slot
    /// so the range splitter never picks it over AND/OR.
    pub fn precedence(self) -> usize {
        use Operator::*;
        match self {
            Or => 1,
            And => 2,
            Not => 3,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => 4,
            Plus | Minus => 5,
            Multiply | Divide | Modulus => 6,
            Caret => 7,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Caret => write!(f, "^"),
            Modulus => write!(f, "MOD"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Not => write!(f, "NOT"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    Abs,
    Sin,
    Cos,
    Tan,
    Sqr,
    Int,
    Rnd,
    Len,
    Val,
    Str,
    Chr,
    Asc,
    Left,
    Right,
    Mid,
}

impl Function {
    pub fn from_str(s: &str) -> Option<Function> {
        use Function::*;
        match s.to_ascii_uppercase().as_str() {
            "ABS" => Some(Abs),
            "SIN" => Some(Sin),
            "COS" => Some(Cos),
            "TAN" => Some(Tan),
            "SQR" => Some(Sqr),
            "INT" => Some(Int),
            "RND" => Some(Rnd),
            "LEN" => Some(Len),
            "VAL" => Some(Val),
            "STR$" => Some(Str),
            "CHR$" => Some(Chr),
            "ASC" => Some(Asc),
            "LEFT$" => Some(Left),
            "RIGHT$" => Some(Right),
            "MID$" => Some(Mid),
            _ => None,
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Function::*;
        match self {
            Abs => write!(f, "ABS"),
            Sin => write!(f, "SIN"),
            Cos => write!(f, "COS"),
            Tan => write!(f, "TAN"),
            Sqr => write!(f, "SQR"),
            Int => write!(f, "INT"),
            Rnd => write!(f, "RND"),
            Len => write!(f, "LEN"),
            Val => write!(f, "VAL"),
            Str => write!(f, "STR$"),
            Chr => write!(f, "CHR$"),
            Asc => write!(f, "ASC"),
            Left => write!(f, "LEFT$"),
            Right => write!(f, "RIGHT$"),
            Mid => write!(f, "MID$"),
        }
    }
}
