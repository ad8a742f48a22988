use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// The universal runtime datum. A `Text` is always a valid, possibly
/// empty, owned string.
#[derive(Debug, PartialEq, Clone)]
pub enum Val {
    Number(f64),
    Text(String),
}

impl Val {
    pub fn is_number(&self) -> bool {
        matches!(self, Val::Number(_))
    }

    pub fn as_number(&self) -> Result<f64> {
        match self {
            Val::Number(n) => Ok(*n),
            Val::Text(_) => Err(error!(TypeError)),
        }
    }

    /// Numbers render with 6 significant digits, C `"%.6g"` style, which
    /// PRINT and STR$ share.
    pub fn number_to_string(n: f64) -> String {
        if n == 0.0 {
            return "0".to_string();
        }
        if n.is_nan() {
            return "NAN".to_string();
        }
        if n.is_infinite() {
            return if n < 0.0 { "-INF" } else { "INF" }.to_string();
        }
        // Round to 6 significant digits first; a carry into a new decade
        // as in 999999.5 changes which notation applies.
        let rounded = format!("{:.5e}", n);
        let (mantissa, exp) = match rounded.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (rounded.as_str(), 0),
        };
        if exp < -4 || exp >= 6 {
            let m = trim_zeros(mantissa.to_string());
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", m, sign, exp.abs())
        } else {
            let decimals = (5 - exp).max(0) as usize;
            trim_zeros(format!("{:.*}", decimals, n))
        }
    }
}

fn trim_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", Val::number_to_string(*n)),
            Val::Text(s) => write!(f, "{}", s),
        }
    }
}
