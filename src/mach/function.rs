use super::Val;
use crate::error;
use crate::lang::{parse_leading_number, Error, Function};
use rand::rngs::StdRng;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// ## Built-in functions
///
/// Each arm enforces its own arity and argument types; range faults
/// (negative SQR, CHR$ outside a byte, ASC of "") are RangeErrors.
pub struct Builtin {}

impl Builtin {
    pub fn call(func: Function, args: Vec<Val>, rng: &mut StdRng) -> Result<Val> {
        match func {
            Function::Abs => Ok(Val::Number(Builtin::numeric(&args)?.abs())),
            Function::Sin => Ok(Val::Number(Builtin::numeric(&args)?.sin())),
            Function::Cos => Ok(Val::Number(Builtin::numeric(&args)?.cos())),
            Function::Tan => Ok(Val::Number(Builtin::numeric(&args)?.tan())),
            Function::Int => Ok(Val::Number(Builtin::numeric(&args)?.floor())),
            Function::Sqr => {
                let n = Builtin::numeric(&args)?;
                if n < 0.0 {
                    Err(error!(RangeError; "SQR OF NEGATIVE NUMBER"))
                } else {
                    Ok(Val::Number(n.sqrt()))
                }
            }
            Function::Rnd => Builtin::rnd(&args, rng),
            Function::Len => Ok(Val::Number(Builtin::text(&args)?.len() as f64)),
            Function::Val => Ok(Val::Number(parse_leading_number(Builtin::text(&args)?))),
            Function::Str => Ok(Val::Text(Val::number_to_string(Builtin::numeric(&args)?))),
            Function::Chr => {
                let n = Builtin::numeric(&args)?;
                if !(0.0..=255.0).contains(&n) {
                    Err(error!(RangeError; "CHR$ ARGUMENT OUT OF RANGE"))
                } else {
                    Ok(Val::Text(char::from(n as u8).to_string()))
                }
            }
            Function::Asc => match Builtin::text(&args)?.bytes().next() {
                Some(byte) => Ok(Val::Number(f64::from(byte))),
                None => Err(error!(RangeError; "ASC OF EMPTY STRING")),
            },
            Function::Left | Function::Right | Function::Mid => {
                Err(error!(Unsupported; "FUNCTION NOT IMPLEMENTED"))
            }
        }
    }

    /// RND is uniform over [0,1), or [0,arg) for a positive argument.
    fn rnd(args: &[Val], rng: &mut StdRng) -> Result<Val> {
        let sample: f64 = rng.gen();
        match args {
            [] => Ok(Val::Number(sample)),
            [Val::Number(n)] if *n > 0.0 => Ok(Val::Number(sample * n)),
            [Val::Number(_)] => Ok(Val::Number(sample)),
            [Val::Text(_)] => Err(error!(TypeError; "RND NEEDS A NUMERIC ARGUMENT")),
            _ => Err(error!(TypeError; "RND TAKES AT MOST ONE ARGUMENT")),
        }
    }

    fn numeric(args: &[Val]) -> Result<f64> {
        match args {
            [Val::Number(n)] => Ok(*n),
            [Val::Text(_)] => Err(error!(TypeError; "EXPECTED A NUMERIC ARGUMENT")),
            _ => Err(error!(TypeError; "FUNCTION TAKES ONE ARGUMENT")),
        }
    }

    fn text(args: &[Val]) -> Result<&str> {
        match args {
            [Val::Text(s)] => Ok(s),
            [Val::Number(_)] => Err(error!(TypeError; "EXPECTED A STRING ARGUMENT")),
            _ => Err(error!(TypeError; "FUNCTION TAKES ONE ARGUMENT")),
        }
    }
}
