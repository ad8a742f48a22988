use crate::lang::{tokenize, Error, ErrorCode};
use crate::mach::{Evaluator, Val, Var};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod eval_test;
mod val_test;

fn eval(vars: &Var, source: &str) -> Result<Val, Error> {
    let tokens = tokenize(source);
    let mut rng = StdRng::seed_from_u64(0);
    Evaluator::new(vars, &mut rng).evaluate(&tokens, 0, tokens.len().wrapping_sub(1))
}

fn number(source: &str) -> f64 {
    eval(&Var::new(), source).unwrap().as_number().unwrap()
}

fn text(source: &str) -> String {
    match eval(&Var::new(), source).unwrap() {
        Val::Text(s) => s,
        Val::Number(n) => panic!("expected text, got {}", n),
    }
}

fn code(source: &str) -> ErrorCode {
    eval(&Var::new(), source).unwrap_err().code()
}
