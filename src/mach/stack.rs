use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Depth-limited stack
///
/// Push past capacity and pop from empty both fail with a StackError
/// instead of growing without bound or panicking.
pub struct Stack<T> {
    overflow_message: &'static str,
    underflow_message: &'static str,
    max_depth: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(
        max_depth: usize,
        overflow_message: &'static str,
        underflow_message: &'static str,
    ) -> Stack<T> {
        Stack {
            overflow_message,
            underflow_message,
            max_depth,
            vec: vec![],
        }
    }

    pub fn clear(&mut self) {
        self.vec.clear()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_depth {
            return Err(error!(StackError; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(error!(StackError; self.underflow_message)),
        }
    }

    pub fn last(&self) -> Result<&T> {
        match self.vec.last() {
            Some(v) => Ok(v),
            None => Err(error!(StackError; self.underflow_message)),
        }
    }
}
