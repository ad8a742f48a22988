use crate::error;
use crate::lang::{Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// ## Program line table
///
/// Lines are kept sorted by strictly unique ascending number, so the
/// execution cursor is a plain index into the table and jump targets
/// resolve by binary search.
#[derive(Debug, Default)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub const MAX_LINES: usize = 10000;

    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Stores a line, replacing any line with the same number.
    pub fn store(&mut self, line: Line) -> Result<()> {
        match self.lines.binary_search_by_key(&line.number(), Line::number) {
            Ok(index) => self.lines[index] = line,
            Err(index) => {
                if self.lines.len() >= Program::MAX_LINES {
                    return Err(error!(CapacityError; "TOO MANY LINES"));
                }
                self.lines.insert(index, line);
            }
        }
        Ok(())
    }

    /// Removes the line with this number, if present.
    pub fn remove(&mut self, number: u16) {
        if let Ok(index) = self.lines.binary_search_by_key(&number, Line::number) {
            self.lines.remove(index);
        }
    }

    /// Index of the line with this number, for GOTO/GOSUB targets.
    pub fn find(&self, number: u16) -> Result<usize> {
        self.lines
            .binary_search_by_key(&number, Line::number)
            .map_err(|_| error!(NameError; "UNDEFINED LINE"))
    }
}
