use crate::core::models::mutation::{LineRejection, MutationRecord};
use std::io::{self, BufRead, Lines};

/// Streams mutation records from a line-oriented reader.
///
/// Blank lines are skipped. Every other line yields either a record or the reason it
/// was rejected, paired with its 1-based line number; I/O failures end the stream.
pub struct MutationReader<R> {
    lines: Lines<R>,
    line_num: usize,
}

/// One non-blank input line after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub line_num: usize,
    pub outcome: Result<MutationRecord, LineRejection>,
}

impl<R: BufRead> MutationReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }

    /// Line number of the most recently read line.
    pub fn line_num(&self) -> usize {
        self.line_num
    }
}

impl<R: BufRead> Iterator for MutationReader<R> {
    type Item = io::Result<ParsedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            self.line_num += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(Ok(ParsedLine {
                line_num: self.line_num,
                outcome: MutationRecord::parse_line(&line),
            }));
        }
    }
}
