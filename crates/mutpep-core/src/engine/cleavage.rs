/// Whether lowercase letters count as cleavage residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Only the uppercase residues cleave; the lowercase mutation marker never does.
    Sensitive,
    /// Both cases cleave.
    Insensitive,
}

/// A fragment produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cleaved<'a> {
    pub text: &'a str,
    /// Character offset of the fragment within the scanned text.
    pub start: usize,
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    /// Collecting non-cleavage characters; holds the byte and character start of the run.
    Accumulating(Option<(usize, usize)>),
    /// A run was closed; emit it and start over.
    EmitBoundary { from: usize, to: usize, start: usize },
}

/// Splits text into maximal runs of non-cleavage characters, each closed by the next
/// cleavage residue (included in the fragment) or by the end of the text.
///
/// A run needs at least one non-cleavage character: a cleavage residue that follows
/// another one, or that opens the text, belongs to no fragment.
#[derive(Debug, Clone)]
pub struct CleavageScanner<'a> {
    text: &'a str,
    residues: &'a [char],
    mode: CaseMode,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> CleavageScanner<'a> {
    pub fn new(text: &'a str, residues: &'a [char], mode: CaseMode) -> Self {
        Self {
            text,
            residues,
            mode,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    fn is_cleavage(&self, c: char) -> bool {
        match self.mode {
            CaseMode::Sensitive => self.residues.contains(&c),
            CaseMode::Insensitive => self.residues.contains(&c.to_ascii_uppercase()),
        }
    }
}

impl<'a> Iterator for CleavageScanner<'a> {
    type Item = Cleaved<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut state = ScanState::Accumulating(None);

        loop {
            match state {
                ScanState::Accumulating(run) => {
                    let Some(c) = self.text[self.byte_pos..].chars().next() else {
                        let (from, start) = run?;
                        state = ScanState::EmitBoundary {
                            from,
                            to: self.text.len(),
                            start,
                        };
                        continue;
                    };

                    let here = (self.byte_pos, self.char_pos);
                    self.byte_pos += c.len_utf8();
                    self.char_pos += 1;

                    state = match (self.is_cleavage(c), run) {
                        (true, Some((from, start))) => ScanState::EmitBoundary {
                            from,
                            to: self.byte_pos,
                            start,
                        },
                        (true, None) => ScanState::Accumulating(None),
                        (false, None) => ScanState::Accumulating(Some(here)),
                        (false, Some(_)) => ScanState::Accumulating(run),
                    };
                }
                ScanState::EmitBoundary { from, to, start } => {
                    return Some(Cleaved {
                        text: &self.text[from..to],
                        start,
                    });
                }
            }
        }
    }
}

/// Convenience wrapper collecting the fragment texts.
pub fn cleave<'a>(text: &'a str, residues: &'a [char], mode: CaseMode) -> Vec<&'a str> {
    CleavageScanner::new(text, residues, mode)
        .map(|fragment| fragment.text)
        .collect()
}
