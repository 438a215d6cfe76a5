use crate::Position;

/// Read position over a source buffer.
///
/// Advances one character at a time. Columns count characters, so a tab or
/// a multi-byte character each occupy a single column; a `'\n'` moves to
/// column 1 of the next line.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    position: Position,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Cursor<'src> {
        Cursor {
            source,
            position: Position::start(),
        }
    }

    /// The next unconsumed character, or `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Consumes one character and updates line/column bookkeeping.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;

        self.position.offset += ch.len_utf8();
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        Some(ch)
    }

    /// Position of the next unconsumed character.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.position.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    /// Advances until `offset` is reached. `offset` must lie on a character
    /// boundary at or after the current one.
    pub fn advance_to(&mut self, offset: usize) {
        while self.position.offset < offset {
            if self.advance().is_none() {
                break;
            }
        }
    }
}
