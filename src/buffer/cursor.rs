use std::fmt;
use std::iter::FusedIterator;

use super::chunk::ChunkStore;
use super::element::Element;
use super::piece::Piece;
use super::Buffer;

/// Logical position in the buffer: a piece and an offset inside it.
///
/// The end sentinel is `piece == piece_count`, `offset == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub piece: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(piece: usize, offset: usize) -> Self {
        Self { piece, offset }
    }

    /// Move one element forward.
    ///
    /// # Panics
    ///
    /// If the position is already the end sentinel.
    pub fn advance(&mut self, pieces: &[Piece]) {
        assert!(
            self.piece < pieces.len(),
            "cannot advance a cursor past the end of the buffer"
        );
        self.offset += 1;
        if self.offset == pieces[self.piece].len {
            self.piece += 1;
            self.offset = 0;
        }
    }

    /// Move one element backward.
    ///
    /// # Panics
    ///
    /// If the position is the beginning of the buffer.
    pub fn retreat(&mut self, pieces: &[Piece]) {
        assert!(
            self.piece > 0 || self.offset > 0,
            "cannot retreat a cursor past the beginning of the buffer"
        );
        if self.offset == 0 {
            self.piece -= 1;
            self.offset = pieces[self.piece].len;
        }
        self.offset -= 1;
    }

    fn resolve<T: Copy>(self, pieces: &[Piece], chunks: &ChunkStore<T>) -> Option<T> {
        let piece = pieces.get(self.piece)?;
        chunks
            .get(piece.chunk)
            .and_then(|chunk| chunk.get(piece.start + self.offset))
            .copied()
    }
}

/// Read-only bidirectional cursor over a [`Buffer`].
///
/// Borrows the buffer, so no cursor can outlive an insertion.
pub struct Cursor<'a, T> {
    buffer: &'a Buffer<T>,
    pos: Position,
}

impl<'a, T: Element> Cursor<'a, T> {
    pub(crate) fn new(buffer: &'a Buffer<T>, pos: Position) -> Self {
        Self { buffer, pos }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Element under the cursor, `None` at the end.
    pub fn value(&self) -> Option<T> {
        self.pos.resolve(self.buffer.pieces.as_slice(), &self.buffer.chunks)
    }

    pub fn is_begin(&self) -> bool {
        self.pos == Position::default()
    }

    pub fn is_end(&self) -> bool {
        self.pos.piece == self.buffer.pieces.count()
    }

    /// # Panics
    ///
    /// If the cursor is at the end.
    pub fn advance(&mut self) -> &mut Self {
        self.pos.advance(self.buffer.pieces.as_slice());
        self
    }

    /// Advance, returning the cursor as it was before moving.
    pub fn fetch_advance(&mut self) -> Self {
        let before = *self;
        self.advance();
        before
    }

    /// # Panics
    ///
    /// If the cursor is at the beginning.
    pub fn retreat(&mut self) -> &mut Self {
        self.pos.retreat(self.buffer.pieces.as_slice());
        self
    }

    /// Retreat, returning the cursor as it was before moving.
    pub fn fetch_retreat(&mut self) -> Self {
        let before = *self;
        self.retreat();
        before
    }

    /// Move forward until `pred` matches the current element or the end is reached.
    pub(crate) fn seek(&mut self, mut pred: impl FnMut(T) -> bool) {
        while let Some(value) = self.value() {
            if pred(value) {
                break;
            }
            self.advance();
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("pos", &self.pos).finish()
    }
}

/// Cursor that may overwrite the element under it.
///
/// Never changes the piece layout. Writes go through [`CursorMut::set`] so
/// the buffer's terminator count follows the overwritten element.
pub struct CursorMut<'a, T> {
    pieces: &'a [Piece],
    chunks: &'a mut ChunkStore<T>,
    terminators: &'a mut usize,
    pos: Position,
}

impl<'a, T: Element> CursorMut<'a, T> {
    pub(crate) fn new(
        pieces: &'a [Piece],
        chunks: &'a mut ChunkStore<T>,
        terminators: &'a mut usize,
        pos: Position,
    ) -> Self {
        Self {
            pieces,
            chunks,
            terminators,
            pos,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn value(&self) -> Option<T> {
        self.pos.resolve(self.pieces, &*self.chunks)
    }

    /// Overwrite the element under the cursor, returning the old one.
    ///
    /// # Panics
    ///
    /// If the cursor is at the end.
    pub fn set(&mut self, value: T) -> T {
        let Some(piece) = self.pieces.get(self.pos.piece) else {
            panic!("cannot write through a cursor at the end of the buffer");
        };
        let Some(slot) = self
            .chunks
            .element_mut(piece.chunk, piece.start + self.pos.offset)
        else {
            panic!("cannot write through a cursor at the end of the buffer");
        };
        let old = std::mem::replace(slot, value);
        match (old.is_terminator(), value.is_terminator()) {
            (true, false) => *self.terminators -= 1,
            (false, true) => *self.terminators += 1,
            _ => {}
        }
        old
    }

    pub fn is_end(&self) -> bool {
        self.pos.piece == self.pieces.len()
    }

    pub fn advance(&mut self) -> &mut Self {
        self.pos.advance(self.pieces);
        self
    }

    /// Advance, returning the position before moving.
    pub fn fetch_advance(&mut self) -> Position {
        let before = self.pos;
        self.advance();
        before
    }

    pub fn retreat(&mut self) -> &mut Self {
        self.pos.retreat(self.pieces);
        self
    }

    /// Retreat, returning the position before moving.
    pub fn fetch_retreat(&mut self) -> Position {
        let before = self.pos;
        self.retreat();
        before
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("pos", &self.pos).finish()
    }
}

/// The elements between two cursors, `[front, back)`.
///
/// Iterates from either end without copying the document.
pub struct Elements<'a, T> {
    front: Cursor<'a, T>,
    back: Cursor<'a, T>,
}

impl<'a, T: Element> Elements<'a, T> {
    pub(crate) fn new(front: Cursor<'a, T>, back: Cursor<'a, T>) -> Self {
        Self { front, back }
    }

    /// Cursor at the first remaining element.
    pub fn start(&self) -> Cursor<'a, T> {
        self.front
    }

    /// Cursor one past the last remaining element.
    pub fn end(&self) -> Cursor<'a, T> {
        self.back
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }
}

impl<T: Element> Iterator for Elements<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let value = self.front.value();
        self.front.advance();
        value
    }
}

impl<T: Element> DoubleEndedIterator for Elements<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        self.back.value()
    }
}

impl<T: Element> FusedIterator for Elements<'_, T> {}

impl<T> Clone for Elements<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Elements")
            .field("front", &self.front.pos)
            .field("back", &self.back.pos)
            .finish()
    }
}
