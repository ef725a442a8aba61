//! Piece-table text buffer.
//!
//! Inserted text is copied once into an append-only chunk store and never
//! moved again; the document is the concatenation of the pieces in
//! [`PieceIndex`] order and is only ever read back through cursors.

pub mod chunk;
pub mod cursor;
pub mod element;
mod lines;
pub mod piece;


use tracing::trace;

use crate::error::BufferError;

pub use chunk::{ChunkId, ChunkStore};
pub use cursor::{Cursor, CursorMut, Elements, Position};
pub use element::Element;
pub use lines::Lines;
pub use piece::{Location, Piece, PieceIndex};

pub type TextBuffer = Buffer<u8>;
pub type U16TextBuffer = Buffer<u16>;
pub type U32TextBuffer = Buffer<u32>;
pub type CharTextBuffer = Buffer<char>;

/// Insert-only text buffer generic over its element type.
///
/// Any insertion takes `&mut self`, so every outstanding [`Cursor`] or
/// [`Elements`] range has to be dropped first and re-acquired afterwards.
#[derive(Debug, Clone)]
pub struct Buffer<T> {
    chunks: ChunkStore<T>,
    pieces: PieceIndex,
    /// Terminators currently in the document.
    terminators: usize,
}

impl<T: Element> Buffer<T> {
    pub fn new() -> Self {
        Self {
            chunks: ChunkStore::new(),
            pieces: PieceIndex::new(),
            terminators: 0,
        }
    }

    /// Create a buffer holding `text`.
    pub fn from_slice(text: &[T]) -> Result<Self, BufferError> {
        let mut buffer = Self::new();
        buffer.insert(0, text)?;
        Ok(buffer)
    }

    /// Insert `text` so that it starts at logical `position`.
    ///
    /// Positions at or past the end append. Inserting empty text changes
    /// nothing. On error the buffer is left as it was.
    pub fn insert(&mut self, position: usize, text: &[T]) -> Result<(), BufferError> {
        if text.is_empty() {
            return Ok(());
        }
        let chunk = ChunkStore::copy_chunk(text)?;
        self.insert_chunk(position, chunk)
    }

    /// Like [`Buffer::insert`], taking the elements from an iterator.
    pub fn insert_iter<I>(&mut self, position: usize, iter: I) -> Result<(), BufferError>
    where
        I: IntoIterator<Item = T>,
    {
        let chunk = ChunkStore::collect_chunk(iter)?;
        if chunk.is_empty() {
            return Ok(());
        }
        self.insert_chunk(position, chunk)
    }

    fn insert_chunk(&mut self, position: usize, chunk: Vec<T>) -> Result<(), BufferError> {
        let len = chunk.len();
        let terminators = element::count_terminators(&chunk);
        let location = self.pieces.locate(position);

        // Reserve everything before the first visible change.
        self.pieces.reserve_for_insert()?;
        let id = self.chunks.append(chunk)?;

        trace!(position, len, chunk = id, ?location, "insert");
        self.pieces.place(location, Piece::new(id, 0, len));
        self.terminators += terminators;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.pieces.total_len()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.count()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn pieces(&self) -> &[Piece] {
        self.pieces.as_slice()
    }

    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Position::default())
    }

    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.end_position())
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(
            self.pieces.as_slice(),
            &mut self.chunks,
            &mut self.terminators,
            Position::default(),
        )
    }

    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let end = self.end_position();
        CursorMut::new(
            self.pieces.as_slice(),
            &mut self.chunks,
            &mut self.terminators,
            end,
        )
    }

    /// All elements in document order.
    pub fn iter(&self) -> Elements<'_, T> {
        Elements::new(self.begin(), self.end())
    }

    /// Copy the document out into a contiguous vector.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.iter());
        out
    }

    fn end_position(&self) -> Position {
        Position::new(self.pieces.count(), 0)
    }
}

impl TextBuffer {
    pub fn insert_str(&mut self, position: usize, text: &str) -> Result<(), BufferError> {
        self.insert(position, text.as_bytes())
    }

    /// Decode the document as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.to_vec()).into_owned()
    }
}

impl U16TextBuffer {
    pub fn insert_str(&mut self, position: usize, text: &str) -> Result<(), BufferError> {
        self.insert_iter(position, text.encode_utf16())
    }
}

impl CharTextBuffer {
    pub fn insert_str(&mut self, position: usize, text: &str) -> Result<(), BufferError> {
        self.insert_iter(position, text.chars())
    }
}

impl<T: Element> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Element> IntoIterator for &'a Buffer<T> {
    type Item = T;
    type IntoIter = Elements<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
