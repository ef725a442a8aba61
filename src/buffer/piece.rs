use super::chunk::ChunkId;
use crate::error::BufferError;

/// A view of `[start, start + len)` inside one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub chunk: ChunkId,
    pub start: usize,
    pub len: usize,
}

impl Piece {
    pub fn new(chunk: ChunkId, start: usize, len: usize) -> Self {
        Self { chunk, start, len }
    }
}

/// Where an insertion at a logical position lands in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Past the last element (or the index is empty).
    Append,
    /// Exactly on the boundary in front of piece `index`.
    Before(usize),
    /// Strictly inside piece `index`, `at` elements from its start.
    Split { index: usize, at: usize },
}

/// Ordered pieces whose concatenation is the document.
///
/// Invariants: no committed piece has zero length, and `len` is the sum of
/// all piece lengths.
#[derive(Debug, Clone, Default)]
pub struct PieceIndex {
    pieces: Vec<Piece>,
    len: usize,
}

impl PieceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the piece containing `position`.
    ///
    /// Linear in the number of pieces. The first piece with
    /// `running <= position < running + piece.len` wins, so a position on a
    /// boundary resolves to the following piece rather than splitting the
    /// preceding one.
    pub fn locate(&self, position: usize) -> Location {
        let mut running = 0;
        for (index, piece) in self.pieces.iter().enumerate() {
            if position < running + piece.len {
                let at = position - running;
                return if at == 0 {
                    Location::Before(index)
                } else {
                    Location::Split { index, at }
                };
            }
            running += piece.len;
        }
        Location::Append
    }

    /// Reserve room for the pieces one [`PieceIndex::place`] can add.
    pub fn reserve_for_insert(&mut self) -> Result<(), BufferError> {
        self.pieces
            .try_reserve(2)
            .map_err(|e| BufferError::allocation(2, e))
    }

    /// Commit `piece` at `location`.
    ///
    /// Does not allocate after [`PieceIndex::reserve_for_insert`].
    pub fn place(&mut self, location: Location, piece: Piece) {
        debug_assert!(piece.len > 0, "zero-length pieces are never committed");
        match location {
            Location::Append => self.pieces.push(piece),
            Location::Before(index) => self.pieces.insert(index, piece),
            Location::Split { index, at } => {
                let target = &mut self.pieces[index];
                let rest = Piece::new(target.chunk, target.start + at, target.len - at);
                target.len = at;
                self.pieces.insert(index + 1, piece);
                self.pieces.insert(index + 2, rest);
            }
        }
        self.len += piece.len;
    }

    pub fn as_slice(&self) -> &[Piece] {
        &self.pieces
    }

    /// Number of pieces.
    pub fn count(&self) -> usize {
        self.pieces.len()
    }

    /// Total number of elements referenced.
    pub fn total_len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
