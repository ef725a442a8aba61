use crate::error::BufferError;

/// Stable identifier of a chunk: its position in the store.
pub type ChunkId = usize;

/// Append-only storage for the text handed to [`Buffer::insert`](super::Buffer::insert).
///
/// Chunks are never resized, reordered or removed, so a [`ChunkId`] stays
/// valid for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct ChunkStore<T> {
    chunks: Vec<Vec<T>>,
}

impl<T: Copy> ChunkStore<T> {
    pub fn new() -> Self {
        Self { chunks: Vec::new() }
    }

    /// Copy `text` into a chunk whose storage is allocated up front.
    ///
    /// Nothing is stored until [`ChunkStore::append`] is called with the result.
    pub fn copy_chunk(text: &[T]) -> Result<Vec<T>, BufferError> {
        let mut chunk = Vec::new();
        chunk
            .try_reserve_exact(text.len())
            .map_err(|e| BufferError::allocation(text.len(), e))?;
        chunk.extend_from_slice(text);
        Ok(chunk)
    }

    /// Collect an iterator into a chunk, surfacing allocation failure.
    pub fn collect_chunk<I>(iter: I) -> Result<Vec<T>, BufferError>
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let mut chunk = Vec::new();
        let (lower, _) = iter.size_hint();
        chunk
            .try_reserve(lower)
            .map_err(|e| BufferError::allocation(lower, e))?;
        for element in iter {
            if chunk.len() == chunk.capacity() {
                chunk
                    .try_reserve(1)
                    .map_err(|e| BufferError::allocation(1, e))?;
            }
            chunk.push(element);
        }
        Ok(chunk)
    }

    /// Take ownership of `chunk` and return its id.
    ///
    /// On failure the store is unchanged.
    pub fn append(&mut self, chunk: Vec<T>) -> Result<ChunkId, BufferError> {
        self.chunks
            .try_reserve(1)
            .map_err(|e| BufferError::allocation(1, e))?;
        self.chunks.push(chunk);
        Ok(self.chunks.len() - 1)
    }

    pub fn get(&self, id: ChunkId) -> Option<&[T]> {
        self.chunks.get(id).map(Vec::as_slice)
    }

    /// Mutable access to a single element; the chunk's length never changes.
    pub fn element_mut(&mut self, id: ChunkId, index: usize) -> Option<&mut T> {
        self.chunks.get_mut(id).and_then(|chunk| chunk.get_mut(index))
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl<T: Copy> Default for ChunkStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_returns_positional_ids() {
        let mut store = ChunkStore::new();
        let a = store.append(ChunkStore::copy_chunk(b"abc").unwrap()).unwrap();
        let b = store.append(ChunkStore::copy_chunk(b"").unwrap()).unwrap();
        let c = store.append(ChunkStore::copy_chunk(b"de").unwrap()).unwrap();

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0), Some(&b"abc"[..]));
        assert_eq!(store.get(1), Some(&b""[..]));
        assert_eq!(store.get(2), Some(&b"de"[..]));
        assert_eq!(store.get(3), None);
    }

    #[test]
    fn test_ids_survive_growth() {
        let mut store = ChunkStore::new();
        let first = store.append(vec!['x']).unwrap();
        for i in 0..1000 {
            store.append(vec![char::from(b'a' + (i % 26) as u8)]).unwrap();
        }
        assert_eq!(store.get(first), Some(&['x'][..]));
    }

    #[test]
    fn test_collect_chunk() {
        let chunk = ChunkStore::collect_chunk("hello".bytes().filter(|b| *b != b'l')).unwrap();
        assert_eq!(chunk, b"heo");
    }

    #[test]
    fn test_element_mut() {
        let mut store = ChunkStore::new();
        let id = store.append(b"abc".to_vec()).unwrap();
        *store.element_mut(id, 1).unwrap() = b'X';
        assert_eq!(store.get(id), Some(&b"aXc"[..]));
        assert!(store.element_mut(id, 3).is_none());
    }
}
