use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use memmap2::Mmap;
use tracing::{debug, info};

use crate::buffer::TextBuffer;
use crate::error::LoadError;

/// Block size the viewer reads files with unless configured otherwise.
pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// Load a file into a new buffer, one chunk per `block_size` bytes.
pub fn load_path(path: impl AsRef<Path>, block_size: usize) -> Result<TextBuffer, LoadError> {
    let path = path.as_ref();
    if block_size == 0 {
        return Err(LoadError::InvalidBlockSize);
    }

    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        // Mapping an empty file fails on some platforms.
        return Ok(TextBuffer::new());
    }

    // SAFETY: the map is read-only and dropped before this function returns;
    // its contents are copied into the buffer's own chunks.
    let map = unsafe { Mmap::map(&file)? };
    let buffer = load_slice(&map, block_size)?;
    info!(
        path = %path.display(),
        bytes = buffer.len(),
        chunks = buffer.chunk_count(),
        "loaded file"
    );
    Ok(buffer)
}

/// Split `bytes` into `block_size` chunks appended in order.
pub fn load_slice(bytes: &[u8], block_size: usize) -> Result<TextBuffer, LoadError> {
    if block_size == 0 {
        return Err(LoadError::InvalidBlockSize);
    }
    let mut buffer = TextBuffer::new();
    for block in bytes.chunks(block_size) {
        buffer.insert(buffer.len(), block)?;
    }
    Ok(buffer)
}

/// Read `reader` to its end into a new buffer.
pub fn load_reader<R: Read>(mut reader: R, block_size: usize) -> Result<TextBuffer, LoadError> {
    if block_size == 0 {
        return Err(LoadError::InvalidBlockSize);
    }
    let mut buffer = TextBuffer::new();
    let mut block = vec![0; block_size];
    loop {
        let read = match reader.read(&mut block) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        buffer.insert(buffer.len(), &block[..read])?;
    }
    debug!(bytes = buffer.len(), "read input");
    Ok(buffer)
}
