pub mod buffer;
pub mod config;
pub mod error;
pub mod loader;
pub mod ui;

pub use buffer::{
    Buffer, CharTextBuffer, Cursor, CursorMut, Element, Elements, Position, TextBuffer,
    U16TextBuffer, U32TextBuffer,
};
pub use config::ViewerConfig;
pub use error::{BufferError, ConfigError, LoadError};
