use std::iter::FusedIterator;

use super::cursor::{Cursor, Elements};
use super::element::Element;
use super::Buffer;

impl<T: Element> Buffer<T> {
    /// Number of logical lines.
    ///
    /// A trailing terminator ends the last line; it does not open an empty
    /// one, so `"abc\n"` has one line and `"abc\ndef"` has two.
    pub fn total_lines(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut last = self.end();
        last.retreat();
        match last.value() {
            Some(value) if value.is_terminator() => self.terminators,
            _ => self.terminators + 1,
        }
    }

    /// The elements of line `n`, without its terminator.
    ///
    /// Scans from the beginning of the document on every call. An index past
    /// the last line yields an empty range at the end.
    pub fn line(&self, n: usize) -> Elements<'_, T> {
        let start = self.line_start(n);
        let mut stop = start;
        stop.seek(T::is_terminator);
        Elements::new(start, stop)
    }

    /// Iterate lines in order, starting with line `first`.
    pub fn lines(&self, first: usize) -> Lines<'_, T> {
        Lines {
            next: self.line_start(first),
            end: self.end(),
        }
    }

    fn line_start(&self, mut n: usize) -> Cursor<'_, T> {
        let end = self.end();
        let mut cursor = self.begin();
        while cursor != end && n > 0 {
            if cursor.fetch_advance().value().is_some_and(T::is_terminator) {
                n -= 1;
            }
        }
        cursor
    }
}

/// Sequential line ranges, see [`Buffer::lines`].
#[derive(Debug)]
pub struct Lines<'a, T> {
    next: Cursor<'a, T>,
    end: Cursor<'a, T>,
}

impl<'a, T: Element> Iterator for Lines<'a, T> {
    type Item = Elements<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let start = self.next;
        let mut stop = start;
        stop.seek(T::is_terminator);

        self.next = stop;
        if self.next != self.end {
            self.next.advance();
        }
        Some(Elements::new(start, stop))
    }
}

impl<T: Element> FusedIterator for Lines<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::buffer::TextBuffer;

    fn text(range: impl Iterator<Item = u8>) -> String {
        String::from_utf8(range.collect()).unwrap()
    }

    #[test]
    fn test_total_lines_empty() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.total_lines(), 0);
        assert!(buffer.line(0).is_empty());
        assert_eq!(buffer.lines(0).count(), 0);
    }

    #[test]
    fn test_line_single_line() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str(0, "abcdef").unwrap();
        assert_eq!(text(buffer.line(0)), "abcdef");
    }

    #[test]
    fn test_line_split_by_inserted_terminator() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str(0, "abcdef").unwrap();
        buffer.insert_str(3, "\n").unwrap();

        assert_eq!(text(buffer.line(0)), "abc");
        assert_eq!(text(buffer.line(1)), "def");
        assert_eq!(buffer.total_lines(), 2);
    }

    #[test]
    fn test_trailing_terminator_opens_no_line() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str(0, "abc\n").unwrap();

        assert_eq!(buffer.total_lines(), 1);
        assert!(buffer.line(1).is_empty());
        assert_eq!(buffer.line(1).start(), buffer.end());
        assert_eq!(buffer.lines(0).count(), 1);
    }

    #[test]
    fn test_line_past_end_is_empty_at_end() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str(0, "a\nb").unwrap();
        let line = buffer.line(7);
        assert!(line.is_empty());
        assert_eq!(line.start(), buffer.end());
    }

    #[test]
    fn test_empty_lines_between_terminators() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str(0, "a\n\n\nb").unwrap();

        assert_eq!(buffer.total_lines(), 4);
        assert_eq!(text(buffer.line(0)), "a");
        assert_eq!(text(buffer.line(1)), "");
        assert_eq!(text(buffer.line(2)), "");
        assert_eq!(text(buffer.line(3)), "b");
    }

    #[test]
    fn test_line_spanning_pieces() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str(0, "one\nthree").unwrap();
        buffer.insert_str(4, "tw").unwrap();
        buffer.insert_str(6, "o\n").unwrap();

        assert_eq!(buffer.to_string_lossy(), "one\ntwo\nthree");
        assert_eq!(text(buffer.line(1)), "two");
        assert_eq!(text(buffer.line(1).rev()), "owt");
    }

    #[test]
    fn test_lines_from_offset() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str(0, "l0\nl1\nl2\nl3").unwrap();

        let lines: Vec<String> = buffer.lines(1).map(text).collect();
        assert_eq!(lines, ["l1", "l2", "l3"]);
        assert_eq!(buffer.lines(4).count(), 0);
    }

    #[test]
    fn test_lines_matches_line() {
        let mut buffer = TextBuffer::new();
        buffer.insert_str(0, "x\n\ny\nzz\n").unwrap();

        let total = buffer.total_lines();
        assert_eq!(buffer.lines(0).count(), total);
        for (n, line) in buffer.lines(0).enumerate() {
            assert_eq!(text(line), text(buffer.line(n)));
        }
    }
}
