use afv::{BufferError, CharTextBuffer, TextBuffer};

fn collect_line(buffer: &TextBuffer, n: usize) -> String {
    String::from_utf8(buffer.line(n).collect()).unwrap()
}

#[test]
fn test_documented_scenarios() {
    let mut buffer = TextBuffer::new();
    buffer.insert_str(0, "abc").unwrap();
    assert_eq!(buffer.to_string_lossy(), "abc");

    let mut buffer = TextBuffer::new();
    buffer.insert_str(0, "abc").unwrap();
    buffer.insert_str(1, "def").unwrap();
    assert_eq!(buffer.to_string_lossy(), "adefbc");

    let mut buffer = TextBuffer::new();
    buffer.insert_str(0, "abc").unwrap();
    buffer.insert_str(3, "def").unwrap();
    assert_eq!(buffer.to_string_lossy(), "abcdef");

    let mut buffer = TextBuffer::new();
    buffer.insert_str(0, "abc\n").unwrap();
    assert_eq!(buffer.total_lines(), 1);
    assert!(buffer.line(1).is_empty());

    let mut buffer = TextBuffer::new();
    buffer.insert_str(0, "abc\ndef").unwrap();
    assert_eq!(collect_line(&buffer, 0), "abc");
    assert_eq!(collect_line(&buffer, 1), "def");
}

#[test]
fn test_line_range_cursors_bound_the_line() {
    let mut buffer = TextBuffer::new();
    buffer.insert_str(0, "ab\ncd\n").unwrap();

    let line = buffer.line(1);
    let mut cursor = line.start();
    assert_eq!(cursor.value(), Some(b'c'));
    cursor.advance().advance();
    assert_eq!(cursor, line.end());
    assert_eq!(line.end().value(), Some(b'\n'));
}

#[test]
fn test_cursors_are_reacquired_after_insert() {
    let mut buffer = CharTextBuffer::new();
    buffer.insert_str(0, "xz").unwrap();
    let before = buffer.begin().position();

    buffer.insert_str(1, "y").unwrap();
    let mut cursor = buffer.begin();
    assert_eq!(cursor.position(), before);
    cursor.advance();
    assert_eq!(cursor.value(), Some('y'));
}

#[test]
fn test_error_is_a_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<BufferError>();
}
