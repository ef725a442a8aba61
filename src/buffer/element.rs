/// A fixed-width, copyable unit of text stored in a [`Buffer`](super::Buffer).
///
/// The only line boundary the buffer recognizes is a single element equal to
/// [`Element::TERMINATOR`].
pub trait Element: Copy + Eq + std::fmt::Debug {
    /// Line terminator (`'\n'` in the element's encoding).
    const TERMINATOR: Self;

    fn is_terminator(self) -> bool {
        self == Self::TERMINATOR
    }
}

impl Element for u8 {
    const TERMINATOR: Self = b'\n';
}

impl Element for u16 {
    const TERMINATOR: Self = b'\n' as u16;
}

impl Element for u32 {
    const TERMINATOR: Self = b'\n' as u32;
}

impl Element for char {
    const TERMINATOR: Self = '\n';
}

/// Count terminators in a slice of elements.
pub(crate) fn count_terminators<T: Element>(text: &[T]) -> usize {
    text.iter().filter(|e| e.is_terminator()).count()
}
