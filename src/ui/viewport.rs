use crate::buffer::TextBuffer;

/// The window of lines painted on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub start_line: usize,
    pub height: usize,
    pub width: usize,
}

impl Viewport {
    pub fn new(start_line: usize, height: usize, width: usize) -> Self {
        Self {
            start_line,
            height,
            width,
        }
    }

    pub fn resize(&mut self, height: usize, width: usize) {
        self.height = height;
        self.width = width;
    }

    pub fn scroll_down(&mut self, total_lines: usize) {
        self.start_line = self.start_line.saturating_add(1);
        self.clamp(total_lines);
    }

    pub fn scroll_up(&mut self) {
        self.start_line = self.start_line.saturating_sub(1);
    }

    pub fn scroll_down_page(&mut self, total_lines: usize) {
        self.start_line = self.start_line.saturating_add(self.half_page());
        self.clamp(total_lines);
    }

    pub fn scroll_up_page(&mut self) {
        self.start_line = self.start_line.saturating_sub(self.half_page());
    }

    /// Keep at least the last line on screen.
    pub fn clamp(&mut self, total_lines: usize) {
        self.start_line = self.start_line.min(total_lines.saturating_sub(1));
    }

    /// Lines to paint, each cut to the viewport width.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn visible_lines(&self, buffer: &TextBuffer) -> Vec<String> {
        buffer
            .lines(self.start_line)
            .take(self.height)
            .map(|line| {
                let bytes: Vec<u8> = line.collect();
                String::from_utf8_lossy(&bytes)
                    .trim_end_matches('\r')
                    .chars()
                    .take(self.width)
                    .collect()
            })
            .collect()
    }

    fn half_page(&self) -> usize {
        (self.height / 2).max(1)
    }
}
