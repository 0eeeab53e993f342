#[cfg(test)]
#[path = "log_viewport_test.rs"]
mod tests;

use crate::domain::models::LogLine;

const DEFAULT_HEIGHT: usize = 20;

/// Append-only record of everything the console ran, with a scrollable window.
///
/// Every append jumps the window to the newest line, even if the operator had
/// scrolled up. Clearing only moves a watermark; lines are never dropped.
pub struct LogViewport {
    lines: Vec<LogLine>,
    cleared_at: usize,
    offset: usize,
    height: usize,
}

impl Default for LogViewport {
    fn default() -> LogViewport {
        return LogViewport {
            lines: vec![],
            cleared_at: 0,
            offset: 0,
            height: DEFAULT_HEIGHT,
        };
    }
}

impl LogViewport {
    /// Every line ever appended, including cleared ones.
    pub fn history(&self) -> &[LogLine] {
        return &self.lines;
    }

    /// Lines appended since the last clear.
    pub fn visible(&self) -> &[LogLine] {
        return &self.lines[self.cleared_at..];
    }

    /// The slice currently inside the window.
    pub fn window(&self) -> &[LogLine] {
        let visible = self.visible();
        let end = (self.offset + self.height).min(visible.len());
        return &visible[self.offset.min(end)..end];
    }

    pub fn offset(&self) -> usize {
        return self.offset;
    }

    pub fn height(&self) -> usize {
        return self.height;
    }

    pub fn append(&mut self, line: LogLine) {
        self.lines.push(line);
        self.scroll_to_bottom();
    }

    /// Splits captured text into output lines. Surrounding blank lines are dropped.
    pub fn append_output(&mut self, text: &str) {
        let trimmed = text.trim_end().trim_start_matches(['\n', '\r']);
        if trimmed.is_empty() {
            return;
        }

        for line in trimmed.lines() {
            self.lines.push(LogLine::output(line));
        }
        self.scroll_to_bottom();
    }

    pub fn clear(&mut self) {
        self.cleared_at = self.lines.len();
        self.offset = 0;
    }

    /// Resizes the window. A window pinned to the newest line stays pinned.
    pub fn set_height(&mut self, height: usize) {
        let at_bottom = self.is_at_bottom();
        self.height = height.max(1);
        if at_bottom {
            self.scroll_to_bottom();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = (self.offset + amount).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn is_at_bottom(&self) -> bool {
        return self.offset == self.max_offset();
    }

    /// Position as a percentage, only when the log overflows the window.
    pub fn scroll_percent(&self) -> Option<u16> {
        let max = self.max_offset();
        if max == 0 {
            return None;
        }

        return Some((self.offset * 100 / max) as u16);
    }

    fn max_offset(&self) -> usize {
        return self.visible().len().saturating_sub(self.height);
    }
}
