//! Recording buffer
//!
//! A [`Buffer`] that keeps just enough state to answer the parser's queries
//! (cursor, attributes, dimensions) and records every mutating call in
//! order. Used by the trace tool and by tests to compare call sequences.

use serde::{Deserialize, Serialize};

use super::attributes::TextAttributes;
use super::buffer::Buffer;

/// A single call received by a [`RecordingBuffer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BufferCall {
    WriteChar(char),
    Backspace,
    Tab,
    LineFeed,
    CarriageReturn,
    SaveCursor,
    RestoreCursor,
    Reset,
    CursorUp(usize),
    CursorDown(usize),
    CursorForward(usize),
    CursorBack(usize),
    SetCursorPosition { row: usize, col: usize },
    SetCursorX(usize),
    SetCursorY(usize),
    Clear,
    ClearToEnd,
    ClearToBeginning,
    ClearWithScrollback,
    ClearLine,
    ClearLineToEnd,
    ClearLineToBeginning,
    InsertLines(usize),
    DeleteLines(usize),
    InsertChars(usize),
    DeleteChars(usize),
    EraseChars(usize),
    ScrollUp(usize),
    ScrollDown(usize),
    SetScrollRegion { top: usize, bottom: usize },
    SetAttributes(TextAttributes),
    SetOriginMode(bool),
    SetAutoWrapMode(bool),
    SetCursorVisible(bool),
}

const TAB_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy)]
struct SavedCursor {
    x: usize,
    y: usize,
    attributes: TextAttributes,
}

/// In-memory buffer that records the calls it receives
#[derive(Debug, Clone)]
pub struct RecordingBuffer {
    columns: usize,
    rows: usize,
    cursor_x: usize,
    cursor_y: usize,
    attributes: TextAttributes,
    saved: Option<SavedCursor>,
    origin_mode: bool,
    auto_wrap: bool,
    cursor_visible: bool,
    scroll_region: (usize, usize),
    calls: Vec<BufferCall>,
}

impl RecordingBuffer {
    /// Create a buffer of the given size; zero dimensions are raised to 1
    pub fn new(columns: usize, rows: usize) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        Self {
            columns,
            rows,
            cursor_x: 0,
            cursor_y: 0,
            attributes: TextAttributes::default(),
            saved: None,
            origin_mode: false,
            auto_wrap: true,
            cursor_visible: true,
            scroll_region: (0, rows - 1),
            calls: Vec::new(),
        }
    }

    /// Calls recorded so far
    pub fn calls(&self) -> &[BufferCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the log empty
    pub fn take_calls(&mut self) -> Vec<BufferCall> {
        std::mem::take(&mut self.calls)
    }

    /// Characters written so far, in order
    pub fn text(&self) -> String {
        self.calls
            .iter()
            .filter_map(|call| match call {
                BufferCall::WriteChar(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    pub fn origin_mode(&self) -> bool {
        self.origin_mode
    }

    pub fn auto_wrap_mode(&self) -> bool {
        self.auto_wrap
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Current scroll region as inclusive (top, bottom)
    pub fn scroll_region(&self) -> (usize, usize) {
        self.scroll_region
    }

    fn record(&mut self, call: BufferCall) {
        self.calls.push(call);
    }

    fn clamp_x(&self, x: usize) -> usize {
        x.min(self.columns - 1)
    }

    fn clamp_y(&self, y: usize) -> usize {
        y.min(self.rows - 1)
    }
}

impl Buffer for RecordingBuffer {
    fn write_char(&mut self, c: char) {
        self.record(BufferCall::WriteChar(c));
        self.cursor_x = self.clamp_x(self.cursor_x + 1);
    }

    fn backspace(&mut self) {
        self.record(BufferCall::Backspace);
        self.cursor_x = self.cursor_x.saturating_sub(1);
    }

    fn tab(&mut self) {
        self.record(BufferCall::Tab);
        let next = (self.cursor_x / TAB_WIDTH + 1) * TAB_WIDTH;
        self.cursor_x = self.clamp_x(next);
    }

    fn line_feed(&mut self) {
        self.record(BufferCall::LineFeed);
        self.cursor_y = self.clamp_y(self.cursor_y + 1);
    }

    fn carriage_return(&mut self) {
        self.record(BufferCall::CarriageReturn);
        self.cursor_x = 0;
    }

    fn save_cursor(&mut self) {
        self.record(BufferCall::SaveCursor);
        self.saved = Some(SavedCursor {
            x: self.cursor_x,
            y: self.cursor_y,
            attributes: self.attributes,
        });
    }

    fn restore_cursor(&mut self) {
        self.record(BufferCall::RestoreCursor);
        if let Some(saved) = self.saved {
            self.cursor_x = self.clamp_x(saved.x);
            self.cursor_y = self.clamp_y(saved.y);
            self.attributes = saved.attributes;
        } else {
            self.cursor_x = 0;
            self.cursor_y = 0;
            self.attributes = TextAttributes::default();
        }
    }

    fn reset(&mut self) {
        self.record(BufferCall::Reset);
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.attributes = TextAttributes::default();
        self.saved = None;
        self.origin_mode = false;
        self.auto_wrap = true;
        self.cursor_visible = true;
        self.scroll_region = (0, self.rows - 1);
    }

    fn cursor_up(&mut self, n: usize) {
        self.record(BufferCall::CursorUp(n));
        self.cursor_y = self.cursor_y.saturating_sub(n);
    }

    fn cursor_down(&mut self, n: usize) {
        self.record(BufferCall::CursorDown(n));
        self.cursor_y = self.clamp_y(self.cursor_y.saturating_add(n));
    }

    fn cursor_forward(&mut self, n: usize) {
        self.record(BufferCall::CursorForward(n));
        self.cursor_x = self.clamp_x(self.cursor_x.saturating_add(n));
    }

    fn cursor_back(&mut self, n: usize) {
        self.record(BufferCall::CursorBack(n));
        self.cursor_x = self.cursor_x.saturating_sub(n);
    }

    fn set_cursor_position(&mut self, row: usize, col: usize) {
        self.record(BufferCall::SetCursorPosition { row, col });
        self.cursor_y = self.clamp_y(row);
        self.cursor_x = self.clamp_x(col);
    }

    fn cursor_x(&self) -> usize {
        self.cursor_x
    }

    fn set_cursor_x(&mut self, x: usize) {
        self.record(BufferCall::SetCursorX(x));
        self.cursor_x = self.clamp_x(x);
    }

    fn cursor_y(&self) -> usize {
        self.cursor_y
    }

    fn set_cursor_y(&mut self, y: usize) {
        self.record(BufferCall::SetCursorY(y));
        self.cursor_y = self.clamp_y(y);
    }

    fn clear(&mut self) {
        self.record(BufferCall::Clear);
    }

    fn clear_to_end(&mut self) {
        self.record(BufferCall::ClearToEnd);
    }

    fn clear_to_beginning(&mut self) {
        self.record(BufferCall::ClearToBeginning);
    }

    fn clear_with_scrollback(&mut self) {
        self.record(BufferCall::ClearWithScrollback);
    }

    fn clear_line(&mut self) {
        self.record(BufferCall::ClearLine);
    }

    fn clear_line_to_end(&mut self) {
        self.record(BufferCall::ClearLineToEnd);
    }

    fn clear_line_to_beginning(&mut self) {
        self.record(BufferCall::ClearLineToBeginning);
    }

    fn insert_lines(&mut self, n: usize) {
        self.record(BufferCall::InsertLines(n));
    }

    fn delete_lines(&mut self, n: usize) {
        self.record(BufferCall::DeleteLines(n));
    }

    fn insert_chars(&mut self, n: usize) {
        self.record(BufferCall::InsertChars(n));
    }

    fn delete_chars(&mut self, n: usize) {
        self.record(BufferCall::DeleteChars(n));
    }

    fn erase_chars(&mut self, n: usize) {
        self.record(BufferCall::EraseChars(n));
    }

    fn scroll_up(&mut self, n: usize) {
        self.record(BufferCall::ScrollUp(n));
    }

    fn scroll_down(&mut self, n: usize) {
        self.record(BufferCall::ScrollDown(n));
    }

    fn set_scroll_region(&mut self, top: usize, bottom: usize) {
        self.record(BufferCall::SetScrollRegion { top, bottom });
        let top = self.clamp_y(top);
        let bottom = self.clamp_y(bottom);
        // Invalid regions are ignored, like xterm
        if top < bottom {
            self.scroll_region = (top, bottom);
        }
    }

    fn current_attributes(&self) -> TextAttributes {
        self.attributes
    }

    fn set_current_attributes(&mut self, attributes: TextAttributes) {
        self.record(BufferCall::SetAttributes(attributes));
        self.attributes = attributes;
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn set_origin_mode(&mut self, enabled: bool) {
        self.record(BufferCall::SetOriginMode(enabled));
        self.origin_mode = enabled;
    }

    fn set_auto_wrap_mode(&mut self, enabled: bool) {
        self.record(BufferCall::SetAutoWrapMode(enabled));
        self.auto_wrap = enabled;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.record(BufferCall::SetCursorVisible(visible));
        self.cursor_visible = visible;
    }
}
