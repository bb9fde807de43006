//! Terminal buffer interface
//!
//! The decoder does not own any screen state. It drives an implementation of
//! [`Buffer`], which stores cells and performs the actual cursor, scrolling
//! and region math. All coordinates are 0-based.

use super::attributes::TextAttributes;

/// Screen model driven by the parser
pub trait Buffer {
    /// Write a character at the cursor using the current attributes
    fn write_char(&mut self, c: char);

    /// BS - move the cursor one column left
    fn backspace(&mut self);

    /// HT - advance to the next tab stop
    fn tab(&mut self);

    /// LF/VT/FF - move down one line, scrolling if needed
    fn line_feed(&mut self);

    /// CR - move to column 0
    fn carriage_return(&mut self);

    fn save_cursor(&mut self);
    fn restore_cursor(&mut self);

    /// Full reset (RIS)
    fn reset(&mut self);

    fn cursor_up(&mut self, n: usize);
    fn cursor_down(&mut self, n: usize);
    fn cursor_forward(&mut self, n: usize);
    fn cursor_back(&mut self, n: usize);

    /// Absolute cursor placement; implementations clamp to the screen
    fn set_cursor_position(&mut self, row: usize, col: usize);

    fn cursor_x(&self) -> usize;
    /// Set the cursor column, clamped to `[0, columns - 1]`
    fn set_cursor_x(&mut self, x: usize);
    fn cursor_y(&self) -> usize;
    /// Set the cursor row, clamped to `[0, rows - 1]`
    fn set_cursor_y(&mut self, y: usize);

    // Erase in display
    fn clear(&mut self);
    fn clear_to_end(&mut self);
    fn clear_to_beginning(&mut self);
    fn clear_with_scrollback(&mut self);

    // Erase in line
    fn clear_line(&mut self);
    fn clear_line_to_end(&mut self);
    fn clear_line_to_beginning(&mut self);

    fn insert_lines(&mut self, n: usize);
    fn delete_lines(&mut self, n: usize);
    fn insert_chars(&mut self, n: usize);
    fn delete_chars(&mut self, n: usize);
    fn erase_chars(&mut self, n: usize);

    fn scroll_up(&mut self, n: usize);
    fn scroll_down(&mut self, n: usize);

    /// Set the scrolling region; `top` and `bottom` are inclusive rows
    fn set_scroll_region(&mut self, top: usize, bottom: usize);

    fn current_attributes(&self) -> TextAttributes;
    fn set_current_attributes(&mut self, attributes: TextAttributes);

    fn columns(&self) -> usize;
    fn rows(&self) -> usize;

    /// DECOM
    fn set_origin_mode(&mut self, enabled: bool);
    /// DECAWM
    fn set_auto_wrap_mode(&mut self, enabled: bool);
    /// DECTCEM
    fn set_cursor_visible(&mut self, visible: bool);
}
