//! CSI (Control Sequence Introducer) dispatch
//!
//! Maps a completed `CSI params intermediates final` sequence onto buffer
//! calls. Counts and 1-based coordinates use `get_nonzero_or(i, 1)`: a
//! missing or explicit zero parameter means 1.

use crate::core::Buffer;

use super::params::Params;
use super::sgr::apply_sgr;

/// Dispatch a CSI sequence on its final byte
pub fn dispatch_csi<B: Buffer + ?Sized>(
    buffer: &mut B,
    final_byte: u8,
    params: &Params,
    intermediates: &[u8],
) {
    match intermediates.first().copied() {
        Some(b'?') => {
            dispatch_private(buffer, final_byte, params);
            return;
        }
        // `<`, `=` and `>` introduce xterm extensions (key modifiers, DA2, ...)
        Some(marker @ (b'<' | b'=' | b'>')) => {
            log::debug!(
                "Ignoring CSI {} {:?} {}",
                marker as char,
                params,
                final_byte as char
            );
            return;
        }
        _ => {}
    }

    let count = || usize::from(params.get_nonzero_or(0, 1));

    match final_byte {
        // Cursor movement
        b'A' => buffer.cursor_up(count()),
        b'B' => buffer.cursor_down(count()),
        b'C' => buffer.cursor_forward(count()),
        b'D' => buffer.cursor_back(count()),
        b'E' => {
            // CNL - Cursor Next Line
            buffer.cursor_down(count());
            buffer.carriage_return();
        }
        b'F' => {
            // CPL - Cursor Previous Line
            buffer.cursor_up(count());
            buffer.carriage_return();
        }
        b'G' => {
            // CHA - Cursor Character Absolute
            let col = clamp_to(count() - 1, buffer.columns());
            buffer.set_cursor_x(col);
        }
        b'd' => {
            // VPA - Vertical Position Absolute
            let row = clamp_to(count() - 1, buffer.rows());
            buffer.set_cursor_y(row);
        }
        b'H' | b'f' => {
            // CUP - Cursor Position, HVP
            let row = usize::from(params.get_nonzero_or(0, 1)) - 1;
            let col = usize::from(params.get_nonzero_or(1, 1)) - 1;
            let row = clamp_to(row, buffer.rows());
            let col = clamp_to(col, buffer.columns());
            buffer.set_cursor_position(row, col);
        }

        // Erase operations
        b'J' => match params.get_or(0, 0) {
            0 => buffer.clear_to_end(),
            1 => buffer.clear_to_beginning(),
            2 => buffer.clear(),
            3 => buffer.clear_with_scrollback(),
            mode => log::debug!("Unhandled ED mode {}", mode),
        },
        b'K' => match params.get_or(0, 0) {
            0 => buffer.clear_line_to_end(),
            1 => buffer.clear_line_to_beginning(),
            2 => buffer.clear_line(),
            mode => log::debug!("Unhandled EL mode {}", mode),
        },

        // Insert/Delete
        b'L' => buffer.insert_lines(count()),
        b'M' => buffer.delete_lines(count()),
        b'@' => buffer.insert_chars(count()),
        b'P' => buffer.delete_chars(count()),
        b'X' => buffer.erase_chars(count()),

        // Scroll
        b'S' => buffer.scroll_up(count()),
        b'T' => buffer.scroll_down(count()),
        b'r' => {
            // DECSTBM - Set Top and Bottom Margins
            let rows = u16::try_from(buffer.rows()).unwrap_or(u16::MAX);
            let top = usize::from(params.get_nonzero_or(0, 1)).saturating_sub(1);
            let bottom = usize::from(params.get_nonzero_or(1, rows)).saturating_sub(1);
            buffer.set_scroll_region(top, bottom);
        }

        // Cursor save/restore (SCO)
        b's' => buffer.save_cursor(),
        b'u' => buffer.restore_cursor(),

        // SGR - Select Graphic Rendition
        b'm' => {
            let attributes = apply_sgr(buffer.current_attributes(), params.as_slice());
            buffer.set_current_attributes(attributes);
        }

        // ANSI modes (SM/RM) have no effect here
        b'h' | b'l' => {
            log::debug!("Ignoring ANSI mode {:?} {}", params, final_byte as char);
        }

        // Queries (DSR, DA, window ops, DECSCUSR/DECRQSS-style) get no reply
        b'n' | b'c' | b't' | b'q' => {
            log::debug!(
                "No reply for CSI query: params={:?} intermediates={:?} final={}",
                params,
                intermediates,
                final_byte as char
            );
        }

        _ => {
            log::debug!(
                "Unhandled CSI: params={:?} intermediates={:?} final={}",
                params,
                intermediates,
                final_byte as char
            );
        }
    }
}

/// Dispatch a DEC private (`CSI ? ...`) sequence
fn dispatch_private<B: Buffer + ?Sized>(buffer: &mut B, final_byte: u8, params: &Params) {
    match final_byte {
        b'h' => {
            // DECSET - DEC Private Mode Set
            for mode in params.iter() {
                set_dec_mode(buffer, mode, true);
            }
        }
        b'l' => {
            // DECRST - DEC Private Mode Reset
            for mode in params.iter() {
                set_dec_mode(buffer, mode, false);
            }
        }
        _ => {
            log::debug!(
                "Unhandled private CSI: params={:?} final={}",
                params,
                final_byte as char
            );
        }
    }
}

/// Set or reset a DEC private mode
fn set_dec_mode<B: Buffer + ?Sized>(buffer: &mut B, mode: u16, enable: bool) {
    match mode {
        // DECOM - Origin Mode
        6 => buffer.set_origin_mode(enable),
        // DECAWM - Autowrap Mode
        7 => buffer.set_auto_wrap_mode(enable),
        // DECTCEM - Text Cursor Enable Mode
        25 => buffer.set_cursor_visible(enable),
        47 | 1047 | 1049 => {
            // Alternate screen is not multiplexed
            log::debug!("Alternate screen mode {} {} passed through", mode, enable);
        }
        _ => {
            log::debug!("Ignoring DEC private mode {}: {}", mode, enable);
        }
    }
}

/// Clamp a 0-based coordinate into `[0, extent - 1]`
fn clamp_to(value: usize, extent: usize) -> usize {
    value.min(extent.saturating_sub(1))
}
