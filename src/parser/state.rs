//! Parser State Machine
//!
//! Implements a VT500-style parser state machine that drives a [`Buffer`]
//! directly. The parser handles arbitrary chunk boundaries: every piece of
//! in-progress state (state tag, parameters, intermediates, OSC payload,
//! partial UTF-8) lives on the parser, so feeding input whole or split into
//! any number of chunks produces the same buffer calls and notifications.
//!
//! # State Machine
//!
//! The parser follows the state machine model described in:
//! - "A parser for DEC's ANSI-compatible video terminals" by Paul Williams
//! - https://vt100.net/emu/dec_ansi_parser
//!
//! States:
//! - Ground: Normal text processing
//! - Escape: After ESC, waiting for next byte
//! - EscapeIntermediate: ESC followed by intermediate bytes
//! - CsiEntry: After CSI (ESC [), collecting parameters
//! - CsiParam: Collecting CSI parameters
//! - CsiIntermediate: CSI with intermediate bytes
//! - OscString: Collecting OSC payload
//! - DcsEntry/DcsParam/DcsIntermediate/DcsPassthrough: DCS handling; the
//!   header is not interpreted, so every payload byte is discarded
//! - SosPmApcString: SOS/PM/APC string collection
//!
//! Outside of the OSC, DCS and SOS/PM/APC strings, C0 controls are executed
//! in every state without disturbing the sequence being collected. ESC always starts
//! a new escape sequence and CAN/SUB always return to Ground.
//!
//! Decoding never fails: malformed input falls back to Ground.

use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::core::Buffer;

use super::control::{c0, c1};
use super::csi::dispatch_csi;
use super::notification::Notification;
use super::osc::dispatch_osc;
use super::params::Params;
use super::utf8::{is_continuation, Utf8Decoder};

/// Parser state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    #[default]
    Ground,
    Escape,
    EscapeIntermediate,
    CsiEntry,
    CsiParam,
    CsiIntermediate,
    OscString,
    DcsEntry,
    DcsParam,
    DcsIntermediate,
    DcsPassthrough,
    SosPmApcString,
}

/// The terminal parser
#[derive(Debug)]
pub struct Parser {
    state: State,
    /// Parameters for CSI/DCS sequences
    params: Params,
    /// Intermediate and private-marker bytes
    intermediates: Vec<u8>,
    /// OSC string payload
    osc_string: Vec<u8>,
    /// Bytes discarded by the current DCS/SOS/PM/APC string
    discarded: usize,
    /// UTF-8 decoder state for ground text
    utf8: Utf8Decoder,
    /// Notifications not yet taken by the caller
    notifications: Vec<Notification>,
    config: ParserConfig,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a new parser in the ground state
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with custom buffer limits
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            state: State::Ground,
            params: Params::new(config.max_params),
            intermediates: Vec::with_capacity(config.max_intermediates.min(16)),
            osc_string: Vec::with_capacity(256),
            discarded: 0,
            utf8: Utf8Decoder::default(),
            notifications: Vec::new(),
            config,
        }
    }

    /// Current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Reset the parser to initial state
    ///
    /// Pending notifications are kept; scratch buffers keep their capacity.
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.params.clear();
        self.intermediates.clear();
        self.osc_string.clear();
        self.discarded = 0;
        self.utf8.reset();
    }

    /// Notifications raised since the last [`take_notifications`](Self::take_notifications)
    pub fn pending_notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain the queued notifications, oldest first
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Process a chunk of bytes
    pub fn parse<B: Buffer + ?Sized>(&mut self, buffer: &mut B, data: &[u8]) {
        for &byte in data {
            self.process(buffer, byte);
        }
    }

    /// Process text (its UTF-8 encoding)
    pub fn parse_str<B: Buffer + ?Sized>(&mut self, buffer: &mut B, text: &str) {
        self.parse(buffer, text.as_bytes());
    }

    /// Process a single byte
    pub fn process<B: Buffer + ?Sized>(&mut self, buffer: &mut B, byte: u8) {
        // A truncated multi-byte character becomes one replacement character
        if self.utf8.is_pending() && !is_continuation(byte) {
            self.utf8.reset();
            buffer.write_char(char::REPLACEMENT_CHARACTER);
        }

        match self.state {
            State::OscString => self.process_osc_string(byte),
            State::DcsEntry
            | State::DcsParam
            | State::DcsIntermediate
            | State::DcsPassthrough
            | State::SosPmApcString => self.process_passthrough(byte),
            _ if byte < 0x20 => self.process_c0(buffer, byte),
            State::Ground => self.process_ground(buffer, byte),
            State::Escape => self.process_escape(buffer, byte),
            State::EscapeIntermediate => self.process_escape_intermediate(byte),
            State::CsiEntry | State::CsiParam => self.process_csi_param(buffer, byte),
            State::CsiIntermediate => self.process_csi_intermediate(buffer, byte),
        }
    }

    /// Process C0 control characters (0x00-0x1F) outside the string states
    fn process_c0<B: Buffer + ?Sized>(&mut self, buffer: &mut B, byte: u8) {
        match byte {
            c0::NUL => {}
            c0::BEL => self.notifications.push(Notification::Bell),
            c0::BS => buffer.backspace(),
            c0::HT => buffer.tab(),
            c0::LF | c0::VT | c0::FF => buffer.line_feed(),
            c0::CR => buffer.carriage_return(),
            // No charset switching
            c0::SO | c0::SI => {}
            c0::CAN | c0::SUB => self.state = State::Ground,
            c0::ESC => self.enter_escape(),
            _ => {}
        }
    }

    fn enter_escape(&mut self) {
        self.state = State::Escape;
        self.intermediates.clear();
    }

    fn push_intermediate(&mut self, byte: u8) {
        if self.intermediates.len() < self.config.max_intermediates {
            self.intermediates.push(byte);
        }
    }

    /// Process bytes in ground state (normal text)
    fn process_ground<B: Buffer + ?Sized>(&mut self, buffer: &mut B, byte: u8) {
        match byte {
            0x20..=0x7E => buffer.write_char(byte as char),
            c0::DEL => {}
            _ => {
                if let Some(c) = self.utf8.advance(byte) {
                    buffer.write_char(c);
                }
            }
        }
    }

    /// Process bytes in escape state
    fn process_escape<B: Buffer + ?Sized>(&mut self, buffer: &mut B, byte: u8) {
        self.state = State::Ground;
        match byte {
            // DECSC
            b'7' => buffer.save_cursor(),
            // DECRC
            b'8' => buffer.restore_cursor(),
            // IND
            b'D' => buffer.line_feed(),
            // NEL
            b'E' => {
                buffer.carriage_return();
                buffer.line_feed();
            }
            // HTS - tab stops belong to the buffer
            b'H' => {}
            // RI
            b'M' => buffer.scroll_down(1),
            // RIS
            b'c' => buffer.reset(),
            b'[' => {
                self.params.clear();
                self.state = State::CsiEntry;
            }
            b']' => {
                self.osc_string.clear();
                self.state = State::OscString;
            }
            b'P' => {
                self.params.clear();
                self.discarded = 0;
                self.state = State::DcsEntry;
            }
            b'X' | b'^' | b'_' => {
                self.discarded = 0;
                self.state = State::SosPmApcString;
            }
            // Bare ST
            b'\\' => {}
            0x20..=0x2F => {
                self.push_intermediate(byte);
                self.state = State::EscapeIntermediate;
            }
            _ => {
                log::trace!("Ignoring ESC {:#04x}", byte);
            }
        }
    }

    /// Process bytes in escape intermediate state
    fn process_escape_intermediate(&mut self, byte: u8) {
        match byte {
            0x20..=0x2F => self.push_intermediate(byte),
            0x30..=0x7E => {
                // Charset designation and friends are inert
                log::trace!(
                    "Ignoring ESC {:?} {}",
                    self.intermediates,
                    byte as char
                );
                self.state = State::Ground;
            }
            _ => self.state = State::Ground,
        }
    }

    /// Process bytes in CSI entry and param states
    fn process_csi_param<B: Buffer + ?Sized>(&mut self, buffer: &mut B, byte: u8) {
        match byte {
            b'0'..=b'9' => {
                self.params.push_digit(byte - b'0');
                self.state = State::CsiParam;
            }
            b';' => {
                self.params.separator();
                self.state = State::CsiParam;
            }
            // Private markers
            0x3C..=0x3F => {
                self.push_intermediate(byte);
                self.state = State::CsiParam;
            }
            0x20..=0x2F => {
                self.params.finish();
                self.push_intermediate(byte);
                self.state = State::CsiIntermediate;
            }
            0x40..=0x7E => {
                self.params.finish();
                self.state = State::Ground;
                dispatch_csi(buffer, byte, &self.params, &self.intermediates);
            }
            _ => self.state = State::Ground,
        }
    }

    /// Process bytes in CSI intermediate state
    fn process_csi_intermediate<B: Buffer + ?Sized>(&mut self, buffer: &mut B, byte: u8) {
        match byte {
            0x20..=0x2F => self.push_intermediate(byte),
            0x40..=0x7E => {
                self.state = State::Ground;
                dispatch_csi(buffer, byte, &self.params, &self.intermediates);
            }
            _ => self.state = State::Ground,
        }
    }

    /// Process bytes in OSC string state
    fn process_osc_string(&mut self, byte: u8) {
        match byte {
            // BEL terminates OSC (xterm extension)
            c0::BEL => {
                self.terminate_osc();
                self.state = State::Ground;
            }
            // ESC ends the string here; the `\` of ST is consumed by the escape state
            c0::ESC => {
                self.terminate_osc();
                self.enter_escape();
            }
            c0::CAN | c0::SUB => {
                self.osc_string.clear();
                self.state = State::Ground;
            }
            c0::HT | 0x20..=0xFF => {
                if self.osc_string.len() < self.config.max_osc_len {
                    self.osc_string.push(byte);
                } else if self.osc_string.len() == self.config.max_osc_len {
                    log::debug!("OSC payload truncated at {} bytes", self.config.max_osc_len);
                    // Grow by one marker byte so the message is logged once
                    self.osc_string.push(byte);
                }
            }
            _ => {}
        }
    }

    /// Terminate OSC sequence and dispatch
    fn terminate_osc(&mut self) {
        let len = self.osc_string.len().min(self.config.max_osc_len);
        dispatch_osc(&self.osc_string[..len], &mut self.notifications);
        self.osc_string.clear();
    }

    /// Process bytes in the DCS and SOS/PM/APC string states
    ///
    /// DCS headers are not interpreted: the first byte after `ESC P` that is
    /// not a terminator starts the (discarded) passthrough payload. C0
    /// controls are part of the payload here.
    fn process_passthrough(&mut self, byte: u8) {
        match byte {
            c1::ST => self.terminate_passthrough(State::Ground),
            c0::ESC => {
                self.terminate_passthrough(State::Escape);
                self.intermediates.clear();
            }
            c0::CAN | c0::SUB => self.terminate_passthrough(State::Ground),
            _ => {
                if matches!(
                    self.state,
                    State::DcsEntry | State::DcsParam | State::DcsIntermediate
                ) {
                    self.state = State::DcsPassthrough;
                }
                self.discarded = self.discarded.saturating_add(1);
            }
        }
    }

    fn terminate_passthrough(&mut self, next: State) {
        log::debug!(
            "Discarded {:?} string of {} bytes",
            self.state,
            self.discarded
        );
        self.discarded = 0;
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BufferCall, Color, RecordingBuffer, TextAttributes};

    fn run(input: &[u8]) -> (Parser, RecordingBuffer) {
        let mut parser = Parser::new();
        let mut buffer = RecordingBuffer::new(80, 24);
        parser.parse(&mut buffer, input);
        (parser, buffer)
    }

    #[test]
    fn test_parser_print() {
        let (parser, buffer) = run(b"Hello");
        assert_eq!(buffer.text(), "Hello");
        assert_eq!(buffer.calls().len(), 5);
        assert_eq!(parser.state(), State::Ground);
    }

    #[test]
    fn test_parser_c0_controls() {
        let (parser, buffer) = run(b"A\nB\rC\x08\x09\x0B\x0C");
        assert_eq!(
            buffer.calls(),
            &[
                BufferCall::WriteChar('A'),
                BufferCall::LineFeed,
                BufferCall::WriteChar('B'),
                BufferCall::CarriageReturn,
                BufferCall::WriteChar('C'),
                BufferCall::Backspace,
                BufferCall::Tab,
                BufferCall::LineFeed,
                BufferCall::LineFeed,
            ]
        );
        assert!(parser.pending_notifications().is_empty());
    }

    #[test]
    fn test_parser_ignored_controls() {
        let (parser, buffer) = run(b"\x00\x0E\x0F\x01\x1F\x7F");
        assert!(buffer.calls().is_empty());
        assert!(parser.pending_notifications().is_empty());
    }

    #[test]
    fn test_parser_bell() {
        let (mut parser, buffer) = run(b"\x07");
        assert!(buffer.calls().is_empty());
        assert_eq!(parser.take_notifications(), vec![Notification::Bell]);
        assert!(parser.pending_notifications().is_empty());
    }

    #[test]
    fn test_parser_csi_cursor_up() {
        let (parser, buffer) = run(b"\x1b[5A");
        assert_eq!(buffer.calls(), &[BufferCall::CursorUp(5)]);
        assert_eq!(parser.state(), State::Ground);
    }

    #[test]
    fn test_parser_csi_cup() {
        let (_, buffer) = run(b"\x1b[10;20H");
        assert_eq!(
            buffer.calls(),
            &[BufferCall::SetCursorPosition { row: 9, col: 19 }]
        );
    }

    #[test]
    fn test_parser_csi_private() {
        let (_, buffer) = run(b"\x1b[?25l\x1b[?25h");
        assert_eq!(
            buffer.calls(),
            &[
                BufferCall::SetCursorVisible(false),
                BufferCall::SetCursorVisible(true)
            ]
        );
    }

    #[test]
    fn test_parser_csi_sgr() {
        let (_, buffer) = run(b"\x1b[1;31;48;2;255;128;0m");
        let expected = TextAttributes {
            bold: true,
            foreground: Color::RED,
            background: Color::Rgb(255, 128, 0),
            ..TextAttributes::default()
        };
        assert_eq!(buffer.calls(), &[BufferCall::SetAttributes(expected)]);
    }

    #[test]
    fn test_parser_csi_colon_aborts() {
        // ':' is not a valid parameter byte here; the sequence is dropped
        let (parser, buffer) = run(b"\x1b[38:5:1mX");
        assert_eq!(parser.state(), State::Ground);
        assert_eq!(buffer.text(), "5:1mX");
    }

    #[test]
    fn test_parser_csi_intermediate() {
        // DECSCUSR: CSI Ps SP q - accepted, no buffer call
        let (parser, buffer) = run(b"\x1b[2 q");
        assert!(buffer.calls().is_empty());
        assert_eq!(parser.state(), State::Ground);

        // A parameter byte after an intermediate aborts and is consumed
        let (_, buffer) = run(b"\x1b[1 5A");
        assert_eq!(buffer.text(), "A");
    }

    #[test]
    fn test_parser_esc_commands() {
        let (_, buffer) = run(b"\x1b7\x1b8\x1bD\x1bE\x1bH\x1bM\x1bc");
        assert_eq!(
            buffer.calls(),
            &[
                BufferCall::SaveCursor,
                BufferCall::RestoreCursor,
                BufferCall::LineFeed,
                BufferCall::CarriageReturn,
                BufferCall::LineFeed,
                BufferCall::ScrollDown(1),
                BufferCall::Reset,
            ]
        );
    }

    #[test]
    fn test_parser_designate_charset_is_inert() {
        let (parser, buffer) = run(b"\x1b(B\x1b)0x");
        assert_eq!(buffer.calls(), &[BufferCall::WriteChar('x')]);
        assert_eq!(parser.state(), State::Ground);
    }

    #[test]
    fn test_parser_unknown_escape() {
        let (parser, buffer) = run(b"\x1bZy");
        assert_eq!(buffer.text(), "y");
        assert_eq!(parser.state(), State::Ground);
    }

    #[test]
    fn test_parser_osc_title() {
        let (mut parser, buffer) = run(b"\x1b]0;My Title\x07");
        assert!(buffer.calls().is_empty());
        assert_eq!(
            parser.take_notifications(),
            vec![Notification::TitleChanged("My Title".to_string())]
        );
        assert_eq!(parser.state(), State::Ground);
    }

    #[test]
    fn test_parser_osc_with_st() {
        let (mut parser, buffer) = run(b"\x1b]2;Title\x1b\\after");
        assert_eq!(
            parser.take_notifications(),
            vec![Notification::TitleChanged("Title".to_string())]
        );
        assert_eq!(buffer.text(), "after");
    }

    #[test]
    fn test_parser_osc_dispatched_on_escape() {
        // ESC ends the OSC string even when it does not form ST
        let mut parser = Parser::new();
        let mut buffer = RecordingBuffer::new(80, 24);
        parser.parse(&mut buffer, b"\x1b]0;Half\x1b");
        assert_eq!(
            parser.take_notifications(),
            vec![Notification::TitleChanged("Half".to_string())]
        );
        assert_eq!(parser.state(), State::Escape);

        parser.parse(&mut buffer, b"[2J");
        assert_eq!(buffer.calls(), &[BufferCall::Clear]);
    }

    #[test]
    fn test_parser_osc_tab_and_utf8() {
        let (mut parser, _) = run("\x1b]2;a\tb 世界\x07".as_bytes());
        assert_eq!(
            parser.take_notifications(),
            vec![Notification::TitleChanged("a\tb 世界".to_string())]
        );
    }

    #[test]
    fn test_parser_osc_ignores_other_controls() {
        let (mut parser, buffer) = run(b"\x1b]0;a\r\nb\x07");
        assert!(buffer.calls().is_empty());
        assert_eq!(
            parser.take_notifications(),
            vec![Notification::TitleChanged("ab".to_string())]
        );
    }

    #[test]
    fn test_parser_osc_cancel() {
        let (mut parser, buffer) = run(b"\x1b]0;Title\x18x");
        assert!(parser.take_notifications().is_empty());
        assert_eq!(buffer.text(), "x");
    }

    #[test]
    fn test_parser_osc_truncation() {
        let config = ParserConfig {
            max_osc_len: 6,
            ..ParserConfig::default()
        };
        let mut parser = Parser::with_config(config);
        let mut buffer = RecordingBuffer::new(80, 24);
        parser.parse(&mut buffer, b"\x1b]0;abcdefghij\x07");
        assert_eq!(
            parser.take_notifications(),
            vec![Notification::TitleChanged("abcd".to_string())]
        );
    }

    #[test]
    fn test_parser_dcs_discarded() {
        let (mut parser, buffer) = run(b"\x1bP1;2|payload\r\n\x1b\\ok");
        assert_eq!(buffer.text(), "ok");
        assert_eq!(buffer.calls().len(), 2);
        assert!(parser.take_notifications().is_empty());
        assert_eq!(parser.state(), State::Ground);
    }

    #[test]
    fn test_parser_dcs_states() {
        let mut parser = Parser::new();
        let mut buffer = RecordingBuffer::new(80, 24);
        parser.parse(&mut buffer, b"\x1bP");
        assert_eq!(parser.state(), State::DcsEntry);
        parser.parse(&mut buffer, b"1");
        assert_eq!(parser.state(), State::DcsPassthrough);
        parser.parse(&mut buffer, b";2$q");
        assert_eq!(parser.state(), State::DcsPassthrough);
        parser.parse(&mut buffer, &[0x9C]);
        assert_eq!(parser.state(), State::Ground);
        assert!(buffer.calls().is_empty());
    }

    #[test]
    fn test_parser_dcs_header_controls_discarded() {
        let (mut parser, buffer) = run(b"\x1bP1\r\x07;2");
        assert_eq!(parser.state(), State::DcsPassthrough);
        assert!(buffer.calls().is_empty());
        assert!(parser.take_notifications().is_empty());

        // A control right after ESC P is payload too
        let (mut parser, buffer) = run(b"\x1bP\n\x08\x1b\\x");
        assert_eq!(buffer.calls(), &[BufferCall::WriteChar('x')]);
        assert!(parser.take_notifications().is_empty());
    }

    #[test]
    fn test_parser_sos_pm_apc_discarded() {
        for introducer in [b'X', b'^', b'_'] {
            let mut input = vec![0x1b, introducer];
            input.extend_from_slice(b"secret\x07data\x1b\\z");
            let (mut parser, buffer) = run(&input);
            assert_eq!(buffer.text(), "z");
            assert!(parser.take_notifications().is_empty());
        }
    }

    #[test]
    fn test_parser_c1_st_terminates_strings() {
        let (_, buffer) = run(b"\x1b_apc\x9cy");
        assert_eq!(buffer.text(), "y");
    }

    #[test]
    fn test_parser_utf8() {
        let (_, buffer) = run("Hello 世界".as_bytes());
        assert_eq!(buffer.text(), "Hello 世界");
    }

    #[test]
    fn test_parser_utf8_chunk_boundary() {
        let mut parser = Parser::new();
        let mut buffer = RecordingBuffer::new(80, 24);

        // UTF-8 for '世' is E4 B8 96
        parser.parse(&mut buffer, &[0xE4]);
        parser.parse(&mut buffer, &[0xB8]);
        assert!(buffer.calls().is_empty());
        parser.parse(&mut buffer, &[0x96]);
        assert_eq!(buffer.calls(), &[BufferCall::WriteChar('世')]);
    }

    #[test]
    fn test_parser_truncated_utf8() {
        let (_, buffer) = run(&[0xE4, 0xB8, b'a', 0xFF]);
        assert_eq!(buffer.text(), "\u{FFFD}a\u{FFFD}");
    }

    #[test]
    fn test_parser_truncated_utf8_before_escape() {
        let (parser, buffer) = run(&[0xC3, 0x1b, b'[', b'2', b'J']);
        assert_eq!(
            buffer.calls(),
            &[BufferCall::WriteChar('\u{FFFD}'), BufferCall::Clear]
        );
        assert_eq!(parser.state(), State::Ground);
    }

    #[test]
    fn test_parser_chunk_boundary() {
        let mut parser = Parser::new();
        let mut buffer = RecordingBuffer::new(80, 24);

        parser.parse(&mut buffer, b"\x1b[");
        assert_eq!(parser.state(), State::CsiEntry);
        parser.parse(&mut buffer, b"5");
        assert_eq!(parser.state(), State::CsiParam);
        assert!(buffer.calls().is_empty());
        parser.parse(&mut buffer, b"A");
        assert_eq!(buffer.calls(), &[BufferCall::CursorUp(5)]);
    }

    #[test]
    fn test_parser_cancel_sequence() {
        let (parser, buffer) = run(b"\x1b[5\x18A");
        assert_eq!(buffer.calls(), &[BufferCall::WriteChar('A')]);
        assert_eq!(parser.state(), State::Ground);

        let (_, buffer) = run(b"\x1b[5\x1aA");
        assert_eq!(buffer.calls(), &[BufferCall::WriteChar('A')]);
    }

    #[test]
    fn test_parser_c0_inside_csi_keeps_sequence() {
        let (_, buffer) = run(b"\x1b[1\r0C");
        assert_eq!(
            buffer.calls(),
            &[BufferCall::CarriageReturn, BufferCall::CursorForward(10)]
        );
    }

    #[test]
    fn test_parser_escape_restarts_sequence() {
        let (_, buffer) = run(b"\x1b[12\x1b[3B");
        assert_eq!(buffer.calls(), &[BufferCall::CursorDown(3)]);
    }

    #[test]
    fn test_parser_intermediates_reset_between_sequences() {
        // The '?' from the first sequence must not leak into the second
        let (_, buffer) = run(b"\x1b[?7l\x1b[7l\x1b[6h");
        assert_eq!(buffer.calls(), &[BufferCall::SetAutoWrapMode(false)]);
    }

    #[test]
    fn test_parser_empty_params() {
        let (_, buffer) = run(b"\x1b[H\x1b[;5H");
        assert_eq!(
            buffer.calls(),
            &[
                BufferCall::SetCursorPosition { row: 0, col: 0 },
                BufferCall::SetCursorPosition { row: 0, col: 4 },
            ]
        );
    }

    #[test]
    fn test_parser_param_limits() {
        let config = ParserConfig {
            max_params: 2,
            ..ParserConfig::default()
        };
        let mut parser = Parser::with_config(config);
        let mut buffer = RecordingBuffer::new(80, 24);
        parser.parse(&mut buffer, b"\x1b[3;4;5;6H");
        assert_eq!(
            buffer.calls(),
            &[BufferCall::SetCursorPosition { row: 2, col: 3 }]
        );
    }

    #[test]
    fn test_parser_reset() {
        let mut parser = Parser::new();
        let mut buffer = RecordingBuffer::new(80, 24);
        parser.parse(&mut buffer, b"\x1b]0;partial");
        assert_eq!(parser.state(), State::OscString);
        parser.reset();
        assert_eq!(parser.state(), State::Ground);
        parser.parse(&mut buffer, b"\x07x");
        // BEL in ground is a bell, not an OSC terminator
        assert_eq!(parser.take_notifications(), vec![Notification::Bell]);
        assert_eq!(buffer.text(), "x");
    }

    #[test]
    fn test_parser_every_byte_in_every_state() {
        let prefixes: [&[u8]; 12] = [
            b"",
            b"\x1b",
            b"\x1b(",
            b"\x1b[",
            b"\x1b[1",
            b"\x1b[1 ",
            b"\x1b]0;",
            b"\x1bP",
            b"\x1bP1",
            b"\x1bP$",
            b"\x1bPq",
            b"\x1b_",
        ];
        for prefix in prefixes {
            for byte in 0..=255u8 {
                let mut parser = Parser::new();
                let mut buffer = RecordingBuffer::new(80, 24);
                parser.parse(&mut buffer, prefix);
                parser.process(&mut buffer, byte);
            }
        }
    }
}
