//! VT Decoder Library
//!
//! An incremental decoder for the escape sequences emitted by terminal
//! programs (VT100, ANSI, xterm). It keeps no screen of its own: decoded
//! operations are forwarded to a caller-supplied buffer.
//!
//! - `core`: Colors, text attributes, the `Buffer` interface and a recording buffer
//! - `parser`: The state machine and its CSI/SGR/OSC dispatchers
//! - `config`: Parser limits, loadable from JSON

pub mod config;
pub mod core;
pub mod parser;

pub use config::{ConfigError, ParserConfig};
pub use core::{Buffer, Color, TextAttributes};
pub use parser::{Notification, Parser, State};
