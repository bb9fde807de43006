//! Terminal Escape Sequence Parser
//!
//! Decodes the byte stream of an ANSI/VT100/xterm program and drives a
//! [`Buffer`](crate::core::Buffer) with the resulting operations.
//!
//! The parser is incremental: it may be fed one byte at a time or in chunks
//! of any size, and partial sequences are resumed on the next call. Events
//! that do not touch the buffer (bell, title, working directory, hyperlink)
//! are queued as [`Notification`]s for the caller to drain.

mod control;
mod csi;
mod notification;
mod osc;
mod params;
mod sgr;
mod state;
mod utf8;

pub use control::{c0, c1};
pub use csi::dispatch_csi;
pub use notification::Notification;
pub use osc::dispatch_osc;
pub use params::{Params, DEFAULT_MAX_PARAMS};
pub use sgr::apply_sgr;
pub use state::{Parser, State};
