//! Terminal Core Module
//!
//! Value types and the screen-model interface the parser drives:
//! - Colors and text attributes
//! - The [`Buffer`] trait implemented by a screen model
//! - [`RecordingBuffer`], a buffer that logs every call it receives
//!
//! The decoder itself keeps no screen state; everything here is either a
//! plain value or an interface.

mod attributes;
mod buffer;
mod color;
mod recorder;

pub use attributes::{AttributeOverrides, TextAttributes};
pub use buffer::Buffer;
pub use color::Color;
pub use recorder::{BufferCall, RecordingBuffer};
