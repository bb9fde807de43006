//! Incremental UTF-8 decoding for ground-state text

use std::fmt;

use utf8parse::Receiver;

#[derive(Default)]
struct Decoded {
    inner: Option<char>,
}

impl Receiver for Decoded {
    fn codepoint(&mut self, c: char) {
        self.inner.replace(c);
    }

    fn invalid_sequence(&mut self) {
        self.codepoint(char::REPLACEMENT_CHARACTER);
    }
}

/// Byte-at-a-time UTF-8 decoder whose state survives chunk boundaries
#[derive(Default)]
pub(crate) struct Utf8Decoder {
    inner: utf8parse::Parser,
    pending: bool,
}

impl Utf8Decoder {
    /// Feed one byte >= 0x80; returns a character once one is complete
    pub(crate) fn advance(&mut self, byte: u8) -> Option<char> {
        let mut decoded = Decoded::default();
        self.inner.advance(&mut decoded, byte);
        self.pending = decoded.inner.is_none();
        decoded.inner
    }

    /// Whether a multi-byte character is partially decoded
    pub(crate) fn is_pending(&self) -> bool {
        self.pending
    }

    pub(crate) fn reset(&mut self) {
        self.inner = utf8parse::Parser::new();
        self.pending = false;
    }
}

impl fmt::Debug for Utf8Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Utf8Decoder")
            .field("pending", &self.pending)
            .finish()
    }
}

/// UTF-8 continuation byte (10xxxxxx)
pub(crate) fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
