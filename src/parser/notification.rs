//! Out-of-band notifications
//!
//! Events the parser raises that are not buffer operations. They are queued
//! on the parser and drained by the caller after feeding input, so handling
//! a notification can never re-enter the parser mid-byte.

use serde::{Deserialize, Serialize};

/// A notification raised while decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// BEL outside of an OSC string
    Bell,
    /// OSC 0/1/2 - window or icon title
    TitleChanged(String),
    /// OSC 7 - shell reported its working directory (decoded path)
    WorkingDirectoryChanged(String),
    /// OSC 8 - hyperlink start; `params` is `None` when empty
    HyperlinkDetected { params: Option<String>, uri: String },
}
