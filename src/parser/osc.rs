//! OSC (Operating System Command) dispatch
//!
//! An OSC payload has the form `<command>;<argument>`. The command must be
//! a non-negative decimal integer and the first `;` is the split point.
//! Supported commands:
//!
//! - `0`, `1`, `2`: window/icon title
//! - `7`: working directory as a `file://host/path` URL
//! - `8`: hyperlink as `<params>;<uri>`
//!
//! Anything else is parsed and ignored.

use percent_encoding::percent_decode_str;

use super::notification::Notification;

const FILE_SCHEME: &str = "file://";

/// Dispatch a complete OSC payload, queueing any resulting notification
pub fn dispatch_osc(data: &[u8], notifications: &mut Vec<Notification>) {
    let text = String::from_utf8_lossy(data);

    let Some((command, argument)) = split_command(&text) else {
        log::debug!("Discarding malformed OSC: {:?}", text);
        return;
    };

    match command {
        0..=2 => notifications.push(Notification::TitleChanged(argument.to_string())),
        7 => {
            if let Some(path) = working_directory(argument) {
                notifications.push(Notification::WorkingDirectoryChanged(path));
            } else {
                log::debug!("Ignoring OSC 7 without a file:// path: {:?}", argument);
            }
        }
        8 => {
            if let Some(notification) = hyperlink(argument) {
                notifications.push(notification);
            }
        }
        _ => {
            log::debug!("Unhandled OSC {}: {:?}", command, argument);
        }
    }
}

/// Split `<int>;<rest>`; `None` if the `;` is missing or leads the string,
/// or if the command is not a decimal integer.
fn split_command(text: &str) -> Option<(u32, &str)> {
    let (command, argument) = text.split_once(';')?;
    if command.is_empty() || !command.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let command = command.parse().ok()?;
    Some((command, argument))
}

/// Extract the percent-decoded path from a `file://` URL.
///
/// The path starts at the third `/`, i.e. after the optional host segment.
fn working_directory(url: &str) -> Option<String> {
    let scheme = url.get(..FILE_SCHEME.len())?;
    if !scheme.eq_ignore_ascii_case(FILE_SCHEME) {
        return None;
    }
    let after_scheme = &url[FILE_SCHEME.len()..];
    let path_start = after_scheme.find('/')?;
    let path = &after_scheme[path_start..];
    Some(percent_decode_str(path).decode_utf8_lossy().into_owned())
}

/// Parse `<params>;<uri>`; only a non-empty uri produces a notification
fn hyperlink(argument: &str) -> Option<Notification> {
    let (params, uri) = argument.split_once(';')?;
    if uri.is_empty() {
        return None;
    }
    let params = if params.is_empty() {
        None
    } else {
        Some(params.to_string())
    };
    Some(Notification::HyperlinkDetected {
        params,
        uri: uri.to_string(),
    })
}
