//! Character-encoding detection for Japanese text files.
//!
//! The tool accepts UTF-8, ISO-2022-JP, Shift_JIS, and EUC-JP input. The
//! probe chain tries each candidate in turn and keeps the first decode
//! that produces no replacement characters; input that matches none of
//! them falls back to lossy UTF-8 rather than failing.

use encoding_rs::{EUC_JP, ISO_2022_JP, SHIFT_JIS};
use tracing::debug;

/// Escape that switches ISO-2022-JP into a double-byte character set.
const ISO_2022_KANJI_ESCAPE: &[u8] = b"\x1b$";

/// Decodes raw bytes to a UTF-8 string.
///
/// ISO-2022-JP is a pure 7-bit encoding, so its byte stream is also valid
/// UTF-8; it is probed first, keyed on its kanji-mode escape sequence, or
/// plain UTF-8 would always win.
pub fn decode_japanese(bytes: &[u8]) -> String {
    if bytes
        .windows(ISO_2022_KANJI_ESCAPE.len())
        .any(|window| window == ISO_2022_KANJI_ESCAPE)
    {
        let (text, _, had_errors) = ISO_2022_JP.decode(bytes);
        if !had_errors {
            debug!(encoding = ISO_2022_JP.name(), "decoded input");
            return text.into_owned();
        }
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_owned();
    }

    for encoding in [SHIFT_JIS, EUC_JP] {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            debug!(encoding = encoding.name(), "decoded input");
            return text.into_owned();
        }
    }

    debug!("no encoding matched, falling back to lossy UTF-8");
    String::from_utf8_lossy(bytes).into_owned()
}
