//! Keeps player input on one log line.

/// Longest slice of input copied into a log line.
const MAX_PREVIEW: usize = 120;

/// Escape control characters (`\n`, `\r`, `\t`, backslash, and anything else
/// as `\u{..}`) and cut the text at [`MAX_PREVIEW`] chars with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        if ch == '\\' || ch.is_control() {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}
