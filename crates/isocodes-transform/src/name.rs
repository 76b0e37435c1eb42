//! Official name normalization.

use std::borrow::Cow;

/// Rewrites a `"LAST, FIRST"` name into `"FIRST LAST"`.
///
/// Names containing a comma are split on commas: the first piece is the
/// last part, the second piece the first part, and any further pieces are
/// dropped. The reassembled name is trimmed. Names without a comma are
/// returned unchanged and untrimmed, so their surrounding whitespace still
/// counts toward the sort key length.
///
/// Re-applying this function to a comma-path result is a no-op only because
/// the result no longer contains the comma that triggered the rewrite; it is
/// not idempotent for names that carried a third comma-separated piece.
///
/// ```
/// use isocodes_transform::normalize_name;
///
/// assert_eq!(normalize_name("KOREA, REPUBLIC OF"), "REPUBLIC OF KOREA");
/// assert_eq!(normalize_name(" Italy "), " Italy ");
/// ```
pub fn normalize_name(name: &str) -> Cow<'_, str> {
    if !name.contains(',') {
        return Cow::Borrowed(name);
    }
    let mut pieces = name.split(',');
    let last = pieces.next().unwrap_or_default();
    let first = pieces.next().unwrap_or_default();
    Cow::Owned(format!("{first} {last}").trim().to_string())
}
