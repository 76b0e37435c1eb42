//! Title casing for report output.

/// Title-cases a name.
///
/// A cased character that follows a non-cased character (or starts the
/// string) is upper-cased; every other cased character is lower-cased.
/// Digits and punctuation break words, so `D'IVOIRE` becomes `D'Ivoire`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_cased = false;
    for ch in value.chars() {
        let cased = ch.is_uppercase() || ch.is_lowercase();
        if cased && previous_cased {
            out.extend(ch.to_lowercase());
        } else if cased {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }
    out
}
