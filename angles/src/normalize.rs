//! Bringing the operator's input to the form the grammars expect

use std::borrow::Cow;

/// Trim the text, squeeze the inner whitespaces into a single space,
/// replace the decimal comma with the decimal point and upper-case the letters.
///
///```
/// # use aviation_angles::normalize;
/// assert_eq!(normalize("  s45  30\t15,5 "), "S45 30 15.5");
/// assert_eq!(normalize("N45 30 15"), "N45 30 15");
/// ```
pub fn normalize(raw: &str) -> Cow<'_, str> {
    let mut normal = String::with_capacity(raw.len());
    let mut pending_space = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }

        if pending_space {
            normal.push(' ');
            pending_space = false;
        }

        normal.push(match ch {
            ',' => '.',
            ch => ch.to_ascii_uppercase(),
        });
    }

    if normal == raw {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(normal)
    }
}
