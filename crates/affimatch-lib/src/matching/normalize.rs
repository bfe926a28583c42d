//! Text canonicalization shared by every comparison in the matcher
//!
//! Pipeline: NFC composition, Unicode lowercasing, German diacritic
//! transliteration, non-alphanumeric stripping, whitespace collapsing.

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw text into its comparable form
///
/// Composition runs first so that a decomposed `a` + combining diaeresis
/// transliterates the same way as a precomposed `ä`.
///
/// # Examples
///
/// ```
/// use affimatch_lib::matching::normalize;
///
/// assert_eq!(normalize("  Größe: XL!  "), "groesse xl");
/// assert_eq!(normalize("Über-Fön 3000"), "ueber foen 3000");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.nfc().collect::<String>().to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for ch in lowered.chars() {
        let replacement = match ch {
            'ä' => Some("ae"),
            'ö' => Some("oe"),
            'ü' => Some("ue"),
            'ß' => Some("ss"),
            _ => None,
        };

        if let Some(expanded) = replacement {
            push_word_part(&mut out, &mut pending_space, expanded);
        } else if ch.is_letter() || ch.is_number() {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        } else if !out.is_empty() {
            // punctuation and whitespace both collapse into one separator
            pending_space = true;
        }
    }

    out
}

fn push_word_part(out: &mut String, pending_space: &mut bool, part: &str) {
    if *pending_space {
        out.push(' ');
        *pending_space = false;
    }
    out.push_str(part);
}

#[cfg(test)]
mod tests {
    include!("normalize.test.rs");
}
