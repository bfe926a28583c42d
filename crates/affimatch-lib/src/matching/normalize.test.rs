use super::*;

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   \t\n "), "");
    assert_eq!(normalize("?!.,"), "");
}

#[test]
fn test_normalize_lowercases_unicode() {
    assert_eq!(normalize("LAPTOP"), "laptop");
    assert_eq!(normalize("ÉCOLE"), "école");
    assert_eq!(normalize("ΣΟΦΙΑ"), "σοφια");
}

#[test]
fn test_normalize_german_diacritics() {
    assert_eq!(normalize("Äpfel"), "aepfel");
    assert_eq!(normalize("schön"), "schoen");
    assert_eq!(normalize("Müller"), "mueller");
    assert_eq!(normalize("Straße"), "strasse");
}

#[test]
fn test_normalize_decomposed_diacritics() {
    // "u" followed by U+0308 COMBINING DIAERESIS
    assert_eq!(normalize("Mu\u{0308}ller"), "mueller");
}

#[test]
fn test_normalize_strips_punctuation() {
    assert_eq!(normalize("Smart-Phone (2024), neu!"), "smart phone 2024 neu");
    assert_eq!(normalize("a/b\\c"), "a b c");
}

#[test]
fn test_normalize_collapses_whitespace() {
    assert_eq!(normalize("  rotes   \t Kleid \n"), "rotes kleid");
}

#[test]
fn test_normalize_keeps_other_scripts() {
    assert_eq!(normalize("東京 タワー"), "東京 タワー");
    assert_eq!(normalize("Привет, мир"), "привет мир");
}

#[test]
fn test_normalize_keeps_digits() {
    assert_eq!(normalize("iPhone 15 Pro"), "iphone 15 pro");
    assert_eq!(normalize("½ Liter"), "½ liter");
}

#[test]
fn test_normalize_is_idempotent() {
    for input in ["Größe: XL!", "Über-Fön 3000", "  the  Quick,brown  ", "ÄÖÜ ß"] {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}
