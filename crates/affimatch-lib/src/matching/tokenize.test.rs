use super::*;

#[test]
fn test_tokenize_drops_stopwords() {
    assert_eq!(tokenize("dieser laptop ist super"), vec!["laptop", "super"]);
    assert_eq!(tokenize("the best of both worlds"), vec!["best", "both", "worlds"]);
}

#[test]
fn test_tokenize_drops_short_tokens() {
    assert_eq!(tokenize("a b c usb c kabel"), vec!["usb", "kabel"]);
}

#[test]
fn test_tokenize_keeps_duplicates_and_order() {
    assert_eq!(
        tokenize("kabel usb kabel hdmi"),
        vec!["kabel", "usb", "kabel", "hdmi"]
    );
}

#[test]
fn test_tokenize_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("und der die").is_empty());
}

#[test]
fn test_tokenize_counts_characters_not_bytes() {
    // "ü" alone is one character but two bytes; it must still be dropped
    let tokenizer = Tokenizer::default();
    assert!(tokenizer.tokenize("ü").is_empty());
    assert_eq!(tokenizer.tokenize("日本"), vec!["日本"]);
}

#[test]
fn test_builtin_lists_are_normalized() {
    for word in GERMAN_STOPWORDS.iter().chain(ENGLISH_STOPWORDS) {
        assert_eq!(normalize(word), *word, "stopword '{word}' is not normalized");
    }
}

#[test]
fn test_builtin_set_size() {
    let tokenizer = Tokenizer::default();
    let total = GERMAN_STOPWORDS.len() + ENGLISH_STOPWORDS.len();
    // overlap between the lists ("in", "an", "so", ...) collapses in the set
    assert!(tokenizer.stopword_count() < total);
    assert!(tokenizer.stopword_count() >= 100);
}

#[test]
fn test_extra_stopwords_are_normalized() {
    let tokenizer = Tokenizer::default().with_extra_stopwords(["Günstig", "  ", "NEU"]);
    assert!(tokenizer.is_stopword("guenstig"));
    assert!(tokenizer.is_stopword("neu"));
    assert!(!tokenizer.is_stopword(""));
    assert_eq!(
        tokenizer.tokenize("guenstig laptop neu"),
        vec!["laptop"]
    );
}

#[test]
fn test_builtin_is_shared() {
    assert!(std::ptr::eq(Tokenizer::builtin(), Tokenizer::builtin()));
    assert_eq!(*Tokenizer::builtin(), Tokenizer::default());
}
