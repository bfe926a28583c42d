use super::*;
use crate::matching::normalize;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Short-circuit Tests
// ============================================================================

#[test]
fn test_similarity_empty_inputs() {
    assert_eq!(similarity("", ""), 0.0);
    assert_eq!(similarity("", "laptop"), 0.0);
    assert_eq!(similarity("laptop", ""), 0.0);
}

#[test]
fn test_similarity_reflexive() {
    for text in ["laptop", "gaming maus rgb", "x", "東京", "der"] {
        assert_eq!(similarity(text, text), 1.0, "'{text}' vs itself");
    }
}

#[test]
fn test_similarity_containment_bonus() {
    assert_eq!(similarity("laptop", "dieser laptop ist super"), CONTAINMENT_SCORE);
    assert_eq!(similarity("top", "laptop"), CONTAINMENT_SCORE);
    assert!(matches!(
        SimilarityScorer::default().compare("usb kabel", "usb kabel 2m schwarz"),
        Similarity::Contained
    ));
}

#[test]
fn test_similarity_is_directional() {
    // containment only applies when the target holds the search phrase
    let forward = similarity("laptop", "laptop tasche");
    let backward = similarity("laptop tasche", "laptop");
    assert_eq!(forward, CONTAINMENT_SCORE);
    assert!(backward < CONTAINMENT_SCORE);
}

// ============================================================================
// Blended Score Tests
// ============================================================================

#[test]
fn test_similarity_blended_components() {
    let scorer = SimilarityScorer::default();
    let Similarity::Blended(blended) = scorer.compare("laptop", "notebook") else {
        panic!("expected a blended score");
    };

    assert_eq!(blended.word_match, 0.0);
    assert_close(blended.character_ratio, 4.0 / 14.0);
    assert_eq!(blended.bigram_jaccard, 0.0);
    let levenshtein = blended.levenshtein.expect("short strings use edit distance");

    let expected = (blended.character_ratio + levenshtein) / 4.0;
    assert_close(blended.score, expected);
}

#[test]
fn test_similarity_skips_levenshtein_for_long_search() {
    let search = "ein sehr langer suchbegriff mit vielen worten";
    let Similarity::Blended(blended) = SimilarityScorer::default().compare(search, "kurz") else {
        panic!("expected a blended score");
    };
    assert!(blended.levenshtein.is_none());
}

#[test]
fn test_similarity_skips_levenshtein_for_long_target() {
    let target = "a".repeat(LEVENSHTEIN_MAX_TARGET_LEN + 1);
    let Similarity::Blended(blended) = SimilarityScorer::default().compare("bb", &target) else {
        panic!("expected a blended score");
    };
    assert!(blended.levenshtein.is_none());

    let target = "a".repeat(LEVENSHTEIN_MAX_TARGET_LEN);
    let Similarity::Blended(blended) = SimilarityScorer::default().compare("bb", &target) else {
        panic!("expected a blended score");
    };
    assert_eq!(blended.levenshtein, Some(0.0));
}

#[test]
fn test_similarity_clamps_boosted_average() {
    // Every search token matches exactly, so word_match * 1.5 = 1.5 alone
    // and the average would overshoot without the clamp.
    let scorer = SimilarityScorer::default();
    let Similarity::Blended(blended) = scorer.compare("maus gaming", "gaming maus") else {
        panic!("expected a blended score");
    };
    assert_eq!(blended.word_match, 1.0);
    assert!(blended.score <= 1.0);
    assert!(blended.score > 0.7);
}

#[test]
fn test_similarity_range() {
    let samples = [
        "laptop",
        "gaming laptop",
        "laptoptasche",
        "notebook 15 zoll",
        "lap",
        "x",
        "smartphone huelle",
        "usb c kabel 2m",
        "東京タワー",
        "ein sehr langer produkttitel der weit ueber fuenfzig zeichen hinausgeht und mehr",
    ];
    for a in samples {
        for b in samples {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "{a} vs {b} gave {score}");
        }
    }
}

#[test]
fn test_similarity_uses_configured_stopwords() {
    let custom = Tokenizer::default().with_extra_stopwords(["gaming"]);
    let scorer = SimilarityScorer::new(&custom);
    assert_eq!(scorer.word_match_score("gaming maus", "gaming tastatur"), 0.0);
    assert_eq!(
        SimilarityScorer::default().word_match_score("gaming maus", "gaming tastatur"),
        0.5
    );
}

// ============================================================================
// Word Match Tests
// ============================================================================

#[test]
fn test_word_match_exact_token() {
    let scorer = SimilarityScorer::default();
    let target = normalize("Dieser Laptop ist super");
    assert_eq!(scorer.word_match_score("laptop", &target), 1.0);
}

#[test]
fn test_word_match_prefix_credit() {
    let scorer = SimilarityScorer::default();
    assert_close(scorer.word_match_score("lap", "laptop tasche"), PREFIX_TOKEN_CREDIT);
    assert_close(scorer.word_match_score("laptoptasche", "laptop"), PREFIX_TOKEN_CREDIT);
}

#[test]
fn test_word_match_substring_credit() {
    let scorer = SimilarityScorer::default();
    assert_close(scorer.word_match_score("top", "laptop"), SUBSTRING_TOKEN_CREDIT);
}

#[test]
fn test_word_match_first_partial_hit_wins() {
    // "tasche" is contained in "laptoptasche" (0.4) before the prefix hit
    // on "taschenlampe" (0.7) is reached
    let scorer = SimilarityScorer::default();
    assert_close(
        scorer.word_match_score("tasche", "laptoptasche taschenlampe"),
        SUBSTRING_TOKEN_CREDIT,
    );
}

#[test]
fn test_word_match_averages_over_search_tokens() {
    let scorer = SimilarityScorer::default();
    assert_close(
        scorer.word_match_score("rotes kleid sommer", "kleid blau"),
        1.0 / 3.0,
    );
}

#[test]
fn test_word_match_empty_token_lists() {
    let scorer = SimilarityScorer::default();
    assert_eq!(scorer.word_match_score("und der", "laptop"), 0.0);
    assert_eq!(scorer.word_match_score("laptop", "x y"), 0.0);
}

// ============================================================================
// Component Algorithm Tests
// ============================================================================

#[test]
fn test_similar_text_known_values() {
    assert_eq!(similar_text("World", "Word"), 4);
    assert_eq!(similar_text("bafoobar", "barfoo"), 5);
    assert_eq!(similar_text("barfoo", "bafoobar"), 3);
    assert_eq!(similar_text("abc", "xyz"), 0);
    assert_eq!(similar_text("", "abc"), 0);
}

#[test]
fn test_similar_text_leftmost_tie_break() {
    // "ab" and "cd" are both length-2 runs; the leftmost in `a` anchors the
    // split, leaving "cd" on the wrong side of it in `b`
    assert_eq!(similar_text("abcd", "cdab"), 2);
}

#[test]
fn test_similar_text_ratio() {
    assert_close(similar_text_ratio("World", "Word"), 8.0 / 9.0);
    assert_eq!(similar_text_ratio("", ""), 0.0);
    assert_eq!(similar_text_ratio("same", "same"), 1.0);
}

#[test]
fn test_similar_text_counts_characters() {
    assert_eq!(similar_text("東京タワー", "京タ"), 2);
}

#[test]
fn test_bigram_jaccard() {
    // {la, ap, pt, to, op} vs {la, ap}
    assert_close(bigram_jaccard("laptop", "lap"), 2.0 / 5.0);
    assert_eq!(bigram_jaccard("abc", "abc"), 1.0);
    assert_eq!(bigram_jaccard("abc", "xyz"), 0.0);
}

#[test]
fn test_bigram_jaccard_ignores_whitespace() {
    assert_eq!(bigram_jaccard("usb kabel", "usbkabel"), 1.0);
}

#[test]
fn test_bigram_jaccard_short_strings() {
    assert_eq!(bigram_jaccard("a", "a"), 1.0);
    assert_eq!(bigram_jaccard("a", "ab"), 0.0);
}

#[test]
fn test_levenshtein_ratio() {
    assert_close(levenshtein_ratio("kitten", "sitting"), 1.0 - 3.0 / 7.0);
    assert_eq!(levenshtein_ratio("same", "same"), 1.0);
    assert_eq!(levenshtein_ratio("", ""), 0.0);
}

#[test]
fn test_levenshtein_ratio_truncates_inputs() {
    let a = "a".repeat(300);
    let b = format!("{}{}", "a".repeat(LEVENSHTEIN_MAX_INPUT_LEN), "b".repeat(45));
    assert_eq!(levenshtein_ratio(&a, &b), 1.0);
}
