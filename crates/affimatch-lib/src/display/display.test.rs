use super::*;

fn render(color: bool, f: impl FnOnce(&mut StatusDisplay<Vec<u8>>) -> std::io::Result<()>) -> String {
    let mut display = StatusDisplay::new(Vec::new(), color);
    f(&mut display).unwrap();
    String::from_utf8(display.into_inner()).unwrap()
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    let output = render(false, |d| {
        d.section("Ranking")?;
        d.success("3 matches", "threshold 30")?;
        d.error("catalog", "")?;
        d.warning("careful")?;
        d.info("note")?;
        d.subtle("quiet")
    });

    assert!(!output.contains('\u{1b}'));
    assert_eq!(
        output,
        "→ Ranking\n✓ 3 matches: threshold 30\n✗ catalog\n! careful\n· note\nquiet\n"
    );
}

#[test]
fn test_color_output_is_styled() {
    let output = render(true, |d| d.success("done", ""));
    assert!(output.contains('\u{1b}'));
    assert!(output.contains("done"));
}

#[test]
fn test_ranked_row_alignment() {
    let output = render(false, |d| {
        d.ranked(1, 79.75, "Gaming Laptop")?;
        d.ranked(12, 5.0, "Tasche")
    });
    assert_eq!(output, "   1.  79.75  Gaming Laptop\n  12.   5.00  Tasche\n");
}

#[test]
fn test_field_and_list_rows() {
    let output = render(false, |d| {
        d.field("title", "1.0000")?;
        d.list(&["laptop", "notebook"])
    });
    assert_eq!(
        output,
        "  title        1.0000\n  • laptop\n  • notebook\n"
    );
}

#[test]
fn test_style_manager_respects_color_flag() {
    assert_eq!(StyleManager::new(false).style_emphasis("x"), "x");
    assert_ne!(StyleManager::new(true).style_emphasis("x"), "x");
    assert!(StyleManager::new(true).color());
}
