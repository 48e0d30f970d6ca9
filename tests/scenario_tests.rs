use wylie::{Wylie, WylieOptions};

// End-to-end scenarios for both conversion directions, including the
// boundary cases around empty input, comments and escapes.

#[test]
fn sems_can_thams_cad() {
    let converter = Wylie::new();
    let result = converter.from_wylie("sems can thams cad");
    assert_eq!(result.output, "སེམས་ཅན་ཐམས་ཅད");
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);

    // with a trailing space the final tsek appears too
    let result = converter.from_wylie("sems can thams cad ");
    assert_eq!(
        result.output,
        "\u{0f66}\u{0f7a}\u{0f58}\u{0f66}\u{0f0b}\u{0f45}\u{0f53}\u{0f0b}\u{0f50}\u{0f58}\u{0f66}\u{0f0b}\u{0f45}\u{0f51}\u{0f0b}"
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn bka_gyur() {
    let converter = Wylie::new();
    let result = converter.from_wylie("bka' 'gyur");
    assert_eq!(result.output, "བཀའ་འགྱུར");
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn ambiguous_syllable_suggestions() {
    let converter = Wylie::new();

    // dgs-skeleton: typing the root after the prefix draws the canonical form
    let result = converter.from_wylie("dags");
    assert_eq!(result.warnings.len(), 1);
    assert!(
        result.warnings[0].contains("should probably be \"dgas\""),
        "{:?}",
        result.warnings
    );

    // mngs-skeleton
    let result = converter.from_wylie("mngas");
    assert_eq!(result.warnings.len(), 1);
    assert!(
        result.warnings[0].contains("should probably be \"mangs\""),
        "{:?}",
        result.warnings
    );

    // the suggested spelling gives the same Unicode, with no warnings
    let suggested = converter.from_wylie("dgas");
    assert!(suggested.warnings.is_empty());
    assert_eq!(suggested.output, converter.from_wylie("dags").output);

    let suggested = converter.from_wylie("mangs");
    assert!(suggested.warnings.is_empty());
    assert_eq!(suggested.output, converter.from_wylie("mngas").output);
}

#[test]
fn explicit_sanskrit_stack() {
    let converter = Wylie::new();
    let result = converter.from_wylie("k+Sh");
    assert_eq!(result.output, "\u{0f40}\u{0fb5}");
}

#[test]
fn phyogs_with_suffix_recognition() {
    let converter = Wylie::new();
    let result = converter.to_wylie("ཕྱོགས་", true);
    assert_eq!(result.output, "phyogs ");
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn empty_input() {
    let converter = Wylie::new();
    let result = converter.from_wylie("");
    assert_eq!(result.output, "");
    assert_eq!(result.warnings, vec!["No Tibetan characters found!".to_string()]);
}

#[test]
fn spaces_only_with_fix_spacing() {
    let converter = Wylie::new();
    let result = converter.from_wylie("    ");
    assert_eq!(result.output, "");
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn bom_only() {
    let converter = Wylie::new();
    let result = converter.from_wylie("\u{feff}");
    assert_eq!(result.output, "");
    assert_eq!(result.warnings, vec!["No Tibetan characters found!".to_string()]);
}

#[test]
fn nested_comments_close_correctly() {
    let converter = Wylie::new();
    let result = converter.from_wylie("[[one] two] ka");
    assert_eq!(result.output, "[one] two\u{0f0b}\u{0f40}");
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn bad_hex_escape_warns_and_drops() {
    let converter = Wylie::new();
    let result = converter.from_wylie("\\uzz12 ka");
    assert_eq!(result.output, "\u{0f0b}\u{0f40}");
    assert!(
        result.warnings.iter().any(|w| w.contains("invalid hex code")),
        "{:?}",
        result.warnings
    );
}

#[test]
fn truncated_escape_at_end_of_input() {
    let converter = Wylie::new();
    // not enough characters for \uXXXX: the bare \u escape spells "u"
    let result = converter.from_wylie("ka\\u");
    assert_eq!(result.output, "\u{0f40}u");
}

#[test]
fn keep_spacing_mode() {
    let opts = WylieOptions {
        fix_spacing: false,
        ..WylieOptions::default()
    };
    let converter = Wylie::with_options(opts).unwrap();
    // every space becomes its own tsek, and leading spaces survive
    let result = converter.from_wylie(" ka  kha");
    assert_eq!(
        result.output,
        "\u{0f0b}\u{0f40}\u{0f0b}\u{0f0b}\u{0f41}"
    );
}

#[test]
fn underscore_is_a_literal_space() {
    let converter = Wylie::new();
    let result = converter.from_wylie("ka_kha");
    assert_eq!(result.output, "\u{0f40} \u{0f41}");
}

#[test]
fn digits_and_punctuation() {
    let converter = Wylie::new();
    let result = converter.from_wylie("123 /");
    assert_eq!(
        result.output,
        "\u{0f21}\u{0f22}\u{0f23}\u{0f0b}\u{0f0d}"
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn unexpected_characters_warn_but_survive() {
    let converter = Wylie::new();
    let result = converter.from_wylie("ka q");
    assert_eq!(result.output, "\u{0f40}\u{0f0b}q");
    assert!(
        result.warnings.iter().any(|w| w.contains("Unexpected character \"q\"")),
        "{:?}",
        result.warnings
    );
}

#[test]
fn escape_mode_wraps_foreign_text() {
    let converter = Wylie::new();
    let result = converter.to_wylie("ཀ་hello ཁ", true);
    assert_eq!(result.output, "ka [hello ]kha");
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn passthrough_mode_keeps_foreign_text() {
    let converter = Wylie::new();
    let result = converter.to_wylie("ཀ་hello ཁ", false);
    assert_eq!(result.output, "ka hello kha");
}
