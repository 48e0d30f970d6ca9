use rustc_hash::FxHashMap;

use crate::modules::core::WarningSink;
use crate::modules::tables;

// Unicode -> EWTS Module
//
// The stack decomposer groups a run of Tibetan codepoints into one
// orthographic stack (top letter, subjoined letters, vowel signs, finals).
// The tsekbar serializer collects the stacks of a syllable, decides which
// single consonants are prefixes or suffixes (and therefore drop their
// implicit "a"), and renders each stack as minimal EWTS. The driver walks
// the codepoints, counting lines and handling everything that is not
// Tibetan letter material: punctuation, spaces, and the optional [...]
// escaping of untranslatable content.

/// One decomposed stack.
#[derive(Debug, Default)]
struct Stack {
    top: &'static str,
    /// Top letter plus subjoined letters, in order.
    stack: Vec<&'static str>,
    caret: bool,
    vowels: Vec<&'static str>,
    finals: Vec<&'static str>,
    finals_found: FxHashMap<&'static str, &'static str>,
    visarga: bool,
    /// The "+"-joined stack members.
    cons_str: String,
    /// Set when the stack is exactly one consonant other than "a", with no
    /// caret, vowel or final.
    single_cons: Option<&'static str>,
    prefix: bool,
    suffix: bool,
    suff2: bool,
    dot: bool,
    tokens_used: usize,
    warns: Vec<String>,
}

struct Tsekbar {
    wylie: String,
    tokens_used: usize,
    warns: Vec<String>,
}

/// Convert Tibetan Unicode to EWTS. With `escape`, anything that has no
/// EWTS form is wrapped in [brackets]; otherwise it passes through.
pub fn convert(input: &str, escape: bool, sink: &mut WarningSink) -> String {
    // expand deprecated pre-composed Sanskrit vowels first
    let normalized = input
        .replace('\u{0f76}', "\u{0fb2}\u{0f80}")
        .replace('\u{0f77}', "\u{0fb2}\u{0f71}\u{0f80}")
        .replace('\u{0f78}', "\u{0fb3}\u{0f80}")
        .replace('\u{0f79}', "\u{0fb3}\u{0f71}\u{0f80}")
        .replace('\u{0f81}', "\u{0f71}\u{0f80}")
        .replace('\u{0f00}', "\u{0f68}\u{0f7c}\u{0f7e}");
    let chars: Vec<char> = normalized.chars().collect();

    let mut out = String::new();
    let mut line = 1usize;
    let mut i = 0usize;

    while i < chars.len() {
        let t = chars[i];

        // Tibetan letters: one tsekbar at a time
        if tables::tib_top(t).is_some() {
            let tb = one_tsekbar(&chars, i);
            out.push_str(&tb.wylie);
            i += tb.tokens_used;
            for w in &tb.warns {
                sink.warn_line(line, w);
            }
            if !escape {
                i += handle_spaces(&chars, i, &mut out);
            }
            continue;
        }

        // punctuation and other stand-alone symbols. spaces are tricky:
        // in escaping mode a space followed by non-Tibetan belongs to the
        // upcoming [escape]; in passthrough mode spaces between Tibetan are
        // handled by handle_spaces instead
        if let Some(o) = tables::tib_other(t) {
            if t != ' ' || (escape && !followed_by_non_tibetan(&chars, i)) {
                out.push_str(o);
                i += 1;
                if !escape {
                    i += handle_spaces(&chars, i, &mut out);
                }
                continue;
            }
        }

        // newlines; "\r\n" counts as one
        if t == '\r' || t == '\n' {
            line += 1;
            i += 1;
            out.push(t);
            if t == '\r' && i < chars.len() && chars[i] == '\n' {
                i += 1;
                out.push('\n');
            }
            continue;
        }

        // BOM and zero-width space are dropped
        if t == '\u{feff}' || t == '\u{200b}' {
            i += 1;
            continue;
        }

        if !escape {
            out.push(t);
            i += 1;
            continue;
        }

        // other codepoints in the Tibetan block pass through, but combining
        // signs are flagged: they have nothing to attach to here
        if t > '\u{0f00}' && t <= '\u{0fff}' {
            out.push(t);
            i += 1;
            if tables::tib_subjoined(t).is_some()
                || tables::tib_vowel(t).is_some()
                || tables::tib_final_wylie(t).is_some()
            {
                sink.warn_line(
                    line,
                    format!("Tibetan sign {} needs a top symbol to attach to.", t),
                );
            }
            continue;
        }

        // everything else goes into [brackets], escaping what needs it
        out.push('[');
        loop {
            let t = chars[i];
            if t == '[' || t == ']' {
                out.push('\\');
                out.push(t);
            } else if t > '\u{0f00}' && t <= '\u{0fff}' {
                out.push_str(&format_hex(t));
            } else {
                out.push(t);
            }
            i += 1;
            if i >= chars.len() {
                break;
            }
            let t = chars[i];
            if tables::tib_top(t).is_some()
                || (tables::tib_other(t).is_some() && t != ' ')
                || t == '\r'
                || t == '\n'
            {
                break;
            }
        }
        out.push(']');
    }
    out
}

/// A run of spaces between Tibetan text becomes one "_" per space.
fn handle_spaces(chars: &[char], start: usize, out: &mut String) -> usize {
    let mut i = start;
    let mut found = 0usize;
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
        found += 1;
    }
    if found == 0 || i == chars.len() {
        return 0;
    }
    let t = chars[i];
    if tables::tib_top(t).is_none() && tables::tib_other(t).is_none() {
        return 0;
    }
    for _ in 0..found {
        out.push('_');
    }
    found
}

fn followed_by_non_tibetan(chars: &[char], start: usize) -> bool {
    let mut i = start;
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
    }
    if i == chars.len() {
        return false;
    }
    let t = chars[i];
    tables::tib_top(t).is_none() && tables::tib_other(t).is_none() && t != '\r' && t != '\n'
}

fn format_hex(t: char) -> String {
    let cp = t as u32;
    if (32..=126).contains(&cp) {
        t.to_string()
    } else {
        format!("\\u{:04x}", cp)
    }
}

/// Serialize one tsekbar: decompose stacks until the syllable ends, decide
/// prefix/suffix roles, then render.
fn one_tsekbar(chars: &[char], orig_i: usize) -> Tsekbar {
    let mut i = orig_i;
    let mut warns: Vec<String> = Vec::new();
    let mut stacks: Vec<Stack> = Vec::new();

    loop {
        let st = one_stack(chars, i);
        i += st.tokens_used;
        warns.extend_from_slice(&st.warns);
        let visarga = st.visarga;
        stacks.push(st);
        if visarga {
            break;
        }
        if i >= chars.len() || tables::tib_top(chars[i]).is_none() {
            break;
        }
    }

    // which of these stacks are prefixes or suffixes, and so drop their "a"?
    let n = stacks.len();
    if n > 1 {
        if let Some(sc) = stacks[0].single_cons {
            // a wazur under the root does not affect prefix rules
            let cs = stacks[1].cons_str.replace("+w", "");
            if tables::prefix(sc, &cs) {
                stacks[0].prefix = true;
            }
        }
    }
    if n > 1 {
        if let Some(sc) = stacks[n - 1].single_cons {
            if tables::is_suffix(sc) {
                stacks[n - 1].suffix = true;
            }
        }
    }
    if n > 2 {
        if let (Some(last), Some(before)) = (stacks[n - 1].single_cons, stacks[n - 2].single_cons) {
            if tables::is_suffix(before) && tables::suff2(last, before) {
                stacks[n - 1].suff2 = true;
                stacks[n - 2].suffix = true;
            }
        }
    }

    // exactly two stacks that could be prefix+suffix: prefer the suffix
    // reading, so the syllable keeps an explicit root
    if n == 2 && stacks[0].prefix && stacks[1].suffix {
        stacks[0].prefix = false;
    }

    // three stacks that could be prefix+suffix+suff2 are fully ambiguous;
    // the lookup table knows the root
    if n == 3 && stacks[0].prefix && stacks[1].suffix && stacks[2].suff2 {
        let syllable: String = stacks.iter().filter_map(|s| s.single_cons).collect();
        let root = match tables::ambiguous_key(&syllable) {
            Some(root) => root,
            None => {
                warns.push(format!(
                    "Ambiguous syllable found: root consonant not known for \"{}\".",
                    syllable
                ));
                1
            }
        };
        stacks[root].prefix = false;
        stacks[root].suffix = false;
        stacks[root + 1].suff2 = false;
    }

    // when prefix + root would read as one standard stack, break it with "."
    if stacks[0].prefix {
        let joined = format!("{}+{}", stacks[0].single_cons.unwrap_or(""), stacks[1].cons_str);
        if tables::tib_stack(&joined) {
            stacks[0].dot = true;
        }
    }

    let wylie: String = stacks.iter().map(put_stack_together).collect();
    Tsekbar {
        wylie,
        tokens_used: i - orig_i,
        warns,
    }
}

/// Decompose one stack starting at `orig_i`, which points at a top letter.
fn one_stack(chars: &[char], orig_i: usize) -> Stack {
    let mut i = orig_i;
    let mut first_final: Option<&'static str> = None;
    let mut first_vowel: Option<&'static str> = None;

    let top = tables::tib_top(chars[i]).expect("caller checked for a top letter");
    i += 1;
    let mut st = Stack {
        top,
        stack: vec![top],
        ..Stack::default()
    };

    // everything hanging below or around the top letter
    while i < chars.len() {
        let t = chars[i];
        if let Some(o) = tables::tib_subjoined(t) {
            i += 1;
            st.stack.push(o);
            if !st.finals.is_empty() {
                st.warns.push(format!(
                    "Subjoined sign \"{}\" found after final sign \"{}\".",
                    o,
                    first_final.unwrap_or("")
                ));
            } else if !st.vowels.is_empty() {
                st.warns.push(format!(
                    "Subjoined sign \"{}\" found after vowel sign \"{}\".",
                    o,
                    first_vowel.unwrap_or("")
                ));
            }
        } else if let Some(o) = tables::tib_vowel(t) {
            i += 1;
            st.vowels.push(o);
            if first_vowel.is_none() {
                first_vowel = Some(o);
            }
            if !st.finals.is_empty() {
                st.warns.push(format!(
                    "Vowel sign \"{}\" found after final sign \"{}\".",
                    o,
                    first_final.unwrap_or("")
                ));
            }
        } else if let Some(o) = tables::tib_final_wylie(t) {
            let klass = tables::tib_final_class(t).unwrap_or(o);
            i += 1;
            if o == "^" {
                st.caret = true;
            } else {
                if o == "H" {
                    st.visarga = true;
                }
                st.finals.push(o);
                if first_final.is_none() {
                    first_final = Some(o);
                }
                if let Some(&prev) = st.finals_found.get(klass) {
                    st.warns.push(format!(
                        "Final sign \"{}\" should not combine with final sign \"{}\".",
                        o, prev
                    ));
                } else {
                    st.finals_found.insert(klass, o);
                }
            }
        } else {
            break;
        }
    }

    // a-chen with vowel signs: the signs alone carry the "a"
    if st.top == "a" && st.stack.len() == 1 && !st.vowels.is_empty() {
        st.stack.remove(0);
    }

    // long vowels: A+i becomes I, and so on
    if st.vowels.len() > 1 && st.vowels[0] == "A" {
        if let Some(long) = tables::tib_vowel_long(st.vowels[1]) {
            st.vowels.drain(0..2);
            st.vowels.insert(0, long);
        }
    }

    // a tsa-phru over a lone pha or ba spells f or v
    if st.caret && st.stack.len() == 1 {
        if let Some(shortcut) = tables::tib_caret(st.top) {
            st.top = shortcut;
            st.stack[0] = shortcut;
            st.caret = false;
        }
    }

    st.cons_str = st.stack.join("+");
    if st.stack.len() == 1
        && st.stack[0] != "a"
        && !st.caret
        && st.vowels.is_empty()
        && st.finals.is_empty()
    {
        st.single_cons = Some(st.stack[0]);
    }
    st.tokens_used = i - orig_i;
    st
}

/// Render one analyzed stack as EWTS.
fn put_stack_together(st: &Stack) -> String {
    let mut out = String::new();
    if tables::tib_stack(&st.cons_str) {
        out.push_str(&st.stack.concat());
    } else {
        out.push_str(&st.cons_str);
    }
    if st.caret {
        out.push('^');
    }
    if !st.vowels.is_empty() {
        out.push_str(&st.vowels.join("+"));
    } else if !st.prefix
        && !st.suffix
        && !st.suff2
        && !st.cons_str.ends_with('a')
    {
        out.push('a');
    }
    out.push_str(&st.finals.concat());
    if st.dot {
        out.push('.');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (String, Vec<String>) {
        let mut sink = WarningSink::new(false);
        let out = convert(input, true, &mut sink);
        (out, sink.into_warnings())
    }

    #[test]
    fn suffix_recognition() {
        let (out, warns) = run("\u{0f55}\u{0fb1}\u{0f7c}\u{0f42}\u{0f66}\u{0f0b}");
        assert_eq!(out, "phyogs ");
        assert!(warns.is_empty(), "{:?}", warns);
    }

    #[test]
    fn standard_stacks_render_without_plus() {
        // sgrub: s + g + r with vowel u, then suffix b
        let (out, warns) = run("\u{0f66}\u{0f92}\u{0fb2}\u{0f74}\u{0f56}");
        assert_eq!(out, "sgrub");
        assert!(warns.is_empty(), "{:?}", warns);
    }

    #[test]
    fn sanskrit_stacks_keep_plus() {
        // k+Sha: the precomposed ka-ssa top letter
        let (out, _) = run("\u{0f69}");
        assert_eq!(out, "k+Sha");
        // explicit stack: ka + subjoined Sha
        let (out, _) = run("\u{0f40}\u{0fb5}");
        assert_eq!(out, "k+Sha");
    }

    #[test]
    fn prefix_recognition() {
        // bka': ba is a prefix to ka, achung is a suffix
        let (out, warns) = run("\u{0f56}\u{0f40}\u{0f60}");
        assert_eq!(out, "bka'");
        assert!(warns.is_empty(), "{:?}", warns);
    }

    #[test]
    fn two_stack_prefix_suffix_tie_keeps_root() {
        // ga + da: ga could be a prefix and da a suffix; the explicit-root
        // reading "gad" wins over "g.ad"
        let (out, warns) = run("\u{0f42}\u{0f51}");
        assert_eq!(out, "gad");
        assert!(warns.is_empty(), "{:?}", warns);
    }

    #[test]
    fn three_stack_ambiguity_uses_table() {
        // dgs -> root is the ga
        let (out, warns) = run("\u{0f51}\u{0f42}\u{0f66}");
        assert_eq!(out, "dgas");
        assert!(warns.is_empty(), "{:?}", warns);
        // mngs -> root is the ma
        let (out, warns) = run("\u{0f58}\u{0f44}\u{0f66}");
        assert_eq!(out, "mangs");
        assert!(warns.is_empty(), "{:?}", warns);
    }

    #[test]
    fn unknown_three_stack_ambiguity_defaults_to_second() {
        // 'bs is not in the table: warn, root defaults to the middle stack
        let (out, warns) = run("\u{0f60}\u{0f56}\u{0f66}");
        assert_eq!(out, "'bas");
        assert_eq!(warns.len(), 1);
        assert!(
            warns[0].contains("root consonant not known for \"'bs\""),
            "{:?}",
            warns
        );
    }

    #[test]
    fn prefix_root_collision_gets_a_dot() {
        // prefix ga before ya would read as the standard stack "gya";
        // the dot breaks the reading: g.yang
        let (out, warns) = run("\u{0f42}\u{0f61}\u{0f44}");
        assert_eq!(out, "g.yang");
        assert!(warns.is_empty(), "{:?}", warns);
    }

    #[test]
    fn achen_with_vowel_drops_carrier() {
        let (out, _) = run("\u{0f68}\u{0f7c}\u{0f58}");
        assert_eq!(out, "om");
        let (out, _) = run("\u{0f68}\u{0f7f}");
        assert_eq!(out, "aH");
    }

    #[test]
    fn long_vowel_fusion() {
        // ha + a-chung + u = hU
        let (out, _) = run("\u{0f67}\u{0f71}\u{0f74}");
        assert_eq!(out, "hU");
        // A + -i fuses to the long reversed i
        let (out, _) = run("\u{0f62}\u{0f71}\u{0f80}");
        assert_eq!(out, "r-I");
    }

    #[test]
    fn caret_shortcut() {
        let (out, _) = run("\u{0f55}\u{0f39}\u{0f74}");
        assert_eq!(out, "fu");
        let (out, _) = run("\u{0f56}\u{0f39}");
        assert_eq!(out, "va");
    }

    #[test]
    fn precomposed_vowels_expand() {
        // U+0F81 = A + -i
        let (out, _) = run("\u{0f40}\u{0f81}");
        assert_eq!(out, "k-I");
        // U+0F00 = oM
        let (out, _) = run("\u{0f00}");
        assert_eq!(out, "oM");
    }

    #[test]
    fn punctuation_and_spaces() {
        let (out, _) = run("\u{0f40}\u{0f0d}");
        assert_eq!(out, "ka/");
        let (out, _) = run("\u{0f21}\u{0f22}\u{0f23}");
        assert_eq!(out, "123");
        // literal space between Tibetan, passthrough mode
        let mut sink = WarningSink::new(false);
        let out = convert("\u{0f40} \u{0f41}", false, &mut sink);
        assert_eq!(out, "ka_kha");
    }

    #[test]
    fn escape_mode_brackets() {
        let (out, warns) = run("\u{0f40}xyz");
        assert_eq!(out, "ka[xyz]");
        assert!(warns.is_empty(), "{:?}", warns);

        // brackets inside the escape are themselves escaped
        let (out, _) = run("\u{0f40}x[y]z");
        assert_eq!(out, "ka[x\\[y\\]z]");
    }

    #[test]
    fn passthrough_mode_keeps_foreign_text() {
        let mut sink = WarningSink::new(false);
        let out = convert("\u{0f40}xyz", false, &mut sink);
        assert_eq!(out, "kaxyz");
    }

    #[test]
    fn stray_combining_sign_warns() {
        // a vowel sign with no top letter before it
        let (out, warns) = run("\u{0f72}");
        assert_eq!(out, "\u{0f72}");
        assert_eq!(warns.len(), 1);
        assert!(warns[0].contains("needs a top symbol"), "{:?}", warns);
    }

    #[test]
    fn ordering_warnings() {
        // vowel after a final sign
        let (_, warns) = run("\u{0f40}\u{0f7e}\u{0f72}");
        assert!(
            warns.iter().any(|w| w.contains("Vowel sign \"i\" found after final sign \"M\"")),
            "{:?}",
            warns
        );
        // duplicate final class
        let (_, warns) = run("\u{0f40}\u{0f7e}\u{0f83}");
        assert!(
            warns.iter().any(|w| w.contains("should not combine with")),
            "{:?}",
            warns
        );
    }

    #[test]
    fn visarga_splits_tsekbars() {
        // aH directly followed by more letters starts a new syllable
        let (out, _) = run("\u{0f68}\u{0f7f}\u{0f67}\u{0f71}\u{0f74}\u{0f82}");
        assert_eq!(out, "aHhU~M`");
    }

    #[test]
    fn line_numbers_count_newlines() {
        let (_, warns) = run("\u{0f40}\n\u{0f72}");
        assert_eq!(warns.len(), 1);
        assert!(warns[0].starts_with("line 2: "), "{:?}", warns);
    }
}
