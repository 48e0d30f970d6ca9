use rustc_hash::FxHashMap;

use crate::modules::core::{WarningSink, WylieOptions};
use crate::modules::tables;
use crate::modules::tokenizer::tokenize;

// EWTS -> Unicode Module
//
// Three layers, innermost first:
//   - the stack assembler turns one orthographic stack's worth of tokens
//     (superscript + root + subscripts + vowel + finals) into Unicode;
//   - the tsekbar analyzer drives the assembler across a whole syllable and
//     checks prefix/root/suffix structure with a small state machine;
//   - the driver walks the token stream, handling punctuation, [comments],
//     escapes and line counting, and delegates syllables to the analyzer.

/// One assembled stack.
struct Stack<'a> {
    uni: String,
    tokens_used: usize,
    /// The lone consonant of this stack, when it had no vowel at all.
    single_consonant: Option<&'a str>,
    /// The lone consonant of this stack, when its vowel was the implicit "a".
    single_cons_a: Option<&'a str>,
    warns: Vec<String>,
    visarga: bool,
}

/// One converted syllable.
struct Tsekbar {
    uni: String,
    tokens_used: usize,
    warns: Vec<String>,
}

/// What the analyzer expects next. Valid syllables end in Suff1, Suff2 or
/// None. The machine is lenient in that a main stack may come at any moment,
/// even after suffixes, as such syllables occur in abbreviations; what it
/// really checks is that prefixes and suffixes agree with their neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Prefix,
    Main,
    Suff1,
    Suff2,
    None,
}

/// Convert an EWTS string to Tibetan Unicode.
pub fn convert(input: &str, opts: &WylieOptions, sink: &mut WarningSink) -> String {
    let input = if opts.fix_spacing {
        input.trim_start()
    } else {
        input
    };
    let tokens = tokenize(input);

    let mut out = String::new();
    let mut line = 1usize;
    let mut units = 0usize;
    let mut i = 0usize;

    while i < tokens.len() {
        let t = tokens[i];

        // [non-Tibetan text] passes through, nesting brackets
        if t == "[" {
            i += 1;
            let mut nesting = 1usize;
            let mut closed = false;
            while i < tokens.len() {
                let t = tokens[i];
                i += 1;
                if t == "[" {
                    nesting += 1;
                }
                if t == "]" {
                    nesting -= 1;
                    if nesting == 0 {
                        closed = true;
                        break;
                    }
                }
                // unicode escapes and \c escapes still work inside comments
                if t.starts_with("\\u") || t.starts_with("\\U") {
                    if let Some(o) = unicode_escape(t, line, sink) {
                        out.push_str(&o);
                        continue;
                    }
                }
                match t.strip_prefix('\\') {
                    Some(rest) => out.push_str(rest),
                    None => out.push_str(t),
                }
            }
            if closed {
                continue;
            }
            sink.warn_line(line, "Unfinished [non-Wylie stuff].");
            break;
        }

        // punctuation, digits, etc
        if let Some(o) = tables::other(t) {
            out.push_str(o);
            i += 1;
            units += 1;
            // collapse runs of spaces to one tsek
            if t == " " && opts.fix_spacing {
                while tokens.get(i).copied() == Some(" ") {
                    i += 1;
                }
            }
            continue;
        }

        // a vowel or consonant opens a syllable
        if tables::vowel(t).is_some() || tables::consonant(t).is_some() {
            let tb = one_tsekbar(&tokens, i, opts);
            let word: String = tokens[i..i + tb.tokens_used].concat();
            out.push_str(&tb.uni);
            i += tb.tokens_used;
            units += 1;
            for w in &tb.warns {
                sink.warn_line(line, format!("\"{}\": {}", word, w));
            }
            continue;
        }

        // BOM and zero-width space are dropped
        if t == "\u{feff}" || t == "\u{200b}" {
            i += 1;
            continue;
        }

        if t.starts_with("\\u") || t.starts_with("\\U") {
            if let Some(o) = unicode_escape(t, line, sink) {
                i += 1;
                out.push_str(&o);
                continue;
            }
        }
        if let Some(rest) = t.strip_prefix('\\') {
            out.push_str(rest);
            i += 1;
            continue;
        }

        if t == "\r\n" || t == "\n" || t == "\r" {
            line += 1;
            out.push_str(t);
            i += 1;
            // drop leading spaces on the next line
            if opts.fix_spacing {
                while tokens.get(i).copied() == Some(" ") {
                    i += 1;
                }
            }
            continue;
        }

        let c = t.chars().next().unwrap_or('\0');
        if tables::is_special(t) || c.is_ascii_alphabetic() {
            sink.warn_line(line, format!("Unexpected character \"{}\".", t));
        }
        out.push_str(t);
        i += 1;
    }

    if units == 0 {
        sink.warn("No Tibetan characters found!");
    }
    out
}

/// Decode a \uXXXX or \UXXXXXXXX token. Returns `None` when the token has no
/// hex part at all (a bare \u escape, handled as "u" by the caller); returns
/// an empty string after warning when the hex is unusable.
fn unicode_escape(t: &str, line: usize, sink: &mut WarningSink) -> Option<String> {
    let hex = &t[2..];
    if hex.is_empty() {
        return None;
    }
    if !hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
        sink.warn_line(line, format!("\"{}\": invalid hex code.", t));
        return Some(String::new());
    }
    match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
        Some(c) => Some(c.to_string()),
        None => {
            sink.warn_line(line, format!("\"{}\": invalid hex code.", t));
            Some(String::new())
        }
    }
}

/// Convert successive stacks starting at `orig_i`, one whole tsekbar.
///
/// Assumes the first token is a vowel or consonant.
fn one_tsekbar<'a>(tokens: &[&'a str], orig_i: usize, opts: &WylieOptions) -> Tsekbar {
    let mut i = orig_i;
    let mut prev_cons: Option<&'a str> = None;
    let mut visarga = false;

    // root tracking, for the ambiguity checks after the machine has run
    let mut check_root = true;
    let mut consonants: Vec<&'a str> = Vec::new();
    let mut root_idx: Option<usize> = None;

    let mut out = String::new();
    let mut warns: Vec<String> = Vec::new();
    let mut state = State::Prefix;
    let mut last_single: Option<&'a str> = None;

    while let Some(&t) = tokens.get(i) {
        if visarga || (tables::vowel(t).is_none() && tables::consonant(t).is_none()) {
            break;
        }

        let stack = one_stack(tokens, i, opts);
        i += stack.tokens_used;
        out.push_str(&stack.uni);
        warns.extend_from_slice(&stack.warns);
        visarga = stack.visarga;

        if opts.check {
            let single = stack.single_consonant;
            if state == State::Prefix && single.is_some() {
                let sc = single.unwrap();
                consonants.push(sc);
                if tables::is_prefix(sc) {
                    let next = if opts.check_strict {
                        Some(consonant_string(tokens, i))
                    } else {
                        tokens.get(i).map(|s| s.to_string())
                    };
                    if let Some(next) = next {
                        if !tables::prefix(sc, &next) {
                            warns.push(format!(
                                "Prefix \"{}\" does not occur before \"{}\".",
                                sc,
                                next.replace('+', "")
                            ));
                        }
                    }
                } else {
                    warns.push(format!("Invalid prefix consonant: \"{}\".", sc));
                }
                state = State::Main;
            } else if single.is_none() {
                state = State::Suff1;
                // remember the root when this was a lone consonant with an
                // implicit "a"; two of those disqualify the check
                if root_idx.is_some() {
                    check_root = false;
                } else if let Some(sca) = stack.single_cons_a {
                    consonants.push(sca);
                    root_idx = Some(consonants.len() - 1);
                }
            } else if state == State::Main {
                warns.push(format!("Expected vowel after \"{}\".", single.unwrap()));
            } else if state == State::Suff1 {
                let sc = single.unwrap();
                consonants.push(sc);
                // strict only: trips on a lot of Sanskrit otherwise
                if opts.check_strict && !tables::is_suffix(sc) {
                    warns.push(format!("Invalid suffix consonant: \"{}\".", sc));
                }
                state = State::Suff2;
            } else if state == State::Suff2 {
                let sc = single.unwrap();
                consonants.push(sc);
                if tables::is_suff2(sc) {
                    let before = prev_cons.unwrap_or("");
                    if !tables::suff2(sc, before) {
                        warns.push(format!(
                            "Second suffix \"{}\" does not occur after \"{}\".",
                            sc, before
                        ));
                    }
                } else {
                    warns.push(format!("Invalid 2nd suffix consonant: \"{}\".", sc));
                }
                state = State::None;
            } else {
                warns.push(format!(
                    "Cannot have another consonant \"{}\" after 2nd suffix.",
                    single.unwrap()
                ));
            }
        }

        prev_cons = stack.single_consonant;
        last_single = stack.single_consonant;
    }

    if state == State::Main {
        if let Some(sc) = last_single {
            if tables::is_prefix(sc) {
                warns.push(format!("Vowel expected after \"{}\".", sc));
            }
        }
    }

    // root placement check, only when nothing else went wrong and the
    // syllable is made of single consonants around one implicit-"a" root
    if opts.check && warns.is_empty() && check_root {
        if let Some(root) = root_idx {
            if consonants.len() == 2
                && root != 0
                && tables::prefix(consonants[0], consonants[1])
                && tables::is_suffix(consonants[1])
            {
                warns.push(format!(
                    "Syllable should probably be \"{}a{}\".",
                    consonants[0], consonants[1]
                ));
            } else if consonants.len() == 3
                && tables::is_prefix(consonants[0])
                && tables::suff2("s", consonants[1])
                && consonants[2] == "s"
            {
                let cc: String = consonants
                    .concat()
                    .replace('\u{2018}', "'")
                    .replace('\u{2019}', "'");
                if let Some(expect) = tables::ambiguous_key(&cc) {
                    if expect != root {
                        if let Some(canonical) = tables::ambiguous_wylie(&cc) {
                            warns.push(format!("Syllable should probably be \"{}\".", canonical));
                        }
                    }
                }
            }
        }
    }

    Tsekbar {
        uni: out,
        tokens_used: i - orig_i,
        warns,
    }
}

/// Convert one stack's worth of tokens starting at `orig_i`.
///
/// Assumes the first token is a vowel or consonant.
fn one_stack<'a>(tokens: &[&'a str], orig_i: usize, opts: &WylieOptions) -> Stack<'a> {
    let mut i = orig_i;
    let mut out = String::new();
    let mut warns: Vec<String> = Vec::new();
    let mut consonants = 0usize;
    let mut vowel_found: Option<&'a str> = None;
    let mut vowel_sign: Option<&'a str> = None;
    let mut single_consonant: Option<&'a str> = None;
    let mut plus = false;
    let mut caret = 0usize;
    let mut final_found: FxHashMap<&'static str, &'a str> = FxHashMap::default();

    // superscript?
    if let (Some(&t), Some(&t2)) = (tokens.get(i), tokens.get(i + 1)) {
        if tables::is_superscript(t) && tables::superscript(t, t2) {
            if opts.check_strict {
                let next = consonant_string(tokens, i + 1);
                if !tables::superscript(t, &next) {
                    warns.push(format!(
                        "Superscript \"{}\" does not occur above combination \"{}\".",
                        t,
                        next.replace('+', "")
                    ));
                }
            }
            out.push_str(tables::consonant(t).unwrap_or(""));
            consonants += 1;
            i += 1;
            while tokens.get(i).copied() == Some("^") {
                caret += 1;
                i += 1;
            }
        }
    }

    // main consonant and what hangs underneath; "+" loops back here
    loop {
        let t = tokens.get(i).copied().unwrap_or("");
        if tables::consonant(t).is_some() || (!out.is_empty() && tables::subjoined(t).is_some()) {
            if out.is_empty() {
                out.push_str(tables::consonant(t).unwrap_or(""));
            } else {
                out.push_str(tables::subjoined(t).or_else(|| tables::consonant(t)).unwrap_or(""));
            }
            i += 1;
            if t == "a" {
                vowel_found = Some("a");
            } else {
                consonants += 1;
                single_consonant = Some(t);
            }
            while tokens.get(i).copied() == Some("^") {
                caret += 1;
                i += 1;
            }

            // subjoined: rata, yata, lata, wazur; at most two per stack
            let mut above = t;
            for z in 0..2 {
                let t2 = match tokens.get(i).copied() {
                    Some(t2) if tables::is_subscript(t2) => t2,
                    _ => break,
                };

                // lata does not occur below multiple consonants
                // (otherwise "brla" = "b.r+la" would come out wrong)
                if t2 == "l" && consonants > 1 {
                    break;
                }

                if opts.check_strict && !plus {
                    // whole-stack check, disabled by "+"
                    let prev = consonant_string_backwards(tokens, i as isize - 1, orig_i as isize);
                    if !tables::subscript(t2, &prev) {
                        warns.push(format!(
                            "Subjoined \"{}\" not expected after \"{}\".",
                            t2,
                            prev.replace('+', "")
                        ));
                    }
                } else if opts.check
                    && !tables::subscript(t2, above)
                    && !(z == 1 && t2 == "w" && above == "y")
                {
                    warns.push(format!(
                        "Subjoined \"{}\" not expected after \"{}\".",
                        t2, above
                    ));
                }

                out.push_str(tables::subjoined(t2).unwrap_or(""));
                i += 1;
                consonants += 1;
                while tokens.get(i).copied() == Some("^") {
                    caret += 1;
                    i += 1;
                }
                above = t2;
            }
        }

        // a "^" can come anywhere in the Wylie, but the tsa-phru goes after
        // the stack's consonants and before its vowels
        if caret > 0 {
            if caret > 1 {
                warns.push("Cannot have more than one \"^\" applied to the same stack.".to_string());
            }
            final_found.insert(tables::final_class("^").unwrap_or("^"), "^");
            out.push_str(tables::final_uni("^").unwrap_or(""));
            caret = 0;
        }

        // vowel
        if let Some(&t) = tokens.get(i) {
            if tables::vowel(t).is_some() {
                if out.is_empty() {
                    out.push_str(tables::vowel("a").unwrap_or(""));
                }
                if t != "a" {
                    out.push_str(tables::vowel(t).unwrap_or(""));
                }
                i += 1;
                vowel_found = Some(t);
                if t != "a" {
                    vowel_sign = Some(t);
                }
            }
        }

        // "+" forces more subjoining
        if tokens.get(i).copied() == Some("+") {
            i += 1;
            plus = true;

            let t = tokens.get(i).copied().unwrap_or("");
            if tables::vowel(t).is_none() && tables::subjoined(t).is_none() {
                if opts.check {
                    warns.push("Expected vowel or consonant after \"+\".".to_string());
                }
                break;
            }

            // consonants after vowels make no sense, but process them anyway
            if opts.check {
                if tables::vowel(t).is_none() && vowel_sign.is_some() {
                    warns.push(format!(
                        "Cannot subjoin consonant ({}) after vowel ({}) in same stack.",
                        t,
                        vowel_sign.unwrap_or("")
                    ));
                } else if t == "a" && vowel_sign.is_some() {
                    warns.push(format!(
                        "Cannot subjoin a-chen (a) after vowel ({}) in same stack.",
                        vowel_sign.unwrap_or("")
                    ));
                }
            }
            continue;
        }
        break;
    }

    // finals
    while let Some(&t) = tokens.get(i) {
        let Some(klass) = tables::final_class(t) else {
            break;
        };
        match final_found.get(klass) {
            Some(&prev) if prev == t => {
                warns.push(format!("Cannot have two \"{}\" applied to the same stack.", t));
            }
            Some(&prev) => {
                warns.push(format!(
                    "Cannot have \"{}\" and \"{}\" applied to the same stack.",
                    t, prev
                ));
            }
            None => {
                final_found.insert(klass, t);
                out.push_str(tables::final_uni(t).unwrap_or(""));
            }
        }
        i += 1;
        single_consonant = None;
    }

    // "." is a stack separator
    if tokens.get(i).copied() == Some(".") {
        i += 1;
    }

    // more than one consonant without a vowel and without explicit "+":
    // return the first consonant alone and restart from the second
    if consonants > 1 && vowel_found.is_none() {
        if plus {
            if opts.check {
                warns.push("Stack with multiple consonants should end with vowel.".to_string());
            }
        } else {
            i = orig_i + 1;
            consonants = 1;
            single_consonant = Some(tokens[orig_i]);
            out = tables::consonant(tokens[orig_i]).unwrap_or("").to_string();
        }
    }

    if consonants != 1 || plus {
        single_consonant = None;
    }

    Stack {
        uni: out,
        tokens_used: i - orig_i,
        single_consonant: if vowel_found.is_some() {
            None
        } else {
            single_consonant
        },
        single_cons_a: if vowel_found == Some("a") {
            single_consonant
        } else {
            None
        },
        warns,
        visarga: final_found.contains_key("H"),
    }
}

/// The "+"-joined consonant run starting at `i`, for whole-stack checks.
fn consonant_string(tokens: &[&str], mut i: usize) -> String {
    let mut out: Vec<&str> = Vec::new();
    while let Some(&t) = tokens.get(i) {
        i += 1;
        if t == "+" || t == "^" {
            continue;
        }
        if tables::consonant(t).is_none() {
            break;
        }
        out.push(t);
    }
    out.join("+")
}

/// Same, scanning backwards from `i` down to `orig` inclusive.
fn consonant_string_backwards(tokens: &[&str], mut i: isize, orig: isize) -> String {
    let mut out: Vec<&str> = Vec::new();
    while i >= orig {
        let Some(&t) = tokens.get(i as usize) else {
            break;
        };
        i -= 1;
        if t == "+" || t == "^" {
            continue;
        }
        if tables::consonant(t).is_none() {
            break;
        }
        out.insert(0, t);
    }
    out.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (String, Vec<String>) {
        let opts = WylieOptions::default();
        let mut sink = WarningSink::new(false);
        let out = convert(input, &opts, &mut sink);
        (out, sink.into_warnings())
    }

    #[test]
    fn single_syllables() {
        assert_eq!(run("ka").0, "\u{0f40}");
        assert_eq!(run("ki").0, "\u{0f40}\u{0f72}");
        assert_eq!(run("a").0, "\u{0f68}");
        assert_eq!(run("i").0, "\u{0f68}\u{0f72}");
        assert_eq!(run("om").0, "\u{0f68}\u{0f7c}\u{0f58}");
    }

    #[test]
    fn superscripts_and_subscripts() {
        // rka: superscript ra over subjoined ka
        assert_eq!(run("rka").0, "\u{0f62}\u{0f90}");
        // bkra: prefix ba, ka with subjoined ra
        assert_eq!(run("bkra").0, "\u{0f56}\u{0f40}\u{0fb2}");
        // skyes: superscript sa, ka, subjoined ya
        assert_eq!(run("skyes").0, "\u{0f66}\u{0f90}\u{0fb1}\u{0f7a}\u{0f66}");
        let (out, warns) = run("brla");
        assert_eq!(out, "\u{0f56}\u{0f62}\u{0fb3}");
        assert!(warns.is_empty(), "{:?}", warns);
    }

    #[test]
    fn explicit_stacking() {
        assert_eq!(run("k+Sha").0, "\u{0f40}\u{0fb5}");
        let (out, _) = run("k+Sh");
        assert_eq!(out, "\u{0f40}\u{0fb5}");
    }

    #[test]
    fn sanskrit_digraphs() {
        assert_eq!(run("gha").0, "\u{0f42}\u{0fb7}");
        assert_eq!(run("g+ha").0, "\u{0f42}\u{0fb7}");
        assert_eq!(run("dz+ha").0, "\u{0f5b}\u{0fb7}");
    }

    #[test]
    fn finals() {
        assert_eq!(run("oM").0, "\u{0f68}\u{0f7c}\u{0f7e}");
        assert_eq!(run("aH").0, "\u{0f68}\u{0f7f}");
        let (_, warns) = run("kaMM");
        assert_eq!(warns.len(), 1);
        assert!(warns[0].contains("two \"M\""));
        let (_, warns) = run("kaM~M");
        assert_eq!(warns.len(), 1);
        assert!(warns[0].contains("\"~M\" and \"M\""));
    }

    #[test]
    fn caret_forms() {
        // fa = pha + tsa-phru
        assert_eq!(run("fa").0, "\u{0f55}\u{0f39}");
        assert_eq!(run("va").0, "\u{0f56}\u{0f39}");
        assert_eq!(run("ph^a").0, "\u{0f55}\u{0f39}");
    }

    #[test]
    fn multi_consonant_backtrack() {
        // brtse: the ba first swallows the ra as a subscript, then backs off
        // and leaves it to the superscribed tsa
        let (out, warns) = run("brtse");
        assert_eq!(out, "\u{0f56}\u{0f62}\u{0fa9}\u{0f7a}");
        assert!(warns.is_empty(), "{:?}", warns);

        // dgs without a vowel: three separate consonant stacks
        let (out, _) = run("dgs");
        assert_eq!(out, "\u{0f51}\u{0f42}\u{0f66}");
    }

    #[test]
    fn dot_separator() {
        // b.r+la: dot keeps the ba from swallowing the r
        let (out, warns) = run("b.r+la");
        assert_eq!(out, "\u{0f56}\u{0f62}\u{0fb3}");
        assert!(warns.is_empty(), "{:?}", warns);
    }

    #[test]
    fn ambiguity_suggestions() {
        let (_, warns) = run("dags");
        assert_eq!(warns.len(), 1);
        assert!(warns[0].contains("should probably be \"dgas\""), "{:?}", warns);

        let (_, warns) = run("mngas");
        assert_eq!(warns.len(), 1);
        assert!(warns[0].contains("should probably be \"mangs\""), "{:?}", warns);

        // the canonical spellings pass silently
        assert!(run("dgas").1.is_empty());
        assert!(run("mangs").1.is_empty());

        // two-consonant case
        let (_, warns) = run("gda");
        assert_eq!(warns.len(), 1);
        assert!(warns[0].contains("should probably be \"gad\""), "{:?}", warns);
    }

    #[test]
    fn comments_pass_through() {
        let (out, warns) = run("[abc] ka");
        assert_eq!(out, "abc\u{0f0b}\u{0f40}");
        assert!(warns.is_empty());

        let (out, warns) = run("[[nested] still] ka");
        assert_eq!(out, "[nested] still\u{0f0b}\u{0f40}");
        assert!(warns.is_empty(), "{:?}", warns);

        let (_, warns) = run("[unclosed");
        assert!(warns.iter().any(|w| w.contains("Unfinished")), "{:?}", warns);
    }

    #[test]
    fn comment_escapes() {
        let (out, _) = run("[\\u0f40] ka");
        assert_eq!(out, "\u{0f40}\u{0f0b}\u{0f40}");
        let (out, _) = run("[\\[literal\\]] ka");
        assert_eq!(out, "[literal]\u{0f0b}\u{0f40}");
    }

    #[test]
    fn standalone_escapes() {
        let (out, warns) = run("\\u0f40 ");
        assert_eq!(out, "\u{0f40}\u{0f0b}");
        assert!(warns.is_empty(), "{:?}", warns);

        // uppercase hex is not accepted
        let (out, warns) = run("\\u0F40 ");
        assert_eq!(out, "\u{0f0b}");
        assert!(warns.iter().any(|w| w.contains("invalid hex")), "{:?}", warns);
    }

    #[test]
    fn fix_spacing_collapses_runs() {
        let (out, _) = run("ka   kha");
        assert_eq!(out, "\u{0f40}\u{0f0b}\u{0f41}");
        let (out, _) = run("  ka");
        assert_eq!(out, "\u{0f40}");
    }

    #[test]
    fn no_tibetan_warning() {
        let (out, warns) = run("");
        assert_eq!(out, "");
        assert_eq!(warns, vec!["No Tibetan characters found!".to_string()]);

        let (out, warns) = run("\u{feff}");
        assert_eq!(out, "");
        assert_eq!(warns.len(), 1);
    }

    #[test]
    fn line_numbers_in_warnings() {
        let (_, warns) = run("ka\nkaMM");
        assert_eq!(warns.len(), 1);
        assert!(warns[0].starts_with("line 2: "), "{:?}", warns);
        // the offending syllable is quoted
        assert!(warns[0].contains("\"kaMM\""), "{:?}", warns);
    }

    #[test]
    fn strict_prefix_checks() {
        let (_, warns) = run("gkag");
        assert!(
            warns.iter().any(|w| w.contains("Prefix \"g\" does not occur before \"k\"")),
            "{:?}",
            warns
        );
        // legal prefix passes
        assert!(run("bkag").1.is_empty());
    }

    #[test]
    fn invalid_suffix_in_strict_mode() {
        let (_, warns) = run("kaz");
        assert!(
            warns.iter().any(|w| w.contains("Invalid suffix consonant: \"z\"")),
            "{:?}",
            warns
        );
    }

    #[test]
    fn second_suffix_checks() {
        assert!(run("bsgrubs").1.is_empty());
        let (_, warns) = run("kagd");
        assert!(
            warns.iter().any(|w| w.contains("Second suffix \"d\" does not occur after")),
            "{:?}",
            warns
        );
    }
}
