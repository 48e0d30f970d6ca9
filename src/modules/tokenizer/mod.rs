use aho_corasick::{Anchored, AhoCorasick, Input, MatchKind, StartKind};
use once_cell::sync::Lazy;

use crate::modules::tables;

// Tokenizer Module
//
// Splits an EWTS input string into atomic tokens, left to right. At each
// position the longest multi-character token wins ("tsh" over "ts" over "t");
// backslash escapes (\uXXXX, \UXXXXXXXX, \c) form single tokens; anything
// else is one character. Concatenating the tokens always reproduces the
// input exactly.

/// Anchored leftmost-longest automaton over the multi-character token
/// inventory. One automaton serves all conversions.
static MULTI: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .start_kind(StartKind::Anchored)
        .build(tables::MULTI_TOKENS)
        .expect("the token inventory compiles into an automaton")
});

/// Split `input` into EWTS tokens. Every token is a slice of `input`.
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < input.len() {
        let rest = &input[i..];

        // multi-character tokens, longest match first
        if let Some(m) = MULTI.find(Input::new(rest).anchored(Anchored::Yes)) {
            tokens.push(&rest[..m.end()]);
            i += m.end();
            continue;
        }

        // backslash escapes form one token: \uXXXX, \UXXXXXXXX or \c
        if rest.starts_with('\\') {
            if let Some(len) = escape_len(rest) {
                tokens.push(&rest[..len]);
                i += len;
                continue;
            }
        }

        let c = rest.chars().next().expect("inside the string");
        tokens.push(&rest[..c.len_utf8()]);
        i += c.len_utf8();
    }
    tokens
}

/// Byte length of the escape token at the start of `rest`, which begins with
/// a backslash. A trailing lone backslash is not an escape.
fn escape_len(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    chars.next();
    let c = chars.next()?;
    let want = match c {
        'u' => 6,
        'U' => 10,
        _ => 2,
    };
    let len = char_span(rest, want);
    // \u and \U need their full run of characters; otherwise fall back to \c
    if len.is_none() && (c == 'u' || c == 'U') {
        return char_span(rest, 2);
    }
    len
}

/// Byte length of the first `n` characters of `s`, if `s` has that many.
fn char_span(s: &str, n: usize) -> Option<usize> {
    let mut count = 0;
    for (idx, c) in s.char_indices() {
        count += 1;
        if count == n {
            return Some(idx + c.len_utf8());
        }
    }
    None
}
