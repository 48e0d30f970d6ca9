use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

// Linguistic Tables Module
//
// Static bidirectional mappings between EWTS transliteration and the Tibetan
// Unicode block (U+0F00-U+0FFF), plus the orthographic rule tables: which
// letters may act as superscripts, subscripts, prefixes and suffixes, which
// stacked combinations are standard Tibetan (and thus render without "+"),
// and the lookup for structurally ambiguous three-consonant syllables.
//
// All tables are built once and shared by every conversion call; they are
// read-only after initialization and safe to use from multiple threads.

/// EWTS consonant -> Unicode top-letter form.
///
/// Includes the Sanskrit digraph aliases ("gh" and "g+h" are the same
/// letter), the retroflex "-t"/"-d"... aliases for "T"/"D"..., and the
/// typographic quotes U+2018/U+2019 accepted as a-chung.
static CONSONANT: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("k", "\u{0f40}");
    map.insert("kh", "\u{0f41}");
    map.insert("g", "\u{0f42}");
    map.insert("gh", "\u{0f42}\u{0fb7}");
    map.insert("g+h", "\u{0f42}\u{0fb7}");
    map.insert("ng", "\u{0f44}");
    map.insert("c", "\u{0f45}");
    map.insert("ch", "\u{0f46}");
    map.insert("j", "\u{0f47}");
    map.insert("ny", "\u{0f49}");
    map.insert("T", "\u{0f4a}");
    map.insert("-t", "\u{0f4a}");
    map.insert("Th", "\u{0f4b}");
    map.insert("-th", "\u{0f4b}");
    map.insert("D", "\u{0f4c}");
    map.insert("-d", "\u{0f4c}");
    map.insert("Dh", "\u{0f4c}\u{0fb7}");
    map.insert("D+h", "\u{0f4c}\u{0fb7}");
    map.insert("-dh", "\u{0f4c}\u{0fb7}");
    map.insert("-d+h", "\u{0f4c}\u{0fb7}");
    map.insert("N", "\u{0f4e}");
    map.insert("-n", "\u{0f4e}");
    map.insert("t", "\u{0f4f}");
    map.insert("th", "\u{0f50}");
    map.insert("d", "\u{0f51}");
    map.insert("dh", "\u{0f51}\u{0fb7}");
    map.insert("d+h", "\u{0f51}\u{0fb7}");
    map.insert("n", "\u{0f53}");
    map.insert("p", "\u{0f54}");
    map.insert("ph", "\u{0f55}");
    map.insert("b", "\u{0f56}");
    map.insert("bh", "\u{0f56}\u{0fb7}");
    map.insert("b+h", "\u{0f56}\u{0fb7}");
    map.insert("m", "\u{0f58}");
    map.insert("ts", "\u{0f59}");
    map.insert("tsh", "\u{0f5a}");
    map.insert("dz", "\u{0f5b}");
    map.insert("dzh", "\u{0f5b}\u{0fb7}");
    map.insert("dz+h", "\u{0f5b}\u{0fb7}");
    map.insert("w", "\u{0f5d}");
    map.insert("zh", "\u{0f5e}");
    map.insert("z", "\u{0f5f}");
    map.insert("'", "\u{0f60}");
    map.insert("\u{2018}", "\u{0f60}");
    map.insert("\u{2019}", "\u{0f60}");
    map.insert("y", "\u{0f61}");
    map.insert("r", "\u{0f62}");
    map.insert("l", "\u{0f63}");
    map.insert("sh", "\u{0f64}");
    map.insert("Sh", "\u{0f65}");
    map.insert("-sh", "\u{0f65}");
    map.insert("s", "\u{0f66}");
    map.insert("h", "\u{0f67}");
    map.insert("W", "\u{0f5d}");
    map.insert("Y", "\u{0f61}");
    map.insert("R", "\u{0f6a}");
    map.insert("f", "\u{0f55}\u{0f39}");
    map.insert("v", "\u{0f56}\u{0f39}");
    map
});

/// EWTS consonant -> Unicode subjoined form.
static SUBJOINED: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("k", "\u{0f90}");
    map.insert("kh", "\u{0f91}");
    map.insert("g", "\u{0f92}");
    map.insert("gh", "\u{0f92}\u{0fb7}");
    map.insert("g+h", "\u{0f92}\u{0fb7}");
    map.insert("ng", "\u{0f94}");
    map.insert("c", "\u{0f95}");
    map.insert("ch", "\u{0f96}");
    map.insert("j", "\u{0f97}");
    map.insert("ny", "\u{0f99}");
    map.insert("T", "\u{0f9a}");
    map.insert("-t", "\u{0f9a}");
    map.insert("Th", "\u{0f9b}");
    map.insert("-th", "\u{0f9b}");
    map.insert("D", "\u{0f9c}");
    map.insert("-d", "\u{0f9c}");
    map.insert("Dh", "\u{0f9c}\u{0fb7}");
    map.insert("D+h", "\u{0f9c}\u{0fb7}");
    map.insert("-dh", "\u{0f9c}\u{0fb7}");
    map.insert("-d+h", "\u{0f9c}\u{0fb7}");
    map.insert("N", "\u{0f9e}");
    map.insert("-n", "\u{0f9e}");
    map.insert("t", "\u{0f9f}");
    map.insert("th", "\u{0fa0}");
    map.insert("d", "\u{0fa1}");
    map.insert("dh", "\u{0fa1}\u{0fb7}");
    map.insert("d+h", "\u{0fa1}\u{0fb7}");
    map.insert("n", "\u{0fa3}");
    map.insert("p", "\u{0fa4}");
    map.insert("ph", "\u{0fa5}");
    map.insert("b", "\u{0fa6}");
    map.insert("bh", "\u{0fa6}\u{0fb7}");
    map.insert("b+h", "\u{0fa6}\u{0fb7}");
    map.insert("m", "\u{0fa8}");
    map.insert("ts", "\u{0fa9}");
    map.insert("tsh", "\u{0faa}");
    map.insert("dz", "\u{0fab}");
    map.insert("dzh", "\u{0fab}\u{0fb7}");
    map.insert("dz+h", "\u{0fab}\u{0fb7}");
    map.insert("w", "\u{0fad}");
    map.insert("zh", "\u{0fae}");
    map.insert("z", "\u{0faf}");
    map.insert("'", "\u{0fb0}");
    map.insert("\u{2018}", "\u{0fb0}");
    map.insert("\u{2019}", "\u{0fb0}");
    map.insert("y", "\u{0fb1}");
    map.insert("r", "\u{0fb2}");
    map.insert("l", "\u{0fb3}");
    map.insert("sh", "\u{0fb4}");
    map.insert("Sh", "\u{0fb5}");
    map.insert("-sh", "\u{0fb5}");
    map.insert("s", "\u{0fb6}");
    map.insert("h", "\u{0fb7}");
    map.insert("a", "\u{0fb8}");
    map.insert("W", "\u{0fba}");
    map.insert("Y", "\u{0fbb}");
    map.insert("R", "\u{0fbc}");
    map
});

/// EWTS vowel -> Unicode. A bare "a" maps to the a-chen carrier letter;
/// everything else is a combining vowel sign.
static VOWEL: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("a", "\u{0f68}");
    map.insert("A", "\u{0f71}");
    map.insert("i", "\u{0f72}");
    map.insert("I", "\u{0f71}\u{0f72}");
    map.insert("u", "\u{0f74}");
    map.insert("U", "\u{0f71}\u{0f74}");
    map.insert("e", "\u{0f7a}");
    map.insert("ai", "\u{0f7b}");
    map.insert("o", "\u{0f7c}");
    map.insert("au", "\u{0f7d}");
    map.insert("-i", "\u{0f80}");
    map.insert("-I", "\u{0f71}\u{0f80}");
    map
});

/// Post-stack final symbols (anusvara, visarga, tsa-phru...).
static FINAL_UNI: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("M", "\u{0f7e}");
    map.insert("~M`", "\u{0f82}");
    map.insert("~M", "\u{0f83}");
    map.insert("X", "\u{0f37}");
    map.insert("~X", "\u{0f35}");
    map.insert("H", "\u{0f7f}");
    map.insert("?", "\u{0f84}");
    map.insert("^", "\u{0f39}");
    map
});

/// Final symbols grouped by class; at most one final per class on a stack.
static FINAL_CLASS: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("M", "M");
    map.insert("~M`", "M");
    map.insert("~M", "M");
    map.insert("X", "X");
    map.insert("~X", "X");
    map.insert("H", "H");
    map.insert("?", "?");
    map.insert("^", "^");
    map
});

/// Stand-alone symbols: digits, punctuation, the "_" literal space.
static OTHER: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("0", "\u{0f20}");
    map.insert("1", "\u{0f21}");
    map.insert("2", "\u{0f22}");
    map.insert("3", "\u{0f23}");
    map.insert("4", "\u{0f24}");
    map.insert("5", "\u{0f25}");
    map.insert("6", "\u{0f26}");
    map.insert("7", "\u{0f27}");
    map.insert("8", "\u{0f28}");
    map.insert("9", "\u{0f29}");
    map.insert(" ", "\u{0f0b}");
    map.insert("*", "\u{0f0c}");
    map.insert("/", "\u{0f0d}");
    map.insert("//", "\u{0f0e}");
    map.insert(";", "\u{0f0f}");
    map.insert("|", "\u{0f11}");
    map.insert("!", "\u{0f08}");
    map.insert(":", "\u{0f14}");
    map.insert("_", " ");
    map.insert("=", "\u{0f34}");
    map.insert("<", "\u{0f3a}");
    map.insert(">", "\u{0f3b}");
    map.insert("(", "\u{0f3c}");
    map.insert(")", "\u{0f3d}");
    map.insert("@", "\u{0f04}");
    map.insert("#", "\u{0f05}");
    map.insert("$", "\u{0f06}");
    map.insert("%", "\u{0f07}");
    map
});

/// Structurally meaningful characters, flagged when they occur out of context.
static SPECIAL: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [".", "+", "-", "~", "^", "?", "`", "]"].into_iter().collect()
});

/// Superscript letter -> set of letters or stacks allowed underneath.
static SUPERSCRIPTS: Lazy<FxHashMap<&'static str, FxHashSet<&'static str>>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert(
        "r",
        [
            "k", "g", "ng", "j", "ny", "t", "d", "n", "b", "m", "ts", "dz", "k+y", "g+y", "m+y",
            "b+w", "ts+w", "g+w",
        ]
        .into_iter()
        .collect(),
    );
    map.insert(
        "l",
        ["k", "g", "ng", "c", "j", "t", "d", "p", "b", "h"]
            .into_iter()
            .collect(),
    );
    map.insert(
        "s",
        [
            "k", "g", "ng", "ny", "t", "d", "n", "p", "b", "m", "ts", "k+y", "g+y", "p+y", "b+y",
            "m+y", "k+r", "g+r", "p+r", "b+r", "m+r", "n+r",
        ]
        .into_iter()
        .collect(),
    );
    map
});

/// Subscript letter -> set of letters or stacks allowed above.
static SUBSCRIPTS: Lazy<FxHashMap<&'static str, FxHashSet<&'static str>>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert(
        "y",
        [
            "k", "kh", "g", "p", "ph", "b", "m", "r+k", "r+g", "r+m", "s+k", "s+g", "s+p", "s+b",
            "s+m",
        ]
        .into_iter()
        .collect(),
    );
    map.insert(
        "r",
        [
            "k", "kh", "g", "t", "th", "d", "n", "p", "ph", "b", "m", "sh", "s", "h", "dz", "s+k",
            "s+g", "s+p", "s+b", "s+m", "s+n",
        ]
        .into_iter()
        .collect(),
    );
    map.insert("l", ["k", "g", "b", "r", "s", "z"].into_iter().collect());
    map.insert(
        "w",
        [
            "k", "kh", "g", "c", "ny", "t", "d", "ts", "tsh", "zh", "z", "r", "l", "sh", "s", "h",
            "g+r", "d+r", "ph+y", "r+g", "r+ts",
        ]
        .into_iter()
        .collect(),
    );
    map
});

/// Prefix letter -> set of consonants or stacks it may precede.
static PREFIXES: Lazy<FxHashMap<&'static str, FxHashSet<&'static str>>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert(
        "g",
        ["c", "ny", "t", "d", "n", "ts", "zh", "z", "y", "sh", "s"]
            .into_iter()
            .collect(),
    );
    map.insert(
        "d",
        [
            "k", "g", "ng", "p", "b", "m", "k+y", "g+y", "p+y", "b+y", "m+y", "k+r", "g+r", "p+r",
            "b+r",
        ]
        .into_iter()
        .collect(),
    );
    map.insert(
        "b",
        [
            "k", "g", "c", "t", "d", "ts", "zh", "z", "sh", "s", "r", "l", "k+y", "g+y", "k+r",
            "g+r", "r+l", "s+l", "r+k", "r+g", "r+ng", "r+j", "r+ny", "r+t", "r+d", "r+n", "r+ts",
            "r+dz", "s+k", "s+g", "s+ng", "s+ny", "s+t", "s+d", "s+n", "s+ts", "r+k+y", "r+g+y",
            "s+k+y", "s+g+y", "s+k+r", "s+g+r", "l+d", "l+t", "k+l", "s+r", "z+l", "s+w",
        ]
        .into_iter()
        .collect(),
    );
    map.insert(
        "m",
        [
            "kh", "g", "ng", "ch", "j", "ny", "th", "d", "n", "tsh", "dz", "kh+y", "g+y", "kh+r",
            "g+r",
        ]
        .into_iter()
        .collect(),
    );
    let achung: FxHashSet<&'static str> = [
        "kh", "g", "ch", "j", "th", "d", "ph", "b", "tsh", "dz", "kh+y", "g+y", "ph+y", "b+y",
        "kh+r", "g+r", "d+r", "ph+r", "b+r",
    ]
    .into_iter()
    .collect();
    map.insert("'", achung.clone());
    map.insert("\u{2018}", achung.clone());
    map.insert("\u{2019}", achung);
    map
});

/// Letters legal in suffix position. Some Sanskrit letters are included
/// because they often close Sanskrit loanword syllables.
static SUFFIXES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "'", "\u{2018}", "\u{2019}", "g", "ng", "d", "n", "b", "m", "r", "l", "s", "N", "T", "-n",
        "-t",
    ]
    .into_iter()
    .collect()
});

/// Secondary suffix -> set of primary suffixes it may follow.
static SUFF2: Lazy<FxHashMap<&'static str, FxHashSet<&'static str>>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("s", ["g", "ng", "b", "m"].into_iter().collect());
    map.insert("d", ["n", "r", "l"].into_iter().collect());
    map
});

/// Root letter index for the fully ambiguous three-consonant syllables.
static AMBIGUOUS_KEY: Lazy<FxHashMap<&'static str, usize>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("dgs", 1);
    map.insert("dms", 1);
    map.insert("'gs", 1);
    map.insert("mngs", 0);
    map.insert("bgs", 0);
    map.insert("dbs", 1);
    map
});

/// Canonical disambiguated spelling for the same syllables.
static AMBIGUOUS_WYLIE: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("dgs", "dgas");
    map.insert("dms", "dmas");
    map.insert("'gs", "'gas");
    map.insert("mngs", "mangs");
    map.insert("bgs", "bags");
    map.insert("dbs", "dbas");
    map
});

/// Unicode top letter -> EWTS.
static TIB_TOP: Lazy<FxHashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert('\u{0f40}', "k");
    map.insert('\u{0f41}', "kh");
    map.insert('\u{0f42}', "g");
    map.insert('\u{0f43}', "g+h");
    map.insert('\u{0f44}', "ng");
    map.insert('\u{0f45}', "c");
    map.insert('\u{0f46}', "ch");
    map.insert('\u{0f47}', "j");
    map.insert('\u{0f49}', "ny");
    map.insert('\u{0f4a}', "T");
    map.insert('\u{0f4b}', "Th");
    map.insert('\u{0f4c}', "D");
    map.insert('\u{0f4d}', "D+h");
    map.insert('\u{0f4e}', "N");
    map.insert('\u{0f4f}', "t");
    map.insert('\u{0f50}', "th");
    map.insert('\u{0f51}', "d");
    map.insert('\u{0f52}', "d+h");
    map.insert('\u{0f53}', "n");
    map.insert('\u{0f54}', "p");
    map.insert('\u{0f55}', "ph");
    map.insert('\u{0f56}', "b");
    map.insert('\u{0f57}', "b+h");
    map.insert('\u{0f58}', "m");
    map.insert('\u{0f59}', "ts");
    map.insert('\u{0f5a}', "tsh");
    map.insert('\u{0f5b}', "dz");
    map.insert('\u{0f5c}', "dz+h");
    map.insert('\u{0f5d}', "w");
    map.insert('\u{0f5e}', "zh");
    map.insert('\u{0f5f}', "z");
    map.insert('\u{0f60}', "'");
    map.insert('\u{0f61}', "y");
    map.insert('\u{0f62}', "r");
    map.insert('\u{0f63}', "l");
    map.insert('\u{0f64}', "sh");
    map.insert('\u{0f65}', "Sh");
    map.insert('\u{0f66}', "s");
    map.insert('\u{0f67}', "h");
    map.insert('\u{0f68}', "a");
    map.insert('\u{0f69}', "k+Sh");
    map.insert('\u{0f6a}', "R");
    map
});

/// Unicode subjoined letter -> EWTS.
static TIB_SUBJOINED: Lazy<FxHashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert('\u{0f90}', "k");
    map.insert('\u{0f91}', "kh");
    map.insert('\u{0f92}', "g");
    map.insert('\u{0f93}', "g+h");
    map.insert('\u{0f94}', "ng");
    map.insert('\u{0f95}', "c");
    map.insert('\u{0f96}', "ch");
    map.insert('\u{0f97}', "j");
    map.insert('\u{0f99}', "ny");
    map.insert('\u{0f9a}', "T");
    map.insert('\u{0f9b}', "Th");
    map.insert('\u{0f9c}', "D");
    map.insert('\u{0f9d}', "D+h");
    map.insert('\u{0f9e}', "N");
    map.insert('\u{0f9f}', "t");
    map.insert('\u{0fa0}', "th");
    map.insert('\u{0fa1}', "d");
    map.insert('\u{0fa2}', "d+h");
    map.insert('\u{0fa3}', "n");
    map.insert('\u{0fa4}', "p");
    map.insert('\u{0fa5}', "ph");
    map.insert('\u{0fa6}', "b");
    map.insert('\u{0fa7}', "b+h");
    map.insert('\u{0fa8}', "m");
    map.insert('\u{0fa9}', "ts");
    map.insert('\u{0faa}', "tsh");
    map.insert('\u{0fab}', "dz");
    map.insert('\u{0fac}', "dz+h");
    map.insert('\u{0fad}', "w");
    map.insert('\u{0fae}', "zh");
    map.insert('\u{0faf}', "z");
    map.insert('\u{0fb0}', "'");
    map.insert('\u{0fb1}', "y");
    map.insert('\u{0fb2}', "r");
    map.insert('\u{0fb3}', "l");
    map.insert('\u{0fb4}', "sh");
    map.insert('\u{0fb5}', "Sh");
    map.insert('\u{0fb6}', "s");
    map.insert('\u{0fb7}', "h");
    map.insert('\u{0fb8}', "a");
    map.insert('\u{0fb9}', "k+Sh");
    map.insert('\u{0fba}', "W");
    map.insert('\u{0fbb}', "Y");
    map.insert('\u{0fbc}', "R");
    map
});

/// Unicode vowel sign -> EWTS. A-chen is a top letter, not a vowel sign, so
/// it is not listed here. The pre-composed "I"/"U" are handled here; the
/// other pre-composed Sanskrit vowels turn into subjoined "r"/"l" and are
/// expanded by a global replace before decomposition.
static TIB_VOWEL: Lazy<FxHashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert('\u{0f71}', "A");
    map.insert('\u{0f72}', "i");
    map.insert('\u{0f73}', "I");
    map.insert('\u{0f74}', "u");
    map.insert('\u{0f75}', "U");
    map.insert('\u{0f7a}', "e");
    map.insert('\u{0f7b}', "ai");
    map.insert('\u{0f7c}', "o");
    map.insert('\u{0f7d}', "au");
    map.insert('\u{0f80}', "-i");
    map
});

/// Short vowel -> its long (Sanskrit) counterpart, for fusing "A"+vowel.
static TIB_VOWEL_LONG: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("i", "I");
    map.insert("u", "U");
    map.insert("-i", "-I");
    map
});

/// Unicode final sign -> EWTS.
static TIB_FINAL_WYLIE: Lazy<FxHashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert('\u{0f7e}', "M");
    map.insert('\u{0f82}', "~M`");
    map.insert('\u{0f83}', "~M");
    map.insert('\u{0f37}', "X");
    map.insert('\u{0f35}', "~X");
    map.insert('\u{0f39}', "^");
    map.insert('\u{0f7f}', "H");
    map.insert('\u{0f84}', "?");
    map
});

/// Unicode final sign -> class key.
static TIB_FINAL_CLASS: Lazy<FxHashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert('\u{0f7e}', "M");
    map.insert('\u{0f82}', "M");
    map.insert('\u{0f83}', "M");
    map.insert('\u{0f37}', "X");
    map.insert('\u{0f35}', "X");
    map.insert('\u{0f39}', "^");
    map.insert('\u{0f7f}', "H");
    map.insert('\u{0f84}', "?");
    map
});

/// Letters that a tsa-phru turns into a different transliteration.
static TIB_CARET: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("ph", "f");
    map.insert("b", "v");
    map
});

/// Unicode stand-alone symbol -> EWTS.
static TIB_OTHER: Lazy<FxHashMap<char, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert(' ', "_");
    map.insert('\u{0f04}', "@");
    map.insert('\u{0f05}', "#");
    map.insert('\u{0f06}', "$");
    map.insert('\u{0f07}', "%");
    map.insert('\u{0f08}', "!");
    map.insert('\u{0f0b}', " ");
    map.insert('\u{0f0c}', "*");
    map.insert('\u{0f0d}', "/");
    map.insert('\u{0f0e}', "//");
    map.insert('\u{0f0f}', ";");
    map.insert('\u{0f11}', "|");
    map.insert('\u{0f14}', ":");
    map.insert('\u{0f20}', "0");
    map.insert('\u{0f21}', "1");
    map.insert('\u{0f22}', "2");
    map.insert('\u{0f23}', "3");
    map.insert('\u{0f24}', "4");
    map.insert('\u{0f25}', "5");
    map.insert('\u{0f26}', "6");
    map.insert('\u{0f27}', "7");
    map.insert('\u{0f28}', "8");
    map.insert('\u{0f29}', "9");
    map.insert('\u{0f34}', "=");
    map.insert('\u{0f3a}', "<");
    map.insert('\u{0f3b}', ">");
    map.insert('\u{0f3c}', "(");
    map.insert('\u{0f3d}', ")");
    map
});

/// Stacked combinations that are standard Tibetan; these render without "+"
/// separators in EWTS output.
static TIB_STACKS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "b+l", "b+r", "b+y", "c+w", "d+r", "d+r+w", "d+w", "dz+r", "g+l", "g+r", "g+r+w", "g+w",
        "g+y", "h+r", "h+w", "k+l", "k+r", "k+w", "k+y", "kh+r", "kh+w", "kh+y", "l+b", "l+c",
        "l+d", "l+g", "l+h", "l+j", "l+k", "l+ng", "l+p", "l+t", "l+w", "m+r", "m+y", "n+r",
        "ny+w", "p+r", "p+y", "ph+r", "ph+y", "ph+y+w", "r+b", "r+d", "r+dz", "r+g", "r+g+w",
        "r+g+y", "r+j", "r+k", "r+k+y", "r+l", "r+m", "r+m+y", "r+n", "r+ng", "r+ny", "r+t",
        "r+ts", "r+ts+w", "r+w", "s+b", "s+b+r", "s+b+y", "s+d", "s+g", "s+g+r", "s+g+y", "s+k",
        "s+k+r", "s+k+y", "s+l", "s+m", "s+m+r", "s+m+y", "s+n", "s+n+r", "s+ng", "s+ny", "s+p",
        "s+p+r", "s+p+y", "s+r", "s+t", "s+ts", "s+w", "sh+r", "sh+w", "t+r", "t+w", "th+r",
        "ts+w", "tsh+w", "z+l", "z+w", "zh+w",
    ]
    .into_iter()
    .collect()
});

/// EWTS tokens longer than one character, for the tokenizer. The automaton
/// built over this list performs the greedy longest-match split.
pub const MULTI_TOKENS: &[&str] = &[
    "-d+h", "dz+h", "-dh", "-sh", "-th", "D+h", "b+h", "d+h", "dzh", "g+h", "tsh", "~M`", "-I",
    "-d", "-i", "-n", "-t", "//", "Dh", "Sh", "Th", "ai", "au", "bh", "ch", "dh", "dz", "gh",
    "kh", "ng", "ny", "ph", "sh", "th", "ts", "zh", "~M", "~X", "\r\n",
];

pub fn consonant(t: &str) -> Option<&'static str> {
    CONSONANT.get(t).copied()
}

pub fn subjoined(t: &str) -> Option<&'static str> {
    SUBJOINED.get(t).copied()
}

pub fn vowel(t: &str) -> Option<&'static str> {
    VOWEL.get(t).copied()
}

pub fn final_uni(t: &str) -> Option<&'static str> {
    FINAL_UNI.get(t).copied()
}

pub fn final_class(t: &str) -> Option<&'static str> {
    FINAL_CLASS.get(t).copied()
}

pub fn other(t: &str) -> Option<&'static str> {
    OTHER.get(t).copied()
}

pub fn is_special(t: &str) -> bool {
    SPECIAL.contains(t)
}

pub fn is_superscript(t: &str) -> bool {
    SUPERSCRIPTS.contains_key(t)
}

pub fn superscript(sup: &str, below: &str) -> bool {
    SUPERSCRIPTS.get(sup).is_some_and(|set| set.contains(below))
}

pub fn is_subscript(t: &str) -> bool {
    SUBSCRIPTS.contains_key(t)
}

pub fn subscript(sub: &str, above: &str) -> bool {
    SUBSCRIPTS.get(sub).is_some_and(|set| set.contains(above))
}

pub fn is_prefix(t: &str) -> bool {
    PREFIXES.contains_key(t)
}

pub fn prefix(pref: &str, after: &str) -> bool {
    PREFIXES.get(pref).is_some_and(|set| set.contains(after))
}

pub fn is_suffix(t: &str) -> bool {
    SUFFIXES.contains(t)
}

pub fn is_suff2(t: &str) -> bool {
    SUFF2.contains_key(t)
}

pub fn suff2(suff: &str, before: &str) -> bool {
    SUFF2.get(suff).is_some_and(|set| set.contains(before))
}

pub fn ambiguous_key(syll: &str) -> Option<usize> {
    AMBIGUOUS_KEY.get(syll).copied()
}

pub fn ambiguous_wylie(syll: &str) -> Option<&'static str> {
    AMBIGUOUS_WYLIE.get(syll).copied()
}

pub fn tib_top(c: char) -> Option<&'static str> {
    TIB_TOP.get(&c).copied()
}

pub fn tib_subjoined(c: char) -> Option<&'static str> {
    TIB_SUBJOINED.get(&c).copied()
}

pub fn tib_vowel(c: char) -> Option<&'static str> {
    TIB_VOWEL.get(&c).copied()
}

pub fn tib_vowel_long(v: &str) -> Option<&'static str> {
    TIB_VOWEL_LONG.get(v).copied()
}

pub fn tib_final_wylie(c: char) -> Option<&'static str> {
    TIB_FINAL_WYLIE.get(&c).copied()
}

pub fn tib_final_class(c: char) -> Option<&'static str> {
    TIB_FINAL_CLASS.get(&c).copied()
}

pub fn tib_caret(t: &str) -> Option<&'static str> {
    TIB_CARET.get(t).copied()
}

pub fn tib_other(c: char) -> Option<&'static str> {
    TIB_OTHER.get(&c).copied()
}

pub fn tib_stack(s: &str) -> bool {
    TIB_STACKS.contains(s)
}
