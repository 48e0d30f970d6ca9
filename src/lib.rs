//! # Wylie: Tibetan Unicode ↔ EWTS conversion
//!
//! A bidirectional converter between Tibetan Unicode text (the U+0F00–U+0FFF
//! block) and the Extended Wylie Transliteration Scheme (EWTS), the ASCII
//! romanization used by Tibetan scholars.
//!
//! The hard part in both directions is the syllable (tsekbar) analyzer. Each
//! syllable is a small grammar of its own: an optional prefix consonant, a
//! root stack (possibly with a superscript, up to two subscripts and a
//! wazur), a vowel, and up to two suffix consonants, with orthographic rules
//! governing which letters combine. Going to Unicode the analyzer assembles
//! consonant stacks and validates that structure; coming back it decides
//! which lone consonants are prefixes or suffixes (and so elide the implicit
//! "a" vowel) and inserts "." disambiguators where a prefix would otherwise
//! fuse with the root.
//!
//! Orthographic problems never abort a conversion: output is always
//! produced, and every issue is reported as a warning alongside it.
//!
//! ## Quick Start
//!
//! ```rust
//! use wylie::Wylie;
//!
//! let converter = Wylie::new();
//! let result = converter.from_wylie("sems can thams cad");
//! assert_eq!(result.output, "སེམས་ཅན་ཐམས་ཅད");
//! assert!(result.warnings.is_empty());
//!
//! let back = converter.to_wylie("ཕྱོགས་", true);
//! assert_eq!(back.output, "phyogs ");
//! ```

pub mod modules;

use modules::core::WarningSink;
pub use modules::core::{OptionsError, WylieOptions};

/// The output of one conversion call, with any warnings that accrued while
/// producing it. Warnings are ordered by input position and carry a
/// `line N:` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub output: String,
    pub warnings: Vec<String>,
}

/// The converter. Cheap to create; the linguistic tables are built once per
/// process and shared by every instance, so a `Wylie` is nothing more than
/// its option set and can be used freely from multiple threads.
#[derive(Debug, Clone, Default)]
pub struct Wylie {
    opts: WylieOptions,
}

impl Wylie {
    /// A converter with the default options: checking on, strict checking
    /// on, no warning echo, spacing fixes on.
    pub fn new() -> Self {
        Self {
            opts: WylieOptions::default(),
        }
    }

    /// A converter with explicit options. `check_strict` requires `check`.
    pub fn with_options(opts: WylieOptions) -> Result<Self, OptionsError> {
        if opts.check_strict && !opts.check {
            return Err(OptionsError::StrictWithoutCheck);
        }
        Ok(Self { opts })
    }

    pub fn options(&self) -> &WylieOptions {
        &self.opts
    }

    /// Convert EWTS transliteration to Tibetan Unicode.
    pub fn from_wylie(&self, input: &str) -> ConversionResult {
        let mut sink = WarningSink::new(self.opts.print_warnings);
        let output = modules::from_ewts::convert(input, &self.opts, &mut sink);
        ConversionResult {
            output,
            warnings: sink.into_warnings(),
        }
    }

    /// Convert Tibetan Unicode to EWTS transliteration.
    ///
    /// With `escape`, codepoints that have no EWTS form are emitted inside
    /// `[...]` brackets (Tibetan-block codepoints as `\uXXXX` escapes, the
    /// rest verbatim); without it, non-Tibetan content passes through
    /// unchanged.
    pub fn to_wylie(&self, input: &str, escape: bool) -> ConversionResult {
        let mut sink = WarningSink::new(self.opts.print_warnings);
        let output = modules::to_ewts::convert(input, escape, &mut sink);
        ConversionResult {
            output,
            warnings: sink.into_warnings(),
        }
    }
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
