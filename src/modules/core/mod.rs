use thiserror::Error;

// Core Module
//
// Shared plumbing for both conversion directions: the option set fixed at
// construction time, and the append-only warning buffer that collects
// orthographic diagnostics as a conversion proceeds.

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("check_strict requires check")]
    StrictWithoutCheck,
}

/// Conversion options, immutable once the converter is built.
///
/// - `check`: enable orthographic warnings (invalid prefixes, suffixes,
///   stacking combinations, and the ambiguous-syllable suggestions).
/// - `check_strict`: validate superscript/prefix/subscript rules against the
///   whole neighboring stack rather than the single next letter. Requires
///   `check`.
/// - `print_warnings`: echo each warning through `log::warn!` as it accrues,
///   in addition to collecting it in the result.
/// - `fix_spacing`: strip leading whitespace, collapse runs of spaces to one
///   tsek, and discard leading spaces after a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WylieOptions {
    pub check: bool,
    pub check_strict: bool,
    pub print_warnings: bool,
    pub fix_spacing: bool,
}

impl Default for WylieOptions {
    fn default() -> Self {
        Self {
            check: true,
            check_strict: true,
            print_warnings: false,
            fix_spacing: true,
        }
    }
}

/// Append-only warning buffer. Warning order follows input order.
#[derive(Debug, Default)]
pub struct WarningSink {
    warnings: Vec<String>,
    echo: bool,
}

impl WarningSink {
    pub fn new(echo: bool) -> Self {
        Self {
            warnings: Vec::new(),
            echo,
        }
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        if self.echo {
            log::warn!("{}", msg);
        }
        self.warnings.push(msg);
    }

    /// Warning tied to a 1-indexed input line.
    pub fn warn_line(&mut self, line: usize, msg: impl AsRef<str>) {
        self.warn(format!("line {}: {}", line, msg.as_ref()));
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = WylieOptions::default();
        assert!(opts.check);
        assert!(opts.check_strict);
        assert!(!opts.print_warnings);
        assert!(opts.fix_spacing);
    }

    #[test]
    fn sink_keeps_input_order() {
        let mut sink = WarningSink::new(false);
        sink.warn("first");
        sink.warn_line(3, "second");
        assert_eq!(
            sink.into_warnings(),
            vec!["first".to_string(), "line 3: second".to_string()]
        );
    }
}
