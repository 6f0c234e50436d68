//! Output mode routing logic.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and table borders (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--format plain` forces plain
    /// 2. `--format pretty` forces pretty
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty only when stdout is TTY
    pub fn resolve(format_flag: Option<&str>, is_tty: bool, term_is_dumb: bool) -> Self {
        match format_flag {
            Some("plain") => return Self::Plain,
            Some("pretty") => return Self::Pretty,
            _ => {}
        }

        if term_is_dumb {
            return Self::Plain;
        }

        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_forces() {
        let mode = OutputMode::resolve(Some("plain"), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_pretty_forces_even_without_tty() {
        let mode = OutputMode::resolve(Some("pretty"), false, true);
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(None, true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        let mode = OutputMode::resolve(None, true, false);
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_non_tty_gets_plain() {
        let mode = OutputMode::resolve(None, false, false);
        assert_eq!(mode, OutputMode::Plain);
    }
}
