//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and resolved preferences.
    ///
    /// # Arguments
    /// * `format_flag` - Value of `--format` if provided
    /// * `no_color` - `--no-color` was passed or config disables color
    /// * `ascii` - `--ascii` was passed or config requests ASCII
    pub fn from_env(format_flag: Option<&str>, no_color: bool, ascii: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        // Resolve color: disabled if NO_COLOR env, --no-color, or TERM=dumb
        let color = is_tty && !no_color && !no_color_env && !term_is_dumb;

        let unicode = !ascii;
        let width = terminal_width().unwrap_or(80);
        let mode = OutputMode::resolve(format_flag, is_tty, term_is_dumb);

        Self {
            is_tty,
            color,
            unicode,
            width,
            mode,
        }
    }

    /// Context for scripted output: no color, ASCII, plain mode.
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    /// Check if interactive terminal prompts are possible.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Get terminal width, falling back to 80.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_env(None, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(None, true, false);
        assert!(!ctx.color);
    }

    #[test]
    fn test_plain_flag_forces_plain() {
        let ctx = UiContext::from_env(Some("plain"), false, false);
        assert_eq!(ctx.mode, OutputMode::Plain);
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(None, false, false);
        assert!(ctx.width > 0);
    }
}
