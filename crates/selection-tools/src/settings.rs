//! Per-invocation settings.

/// Default tab size (in columns) used when the host has no usable `tab_size` setting.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Indentation settings resolved once at the start of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentSettings {
    tab_size: usize,
}

impl IndentSettings {
    /// Create settings with an explicit tab size. Zero falls back to [`DEFAULT_TAB_SIZE`].
    pub fn new(tab_size: usize) -> Self {
        Self::resolve(Some(tab_size))
    }

    /// Resolve a raw host setting. `None` and `Some(0)` use [`DEFAULT_TAB_SIZE`].
    pub fn resolve(raw_tab_size: Option<usize>) -> Self {
        let tab_size = match raw_tab_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_TAB_SIZE,
        };
        Self { tab_size }
    }

    /// Tab size in columns (always greater than 0).
    pub fn tab_size(&self) -> usize {
        self.tab_size
    }
}

impl Default for IndentSettings {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}
