//! Output configuration types

use termcolor::ColorChoice;

use super::style::TreeStyle;

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub style: TreeStyle,
}

impl OutputConfig {
    /// The termcolor choice for stdout. Colour has already been decided, so
    /// termcolor must not second-guess it.
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}
