//! Name-based visibility filtering for directory listings

use glob::Pattern;

use super::config::WalkerConfig;

/// Names starting with this marker are hidden unless `show_hidden` is set.
pub const HIDDEN_MARKER: char = '.';

/// Decides whether an entry name is visible.
///
/// Ignore patterns are compiled once up front. A pattern that is not valid
/// glob syntax still matches names equal to it.
#[derive(Debug, Clone)]
pub struct NameFilter {
    show_hidden: bool,
    literals: Vec<String>,
    patterns: Vec<Pattern>,
}

impl NameFilter {
    pub fn new(show_hidden: bool, ignore_patterns: &[String]) -> Self {
        let patterns = ignore_patterns
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect();
        Self {
            show_hidden,
            literals: ignore_patterns.to_vec(),
            patterns,
        }
    }

    pub fn from_config(config: &WalkerConfig) -> Self {
        Self::new(config.show_hidden, &config.ignore_patterns)
    }

    /// Check if an entry with this name should be listed.
    pub fn is_visible(&self, name: &str) -> bool {
        !(self.is_hidden(name) || self.is_ignored(name))
    }

    fn is_hidden(&self, name: &str) -> bool {
        !self.show_hidden && name.starts_with(HIDDEN_MARKER)
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.literals.iter().any(|l| l == name) || self.patterns.iter().any(|p| p.matches(name))
    }
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::new(false, &[])
    }
}
